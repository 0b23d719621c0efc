// Named focus-block presets and their JSON file format.
//
// A presets file holds one collection:
//
//   { "presets_name": "...", "presets": [ { "preset_name": "...", ... } ] }
//
// Files are checked against the schema in `validate` before being
// deserialized, so a hand-edited file with a wrong type is reported with
// the offending preset and key instead of a bare serde message.

use crate::color::Rgb;
use crate::geometry::{Rect, Size};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_COLLECTION_NAME: &str = "Untitled";
pub const DEFAULT_PRESET_NAME: &str = "default";
pub const DEFAULT_ALPHA: u8 = 150;

/// Block coordinates are kept within this many pixels of the origin
pub const MAX_COORDINATE: i32 = 1 << 20;

#[derive(Debug, thiserror::Error)]
pub enum PresetError {
    #[error("could not access presets file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("presets file {path} is not valid JSON: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("the file does not contain valid presets: {reason}")]
    Invalid { reason: String },
    #[error("a preset named \"{0}\" already exists")]
    Duplicate(String),
    #[error("a preset name cannot be empty")]
    EmptyName,
    #[error("cannot delete the last preset")]
    LastPreset,
    #[error("no preset at index {0}")]
    OutOfRange(usize),
}

impl PresetError {
    /// Title of the message box reporting this error
    pub fn title(&self) -> &'static str {
        match self {
            PresetError::Invalid { .. } => "Import Failed",
            PresetError::Duplicate(_) => "Duplicate Item",
            PresetError::LastPreset => "Last Preset remains",
            PresetError::EmptyName => "Invalid Name",
            PresetError::Io { .. } | PresetError::Json { .. } | PresetError::OutOfRange(_) => {
                "Error"
            }
        }
    }

    /// Whether the failure is a broken or unreadable file rather than a user mistake
    pub fn is_critical(&self) -> bool {
        self.title() == "Error"
    }
}

fn invalid(reason: impl Into<String>) -> PresetError {
    PresetError::Invalid {
        reason: reason.into(),
    }
}

/// One saved focus-block layout. Geometry is always stored in pixels;
/// `xy_abs` / `wh_abs` only record which unit the panel shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    pub preset_name: String,
    #[serde(deserialize_with = "deserialize_alpha")]
    pub alpha: u8,
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    pub xy_abs: bool,
    pub wh_abs: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Files written by hand or by older builds may store alpha as a float
fn deserialize_alpha<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = f64::deserialize(deserializer)?;
    Ok(raw.round().clamp(0.0, 255.0) as u8)
}

impl Preset {
    pub fn default_for_screen(name: &str, screen: Option<Size>) -> Self {
        let (x, y, w, h) = match screen.filter(|s| !s.is_empty()) {
            Some(s) => (
                s.width / 4,
                s.height / 4,
                s.width / 2,
                s.height / 2,
            ),
            None => (100, 100, 400, 400),
        };
        Self {
            preset_name: name.to_string(),
            alpha: DEFAULT_ALPHA,
            x: x as f64,
            y: y as f64,
            w: w as f64,
            h: h as f64,
            xy_abs: true,
            wh_abs: true,
            color: None,
        }
    }

    /// Rounded pixel rect, bounded to `MAX_COORDINATE` so edge sums stay in range
    pub fn rect(&self) -> Rect {
        let limit = MAX_COORDINATE as f64;
        let pos = |v: f64| v.round().clamp(-limit, limit) as i32;
        let len = |v: f64| v.round().clamp(0.0, limit) as i32;
        Rect::new(pos(self.x), pos(self.y), len(self.w), len(self.h))
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.x = rect.x as f64;
        self.y = rect.y as f64;
        self.w = rect.width as f64;
        self.h = rect.height as f64;
    }

    /// Falls back to black when no (or an unreadable) color is stored
    pub fn color(&self) -> Rgb {
        self.color
            .as_deref()
            .and_then(|hex| Rgb::from_hex(hex).ok())
            .unwrap_or(Rgb::BLACK)
    }

    pub fn set_color(&mut self, color: Rgb) {
        self.color = Some(color.to_hex());
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresetCollection {
    pub presets_name: String,
    pub presets: Vec<Preset>,
}

impl PresetCollection {
    pub fn new_default(screen: Option<Size>) -> Self {
        Self {
            presets_name: DEFAULT_COLLECTION_NAME.to_string(),
            presets: vec![Preset::default_for_screen(DEFAULT_PRESET_NAME, screen)],
        }
    }

    /// Read, schema-check and decode a presets file
    pub fn load(path: &Path) -> Result<Self, PresetError> {
        let data = fs::read_to_string(path).map_err(|source| PresetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let value: Value = serde_json::from_str(&data).map_err(|source| PresetError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        validate(&value)?;
        let collection: Self =
            serde_json::from_value(value).map_err(|e| invalid(e.to_string()))?;
        tracing::info!(
            "Loaded {} preset(s) from {}",
            collection.presets.len(),
            path.display()
        );
        Ok(collection)
    }

    /// Write as pretty JSON with four-space indentation
    pub fn save(&self, path: &Path) -> Result<(), PresetError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| PresetError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser).map_err(|source| PresetError::Json {
            path: path.to_path_buf(),
            source,
        })?;

        fs::write(path, buf).map_err(|source| PresetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!("Saved {} preset(s) to {}", self.presets.len(), path.display());
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn names(&self) -> Vec<&str> {
        self.presets.iter().map(|p| p.preset_name.as_str()).collect()
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.presets.iter().any(|p| p.preset_name == name)
    }

    fn checked_name(&self, name: &str) -> Result<String, PresetError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(PresetError::EmptyName);
        }
        if self.contains_name(name) {
            return Err(PresetError::Duplicate(name.to_string()));
        }
        Ok(name.to_string())
    }

    /// Append a default preset; returns its index
    pub fn add(&mut self, name: &str, screen: Option<Size>) -> Result<usize, PresetError> {
        let name = self.checked_name(name)?;
        self.presets.push(Preset::default_for_screen(&name, screen));
        Ok(self.presets.len() - 1)
    }

    pub fn rename(&mut self, index: usize, name: &str) -> Result<(), PresetError> {
        if index >= self.presets.len() {
            return Err(PresetError::OutOfRange(index));
        }
        let name = self.checked_name(name)?;
        self.presets[index].preset_name = name;
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<Preset, PresetError> {
        if index >= self.presets.len() {
            return Err(PresetError::OutOfRange(index));
        }
        if self.presets.len() <= 1 {
            return Err(PresetError::LastPreset);
        }
        Ok(self.presets.remove(index))
    }
}

/// Schema check for a decoded presets document
pub fn validate(value: &Value) -> Result<(), PresetError> {
    let root = value
        .as_object()
        .ok_or_else(|| invalid("top level must be an object"))?;

    if !root.get("presets_name").is_some_and(Value::is_string) {
        return Err(invalid("\"presets_name\" must be a string"));
    }

    let presets = root
        .get("presets")
        .and_then(Value::as_array)
        .ok_or_else(|| invalid("\"presets\" must be an array"))?;
    if presets.is_empty() {
        return Err(invalid("\"presets\" must contain at least one preset"));
    }

    for (i, preset) in presets.iter().enumerate() {
        let obj = preset
            .as_object()
            .ok_or_else(|| invalid(format!("preset {i} must be an object")))?;

        let expect = |key: &str, check: fn(&Value) -> bool, kind: &str| {
            if obj.get(key).is_some_and(check) {
                Ok(())
            } else {
                Err(invalid(format!("preset {i}: \"{key}\" must be {kind}")))
            }
        };

        expect("preset_name", Value::is_string, "a string")?;
        for key in ["alpha", "x", "y", "w", "h"] {
            expect(key, Value::is_number, "a number")?;
        }
        for key in ["xy_abs", "wh_abs"] {
            expect(key, Value::is_boolean, "a boolean")?;
        }

        if let Some(color) = obj.get("color") {
            let hex = color
                .as_str()
                .ok_or_else(|| invalid(format!("preset {i}: \"color\" must be a string")))?;
            Rgb::from_hex(hex).map_err(|e| invalid(format!("preset {i}: {e}")))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    const SCREEN: Size = Size::new(1920, 1080);

    fn sample() -> Value {
        json!({
            "presets_name": "Reading",
            "presets": [
                {
                    "preset_name": "center",
                    "alpha": 150,
                    "x": 480, "y": 270, "w": 960, "h": 540,
                    "xy_abs": true, "wh_abs": false,
                    "color": "#102030"
                },
                {
                    "preset_name": "strip",
                    "alpha": 99.6,
                    "x": 0.0, "y": 500.5, "w": 1920, "h": 80,
                    "xy_abs": false, "wh_abs": true
                }
            ]
        })
    }

    #[test]
    fn default_preset_is_centered_half_screen() {
        let p = Preset::default_for_screen("default", Some(SCREEN));
        assert_eq!(p.rect(), Rect::new(480, 270, 960, 540));
        assert_eq!(p.alpha, 150);
        assert!(p.xy_abs && p.wh_abs);
        assert_eq!(p.color(), Rgb::BLACK);
    }

    #[test]
    fn default_preset_without_screen_uses_fixed_box() {
        let p = Preset::default_for_screen("x", None);
        assert_eq!(p.rect(), Rect::new(100, 100, 400, 400));
        let p = Preset::default_for_screen("x", Some(Size::new(0, 0)));
        assert_eq!(p.rect(), Rect::new(100, 100, 400, 400));
    }

    #[test]
    fn sample_passes_validation_and_decodes() {
        let value = sample();
        validate(&value).unwrap();
        let c: PresetCollection = serde_json::from_value(value).unwrap();
        assert_eq!(c.presets_name, "Reading");
        assert_eq!(c.names(), vec!["center", "strip"]);
        assert_eq!(c.presets[0].color(), Rgb::new(0x10, 0x20, 0x30));
        assert_eq!(c.presets[1].alpha, 100);
        assert_eq!(c.presets[1].rect(), Rect::new(0, 501, 1920, 80));
    }

    #[test]
    fn validation_rejects_wrong_shapes() {
        let cases: Vec<(Value, &str)> = vec![
            (json!([]), "top level"),
            (json!({"presets": []}), "presets_name"),
            (json!({"presets_name": 3, "presets": []}), "presets_name"),
            (json!({"presets_name": "a"}), "array"),
            (json!({"presets_name": "a", "presets": []}), "at least one"),
            (json!({"presets_name": "a", "presets": [1]}), "preset 0 must be an object"),
        ];
        for (value, needle) in cases {
            let err = validate(&value).unwrap_err().to_string();
            assert!(err.contains(needle), "{err} should mention {needle}");
        }
    }

    #[test]
    fn validation_names_bad_preset_field() {
        let mut value = sample();
        value["presets"][1]["w"] = json!("wide");
        let err = validate(&value).unwrap_err().to_string();
        assert!(err.contains("preset 1") && err.contains("\"w\""), "{err}");

        let mut value = sample();
        value["presets"][0]
            .as_object_mut()
            .unwrap()
            .remove("xy_abs");
        assert!(validate(&value).unwrap_err().to_string().contains("xy_abs"));

        let mut value = sample();
        value["presets"][0]["color"] = json!("blue");
        assert!(validate(&value).unwrap_err().to_string().contains("preset 0"));
    }

    #[test]
    fn save_then_load_preserves_collection() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("presets.json");
        let c: PresetCollection = serde_json::from_value(sample()).unwrap();

        c.save(&path).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("\n    \"presets_name\""), "four-space indent");
        assert!(!text.contains("\"color\": null"));

        assert_eq!(PresetCollection::load(&path).unwrap(), c);
    }

    #[test]
    fn load_reports_io_json_and_schema_failures() {
        let dir = tempdir().unwrap();

        let missing = dir.path().join("missing.json");
        assert!(matches!(
            PresetCollection::load(&missing),
            Err(PresetError::Io { .. })
        ));

        let garbage = dir.path().join("garbage.json");
        fs::write(&garbage, "{ not json").unwrap();
        assert!(matches!(
            PresetCollection::load(&garbage),
            Err(PresetError::Json { .. })
        ));

        let wrong = dir.path().join("wrong.json");
        fs::write(&wrong, r#"{"presets_name": "a", "presets": [{"preset_name": 1}]}"#).unwrap();
        assert!(matches!(
            PresetCollection::load(&wrong),
            Err(PresetError::Invalid { .. })
        ));
    }

    #[test]
    fn add_trims_and_rejects_duplicates() {
        let mut c = PresetCollection::new_default(Some(SCREEN));
        assert_eq!(c.add("  focus  ", Some(SCREEN)).unwrap(), 1);
        assert_eq!(c.names(), vec!["default", "focus"]);
        assert!(matches!(c.add("focus", None), Err(PresetError::Duplicate(_))));
        assert!(matches!(c.add("   ", None), Err(PresetError::EmptyName)));
    }

    #[test]
    fn rename_checks_index_and_name() {
        let mut c = PresetCollection::new_default(None);
        c.add("second", None).unwrap();
        c.rename(0, " first ").unwrap();
        assert_eq!(c.names(), vec!["first", "second"]);
        assert!(matches!(c.rename(0, "second"), Err(PresetError::Duplicate(_))));
        assert!(matches!(c.rename(5, "x"), Err(PresetError::OutOfRange(5))));
    }

    #[test]
    fn last_preset_cannot_be_removed() {
        let mut c = PresetCollection::new_default(None);
        assert!(matches!(c.remove(0), Err(PresetError::LastPreset)));
        c.add("b", None).unwrap();
        assert_eq!(c.remove(0).unwrap().preset_name, "default");
        assert_eq!(c.names(), vec!["b"]);
    }

    #[test]
    fn unparsable_file_is_a_critical_error_not_an_import_failure() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();
        let err = PresetCollection::load(&path).unwrap_err();
        assert!(matches!(err, PresetError::Json { .. }));
        assert_eq!(err.title(), "Error");
        assert!(err.is_critical());

        fs::write(&path, r#"{"presets_name": "x", "presets": []}"#).unwrap();
        let err = PresetCollection::load(&path).unwrap_err();
        assert_eq!(err.title(), "Import Failed");
        assert!(!err.is_critical());
        assert_eq!(PresetError::LastPreset.title(), "Last Preset remains");
    }
}
