// Settings panel model.
//
// Owns the preset collection and everything the settings window renders:
// the selected preset, the unit each axis is shown in, focus-block
// visibility and adjustment mode. The Win32 layer only translates clicks
// into calls on this type and repaints from it.

use crate::color::Rgb;
use crate::geometry::{Rect, Size};
use crate::presets::{Preset, PresetCollection, PresetError};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Position,
    Size,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Pixels,
    Percent,
}

impl Unit {
    pub fn suffix(self) -> &'static str {
        match self {
            Unit::Pixels => "px",
            Unit::Percent => "%",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    X,
    Y,
    W,
    H,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::X, Field::Y, Field::W, Field::H];

    pub fn axis(self) -> Axis {
        match self {
            Field::X | Field::Y => Axis::Position,
            Field::W | Field::H => Axis::Size,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::X => "X",
            Field::Y => "Y",
            Field::W => "Width",
            Field::H => "Height",
        }
    }

    /// Screen dimension a percentage of this field refers to
    fn extent(self, screen: Size) -> i32 {
        match self {
            Field::X | Field::W => screen.width,
            Field::Y | Field::H => screen.height,
        }
    }

    fn read(self, p: &Preset) -> f64 {
        match self {
            Field::X => p.x,
            Field::Y => p.y,
            Field::W => p.w,
            Field::H => p.h,
        }
    }

    fn write(self, p: &mut Preset, value: f64) {
        match self {
            Field::X => p.x = value,
            Field::Y => p.y = value,
            Field::W => p.w = value,
            Field::H => p.h = value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved(PathBuf),
    /// Nothing is bound yet; the caller should ask where to export
    NeedsPath,
}

#[derive(Debug, Clone)]
pub struct SettingsModel {
    collection: PresetCollection,
    current: usize,
    bound_path: Option<PathBuf>,
    screen: Size,
    pub show_block: bool,
    pub adjust_mode: bool,
}

impl SettingsModel {
    pub fn new(collection: PresetCollection, bound_path: Option<PathBuf>, screen: Size) -> Self {
        Self {
            collection,
            current: 0,
            bound_path,
            screen,
            show_block: true,
            adjust_mode: false,
        }
    }

    /// Start from the bound presets file, or defaults when it cannot be read
    pub fn open(bound_path: Option<PathBuf>, screen: Size) -> Self {
        if let Some(path) = bound_path {
            match PresetCollection::load(&path) {
                Ok(collection) => return Self::new(collection, Some(path), screen),
                Err(e) => tracing::warn!("Could not restore presets: {e}; using defaults"),
            }
        }
        Self::new(PresetCollection::new_default(Some(screen)), None, screen)
    }

    pub fn collection(&self) -> &PresetCollection {
        &self.collection
    }

    pub fn collection_name(&self) -> &str {
        &self.collection.presets_name
    }

    pub fn screen(&self) -> Size {
        self.screen
    }

    /// Follow a display change. Stored pixels are kept; percent views and
    /// ranges are recomputed against the new size.
    pub fn set_screen(&mut self, screen: Size) {
        self.screen = screen;
    }

    pub fn bound_path(&self) -> Option<&Path> {
        self.bound_path.as_deref()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> &Preset {
        // `current` is kept in range by every mutation below
        &self.collection.presets[self.current]
    }

    pub fn current_mut(&mut self) -> &mut Preset {
        &mut self.collection.presets[self.current]
    }

    pub fn select(&mut self, index: usize) -> Result<(), PresetError> {
        if index >= self.collection.len() {
            return Err(PresetError::OutOfRange(index));
        }
        self.current = index;
        Ok(())
    }

    /// Step the selection by `delta`, wrapping around
    pub fn select_relative(&mut self, delta: isize) {
        let len = self.collection.len() as isize;
        self.current = (self.current as isize + delta).rem_euclid(len) as usize;
    }

    // ── Units and geometry ──────────────────────────────────────────────────

    pub fn unit(&self, axis: Axis) -> Unit {
        let absolute = match axis {
            Axis::Position => self.current().xy_abs,
            Axis::Size => self.current().wh_abs,
        };
        if absolute {
            Unit::Pixels
        } else {
            Unit::Percent
        }
    }

    pub fn set_unit(&mut self, axis: Axis, unit: Unit) {
        let absolute = unit == Unit::Pixels;
        match axis {
            Axis::Position => self.current_mut().xy_abs = absolute,
            Axis::Size => self.current_mut().wh_abs = absolute,
        }
    }

    pub fn display_value(&self, field: Field) -> f64 {
        let px = field.read(self.current());
        match self.unit(field.axis()) {
            Unit::Pixels => px,
            Unit::Percent => {
                let extent = field.extent(self.screen);
                if extent <= 0 {
                    0.0
                } else {
                    px / extent as f64 * 100.0
                }
            }
        }
    }

    pub fn display_range(&self, field: Field) -> (f64, f64) {
        match self.unit(field.axis()) {
            Unit::Pixels => (0.0, field.extent(self.screen).max(0) as f64),
            Unit::Percent => (0.0, 100.0),
        }
    }

    /// Store a value typed in the panel's current unit, clamped to its range
    pub fn set_display_value(&mut self, field: Field, value: f64) {
        let (lo, hi) = self.display_range(field);
        let value = value.max(lo).min(hi);
        let px = match self.unit(field.axis()) {
            Unit::Pixels => value,
            Unit::Percent => field.extent(self.screen) as f64 * value / 100.0,
        };
        field.write(self.current_mut(), px);
    }

    pub fn step(&mut self, field: Field, delta: f64) {
        let value = self.display_value(field) + delta;
        self.set_display_value(field, value);
    }

    pub fn focus_block(&self) -> Rect {
        self.current().rect()
    }

    /// Take over a block the user dragged on the overlay
    pub fn sync_from_block(&mut self, rect: Rect) {
        self.current_mut().set_rect(rect);
    }

    // ── Appearance ──────────────────────────────────────────────────────────

    pub fn set_alpha(&mut self, alpha: u8) {
        self.current_mut().alpha = alpha;
    }

    pub fn set_color(&mut self, color: Rgb) {
        self.current_mut().set_color(color);
    }

    pub fn overlay_color(&self) -> (Rgb, u8) {
        (self.current().color(), self.current().alpha)
    }

    // ── Collection management ───────────────────────────────────────────────

    /// Reset to the default collection and forget the bound file
    pub fn create_collection(&mut self) {
        self.collection = PresetCollection::new_default(Some(self.screen));
        self.current = 0;
        self.bound_path = None;
    }

    pub fn rename_collection(&mut self, name: &str) -> Result<(), PresetError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(PresetError::EmptyName);
        }
        self.collection.presets_name = name.to_string();
        Ok(())
    }

    pub fn add_preset(&mut self, name: &str) -> Result<(), PresetError> {
        self.current = self.collection.add(name, Some(self.screen))?;
        Ok(())
    }

    pub fn rename_preset(&mut self, name: &str) -> Result<(), PresetError> {
        self.collection.rename(self.current, name)
    }

    pub fn delete_preset(&mut self) -> Result<Preset, PresetError> {
        let removed = self.collection.remove(self.current)?;
        self.current = self.current.min(self.collection.len() - 1);
        Ok(removed)
    }

    pub fn import(&mut self, path: &Path) -> Result<(), PresetError> {
        self.collection = PresetCollection::load(path)?;
        self.current = 0;
        self.bound_path = Some(path.to_path_buf());
        Ok(())
    }

    pub fn save(&self) -> Result<SaveOutcome, PresetError> {
        match &self.bound_path {
            Some(path) => {
                self.collection.save(path)?;
                Ok(SaveOutcome::Saved(path.clone()))
            }
            None => Ok(SaveOutcome::NeedsPath),
        }
    }

    /// Write a copy to `path`. An unbound collection becomes bound to it.
    pub fn export(&mut self, path: &Path) -> Result<(), PresetError> {
        self.collection.save(path)?;
        if self.bound_path.is_none() {
            self.bound_path = Some(path.to_path_buf());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const SCREEN: Size = Size::new(2000, 1000);

    fn model() -> SettingsModel {
        SettingsModel::new(PresetCollection::new_default(Some(SCREEN)), None, SCREEN)
    }

    #[test]
    fn percent_view_converts_against_matching_dimension() {
        let mut m = model();
        m.set_unit(Axis::Position, Unit::Percent);
        assert_eq!(m.unit(Axis::Position), Unit::Percent);
        assert!(!m.current().xy_abs);
        assert_eq!(m.display_value(Field::X), 25.0);
        assert_eq!(m.display_value(Field::Y), 25.0);
        // size axis still in pixels
        assert_eq!(m.display_value(Field::W), 1000.0);

        m.set_display_value(Field::Y, 10.0);
        assert_eq!(m.current().y, 100.0);
        m.set_display_value(Field::X, 150.0);
        assert_eq!(m.current().x, 2000.0);
    }

    #[test]
    fn pixel_values_clamp_to_screen() {
        let mut m = model();
        m.set_display_value(Field::H, 5000.0);
        assert_eq!(m.current().h, 1000.0);
        m.set_display_value(Field::W, -3.0);
        assert_eq!(m.current().w, 0.0);
        assert_eq!(m.display_range(Field::W), (0.0, 2000.0));
    }

    #[test]
    fn step_moves_in_display_unit() {
        let mut m = model();
        m.step(Field::X, 10.0);
        assert_eq!(m.current().x, 510.0);
        m.set_unit(Axis::Position, Unit::Percent);
        m.step(Field::X, 1.0);
        assert!((m.current().x - 530.0).abs() < 1e-9);
    }

    #[test]
    fn zero_sized_screen_never_divides() {
        let mut m = SettingsModel::new(
            PresetCollection::new_default(None),
            None,
            Size::new(0, 0),
        );
        m.set_unit(Axis::Size, Unit::Percent);
        assert_eq!(m.display_value(Field::W), 0.0);
        m.set_display_value(Field::W, 50.0);
        assert_eq!(m.current().w, 0.0);
    }

    #[test]
    fn block_sync_only_touches_geometry() {
        let mut m = model();
        m.set_unit(Axis::Size, Unit::Percent);
        m.sync_from_block(Rect::new(1, 2, 300, 400));
        assert_eq!(m.focus_block(), Rect::new(1, 2, 300, 400));
        assert_eq!(m.unit(Axis::Size), Unit::Percent);
        assert_eq!(m.display_value(Field::H), 40.0);
    }

    #[test]
    fn add_selects_new_and_delete_clamps_selection() {
        let mut m = model();
        m.add_preset("b").unwrap();
        m.add_preset("c").unwrap();
        assert_eq!(m.current_index(), 2);

        m.delete_preset().unwrap();
        assert_eq!(m.current_index(), 1);
        assert_eq!(m.current().preset_name, "b");

        m.select(0).unwrap();
        m.delete_preset().unwrap();
        assert!(matches!(m.delete_preset(), Err(PresetError::LastPreset)));
        assert_eq!(m.collection().names(), vec!["b"]);
    }

    #[test]
    fn selection_wraps_both_ways() {
        let mut m = model();
        m.add_preset("b").unwrap();
        m.select_relative(1);
        assert_eq!(m.current_index(), 0);
        m.select_relative(-1);
        assert_eq!(m.current_index(), 1);
        assert!(m.select(7).is_err());
    }

    #[test]
    fn appearance_is_per_preset() {
        let mut m = model();
        m.set_alpha(42);
        m.set_color(Rgb::new(1, 2, 3));
        m.add_preset("other").unwrap();
        assert_eq!(m.overlay_color(), (Rgb::BLACK, 150));
        m.select(0).unwrap();
        assert_eq!(m.overlay_color(), (Rgb::new(1, 2, 3), 42));
    }

    #[test]
    fn rename_collection_requires_text() {
        let mut m = model();
        assert!(m.rename_collection("  ").is_err());
        m.rename_collection(" Desk ").unwrap();
        assert_eq!(m.collection_name(), "Desk");
    }

    #[test]
    fn unbound_save_asks_for_export_then_binds() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("presets.json");
        let mut m = model();

        assert_eq!(m.save().unwrap(), SaveOutcome::NeedsPath);
        m.export(&path).unwrap();
        assert_eq!(m.bound_path(), Some(path.as_path()));

        m.set_alpha(10);
        assert_eq!(m.save().unwrap(), SaveOutcome::Saved(path.clone()));

        let other = dir.path().join("copy.json");
        m.export(&other).unwrap();
        assert_eq!(m.bound_path(), Some(path.as_path()));
    }

    #[test]
    fn import_replaces_collection_and_binds() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("p.json");
        let mut saved = PresetCollection::new_default(Some(SCREEN));
        saved.presets_name = "Saved".into();
        saved.add("second", None).unwrap();
        saved.save(&path).unwrap();

        let mut m = model();
        m.add_preset("temp").unwrap();
        m.import(&path).unwrap();
        assert_eq!(m.collection_name(), "Saved");
        assert_eq!(m.current_index(), 0);
        assert_eq!(m.bound_path(), Some(path.as_path()));
    }

    #[test]
    fn failed_import_keeps_previous_state() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "[]").unwrap();

        let mut m = model();
        m.add_preset("keep").unwrap();
        assert!(m.import(&path).is_err());
        assert_eq!(m.current().preset_name, "keep");
        assert_eq!(m.bound_path(), None);
    }

    #[test]
    fn open_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let m = SettingsModel::open(Some(dir.path().join("gone.json")), SCREEN);
        assert_eq!(m.collection_name(), "Untitled");
        assert_eq!(m.bound_path(), None);
    }

    #[test]
    fn create_collection_unbinds() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("p.json");
        let mut m = model();
        m.export(&path).unwrap();
        m.create_collection();
        assert_eq!(m.bound_path(), None);
        assert_eq!(m.collection().len(), 1);
    }

    #[test]
    fn imported_far_away_block_renders_without_overflow() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("far.json");
        std::fs::write(
            &path,
            r#"{"presets_name": "Far", "presets": [
                {"preset_name": "edge", "alpha": 200, "xy_abs": true, "wh_abs": true,
                 "x": 2000000000, "y": -1e300, "w": 2000000000, "h": 1e300}
            ]}"#,
        )
        .unwrap();

        let mut m = model();
        m.import(&path).unwrap();
        let block = m.focus_block();
        assert_eq!(block.x, crate::presets::MAX_COORDINATE);
        assert_eq!(block.y, -crate::presets::MAX_COORDINATE);
        assert!(block.right() > block.left());

        let (color, alpha) = m.overlay_color();
        let mut pixels = vec![0u32; (SCREEN.width * SCREEN.height) as usize];
        crate::render::fill_overlay(&mut pixels, SCREEN, color, alpha, Some(block));
        let shade = crate::render::premultiply(color, alpha);
        assert!(pixels.iter().all(|&p| p == shade));
    }

    #[test]
    fn new_screen_size_drives_percent_and_ranges() {
        let mut m = model();
        m.set_unit(Axis::Position, Unit::Percent);
        assert_eq!(m.display_value(Field::X), 25.0);

        m.set_screen(Size::new(1000, 500));
        assert_eq!(m.screen(), Size::new(1000, 500));
        // stored pixels (500, 250) are now half the screen
        assert_eq!(m.display_value(Field::X), 50.0);
        assert_eq!(m.display_value(Field::Y), 50.0);
        assert_eq!(m.display_range(Field::W), (0.0, 1000.0));

        m.set_display_value(Field::X, 10.0);
        assert_eq!(m.current().x, 100.0);

        m.add_preset("fresh").unwrap();
        assert_eq!(m.focus_block(), Rect::new(250, 125, 500, 250));
    }
}
