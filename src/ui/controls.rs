// UI control state tracking and hit-testing

use crate::geometry::{Point, Rect};
use crate::settings::Field;

/// Which tab is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Block = 0,
    Overlay = 1,
    Presets = 2,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Block, Tab::Overlay, Tab::Presets];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Block => "Block",
            Tab::Overlay => "Overlay",
            Tab::Presets => "Presets",
        }
    }
}

/// State for a toggle switch control
#[derive(Debug, Clone)]
pub struct ToggleState {
    pub checked: bool,
    pub rect: Rect,
}

impl ToggleState {
    pub fn new(checked: bool) -> Self {
        Self {
            checked,
            rect: Rect::default(),
        }
    }
}

/// Horizontal slider over an inclusive integer range
#[derive(Debug, Clone)]
pub struct SliderState {
    pub value: i32,
    pub max: i32,
    pub dragging: bool,
    pub rect: Rect,       // full track rect
    pub thumb_rect: Rect, // grab area, wider than the track
}

impl SliderState {
    pub fn new(value: i32, max: i32) -> Self {
        Self {
            value: value.clamp(0, max),
            max,
            dragging: false,
            rect: Rect::default(),
            thumb_rect: Rect::default(),
        }
    }

    /// Get x position of slider thumb based on current value
    pub fn thumb_x(&self) -> i32 {
        self.rect.x + (self.value as f32 / self.max as f32 * self.rect.width as f32) as i32
    }

    /// Calculate value from an x position within the slider track
    pub fn value_from_x(&self, x: i32) -> i32 {
        if self.rect.width <= 0 {
            return self.value;
        }
        let rel_x = (x - self.rect.x).clamp(0, self.rect.width);
        ((rel_x as f32 / self.rect.width as f32) * self.max as f32).round() as i32
    }
}

#[derive(Debug, Clone)]
pub struct ButtonState {
    pub rect: Rect,
    pub hover: bool,
    pub text: &'static str,
}

impl ButtonState {
    pub fn new(text: &'static str) -> Self {
        Self {
            rect: Rect::default(),
            hover: false,
            text,
        }
    }
}

/// A numeric field: value box with -/+ steppers
#[derive(Debug, Clone)]
pub struct SpinState {
    pub field: Field,
    pub value_rect: Rect,
    pub minus_rect: Rect,
    pub plus_rect: Rect,
}

impl SpinState {
    pub fn new(field: Field) -> Self {
        Self {
            field,
            value_rect: Rect::default(),
            minus_rect: Rect::default(),
            plus_rect: Rect::default(),
        }
    }

    pub fn contains(&self, p: Point) -> bool {
        self.value_rect.contains(p) || self.minus_rect.contains(p) || self.plus_rect.contains(p)
    }
}

/// Single-line text being typed into an owner-drawn field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextInput {
    text: String,
    numeric: bool,
    max_len: usize,
}

impl TextInput {
    pub fn numeric(initial: &str) -> Self {
        Self {
            text: initial.to_string(),
            numeric: true,
            max_len: 12,
        }
    }

    pub fn name(initial: &str) -> Self {
        Self {
            text: initial.to_string(),
            numeric: false,
            max_len: 48,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns whether the character was accepted
    pub fn insert(&mut self, c: char) -> bool {
        if c.is_control() || self.text.chars().count() >= self.max_len {
            return false;
        }
        if self.numeric {
            let dot_ok = c == '.' && !self.text.contains('.');
            if !c.is_ascii_digit() && !dot_ok {
                return false;
            }
        }
        self.text.push(c);
        true
    }

    pub fn backspace(&mut self) {
        self.text.pop();
    }

    pub fn value(&self) -> Option<f64> {
        self.text.parse().ok()
    }
}

/// What the inline name editor on the Presets tab is collecting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamePrompt {
    RenameCollection,
    AddPreset,
    RenamePreset,
}

impl NamePrompt {
    pub fn title(self) -> &'static str {
        match self {
            NamePrompt::RenameCollection => "New collection name",
            NamePrompt::AddPreset => "New preset name",
            NamePrompt::RenamePreset => "Rename preset to",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Editing {
    Nothing,
    Field(Field, TextInput),
    Name(NamePrompt, TextInput),
}

/// Complete UI state
pub struct UiState {
    pub active_tab: Tab,
    pub tab_rects: [Rect; 3],

    // Block tab
    pub position_pixels: ToggleState,
    pub size_pixels: ToggleState,
    pub spins: [SpinState; 4],

    // Overlay tab
    pub alpha_slider: SliderState,
    pub color_btn: ButtonState,
    pub swatch_rect: Rect,
    pub show_block_toggle: ToggleState,
    pub adjust_toggle: ToggleState,

    // Presets tab
    pub rename_collection_btn: ButtonState,
    pub new_btn: ButtonState,
    pub import_btn: ButtonState,
    pub save_btn: ButtonState,
    pub export_btn: ButtonState,
    pub prev_btn: ButtonState,
    pub next_btn: ButtonState,
    pub preset_name_rect: Rect,
    pub add_btn: ButtonState,
    pub rename_btn: ButtonState,
    pub delete_btn: ButtonState,

    pub exit_btn: ButtonState,
    pub editing: Editing,

    // Toast
    pub toast_message: String,
    pub toast_visible: bool,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            active_tab: Tab::Block,
            tab_rects: [Rect::default(); 3],

            position_pixels: ToggleState::new(true),
            size_pixels: ToggleState::new(true),
            spins: Field::ALL.map(SpinState::new),

            alpha_slider: SliderState::new(150, 255),
            color_btn: ButtonState::new("Pick Color"),
            swatch_rect: Rect::default(),
            show_block_toggle: ToggleState::new(true),
            adjust_toggle: ToggleState::new(false),

            rename_collection_btn: ButtonState::new("Rename"),
            new_btn: ButtonState::new("New"),
            import_btn: ButtonState::new("Import"),
            save_btn: ButtonState::new("Save"),
            export_btn: ButtonState::new("Export"),
            prev_btn: ButtonState::new("<"),
            next_btn: ButtonState::new(">"),
            preset_name_rect: Rect::default(),
            add_btn: ButtonState::new("Add"),
            rename_btn: ButtonState::new("Rename"),
            delete_btn: ButtonState::new("Delete"),

            exit_btn: ButtonState::new("Exit"),
            editing: Editing::Nothing,

            toast_message: String::new(),
            toast_visible: false,
        }
    }

    /// Buttons drawn on the active tab plus the footer
    pub fn visible_buttons_mut(&mut self) -> Vec<&mut ButtonState> {
        let mut buttons = vec![&mut self.exit_btn];
        match self.active_tab {
            Tab::Block => {}
            Tab::Overlay => buttons.push(&mut self.color_btn),
            Tab::Presets => buttons.extend([
                &mut self.rename_collection_btn,
                &mut self.new_btn,
                &mut self.import_btn,
                &mut self.save_btn,
                &mut self.export_btn,
                &mut self.prev_btn,
                &mut self.next_btn,
                &mut self.add_btn,
                &mut self.rename_btn,
                &mut self.delete_btn,
            ]),
        }
        buttons
    }

    /// Refresh hover flags; returns whether any changed
    pub fn update_hover(&mut self, p: Point) -> bool {
        let mut changed = false;
        for btn in self.visible_buttons_mut() {
            let hover = btn.rect.contains(p);
            if btn.hover != hover {
                btn.hover = hover;
                changed = true;
            }
        }
        changed
    }

    pub fn spin_at(&self, p: Point) -> Option<&SpinState> {
        self.spins.iter().find(|s| s.contains(p))
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slider_maps_track_to_range() {
        let mut s = SliderState::new(300, 255);
        assert_eq!(s.value, 255);
        s.rect = Rect::new(100, 0, 255, 8);
        assert_eq!(s.value_from_x(50), 0);
        assert_eq!(s.value_from_x(200), 100);
        assert_eq!(s.value_from_x(9999), 255);
        s.value = 51;
        assert_eq!(s.thumb_x(), 151);
    }

    #[test]
    fn slider_without_layout_keeps_value() {
        let s = SliderState::new(10, 255);
        assert_eq!(s.value_from_x(500), 10);
    }

    #[test]
    fn numeric_input_accepts_one_dot_and_digits() {
        let mut t = TextInput::numeric("");
        for c in "12.5.x3".chars() {
            t.insert(c);
        }
        assert_eq!(t.text(), "12.53");
        assert_eq!(t.value(), Some(12.53));
        t.backspace();
        t.backspace();
        t.backspace();
        assert_eq!(t.text(), "12");
    }

    #[test]
    fn name_input_rejects_control_and_caps_length() {
        let mut t = TextInput::name("ab");
        assert!(!t.insert('\u{8}'));
        assert!(t.insert('é'));
        for _ in 0..100 {
            t.insert('z');
        }
        assert_eq!(t.text().chars().count(), 48);
        assert_eq!(t.value(), None);
    }

    #[test]
    fn hover_tracks_only_visible_buttons() {
        let mut ui = UiState::new();
        ui.add_btn.rect = Rect::new(0, 0, 10, 10);
        ui.exit_btn.rect = Rect::new(20, 0, 10, 10);

        assert!(!ui.update_hover(Point::new(5, 5)));
        assert!(!ui.add_btn.hover);

        assert!(ui.update_hover(Point::new(25, 5)));
        assert!(ui.exit_btn.hover);

        ui.active_tab = Tab::Presets;
        assert!(ui.update_hover(Point::new(5, 5)));
        assert!(ui.add_btn.hover && !ui.exit_btn.hover);
    }

    #[test]
    fn spin_lookup_covers_steppers() {
        let mut ui = UiState::new();
        ui.spins[2].minus_rect = Rect::new(0, 0, 10, 10);
        assert_eq!(ui.spin_at(Point::new(3, 3)).map(|s| s.field), Some(Field::W));
        assert!(ui.spin_at(Point::new(30, 30)).is_none());
    }
}
