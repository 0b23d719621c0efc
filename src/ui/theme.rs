use windows::Win32::Foundation::COLORREF;

// ── Dark palette ────────────────────────────────────────────────────────────

/// Background: #0B0F19
pub const CLR_BACKGROUND: COLORREF = COLORREF(0x00190F0B);

/// Foreground / primary text: #F8FAFC
pub const CLR_FOREGROUND: COLORREF = COLORREF(0x00FCFAF8);

/// Secondary / muted surfaces: #1E293B
pub const CLR_SECONDARY: COLORREF = COLORREF(0x003B291E);

/// Muted foreground (descriptions, labels): #94A3B8
pub const CLR_MUTED_FG: COLORREF = COLORREF(0x00B8A394);

/// Brand amber: #F59E0B
pub const CLR_BRAND: COLORREF = COLORREF(0x000B9EF5);

/// Destructive actions: #EF4444
pub const CLR_DANGER: COLORREF = COLORREF(0x004444EF);

/// Border color (same as secondary)
pub const CLR_BORDER: COLORREF = COLORREF(0x003B291E);

/// Input/toggle background (same as secondary)
pub const CLR_INPUT: COLORREF = COLORREF(0x003B291E);

// ── Dimensions ───────────────────────────────────────────────────────────────

/// Main window client area dimensions
pub const WINDOW_WIDTH: i32 = 400;
pub const WINDOW_HEIGHT: i32 = 560;

/// Padding inside the window
pub const PADDING: i32 = 24;

/// Content width (WINDOW_WIDTH - 2 * PADDING)
pub const CONTENT_WIDTH: i32 = WINDOW_WIDTH - 2 * PADDING;

pub const CARD_RADIUS: i32 = 8;
pub const TAB_HEIGHT: i32 = 36;
pub const GAP: i32 = 12;
pub const BUTTON_HEIGHT: i32 = 28;

// ── Font sizes (in logical units, negative for character height) ─────────────

pub const FONT_SIZE_TITLE: i32 = -18;
pub const FONT_SIZE_SMALL: i32 = -12;
pub const FONT_SIZE_XS: i32 = -11;
pub const FONT_SIZE_XXS: i32 = -10;

pub const FONT_NAME: &str = "Segoe UI";
pub const FONT_MONO_NAME: &str = "Consolas";
