// Global hotkeys using Win32 RegisterHotKey API

use windows::Win32::Foundation::HWND;
use windows::Win32::UI::Input::KeyboardAndMouse::{
    RegisterHotKey, UnregisterHotKey, HOT_KEY_MODIFIERS, MOD_ALT, MOD_CONTROL, MOD_NOREPEAT,
    VIRTUAL_KEY, VK_A, VK_F, VK_S,
};

/// Hotkey IDs (must be unique within the application)
pub const HOTKEY_TOGGLE_BLOCK: i32 = 1;
pub const HOTKEY_TOGGLE_ADJUST: i32 = 2;
pub const HOTKEY_SHOW_SETTINGS: i32 = 3;

const BINDINGS: [(i32, VIRTUAL_KEY, &str); 3] = [
    (HOTKEY_TOGGLE_BLOCK, VK_F, "Ctrl+Alt+F"),
    (HOTKEY_TOGGLE_ADJUST, VK_A, "Ctrl+Alt+A"),
    (HOTKEY_SHOW_SETTINGS, VK_S, "Ctrl+Alt+S"),
];

/// Register all global hotkeys. Returns true if all succeed.
pub fn register_all(hwnd: HWND) -> bool {
    let mods = HOT_KEY_MODIFIERS(MOD_CONTROL.0 | MOD_ALT.0 | MOD_NOREPEAT.0);
    let mut ok = true;

    for (id, key, label) in BINDINGS {
        let registered = unsafe { RegisterHotKey(Some(hwnd), id, mods, key.0 as u32) };
        if let Err(e) = registered {
            tracing::warn!("Could not register {label}: {e}");
            ok = false;
        }
    }

    ok
}

/// Unregister all global hotkeys
pub fn unregister_all(hwnd: HWND) {
    for (id, _, _) in BINDINGS {
        unsafe {
            let _ = UnregisterHotKey(Some(hwnd), id);
        }
    }
}
