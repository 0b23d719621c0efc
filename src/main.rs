// Prevents console window in release builds
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
// Only the platform-neutral core is reachable off Windows
#![cfg_attr(not(windows), allow(dead_code))]

mod color;
mod config;
mod geometry;
#[cfg(windows)]
mod hotkeys;
mod interaction;
mod logging;
#[cfg(windows)]
mod overlay;
mod presets;
mod render;
mod settings;
#[cfg(windows)]
mod tray;
mod ui;

#[cfg(windows)]
fn main() {
    use settings::SettingsModel;
    use windows::Win32::UI::WindowsAndMessaging::{
        DispatchMessageW, GetMessageW, TranslateMessage, MSG,
    };

    if let Err(e) = logging::init() {
        eprintln!("Logging unavailable: {e}");
    }

    if is_already_running() {
        tracing::info!("Another instance is running; exiting");
        return;
    }

    let mut cfg = config::load_config();
    let (_, screen) = overlay::primary_screen();

    let mut model = SettingsModel::open(cfg.presets_path.clone(), screen);
    if model.bound_path().is_none() && cfg.presets_path.is_some() {
        // The remembered file could not be restored
        cfg.presets_path = None;
        config::save_config(&cfg);
    }
    model.show_block = cfg.show_focus_block;

    let (color, alpha) = model.overlay_color();
    let options = overlay::OverlayOptions {
        block: model.focus_block(),
        color,
        alpha,
        visible: model.show_block,
        hit_tolerance: cfg.hit_tolerance,
        min_block_extent: cfg.min_block_extent,
    };
    let hotkeys_enabled = cfg.hotkeys_enabled;

    let hwnd = match ui::create_window(model, cfg) {
        Ok(hwnd) => hwnd,
        Err(e) => {
            tracing::error!("Could not create settings window: {e}");
            return;
        }
    };

    if let Err(e) = overlay::create(options, hwnd) {
        tracing::error!("Could not create overlay: {e}");
        return;
    }

    if !tray::add_tray_icon(hwnd) {
        tracing::warn!("Tray icon could not be added");
    }
    if hotkeys_enabled && !hotkeys::register_all(hwnd) {
        tracing::warn!("Some global hotkeys are unavailable");
    }

    ui::show_window(hwnd);
    tracing::info!("Focus Overlay started");

    // Win32 message loop
    unsafe {
        let mut msg = MSG::default();
        while GetMessageW(&mut msg, None, 0, 0).as_bool() {
            let _ = TranslateMessage(&msg);
            DispatchMessageW(&msg);
        }
    }

    if hotkeys_enabled {
        hotkeys::unregister_all(hwnd);
    }
    tray::remove_tray_icon(hwnd);
    overlay::destroy();
    ui::hide_window(hwnd);
    tracing::info!("Focus Overlay stopped");
}

#[cfg(not(windows))]
fn main() {
    if let Err(e) = logging::init() {
        eprintln!("Logging unavailable: {e}");
    }
    tracing::error!("Focus Overlay needs Windows layered windows; nothing to run here");
    std::process::exit(1);
}

/// Check if another instance is already running
#[cfg(windows)]
fn is_already_running() -> bool {
    use windows::core::PCWSTR;
    use windows::Win32::System::Threading::{CreateMutexW, OpenMutexW, SYNCHRONIZATION_ACCESS_RIGHTS};

    let name: Vec<u16> = "FocusOverlayMutex\0".encode_utf16().collect();

    unsafe {
        let existing = OpenMutexW(
            SYNCHRONIZATION_ACCESS_RIGHTS(0x001F0001), // MUTEX_ALL_ACCESS
            false,
            PCWSTR(name.as_ptr()),
        );
        if existing.is_ok() {
            return true;
        }

        // This instance owns the mutex for the rest of the process
        let _ = CreateMutexW(None, true, PCWSTR(name.as_ptr()));
        false
    }
}
