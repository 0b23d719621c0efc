// Settings window: owner-drawn panel driving the preset model and overlay

use super::controls::*;
use super::painting;
use super::theme::*;

use crate::color::Rgb;
use crate::config::{self, AppConfig};
use crate::geometry::Point;
use crate::presets::PresetError;
use crate::settings::{Axis, Field, SaveOutcome, SettingsModel, Unit};
use crate::{hotkeys, overlay, tray};

use std::path::Path;
use windows::core::PCWSTR;
use windows::Win32::Foundation::{COLORREF, HWND, LPARAM, LRESULT, POINT, RECT, WPARAM};
use windows::Win32::Graphics::Gdi::*;
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::UI::Controls::Dialogs::{ChooseColorW, CC_FULLOPEN, CC_RGBINIT, CHOOSECOLORW};
use windows::Win32::UI::Input::KeyboardAndMouse::{
    GetKeyState, ReleaseCapture, SetCapture, SetFocus, VK_BACK, VK_CONTROL, VK_ESCAPE, VK_Q,
    VK_RETURN,
};
use windows::Win32::UI::WindowsAndMessaging::*;

const CLASS_NAME: &str = "FocusOverlaySettingsWnd\0";
const WM_TRAY_CALLBACK: u32 = tray::WM_TRAY_ICON;
const TOAST_TIMER_ID: usize = 100;
const MK_SHIFT: usize = 0x0004;

struct WndState {
    ui: UiState,
    model: SettingsModel,
    config: AppConfig,
    custom_colors: [COLORREF; 16],
}

// Global pointer to WndState (set during window creation, used in WndProc)
static mut WND_STATE: *mut WndState = std::ptr::null_mut();

fn wide(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(std::iter::once(0)).collect()
}

/// Create the settings window (initially hidden)
pub fn create_window(model: SettingsModel, config: AppConfig) -> windows::core::Result<HWND> {
    let class_name = wide(CLASS_NAME);

    unsafe {
        let hinstance = GetModuleHandleW(PCWSTR::null())?;
        let hicon = LoadIconW(None, IDI_APPLICATION).unwrap_or_default();

        let wc = WNDCLASSW {
            style: CS_HREDRAW | CS_VREDRAW,
            lpfnWndProc: Some(wnd_proc),
            hInstance: hinstance.into(),
            lpszClassName: PCWSTR(class_name.as_ptr()),
            hbrBackground: CreateSolidBrush(CLR_BACKGROUND),
            hCursor: LoadCursorW(None, IDC_ARROW).unwrap_or_default(),
            hIcon: hicon,
            ..Default::default()
        };

        RegisterClassW(&wc);

        let mut wr = RECT {
            left: 0,
            top: 0,
            right: WINDOW_WIDTH,
            bottom: WINDOW_HEIGHT,
        };
        let style = WS_OVERLAPPED | WS_CAPTION | WS_SYSMENU | WS_MINIMIZEBOX;
        let _ = AdjustWindowRectEx(&mut wr, style, false, WS_EX_TOPMOST);

        let title = wide("Focus Overlay");

        let hwnd = CreateWindowExW(
            WS_EX_TOPMOST,
            PCWSTR(class_name.as_ptr()),
            PCWSTR(title.as_ptr()),
            style,
            CW_USEDEFAULT,
            CW_USEDEFAULT,
            wr.right - wr.left,
            wr.bottom - wr.top,
            None,
            None,
            Some(hinstance.into()),
            None,
        )?;

        let mut ui = UiState::new();
        ui.alpha_slider.value = model.current().alpha as i32;

        let wnd_state = Box::new(WndState {
            ui,
            model,
            config,
            custom_colors: [COLORREF(0x00FFFFFF); 16],
        });
        WND_STATE = Box::into_raw(wnd_state);

        Ok(hwnd)
    }
}

/// Show and focus the settings window
pub fn show_window(hwnd: HWND) {
    unsafe {
        let _ = ShowWindow(hwnd, SW_SHOW);
        let _ = SetForegroundWindow(hwnd);
    }
}

pub fn hide_window(hwnd: HWND) {
    unsafe {
        let _ = ShowWindow(hwnd, SW_HIDE);
    }
}

fn invalidate(hwnd: HWND) {
    unsafe {
        let _ = InvalidateRect(Some(hwnd), None, true);
    }
}

fn toast(hwnd: HWND, ui: &mut UiState, message: &str) {
    ui.toast_message = message.to_string();
    ui.toast_visible = true;
    invalidate(hwnd);
    unsafe {
        SetTimer(Some(hwnd), TOAST_TIMER_ID, 2000, None);
    }
}

fn message_box(hwnd: HWND, title: &str, text: &str, style: MESSAGEBOX_STYLE) -> MESSAGEBOX_RESULT {
    let title = wide(title);
    let text = wide(text);
    unsafe { MessageBoxW(Some(hwnd), PCWSTR(text.as_ptr()), PCWSTR(title.as_ptr()), style) }
}

fn report_error(hwnd: HWND, err: &PresetError) {
    tracing::warn!("{err}");
    let icon = if err.is_critical() {
        MB_ICONERROR
    } else {
        MB_ICONWARNING
    };
    let _ = message_box(hwnd, err.title(), &err.to_string(), MB_OK | icon);
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Push the selected preset to the overlay
fn apply_to_overlay(state: &mut WndState) {
    let (color, alpha) = state.model.overlay_color();
    overlay::set_block(state.model.focus_block());
    overlay::set_color(color, alpha);
    state.ui.alpha_slider.value = alpha as i32;
}

/// Remember the bound presets file for the next launch
fn persist_presets_path(state: &mut WndState) {
    let bound = state.model.bound_path().map(Path::to_path_buf);
    if state.config.presets_path != bound {
        state.config.presets_path = bound;
        config::save_config(&state.config);
    }
}

fn toggle_show_block(hwnd: HWND, state: &mut WndState) {
    let show = !state.model.show_block;
    state.model.show_block = show;
    overlay::set_visible(show);
    state.config.show_focus_block = show;
    config::save_config(&state.config);
    toast(
        hwnd,
        &mut state.ui,
        if show {
            "Focus block shown"
        } else {
            "Focus block hidden"
        },
    );
}

fn toggle_adjust_mode(hwnd: HWND, state: &mut WndState) {
    let adjust = !state.model.adjust_mode;
    state.model.adjust_mode = adjust;
    overlay::set_adjust_mode(adjust);

    // The overlay just re-asserted HWND_TOPMOST; keep the panel above it
    unsafe {
        let _ = SetWindowPos(
            hwnd,
            Some(HWND_TOPMOST),
            0,
            0,
            0,
            0,
            SWP_NOMOVE | SWP_NOSIZE | SWP_NOACTIVATE,
        );
    }
    toast(
        hwnd,
        &mut state.ui,
        if adjust {
            "Drag the block to adjust it"
        } else {
            "Size adjustment off"
        },
    );
}

fn pick_color(hwnd: HWND, state: &mut WndState) {
    let current = state.model.current().color();
    let mut cc = CHOOSECOLORW {
        lStructSize: std::mem::size_of::<CHOOSECOLORW>() as u32,
        hwndOwner: hwnd,
        rgbResult: COLORREF(current.to_colorref()),
        lpCustColors: state.custom_colors.as_mut_ptr(),
        Flags: CC_RGBINIT | CC_FULLOPEN,
        ..Default::default()
    };
    let picked = unsafe { ChooseColorW(&mut cc).as_bool() };
    if picked {
        let color = Rgb::from_colorref(cc.rgbResult.0);
        state.model.set_color(color);
        apply_to_overlay(state);
        toast(hwnd, &mut state.ui, &format!("Color set to {color}"));
    }
}

fn json_dialog() -> rfd::FileDialog {
    rfd::FileDialog::new().add_filter("JSON Files (*.json)", &["json"])
}

fn import_presets(hwnd: HWND, state: &mut WndState) {
    let Some(path) = json_dialog().set_title("Import Presets").pick_file() else {
        return;
    };
    match state.model.import(&path) {
        Ok(()) => {
            apply_to_overlay(state);
            persist_presets_path(state);
            let msg = format!("Imported {}", state.model.collection_name());
            toast(hwnd, &mut state.ui, &msg);
        }
        Err(e) => report_error(hwnd, &e),
    }
}

fn export_presets(hwnd: HWND, state: &mut WndState) {
    let dialog = json_dialog()
        .set_title("Export Presets")
        .set_file_name("presets.json");
    let Some(path) = dialog.save_file() else {
        return;
    };
    match state.model.export(&path) {
        Ok(()) => {
            persist_presets_path(state);
            let msg = format!("Exported to {}", file_label(&path));
            toast(hwnd, &mut state.ui, &msg);
        }
        Err(e) => report_error(hwnd, &e),
    }
}

fn save_presets(hwnd: HWND, state: &mut WndState) {
    match state.model.save() {
        Ok(SaveOutcome::Saved(path)) => {
            let msg = format!("Saved {}", file_label(&path));
            toast(hwnd, &mut state.ui, &msg);
        }
        Ok(SaveOutcome::NeedsPath) => export_presets(hwnd, state),
        Err(e) => report_error(hwnd, &e),
    }
}

fn new_collection(hwnd: HWND, state: &mut WndState) {
    state.model.create_collection();
    apply_to_overlay(state);
    persist_presets_path(state);
    toast(hwnd, &mut state.ui, "New collection created");
}

fn delete_preset(hwnd: HWND, state: &mut WndState) {
    if state.model.collection().len() <= 1 {
        report_error(hwnd, &PresetError::LastPreset);
        return;
    }
    let name = state.model.current().preset_name.clone();
    let answer = message_box(
        hwnd,
        "Delete Preset",
        &format!("Delete preset \"{name}\"?"),
        MB_YESNO | MB_ICONQUESTION,
    );
    if answer != IDYES {
        return;
    }
    match state.model.delete_preset() {
        Ok(_) => {
            apply_to_overlay(state);
            toast(hwnd, &mut state.ui, &format!("Deleted {name}"));
        }
        Err(e) => report_error(hwnd, &e),
    }
}

/// Popup listing every preset under the name label; selects the chosen one
fn show_preset_menu(hwnd: HWND, state: &mut WndState) {
    unsafe {
        let Ok(menu) = CreatePopupMenu() else {
            return;
        };
        let names: Vec<Vec<u16>> = state
            .model
            .collection()
            .names()
            .into_iter()
            .map(wide)
            .collect();
        for (i, name) in names.iter().enumerate() {
            let mut flags = MF_STRING;
            if i == state.model.current_index() {
                flags |= MF_CHECKED;
            }
            let _ = AppendMenuW(menu, flags, i + 1, PCWSTR(name.as_ptr()));
        }

        let r = state.ui.preset_name_rect;
        let mut pt = POINT {
            x: r.left(),
            y: r.bottom(),
        };
        let _ = ClientToScreen(hwnd, &mut pt);

        let cmd = TrackPopupMenu(
            menu,
            TPM_LEFTALIGN | TPM_TOPALIGN | TPM_RETURNCMD,
            pt.x,
            pt.y,
            Some(0),
            hwnd,
            None,
        );
        let _ = DestroyMenu(menu);

        if cmd.0 > 0 && state.model.select(cmd.0 as usize - 1).is_ok() {
            apply_to_overlay(state);
            invalidate(hwnd);
        }
    }
}

fn field_text(model: &SettingsModel, field: Field) -> String {
    painting::format_value(model.display_value(field), model.unit(field.axis()))
}

/// Finish whatever inline edit is open. Name edits that fail stay open.
fn commit_edit(hwnd: HWND, state: &mut WndState) {
    match std::mem::replace(&mut state.ui.editing, Editing::Nothing) {
        Editing::Nothing => {}
        Editing::Field(field, input) => {
            if let Some(value) = input.value() {
                state.model.set_display_value(field, value);
                apply_to_overlay(state);
            }
        }
        Editing::Name(prompt, input) => {
            let name = input.text().to_string();
            let result = match prompt {
                NamePrompt::RenameCollection => state.model.rename_collection(&name),
                NamePrompt::AddPreset => state.model.add_preset(&name),
                NamePrompt::RenamePreset => state.model.rename_preset(&name),
            };
            match result {
                Ok(()) => {
                    apply_to_overlay(state);
                    let msg = match prompt {
                        NamePrompt::RenameCollection => "Collection renamed",
                        NamePrompt::AddPreset => "Preset added",
                        NamePrompt::RenamePreset => "Preset renamed",
                    };
                    toast(hwnd, &mut state.ui, msg);
                }
                Err(e) => {
                    report_error(hwnd, &e);
                    state.ui.editing = Editing::Name(prompt, input);
                }
            }
        }
    }
    invalidate(hwnd);
}

fn quit() {
    unsafe {
        PostQuitMessage(0);
    }
}

fn step_field(state: &mut WndState, field: Field, delta: f64) {
    state.model.step(field, delta);
    apply_to_overlay(state);
}

fn point_from_lparam(lparam: LPARAM) -> Point {
    let x = (lparam.0 & 0xFFFF) as i16 as i32;
    let y = ((lparam.0 >> 16) & 0xFFFF) as i16 as i32;
    Point::new(x, y)
}

fn on_click(hwnd: HWND, state: &mut WndState, p: Point) -> bool {
    // Clicking anywhere commits a value being typed and drops a name prompt
    if matches!(state.ui.editing, Editing::Field(..)) {
        commit_edit(hwnd, state);
    } else {
        state.ui.editing = Editing::Nothing;
    }

    for (i, tab) in Tab::ALL.into_iter().enumerate() {
        if state.ui.tab_rects[i].contains(p) {
            state.ui.active_tab = tab;
            return true;
        }
    }

    if state.ui.exit_btn.rect.contains(p) {
        quit();
        return true;
    }

    match state.ui.active_tab {
        Tab::Block => {
            for (axis, rect) in [
                (Axis::Position, state.ui.position_pixels.rect),
                (Axis::Size, state.ui.size_pixels.rect),
            ] {
                if rect.contains(p) {
                    let unit = match state.model.unit(axis) {
                        Unit::Pixels => Unit::Percent,
                        Unit::Percent => Unit::Pixels,
                    };
                    state.model.set_unit(axis, unit);
                    return true;
                }
            }

            let Some(spin) = state.ui.spin_at(p).cloned() else {
                return false;
            };
            if spin.minus_rect.contains(p) {
                step_field(state, spin.field, -1.0);
            } else if spin.plus_rect.contains(p) {
                step_field(state, spin.field, 1.0);
            } else {
                let text = field_text(&state.model, spin.field);
                state.ui.editing = Editing::Field(spin.field, TextInput::numeric(&text));
            }
            true
        }

        Tab::Overlay => {
            let slider = &mut state.ui.alpha_slider;
            if slider.thumb_rect.contains(p) || slider.rect.contains(p) {
                slider.dragging = true;
                slider.value = slider.value_from_x(p.x);
                let alpha = slider.value as u8;
                unsafe {
                    SetCapture(hwnd);
                }
                state.model.set_alpha(alpha);
                let (color, _) = state.model.overlay_color();
                overlay::set_color(color, alpha);
                return true;
            }
            if state.ui.color_btn.rect.contains(p) || state.ui.swatch_rect.contains(p) {
                pick_color(hwnd, state);
                return true;
            }
            if state.ui.show_block_toggle.rect.contains(p) {
                toggle_show_block(hwnd, state);
                return true;
            }
            if state.ui.adjust_toggle.rect.contains(p) {
                toggle_adjust_mode(hwnd, state);
                return true;
            }
            false
        }

        Tab::Presets => {
            let ui = &state.ui;
            let prompt = |prompt: NamePrompt, initial: &str| {
                Editing::Name(prompt, TextInput::name(initial))
            };
            if ui.rename_collection_btn.rect.contains(p) {
                let name = state.model.collection_name().to_string();
                state.ui.editing = prompt(NamePrompt::RenameCollection, &name);
            } else if ui.new_btn.rect.contains(p) {
                new_collection(hwnd, state);
            } else if ui.import_btn.rect.contains(p) {
                import_presets(hwnd, state);
            } else if ui.save_btn.rect.contains(p) {
                save_presets(hwnd, state);
            } else if ui.export_btn.rect.contains(p) {
                export_presets(hwnd, state);
            } else if ui.prev_btn.rect.contains(p) {
                state.model.select_relative(-1);
                apply_to_overlay(state);
            } else if ui.next_btn.rect.contains(p) {
                state.model.select_relative(1);
                apply_to_overlay(state);
            } else if ui.preset_name_rect.contains(p) {
                show_preset_menu(hwnd, state);
            } else if ui.add_btn.rect.contains(p) {
                state.ui.editing = prompt(NamePrompt::AddPreset, "");
            } else if ui.rename_btn.rect.contains(p) {
                let name = state.model.current().preset_name.clone();
                state.ui.editing = prompt(NamePrompt::RenamePreset, &name);
            } else if ui.delete_btn.rect.contains(p) {
                delete_preset(hwnd, state);
            } else {
                return false;
            }
            true
        }
    }
}

/// Window procedure
unsafe extern "system" fn wnd_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    if WND_STATE.is_null() {
        return DefWindowProcW(hwnd, msg, wparam, lparam);
    }

    match msg {
        WM_PAINT => {
            let mut ps = PAINTSTRUCT::default();
            let hdc = BeginPaint(hwnd, &mut ps);

            // Double-buffer to avoid flicker
            let mut client = RECT::default();
            let _ = GetClientRect(hwnd, &mut client);

            let mem_dc = CreateCompatibleDC(Some(hdc));
            let mem_bmp = CreateCompatibleBitmap(hdc, client.right, client.bottom);
            let old_bmp = SelectObject(mem_dc, HGDIOBJ::from(mem_bmp));

            let state = &mut *WND_STATE;
            painting::paint(mem_dc, &client, &mut state.ui, &state.model);

            let _ = BitBlt(
                hdc,
                0,
                0,
                client.right,
                client.bottom,
                Some(mem_dc),
                0,
                0,
                SRCCOPY,
            );

            SelectObject(mem_dc, old_bmp);
            let _ = DeleteObject(HGDIOBJ::from(mem_bmp));
            let _ = DeleteDC(mem_dc);
            let _ = EndPaint(hwnd, &ps);
            LRESULT(0)
        }

        WM_LBUTTONDOWN => {
            let state = &mut *WND_STATE;
            let _ = SetFocus(Some(hwnd));
            if on_click(hwnd, state, point_from_lparam(lparam)) {
                invalidate(hwnd);
                return LRESULT(0);
            }
            DefWindowProcW(hwnd, msg, wparam, lparam)
        }

        WM_LBUTTONUP => {
            let state = &mut *WND_STATE;
            if state.ui.alpha_slider.dragging {
                state.ui.alpha_slider.dragging = false;
                let _ = ReleaseCapture();
                let msg = format!("Transparency {}", state.ui.alpha_slider.value);
                toast(hwnd, &mut state.ui, &msg);
            }
            DefWindowProcW(hwnd, msg, wparam, lparam)
        }

        WM_MOUSEMOVE => {
            let state = &mut *WND_STATE;
            let p = point_from_lparam(lparam);
            let mut dirty = state.ui.update_hover(p);

            if state.ui.alpha_slider.dragging {
                let value = state.ui.alpha_slider.value_from_x(p.x);
                if value != state.ui.alpha_slider.value {
                    state.ui.alpha_slider.value = value;
                    state.model.set_alpha(value as u8);
                    let (color, alpha) = state.model.overlay_color();
                    overlay::set_color(color, alpha);
                    dirty = true;
                }
            }
            if dirty {
                invalidate(hwnd);
            }
            DefWindowProcW(hwnd, msg, wparam, lparam)
        }

        WM_MOUSEWHEEL => {
            let state = &mut *WND_STATE;
            if state.ui.active_tab != Tab::Block {
                return DefWindowProcW(hwnd, msg, wparam, lparam);
            }
            // Wheel coordinates arrive in screen space
            let screen = point_from_lparam(lparam);
            let mut pt = POINT {
                x: screen.x,
                y: screen.y,
            };
            let _ = ScreenToClient(hwnd, &mut pt);

            let Some(field) = state.ui.spin_at(Point::new(pt.x, pt.y)).map(|s| s.field) else {
                return DefWindowProcW(hwnd, msg, wparam, lparam);
            };
            let delta = ((wparam.0 >> 16) & 0xFFFF) as i16 as f64 / WHEEL_DELTA as f64;
            let scale = if wparam.0 & MK_SHIFT != 0 { 10.0 } else { 1.0 };
            step_field(state, field, delta * scale);
            invalidate(hwnd);
            LRESULT(0)
        }

        WM_CHAR => {
            let state = &mut *WND_STATE;
            let typed = char::from_u32(wparam.0 as u32);
            let accepted = match (&mut state.ui.editing, typed) {
                (Editing::Field(_, input) | Editing::Name(_, input), Some(c)) => input.insert(c),
                _ => false,
            };
            if accepted {
                invalidate(hwnd);
            }
            LRESULT(0)
        }

        WM_KEYDOWN => {
            let state = &mut *WND_STATE;
            let key = wparam.0 as u16;
            let ctrl = GetKeyState(VK_CONTROL.0 as i32) < 0;

            if ctrl && key == VK_Q.0 {
                quit();
                return LRESULT(0);
            }
            if state.ui.editing == Editing::Nothing {
                return DefWindowProcW(hwnd, msg, wparam, lparam);
            }
            if key == VK_RETURN.0 {
                commit_edit(hwnd, state);
            } else if key == VK_ESCAPE.0 {
                state.ui.editing = Editing::Nothing;
                invalidate(hwnd);
            } else if key == VK_BACK.0 {
                if let Editing::Field(_, input) | Editing::Name(_, input) = &mut state.ui.editing {
                    input.backspace();
                }
                invalidate(hwnd);
            }
            LRESULT(0)
        }

        overlay::WM_OVERLAY_BLOCK_CHANGED => {
            let state = &mut *WND_STATE;
            if let Some(screen) = overlay::screen().filter(|s| *s != state.model.screen()) {
                tracing::debug!(
                    width = screen.width,
                    height = screen.height,
                    "Settings follow new screen size"
                );
                state.model.set_screen(screen);
            }
            if let Some(block) = overlay::block() {
                state.model.sync_from_block(block);
                if matches!(state.ui.editing, Editing::Field(..)) {
                    state.ui.editing = Editing::Nothing;
                }
                invalidate(hwnd);
            }
            LRESULT(0)
        }

        WM_COMMAND => {
            let state = &mut *WND_STATE;
            let cmd = (wparam.0 & 0xFFFF) as u32;
            match cmd {
                tray::IDM_SETTINGS => show_window(hwnd),
                tray::IDM_TOGGLE_BLOCK => toggle_show_block(hwnd, state),
                tray::IDM_TOGGLE_ADJUST => toggle_adjust_mode(hwnd, state),
                tray::IDM_QUIT => quit(),
                _ => {}
            }
            invalidate(hwnd);
            LRESULT(0)
        }

        WM_TRAY_CALLBACK => {
            let event = (lparam.0 & 0xFFFF) as u32;
            match event {
                WM_LBUTTONUP => show_window(hwnd),
                WM_RBUTTONUP => tray::show_context_menu(hwnd),
                _ => {}
            }
            LRESULT(0)
        }

        WM_HOTKEY => {
            let state = &mut *WND_STATE;
            match wparam.0 as i32 {
                hotkeys::HOTKEY_TOGGLE_BLOCK => toggle_show_block(hwnd, state),
                hotkeys::HOTKEY_TOGGLE_ADJUST => toggle_adjust_mode(hwnd, state),
                hotkeys::HOTKEY_SHOW_SETTINGS => show_window(hwnd),
                _ => {}
            }
            invalidate(hwnd);
            LRESULT(0)
        }

        WM_TIMER => {
            if wparam.0 == TOAST_TIMER_ID {
                let state = &mut *WND_STATE;
                state.ui.toast_visible = false;
                state.ui.toast_message.clear();
                let _ = KillTimer(Some(hwnd), TOAST_TIMER_ID);
                invalidate(hwnd);
            }
            LRESULT(0)
        }

        WM_CLOSE => {
            // Hide to tray instead of quitting
            hide_window(hwnd);
            LRESULT(0)
        }

        WM_DESTROY => {
            let _ = Box::from_raw(WND_STATE);
            WND_STATE = std::ptr::null_mut();
            PostQuitMessage(0);
            LRESULT(0)
        }

        WM_ERASEBKGND => {
            // Handled in WM_PAINT with double buffering
            LRESULT(1)
        }

        _ => DefWindowProcW(hwnd, msg, wparam, lparam),
    }
}
