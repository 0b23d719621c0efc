// Full-screen dimming overlay with a focus block cut out.
//
// One layered, topmost popup covers the primary monitor. Its pixels come
// from `render::fill_overlay` and are pushed with UpdateLayeredWindow, so
// the block can be fully see-through while the rest of the screen is
// tinted.
//
// Outside adjustment mode the window carries WS_EX_TRANSPARENT and every
// click falls through to the desktop. In adjustment mode the transparent
// style is dropped and mouse messages drive `BlockInteraction`; each change
// is posted to the settings window as WM_OVERLAY_BLOCK_CHANGED.
//
// The state mutex is never held across a call that can re-enter the window
// procedure (ReleaseCapture, SetWindowLongPtrW, SetWindowPos).

use crate::color::Rgb;
use crate::geometry::{Point, Rect, Size};
use crate::interaction::{BlockInteraction, CursorShape};
use crate::render;
use std::sync::Mutex;
use windows::core::PCWSTR;
use windows::Win32::Foundation::{COLORREF, HWND, LPARAM, LRESULT, POINT, SIZE, WPARAM};
use windows::Win32::Graphics::Gdi::{
    CreateCompatibleDC, CreateDIBSection, DeleteDC, DeleteObject, GetDC, GetMonitorInfoW,
    MonitorFromPoint, ReleaseDC, ScreenToClient, SelectObject, AC_SRC_ALPHA, AC_SRC_OVER,
    BITMAPINFO, BITMAPINFOHEADER, BI_RGB, BLENDFUNCTION, DIB_RGB_COLORS, MONITORINFO,
    MONITOR_DEFAULTTOPRIMARY,
};
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::UI::Input::KeyboardAndMouse::{ReleaseCapture, SetCapture};
use windows::Win32::UI::WindowsAndMessaging::{
    CreateWindowExW, DefWindowProcW, DestroyWindow, GetCursorPos, GetWindowLongPtrW, LoadCursorW,
    PostMessageW, RegisterClassW, SetCursor, SetWindowLongPtrW, SetWindowPos, UpdateLayeredWindow,
    CS_HREDRAW, CS_VREDRAW, GWL_EXSTYLE, HTCLIENT, HWND_TOPMOST, IDC_ARROW, IDC_SIZEALL,
    IDC_SIZENESW, IDC_SIZENS, IDC_SIZENWSE, IDC_SIZEWE, SWP_FRAMECHANGED, SWP_NOACTIVATE,
    SWP_NOMOVE, SWP_NOSIZE, ULW_ALPHA, WM_APP, WM_DISPLAYCHANGE, WM_LBUTTONDOWN, WM_LBUTTONUP,
    WM_MOUSEMOVE, WM_SETCURSOR, WNDCLASSW, WS_EX_LAYERED, WS_EX_NOACTIVATE, WS_EX_TOOLWINDOW,
    WS_EX_TOPMOST, WS_EX_TRANSPARENT, WS_POPUP, WS_VISIBLE,
};

/// Posted to the settings window whenever a drag changes the block
pub const WM_OVERLAY_BLOCK_CHANGED: u32 = WM_APP + 2;

const CLASS_NAME: &str = "FocusOverlayDimmer\0";

struct OverlayState {
    hwnd: isize,
    notify: isize,
    origin: Point,
    interaction: BlockInteraction,
    color: Rgb,
    alpha: u8,
    visible: bool,
    adjust: bool,
}

static OVERLAY: Mutex<Option<OverlayState>> = Mutex::new(None);

/// Initial look of the overlay, taken from the selected preset
pub struct OverlayOptions {
    pub block: Rect,
    pub color: Rgb,
    pub alpha: u8,
    pub visible: bool,
    pub hit_tolerance: i32,
    pub min_block_extent: i32,
}

fn hwnd_from(raw: isize) -> HWND {
    HWND(raw as *mut std::ffi::c_void)
}

/// Top-left corner and size of the primary monitor
pub fn primary_screen() -> (Point, Size) {
    unsafe {
        let monitor = MonitorFromPoint(POINT { x: 0, y: 0 }, MONITOR_DEFAULTTOPRIMARY);
        let mut mi = MONITORINFO {
            cbSize: std::mem::size_of::<MONITORINFO>() as u32,
            ..Default::default()
        };
        if GetMonitorInfoW(monitor, &mut mi).as_bool() {
            let r = mi.rcMonitor;
            (
                Point::new(r.left, r.top),
                Size::new(r.right - r.left, r.bottom - r.top),
            )
        } else {
            tracing::warn!("GetMonitorInfoW failed; assuming 1920x1080");
            (Point::default(), Size::new(1920, 1080))
        }
    }
}

/// Create the overlay on the primary monitor. `notify` receives
/// WM_OVERLAY_BLOCK_CHANGED after drags.
pub fn create(options: OverlayOptions, notify: HWND) -> windows::core::Result<()> {
    let (origin, size) = primary_screen();

    unsafe {
        let hinstance = GetModuleHandleW(PCWSTR::null())?;
        let class_name: Vec<u16> = CLASS_NAME.encode_utf16().collect();

        let wc = WNDCLASSW {
            style: CS_HREDRAW | CS_VREDRAW,
            lpfnWndProc: Some(window_proc),
            hInstance: hinstance.into(),
            lpszClassName: PCWSTR(class_name.as_ptr()),
            ..Default::default()
        };
        RegisterClassW(&wc);

        let hwnd = CreateWindowExW(
            WS_EX_LAYERED | WS_EX_TRANSPARENT | WS_EX_TOPMOST | WS_EX_TOOLWINDOW | WS_EX_NOACTIVATE,
            PCWSTR(class_name.as_ptr()),
            PCWSTR::null(),
            WS_POPUP | WS_VISIBLE,
            origin.x,
            origin.y,
            size.width,
            size.height,
            None,
            None,
            Some(hinstance.into()),
            None,
        )?;

        let interaction = BlockInteraction::new(options.block, size)
            .with_limits(options.hit_tolerance, options.min_block_extent);

        *OVERLAY.lock().unwrap() = Some(OverlayState {
            hwnd: hwnd.0 as isize,
            notify: notify.0 as isize,
            origin,
            interaction,
            color: options.color,
            alpha: options.alpha,
            visible: options.visible,
            adjust: false,
        });
    }

    tracing::info!(
        "Overlay created at ({}, {}) size {}x{}",
        origin.x,
        origin.y,
        size.width,
        size.height
    );
    redraw();
    Ok(())
}

pub fn destroy() {
    let state = OVERLAY.lock().unwrap().take();
    if let Some(state) = state {
        unsafe {
            let _ = DestroyWindow(hwnd_from(state.hwnd));
        }
    }
}

pub fn block() -> Option<Rect> {
    OVERLAY
        .lock()
        .unwrap()
        .as_ref()
        .map(|s| s.interaction.block())
}

/// Size of the monitor the overlay currently covers
pub fn screen() -> Option<Size> {
    OVERLAY
        .lock()
        .unwrap()
        .as_ref()
        .map(|s| s.interaction.screen())
}

pub fn set_block(block: Rect) {
    if let Some(state) = OVERLAY.lock().unwrap().as_mut() {
        state.interaction.set_block(block);
    }
    redraw();
}

pub fn set_color(color: Rgb, alpha: u8) {
    if let Some(state) = OVERLAY.lock().unwrap().as_mut() {
        state.color = color;
        state.alpha = alpha;
    }
    redraw();
}

pub fn set_visible(visible: bool) {
    if let Some(state) = OVERLAY.lock().unwrap().as_mut() {
        state.visible = visible;
    }
    redraw();
}

/// Toggle click-through. With adjustment on, the block can be dragged.
pub fn set_adjust_mode(adjust: bool) {
    let hwnd = {
        let mut guard = OVERLAY.lock().unwrap();
        let Some(state) = guard.as_mut() else {
            return;
        };
        state.adjust = adjust;
        state.interaction.release();
        hwnd_from(state.hwnd)
    };

    unsafe {
        let ex_style = GetWindowLongPtrW(hwnd, GWL_EXSTYLE);
        let transparent = WS_EX_TRANSPARENT.0 as isize;
        let ex_style = if adjust {
            ex_style & !transparent
        } else {
            ex_style | transparent
        };
        SetWindowLongPtrW(hwnd, GWL_EXSTYLE, ex_style);
        let _ = SetWindowPos(
            hwnd,
            Some(HWND_TOPMOST),
            0,
            0,
            0,
            0,
            SWP_NOMOVE | SWP_NOSIZE | SWP_NOACTIVATE | SWP_FRAMECHANGED,
        );
        if !adjust {
            let _ = ReleaseCapture();
        }
    }
    tracing::debug!(adjust, "Overlay adjustment mode changed");
}

/// Push the current state to the screen
fn redraw() {
    let snapshot = OVERLAY.lock().unwrap().as_ref().map(|s| {
        (
            hwnd_from(s.hwnd),
            s.origin,
            s.interaction.screen(),
            s.color,
            s.alpha,
            s.visible.then(|| s.interaction.block()),
        )
    });
    let Some((hwnd, origin, size, color, alpha, block)) = snapshot else {
        return;
    };
    if size.is_empty() {
        return;
    }

    unsafe {
        let bmi = BITMAPINFO {
            bmiHeader: BITMAPINFOHEADER {
                biSize: std::mem::size_of::<BITMAPINFOHEADER>() as u32,
                biWidth: size.width,
                biHeight: -size.height,
                biPlanes: 1,
                biBitCount: 32,
                biCompression: BI_RGB.0,
                ..Default::default()
            },
            ..Default::default()
        };

        let hdc_screen = GetDC(None);
        let mut bits: *mut u32 = std::ptr::null_mut();
        let hbm = match CreateDIBSection(
            Some(hdc_screen),
            &bmi,
            DIB_RGB_COLORS,
            &mut bits as *mut _ as *mut _,
            None,
            0,
        ) {
            Ok(hbm) if !bits.is_null() => hbm,
            Ok(_) | Err(_) => {
                tracing::warn!("Could not allocate overlay surface");
                ReleaseDC(None, hdc_screen);
                return;
            }
        };

        let len = (size.width * size.height) as usize;
        let pixels = std::slice::from_raw_parts_mut(bits, len);
        render::fill_overlay(pixels, size, color, alpha, block);

        let mem_dc = CreateCompatibleDC(Some(hdc_screen));
        let old_bmp = SelectObject(mem_dc, hbm.into());

        let pt_src = POINT { x: 0, y: 0 };
        let pt_dst = POINT {
            x: origin.x,
            y: origin.y,
        };
        let win_size = SIZE {
            cx: size.width,
            cy: size.height,
        };
        let blend = BLENDFUNCTION {
            BlendOp: AC_SRC_OVER as u8,
            SourceConstantAlpha: 255,
            AlphaFormat: AC_SRC_ALPHA as u8,
            ..Default::default()
        };

        if let Err(e) = UpdateLayeredWindow(
            hwnd,
            Some(hdc_screen),
            Some(&pt_dst),
            Some(&win_size),
            Some(mem_dc),
            Some(&pt_src),
            COLORREF(0),
            Some(&blend),
            ULW_ALPHA,
        ) {
            tracing::warn!("UpdateLayeredWindow failed: {e}");
        }

        SelectObject(mem_dc, old_bmp);
        let _ = DeleteDC(mem_dc);
        let _ = DeleteObject(hbm.into());
        ReleaseDC(None, hdc_screen);
    }
}

fn set_cursor(shape: CursorShape) {
    let id = match shape {
        CursorShape::Arrow => IDC_ARROW,
        CursorShape::SizeAll => IDC_SIZEALL,
        CursorShape::SizeNwse => IDC_SIZENWSE,
        CursorShape::SizeNesw => IDC_SIZENESW,
        CursorShape::SizeNs => IDC_SIZENS,
        CursorShape::SizeWe => IDC_SIZEWE,
    };
    unsafe {
        if let Ok(cursor) = LoadCursorW(None, id) {
            SetCursor(Some(cursor));
        }
    }
}

fn point_from_lparam(lparam: LPARAM) -> Point {
    let x = (lparam.0 & 0xFFFF) as i16 as i32;
    let y = ((lparam.0 >> 16) & 0xFFFF) as i16 as i32;
    Point::new(x, y)
}

fn notify_settings(notify: isize) {
    unsafe {
        let _ = PostMessageW(
            Some(hwnd_from(notify)),
            WM_OVERLAY_BLOCK_CHANGED,
            WPARAM(0),
            LPARAM(0),
        );
    }
}

unsafe extern "system" fn window_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    match msg {
        WM_LBUTTONDOWN => {
            let pos = point_from_lparam(lparam);
            let grabbed = OVERLAY
                .lock()
                .unwrap()
                .as_mut()
                .filter(|s| s.adjust)
                .map(|s| (s.interaction.press(pos), s.interaction.cursor_at(pos)));
            if let Some((true, cursor)) = grabbed {
                SetCapture(hwnd);
                set_cursor(cursor);
            }
            LRESULT(0)
        }

        WM_MOUSEMOVE => {
            let pos = point_from_lparam(lparam);
            let outcome = OVERLAY.lock().unwrap().as_mut().map(|s| {
                let changed = s.interaction.drag_to(pos);
                (changed, s.interaction.cursor_at(pos), s.notify)
            });
            if let Some((changed, cursor, notify)) = outcome {
                set_cursor(cursor);
                if changed {
                    redraw();
                    notify_settings(notify);
                }
            }
            LRESULT(0)
        }

        WM_LBUTTONUP => {
            let released = OVERLAY.lock().unwrap().as_mut().map(|s| {
                let was_dragging = s.interaction.is_dragging();
                s.interaction.release();
                if was_dragging {
                    let b = s.interaction.block();
                    tracing::debug!(x = b.x, y = b.y, w = b.width, h = b.height, "Block drag finished");
                }
                was_dragging
            });
            if released == Some(true) {
                let _ = ReleaseCapture();
            }
            LRESULT(0)
        }

        WM_SETCURSOR if (lparam.0 & 0xFFFF) as u32 == HTCLIENT => {
            let mut pt = POINT::default();
            let _ = GetCursorPos(&mut pt);
            let _ = ScreenToClient(hwnd, &mut pt);
            let cursor = OVERLAY
                .lock()
                .unwrap()
                .as_ref()
                .filter(|s| s.adjust)
                .map(|s| s.interaction.cursor_at(Point::new(pt.x, pt.y)));
            match cursor {
                Some(shape) => {
                    set_cursor(shape);
                    LRESULT(1)
                }
                None => DefWindowProcW(hwnd, msg, wparam, lparam),
            }
        }

        WM_DISPLAYCHANGE => {
            let (origin, size) = primary_screen();
            let notify = OVERLAY.lock().unwrap().as_mut().map(|s| {
                s.origin = origin;
                s.interaction.set_screen(size);
                s.notify
            });
            if let Some(notify) = notify {
                let _ = SetWindowPos(
                    hwnd,
                    Some(HWND_TOPMOST),
                    origin.x,
                    origin.y,
                    size.width,
                    size.height,
                    SWP_NOACTIVATE,
                );
                tracing::info!("Display changed; overlay now {}x{}", size.width, size.height);
                redraw();
                notify_settings(notify);
            }
            LRESULT(0)
        }

        _ => DefWindowProcW(hwnd, msg, wparam, lparam),
    }
}
