// GDI owner-draw rendering of the settings panel

use super::controls::*;
use super::theme::*;
use crate::geometry::Rect;
use crate::settings::{Axis, Field, SettingsModel, Unit};
use windows::Win32::Foundation::{COLORREF, RECT};
use windows::Win32::Graphics::Gdi::*;

// ── Helpers ──────────────────────────────────────────────────────────────────

fn create_font(size: i32, weight: i32, family: &str) -> HFONT {
    let face: Vec<u16> = family.encode_utf16().chain(std::iter::once(0)).collect();
    unsafe {
        let mut lf = LOGFONTW {
            lfHeight: size,
            lfWeight: weight,
            lfQuality: CLEARTYPE_QUALITY,
            lfCharSet: DEFAULT_CHARSET,
            ..Default::default()
        };
        let len = face.len().min(32);
        lf.lfFaceName[..len].copy_from_slice(&face[..len]);
        CreateFontIndirectW(&lf)
    }
}

fn fill_rect_color(hdc: HDC, r: &RECT, color: COLORREF) {
    unsafe {
        let brush = CreateSolidBrush(color);
        FillRect(hdc, r, brush);
        let _ = DeleteObject(HGDIOBJ::from(brush));
    }
}

fn draw_rounded_rect(hdc: HDC, r: Rect, radius: i32, fill: COLORREF, border: COLORREF) {
    unsafe {
        let fill_brush = CreateSolidBrush(fill);
        let border_pen = CreatePen(PS_SOLID, 1, border);
        let old_brush = SelectObject(hdc, HGDIOBJ::from(fill_brush));
        let old_pen = SelectObject(hdc, HGDIOBJ::from(border_pen));
        let _ = RoundRect(hdc, r.left(), r.top(), r.right(), r.bottom(), radius, radius);
        SelectObject(hdc, old_pen);
        SelectObject(hdc, old_brush);
        let _ = DeleteObject(HGDIOBJ::from(fill_brush));
        let _ = DeleteObject(HGDIOBJ::from(border_pen));
    }
}

fn draw_text_simple(hdc: HDC, text: &str, x: i32, y: i32, color: COLORREF, font: HFONT) {
    unsafe {
        let old_font = SelectObject(hdc, HGDIOBJ::from(font));
        SetTextColor(hdc, color);
        SetBkMode(hdc, TRANSPARENT);
        let wide: Vec<u16> = text.encode_utf16().collect();
        let _ = TextOutW(hdc, x, y, &wide);
        SelectObject(hdc, old_font);
    }
}

fn measure_text(hdc: HDC, text: &str, font: HFONT) -> (i32, i32) {
    unsafe {
        let old_font = SelectObject(hdc, HGDIOBJ::from(font));
        let wide: Vec<u16> = text.encode_utf16().collect();
        let mut size = windows::Win32::Foundation::SIZE::default();
        let _ = GetTextExtentPoint32W(hdc, &wide, &mut size);
        SelectObject(hdc, old_font);
        (size.cx, size.cy)
    }
}

fn draw_text_right(hdc: HDC, text: &str, right_x: i32, y: i32, color: COLORREF, font: HFONT) {
    let (w, _) = measure_text(hdc, text, font);
    draw_text_simple(hdc, text, right_x - w, y, color, font);
}

fn draw_text_centered(hdc: HDC, text: &str, r: Rect, color: COLORREF, font: HFONT) {
    let (tw, th) = measure_text(hdc, text, font);
    let c = r.center();
    draw_text_simple(hdc, text, c.x - tw / 2, c.y - th / 2, color, font);
}

fn draw_circle(hdc: HDC, cx: i32, cy: i32, r: i32, color: COLORREF) {
    unsafe {
        let brush = CreateSolidBrush(color);
        let pen = CreatePen(PS_SOLID, 0, color);
        let old_brush = SelectObject(hdc, HGDIOBJ::from(brush));
        let old_pen = SelectObject(hdc, HGDIOBJ::from(pen));
        let _ = Ellipse(hdc, cx - r, cy - r, cx + r, cy + r);
        SelectObject(hdc, old_pen);
        SelectObject(hdc, old_brush);
        let _ = DeleteObject(HGDIOBJ::from(brush));
        let _ = DeleteObject(HGDIOBJ::from(pen));
    }
}

fn draw_card(hdc: HDC, top: i32, height: i32) -> Rect {
    let card = Rect::new(PADDING, top, CONTENT_WIDTH, height);
    draw_rounded_rect(hdc, card, CARD_RADIUS, CLR_BACKGROUND, CLR_BORDER);
    card
}

fn draw_button(hdc: HDC, btn: &mut ButtonState, r: Rect, fg: COLORREF, fonts: &Fonts) {
    let (bg, border) = if btn.hover {
        (CLR_MUTED_FG, CLR_MUTED_FG)
    } else {
        (CLR_SECONDARY, CLR_BORDER)
    };
    draw_rounded_rect(hdc, r, CARD_RADIUS, bg, border);
    draw_text_centered(hdc, btn.text, r, fg, fonts.xs);
    btn.rect = r;
}

/// Lay out `buttons` in equal-width cells across `[left, right)`
fn draw_button_row(
    hdc: HDC,
    buttons: &mut [(&mut ButtonState, COLORREF)],
    left: i32,
    right: i32,
    y: i32,
    fonts: &Fonts,
) {
    let gap = 8;
    let n = buttons.len() as i32;
    let cell = (right - left - gap * (n - 1)) / n;
    for (i, (btn, fg)) in buttons.iter_mut().enumerate() {
        let x = left + i as i32 * (cell + gap);
        draw_button(hdc, btn, Rect::new(x, y, cell, BUTTON_HEIGHT), *fg, fonts);
    }
}

// ── Main paint function ─────────────────────────────────────────────────────

pub fn paint(hdc: HDC, client: &RECT, ui: &mut UiState, model: &SettingsModel) {
    fill_rect_color(hdc, client, CLR_BACKGROUND);

    let fonts = Fonts::create();
    let mut y = PADDING;

    y = draw_header(hdc, y, model, &fonts);
    y += GAP;

    y = draw_tab_bar(hdc, y, ui, &fonts);
    y += GAP;

    match ui.active_tab {
        Tab::Block => draw_block_tab(hdc, y, ui, model, &fonts),
        Tab::Overlay => draw_overlay_tab(hdc, y, ui, model, &fonts),
        Tab::Presets => draw_presets_tab(hdc, y, ui, model, &fonts),
    };

    let exit_rect = Rect::new(
        PADDING,
        client.bottom - PADDING - BUTTON_HEIGHT,
        CONTENT_WIDTH,
        BUTTON_HEIGHT,
    );
    draw_button(hdc, &mut ui.exit_btn, exit_rect, CLR_DANGER, &fonts);

    if ui.toast_visible {
        draw_toast(hdc, client, ui, &fonts);
    }

    fonts.destroy();
}

// ── Font cache ──────────────────────────────────────────────────────────────

struct Fonts {
    title: HFONT,
    small: HFONT,
    small_bold: HFONT,
    xs: HFONT,
    xxs: HFONT,
    mono: HFONT,
}

impl Fonts {
    fn create() -> Self {
        Self {
            title: create_font(FONT_SIZE_TITLE, 600, FONT_NAME),
            small: create_font(FONT_SIZE_SMALL, 400, FONT_NAME),
            small_bold: create_font(FONT_SIZE_SMALL, 500, FONT_NAME),
            xs: create_font(FONT_SIZE_XS, 400, FONT_NAME),
            xxs: create_font(FONT_SIZE_XXS, 400, FONT_NAME),
            mono: create_font(FONT_SIZE_SMALL, 500, FONT_MONO_NAME),
        }
    }

    fn destroy(&self) {
        unsafe {
            let _ = DeleteObject(HGDIOBJ::from(self.title));
            let _ = DeleteObject(HGDIOBJ::from(self.small));
            let _ = DeleteObject(HGDIOBJ::from(self.small_bold));
            let _ = DeleteObject(HGDIOBJ::from(self.xs));
            let _ = DeleteObject(HGDIOBJ::from(self.xxs));
            let _ = DeleteObject(HGDIOBJ::from(self.mono));
        }
    }
}

// ── Section renderers ───────────────────────────────────────────────────────

fn draw_header(hdc: HDC, y: i32, model: &SettingsModel, fonts: &Fonts) -> i32 {
    let x = PADDING;
    let right = PADDING + CONTENT_WIDTH;
    let icon_size = 40;

    // Dimmed screen with a bright focus block
    draw_rounded_rect(
        hdc,
        Rect::new(x, y + 6, icon_size, icon_size - 12),
        6,
        CLR_SECONDARY,
        CLR_BRAND,
    );
    draw_rounded_rect(
        hdc,
        Rect::new(x + 11, y + 13, icon_size - 22, icon_size - 26),
        3,
        CLR_BRAND,
        CLR_BRAND,
    );

    let text_x = x + icon_size + 12;
    draw_text_simple(hdc, "Focus Overlay", text_x, y + 2, CLR_FOREGROUND, fonts.title);
    draw_text_simple(hdc, "Screen Focus Block", text_x, y + 22, CLR_MUTED_FG, fonts.xs);

    draw_text_right(hdc, model.collection_name(), right, y + 4, CLR_MUTED_FG, fonts.xxs);
    draw_text_right(
        hdc,
        &model.current().preset_name,
        right,
        y + 18,
        CLR_BRAND,
        fonts.xs,
    );

    let header_bottom = y + icon_size + 8;
    unsafe {
        let pen = CreatePen(PS_SOLID, 1, CLR_BORDER);
        let old_pen = SelectObject(hdc, HGDIOBJ::from(pen));
        let _ = MoveToEx(hdc, PADDING, header_bottom, None);
        let _ = LineTo(hdc, right, header_bottom);
        SelectObject(hdc, old_pen);
        let _ = DeleteObject(HGDIOBJ::from(pen));
    }

    header_bottom + 8
}

fn draw_tab_bar(hdc: HDC, y: i32, ui: &mut UiState, fonts: &Fonts) -> i32 {
    let x = PADDING;
    let bar_rect = Rect::new(x, y, CONTENT_WIDTH, TAB_HEIGHT + 8);
    draw_rounded_rect(hdc, bar_rect, CARD_RADIUS, CLR_SECONDARY, CLR_SECONDARY);

    let tab_width = CONTENT_WIDTH / 3;
    let tab_pad = 4;

    for (i, tab) in Tab::ALL.iter().enumerate() {
        let tx = x + tab_pad + (i as i32) * tab_width;
        let tab_rect = Rect::new(tx, y + tab_pad, tab_width - tab_pad, TAB_HEIGHT);

        let is_active = ui.active_tab == *tab;
        if is_active {
            draw_rounded_rect(hdc, tab_rect, CARD_RADIUS - 2, CLR_BACKGROUND, CLR_BACKGROUND);
        }
        let text_color = if is_active {
            CLR_FOREGROUND
        } else {
            CLR_MUTED_FG
        };
        draw_text_centered(hdc, tab.title(), tab_rect, text_color, fonts.small_bold);

        ui.tab_rects[i] = tab_rect;
    }

    bar_rect.bottom()
}

/// Text shown in a spin box, also the starting text when editing one
pub fn format_value(value: f64, unit: Unit) -> String {
    match unit {
        Unit::Pixels => format!("{value:.0}"),
        Unit::Percent => format!("{value:.2}"),
    }
}

fn draw_block_tab(hdc: HDC, y: i32, ui: &mut UiState, model: &SettingsModel, fonts: &Fonts) {
    let card_h = 126;
    let sections = [
        (Axis::Position, "Block Position", [Field::X, Field::Y]),
        (Axis::Size, "Block Size", [Field::W, Field::H]),
    ];

    for (i, (axis, title, fields)) in sections.into_iter().enumerate() {
        let top = y + i as i32 * (card_h + GAP);
        let card = draw_card(hdc, top, card_h);
        let inner_x = card.left() + 16;
        let inner_right = card.right() - 16;

        draw_text_simple(hdc, title, inner_x, top + 14, CLR_FOREGROUND, fonts.small_bold);

        let unit = model.unit(axis);
        let toggle_x = inner_right - 44;
        draw_text_right(
            hdc,
            "Absolute (px)",
            toggle_x - 8,
            top + 16,
            CLR_MUTED_FG,
            fonts.xs,
        );
        let toggle = match axis {
            Axis::Position => &mut ui.position_pixels,
            Axis::Size => &mut ui.size_pixels,
        };
        toggle.checked = unit == Unit::Pixels;
        toggle.rect = draw_toggle(hdc, toggle_x, top + 12, toggle.checked);

        for (row, field) in fields.into_iter().enumerate() {
            let row_y = top + 48 + row as i32 * 38;
            let editing = match &ui.editing {
                Editing::Field(f, input) if *f == field => Some(input.text().to_string()),
                _ => None,
            };
            let text = editing
                .clone()
                .unwrap_or_else(|| format_value(model.display_value(field), unit));
            let spin = &mut ui.spins[field as usize];
            draw_spin(
                hdc,
                spin,
                field.label(),
                &text,
                unit,
                editing.is_some(),
                (inner_x, inner_right, row_y),
                fonts,
            );
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_spin(
    hdc: HDC,
    spin: &mut SpinState,
    label: &str,
    text: &str,
    unit: Unit,
    editing: bool,
    (left, right, y): (i32, i32, i32),
    fonts: &Fonts,
) {
    draw_text_simple(hdc, label, left, y + 7, CLR_MUTED_FG, fonts.small);

    let h = 30;
    let step_w = 28;
    let unit_w = 22;
    let box_w = 96;

    let plus = Rect::new(right - unit_w - step_w, y, step_w, h);
    let value = Rect::new(plus.left() - 4 - box_w, y, box_w, h);
    let minus = Rect::new(value.left() - 4 - step_w, y, step_w, h);

    draw_rounded_rect(hdc, minus, CARD_RADIUS - 2, CLR_SECONDARY, CLR_BORDER);
    draw_text_centered(hdc, "-", minus, CLR_FOREGROUND, fonts.small_bold);
    draw_rounded_rect(hdc, plus, CARD_RADIUS - 2, CLR_SECONDARY, CLR_BORDER);
    draw_text_centered(hdc, "+", plus, CLR_FOREGROUND, fonts.small_bold);

    let border = if editing { CLR_BRAND } else { CLR_BORDER };
    draw_rounded_rect(hdc, value, CARD_RADIUS - 2, CLR_BACKGROUND, border);
    let shown = if editing {
        format!("{text}|")
    } else {
        text.to_string()
    };
    draw_text_centered(hdc, &shown, value, CLR_FOREGROUND, fonts.mono);

    draw_text_right(hdc, unit.suffix(), right, y + 8, CLR_MUTED_FG, fonts.xs);

    spin.minus_rect = minus;
    spin.value_rect = value;
    spin.plus_rect = plus;
}

fn draw_overlay_tab(hdc: HDC, y: i32, ui: &mut UiState, model: &SettingsModel, fonts: &Fonts) {
    // Card 1: Transparency
    let card1 = draw_card(hdc, y, 100);
    let inner_x = card1.left() + 16;
    let inner_right = card1.right() - 16;

    draw_text_simple(
        hdc,
        "Overlay Transparency",
        inner_x,
        card1.top() + 14,
        CLR_FOREGROUND,
        fonts.small_bold,
    );

    let badge_text = ui.alpha_slider.value.to_string();
    let (bw, bh) = measure_text(hdc, &badge_text, fonts.xs);
    let badge = Rect::new(inner_right - bw - 20, card1.top() + 12, bw + 20, bh + 4);
    draw_rounded_rect(hdc, badge, badge.height / 2, CLR_BRAND, CLR_BRAND);
    draw_text_centered(hdc, &badge_text, badge, CLR_BACKGROUND, fonts.xs);

    let slider_y = card1.top() + 48;
    let track_h = 8;
    let thumb_r = 9;
    ui.alpha_slider.rect = Rect::new(inner_x, slider_y, inner_right - inner_x, track_h);
    draw_rounded_rect(hdc, ui.alpha_slider.rect, 4, CLR_SECONDARY, CLR_SECONDARY);

    let fill_w = ui.alpha_slider.thumb_x() - inner_x;
    if fill_w > 0 {
        draw_rounded_rect(
            hdc,
            Rect::new(inner_x, slider_y, fill_w, track_h),
            4,
            CLR_BRAND,
            CLR_BRAND,
        );
    }
    draw_circle(
        hdc,
        ui.alpha_slider.thumb_x(),
        slider_y + track_h / 2,
        thumb_r,
        CLR_FOREGROUND,
    );
    ui.alpha_slider.thumb_rect = Rect::from_edges(
        inner_x - thumb_r,
        slider_y - thumb_r - 4,
        inner_right + thumb_r,
        slider_y + track_h + thumb_r + 4,
    );

    draw_text_simple(hdc, "Clear", inner_x, slider_y + track_h + 6, CLR_MUTED_FG, fonts.xxs);
    draw_text_right(
        hdc,
        "Opaque",
        inner_right,
        slider_y + track_h + 6,
        CLR_MUTED_FG,
        fonts.xxs,
    );

    // Card 2: Color
    let card2 = draw_card(hdc, card1.bottom() + GAP, 56);
    let (color, _) = model.overlay_color();
    let swatch = Rect::new(inner_x, card2.top() + 14, 28, 28);
    draw_rounded_rect(
        hdc,
        swatch,
        6,
        COLORREF(color.to_colorref()),
        CLR_MUTED_FG,
    );
    ui.swatch_rect = swatch;
    draw_text_simple(
        hdc,
        "Overlay Color",
        swatch.right() + 12,
        card2.top() + 11,
        CLR_FOREGROUND,
        fonts.small_bold,
    );
    draw_text_simple(
        hdc,
        &color.to_hex(),
        swatch.right() + 12,
        card2.top() + 29,
        CLR_MUTED_FG,
        fonts.xs,
    );
    let btn = Rect::new(inner_right - 96, card2.top() + 14, 96, BUTTON_HEIGHT);
    draw_button(hdc, &mut ui.color_btn, btn, CLR_FOREGROUND, fonts);

    // Card 3: Visibility and adjustment
    let card3 = draw_card(hdc, card2.bottom() + GAP, 112);
    let toggle_x = inner_right - 44;
    let rows = [
        (
            "Show Focus Block",
            "Dim the screen around the block",
            model.show_block,
        ),
        (
            "Size Adjustment Mode",
            "Drag the block on screen to move or resize",
            model.adjust_mode,
        ),
    ];
    for (i, (title, desc, checked)) in rows.into_iter().enumerate() {
        let row_y = card3.top() + 10 + i as i32 * 50;
        draw_text_simple(hdc, title, inner_x, row_y, CLR_FOREGROUND, fonts.small_bold);
        draw_text_simple(hdc, desc, inner_x, row_y + 18, CLR_MUTED_FG, fonts.xs);
        let toggle = if i == 0 {
            &mut ui.show_block_toggle
        } else {
            &mut ui.adjust_toggle
        };
        toggle.checked = checked;
        toggle.rect = draw_toggle(hdc, toggle_x, row_y + 6, checked);
    }
}

fn draw_presets_tab(hdc: HDC, y: i32, ui: &mut UiState, model: &SettingsModel, fonts: &Fonts) {
    // Card 1: Collection
    let card1 = draw_card(hdc, y, 116);
    let inner_x = card1.left() + 16;
    let inner_right = card1.right() - 16;

    draw_text_simple(
        hdc,
        "Collection",
        inner_x,
        card1.top() + 12,
        CLR_MUTED_FG,
        fonts.xs,
    );
    draw_text_simple(
        hdc,
        model.collection_name(),
        inner_x,
        card1.top() + 30,
        CLR_FOREGROUND,
        fonts.small_bold,
    );
    let file_text = match model.bound_path() {
        Some(path) => path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string()),
        None => "Not saved yet".to_string(),
    };
    draw_text_simple(
        hdc,
        &file_text,
        inner_x,
        card1.top() + 48,
        CLR_MUTED_FG,
        fonts.xxs,
    );
    draw_button(
        hdc,
        &mut ui.rename_collection_btn,
        Rect::new(inner_right - 80, card1.top() + 16, 80, BUTTON_HEIGHT),
        CLR_FOREGROUND,
        fonts,
    );
    draw_button_row(
        hdc,
        &mut [
            (&mut ui.new_btn, CLR_FOREGROUND),
            (&mut ui.import_btn, CLR_FOREGROUND),
            (&mut ui.save_btn, CLR_FOREGROUND),
            (&mut ui.export_btn, CLR_FOREGROUND),
        ],
        inner_x,
        inner_right,
        card1.top() + 74,
        fonts,
    );

    // Card 2: Preset selection and editing
    let card2 = draw_card(hdc, card1.bottom() + GAP, 118);
    draw_text_simple(
        hdc,
        "Preset",
        inner_x,
        card2.top() + 12,
        CLR_MUTED_FG,
        fonts.xs,
    );
    let count = format!(
        "{} of {}",
        model.current_index() + 1,
        model.collection().len()
    );
    draw_text_right(hdc, &count, inner_right, card2.top() + 12, CLR_MUTED_FG, fonts.xs);

    let sel_y = card2.top() + 34;
    let arrow_w = 32;
    draw_button(
        hdc,
        &mut ui.prev_btn,
        Rect::new(inner_x, sel_y, arrow_w, BUTTON_HEIGHT),
        CLR_FOREGROUND,
        fonts,
    );
    draw_button(
        hdc,
        &mut ui.next_btn,
        Rect::new(inner_right - arrow_w, sel_y, arrow_w, BUTTON_HEIGHT),
        CLR_FOREGROUND,
        fonts,
    );
    let name_rect = Rect::from_edges(
        inner_x + arrow_w + 6,
        sel_y,
        inner_right - arrow_w - 6,
        sel_y + BUTTON_HEIGHT,
    );
    draw_rounded_rect(hdc, name_rect, CARD_RADIUS - 2, CLR_BACKGROUND, CLR_BORDER);
    draw_text_centered(
        hdc,
        &model.current().preset_name,
        name_rect,
        CLR_FOREGROUND,
        fonts.small_bold,
    );
    ui.preset_name_rect = name_rect;

    draw_button_row(
        hdc,
        &mut [
            (&mut ui.add_btn, CLR_FOREGROUND),
            (&mut ui.rename_btn, CLR_FOREGROUND),
            (&mut ui.delete_btn, CLR_DANGER),
        ],
        inner_x,
        inner_right,
        card2.top() + 76,
        fonts,
    );

    // Card 3: inline name editor
    if let Editing::Name(prompt, input) = &ui.editing {
        let card3 = draw_card(hdc, card2.bottom() + GAP, 84);
        draw_text_simple(
            hdc,
            prompt.title(),
            inner_x,
            card3.top() + 10,
            CLR_FOREGROUND,
            fonts.small_bold,
        );
        let field = Rect::new(inner_x, card3.top() + 30, inner_right - inner_x, 26);
        draw_rounded_rect(hdc, field, CARD_RADIUS - 2, CLR_BACKGROUND, CLR_BRAND);
        draw_text_simple(
            hdc,
            &format!("{}|", input.text()),
            field.left() + 8,
            field.top() + 5,
            CLR_FOREGROUND,
            fonts.small,
        );
        draw_text_simple(
            hdc,
            "Enter to confirm, Esc to cancel",
            inner_x,
            card3.top() + 62,
            CLR_MUTED_FG,
            fonts.xxs,
        );
    }
}

fn draw_toggle(hdc: HDC, x: i32, y: i32, checked: bool) -> Rect {
    let rect = Rect::new(x, y, 44, 24);

    let track_color = if checked { CLR_BRAND } else { CLR_INPUT };
    draw_rounded_rect(hdc, rect, rect.height / 2, track_color, track_color);

    let thumb_r = 10;
    let thumb_x = if checked {
        rect.right() - 2 - thumb_r
    } else {
        x + 2 + thumb_r
    };
    draw_circle(hdc, thumb_x, y + rect.height / 2, thumb_r, CLR_FOREGROUND);

    rect
}

fn draw_toast(hdc: HDC, client: &RECT, ui: &UiState, fonts: &Fonts) {
    let msg = &ui.toast_message;
    if msg.is_empty() {
        return;
    }

    let (tw, th) = measure_text(hdc, msg, fonts.small_bold);
    let toast_w = tw + 48;
    let toast_h = th + 24;
    let toast = Rect::new(
        (client.right - toast_w) / 2,
        client.bottom - toast_h - PADDING - BUTTON_HEIGHT - GAP,
        toast_w,
        toast_h,
    );
    draw_rounded_rect(hdc, toast, CARD_RADIUS, CLR_FOREGROUND, CLR_FOREGROUND);
    draw_text_centered(hdc, msg, toast, CLR_BACKGROUND, fonts.small_bold);
}
