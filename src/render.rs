// Overlay pixel fill for a 32-bpp top-down premultiplied BGRA surface
// (the layout UpdateLayeredWindow expects with AC_SRC_ALPHA).

use crate::color::Rgb;
use crate::geometry::{Rect, Size};

/// Alpha given to the focus block. Fully transparent pixels of a layered
/// window never receive mouse input, so the block keeps a sliver of alpha
/// to stay draggable in adjustment mode.
pub const BLOCK_ALPHA: u8 = 1;

pub fn premultiply(color: Rgb, alpha: u8) -> u32 {
    let a = alpha as u32;
    let scale = |c: u8| (c as u32 * a + 127) / 255;
    (a << 24) | (scale(color.r) << 16) | (scale(color.g) << 8) | scale(color.b)
}

/// Paint the dimming layer. `block = None` means the focus block is hidden
/// and nothing is drawn at all.
pub fn fill_overlay(pixels: &mut [u32], size: Size, color: Rgb, alpha: u8, block: Option<Rect>) {
    let Some(block) = block else {
        pixels.fill(0);
        return;
    };

    let shade = premultiply(color, alpha);
    pixels.fill(shade);

    let Some(hole) = block.clip_to(size) else {
        return;
    };
    let clear = premultiply(Rgb::BLACK, BLOCK_ALPHA);
    let width = size.width as usize;
    for row in hole.top()..hole.bottom() {
        let start = row as usize * width + hole.left() as usize;
        let end = start + hole.width as usize;
        if end > pixels.len() {
            break;
        }
        pixels[start..end].fill(clear);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn premultiplies_channels() {
        assert_eq!(premultiply(Rgb::new(255, 0, 255), 255), 0xFFFF00FF);
        assert_eq!(premultiply(Rgb::new(255, 255, 255), 0), 0);
        assert_eq!(premultiply(Rgb::new(200, 100, 0), 128), 0x8064_3200);
    }

    #[test]
    fn block_is_cut_out_with_minimal_alpha() {
        let size = Size::new(4, 3);
        let mut px = vec![0u32; 12];
        fill_overlay(&mut px, size, Rgb::BLACK, 150, Some(Rect::new(1, 1, 2, 1)));

        let shade = 150u32 << 24;
        let hole = 1u32 << 24;
        assert_eq!(
            px,
            vec![
                shade, shade, shade, shade, //
                shade, hole, hole, shade, //
                shade, shade, shade, shade,
            ]
        );
    }

    #[test]
    fn offscreen_parts_of_block_are_clipped() {
        let size = Size::new(3, 2);
        let mut px = vec![0u32; 6];
        fill_overlay(&mut px, size, Rgb::BLACK, 10, Some(Rect::new(2, -5, 10, 6)));
        let hole = 1u32 << 24;
        assert_eq!(px[2], hole);
        assert_eq!(px[5], 10u32 << 24);
        assert_eq!(px[0], 10u32 << 24);
    }

    #[test]
    fn hidden_block_clears_everything() {
        let size = Size::new(2, 2);
        let mut px = vec![7u32; 4];
        fill_overlay(&mut px, size, Rgb::new(9, 9, 9), 200, None);
        assert!(px.iter().all(|&p| p == 0));
    }
}
