// Pointer-driven move/resize of the focus block.
//
// The overlay window feeds press/move/release events in screen-local
// coordinates. Corners win over edges, edges win over the block body.
// Every drag result is clamped to the screen and never shrinks the block
// below `min_extent` on either axis.

use crate::geometry::{Point, Rect, Size};

pub const DEFAULT_TOLERANCE: i32 = 20;
pub const DEFAULT_MIN_EXTENT: i32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handle {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Top,
    Bottom,
    Left,
    Right,
}

impl Handle {
    const CORNERS: [Handle; 4] = [
        Handle::TopLeft,
        Handle::TopRight,
        Handle::BottomLeft,
        Handle::BottomRight,
    ];

    fn moves_top(self) -> bool {
        matches!(self, Handle::TopLeft | Handle::TopRight | Handle::Top)
    }

    fn moves_bottom(self) -> bool {
        matches!(self, Handle::BottomLeft | Handle::BottomRight | Handle::Bottom)
    }

    fn moves_left(self) -> bool {
        matches!(self, Handle::TopLeft | Handle::BottomLeft | Handle::Left)
    }

    fn moves_right(self) -> bool {
        matches!(self, Handle::TopRight | Handle::BottomRight | Handle::Right)
    }

    fn cursor(self) -> CursorShape {
        match self {
            Handle::TopLeft | Handle::BottomRight => CursorShape::SizeNwse,
            Handle::TopRight | Handle::BottomLeft => CursorShape::SizeNesw,
            Handle::Top | Handle::Bottom => CursorShape::SizeNs,
            Handle::Left | Handle::Right => CursorShape::SizeWe,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Resize(Handle),
    Move,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorShape {
    Arrow,
    SizeAll,
    SizeNwse,
    SizeNesw,
    SizeNs,
    SizeWe,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Drag {
    Idle,
    Resizing(Handle),
    Moving { offset: Point },
}

#[derive(Debug, Clone)]
pub struct BlockInteraction {
    block: Rect,
    screen: Size,
    tolerance: i32,
    min_extent: i32,
    drag: Drag,
}

impl BlockInteraction {
    pub fn new(block: Rect, screen: Size) -> Self {
        Self {
            block,
            screen,
            tolerance: DEFAULT_TOLERANCE,
            min_extent: DEFAULT_MIN_EXTENT,
            drag: Drag::Idle,
        }
    }

    pub fn with_limits(mut self, tolerance: i32, min_extent: i32) -> Self {
        self.tolerance = tolerance.max(1);
        self.min_extent = min_extent.max(1);
        self
    }

    pub fn block(&self) -> Rect {
        self.block
    }

    /// Replace the block from outside (settings edits). Cancels any drag.
    pub fn set_block(&mut self, block: Rect) {
        self.block = block;
        self.drag = Drag::Idle;
    }

    pub fn screen(&self) -> Size {
        self.screen
    }

    /// Adopt a new screen size, pulling the block back inside it
    pub fn set_screen(&mut self, screen: Size) {
        self.screen = screen;
        self.drag = Drag::Idle;
        let w = self.block.width.min(screen.width).max(0);
        let h = self.block.height.min(screen.height).max(0);
        let x = self.block.x.clamp(0, (screen.width - w).max(0));
        let y = self.block.y.clamp(0, (screen.height - h).max(0));
        self.block = Rect::new(x, y, w, h);
    }

    pub fn is_dragging(&self) -> bool {
        self.drag != Drag::Idle
    }

    fn corner_at(&self, pos: Point) -> Option<Handle> {
        Handle::CORNERS.into_iter().find(|h| {
            let corner = match h {
                Handle::TopLeft => self.block.top_left(),
                Handle::TopRight => self.block.top_right(),
                Handle::BottomLeft => self.block.bottom_left(),
                _ => self.block.bottom_right(),
            };
            corner.manhattan_distance(pos) < self.tolerance
        })
    }

    fn edge_at(&self, pos: Point) -> Option<Handle> {
        let b = &self.block;
        let within_x = pos.x >= b.left() && pos.x <= b.right();
        let within_y = pos.y >= b.top() && pos.y <= b.bottom();

        if within_x && (pos.y - b.top()).abs() < self.tolerance {
            Some(Handle::Top)
        } else if within_x && (pos.y - b.bottom()).abs() < self.tolerance {
            Some(Handle::Bottom)
        } else if within_y && (pos.x - b.left()).abs() < self.tolerance {
            Some(Handle::Left)
        } else if within_y && (pos.x - b.right()).abs() < self.tolerance {
            Some(Handle::Right)
        } else {
            None
        }
    }

    pub fn hit_test(&self, pos: Point) -> Hit {
        if let Some(handle) = self.corner_at(pos).or_else(|| self.edge_at(pos)) {
            Hit::Resize(handle)
        } else if self.block.contains(pos) {
            Hit::Move
        } else {
            Hit::None
        }
    }

    pub fn cursor_at(&self, pos: Point) -> CursorShape {
        match self.drag {
            Drag::Resizing(handle) => handle.cursor(),
            Drag::Moving { .. } => CursorShape::SizeAll,
            Drag::Idle => match self.hit_test(pos) {
                Hit::Resize(handle) => handle.cursor(),
                Hit::Move => CursorShape::SizeAll,
                Hit::None => CursorShape::Arrow,
            },
        }
    }

    /// Begin a drag at `pos`. Returns whether anything was grabbed.
    pub fn press(&mut self, pos: Point) -> bool {
        self.drag = match self.hit_test(pos) {
            Hit::Resize(handle) => Drag::Resizing(handle),
            Hit::Move => Drag::Moving {
                offset: pos - self.block.top_left(),
            },
            Hit::None => Drag::Idle,
        };
        self.is_dragging()
    }

    /// Apply the active drag. Returns whether the block changed.
    pub fn drag_to(&mut self, pos: Point) -> bool {
        let next = match self.drag {
            Drag::Idle => return false,
            Drag::Resizing(handle) => self.resized(handle, pos),
            Drag::Moving { offset } => self.moved(pos - offset),
        };
        if next == self.block {
            return false;
        }
        self.block = next;
        true
    }

    pub fn release(&mut self) {
        self.drag = Drag::Idle;
    }

    fn resized(&self, handle: Handle, pos: Point) -> Rect {
        let b = &self.block;
        let (mut left, mut top, mut right, mut bottom) = (b.left(), b.top(), b.right(), b.bottom());

        if handle.moves_top() {
            top = (bottom - self.min_extent).min(pos.y.max(0));
        }
        if handle.moves_bottom() {
            bottom = (top + self.min_extent).max(pos.y.min(self.screen.height));
        }
        if handle.moves_left() {
            left = (right - self.min_extent).min(pos.x.max(0));
        }
        if handle.moves_right() {
            right = (left + self.min_extent).max(pos.x.min(self.screen.width));
        }

        Rect::from_edges(left, top, right, bottom)
    }

    fn moved(&self, origin: Point) -> Rect {
        let max_x = self.screen.width - self.block.width;
        let max_y = self.screen.height - self.block.height;
        let x = origin.x.min(max_x).max(0);
        let y = origin.y.min(max_y).max(0);
        Rect::new(x, y, self.block.width, self.block.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: Size = Size::new(1920, 1080);

    fn interaction() -> BlockInteraction {
        BlockInteraction::new(Rect::new(400, 300, 600, 400), SCREEN)
    }

    #[test]
    fn corners_take_priority_over_edges() {
        let ia = interaction();
        assert_eq!(
            ia.hit_test(Point::new(405, 305)),
            Hit::Resize(Handle::TopLeft)
        );
        assert_eq!(
            ia.hit_test(Point::new(1000, 700)),
            Hit::Resize(Handle::BottomRight)
        );
        assert_eq!(
            ia.hit_test(Point::new(995, 302)),
            Hit::Resize(Handle::TopRight)
        );
    }

    #[test]
    fn tolerance_is_strict_manhattan() {
        let ia = interaction();
        // distance 20 is not a corner hit, falls back to the top edge
        assert_eq!(ia.hit_test(Point::new(410, 290)), Hit::Resize(Handle::Top));
        assert_eq!(
            ia.hit_test(Point::new(410, 291)),
            Hit::Resize(Handle::TopLeft)
        );
    }

    #[test]
    fn edges_require_span_overlap() {
        let ia = interaction();
        assert_eq!(ia.hit_test(Point::new(700, 690)), Hit::Resize(Handle::Bottom));
        assert_eq!(ia.hit_test(Point::new(385, 500)), Hit::Resize(Handle::Left));
        assert_eq!(ia.hit_test(Point::new(1010, 500)), Hit::Resize(Handle::Right));
        // outside the horizontal span: not the top edge
        assert_eq!(ia.hit_test(Point::new(1100, 300)), Hit::None);
    }

    #[test]
    fn body_and_outside() {
        let ia = interaction();
        assert_eq!(ia.hit_test(Point::new(700, 500)), Hit::Move);
        assert_eq!(ia.hit_test(Point::new(50, 50)), Hit::None);
    }

    #[test]
    fn cursor_follows_hit_then_drag() {
        let mut ia = interaction();
        assert_eq!(ia.cursor_at(Point::new(50, 50)), CursorShape::Arrow);
        assert_eq!(ia.cursor_at(Point::new(700, 500)), CursorShape::SizeAll);
        assert_eq!(ia.cursor_at(Point::new(400, 700)), CursorShape::SizeNesw);
        assert_eq!(ia.cursor_at(Point::new(700, 300)), CursorShape::SizeNs);

        assert!(ia.press(Point::new(1000, 500)));
        // pointer wandered away, cursor stays with the grabbed edge
        assert_eq!(ia.cursor_at(Point::new(50, 50)), CursorShape::SizeWe);
        ia.release();
        assert_eq!(ia.cursor_at(Point::new(50, 50)), CursorShape::Arrow);
    }

    #[test]
    fn press_outside_starts_nothing() {
        let mut ia = interaction();
        assert!(!ia.press(Point::new(10, 10)));
        assert!(!ia.drag_to(Point::new(500, 500)));
        assert_eq!(ia.block(), Rect::new(400, 300, 600, 400));
    }

    #[test]
    fn resize_bottom_right_clamps_to_screen() {
        let mut ia = interaction();
        assert!(ia.press(Point::new(1000, 700)));
        assert!(ia.drag_to(Point::new(5000, 5000)));
        assert_eq!(ia.block(), Rect::from_edges(400, 300, 1920, 1080));
    }

    #[test]
    fn resize_top_left_respects_min_extent_and_origin() {
        let mut ia = interaction();
        ia.press(Point::new(400, 300));
        ia.drag_to(Point::new(2000, 2000));
        assert_eq!(ia.block(), Rect::from_edges(950, 650, 1000, 700));

        ia.drag_to(Point::new(-30, -30));
        assert_eq!(ia.block(), Rect::from_edges(0, 0, 1000, 700));
    }

    #[test]
    fn edge_resize_touches_one_axis() {
        let mut ia = interaction();
        ia.press(Point::new(400, 500));
        ia.drag_to(Point::new(350, 10));
        assert_eq!(ia.block(), Rect::from_edges(350, 300, 1000, 700));
    }

    #[test]
    fn move_keeps_grab_offset_and_stays_on_screen() {
        let mut ia = interaction();
        ia.press(Point::new(500, 400));
        assert!(ia.drag_to(Point::new(600, 450)));
        assert_eq!(ia.block(), Rect::new(500, 350, 600, 400));

        ia.drag_to(Point::new(5000, -200));
        assert_eq!(ia.block(), Rect::new(1320, 0, 600, 400));
        assert!(!ia.drag_to(Point::new(5000, -300)));
    }

    #[test]
    fn move_of_oversized_block_pins_to_origin() {
        let mut ia = BlockInteraction::new(Rect::new(0, 0, 2000, 1200), SCREEN);
        ia.press(Point::new(900, 600));
        ia.drag_to(Point::new(950, 650));
        assert_eq!(ia.block().top_left(), Point::new(0, 0));
    }

    #[test]
    fn set_block_cancels_drag() {
        let mut ia = interaction();
        ia.press(Point::new(700, 500));
        ia.set_block(Rect::new(0, 0, 100, 100));
        assert!(!ia.is_dragging());
    }

    #[test]
    fn custom_limits_apply() {
        let mut ia = interaction().with_limits(5, 200);
        assert_eq!(ia.hit_test(Point::new(410, 300)), Hit::Resize(Handle::Top));
        assert_eq!(ia.hit_test(Point::new(410, 310)), Hit::Move);

        ia.press(Point::new(1000, 500));
        ia.drag_to(Point::new(0, 500));
        assert_eq!(ia.block().width, 200);
    }

    #[test]
    fn smaller_screen_pulls_block_inside() {
        let mut ia = interaction();
        ia.set_screen(Size::new(800, 600));
        assert_eq!(ia.block(), Rect::new(200, 200, 600, 400));

        ia.set_screen(Size::new(500, 300));
        assert_eq!(ia.block(), Rect::new(0, 0, 500, 300));
        assert_eq!(ia.screen(), Size::new(500, 300));
    }
}
