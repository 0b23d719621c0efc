// Integer screen geometry shared by the overlay, the settings model and the UI controls

use std::ops::Sub;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn manhattan_distance(self, other: Point) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Dimensions of the screen the overlay covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

/// Axis-aligned rectangle. `right` and `bottom` are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_edges(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self::new(left, top, right.saturating_sub(left), bottom.saturating_sub(top))
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.left(), self.top())
    }

    pub fn top_right(&self) -> Point {
        Point::new(self.right(), self.top())
    }

    pub fn bottom_left(&self) -> Point {
        Point::new(self.left(), self.bottom())
    }

    pub fn bottom_right(&self) -> Point {
        Point::new(self.right(), self.bottom())
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2, self.y + self.height / 2)
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left() && p.x < self.right() && p.y >= self.top() && p.y < self.bottom()
    }

    /// Intersection with `bounds`; `None` when they do not overlap
    pub fn clip_to(&self, bounds: Size) -> Option<Rect> {
        let left = self.left().max(0);
        let top = self.top().max(0);
        let right = self.right().min(bounds.width);
        let bottom = self.bottom().min(bounds.height);
        if right <= left || bottom <= top {
            None
        } else {
            Some(Rect::from_edges(left, top, right, bottom))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn far_edges_saturate_instead_of_overflowing() {
        let r = Rect::new(i32::MAX - 10, i32::MAX - 10, i32::MAX, 100);
        assert_eq!(r.right(), i32::MAX);
        assert_eq!(r.bottom(), i32::MAX);
        assert_eq!(r.clip_to(Size::new(1920, 1080)), None);
    }

    #[test]
    fn center_rounds_toward_origin() {
        assert_eq!(Rect::new(10, 20, 31, 41).center(), Point::new(25, 40));
    }

    #[test]
    fn edges_are_exclusive() {
        let r = Rect::new(10, 20, 30, 40);
        assert_eq!(r.right(), 40);
        assert_eq!(r.bottom(), 60);
        assert!(r.contains(Point::new(10, 20)));
        assert!(!r.contains(Point::new(40, 30)));
        assert!(!r.contains(Point::new(20, 60)));
    }

    #[test]
    fn manhattan_distance_sums_axes() {
        assert_eq!(Point::new(0, 0).manhattan_distance(Point::new(3, -4)), 7);
    }

    #[test]
    fn clip_keeps_overlap_only() {
        let screen = Size::new(100, 50);
        assert_eq!(
            Rect::new(-10, 40, 50, 20).clip_to(screen),
            Some(Rect::new(0, 40, 40, 10))
        );
        assert_eq!(Rect::new(120, 0, 10, 10).clip_to(screen), None);
    }
}
