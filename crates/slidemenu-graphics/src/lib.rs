//! Geometric primitives shared across the Slidemenu crates: Point, Size, Rect.

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            width: size.width,
            height: size.height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Left/top edges are inside, right/bottom edges are outside, so a point
    /// on the shared boundary of two adjacent rects is in exactly one.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && y >= self.y && x < self.x + self.width && y < self.y + self.height
    }

    pub fn contains_point(&self, point: Point) -> bool {
        self.contains(point.x, point.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_contains_is_half_open() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert!(rect.contains(10.0, 20.0));
        assert!(rect.contains(60.0, 45.0));
        assert!(rect.contains(109.9, 69.9));
        // The right/bottom edges belong to the neighboring rect.
        assert!(!rect.contains(110.0, 45.0));
        assert!(!rect.contains(60.0, 70.0));
        assert!(!rect.contains(9.9, 45.0));
    }

    #[test]
    fn adjacent_rects_share_no_points() {
        let upper = Rect::new(0.0, 0.0, 360.0, 80.0);
        let lower = Rect::new(0.0, 80.0, 360.0, 80.0);
        assert!(!upper.contains(180.0, 80.0));
        assert!(lower.contains(180.0, 80.0));
    }

    #[test]
    fn rect_right_bottom() {
        let rect = Rect::new(5.0, 5.0, 10.0, 20.0);
        assert_eq!(rect.right(), 15.0);
        assert_eq!(rect.bottom(), 25.0);
    }
}
