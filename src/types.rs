// Core types shared by the drawing code and the widgets.

#[derive(Clone)]
pub struct FrameBuffer {
    pub width: usize,      // how wide the buffer is (pixels)
    pub height: usize,     // how tall the buffer is (pixels)
    pub pixels: Vec<u32>,  // each entry is 0x00RRGGBB for minifb
}

impl FrameBuffer {
    /// A buffer filled with one color.
    pub fn filled(width: usize, height: usize, color: u32) -> Self {
        Self { width, height, pixels: vec![color; width * height] }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u32 {
        self.pixels[y * self.width + x]
    }
}

/// A pointer position in window or widget-local units. Any value is valid,
/// including negative and out-of-window coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Same point expressed relative to `origin`.
    pub fn relative_to(self, origin: (i32, i32)) -> Self {
        Self { x: self.x - origin.0 as f32, y: self.y - origin.1 as f32 }
    }

    pub fn distance(self, other: Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Axis-aligned rectangle in integer layout units.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x as f32
            && p.y >= self.y as f32
            && p.x < (self.x + self.w) as f32
            && p.y < (self.y + self.h) as f32
    }

    pub fn center(&self) -> (i32, i32) {
        (self.x + self.w / 2, self.y + self.h / 2)
    }
}

/// Coverage mask over the scratch layer: a pixel is either still covered or
/// cleared by the brush. Cleared pixels never become covered again.
/// Visual: unseen directly; it decides where the reward shows through.
pub struct Mask {
    pub width: usize,
    pub height: usize,
    cleared: Vec<bool>, // length = width * height
    cleared_count: usize,
}

impl Mask {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, cleared: vec![false; width * height], cleared_count: 0 }
    }

    #[inline]
    pub fn is_cleared(&self, idx: usize) -> bool {
        self.cleared[idx]
    }

    /// Clear one pixel; returns true if it was still covered.
    #[inline]
    pub fn clear(&mut self, idx: usize) -> bool {
        if self.cleared[idx] {
            return false;
        }
        self.cleared[idx] = true;
        self.cleared_count += 1;
        true
    }

    pub fn cleared_count(&self) -> usize {
        self.cleared_count
    }

    /// Fraction of the layer that has been scratched away, in [0, 1].
    pub fn coverage(&self) -> f32 {
        let total = self.width * self.height;
        if total == 0 {
            return 0.0;
        }
        self.cleared_count as f32 / total as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_counts_each_pixel_once() {
        let mut mask = Mask::new(4, 4);
        assert!(mask.clear(5));
        assert!(!mask.clear(5));
        assert!(mask.clear(6));
        assert_eq!(mask.cleared_count(), 2);
        assert!((mask.coverage() - 2.0 / 16.0).abs() < f32::EPSILON);
    }

    #[test]
    fn empty_mask_has_zero_coverage() {
        assert_eq!(Mask::new(0, 0).coverage(), 0.0);
    }

    #[test]
    fn rect_contains_is_half_open() {
        let r = Rect::new(10, 10, 5, 5);
        assert!(r.contains(Point::new(10.0, 10.0)));
        assert!(r.contains(Point::new(14.9, 14.9)));
        assert!(!r.contains(Point::new(15.0, 12.0)));
        assert!(!r.contains(Point::new(9.9, 12.0)));
    }

    #[test]
    fn relative_to_shifts_by_origin() {
        let p = Point::new(50.0, -20.0).relative_to((40, 10));
        assert_eq!(p, Point::new(10.0, -30.0));
    }
}
