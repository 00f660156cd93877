// Round scratch brush rasterised into the coverage mask.
// Visual expectation: wherever the finger passed, an 80-wide band with round ends
// is cleared and the reward underneath shows through.
use crate::types::{Mask, Point};

/// Shortest distance from `p` to the segment a-b.
pub fn distance_to_segment(p: Point, a: Point, b: Point) -> f32 {
    let abx = b.x - a.x;
    let aby = b.y - a.y;
    let len2 = abx * abx + aby * aby;
    if len2 <= f32::EPSILON {
        return p.distance(a);
    }
    let t = (((p.x - a.x) * abx + (p.y - a.y) * aby) / len2).clamp(0.0, 1.0);
    p.distance(Point::new(a.x + abx * t, a.y + aby * t))
}

/// Clear every mask pixel whose center lies within `radius` of segment a-b
/// (a capsule: the stroke between two points with round caps).
/// Returns how many pixels went from covered to cleared.
///
/// Chaining capsules point to point gives round joins for free, so feeding each new
/// segment as it arrives clears exactly what redrawing the whole path would.
pub fn clear_capsule(mask: &mut Mask, a: Point, b: Point, radius: f32) -> usize {
    if !(radius > 0.0) || mask.width == 0 || mask.height == 0 {
        return 0;
    }
    let w = mask.width as i32;
    let h = mask.height as i32;

    // Only scan the bounding box that can be touched, clipped to the mask.
    let x0 = ((a.x.min(b.x) - radius).floor() as i32).max(0);
    let y0 = ((a.y.min(b.y) - radius).floor() as i32).max(0);
    let x1 = ((a.x.max(b.x) + radius).ceil() as i32).min(w - 1);
    let y1 = ((a.y.max(b.y) + radius).ceil() as i32).min(h - 1);
    if x0 > x1 || y0 > y1 {
        return 0; // stroke lies entirely off the layer
    }

    let mut newly = 0;
    for y in y0..=y1 {
        for x in x0..=x1 {
            let idx = y as usize * mask.width + x as usize;
            if mask.is_cleared(idx) {
                continue;
            }
            let center = Point::new(x as f32 + 0.5, y as f32 + 0.5);
            if distance_to_segment(center, a, b) <= radius && mask.clear(idx) {
                newly += 1;
            }
        }
    }
    newly
}

/// A single dab: the round cap you get from pressing without moving.
pub fn clear_disc(mask: &mut Mask, center: Point, radius: f32) -> usize {
    clear_capsule(mask, center, center, radius)
}
