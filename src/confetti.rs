// Confetti: the decorative speckles on the scratch layer.
// Visual outcomes:
// - ~25 translucent dots in cyan / blue / deep blue, 4..10 units in radius, scattered over the panel.
// - Generated once per card from a seed, so scratching never reshuffles them.

use crate::draw::blend_circle;
use crate::gamma::GammaLut;
use crate::types::FrameBuffer;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const CONFETTI_COLORS: [u32; 3] = [0x00FFFF, 0x0000FF, 0x1967D2];
pub const CONFETTI_ALPHA: f32 = 0.4;

/// One speck. Visual: a small see-through disc on the blue panel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dot {
    pub x: i32,
    pub y: i32,
    pub radius: i32,
    pub color: u32,
}

pub struct Confetti {
    dots: Vec<Dot>,
}

impl Confetti {
    /// Scatter `count` dots over a `width` x `height` area.
    /// Centers may land anywhere in 0..=width / 0..=height, edges included.
    pub fn scatter(seed: u64, count: usize, width: usize, height: usize, radius: (i32, i32)) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let dots = (0..count)
            .map(|_| Dot {
                x: rng.random_range(0..=width as i32),
                y: rng.random_range(0..=height as i32),
                radius: rng.random_range(radius.0..=radius.1),
                color: CONFETTI_COLORS[rng.random_range(0..CONFETTI_COLORS.len())],
            })
            .collect();
        Self { dots }
    }

    pub fn dots(&self) -> &[Dot] {
        &self.dots
    }

    /// Paint every dot onto `fb`.
    pub fn render(&self, fb: &mut FrameBuffer, lut: &GammaLut) {
        for d in &self.dots {
            blend_circle(fb, d.x, d.y, d.radius, d.color, CONFETTI_ALPHA, lut);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_confetti() {
        let a = Confetti::scatter(7, 25, 320, 320, (4, 10));
        let b = Confetti::scatter(7, 25, 320, 320, (4, 10));
        assert_eq!(a.dots(), b.dots());
    }

    #[test]
    fn dots_respect_bounds_and_palette() {
        let c = Confetti::scatter(42, 200, 320, 320, (4, 10));
        assert_eq!(c.dots().len(), 200);
        for d in c.dots() {
            assert!((0..=320).contains(&d.x));
            assert!((0..=320).contains(&d.y));
            assert!((4..=10).contains(&d.radius));
            assert!(CONFETTI_COLORS.contains(&d.color));
        }
    }

    #[test]
    fn render_tints_but_does_not_replace_panel() {
        let lut = GammaLut::new();
        let mut fb = FrameBuffer::filled(64, 64, 0x4285F4);
        let c = Confetti::scatter(1, 25, 64, 64, (4, 10));
        c.render(&mut fb, &lut);
        assert!(fb.pixels.iter().any(|&p| p != 0x4285F4));
        assert!(fb.pixels.iter().all(|p| !CONFETTI_COLORS.contains(p)));
    }
}
