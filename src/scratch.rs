//! The scratch layer: an opaque blue panel over the reward that the user wipes
//! away by dragging.
//!
//! Erasing works on an explicit coverage mask instead of blend-mode tricks: every
//! new drag segment is rasterised into the mask as a round-capped 80-unit band,
//! and compositing copies the pre-rendered panel only where the mask is still
//! covered. The panel lives in its own buffer, so erasing can never punch
//! through to whatever is drawn under the card.
//!
//! Once enough has been scratched the whole layer is dropped and only the reward
//! remains. That transition is one-way.

use crate::brush::{clear_capsule, clear_disc};
use crate::config::{CardConfig, RevealRule};
use crate::confetti::Confetti;
use crate::font::{draw_text_centered, TextStyle};
use crate::gamma::GammaLut;
use crate::types::{FrameBuffer, Mask, Point};

pub const PANEL_COLOR: u32 = 0x4285F4;
pub const LABEL: &str = "Scratch me";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
    Hidden,
    Revealed,
}

/// Every point the finger has recorded, split into segments (one per drag).
/// Append-only; `version` bumps on every point so the renderer knows to redraw.
#[derive(Default)]
pub struct ScratchPath {
    points: Vec<Point>,
    segment_starts: Vec<usize>,
    version: u64,
}

impl ScratchPath {
    /// Begin a new segment at `p`.
    pub fn move_to(&mut self, p: Point) {
        self.segment_starts.push(self.points.len());
        self.points.push(p);
        self.version += 1;
    }

    /// Extend the current segment to `p`. Returns the previous point of the segment.
    pub fn line_to(&mut self, p: Point) -> Option<Point> {
        let prev = self.points.last().copied();
        if self.segment_starts.is_empty() {
            self.segment_starts.push(0);
        }
        self.points.push(p);
        self.version += 1;
        prev
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Each drag as its own run of points.
    pub fn segments(&self) -> impl Iterator<Item = &[Point]> + '_ {
        self.segment_starts.iter().enumerate().map(move |(i, &start)| {
            let end = self.segment_starts.get(i + 1).copied().unwrap_or(self.points.len());
            &self.points[start..end]
        })
    }
}

/// The mounted part of the overlay: panel pixels plus what has been wiped off them.
struct Layer {
    surface: FrameBuffer,
    mask: Mask,
}

pub struct ScratchOverlay {
    path: ScratchPath,
    layer: Option<Layer>, // None once revealed
    pen_down: bool,
    rule: RevealRule,
    brush_radius: f32,
}

impl ScratchOverlay {
    /// Build a fresh, unscratched overlay for a square card.
    /// The panel (color, confetti, label) is rendered once here.
    pub fn new(cfg: &CardConfig, seed: u64, lut: &GammaLut) -> Self {
        let size = cfg.card_size;
        let mut surface = FrameBuffer::filled(size, size, PANEL_COLOR);
        Confetti::scatter(seed, cfg.confetti_count, size, size, cfg.confetti_radius).render(&mut surface, lut);

        let label = TextStyle::new(3, 0xFFFFFF).bold();
        let cy = size as i32 / 2 - label.glyph_height() / 2;
        draw_text_centered(&mut surface, size as i32 / 2, cy, LABEL, &label);

        Self {
            path: ScratchPath::default(),
            layer: Some(Layer { surface, mask: Mask::new(size, size) }),
            pen_down: false,
            rule: cfg.reveal,
            brush_radius: cfg.stroke_width / 2.0,
        }
    }

    pub fn state(&self) -> RevealState {
        if self.layer.is_some() { RevealState::Hidden } else { RevealState::Revealed }
    }

    pub fn is_revealed(&self) -> bool {
        self.state() == RevealState::Revealed
    }

    pub fn point_count(&self) -> usize {
        self.path.len()
    }

    pub fn version(&self) -> u64 {
        self.path.version()
    }

    pub fn path(&self) -> &ScratchPath {
        &self.path
    }

    /// Fraction of the panel wiped away. A revealed card is fully uncovered.
    pub fn coverage(&self) -> f32 {
        match &self.layer {
            Some(layer) => layer.mask.coverage(),
            None => 1.0,
        }
    }

    /// Finger down (past the slop): start a new segment at `p`.
    /// Ignored once revealed.
    pub fn drag_start(&mut self, p: Point) {
        let Some(layer) = self.layer.as_mut() else { return };
        self.path.move_to(p);
        self.pen_down = true;
        clear_disc(&mut layer.mask, p, self.brush_radius);
        log::debug!("scratch drag started at ({:.0}, {:.0})", p.x, p.y);
        self.check_reveal();
    }

    /// Finger moved: extend the segment to `p` and wipe along it.
    /// A move with no drag in progress opens a segment right there.
    pub fn drag_move(&mut self, p: Point) {
        if !self.pen_down {
            self.drag_start(p);
            return;
        }
        let Some(layer) = self.layer.as_mut() else { return };
        let prev = self.path.line_to(p).unwrap_or(p);
        clear_capsule(&mut layer.mask, prev, p, self.brush_radius);
        self.check_reveal();
    }

    pub fn drag_end(&mut self) {
        if self.pen_down {
            log::debug!("scratch drag ended, {} points so far", self.path.len());
        }
        self.pen_down = false;
    }

    fn check_reveal(&mut self) {
        let Some(layer) = &self.layer else { return };
        let done = match self.rule {
            RevealRule::PointCount(limit) => self.path.len() > limit,
            RevealRule::Coverage(fraction) => layer.mask.coverage() >= fraction,
        };
        if done {
            log::info!(
                "card revealed after {} points ({:.0}% scratched)",
                self.path.len(),
                layer.mask.coverage() * 100.0
            );
            self.layer = None;
            self.pen_down = false;
        }
    }

    /// Paint the layer over the reward in `card` (same size as the card).
    /// Cleared pixels keep the reward; after reveal nothing is painted.
    pub fn composite(&self, card: &mut FrameBuffer) {
        let Some(layer) = &self.layer else { return };
        debug_assert_eq!(card.width, layer.surface.width);
        debug_assert_eq!(card.height, layer.surface.height);
        let len = card.pixels.len().min(layer.surface.pixels.len());
        for i in 0..len {
            if !layer.mask.is_cleared(i) {
                card.pixels[i] = layer.surface.pixels[i];
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REWARD: u32 = 0x1E1E1E;

    // Stand-in for the reward layer: one flat color.
    fn solid_card(size: usize, color: u32) -> FrameBuffer {
        FrameBuffer::filled(size, size, color)
    }

    fn overlay(cfg: &CardConfig) -> ScratchOverlay {
        ScratchOverlay::new(cfg, 9, &GammaLut::new())
    }

    fn scribble(o: &mut ScratchOverlay, moves: usize) {
        for i in 0..moves {
            // zig-zag, arbitrary coordinates including off-card ones
            let x = (i % 40) as f32 * 11.0 - 30.0;
            let y = (i / 40) as f32 * 70.0 + if i % 2 == 0 { 0.0 } else { 5.0 };
            o.drag_move(Point::new(x, y));
        }
    }

    #[test]
    fn fresh_overlay_hides_reward() {
        let cfg = CardConfig::default();
        let o = overlay(&cfg);
        assert_eq!(o.state(), RevealState::Hidden);
        assert_eq!(o.point_count(), 0);
        assert_eq!(o.coverage(), 0.0);

        let mut card = solid_card(cfg.card_size, REWARD);
        o.composite(&mut card);
        assert!(card.pixels.iter().all(|&p| p != REWARD), "reward must be fully obscured");
    }

    #[test]
    fn exactly_150_points_stays_hidden() {
        let mut o = overlay(&CardConfig::default());
        o.drag_start(Point::new(10.0, 10.0));
        scribble(&mut o, 149);
        assert_eq!(o.point_count(), 150);
        assert_eq!(o.state(), RevealState::Hidden);
    }

    #[test]
    fn point_151_reveals() {
        let mut o = overlay(&CardConfig::default());
        scribble(&mut o, 151);
        assert_eq!(o.point_count(), 151);
        assert_eq!(o.state(), RevealState::Revealed);
        assert_eq!(o.coverage(), 1.0);
    }

    #[test]
    fn reveal_is_one_way_and_freezes_the_path() {
        let mut o = overlay(&CardConfig::default());
        scribble(&mut o, 151);
        let version = o.version();
        o.drag_end();
        o.drag_start(Point::new(1.0, 1.0));
        scribble(&mut o, 500);
        o.drag_end();
        assert_eq!(o.state(), RevealState::Revealed);
        assert_eq!(o.point_count(), 151);
        assert_eq!(o.version(), version);
    }

    #[test]
    fn path_length_matches_delivered_events_and_never_shrinks() {
        let mut o = overlay(&CardConfig::default());
        let mut last = 0;
        for i in 0..120 {
            if i % 30 == 0 {
                o.drag_end();
                o.drag_start(Point::new(i as f32, 3.0));
            } else {
                o.drag_move(Point::new(i as f32 * 2.0, -7.0 * i as f32));
            }
            assert!(o.point_count() >= last);
            last = o.point_count();
        }
        assert_eq!(o.point_count(), 120);
        assert_eq!(o.version(), 120);
        assert_eq!(o.path().segments().count(), 4);
        assert_eq!(o.path().segments().map(|s| s.len()).sum::<usize>(), 120);
    }

    #[test]
    fn scratching_uncovers_reward_under_the_stroke_only() {
        let cfg = CardConfig::default();
        let mut o = overlay(&cfg);
        o.drag_start(Point::new(60.0, 160.0));
        o.drag_move(Point::new(260.0, 160.0));
        o.drag_end();

        let mut card = solid_card(cfg.card_size, REWARD);
        o.composite(&mut card);
        assert_eq!(card.get(160, 160), REWARD, "under the stroke");
        assert_eq!(card.get(60, 125), REWARD, "inside the round cap");
        assert_ne!(card.get(160, 10), REWARD, "far from the stroke");
        assert!(o.coverage() > 0.0 && o.coverage() < 1.0);
    }

    #[test]
    fn out_of_bounds_points_are_accepted() {
        let mut o = overlay(&CardConfig::default());
        o.drag_start(Point::new(-1e6, 1e6));
        o.drag_move(Point::new(f32::MAX / 4.0, -5000.0));
        assert_eq!(o.point_count(), 2);
        assert_eq!(o.state(), RevealState::Hidden);
    }

    #[test]
    fn coverage_rule_reveals_on_area() {
        let cfg = CardConfig { reveal: RevealRule::Coverage(0.6), ..CardConfig::default() };
        let mut o = overlay(&cfg);
        o.drag_start(Point::new(0.0, 40.0));
        o.drag_move(Point::new(320.0, 40.0));
        assert_eq!(o.state(), RevealState::Hidden, "a quarter of the card");
        o.drag_move(Point::new(320.0, 120.0));
        o.drag_move(Point::new(0.0, 120.0));
        assert_eq!(o.state(), RevealState::Hidden);
        o.drag_move(Point::new(0.0, 200.0));
        o.drag_move(Point::new(320.0, 200.0));
        assert_eq!(o.state(), RevealState::Revealed);
        assert_eq!(o.point_count(), 6);
    }

    #[test]
    fn revealed_overlay_paints_nothing() {
        let cfg = CardConfig::default();
        let mut o = overlay(&cfg);
        scribble(&mut o, 151);
        let mut card = solid_card(cfg.card_size, REWARD);
        o.composite(&mut card);
        assert!(card.pixels.iter().all(|&p| p == REWARD));
    }

    #[test]
    fn panel_carries_label_pixels() {
        let cfg = CardConfig { confetti_count: 0, ..CardConfig::default() };
        let o = overlay(&cfg);
        let mut card = solid_card(cfg.card_size, REWARD);
        o.composite(&mut card);
        assert!(card.pixels.iter().any(|&p| p == 0xFFFFFF));
        assert!(card.pixels.iter().all(|&p| p == PANEL_COLOR || p == 0xFFFFFF));
    }
}
