// Every knob of the scratch card in one place.
// Defaults reproduce the shipped card: 320 card, 80-wide brush, reveal after 150 points.

use crate::error::Error;

/// When the scratch layer gives up and reveals the reward.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RevealRule {
    /// Reveal once the number of recorded drag points is strictly greater than this.
    PointCount(usize),
    /// Reveal once this fraction (0, 1] of the layer has been scratched away.
    Coverage(f32),
}

#[derive(Clone, Debug)]
pub struct CardConfig {
    pub window_width: usize,
    pub window_height: usize,
    pub card_size: usize,
    pub card_corner_radius: i32,
    /// Brush diameter; strokes have round caps and joins.
    pub stroke_width: f32,
    pub reveal: RevealRule,
    pub confetti_count: usize,
    /// Inclusive radius range for confetti dots.
    pub confetti_radius: (i32, i32),
    /// Fixed seed for confetti; `None` draws a fresh seed per presentation.
    pub confetti_seed: Option<u64>,
    pub close_button_top: i32,
    pub terms_anim_secs: f32,
    /// Whether the dialog is already showing when the launcher appears.
    pub open_on_launch: bool,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            window_width: 400,
            window_height: 800,
            card_size: 320,
            card_corner_radius: 20,
            stroke_width: 80.0,
            reveal: RevealRule::PointCount(150),
            confetti_count: 25,
            confetti_radius: (4, 10),
            confetti_seed: None,
            close_button_top: 40,
            terms_anim_secs: 0.25,
            open_on_launch: true,
        }
    }
}

impl CardConfig {
    /// Reject values that would produce an empty or broken layout.
    pub fn validate(&self) -> Result<(), Error> {
        if self.window_width == 0 || self.window_height == 0 {
            return Err(Error::Config("window must be non-empty".into()));
        }
        if self.card_size == 0 {
            return Err(Error::Config("card_size must be > 0".into()));
        }
        if self.card_size > self.window_width || self.card_size > self.window_height {
            return Err(Error::Config(format!(
                "card_size {} does not fit a {}x{} window",
                self.card_size, self.window_width, self.window_height
            )));
        }
        if !(self.stroke_width > 0.0) {
            return Err(Error::Config("stroke_width must be > 0".into()));
        }
        if let RevealRule::Coverage(f) = self.reveal {
            if !(f > 0.0 && f <= 1.0) {
                return Err(Error::Config(format!("coverage fraction {f} outside (0, 1]")));
            }
        }
        let (lo, hi) = self.confetti_radius;
        if lo <= 0 || lo > hi {
            return Err(Error::Config(format!("confetti radius range {lo}..={hi} is empty")));
        }
        if self.terms_anim_secs < 0.0 {
            return Err(Error::Config("terms_anim_secs must be >= 0".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_shipped_card() {
        let cfg = CardConfig::default();
        assert_eq!(cfg.reveal, RevealRule::PointCount(150));
        assert_eq!(cfg.card_size, 320);
        assert_eq!(cfg.stroke_width, 80.0);
        assert_eq!(cfg.confetti_count, 25);
        assert!(cfg.open_on_launch);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn rejects_card_bigger_than_window() {
        let cfg = CardConfig { card_size: 500, ..CardConfig::default() };
        assert!(matches!(cfg.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn rejects_bad_coverage_fraction() {
        for f in [0.0, -0.5, 1.5, f32::NAN] {
            let cfg = CardConfig { reveal: RevealRule::Coverage(f), ..CardConfig::default() };
            assert!(cfg.validate().is_err(), "fraction {f} should be rejected");
        }
        let ok = CardConfig { reveal: RevealRule::Coverage(0.6), ..CardConfig::default() };
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn rejects_degenerate_brush_and_confetti() {
        let cfg = CardConfig { stroke_width: 0.0, ..CardConfig::default() };
        assert!(cfg.validate().is_err());
        let cfg = CardConfig { confetti_radius: (10, 4), ..CardConfig::default() };
        assert!(cfg.validate().is_err());
    }
}
