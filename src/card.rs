// The content column inside the dialog: the square card (reward + scratch layer)
// with the terms panel unrolling beneath it. The column stays centered in the
// viewport, so opening the terms nudges the card upward.

use crate::config::CardConfig;
use crate::draw::blit_rounded;
use crate::gamma::GammaLut;
use crate::input::{DRAG_SLOP, DragDetector, DragSignal, PointerEvent};
use crate::reward::{self, RewardLayout, RewardTarget};
use crate::scratch::{RevealState, ScratchOverlay};
use crate::terms::TermsPanel;
use crate::types::{FrameBuffer, Rect};

pub struct ScratchCardContent {
    size: usize,
    corner: i32,
    layout: RewardLayout,
    reward: FrameBuffer,           // static, rendered once
    overlay: ScratchOverlay,
    terms: TermsPanel,             // owns the "terms expanded" flag
    card: FrameBuffer,             // reward with the scratch layer composited on top
    composed: Option<(u64, RevealState)>, // what `card` currently shows
    gesture: DragDetector,
    pressed: Option<RewardTarget>,
}

impl ScratchCardContent {
    pub fn new(cfg: &CardConfig, seed: u64, lut: &GammaLut) -> Self {
        let size = cfg.card_size;
        let layout = RewardLayout::new(size);
        let reward = reward::render(&layout);
        Self {
            size,
            corner: cfg.card_corner_radius,
            layout,
            card: reward.clone(),
            reward,
            overlay: ScratchOverlay::new(cfg, seed, lut),
            terms: TermsPanel::new(size, cfg.terms_anim_secs),
            composed: None,
            gesture: DragDetector::new(DRAG_SLOP),
            pressed: None,
        }
    }

    pub fn overlay(&self) -> &ScratchOverlay {
        &self.overlay
    }

    pub fn terms(&self) -> &TermsPanel {
        &self.terms
    }

    pub fn reward_layout(&self) -> &RewardLayout {
        &self.layout
    }

    /// Where the card's top-left corner sits inside a `viewport` (width, height).
    pub fn card_origin(&self, viewport: (usize, usize)) -> (i32, i32) {
        let column_h = self.size as i32 + self.terms.occupied_height();
        let x = (viewport.0 as i32 - self.size as i32) / 2;
        let y = (viewport.1 as i32 - column_h) / 2;
        (x, y)
    }

    pub fn card_rect(&self, viewport: (usize, usize)) -> Rect {
        let (x, y) = self.card_origin(viewport);
        Rect::new(x, y, self.size as i32, self.size as i32)
    }

    /// Route one pointer event. Returns true if the column took it.
    ///
    /// While the scratch layer is up it sits on top of the reward and eats every
    /// card gesture; the reward's own controls answer only after the reveal.
    pub fn handle(&mut self, event: PointerEvent, viewport: (usize, usize)) -> bool {
        let origin = self.card_origin(viewport);
        let local = event.position().relative_to(origin);
        match event {
            PointerEvent::Press(p) => {
                if !self.card_rect(viewport).contains(p) {
                    return false;
                }
                self.gesture.press(local);
                self.pressed = if self.overlay.is_revealed() { self.layout.hit_test(local) } else { None };
                true
            }
            PointerEvent::Move(_) => {
                if !self.gesture.is_tracking() {
                    return false;
                }
                for signal in self.gesture.motion(local) {
                    match signal {
                        DragSignal::Start(q) => {
                            self.pressed = None;
                            self.overlay.drag_start(q);
                        }
                        DragSignal::Move(q) => self.overlay.drag_move(q),
                    }
                }
                true
            }
            PointerEvent::Release(_) => {
                if !self.gesture.is_tracking() {
                    return false;
                }
                let tap = self.gesture.release();
                self.overlay.drag_end();
                if let Some(target) = self.pressed.take() {
                    if tap && self.layout.hit_test(local) == Some(target) {
                        self.activate(target);
                    }
                }
                true
            }
        }
    }

    fn activate(&mut self, target: RewardTarget) {
        match target {
            RewardTarget::Terms => self.terms.toggle(),
            RewardTarget::Claim => log::debug!("claim offer tapped; nothing to do"),
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.terms.update(dt);
    }

    /// Draw the card and terms into `screen`, treating the whole screen as the viewport.
    pub fn render(&mut self, screen: &mut FrameBuffer) {
        let now = (self.overlay.version(), self.overlay.state());
        if self.composed != Some(now) {
            self.card.pixels.copy_from_slice(&self.reward.pixels);
            self.overlay.composite(&mut self.card);
            self.composed = Some(now);
        }

        let (x, y) = self.card_origin((screen.width, screen.height));
        blit_rounded(screen, &self.card, x, y, self.corner, self.size);
        self.terms.render(screen, x, y + self.size as i32);
    }
}
