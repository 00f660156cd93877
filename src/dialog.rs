// Full-screen modal that hosts the scratch card.
// Visual: everything behind goes 60% darker, a frosted round "X" sits at the top center,
// and the card column floats in the middle. Tapping the dark area does nothing;
// only the X closes the dialog.

use crate::card::ScratchCardContent;
use crate::config::CardConfig;
use crate::draw::{blend_circle, blend_rect, draw_thick_line};
use crate::gamma::GammaLut;
use crate::input::PointerEvent;
use crate::types::{FrameBuffer, Rect};

const SCRIM_ALPHA: f32 = 0.6;
const CLOSE_SIZE: i32 = 48;
const CLOSE_BG_ALPHA: f32 = 0.2;
const CLOSE_ICON_HALF: i32 = 7;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogAction {
    None,
    Dismiss,
}

pub struct ScratchCardDialog {
    viewport: (usize, usize),
    close: Rect,
    close_pressed: bool,
    content: ScratchCardContent,
}

impl ScratchCardDialog {
    pub fn new(cfg: &CardConfig, seed: u64, lut: &GammaLut) -> Self {
        let viewport = (cfg.window_width, cfg.window_height);
        let close = Rect::new(
            (viewport.0 as i32 - CLOSE_SIZE) / 2,
            cfg.close_button_top,
            CLOSE_SIZE,
            CLOSE_SIZE,
        );
        Self {
            viewport,
            close,
            close_pressed: false,
            content: ScratchCardContent::new(cfg, seed, lut),
        }
    }

    pub fn close_button(&self) -> Rect {
        self.close
    }

    pub fn content(&self) -> &ScratchCardContent {
        &self.content
    }

    /// Route a pointer event. The scrim swallows anything that isn't for the
    /// close button or the card column.
    pub fn handle(&mut self, event: PointerEvent) -> DialogAction {
        match event {
            PointerEvent::Press(p) if self.close.contains(p) => {
                self.close_pressed = true;
            }
            PointerEvent::Release(p) if self.close_pressed => {
                self.close_pressed = false;
                if self.close.contains(p) {
                    return DialogAction::Dismiss;
                }
            }
            _ => {
                // whatever the column declines lands on the scrim and stops there
                self.content.handle(event, self.viewport);
            }
        }
        DialogAction::None
    }

    pub fn update(&mut self, dt: f32) {
        self.content.update(dt);
    }

    /// Dim whatever is already in `screen`, then draw the close button and the card.
    pub fn render(&mut self, screen: &mut FrameBuffer, lut: &GammaLut) {
        let full = Rect::new(0, 0, screen.width as i32, screen.height as i32);
        blend_rect(screen, full, 0x000000, SCRIM_ALPHA, lut);

        let (cx, cy) = self.close.center();
        blend_circle(screen, cx, cy, CLOSE_SIZE / 2, 0xFFFFFF, CLOSE_BG_ALPHA, lut);
        let h = CLOSE_ICON_HALF;
        draw_thick_line(screen, (cx - h, cy - h), (cx + h, cy + h), 2, 0xFFFFFF);
        draw_thick_line(screen, (cx - h, cy + h), (cx + h, cy - h), 2, 0xFFFFFF);

        self.content.render(screen);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Point;

    fn dialog() -> ScratchCardDialog {
        ScratchCardDialog::new(&CardConfig::default(), 11, &GammaLut::new())
    }

    fn tap(d: &mut ScratchCardDialog, p: Point) -> DialogAction {
        let a = d.handle(PointerEvent::Press(p));
        assert_eq!(a, DialogAction::None);
        d.handle(PointerEvent::Release(p))
    }

    #[test]
    fn close_button_is_pinned_top_center() {
        let d = dialog();
        let r = d.close_button();
        assert_eq!(r.y, 40);
        assert_eq!(r.center().0, 200);
    }

    #[test]
    fn tapping_close_dismisses() {
        let mut d = dialog();
        let (x, y) = d.close_button().center();
        assert_eq!(tap(&mut d, Point::new(x as f32, y as f32)), DialogAction::Dismiss);
    }

    #[test]
    fn tapping_the_scrim_does_nothing() {
        let mut d = dialog();
        for p in [Point::new(5.0, 5.0), Point::new(395.0, 790.0), Point::new(200.0, 150.0)] {
            assert_eq!(tap(&mut d, p), DialogAction::None);
        }
        assert_eq!(d.content().overlay().point_count(), 0);
    }

    #[test]
    fn press_on_close_released_elsewhere_does_not_dismiss() {
        let mut d = dialog();
        let (x, y) = d.close_button().center();
        d.handle(PointerEvent::Press(Point::new(x as f32, y as f32)));
        assert_eq!(d.handle(PointerEvent::Release(Point::new(200.0, 400.0))), DialogAction::None);
    }

    #[test]
    fn drags_on_the_card_reach_the_overlay() {
        let mut d = dialog();
        d.handle(PointerEvent::Press(Point::new(200.0, 400.0)));
        d.handle(PointerEvent::Move(Point::new(240.0, 400.0)));
        d.handle(PointerEvent::Move(Point::new(260.0, 410.0)));
        d.handle(PointerEvent::Release(Point::new(260.0, 410.0)));
        assert_eq!(d.content().overlay().point_count(), 3);
    }

    #[test]
    fn render_dims_the_background() {
        let mut d = dialog();
        let lut = GammaLut::new();
        let mut screen = FrameBuffer::filled(400, 800, 0xEEEEEE);
        d.render(&mut screen, &lut);
        let corner = screen.get(2, 798);
        assert!(corner < 0xEEEEEE && corner != 0, "scrim color {corner:06X}");
    }
}
