// The launcher screen: a light gray backdrop with one "Show Scratch Card" button.
// The dialog lives in an Option; dropping it on dismiss throws away the card,
// its scratches and its terms state, so the next open starts unscratched.

use crate::config::CardConfig;
use crate::dialog::{DialogAction, ScratchCardDialog};
use crate::draw::fill_rounded_rect;
use crate::font::{draw_text_centered, TextStyle};
use crate::gamma::GammaLut;
use crate::input::PointerEvent;
use crate::types::{FrameBuffer, Rect};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const BACKGROUND: u32 = 0xEEEEEE;
const BUTTON_COLOR: u32 = 0x6750A4;
const BUTTON_H: i32 = 40;
const BUTTON_PAD_X: i32 = 24;
const BUTTON_LABEL: &str = "Show Scratch Card";
const LABEL_STYLE: TextStyle = TextStyle::new(2, 0xFFFFFF);

pub struct ScratchCardApp {
    cfg: CardConfig,
    lut: GammaLut,
    seeds: StdRng, // one confetti seed per presentation
    button: Rect,
    button_pressed: bool,
    dialog: Option<ScratchCardDialog>,
}

impl ScratchCardApp {
    pub fn new(cfg: CardConfig) -> Self {
        let seeds = match cfg.confetti_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let w = LABEL_STYLE.measure(BUTTON_LABEL) + 2 * BUTTON_PAD_X;
        let button = Rect::new(
            (cfg.window_width as i32 - w) / 2,
            (cfg.window_height as i32 - BUTTON_H) / 2,
            w,
            BUTTON_H,
        );
        let open = cfg.open_on_launch;
        let mut app = Self { cfg, lut: GammaLut::new(), seeds, button, button_pressed: false, dialog: None };
        if open {
            app.open_dialog();
        }
        app
    }

    pub fn is_dialog_visible(&self) -> bool {
        self.dialog.is_some()
    }

    pub fn dialog(&self) -> Option<&ScratchCardDialog> {
        self.dialog.as_ref()
    }

    pub fn launch_button(&self) -> Rect {
        self.button
    }

    /// Show the dialog with a brand-new card. No-op if it is already up.
    pub fn open_dialog(&mut self) {
        if self.dialog.is_some() {
            return;
        }
        let seed = self.seeds.random::<u64>();
        self.dialog = Some(ScratchCardDialog::new(&self.cfg, seed, &self.lut));
        log::info!("scratch card dialog opened");
    }

    pub fn close_dialog(&mut self) {
        if let Some(d) = self.dialog.take() {
            let o = d.content().overlay();
            log::info!(
                "scratch card dialog dismissed ({} points, {:.0}% scratched, revealed: {})",
                o.point_count(),
                o.coverage() * 100.0,
                o.is_revealed()
            );
        }
    }

    /// While the dialog is up it gets every event; the launcher sees none.
    pub fn handle(&mut self, event: PointerEvent) {
        if let Some(dialog) = self.dialog.as_mut() {
            if dialog.handle(event) == DialogAction::Dismiss {
                self.close_dialog();
            }
            return;
        }

        match event {
            PointerEvent::Press(p) => self.button_pressed = self.button.contains(p),
            PointerEvent::Move(_) => {}
            PointerEvent::Release(p) => {
                let clicked = self.button_pressed && self.button.contains(p);
                self.button_pressed = false;
                if clicked {
                    self.open_dialog();
                }
            }
        }
    }

    pub fn update(&mut self, dt: f32) {
        if let Some(dialog) = self.dialog.as_mut() {
            dialog.update(dt);
        }
    }

    pub fn render(&mut self, screen: &mut FrameBuffer) {
        screen.pixels.fill(BACKGROUND);

        fill_rounded_rect(screen, self.button, BUTTON_H / 2, BUTTON_COLOR);
        let (cx, cy) = self.button.center();
        draw_text_centered(screen, cx, cy - LABEL_STYLE.glyph_height() / 2, BUTTON_LABEL, &LABEL_STYLE);

        if let Some(dialog) = self.dialog.as_mut() {
            dialog.render(screen, &self.lut);
        }
    }
}
