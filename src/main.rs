// What you SEE:
// • A light gray screen with a "Show Scratch Card" button; the card dialog is already open.
// • Hold Left Mouse and drag over the blue "Scratch me" panel: it wipes away like foil.
// • After enough scratching the panel vanishes and the ₹100 cashback card is fully shown.
// • "Terms & Conditions >" (after the reveal) unrolls the terms under the card.
// • The round X at the top closes the dialog; the button opens a fresh, unscratched card.
// • ESC quits. RUST_LOG=debug shows drags, toggles and FPS.

use scratch_card::app::ScratchCardApp;
use scratch_card::config::CardConfig;
use scratch_card::draw::Drawer;
use scratch_card::error::Error;
use scratch_card::input::PointerTracker;
use scratch_card::types::FrameBuffer;
use std::time::{Duration, Instant};

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    /* --- Config + window setup --- */
    let cfg = CardConfig::default();
    cfg.validate()?;
    let mut drawer = Drawer::new("Scratch Card", cfg.window_width, cfg.window_height)?;

    /* --- Reusable screen buffer ---
       Visual: this is the image you actually see each frame. */
    let mut screen = FrameBuffer::filled(cfg.window_width, cfg.window_height, 0);

    let mut app = ScratchCardApp::new(cfg);
    let mut pointer = PointerTracker::new();

    /* --- FPS bookkeeping (debug log once per second) --- */
    let mut last_fps_time = Instant::now();
    let mut frames_this_second: u32 = 0;
    let mut last_frame_time = Instant::now();

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.is_open() && !drawer.esc_pressed() {
        let now = Instant::now();
        let dt = (now - last_frame_time).as_secs_f32(); // drives the terms animation
        last_frame_time = now;

        /* 1) Pointer samples -> press/move/release -> widgets */
        for event in pointer.sample(drawer.left_mouse_down(), drawer.pointer_pos()) {
            app.handle(event);
        }

        /* 2) Animations */
        app.update(dt);

        /* 3) Launcher, then dialog + card on top */
        app.render(&mut screen);

        /* 4) Present to the window */
        drawer.present(&screen)?;

        /* 5) FPS counter */
        frames_this_second += 1;
        if now.duration_since(last_fps_time) >= Duration::from_secs(1) {
            let secs = now.duration_since(last_fps_time).as_secs_f32();
            log::debug!("FPS: {:.1}", frames_this_second as f32 / secs);
            frames_this_second = 0;
            last_fps_time = now;
        }
    }

    Ok(())
}
