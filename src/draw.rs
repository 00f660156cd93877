// Window + software drawing utilities.
// Visual effects provided here:
// 1) A window that shows the launcher, the dialog and the card.
// 2) Filled / translucent rectangles, rounded panels and circles.
// 3) A thick line for the close "X" and a rounded-corner blit for the card.

use crate::error::Error;
use crate::gamma::GammaLut;
use crate::types::{FrameBuffer, Point, Rect};
use minifb::{Key, MouseButton, MouseMode, Window, WindowOptions};

pub struct Drawer {
    window: Window, // the on-screen window you see
}

impl Drawer {
    /// Create a window of the given size.
    /// Visual: a new empty window appears with your chosen title.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, Error> {
        let mut window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        window.set_target_fps(60);
        Ok(Self { window })
    }

    /// Push the pixels for this frame to the screen.
    pub fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }

    /// Returns false when the user closes the window (so we can stop the loop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// True while ESC is held down (we'll exit when this is pressed).
    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }

    /// Pointer position in window coordinates, NOT clamped: a drag that leaves
    /// the window keeps reporting where the cursor really is.
    pub fn pointer_pos(&self) -> Option<Point> {
        self.window
            .get_mouse_pos(MouseMode::Pass)
            .map(|(x, y)| Point::new(x, y))
    }

    pub fn left_mouse_down(&self) -> bool {
        self.window.get_mouse_down(MouseButton::Left)
    }
}

/* ---------- Software drawing ---------- */

/// Put a pixel on the framebuffer if (x,y) is inside bounds.
#[inline]
pub fn put_pixel(fb: &mut FrameBuffer, x: i32, y: i32, color: u32) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= fb.width || y >= fb.height {
        return;
    }
    let idx = y * fb.width + x;
    fb.pixels[idx] = color;
}

/// Paint `color` over (x,y) with the given opacity.
#[inline]
pub fn blend_pixel(fb: &mut FrameBuffer, x: i32, y: i32, color: u32, alpha: f32, lut: &GammaLut) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= fb.width || y >= fb.height {
        return;
    }
    let idx = y * fb.width + x;
    fb.pixels[idx] = lut.mix(fb.pixels[idx], color, alpha);
}

/// Clip `r` to the buffer; returns (x0, y0, x1, y1) half-open or None if nothing is left.
fn clip(fb: &FrameBuffer, r: Rect) -> Option<(usize, usize, usize, usize)> {
    let x0 = r.x.max(0);
    let y0 = r.y.max(0);
    let x1 = (r.x + r.w).min(fb.width as i32);
    let y1 = (r.y + r.h).min(fb.height as i32);
    if x0 >= x1 || y0 >= y1 {
        return None;
    }
    Some((x0 as usize, y0 as usize, x1 as usize, y1 as usize))
}

pub fn fill_rect(fb: &mut FrameBuffer, r: Rect, color: u32) {
    if let Some((x0, y0, x1, y1)) = clip(fb, r) {
        for y in y0..y1 {
            let row = y * fb.width;
            fb.pixels[row + x0..row + x1].fill(color);
        }
    }
}

/// Translucent rectangle. Visual: the dim layer behind the dialog.
pub fn blend_rect(fb: &mut FrameBuffer, r: Rect, color: u32, alpha: f32, lut: &GammaLut) {
    if let Some((x0, y0, x1, y1)) = clip(fb, r) {
        for y in y0..y1 {
            let row = y * fb.width;
            for px in &mut fb.pixels[row + x0..row + x1] {
                *px = lut.mix(*px, color, alpha);
            }
        }
    }
}

/// Is pixel (px,py) inside a rect with rounded corners of `radius`?
/// Tested at the pixel center so corners come out symmetric.
pub fn in_rounded_rect(r: Rect, radius: i32, px: i32, py: i32) -> bool {
    if px < r.x || py < r.y || px >= r.x + r.w || py >= r.y + r.h {
        return false;
    }
    let rad = radius.min(r.w / 2).min(r.h / 2).max(0) as f32;
    if rad == 0.0 {
        return true;
    }
    let cx = px as f32 + 0.5;
    let cy = py as f32 + 0.5;
    let left = r.x as f32 + rad;
    let right = (r.x + r.w) as f32 - rad;
    let top = r.y as f32 + rad;
    let bottom = (r.y + r.h) as f32 - rad;
    let nx = cx.clamp(left, right);
    let ny = cy.clamp(top, bottom);
    let dx = cx - nx;
    let dy = cy - ny;
    dx * dx + dy * dy <= rad * rad
}

pub fn fill_rounded_rect(fb: &mut FrameBuffer, r: Rect, radius: i32, color: u32) {
    if let Some((x0, y0, x1, y1)) = clip(fb, r) {
        for y in y0..y1 {
            for x in x0..x1 {
                if in_rounded_rect(r, radius, x as i32, y as i32) {
                    fb.pixels[y * fb.width + x] = color;
                }
            }
        }
    }
}

/// One-pixel outline of a rounded rect. Visual: the gold frame around the offer code.
pub fn stroke_rounded_rect(fb: &mut FrameBuffer, r: Rect, radius: i32, color: u32) {
    let inner = Rect::new(r.x + 1, r.y + 1, r.w - 2, r.h - 2);
    if let Some((x0, y0, x1, y1)) = clip(fb, r) {
        for y in y0..y1 {
            for x in x0..x1 {
                let (xi, yi) = (x as i32, y as i32);
                if in_rounded_rect(r, radius, xi, yi) && !in_rounded_rect(inner, radius - 1, xi, yi) {
                    fb.pixels[y * fb.width + x] = color;
                }
            }
        }
    }
}

/// Translucent filled circle centered on (cx,cy).
/// Visual: confetti dots and the frosted close button.
pub fn blend_circle(fb: &mut FrameBuffer, cx: i32, cy: i32, radius: i32, color: u32, alpha: f32, lut: &GammaLut) {
    if radius <= 0 {
        return;
    }
    let r2 = (radius * radius) as f32;
    for y in (cy - radius)..=(cy + radius) {
        for x in (cx - radius)..=(cx + radius) {
            let dx = (x - cx) as f32;
            let dy = (y - cy) as f32;
            if dx * dx + dy * dy <= r2 {
                blend_pixel(fb, x, y, color, alpha, lut);
            }
        }
    }
}

/// Draw a straight line `thickness` pixels wide between two points.
/// Visual: the strokes of the close "X".
pub fn draw_thick_line(fb: &mut FrameBuffer, from: (i32, i32), to: (i32, i32), thickness: i32, color: u32) {
    let (x0, y0) = (from.0 as f32, from.1 as f32);
    let (x1, y1) = (to.0 as f32, to.1 as f32);
    let half = thickness.max(1) as f32 / 2.0;
    let minx = (x0.min(x1) - half).floor() as i32;
    let maxx = (x0.max(x1) + half).ceil() as i32;
    let miny = (y0.min(y1) - half).floor() as i32;
    let maxy = (y0.max(y1) + half).ceil() as i32;
    for y in miny..=maxy {
        for x in minx..=maxx {
            let p = Point::new(x as f32 + 0.5, y as f32 + 0.5);
            if crate::brush::distance_to_segment(p, Point::new(x0, y0), Point::new(x1, y1)) <= half {
                put_pixel(fb, x, y, color);
            }
        }
    }
}

/// Copy the top `rows` rows of `src` into `dst` at (x,y), skipping pixels outside the
/// rounded corners of the full `src` rect.
/// Visual: the card appears clipped to a 20-unit corner radius; the terms panel unrolls downward.
pub fn blit_rounded(dst: &mut FrameBuffer, src: &FrameBuffer, x: i32, y: i32, radius: i32, rows: usize) {
    let local = Rect::new(0, 0, src.width as i32, src.height as i32);
    for sy in 0..src.height.min(rows) {
        let dy = y + sy as i32;
        if dy < 0 || dy >= dst.height as i32 {
            continue;
        }
        for sx in 0..src.width {
            let dx = x + sx as i32;
            if dx < 0 || dx >= dst.width as i32 {
                continue;
            }
            if in_rounded_rect(local, radius, sx as i32, sy as i32) {
                dst.pixels[dy as usize * dst.width + dx as usize] = src.pixels[sy * src.width + sx];
            }
        }
    }
}
