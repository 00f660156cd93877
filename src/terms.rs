// Terms & Conditions panel under the card.
// Visual: a near-black rounded panel with three bold headings and gray paragraphs that
// unrolls downward when the link on the card is tapped, and rolls back up on the next tap.

use crate::draw::blit_rounded;
use crate::font::{draw_text, wrap, TextStyle};
use crate::types::FrameBuffer;

pub const PANEL_BG: u32 = 0x121212;
/// Space between the card and the panel.
pub const TOP_GAP: i32 = 10;
const RADIUS: i32 = 12;
const PADDING: i32 = 16;
const HEADING_GAP: i32 = 3;   // heading -> paragraph
const SECTION_GAP: i32 = 12;  // paragraph -> next heading

const HEADING: TextStyle = TextStyle::new(1, 0xFFFFFF).bold();
const BODY: TextStyle = TextStyle::new(1, 0x888888);

pub const SECTIONS: [(&str, &str); 3] = [
    (
        "Eligibility:",
        "Only fake users who meet the campaign criteria (as defined by the brand/platform) are eligible to participate in the Scratch CRC program.",
    ),
    (
        "Non-Transferable & One-Time Use:",
        "Each scratch code/reward is unique, valid for a single use, and cannot be transferred, exchanged, or redeemed for cash unless explicitly stated.",
    ),
    (
        "Fraud Prevention:",
        "Any misuse, duplication, unauthorized distribution, or suspicious activity related to the scratch code will result in immediate disqualification and potential blocking of the user/account.",
    ),
];

pub struct TermsPanel {
    expanded: bool,
    progress: f32,   // 0 = collapsed, 1 = fully open
    anim_secs: f32,
    surface: FrameBuffer, // the fully open panel, rendered once
}

impl TermsPanel {
    /// Lay out and pre-render the panel for a column `width` wide. Starts collapsed.
    pub fn new(width: usize, anim_secs: f32) -> Self {
        let text_w = width as i32 - 2 * PADDING;
        let sections: Vec<Vec<String>> = SECTIONS.iter().map(|(_, body)| wrap(body, text_w, &BODY)).collect();

        let mut height = PADDING * 2;
        for (i, lines) in sections.iter().enumerate() {
            height += HEADING.line_height() + HEADING_GAP + lines.len() as i32 * BODY.line_height();
            if i + 1 < sections.len() {
                height += SECTION_GAP;
            }
        }

        // corners are cut when blitting
        let mut surface = FrameBuffer::filled(width, height.max(0) as usize, PANEL_BG);
        let mut y = PADDING;
        for (i, ((heading, _), lines)) in SECTIONS.iter().zip(&sections).enumerate() {
            draw_text(&mut surface, PADDING, y, heading, &HEADING);
            y += HEADING.line_height() + HEADING_GAP;
            for line in lines {
                draw_text(&mut surface, PADDING, y, line, &BODY);
                y += BODY.line_height();
            }
            if i + 1 < sections.len() {
                y += SECTION_GAP;
            }
        }

        Self { expanded: false, progress: 0.0, anim_secs, surface }
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
        log::debug!("terms {}", if self.expanded { "expanded" } else { "collapsed" });
    }

    /// Advance the open/close animation by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        let target = if self.expanded { 1.0 } else { 0.0 };
        if self.anim_secs <= 0.0 {
            self.progress = target;
            return;
        }
        let step = dt.max(0.0) / self.anim_secs;
        self.progress = if self.progress < target {
            (self.progress + step).min(target)
        } else {
            (self.progress - step).max(target)
        };
    }

    /// True while the panel is still moving toward its target.
    pub fn is_animating(&self) -> bool {
        let target = if self.expanded { 1.0 } else { 0.0 };
        self.progress != target
    }

    pub fn full_height(&self) -> i32 {
        self.surface.height as i32
    }

    /// Vertical space the panel (gap included) takes in the column right now.
    pub fn occupied_height(&self) -> i32 {
        // ease-out so the panel opens fast and settles gently
        let eased = 1.0 - (1.0 - self.progress).powi(3);
        ((TOP_GAP + self.full_height()) as f32 * eased).round() as i32
    }

    /// Draw whatever part of the panel is currently unrolled, with the gap's top at (x, y).
    pub fn render(&self, fb: &mut FrameBuffer, x: i32, y: i32) {
        let rows = self.occupied_height() - TOP_GAP;
        if rows <= 0 {
            return;
        }
        blit_rounded(fb, &self.surface, x, y + TOP_GAP, RADIUS, rows as usize);
    }
}
