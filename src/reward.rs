// The reward underneath the scratch layer.
// Visual: dark card with a white "₹100 Cashback" badge, the offer title, a gold-framed
// offer code, a blue "Claim offer now" pill and a small "Terms & Conditions >" link,
// spread evenly from top to bottom.

use crate::draw::{fill_rounded_rect, stroke_rounded_rect};
use crate::font::{draw_text_centered, TextStyle};
use crate::types::{FrameBuffer, Point, Rect};

pub const CARD_BG: u32 = 0x1E1E1E;
const WHITE: u32 = 0xFFFFFF;
const BLACK: u32 = 0x000000;
const GRAY: u32 = 0x888888;
const GOLD: u32 = 0xDAA520;
const CLAIM_BLUE: u32 = 0x007AFF;

const PADDING: i32 = 16;
const BADGE: i32 = 70;
const CODE_BOX_H: i32 = 38;
const BUTTON_H: i32 = 48;

pub const BADGE_AMOUNT: &str = "₹100";
pub const BADGE_CAPTION: &str = "Cashback";
pub const OFFER_TITLE: &str = "Offer from AppVersal";
pub const OFFER_SUBTITLE: &str = "Cashback on mobile and recharge";
pub const OFFER_CODE: &str = "APPVERSAL1001";
pub const CLAIM_LABEL: &str = "Claim offer now";
pub const TERMS_LINK: &str = "Terms & Conditions >";

const AMOUNT_STYLE: TextStyle = TextStyle::new(2, BLACK).bold();
const CAPTION_STYLE: TextStyle = TextStyle::new(1, BLACK);
const TITLE_STYLE: TextStyle = TextStyle::new(2, WHITE).bold();
const SUBTITLE_STYLE: TextStyle = TextStyle::new(1, GRAY);
const CODE_STYLE: TextStyle = TextStyle::new(2, WHITE).bold().tracking(2);
const CLAIM_STYLE: TextStyle = TextStyle::new(2, WHITE);
const LINK_STYLE: TextStyle = TextStyle::new(1, GRAY);

/// Tappable things on the reward.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RewardTarget {
    Claim,
    Terms,
}

/// Where each block sits inside a square card (card-local coordinates).
#[derive(Clone, Copy, Debug)]
pub struct RewardLayout {
    pub size: i32,
    pub badge: Rect,
    pub title: Rect,
    pub code_box: Rect,
    pub claim: Rect,
    pub terms_link: Rect,
}

impl RewardLayout {
    /// Stack the five blocks top to bottom with equal gaps between them.
    pub fn new(size: usize) -> Self {
        let size = size as i32;
        let inner_w = size - 2 * PADDING;
        let title_h = TITLE_STYLE.glyph_height() + 4 + SUBTITLE_STYLE.glyph_height();
        let link_h = LINK_STYLE.line_height();
        let heights = [BADGE, title_h, CODE_BOX_H, BUTTON_H, link_h];

        let used: i32 = heights.iter().sum();
        let free = (size - 2 * PADDING - used).max(0);
        let gap = free / (heights.len() as i32 - 1);

        let mut y = PADDING;
        let mut rows = [Rect::new(0, 0, 0, 0); 5];
        for (slot, h) in rows.iter_mut().zip(heights) {
            *slot = Rect::new(PADDING, y, inner_w, h);
            y += h + gap;
        }

        let link_w = LINK_STYLE.measure(TERMS_LINK) + 8;
        Self {
            size,
            badge: Rect::new((size - BADGE) / 2, rows[0].y, BADGE, BADGE),
            title: rows[1],
            code_box: rows[2],
            claim: rows[3],
            terms_link: Rect::new((size - link_w) / 2, rows[4].y, link_w, rows[4].h),
        }
    }

    pub fn hit_test(&self, p: Point) -> Option<RewardTarget> {
        if self.claim.contains(p) {
            Some(RewardTarget::Claim)
        } else if self.terms_link.contains(p) {
            Some(RewardTarget::Terms)
        } else {
            None
        }
    }
}

/// Paint the whole reward into a card-sized buffer.
pub fn render(layout: &RewardLayout) -> FrameBuffer {
    let size = layout.size.max(0) as usize;
    let mut fb = FrameBuffer::filled(size, size, CARD_BG);
    let cx = layout.size / 2;

    // Badge: white tile with amount over caption
    fill_rounded_rect(&mut fb, layout.badge, 4, WHITE);
    let stack_h = AMOUNT_STYLE.glyph_height() + 4 + CAPTION_STYLE.glyph_height();
    let top = layout.badge.y + (layout.badge.h - stack_h) / 2;
    draw_text_centered(&mut fb, cx, top, BADGE_AMOUNT, &AMOUNT_STYLE);
    draw_text_centered(&mut fb, cx, top + AMOUNT_STYLE.glyph_height() + 4, BADGE_CAPTION, &CAPTION_STYLE);

    // Title + subtitle
    draw_text_centered(&mut fb, cx, layout.title.y, OFFER_TITLE, &TITLE_STYLE);
    draw_text_centered(&mut fb, cx, layout.title.y + TITLE_STYLE.glyph_height() + 4, OFFER_SUBTITLE, &SUBTITLE_STYLE);

    // Offer code in a gold frame
    stroke_rounded_rect(&mut fb, layout.code_box, 8, GOLD);
    let code_y = layout.code_box.y + (layout.code_box.h - CODE_STYLE.glyph_height()) / 2;
    draw_text_centered(&mut fb, cx, code_y, OFFER_CODE, &CODE_STYLE);

    // Claim pill (does nothing when tapped)
    fill_rounded_rect(&mut fb, layout.claim, layout.claim.h / 2, CLAIM_BLUE);
    let claim_y = layout.claim.y + (layout.claim.h - CLAIM_STYLE.glyph_height()) / 2;
    draw_text_centered(&mut fb, cx, claim_y, CLAIM_LABEL, &CLAIM_STYLE);

    // Terms link
    draw_text_centered(&mut fb, cx, layout.terms_link.y + 1, TERMS_LINK, &LINK_STYLE);

    fb
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::glyph5x7;

    #[test]
    fn blocks_are_ordered_and_inside_the_card() {
        let l = RewardLayout::new(320);
        let blocks = [l.badge, l.title, l.code_box, l.claim, l.terms_link];
        for pair in blocks.windows(2) {
            assert!(pair[0].y + pair[0].h <= pair[1].y, "{:?} overlaps {:?}", pair[0], pair[1]);
        }
        for b in blocks {
            assert!(b.x >= 0 && b.y >= 0);
            assert!(b.x + b.w <= 320 && b.y + b.h <= 320);
        }
        assert_eq!(l.badge.y, PADDING);
    }

    #[test]
    fn hit_test_finds_claim_and_terms() {
        let l = RewardLayout::new(320);
        let (cx, cy) = l.claim.center();
        assert_eq!(l.hit_test(Point::new(cx as f32, cy as f32)), Some(RewardTarget::Claim));
        let (tx, ty) = l.terms_link.center();
        assert_eq!(l.hit_test(Point::new(tx as f32, ty as f32)), Some(RewardTarget::Terms));
        let (bx, by) = l.badge.center();
        assert_eq!(l.hit_test(Point::new(bx as f32, by as f32)), None);
    }

    #[test]
    fn all_labels_fit_and_have_glyphs() {
        let inner = 320 - 2 * PADDING;
        for (text, style) in [
            (OFFER_TITLE, TITLE_STYLE),
            (OFFER_SUBTITLE, SUBTITLE_STYLE),
            (OFFER_CODE, CODE_STYLE),
            (CLAIM_LABEL, CLAIM_STYLE),
            (TERMS_LINK, LINK_STYLE),
        ] {
            assert!(style.measure(text) <= inner, "{text} too wide");
        }
        assert!(AMOUNT_STYLE.measure(BADGE_AMOUNT) <= BADGE);
        for text in [BADGE_AMOUNT, BADGE_CAPTION, OFFER_TITLE, OFFER_SUBTITLE, OFFER_CODE, CLAIM_LABEL, TERMS_LINK] {
            for ch in text.chars() {
                assert!(glyph5x7(ch).is_some(), "no glyph for {ch:?} in {text}");
            }
        }
    }

    #[test]
    fn render_paints_badge_and_button() {
        let l = RewardLayout::new(320);
        let fb = render(&l);
        assert_eq!(fb.get(2, 2), CARD_BG);
        assert_eq!(fb.get(l.badge.x as usize + 2, l.badge.y as usize + 2), WHITE);
        assert_eq!(fb.get(l.claim.x as usize + 40, l.claim.y as usize + 4), CLAIM_BLUE);
        let border_y = l.code_box.y as usize;
        assert_eq!(fb.get(160, border_y), GOLD);
    }
}
