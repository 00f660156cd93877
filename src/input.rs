// Pointer plumbing: turns "is the button down, where is the cursor" samples into
// press/move/release events, and press/move/release into taps and drags.

use crate::types::Point;

/// How far the pointer must travel from the press before it counts as a drag.
/// Matches the usual 8-unit touch slop.
pub const DRAG_SLOP: f32 = 8.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Press(Point),
    Move(Point),
    Release(Point),
}

impl PointerEvent {
    pub fn position(&self) -> Point {
        match *self {
            PointerEvent::Press(p) | PointerEvent::Move(p) | PointerEvent::Release(p) => p,
        }
    }
}

/// Edge detector over per-frame samples.
/// Moves are only reported while the button is held, matching drag-style input.
#[derive(Default)]
pub struct PointerTracker {
    was_down: bool,
    last: Option<Point>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one frame's sample; returns the events it implies (0..=2).
    /// A missing position reuses the last known one.
    pub fn sample(&mut self, down: bool, pos: Option<Point>) -> Vec<PointerEvent> {
        let mut events = Vec::new();
        let pos = match pos.or(self.last) {
            Some(p) => p,
            None => return events, // no cursor seen yet
        };

        match (self.was_down, down) {
            (false, true) => events.push(PointerEvent::Press(pos)),
            (true, true) => {
                if self.last != Some(pos) {
                    events.push(PointerEvent::Move(pos));
                }
            }
            (true, false) => {
                if self.last != Some(pos) {
                    events.push(PointerEvent::Move(pos));
                }
                events.push(PointerEvent::Release(pos));
            }
            (false, false) => {}
        }

        self.was_down = down;
        self.last = Some(pos);
        events
    }
}

/// What a drag detector saw in one pointer event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragSignal {
    /// Slop crossed: the drag begins at the original press point...
    Start(Point),
    /// ...and moves to the current position.
    Move(Point),
}

/// Press -> (slop) -> drag recognition for one gesture at a time.
pub struct DragDetector {
    slop: f32,
    origin: Option<Point>,
    dragging: bool,
}

impl DragDetector {
    pub fn new(slop: f32) -> Self {
        Self { slop, origin: None, dragging: false }
    }

    pub fn press(&mut self, p: Point) {
        self.origin = Some(p);
        self.dragging = false;
    }

    pub fn is_tracking(&self) -> bool {
        self.origin.is_some()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Feed a move; returns the drag signals it produced, in order.
    pub fn motion(&mut self, p: Point) -> Vec<DragSignal> {
        let Some(origin) = self.origin else { return Vec::new() };
        if self.dragging {
            return vec![DragSignal::Move(p)];
        }
        if p.distance(origin) > self.slop {
            self.dragging = true;
            return vec![DragSignal::Start(origin), DragSignal::Move(p)];
        }
        Vec::new()
    }

    /// End the gesture. Returns true if it was a tap (never left the slop).
    pub fn release(&mut self) -> bool {
        let was_tap = self.origin.is_some() && !self.dragging;
        self.origin = None;
        self.dragging = false;
        was_tap
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f32, y: f32) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn tracker_emits_press_move_release() {
        let mut t = PointerTracker::new();
        assert!(t.sample(false, Some(p(1.0, 1.0))).is_empty());
        assert_eq!(t.sample(true, Some(p(1.0, 1.0))), vec![PointerEvent::Press(p(1.0, 1.0))]);
        assert!(t.sample(true, Some(p(1.0, 1.0))).is_empty(), "no move without motion");
        assert_eq!(t.sample(true, Some(p(3.0, 1.0))), vec![PointerEvent::Move(p(3.0, 1.0))]);
        assert_eq!(t.sample(false, Some(p(3.0, 1.0))), vec![PointerEvent::Release(p(3.0, 1.0))]);
    }

    #[test]
    fn tracker_keeps_unclamped_coordinates() {
        let mut t = PointerTracker::new();
        t.sample(true, Some(p(10.0, 10.0)));
        let ev = t.sample(true, Some(p(-250.0, 9000.0)));
        assert_eq!(ev, vec![PointerEvent::Move(p(-250.0, 9000.0))]);
    }

    #[test]
    fn tracker_reuses_last_position_when_cursor_lost() {
        let mut t = PointerTracker::new();
        assert!(t.sample(true, None).is_empty());
        t.sample(false, Some(p(5.0, 5.0)));
        assert_eq!(t.sample(true, None), vec![PointerEvent::Press(p(5.0, 5.0))]);
    }

    #[test]
    fn drag_starts_at_press_point_after_slop() {
        let mut d = DragDetector::new(DRAG_SLOP);
        d.press(p(0.0, 0.0));
        assert!(d.motion(p(3.0, 4.0)).is_empty()); // distance 5 < 8
        assert_eq!(
            d.motion(p(9.0, 0.0)),
            vec![DragSignal::Start(p(0.0, 0.0)), DragSignal::Move(p(9.0, 0.0))]
        );
        assert_eq!(d.motion(p(9.5, 0.0)), vec![DragSignal::Move(p(9.5, 0.0))]);
        assert!(!d.release());
    }

    #[test]
    fn short_press_is_a_tap() {
        let mut d = DragDetector::new(DRAG_SLOP);
        d.press(p(0.0, 0.0));
        d.motion(p(2.0, 2.0));
        assert!(d.release());
        assert!(!d.release(), "no gesture left to end");
    }

    #[test]
    fn motion_without_press_is_ignored() {
        let mut d = DragDetector::new(DRAG_SLOP);
        assert!(d.motion(p(100.0, 100.0)).is_empty());
    }
}
