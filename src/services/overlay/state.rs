use crate::models::rect::{Point, ScreenRectangle};

/// Keys the overlay reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Other,
}

/// Input delivered by the overlay surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayEvent {
    PointerDown(Point),
    PointerMove(Point),
    PointerUp(Point),
    KeyPressed(Key),
    /// The host closed the surface underneath us
    Closed,
}

/// The drag in progress, alive only while `SelectionState::Dragging`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragGesture {
    pub anchor: Point,
    pub current: Point,
}

impl DragGesture {
    pub fn begin(at: Point) -> Self {
        Self {
            anchor: at,
            current: at,
        }
    }

    /// Canonical rectangle between anchor and current pointer
    pub fn rect(&self) -> ScreenRectangle {
        ScreenRectangle::from_corners(self.anchor, self.current)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    Idle,
    Dragging(DragGesture),
    Committed(ScreenRectangle),
    Cancelled,
}

/// What the surface has to do after a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Repaint with the outline of this rectangle
    Redraw(ScreenRectangle),
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::Idle
    }
}

impl SelectionState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Committed(_) | Self::Cancelled)
    }

    /// Rectangle currently outlined on screen, if any
    pub fn selection(&self) -> Option<ScreenRectangle> {
        match self {
            Self::Dragging(gesture) => Some(gesture.rect()),
            Self::Committed(rect) => Some(*rect),
            Self::Idle | Self::Cancelled => None,
        }
    }

    /// Apply one input event
    pub fn handle(self, event: OverlayEvent) -> (SelectionState, Effect) {
        if self.is_terminal() {
            return (self, Effect::None);
        }

        match (self, event) {
            (_, OverlayEvent::KeyPressed(Key::Escape)) | (_, OverlayEvent::Closed) => {
                (Self::Cancelled, Effect::None)
            }
            (Self::Idle, OverlayEvent::PointerDown(at)) => {
                let gesture = DragGesture::begin(at);
                (Self::Dragging(gesture), Effect::Redraw(gesture.rect()))
            }
            (Self::Dragging(mut gesture), OverlayEvent::PointerMove(at)) => {
                gesture.current = at;
                (Self::Dragging(gesture), Effect::Redraw(gesture.rect()))
            }
            (Self::Dragging(mut gesture), OverlayEvent::PointerUp(at)) => {
                gesture.current = at;
                let rect = gesture.rect();
                if rect.is_empty() {
                    (Self::Cancelled, Effect::None)
                } else {
                    (Self::Committed(rect), Effect::None)
                }
            }
            (state, _) => (state, Effect::None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drive(events: &[OverlayEvent]) -> SelectionState {
        events
            .iter()
            .fold(SelectionState::Idle, |state, event| state.handle(*event).0)
    }

    fn down(x: i32, y: i32) -> OverlayEvent {
        OverlayEvent::PointerDown(Point::new(x, y))
    }

    fn moved(x: i32, y: i32) -> OverlayEvent {
        OverlayEvent::PointerMove(Point::new(x, y))
    }

    fn up(x: i32, y: i32) -> OverlayEvent {
        OverlayEvent::PointerUp(Point::new(x, y))
    }

    #[test]
    fn test_down_right_drag_commits() {
        let state = drive(&[down(10, 10), moved(50, 40), up(110, 60)]);
        assert_eq!(
            state,
            SelectionState::Committed(ScreenRectangle::new(10, 10, 100, 50))
        );
    }

    #[test]
    fn test_up_left_drag_matches_down_right() {
        let forward = drive(&[down(10, 10), moved(110, 60), up(110, 60)]);
        let backward = drive(&[down(110, 60), moved(10, 10), up(10, 10)]);
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_every_move_requests_outline_redraw() {
        let state = SelectionState::Idle;
        let (state, effect) = state.handle(down(100, 100));
        assert_eq!(effect, Effect::Redraw(ScreenRectangle::new(100, 100, 0, 0)));

        let (state, effect) = state.handle(moved(40, 130));
        assert_eq!(effect, Effect::Redraw(ScreenRectangle::new(40, 100, 60, 30)));
        assert_eq!(state.selection(), Some(ScreenRectangle::new(40, 100, 60, 30)));
    }

    #[test]
    fn test_click_without_drag_cancels() {
        assert_eq!(drive(&[down(5, 5), up(5, 5)]), SelectionState::Cancelled);
    }

    #[test]
    fn test_zero_width_drag_cancels() {
        assert_eq!(
            drive(&[down(5, 5), moved(5, 80), up(5, 80)]),
            SelectionState::Cancelled
        );
    }

    #[test]
    fn test_escape_during_drag_cancels() {
        let state = drive(&[
            down(0, 0),
            moved(300, 300),
            OverlayEvent::KeyPressed(Key::Escape),
            up(300, 300),
        ]);
        assert_eq!(state, SelectionState::Cancelled);
    }

    #[test]
    fn test_escape_before_drag_cancels() {
        assert_eq!(
            drive(&[OverlayEvent::KeyPressed(Key::Escape)]),
            SelectionState::Cancelled
        );
    }

    #[test]
    fn test_other_keys_are_ignored() {
        let state = drive(&[
            down(0, 0),
            OverlayEvent::KeyPressed(Key::Other),
            up(20, 20),
        ]);
        assert_eq!(state, SelectionState::Committed(ScreenRectangle::new(0, 0, 20, 20)));
    }

    #[test]
    fn test_host_close_cancels() {
        assert_eq!(
            drive(&[down(0, 0), moved(10, 10), OverlayEvent::Closed]),
            SelectionState::Cancelled
        );
    }

    #[test]
    fn test_moves_before_down_are_ignored() {
        let (state, effect) = SelectionState::Idle.handle(moved(10, 10));
        assert_eq!(state, SelectionState::Idle);
        assert_eq!(effect, Effect::None);

        let (state, _) = SelectionState::Idle.handle(up(10, 10));
        assert_eq!(state, SelectionState::Idle);
    }

    #[test]
    fn test_coordinates_are_not_clamped() {
        // Dragging past the display edge onto a neighbouring one
        let state = drive(&[down(1900, 500), up(2100, -20)]);
        assert_eq!(
            state,
            SelectionState::Committed(ScreenRectangle::new(1900, -20, 200, 520))
        );
    }

    #[test]
    fn test_terminal_states_ignore_events() {
        let committed = SelectionState::Committed(ScreenRectangle::new(0, 0, 5, 5));
        assert_eq!(committed.handle(down(1, 1)).0, committed);
        assert_eq!(
            committed.handle(OverlayEvent::KeyPressed(Key::Escape)).0,
            committed
        );
        assert_eq!(
            SelectionState::Cancelled.handle(down(1, 1)).0,
            SelectionState::Cancelled
        );
    }
}
