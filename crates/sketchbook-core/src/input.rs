//! Pointer and touch events forwarded by the host.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Raw input event in client coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    MouseDown { client: Point },
    MouseMove { client: Point },
    MouseUp,
    /// Pointer left the surface.
    MouseLeave,
    /// `touches` holds every active contact.
    TouchStart { touches: Vec<Point> },
    TouchMove { touches: Vec<Point> },
    /// Ending never maps a position, so no contacts are carried.
    TouchEnd,
    TouchCancel,
}

/// What an input event means for the gesture lifecycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureAction {
    Start(Point),
    Move(Point),
    End,
    /// Nothing to do (multi-touch, or no usable contact).
    Ignore,
}

impl InputEvent {
    /// Translate this event into a gesture action.
    ///
    /// Touch start and move only act while exactly one contact is down.
    /// Leaving the surface and cancelling a touch both end the gesture.
    pub fn action(&self) -> GestureAction {
        match self {
            InputEvent::MouseDown { client } => GestureAction::Start(*client),
            InputEvent::MouseMove { client } => GestureAction::Move(*client),
            InputEvent::MouseUp | InputEvent::MouseLeave | InputEvent::TouchEnd | InputEvent::TouchCancel => {
                GestureAction::End
            }
            InputEvent::TouchStart { touches } => match touches.as_slice() {
                [contact] => GestureAction::Start(*contact),
                _ => GestureAction::Ignore,
            },
            InputEvent::TouchMove { touches } => match touches.as_slice() {
                [contact] => GestureAction::Move(*contact),
                _ => GestureAction::Ignore,
            },
        }
    }
}
