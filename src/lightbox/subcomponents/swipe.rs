// SPDX-License-Identifier: MPL-2.0
//! Swipe sub-component: turns a horizontal finger drag into a navigation step.
//!
//! Only the distance between touch-start and touch-end matters. A leftward
//! drag past the threshold moves to the next photo, a rightward one to the
//! previous photo. Shorter drags and vertical drags do nothing.

use super::navigation::Direction;
use crate::config::{DEFAULT_SWIPE_THRESHOLD_PX, MAX_SWIPE_THRESHOLD_PX, MIN_SWIPE_THRESHOLD_PX};
use iced::touch::Finger;
use iced::Point;

/// Horizontal swipe distance, guaranteed to be within 10–400 logical px.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeThreshold(f32);

impl SwipeThreshold {
    /// Creates a new threshold, clamping the value to the valid range.
    #[must_use]
    pub fn new(px: f32) -> Self {
        if px.is_nan() {
            return Self::default();
        }
        Self(px.clamp(MIN_SWIPE_THRESHOLD_PX, MAX_SWIPE_THRESHOLD_PX))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for SwipeThreshold {
    fn default() -> Self {
        Self(DEFAULT_SWIPE_THRESHOLD_PX)
    }
}

/// Swipe sub-component state.
#[derive(Debug, Clone, Default)]
pub struct State {
    threshold: SwipeThreshold,
    /// Finger that started the gesture and where it went down.
    start: Option<(Finger, Point)>,
}

/// Messages for the swipe sub-component.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    Pressed { finger: Finger, position: Point },
    Lifted { finger: Finger, position: Point },
    /// The gesture was interrupted (e.g. the window lost focus).
    Lost { finger: Finger },
}

/// Effects produced by swipe gestures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Navigate(Direction),
}

impl State {
    #[must_use]
    pub fn new(threshold: SwipeThreshold) -> Self {
        Self {
            threshold,
            start: None,
        }
    }

    /// Handle a swipe message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Pressed { finger, position } => {
                // Second fingers are ignored; this is not a pinch handler.
                if self.start.is_none() {
                    self.start = Some((finger, position));
                }
                Effect::None
            }
            Message::Lifted { finger, position } => match self.start {
                Some((started, origin)) if started == finger => {
                    self.start = None;
                    self.classify(origin, position)
                }
                _ => Effect::None,
            },
            Message::Lost { finger } => {
                if matches!(self.start, Some((started, _)) if started == finger) {
                    self.start = None;
                }
                Effect::None
            }
        }
    }

    /// Forget any gesture in progress.
    pub fn reset(&mut self) {
        self.start = None;
    }

    #[must_use]
    pub fn threshold(&self) -> SwipeThreshold {
        self.threshold
    }

    pub fn set_threshold(&mut self, threshold: SwipeThreshold) {
        self.threshold = threshold;
    }

    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }

    fn classify(&self, from: Point, to: Point) -> Effect {
        let dx = to.x - from.x;
        if dx.abs() <= self.threshold.value() {
            Effect::None
        } else if dx < 0.0 {
            Effect::Navigate(Direction::Next)
        } else {
            Effect::Navigate(Direction::Previous)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FINGER: Finger = Finger(1);

    fn swipe(state: &mut State, from_x: f32, to_x: f32) -> Effect {
        state.handle(Message::Pressed {
            finger: FINGER,
            position: Point::new(from_x, 100.0),
        });
        state.handle(Message::Lifted {
            finger: FINGER,
            position: Point::new(to_x, 110.0),
        })
    }

    #[test]
    fn leftward_swipe_goes_next() {
        let mut state = State::default();
        assert_eq!(swipe(&mut state, 300.0, 200.0), Effect::Navigate(Direction::Next));
        assert!(!state.is_tracking());
    }

    #[test]
    fn rightward_swipe_goes_previous() {
        let mut state = State::default();
        assert_eq!(
            swipe(&mut state, 100.0, 160.0),
            Effect::Navigate(Direction::Previous)
        );
    }

    #[test]
    fn short_drag_is_ignored() {
        let mut state = State::default();
        assert_eq!(swipe(&mut state, 100.0, 140.0), Effect::None);
        assert_eq!(swipe(&mut state, 100.0, 50.0), Effect::None, "exactly 50px is not past the threshold");
    }

    #[test]
    fn custom_threshold_is_respected() {
        let mut state = State::new(SwipeThreshold::new(120.0));
        assert_eq!(swipe(&mut state, 0.0, 100.0), Effect::None);
        assert_eq!(
            swipe(&mut state, 0.0, 130.0),
            Effect::Navigate(Direction::Previous)
        );
    }

    #[test]
    fn lift_of_other_finger_is_ignored() {
        let mut state = State::default();
        state.handle(Message::Pressed {
            finger: FINGER,
            position: Point::new(300.0, 0.0),
        });
        let effect = state.handle(Message::Lifted {
            finger: Finger(2),
            position: Point::new(0.0, 0.0),
        });
        assert_eq!(effect, Effect::None);
        assert!(state.is_tracking());
    }

    #[test]
    fn lost_finger_cancels_gesture() {
        let mut state = State::default();
        state.handle(Message::Pressed {
            finger: FINGER,
            position: Point::new(300.0, 0.0),
        });
        state.handle(Message::Lost { finger: FINGER });
        let effect = state.handle(Message::Lifted {
            finger: FINGER,
            position: Point::new(0.0, 0.0),
        });
        assert_eq!(effect, Effect::None);
    }

    #[test]
    fn threshold_is_clamped() {
        assert_eq!(SwipeThreshold::new(0.0).value(), MIN_SWIPE_THRESHOLD_PX);
        assert_eq!(SwipeThreshold::new(9_999.0).value(), MAX_SWIPE_THRESHOLD_PX);
        assert_eq!(SwipeThreshold::new(f32::NAN), SwipeThreshold::default());
    }
}
