// SPDX-License-Identifier: MPL-2.0
//! Navigation sub-component: the current index over a fixed-length sequence.
//!
//! Moves are bounded and never wrap. Requests that would leave the
//! sequence are clamped or ignored, never reported as errors.

/// Direction of a navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

/// Navigation sub-component state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct State {
    index: usize,
}

/// Messages for the navigation sub-component.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// Jump to `index`, clamped into a sequence of `len` photos.
    JumpTo { index: usize, len: usize },
    /// Step one photo in `direction`.
    Step { direction: Direction, len: usize },
    /// The sequence was replaced by one of `len` photos.
    Resize { len: usize },
}

/// Effects produced by navigation changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Index unchanged.
    None,
    /// Index moved to the given value.
    Moved(usize),
}

impl State {
    /// Handle a navigation message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        let target = match msg {
            Message::JumpTo { index, len } => {
                if len == 0 {
                    return Effect::None;
                }
                index.min(len - 1)
            }
            Message::Step { direction, len } => match direction {
                Direction::Next if self.index + 1 < len => self.index + 1,
                Direction::Previous if self.index > 0 && len > 0 => self.index - 1,
                _ => return Effect::None,
            },
            Message::Resize { len } => self.index.min(len.saturating_sub(1)),
        };

        if target == self.index {
            Effect::None
        } else {
            self.index = target;
            Effect::Moved(target)
        }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.index > 0
    }

    #[must_use]
    pub fn has_next(&self, len: usize) -> bool {
        self.index + 1 < len
    }
}
