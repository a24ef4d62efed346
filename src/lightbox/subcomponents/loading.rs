// SPDX-License-Identifier: MPL-2.0
//! Loading state sub-component: staleness tokens and the animated spinner.
//!
//! Every image-load cycle takes a fresh [`LoadToken`]. A result is only
//! committed if it carries the token that is current when it arrives;
//! anything older belongs to a superseded navigation step.

/// Spinner rotation speed in radians per tick.
const SPINNER_SPEED: f32 = 0.1;

/// Monotonic identifier of an image-load cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct LoadToken(u64);

impl LoadToken {
    /// Returns the raw counter value.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    #[must_use]
    fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// Loading state for the lightbox.
#[derive(Debug, Clone, Default)]
pub struct State {
    /// Token of the most recent load cycle.
    token: LoadToken,
    is_loading: bool,
    /// Current spinner rotation angle in radians.
    spinner_rotation: f32,
}

/// Messages for the loading state sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    /// A new load cycle starts.
    Begin,
    /// A load finished with the given token.
    Finish(LoadToken),
    /// Drop the pending cycle without waiting for its result.
    Invalidate,
    /// Animate the spinner.
    SpinnerTick,
}

/// Effects produced by the loading state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// A cycle started; the loader result must carry this token.
    Started(LoadToken),
    /// The finished load is the current one and may be committed.
    Commit,
    /// The finished load was superseded and must be discarded.
    Stale,
}

impl State {
    /// Handle a loading state message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Begin => {
                self.token = self.token.next();
                self.is_loading = true;
                Effect::Started(self.token)
            }
            Message::Finish(token) => {
                if token == self.token && self.is_loading {
                    self.is_loading = false;
                    self.spinner_rotation = 0.0;
                    Effect::Commit
                } else {
                    Effect::Stale
                }
            }
            Message::Invalidate => {
                self.token = self.token.next();
                self.is_loading = false;
                self.spinner_rotation = 0.0;
                Effect::None
            }
            Message::SpinnerTick => {
                if self.is_loading {
                    self.spinner_rotation += SPINNER_SPEED;
                    if self.spinner_rotation > std::f32::consts::TAU {
                        self.spinner_rotation -= std::f32::consts::TAU;
                    }
                }
                Effect::None
            }
        }
    }

    /// Token of the most recent cycle.
    #[must_use]
    pub fn token(&self) -> LoadToken {
        self.token
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Get the current spinner rotation angle in radians.
    #[must_use]
    pub fn spinner_rotation(&self) -> f32 {
        self.spinner_rotation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_increments_token_and_sets_loading() {
        let mut state = State::default();
        let before = state.token();

        let effect = state.handle(Message::Begin);

        assert!(state.is_loading());
        assert!(state.token() > before);
        assert_eq!(effect, Effect::Started(state.token()));
    }

    #[test]
    fn finish_with_current_token_commits() {
        let mut state = State::default();
        let Effect::Started(token) = state.handle(Message::Begin) else {
            panic!("expected Started");
        };

        assert_eq!(state.handle(Message::Finish(token)), Effect::Commit);
        assert!(!state.is_loading());
    }

    #[test]
    fn finish_with_superseded_token_is_stale() {
        let mut state = State::default();
        let Effect::Started(first) = state.handle(Message::Begin) else {
            panic!("expected Started");
        };
        let Effect::Started(second) = state.handle(Message::Begin) else {
            panic!("expected Started");
        };

        assert_eq!(state.handle(Message::Finish(first)), Effect::Stale);
        assert!(state.is_loading(), "stale result must not clear loading");
        assert_eq!(state.handle(Message::Finish(second)), Effect::Commit);
    }

    #[test]
    fn duplicate_finish_is_stale() {
        let mut state = State::default();
        let Effect::Started(token) = state.handle(Message::Begin) else {
            panic!("expected Started");
        };
        state.handle(Message::Finish(token));
        assert_eq!(state.handle(Message::Finish(token)), Effect::Stale);
    }

    #[test]
    fn invalidate_makes_pending_result_stale() {
        let mut state = State::default();
        let Effect::Started(token) = state.handle(Message::Begin) else {
            panic!("expected Started");
        };
        state.handle(Message::Invalidate);

        assert!(!state.is_loading());
        assert_eq!(state.handle(Message::Finish(token)), Effect::Stale);
    }

    #[test]
    fn spinner_only_turns_while_loading() {
        let mut state = State::default();
        state.handle(Message::SpinnerTick);
        assert_eq!(state.spinner_rotation(), 0.0);

        state.handle(Message::Begin);
        state.handle(Message::SpinnerTick);
        assert!(state.spinner_rotation() > 0.0);
    }
}
