// SPDX-License-Identifier: MPL-2.0
//! Full-screen photo lightbox.
//!
//! [`State`] is a self-contained iced component: the host forwards
//! [`Message`]s to [`State::handle_message`], batches [`State::subscription`]
//! into its own, and stacks [`State::view`] over its content. The returned
//! [`Effect`] tells the host when the lightbox opened, moved, or closed.

pub mod component;
pub mod subcomponents;
mod view;

pub use component::{DisplayedImage, Effect, Message, Options, State};
pub use subcomponents::keyboard::Command;
pub use subcomponents::loading::LoadToken;
pub use subcomponents::navigation::Direction;
pub use subcomponents::swipe::SwipeThreshold;
pub use view::ViewEnv;
