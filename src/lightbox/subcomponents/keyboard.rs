// SPDX-License-Identifier: MPL-2.0
//! Keyboard shortcuts understood by the lightbox.

use iced::keyboard::{key::Named, Key};

/// What a key press asks the lightbox to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Previous,
    Next,
    Close,
}

/// Maps a pressed key to a lightbox command.
#[must_use]
pub fn command_for(key: &Key) -> Option<Command> {
    match key {
        Key::Named(Named::ArrowLeft) => Some(Command::Previous),
        Key::Named(Named::ArrowRight) => Some(Command::Next),
        Key::Named(Named::Escape) => Some(Command::Close),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_and_escape_are_mapped() {
        assert_eq!(
            command_for(&Key::Named(Named::ArrowLeft)),
            Some(Command::Previous)
        );
        assert_eq!(command_for(&Key::Named(Named::ArrowRight)), Some(Command::Next));
        assert_eq!(command_for(&Key::Named(Named::Escape)), Some(Command::Close));
    }

    #[test]
    fn other_keys_are_ignored() {
        assert_eq!(command_for(&Key::Named(Named::ArrowUp)), None);
        assert_eq!(command_for(&Key::Named(Named::Space)), None);
        assert_eq!(command_for(&Key::Character("q".into())), None);
    }
}
