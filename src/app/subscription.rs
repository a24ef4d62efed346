// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::{App, Message};
use iced::{window, Subscription};

/// Lightbox input and timers, plus window close requests.
pub(super) fn subscription(app: &App) -> Subscription<Message> {
    Subscription::batch([
        app.lightbox.subscription().map(Message::Lightbox),
        window::close_requests().map(Message::WindowCloseRequested),
    ])
}
