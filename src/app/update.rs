// SPDX-License-Identifier: MPL-2.0
//! Message handling for the application root.

use super::{App, Message};
use crate::lightbox;
use iced::{window, Task};

pub(super) fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Lightbox(lightbox_message) => {
            let (effect, task) = app.lightbox.handle_message(lightbox_message);
            match effect {
                lightbox::Effect::Opened { index } => tracing::debug!(index, "lightbox opened"),
                lightbox::Effect::Navigated { index } => tracing::debug!(index, "lightbox moved"),
                lightbox::Effect::Closed => tracing::debug!("lightbox closed"),
                lightbox::Effect::None => {}
            }
            task.map(Message::Lightbox)
        }
        Message::ThumbnailPressed(index) => app.lightbox.open(index).map(Message::Lightbox),
        Message::PhotosResolved(resolved) => {
            app.resolving = false;
            tracing::info!(
                photos = resolved.photos.len(),
                skipped = resolved.skipped.len(),
                "photos ready"
            );

            let reload = app.lightbox.set_photos(resolved.photos);
            let open = match app.start_index.take() {
                Some(index) => app.lightbox.open(index),
                None => Task::none(),
            };
            Task::batch([reload, open]).map(Message::Lightbox)
        }
        Message::WindowCloseRequested(id) => {
            app.lightbox.destroy();
            window::close(id)
        }
    }
}
