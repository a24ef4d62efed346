// SPDX-License-Identifier: MPL-2.0
//! Lightbox component encapsulating state and update logic.
//!
//! The lightbox owns the photo sequence, the current index, and the load
//! cycle for the photo on screen. Loads run as [`Task`]s and come back as
//! [`Message::ImageLoaded`]; each carries the [`LoadToken`] it was started
//! with and only the result of the most recent load is ever displayed.

use super::subcomponents::{
    keyboard::{self, Command},
    loading::{self, LoadToken},
    navigation::{self, Direction},
    swipe::{self, SwipeThreshold},
};
use crate::actions::{ActionHook, Hooks};
use crate::config::{Config, SPINNER_TICK_MS};
use crate::media::{ImageData, ImageLoader, LoadError};
use crate::photo::{PhotoDescriptor, PhotoSequence};
use iced::{event, time, touch, Subscription, Task};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Messages handled by the lightbox.
#[derive(Debug, Clone)]
pub enum Message {
    Open(usize),
    Close,
    Previous,
    Next,
    /// Press on the area around the photo.
    BackdropPressed,
    Share,
    Download,
    Key(Command),
    Touch(swipe::Message),
    ImageLoaded {
        token: LoadToken,
        result: Result<ImageData, LoadError>,
    },
    /// A share or download hook ran to completion.
    HookFinished,
    SpinnerTick,
}

/// What the host should know after a message was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Opened { index: usize },
    Navigated { index: usize },
    Closed,
}

/// Behavior knobs read from the user configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Options {
    pub swipe_threshold: SwipeThreshold,
    pub show_counter: bool,
    pub show_captions: bool,
    pub close_on_backdrop: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for Options {
    fn from(config: &Config) -> Self {
        Self {
            swipe_threshold: config.swipe_threshold(),
            show_counter: config.show_counter(),
            show_captions: config.show_captions(),
            close_on_backdrop: config.close_on_backdrop(),
        }
    }
}

/// A decoded photo together with the index it was loaded for.
#[derive(Debug, Clone)]
pub struct DisplayedImage {
    pub index: usize,
    pub image: ImageData,
}

/// Complete lightbox state.
pub struct State {
    photos: PhotoSequence,
    hooks: Hooks,
    loader: Arc<dyn ImageLoader>,
    options: Options,
    is_open: bool,
    destroyed: bool,
    navigation: navigation::State,
    loading: loading::State,
    swipe: swipe::State,
    displayed: Option<DisplayedImage>,
    load_error: Option<LoadError>,
    /// Backdrop was released while a touch was being tracked; the touch
    /// decides whether it was a tap (close) or a swipe (navigate).
    backdrop_armed: bool,
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("photos", &self.photos.len())
            .field("is_open", &self.is_open)
            .field("index", &self.navigation.index())
            .field("token", &self.loading.token())
            .field("is_loading", &self.loading.is_loading())
            .field("hooks", &self.hooks)
            .field("destroyed", &self.destroyed)
            .finish()
    }
}

impl State {
    /// Creates a closed lightbox over `photos`.
    pub fn new(photos: PhotoSequence, hooks: Hooks, loader: Arc<dyn ImageLoader>) -> Self {
        Self::with_options(photos, hooks, loader, Options::default())
    }

    pub fn with_options(
        photos: PhotoSequence,
        hooks: Hooks,
        loader: Arc<dyn ImageLoader>,
        options: Options,
    ) -> Self {
        Self {
            photos,
            hooks,
            loader,
            options,
            is_open: false,
            destroyed: false,
            navigation: navigation::State::default(),
            loading: loading::State::default(),
            swipe: swipe::State::new(options.swipe_threshold),
            displayed: None,
            load_error: None,
            backdrop_armed: false,
        }
    }

    /// Opens the lightbox on `index` and starts loading that photo.
    ///
    /// Out-of-range indices are clamped. Opening an empty sequence does
    /// nothing. Opening while already open moves to `index`.
    pub fn open(&mut self, index: usize) -> Task<Message> {
        self.open_at(index).1
    }

    /// Hides the lightbox. Pending loads keep running but are no longer
    /// awaited for display until the next open.
    pub fn close(&mut self) {
        self.close_inner();
    }

    /// Moves to the previous photo if there is one.
    pub fn prev(&mut self) -> Task<Message> {
        self.step(Direction::Previous).1
    }

    /// Moves to the next photo if there is one.
    pub fn next(&mut self) -> Task<Message> {
        self.step(Direction::Next).1
    }

    /// Replaces the photo sequence.
    ///
    /// The current index is clamped to the new sequence. While open, the
    /// photo is reloaded if clamping moved the index or the photo at the
    /// current index changed; an empty
    /// sequence cancels any pending load and clears the display but leaves
    /// the lightbox open.
    pub fn set_photos(&mut self, photos: PhotoSequence) -> Task<Message> {
        if self.destroyed {
            return Task::none();
        }

        let previous_index = self.navigation.index();
        let previous_url = self.current_photo().map(|photo| photo.image_url.clone());
        self.photos = photos;
        self.navigation.handle(navigation::Message::Resize {
            len: self.photos.len(),
        });

        if self.photos.is_empty() {
            self.loading.handle(loading::Message::Invalidate);
            self.displayed = None;
            self.load_error = None;
            return Task::none();
        }

        let moved = previous_index != self.navigation.index();
        let current_url = self.current_photo().map(|photo| photo.image_url.as_str());
        if self.is_open && (moved || previous_url.as_deref() != current_url) {
            self.begin_load()
        } else {
            Task::none()
        }
    }

    /// Tears the lightbox down.
    ///
    /// The subscription ends, pending loads are invalidated, the hooks and
    /// decoded image are released, and every later call is a no-op.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        tracing::debug!(photos = self.photos.len(), "destroying lightbox");

        self.loading.handle(loading::Message::Invalidate);
        self.swipe.reset();
        self.is_open = false;
        self.destroyed = true;
        self.displayed = None;
        self.load_error = None;
        self.backdrop_armed = false;
        self.hooks = Hooks::default();
        self.photos = PhotoSequence::empty();
    }

    pub fn handle_message(&mut self, message: Message) -> (Effect, Task<Message>) {
        if self.destroyed {
            return (Effect::None, Task::none());
        }

        match message {
            Message::Open(index) => self.open_at(index),
            Message::Close => (self.close_inner(), Task::none()),
            Message::Previous => self.step(Direction::Previous),
            Message::Next => self.step(Direction::Next),
            Message::BackdropPressed => {
                if !self.is_open || !self.options.close_on_backdrop {
                    return (Effect::None, Task::none());
                }
                if self.swipe.is_tracking() {
                    self.backdrop_armed = true;
                    (Effect::None, Task::none())
                } else {
                    (self.close_inner(), Task::none())
                }
            }
            Message::Share => (Effect::None, self.invoke(self.hooks.on_share.clone(), "share")),
            Message::Download => (
                Effect::None,
                self.invoke(self.hooks.on_download.clone(), "download"),
            ),
            Message::Key(command) => {
                if !self.is_open {
                    return (Effect::None, Task::none());
                }
                match command {
                    Command::Previous => self.step(Direction::Previous),
                    Command::Next => self.step(Direction::Next),
                    Command::Close => (self.close_inner(), Task::none()),
                }
            }
            Message::Touch(touch_message) => self.handle_touch(touch_message),
            Message::ImageLoaded { token, result } => {
                self.finish_load(token, result);
                (Effect::None, Task::none())
            }
            Message::HookFinished => (Effect::None, Task::none()),
            Message::SpinnerTick => {
                self.loading.handle(loading::Message::SpinnerTick);
                (Effect::None, Task::none())
            }
        }
    }

    /// Keyboard and touch input while alive, plus spinner ticks while a
    /// load is in flight.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.destroyed {
            return Subscription::none();
        }

        let input = event::listen_with(|event, status, _window| match event {
            event::Event::Keyboard(iced::keyboard::Event::KeyPressed { key, .. })
                if matches!(status, event::Status::Ignored) =>
            {
                keyboard::command_for(&key).map(Message::Key)
            }
            event::Event::Touch(touch::Event::FingerPressed { id, position }) => {
                Some(Message::Touch(swipe::Message::Pressed {
                    finger: id,
                    position,
                }))
            }
            event::Event::Touch(touch::Event::FingerLifted { id, position }) => {
                Some(Message::Touch(swipe::Message::Lifted {
                    finger: id,
                    position,
                }))
            }
            event::Event::Touch(touch::Event::FingerLost { id, .. }) => {
                Some(Message::Touch(swipe::Message::Lost { finger: id }))
            }
            _ => None,
        });

        let spinner = if self.is_open && self.loading.is_loading() {
            time::every(Duration::from_millis(SPINNER_TICK_MS)).map(|_| Message::SpinnerTick)
        } else {
            Subscription::none()
        };

        Subscription::batch([input, spinner])
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    #[must_use]
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.navigation.index()
    }

    #[must_use]
    pub fn photos(&self) -> &PhotoSequence {
        &self.photos
    }

    #[must_use]
    pub fn current_photo(&self) -> Option<&PhotoDescriptor> {
        self.photos.get(self.navigation.index())
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.navigation.has_previous()
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.navigation.has_next(self.photos.len())
    }

    /// Token of the most recently started load.
    #[must_use]
    pub fn load_token(&self) -> LoadToken {
        self.loading.token()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading.is_loading()
    }

    #[must_use]
    pub fn spinner_rotation(&self) -> f32 {
        self.loading.spinner_rotation()
    }

    #[must_use]
    pub fn displayed(&self) -> Option<&DisplayedImage> {
        self.displayed.as_ref()
    }

    #[must_use]
    pub fn load_error(&self) -> Option<&LoadError> {
        self.load_error.as_ref()
    }

    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn set_options(&mut self, options: Options) {
        self.swipe.set_threshold(options.swipe_threshold);
        self.options = options;
    }

    #[must_use]
    pub fn can_share(&self) -> bool {
        self.hooks.on_share.is_some()
    }

    #[must_use]
    pub fn can_download(&self) -> bool {
        self.hooks.on_download.is_some()
    }

    fn open_at(&mut self, index: usize) -> (Effect, Task<Message>) {
        if self.destroyed {
            return (Effect::None, Task::none());
        }
        let len = self.photos.len();
        if len == 0 {
            tracing::debug!(index, "ignoring open on an empty photo sequence");
            return (Effect::None, Task::none());
        }

        self.navigation
            .handle(navigation::Message::JumpTo { index, len });
        self.is_open = true;
        self.swipe.reset();
        self.backdrop_armed = false;

        let index = self.navigation.index();
        tracing::debug!(index, len, "opening lightbox");
        (Effect::Opened { index }, self.begin_load())
    }

    fn close_inner(&mut self) -> Effect {
        if !self.is_open {
            return Effect::None;
        }
        self.is_open = false;
        self.swipe.reset();
        self.backdrop_armed = false;
        tracing::debug!(index = self.navigation.index(), "closing lightbox");
        Effect::Closed
    }

    fn step(&mut self, direction: Direction) -> (Effect, Task<Message>) {
        if self.destroyed || !self.is_open {
            return (Effect::None, Task::none());
        }

        match self.navigation.handle(navigation::Message::Step {
            direction,
            len: self.photos.len(),
        }) {
            navigation::Effect::Moved(index) => (Effect::Navigated { index }, self.begin_load()),
            navigation::Effect::None => (Effect::None, Task::none()),
        }
    }

    fn handle_touch(&mut self, message: swipe::Message) -> (Effect, Task<Message>) {
        if !self.is_open {
            self.swipe.reset();
            self.backdrop_armed = false;
            return (Effect::None, Task::none());
        }

        let lost = matches!(message, swipe::Message::Lost { .. });
        let was_tracking = self.swipe.is_tracking();
        let effect = self.swipe.handle(message);
        let gesture_ended = was_tracking && !self.swipe.is_tracking();

        match effect {
            swipe::Effect::Navigate(direction) => {
                self.backdrop_armed = false;
                self.step(direction)
            }
            swipe::Effect::None if gesture_ended => {
                let tapped_backdrop = std::mem::take(&mut self.backdrop_armed) && !lost;
                if tapped_backdrop {
                    (self.close_inner(), Task::none())
                } else {
                    (Effect::None, Task::none())
                }
            }
            swipe::Effect::None => (Effect::None, Task::none()),
        }
    }

    /// Starts a new load cycle for the photo at the current index.
    fn begin_load(&mut self) -> Task<Message> {
        let index = self.navigation.index();
        let Some(url) = self.photos.get(index).map(|photo| photo.image_url.clone()) else {
            return Task::none();
        };

        let loading::Effect::Started(token) = self.loading.handle(loading::Message::Begin) else {
            return Task::none();
        };
        self.displayed = None;
        self.load_error = None;

        tracing::debug!(token = token.value(), index, url = %url, "loading photo");
        Task::perform(self.loader.load(&url), move |result| Message::ImageLoaded {
            token,
            result,
        })
    }

    fn finish_load(&mut self, token: LoadToken, result: Result<ImageData, LoadError>) {
        match self.loading.handle(loading::Message::Finish(token)) {
            loading::Effect::Commit => {
                let index = self.navigation.index();
                match result {
                    Ok(image) => {
                        tracing::debug!(
                            token = token.value(),
                            index,
                            width = image.width,
                            height = image.height,
                            "photo loaded"
                        );
                        self.displayed = Some(DisplayedImage { index, image });
                    }
                    Err(err) => {
                        tracing::warn!(token = token.value(), index, error = %err, "photo failed to load");
                        self.load_error = Some(err);
                    }
                }
            }
            _ => {
                tracing::trace!(
                    token = token.value(),
                    current = self.loading.token().value(),
                    "discarding stale load result"
                );
            }
        }
    }

    fn invoke(&self, hook: Option<ActionHook>, action: &'static str) -> Task<Message> {
        if !self.is_open {
            return Task::none();
        }
        let (Some(hook), Some(photo)) = (hook, self.current_photo().cloned()) else {
            tracing::debug!(action, "no hook registered");
            return Task::none();
        };

        tracing::debug!(action, photo = %photo.display_title(), "invoking hook");
        Task::perform(hook(photo), |()| Message::HookFinished)
    }
}
