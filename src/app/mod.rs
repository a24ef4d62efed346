// SPDX-License-Identifier: MPL-2.0
//! Application root: a thumbnail gallery hosting the lightbox.
//!
//! The `App` struct wires the lightbox to the user configuration, the
//! share/download helpers, and the photos named on the command line. It
//! forwards lightbox messages and stacks the lightbox overlay over the
//! gallery while it is open.

mod message;
pub mod paths;
pub mod sources;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::actions::download::with_download_dir;
use crate::actions::share::{with_share_chain, ShareChain};
use crate::actions::Hooks;
use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::lightbox;
use crate::media::{DefaultImageLoader, ImageLoader};
use crate::photo::PhotoSequence;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1080;
pub const MIN_WINDOW_HEIGHT: u32 = 400;
pub const MIN_WINDOW_WIDTH: u32 = 480;

const USER_AGENT: &str = concat!("photo_lightbox/", env!("CARGO_PKG_VERSION"));

/// Root iced application state.
pub struct App {
    pub i18n: I18n,
    theme_mode: ThemeMode,
    lightbox: lightbox::State,
    /// Photo to open once the command-line sources are resolved.
    start_index: Option<usize>,
    /// Whether sources are still being resolved.
    resolving: bool,
    /// i18n key of a startup warning to show above the gallery.
    warning: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("photos", &self.lightbox.photos().len())
            .field("lightbox_open", &self.lightbox.is_open())
            .field("resolving", &self.resolving)
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        // Close requests go through the app so the lightbox is torn down first.
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an Fn boot closure; flags are consumed on first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads configuration, wires the hooks, and starts resolving sources.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir);
        let (config, warning) = config::load();
        let i18n = I18n::new(flags.lang, &config);

        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_else(|err| {
                tracing::warn!(error = %err, "falling back to default HTTP client");
                reqwest::Client::new()
            });

        let mut hooks = with_share_chain(Hooks::new(), ShareChain::system());
        match paths::get_download_dir(config.download.directory.clone()) {
            Some(directory) => hooks = with_download_dir(hooks, client.clone(), directory),
            None => tracing::info!("no download directory available; download disabled"),
        }

        let loader = Arc::new(DefaultImageLoader::with_client(client));
        let mut app = Self::with_parts(i18n, &config, hooks, loader);
        app.warning = warning;
        app.start_index = flags.start_index;
        app.resolving = true;

        let task = Task::perform(
            sources::resolve_in_background(flags.sources),
            Message::PhotosResolved,
        );
        (app, task)
    }

    /// Assembles the app from already-loaded parts.
    pub fn with_parts(
        i18n: I18n,
        config: &Config,
        hooks: Hooks,
        loader: Arc<dyn ImageLoader>,
    ) -> Self {
        let lightbox = lightbox::State::with_options(
            PhotoSequence::empty(),
            hooks,
            loader,
            lightbox::Options::from(config),
        );

        Self {
            i18n,
            theme_mode: config.general.theme_mode,
            lightbox,
            start_index: None,
            resolving: false,
            warning: None,
        }
    }

    pub fn lightbox(&self) -> &lightbox::State {
        &self.lightbox
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.lightbox.current_photo() {
            Some(photo) if self.lightbox.is_open() => {
                format!("{} - {app_name}", photo.display_title())
            }
            _ => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::subscription(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::LoadFuture;
    use crate::photo::PhotoDescriptor;
    use futures_util::FutureExt;

    #[derive(Debug)]
    struct PendingLoader;

    impl ImageLoader for PendingLoader {
        fn load(&self, _image_url: &str) -> LoadFuture {
            futures_util::future::pending().boxed()
        }
    }

    fn app() -> App {
        App::with_parts(
            I18n::new(Some("en-US".to_string()), &Config::default()),
            &Config::default(),
            Hooks::new(),
            Arc::new(PendingLoader),
        )
    }

    fn resolved(photos: Vec<PhotoDescriptor>) -> Message {
        Message::PhotosResolved(sources::Resolved {
            photos: PhotoSequence::new(photos),
            skipped: Vec::new(),
        })
    }

    #[test]
    fn title_is_app_name_while_browsing() {
        let app = app();
        assert_eq!(app.title(), "Photo Lightbox");
    }

    #[test]
    fn title_names_photo_while_open() {
        let mut app = app();
        let _ = app.update(resolved(vec![
            PhotoDescriptor::new("https://example.com/a.jpg").with_title("Harbour")
        ]));
        let _ = app.update(Message::ThumbnailPressed(0));

        assert_eq!(app.title(), "Harbour - Photo Lightbox");
    }

    #[test]
    fn resolved_photos_reach_the_lightbox() {
        let mut app = app();
        let _ = app.update(resolved(vec![
            PhotoDescriptor::new("https://example.com/a.jpg"),
            PhotoDescriptor::new("https://example.com/b.jpg"),
        ]));

        assert_eq!(app.lightbox().photos().len(), 2);
        assert!(!app.lightbox().is_open());
    }

    #[test]
    fn start_index_opens_lightbox_after_resolution() {
        let mut app = app();
        app.start_index = Some(1);
        let _ = app.update(resolved(vec![
            PhotoDescriptor::new("https://example.com/a.jpg"),
            PhotoDescriptor::new("https://example.com/b.jpg"),
        ]));

        assert!(app.lightbox().is_open());
        assert_eq!(app.lightbox().current_index(), 1);
    }

    #[test]
    fn lightbox_messages_are_forwarded() {
        let mut app = app();
        let _ = app.update(resolved(vec![
            PhotoDescriptor::new("https://example.com/a.jpg"),
            PhotoDescriptor::new("https://example.com/b.jpg"),
        ]));
        let _ = app.update(Message::ThumbnailPressed(0));
        let _ = app.update(Message::Lightbox(lightbox::Message::Next));
        assert_eq!(app.lightbox().current_index(), 1);

        let _ = app.update(Message::Lightbox(lightbox::Message::Close));
        assert!(!app.lightbox().is_open());
    }

    #[test]
    fn close_request_destroys_lightbox() {
        let mut app = app();
        let _ = app.update(Message::WindowCloseRequested(window::Id::unique()));
        assert!(app.lightbox().is_destroyed());
    }
}
