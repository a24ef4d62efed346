// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use super::sources::Resolved;
use crate::lightbox;
use iced::window;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Lightbox(lightbox::Message),
    /// A gallery tile was clicked.
    ThumbnailPressed(usize),
    /// Command-line sources finished resolving.
    PhotosResolved(Resolved),
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(window::Id),
}

/// Runtime flags passed in from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Image files, directories, URLs, or `.toml` manifests to show.
    pub sources: Vec<String>,
    /// Open the lightbox on this photo (zero-based) once sources are loaded.
    pub start_index: Option<usize>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `PHOTO_LIGHTBOX_CONFIG_DIR`.
    pub config_dir: Option<String>,
}
