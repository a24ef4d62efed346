// SPDX-License-Identifier: MPL-2.0
//! Share fallback chain.
//!
//! Strategies are tried in order. A strategy is skipped when it cannot
//! handle the photo (no album page, not a remote image, file missing).
//! The first one that succeeds wins; failures fall through to the next.
//!
//! Default order:
//! 1. [`OpenAlbumPage`] - the album page the photo belongs to
//! 2. [`OpenImageUrl`] - the remote image itself
//! 3. [`RevealLocalFile`] - the folder holding a local photo

use super::Hooks;
use crate::media::ImageSource;
use crate::photo::PhotoDescriptor;
use std::io;
use std::sync::Arc;
use thiserror::Error;

/// Hands a URL or path to the desktop.
pub trait Opener: Send + Sync {
    fn open(&self, target: &str) -> io::Result<()>;
}

/// Opens targets with the platform's default handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemOpener;

impl Opener for SystemOpener {
    fn open(&self, target: &str) -> io::Result<()> {
        open::that_detached(target)
    }
}

/// One way of sharing a photo.
pub trait ShareStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    /// Whether this strategy can handle `photo` at all.
    fn is_available(&self, photo: &PhotoDescriptor) -> bool;

    fn share(&self, photo: &PhotoDescriptor) -> Result<(), ShareError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShareError {
    #[error("no share method applies to this photo")]
    Unavailable,
    #[error("{strategy} failed: {message}")]
    Failed {
        strategy: &'static str,
        message: String,
    },
}

/// Opens `album_url` when the photo has one.
pub struct OpenAlbumPage {
    opener: Arc<dyn Opener>,
}

impl OpenAlbumPage {
    pub fn new(opener: Arc<dyn Opener>) -> Self {
        Self { opener }
    }
}

impl ShareStrategy for OpenAlbumPage {
    fn name(&self) -> &'static str {
        "album-page"
    }

    fn is_available(&self, photo: &PhotoDescriptor) -> bool {
        photo
            .album_url
            .as_deref()
            .is_some_and(|url| matches!(ImageSource::parse(url), ImageSource::Remote(_)))
    }

    fn share(&self, photo: &PhotoDescriptor) -> Result<(), ShareError> {
        let url = photo.album_url.as_deref().ok_or(ShareError::Unavailable)?;
        open_with(self.opener.as_ref(), self.name(), url)
    }
}

/// Opens a remote `image_url` in the browser.
pub struct OpenImageUrl {
    opener: Arc<dyn Opener>,
}

impl OpenImageUrl {
    pub fn new(opener: Arc<dyn Opener>) -> Self {
        Self { opener }
    }
}

impl ShareStrategy for OpenImageUrl {
    fn name(&self) -> &'static str {
        "image-url"
    }

    fn is_available(&self, photo: &PhotoDescriptor) -> bool {
        matches!(ImageSource::parse(&photo.image_url), ImageSource::Remote(_))
    }

    fn share(&self, photo: &PhotoDescriptor) -> Result<(), ShareError> {
        open_with(self.opener.as_ref(), self.name(), photo.image_url.trim())
    }
}

/// Opens the directory containing a local photo.
pub struct RevealLocalFile {
    opener: Arc<dyn Opener>,
}

impl RevealLocalFile {
    pub fn new(opener: Arc<dyn Opener>) -> Self {
        Self { opener }
    }
}

impl ShareStrategy for RevealLocalFile {
    fn name(&self) -> &'static str {
        "reveal-file"
    }

    fn is_available(&self, photo: &PhotoDescriptor) -> bool {
        matches!(ImageSource::parse(&photo.image_url), ImageSource::File(path) if path.is_file())
    }

    fn share(&self, photo: &PhotoDescriptor) -> Result<(), ShareError> {
        let ImageSource::File(path) = ImageSource::parse(&photo.image_url) else {
            return Err(ShareError::Unavailable);
        };
        let folder = path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or(path.as_path());
        open_with(self.opener.as_ref(), self.name(), &folder.to_string_lossy())
    }
}

fn open_with(opener: &dyn Opener, strategy: &'static str, target: &str) -> Result<(), ShareError> {
    opener.open(target).map_err(|err| ShareError::Failed {
        strategy,
        message: err.to_string(),
    })
}

/// Ordered list of share strategies.
pub struct ShareChain {
    strategies: Vec<Box<dyn ShareStrategy>>,
}

impl ShareChain {
    #[must_use]
    pub fn new(strategies: Vec<Box<dyn ShareStrategy>>) -> Self {
        Self { strategies }
    }

    /// The default chain backed by `opener`.
    #[must_use]
    pub fn with_opener(opener: Arc<dyn Opener>) -> Self {
        Self::new(vec![
            Box::new(OpenAlbumPage::new(Arc::clone(&opener))),
            Box::new(OpenImageUrl::new(Arc::clone(&opener))),
            Box::new(RevealLocalFile::new(opener)),
        ])
    }

    /// The default chain using the desktop's opener.
    #[must_use]
    pub fn system() -> Self {
        Self::with_opener(Arc::new(SystemOpener))
    }

    /// Tries each available strategy in order and returns the name of the
    /// first one that succeeded.
    ///
    /// # Errors
    ///
    /// [`ShareError::Unavailable`] if no strategy applies, otherwise the
    /// error of the last strategy that failed.
    pub fn share(&self, photo: &PhotoDescriptor) -> Result<&'static str, ShareError> {
        let mut last_error = ShareError::Unavailable;

        for strategy in self.strategies.iter().filter(|s| s.is_available(photo)) {
            match strategy.share(photo) {
                Ok(()) => return Ok(strategy.name()),
                Err(err) => {
                    tracing::debug!(strategy = strategy.name(), error = %err, "share strategy failed");
                    last_error = err;
                }
            }
        }

        Err(last_error)
    }
}

/// Registers `chain` as the share hook.
#[must_use]
pub fn with_share_chain(hooks: Hooks, chain: ShareChain) -> Hooks {
    let chain = Arc::new(chain);
    hooks.with_share(move |photo: PhotoDescriptor| {
        let chain = Arc::clone(&chain);
        async move {
            let title = photo.display_title().to_string();
            match tokio::task::spawn_blocking(move || chain.share(&photo)).await {
                Ok(Ok(strategy)) => tracing::info!(photo = %title, strategy, "shared photo"),
                Ok(Err(err)) => tracing::warn!(photo = %title, error = %err, "could not share photo"),
                Err(err) => tracing::error!(error = %err, "share task panicked"),
            }
        }
    })
}
