// SPDX-License-Identifier: MPL-2.0
//! Image loading port.
//!
//! The lightbox does not know how bytes are fetched or decoded; it awaits an
//! [`ImageLoader`] future and tags the result with its load token.
//! [`DefaultImageLoader`] reads local files and http(s) URLs and decodes on a
//! blocking worker so the UI thread is never stalled.

use super::image::{decode_image, ImageData};
use super::source::ImageSource;
use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use std::fmt;
use thiserror::Error;

/// Why an image could not be displayed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The descriptor has no image URL.
    #[error("photo has no image URL")]
    MissingUrl,

    /// The URL scheme cannot be fetched.
    #[error("unsupported URL scheme: {0}")]
    UnsupportedScheme(String),

    /// The local file does not exist.
    #[error("file not found: {0}")]
    NotFound(String),

    /// Reading a local file failed.
    #[error("I/O error: {0}")]
    Io(String),

    /// The request never produced a response body.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("server responded with HTTP {0}")]
    HttpStatus(u16),

    /// The bytes are not a decodable image.
    #[error("decoding failed: {0}")]
    Decode(String),
}

impl LoadError {
    /// Returns the i18n message key for this error type.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            LoadError::MissingUrl => "error-load-missing-url",
            LoadError::UnsupportedScheme(_) => "error-load-unsupported-scheme",
            LoadError::NotFound(_) => "error-load-not-found",
            LoadError::Io(_) => "error-load-io",
            LoadError::Network(_) | LoadError::HttpStatus(_) => "error-load-network",
            LoadError::Decode(_) => "error-load-decode",
        }
    }
}

/// Future returned by [`ImageLoader::load`].
pub type LoadFuture = BoxFuture<'static, Result<ImageData, LoadError>>;

/// Loads and decodes the image behind a photo's `image_url`.
pub trait ImageLoader: Send + Sync + fmt::Debug {
    fn load(&self, image_url: &str) -> LoadFuture;
}

/// Loader for local paths, `file://` and http(s) URLs.
#[derive(Debug, Clone, Default)]
pub struct DefaultImageLoader {
    client: reqwest::Client,
}

impl DefaultImageLoader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses an existing HTTP client (shared connection pool).
    #[must_use]
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl ImageLoader for DefaultImageLoader {
    fn load(&self, image_url: &str) -> LoadFuture {
        let source = ImageSource::parse(image_url);
        let client = self.client.clone();

        async move {
            let svg_hint = source.is_svg();
            let bytes = source.fetch(&client).await?;
            tokio::task::spawn_blocking(move || decode_image(&bytes, svg_hint))
                .await
                .map_err(|err| LoadError::Decode(err.to_string()))?
        }
        .boxed()
    }
}
