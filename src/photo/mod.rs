// SPDX-License-Identifier: MPL-2.0
//! Photo descriptors and the ordered sequence the lightbox browses.
//!
//! A [`PhotoSequence`] is shared, not copied: cloning it bumps a reference
//! count, and the lightbox only ever replaces it wholesale.

pub mod manifest;
pub mod scanner;

use serde::{Deserialize, Serialize};
use std::ops::Deref;
use std::sync::Arc;

/// A single displayable photo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoDescriptor {
    /// Where the image is fetched from: http(s) URL, `file://` URL or path.
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Page of the album this photo belongs to, used when sharing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub album_url: Option<String>,
}

impl PhotoDescriptor {
    #[must_use]
    pub fn new(image_url: impl Into<String>) -> Self {
        Self {
            image_url: image_url.into(),
            title: None,
            album_url: None,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_album_url(mut self, album_url: impl Into<String>) -> Self {
        self.album_url = Some(album_url.into());
        self
    }

    /// Title to show in captions and tiles, falling back to the last URL segment.
    #[must_use]
    pub fn display_title(&self) -> &str {
        match self.title.as_deref() {
            Some(title) if !title.trim().is_empty() => title,
            _ => self
                .image_url
                .trim_end_matches('/')
                .rsplit(['/', '\\'])
                .next()
                .unwrap_or(&self.image_url),
        }
    }
}

/// Ordered, fixed-size list of photos.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PhotoSequence(Arc<[PhotoDescriptor]>);

impl PhotoSequence {
    #[must_use]
    pub fn new(photos: Vec<PhotoDescriptor>) -> Self {
        Self(photos.into())
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Index of the last photo, or `None` when empty.
    #[must_use]
    pub fn last_index(&self) -> Option<usize> {
        self.0.len().checked_sub(1)
    }

    /// Clamps `index` into `[0, len - 1]`. Returns `None` when empty.
    #[must_use]
    pub fn clamp_index(&self, index: usize) -> Option<usize> {
        self.last_index().map(|last| index.min(last))
    }

    /// Whether two sequences share the same backing storage.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for PhotoSequence {
    type Target = [PhotoDescriptor];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<PhotoDescriptor>> for PhotoSequence {
    fn from(photos: Vec<PhotoDescriptor>) -> Self {
        Self::new(photos)
    }
}

impl FromIterator<PhotoDescriptor> for PhotoSequence {
    fn from_iter<I: IntoIterator<Item = PhotoDescriptor>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
