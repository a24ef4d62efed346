// SPDX-License-Identifier: MPL-2.0
//! TOML photo manifests.
//!
//! ```toml
//! [[photos]]
//! image_url = "https://example.com/album/01.jpg"
//! title = "Harbour at dawn"
//! album_url = "https://example.com/album"
//! ```
//!
//! Relative `image_url` paths are resolved against the manifest's directory.

use super::{PhotoDescriptor, PhotoSequence};
use crate::error::{Error, Result};
use crate::media::source::ImageSource;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct Manifest {
    #[serde(default)]
    photos: Vec<PhotoDescriptor>,
}

/// Returns true if the path looks like a photo manifest.
#[must_use]
pub fn is_manifest(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"))
}

/// Parses manifest text. `base_dir` anchors relative local paths.
pub fn parse_manifest(content: &str, base_dir: Option<&Path>) -> Result<PhotoSequence> {
    let manifest: Manifest =
        toml::from_str(content).map_err(|e| Error::Manifest(e.to_string()))?;

    Ok(manifest
        .photos
        .into_iter()
        .map(|mut photo| {
            if let Some(base) = base_dir {
                if let ImageSource::File(path) = ImageSource::parse(&photo.image_url) {
                    if path.is_relative() {
                        photo.image_url = base.join(path).to_string_lossy().into_owned();
                    }
                }
            }
            photo
        })
        .collect())
}

/// Reads and parses a manifest file.
pub fn load_manifest(path: &Path) -> Result<PhotoSequence> {
    let content = fs::read_to_string(path)?;
    let photos = parse_manifest(&content, path.parent())?;
    tracing::debug!(path = %path.display(), count = photos.len(), "loaded photo manifest");
    Ok(photos)
}
