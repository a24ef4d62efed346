// SPDX-License-Identifier: MPL-2.0
//! Directory scanner that turns a folder of images into a [`PhotoSequence`].
//!
//! Only files with a supported image extension are kept. The result is
//! sorted case-insensitively by file name and each photo is titled with
//! its file stem.

use super::{PhotoDescriptor, PhotoSequence};
use crate::error::Result;
use crate::media::extensions::is_supported_image;
use std::path::{Path, PathBuf};

/// Scans `directory` (non-recursively) for supported images.
pub fn scan_directory(directory: &Path) -> Result<PhotoSequence> {
    let mut files = Vec::new();

    for entry in std::fs::read_dir(directory)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_file() && is_supported_image(&path) {
            files.push(path);
        }
    }

    sort_alphabetically(&mut files);
    tracing::debug!(directory = %directory.display(), count = files.len(), "scanned photo directory");

    Ok(files.into_iter().map(descriptor_for_file).collect())
}

/// Builds a descriptor for a local image file.
#[must_use]
pub fn descriptor_for_file(path: PathBuf) -> PhotoDescriptor {
    let title = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned());
    PhotoDescriptor {
        image_url: path.to_string_lossy().into_owned(),
        title,
        album_url: None,
    }
}

fn sort_alphabetically(files: &mut [PathBuf]) {
    files.sort_by_key(|path| {
        path.file_name()
            .map(|name| name.to_string_lossy().to_lowercase())
            .unwrap_or_default()
    });
}
