// SPDX-License-Identifier: MPL-2.0
//! Turns command-line sources into one photo sequence.
//!
//! Each source is one of:
//! - an `http(s)://` or `file://` URL, used as-is
//! - a `.toml` manifest listing photos
//! - a directory, scanned (non-recursively) for images
//! - a single image file
//!
//! Sources that cannot be used are reported and skipped; the rest keep
//! their command-line order.

use crate::error::{Error, Result};
use crate::media::extensions::is_supported_image;
use crate::media::ImageSource;
use crate::photo::{manifest, scanner, PhotoDescriptor, PhotoSequence};
use std::path::Path;

/// Photos gathered from all sources, plus the sources that were skipped.
#[derive(Debug, Clone, Default)]
pub struct Resolved {
    pub photos: PhotoSequence,
    pub skipped: Vec<(String, Error)>,
}

/// Resolves every source in order. Blocks on file system access.
#[must_use]
pub fn resolve_all(sources: &[String]) -> Resolved {
    let mut photos = Vec::new();
    let mut skipped = Vec::new();

    for source in sources {
        match resolve_one(source) {
            Ok(found) => {
                tracing::debug!(source = %source, photos = found.len(), "resolved source");
                photos.extend(found);
            }
            Err(err) => {
                tracing::warn!(source = %source, error = %err, "skipping source");
                skipped.push((source.clone(), err));
            }
        }
    }

    Resolved {
        photos: PhotoSequence::new(photos),
        skipped,
    }
}

/// Runs [`resolve_all`] off the UI thread.
pub async fn resolve_in_background(sources: Vec<String>) -> Resolved {
    match tokio::task::spawn_blocking(move || resolve_all(&sources)).await {
        Ok(resolved) => resolved,
        Err(err) => {
            tracing::error!(error = %err, "source resolution task failed");
            Resolved::default()
        }
    }
}

fn resolve_one(source: &str) -> Result<Vec<PhotoDescriptor>> {
    let trimmed = source.trim();
    if trimmed.is_empty() {
        return Err(Error::Io("empty source".to_string()));
    }

    match ImageSource::parse(trimmed) {
        ImageSource::Remote(_) => Ok(vec![PhotoDescriptor::new(trimmed)]),
        ImageSource::File(path) => resolve_path(&path, trimmed),
        ImageSource::Unsupported(scheme) => {
            Err(Error::Io(format!("unsupported URL scheme: {scheme}")))
        }
        ImageSource::Missing => Err(Error::Io("empty source".to_string())),
    }
}

fn resolve_path(path: &Path, original: &str) -> Result<Vec<PhotoDescriptor>> {
    if path.is_dir() {
        return Ok(scanner::scan_directory(path)?.to_vec());
    }
    if !path.exists() {
        return Err(Error::Io(format!("no such file or directory: {}", path.display())));
    }
    if manifest::is_manifest(path) {
        return Ok(manifest::load_manifest(path)?.to_vec());
    }
    if is_supported_image(path) {
        // Keep file:// URLs as given; plain paths get a title from the stem.
        return Ok(vec![if original.contains("://") {
            PhotoDescriptor::new(original)
        } else {
            scanner::descriptor_for_file(path.to_path_buf())
        }]);
    }

    Err(Error::Io(format!("not an image or manifest: {}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn mixes_urls_directories_and_files_in_order() {
        let dir = tempdir().expect("temp dir");
        let album = dir.path().join("album");
        fs::create_dir(&album).expect("mkdir");
        fs::write(album.join("b.png"), b"x").expect("write");
        fs::write(album.join("a.jpg"), b"x").expect("write");
        let single = dir.path().join("single.webp");
        fs::write(&single, b"x").expect("write");

        let resolved = resolve_all(&[
            "https://example.com/first.jpg".to_string(),
            album.to_string_lossy().into_owned(),
            single.to_string_lossy().into_owned(),
        ]);

        let urls: Vec<&str> = resolved
            .photos
            .iter()
            .map(|photo| photo.image_url.as_str())
            .collect();
        assert_eq!(urls.len(), 4);
        assert_eq!(urls[0], "https://example.com/first.jpg");
        assert!(urls[1].ends_with("a.jpg"));
        assert!(urls[2].ends_with("b.png"));
        assert!(urls[3].ends_with("single.webp"));
        assert!(resolved.skipped.is_empty());
    }

    #[test]
    fn manifest_sources_are_expanded() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("trip.toml");
        fs::write(
            &path,
            r#"
[[photos]]
image_url = "https://example.com/1.jpg"
title = "Harbour"
"#,
        )
        .expect("write");

        let resolved = resolve_all(&[path.to_string_lossy().into_owned()]);
        assert_eq!(resolved.photos.len(), 1);
        assert_eq!(resolved.photos[0].title.as_deref(), Some("Harbour"));
    }

    #[test]
    fn unusable_sources_are_skipped() {
        let dir = tempdir().expect("temp dir");
        let notes = dir.path().join("notes.txt");
        fs::write(&notes, b"x").expect("write");

        let resolved = resolve_all(&[
            "ftp://example.com/a.jpg".to_string(),
            notes.to_string_lossy().into_owned(),
            dir.path().join("missing.png").to_string_lossy().into_owned(),
            "   ".to_string(),
        ]);

        assert!(resolved.photos.is_empty());
        assert_eq!(resolved.skipped.len(), 4);
    }

    #[tokio::test]
    async fn background_resolution_matches_blocking() {
        let resolved = resolve_in_background(vec!["https://example.com/x.png".to_string()]).await;
        assert_eq!(resolved.photos.len(), 1);
    }
}
