// SPDX-License-Identifier: MPL-2.0
//! Download helper: fetches a photo's bytes and saves them to disk.

use super::Hooks;
use crate::error::{Error, Result};
use crate::media::ImageSource;
use crate::photo::PhotoDescriptor;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs::{File, OpenOptions};
use tokio::io::AsyncWriteExt;

/// File name used when the URL has no usable last segment.
const FALLBACK_FILE_NAME: &str = "photo";

/// Numbered names tried before giving up on a crowded directory.
const MAX_NAME_ATTEMPTS: u32 = 10_000;

/// Fetches `photo` and writes it into `directory` without overwriting
/// existing files. Returns the path written.
///
/// # Errors
///
/// Returns [`crate::error::Error::Load`] if the image cannot be fetched and
/// [`crate::error::Error::Io`] if it cannot be written.
pub async fn download_photo(
    photo: &PhotoDescriptor,
    client: &reqwest::Client,
    directory: &Path,
) -> Result<PathBuf> {
    let source = ImageSource::parse(&photo.image_url);
    let bytes = source.fetch(client).await?;

    tokio::fs::create_dir_all(directory).await?;
    let (mut file, target) = create_unique(directory, &file_name_for(&source)).await?;
    file.write_all(&bytes).await?;
    file.flush().await?;

    Ok(target)
}

/// Derives a safe file name from the image location.
#[must_use]
pub fn file_name_for(source: &ImageSource) -> String {
    let raw = match source {
        ImageSource::Remote(url) => {
            let without_query = url.split(['?', '#']).next().unwrap_or(url);
            let after_scheme = without_query
                .split_once("://")
                .map_or(without_query, |(_, rest)| rest);
            // Only the path counts; a bare host has no file name.
            after_scheme
                .split_once('/')
                .map(|(_, path)| path.trim_end_matches('/'))
                .and_then(|path| path.rsplit('/').next())
                .unwrap_or_default()
                .to_string()
        }
        ImageSource::File(path) => path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default(),
        ImageSource::Unsupported(_) | ImageSource::Missing => String::new(),
    };

    let sanitized: String = raw
        .chars()
        .map(|c| {
            if c.is_control() || matches!(c, '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|') {
                '_'
            } else {
                c
            }
        })
        .collect();
    let sanitized = sanitized.trim_matches(|c: char| c == '.' || c.is_whitespace());

    if sanitized.is_empty() {
        FALLBACK_FILE_NAME.to_string()
    } else {
        sanitized.to_string()
    }
}

/// Returns the `attempt`-th candidate for `name`: `directory/name` first,
/// then `directory/stem (n).ext`.
#[must_use]
pub fn candidate_path(directory: &Path, name: &str, attempt: u32) -> PathBuf {
    if attempt == 0 {
        return directory.join(name);
    }

    let as_path = Path::new(name);
    let stem = as_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| name.to_string());
    let extension = as_path
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default();

    directory.join(format!("{stem} ({attempt}){extension}"))
}

/// Creates the first candidate file that does not exist yet.
///
/// The file is opened with `create_new`, so two downloads racing for the
/// same name never end up with the same file.
async fn create_unique(directory: &Path, name: &str) -> Result<(File, PathBuf)> {
    for attempt in 0..MAX_NAME_ATTEMPTS {
        let path = candidate_path(directory, name, attempt);
        match OpenOptions::new().write(true).create_new(true).open(&path).await {
            Ok(file) => return Ok((file, path)),
            Err(err) if err.kind() == ErrorKind::AlreadyExists => continue,
            Err(err) => return Err(err.into()),
        }
    }

    Err(Error::Io(format!(
        "no free file name for {name} in {}",
        directory.display()
    )))
}

/// Registers the download helper as the download hook, saving into `directory`.
#[must_use]
pub fn with_download_dir(hooks: Hooks, client: reqwest::Client, directory: PathBuf) -> Hooks {
    hooks.with_download(move |photo: PhotoDescriptor| {
        let client = client.clone();
        let directory = directory.clone();
        async move {
            match download_photo(&photo, &client, &directory).await {
                Ok(path) => tracing::info!(path = %path.display(), "downloaded photo"),
                Err(err) => tracing::warn!(
                    photo = %photo.display_title(),
                    error = %err,
                    "could not download photo"
                ),
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::LoadError;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn file_name_from_remote_url_drops_query() {
        let source = ImageSource::parse("https://cdn.example.com/a/b/sunset.jpg?w=800#top");
        assert_eq!(file_name_for(&source), "sunset.jpg");
    }

    #[test]
    fn file_name_falls_back_for_bare_hosts() {
        assert_eq!(file_name_for(&ImageSource::parse("https://example.com/")), "photo");
        assert_eq!(file_name_for(&ImageSource::Missing), "photo");
    }

    #[test]
    fn file_name_is_sanitized() {
        let source = ImageSource::Remote("https://x.org/we|rd:name?.png".into());
        assert_eq!(file_name_for(&source), "we_rd_name");
    }

    #[test]
    fn candidates_number_the_stem() {
        let dir = Path::new("/downloads");
        assert_eq!(candidate_path(dir, "a.jpg", 0), dir.join("a.jpg"));
        assert_eq!(candidate_path(dir, "a.jpg", 2), dir.join("a (2).jpg"));
        assert_eq!(candidate_path(dir, "photo", 1), dir.join("photo (1)"));
    }

    #[tokio::test]
    async fn existing_files_are_skipped() {
        let dir = tempdir().expect("temp dir");
        fs::write(dir.path().join("a.jpg"), b"1").expect("write");
        fs::write(dir.path().join("a (1).jpg"), b"2").expect("write");

        let (_, path) = create_unique(dir.path(), "a.jpg").await.expect("create");
        assert_eq!(path, dir.path().join("a (2).jpg"));
        assert_eq!(fs::read(dir.path().join("a.jpg")).expect("read"), b"1");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn concurrent_downloads_of_same_name_keep_both_files() {
        let first_dir = tempdir().expect("temp dir");
        let second_dir = tempdir().expect("temp dir");
        let first = first_dir.path().join("pic.png");
        let second = second_dir.path().join("pic.png");
        fs::write(&first, [1u8]).expect("write");
        fs::write(&second, [2u8]).expect("write");
        let first = PhotoDescriptor::new(first.to_string_lossy());
        let second = PhotoDescriptor::new(second.to_string_lossy());
        let client = reqwest::Client::new();

        for _ in 0..20 {
            let out_dir = tempdir().expect("temp dir");
            let (a, b) = tokio::join!(
                download_photo(&first, &client, out_dir.path()),
                download_photo(&second, &client, out_dir.path()),
            );
            let a = a.expect("first download");
            let b = b.expect("second download");

            assert_ne!(a, b);
            assert_eq!(fs::read(&a).expect("read"), vec![1]);
            assert_eq!(fs::read(&b).expect("read"), vec![2]);
            assert_eq!(fs::read_dir(out_dir.path()).expect("list").count(), 2);
        }
    }

    #[tokio::test]
    async fn download_copies_local_file() {
        let src_dir = tempdir().expect("temp dir");
        let out_dir = tempdir().expect("temp dir");
        let src = src_dir.path().join("pic.png");
        fs::write(&src, [9u8, 8, 7]).expect("write");

        let photo = PhotoDescriptor::new(src.to_string_lossy());
        let target = download_photo(&photo, &reqwest::Client::new(), out_dir.path())
            .await
            .expect("download succeeds");

        assert_eq!(target, out_dir.path().join("pic.png"));
        assert_eq!(fs::read(&target).expect("read"), vec![9, 8, 7]);
    }

    #[tokio::test]
    async fn download_of_missing_url_fails() {
        let out_dir = tempdir().expect("temp dir");
        let err = download_photo(&PhotoDescriptor::new(""), &reqwest::Client::new(), out_dir.path())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Load(LoadError::MissingUrl)));
    }
}
