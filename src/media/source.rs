// SPDX-License-Identifier: MPL-2.0
//! Classifies a photo's `image_url` and fetches its raw bytes.

use super::loader::LoadError;
use std::path::{Path, PathBuf};

/// Where the bytes of an image live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// `http://` or `https://` URL.
    Remote(String),
    /// Local file, from a bare path or a `file://` URL.
    File(PathBuf),
    /// A URL with a scheme we cannot fetch (e.g. `ftp:`).
    Unsupported(String),
    /// Empty or whitespace-only URL.
    Missing,
}

impl ImageSource {
    #[must_use]
    pub fn parse(image_url: &str) -> Self {
        let url = image_url.trim();
        if url.is_empty() {
            return Self::Missing;
        }

        let lower = url.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            return Self::Remote(url.to_string());
        }
        if lower.starts_with("file://") {
            let rest = &url["file://".len()..];
            // file://localhost/path is the same as file:///path
            let rest = rest.strip_prefix("localhost").unwrap_or(rest);
            if rest.is_empty() {
                return Self::Missing;
            }
            // Percent escapes are decoded; invalid UTF-8 keeps the raw text.
            let path = urlencoding::decode(rest)
                .map_or_else(|_| rest.to_string(), |decoded| decoded.into_owned());
            return Self::File(PathBuf::from(path));
        }
        if let Some(scheme) = url_scheme(url) {
            return Self::Unsupported(scheme.to_string());
        }

        Self::File(PathBuf::from(url))
    }

    /// Whether the source names an SVG document.
    #[must_use]
    pub fn is_svg(&self) -> bool {
        let name = match self {
            Self::Remote(url) => url.split(['?', '#']).next().unwrap_or(url),
            Self::File(path) => return has_svg_extension(path),
            Self::Unsupported(_) | Self::Missing => return false,
        };
        has_svg_extension(Path::new(name))
    }

    /// Reads the raw bytes of the image.
    ///
    /// # Errors
    ///
    /// Returns a [`LoadError`] for missing URLs, unsupported schemes,
    /// I/O failures and non-success HTTP statuses.
    pub async fn fetch(&self, client: &reqwest::Client) -> Result<Vec<u8>, LoadError> {
        match self {
            Self::Missing => Err(LoadError::MissingUrl),
            Self::Unsupported(scheme) => Err(LoadError::UnsupportedScheme(scheme.clone())),
            Self::File(path) => tokio::fs::read(path).await.map_err(|err| {
                if err.kind() == std::io::ErrorKind::NotFound {
                    LoadError::NotFound(path.display().to_string())
                } else {
                    LoadError::Io(err.to_string())
                }
            }),
            Self::Remote(url) => {
                let response = client
                    .get(url)
                    .send()
                    .await
                    .map_err(|err| LoadError::Network(err.to_string()))?;
                let status = response.status();
                if !status.is_success() {
                    return Err(LoadError::HttpStatus(status.as_u16()));
                }
                let bytes = response
                    .bytes()
                    .await
                    .map_err(|err| LoadError::Network(err.to_string()))?;
                Ok(bytes.to_vec())
            }
        }
    }
}

fn has_svg_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"))
}

/// Returns the scheme of `url` if it has one. Single letters are treated
/// as Windows drive letters, not schemes.
fn url_scheme(url: &str) -> Option<&str> {
    let (scheme, _) = url.split_once(':')?;
    let valid = scheme.len() > 1
        && scheme.starts_with(|c: char| c.is_ascii_alphabetic())
        && scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    valid.then_some(scheme)
}
