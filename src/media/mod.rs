// SPDX-License-Identifier: MPL-2.0
//! Image loading for the lightbox: where bytes come from, how they are
//! decoded, and the loader port the lightbox awaits.

pub mod image;
pub mod loader;
pub mod source;

pub use image::{decode_image, ImageData};
pub use loader::{DefaultImageLoader, ImageLoader, LoadError, LoadFuture};
pub use source::ImageSource;

/// Supported file extensions.
pub mod extensions {
    use std::path::Path;

    /// Image file extensions the decoder understands.
    pub const IMAGE_EXTENSIONS: &[&str] = &[
        "jpg", "jpeg", "png", "gif", "tiff", "tif", "webp", "bmp", "ico", "svg",
    ];

    /// Checks if a path has a supported image extension (case-insensitive).
    #[must_use]
    pub fn is_supported_image(path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
    }

}
