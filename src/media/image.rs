// SPDX-License-Identifier: MPL-2.0
//! Image decoding from raw bytes (PNG, JPEG, GIF, WebP, SVG, etc.).

use super::loader::LoadError;
use iced::widget::image;
use image_rs::GenericImageView;
use resvg::usvg;

/// A decoded image ready to be displayed.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        let handle = image::Handle::from_rgba(width, height, pixels);
        Self {
            handle,
            width,
            height,
        }
    }
}

/// Decodes encoded image bytes.
///
/// SVG documents are rasterized with resvg at their intrinsic size; every
/// other format goes through the `image` crate. SVG is detected from
/// `svg_hint` (usually the URL extension) or by sniffing the document.
///
/// # Errors
///
/// Returns [`LoadError::Decode`] if the bytes are not a supported image or
/// the image has empty dimensions.
pub fn decode_image(bytes: &[u8], svg_hint: bool) -> Result<ImageData, LoadError> {
    if svg_hint || looks_like_svg(bytes) {
        return rasterize_svg(bytes);
    }

    let img = image_rs::load_from_memory(bytes).map_err(|e| LoadError::Decode(e.to_string()))?;
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return Err(LoadError::Decode("image has empty dimensions".into()));
    }

    Ok(ImageData::from_rgba(width, height, img.to_rgba8().into_vec()))
}

fn rasterize_svg(bytes: &[u8]) -> Result<ImageData, LoadError> {
    let tree = usvg::Tree::from_data(bytes, &usvg::Options::default())
        .map_err(|e| LoadError::Decode(e.to_string()))?;

    let pixmap_size = tree.size().to_int_size();
    let width = pixmap_size.width();
    let height = pixmap_size.height();
    if width == 0 || height == 0 {
        return Err(LoadError::Decode("SVG has empty dimensions".into()));
    }

    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| LoadError::Decode("Failed to allocate SVG pixmap".into()))?;

    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    Ok(ImageData::from_rgba(width, height, pixmap.data().to_vec()))
}

fn looks_like_svg(bytes: &[u8]) -> bool {
    let head = &bytes[..bytes.len().min(512)];
    let text = String::from_utf8_lossy(head);
    let text = text.trim_start_matches('\u{feff}').trim_start();
    text.starts_with("<svg") || (text.starts_with("<?xml") && text.contains("<svg"))
}
