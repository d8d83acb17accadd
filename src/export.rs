//! Rasterization and WEBP export.
//!
//! The canvas is rendered to SVG at the base document scale, rasterized at
//! the export density, encoded entirely in memory, and only then written to
//! disk. A failed export never leaves a partial file behind.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use image::codecs::webp::WebPEncoder;
use image::{ExtendedColorType, RgbaImage};
use resvg::usvg::fontdb;

use crate::canvas::Canvas;
use crate::errors::{Error, ExportError};
use crate::render::{self, defaults};

/// Rasterize an SVG document at the export density.
///
/// The output is scaled by `EXPORT_DPI / BASE_PX_PER_UNIT`, so one canvas
/// unit comes out as `EXPORT_DPI` pixels.
///
/// # Errors
///
/// Returns an error when the SVG does not parse, when the scaled dimensions
/// do not fit a pixel buffer, or when the buffer cannot be allocated.
pub fn rasterize(svg: &str) -> Result<RgbaImage, ExportError> {
    let mut db = fontdb::Database::new();
    db.load_system_fonts();
    if db.len() == 0 {
        crate::log::warn!("no system fonts found, text will not render");
    }

    let opts = resvg::usvg::Options {
        fontdb: Arc::new(db),
        font_family: "DejaVu Sans".to_string(),
        ..Default::default()
    };

    let tree = resvg::usvg::Tree::from_str(svg, &opts)?;
    let size = tree.size();

    let scale = defaults::EXPORT_DPI / defaults::BASE_PX_PER_UNIT;
    let width = (f64::from(size.width()) * scale).round();
    let height = (f64::from(size.height()) * scale).round();
    if !width.is_finite()
        || !height.is_finite()
        || width < 1.0
        || height < 1.0
        || width > f64::from(u32::MAX)
        || height > f64::from(u32::MAX)
    {
        return Err(ExportError::Dimensions { width, height });
    }
    let width = width as u32;
    let height = height as u32;

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or(ExportError::Pixmap { width, height })?;

    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::from_scale(scale as f32, scale as f32),
        &mut pixmap.as_mut(),
    );

    crate::log::debug!(width, height, "rasterized canvas");

    RgbaImage::from_raw(width, height, pixmap.data().to_vec())
        .ok_or(ExportError::RasterBuffer { width, height })
}

/// Encode an image as lossless WEBP, entirely in memory.
///
/// # Errors
///
/// Returns an error when the encoder rejects the buffer.
pub fn encode_webp(image: &RgbaImage) -> Result<Vec<u8>, ExportError> {
    let mut bytes = Vec::new();
    let encoder = WebPEncoder::new_lossless(&mut bytes);
    encoder.encode(
        image.as_raw(),
        image.width(),
        image.height(),
        ExtendedColorType::Rgba8,
    )?;
    Ok(bytes)
}

/// Render a canvas and write it to `path` as a WEBP image.
///
/// An existing file at `path` is overwritten. The image is encoded in
/// memory before the file is touched, so on error the previous file (if
/// any) is left intact.
///
/// # Errors
///
/// Returns an error when rendering fails, when rasterization or encoding
/// fails, or when the file cannot be written.
pub fn render_and_export(canvas: &Canvas, path: impl AsRef<Path>) -> Result<(), Error> {
    let path = path.as_ref();

    let svg = render::render_svg(canvas)?;
    let image = rasterize(&svg)?;
    let bytes = encode_webp(&image)?;

    fs::write(path, &bytes).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    crate::log::debug!(path = %path.display(), bytes = bytes.len(), "wrote diagram");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_webp_produces_riff_container() {
        let image = RgbaImage::new(2, 2);
        let bytes = encode_webp(&image).unwrap();
        assert_eq!(&bytes[0..4], b"RIFF");
        assert_eq!(&bytes[8..12], b"WEBP");
    }

    #[test]
    fn rasterize_scales_to_export_density() {
        let svg = Canvas::new(4.0, 3.0, "").to_svg().unwrap();
        let image = rasterize(&svg).unwrap();
        assert_eq!(image.width(), 1200);
        assert_eq!(image.height(), 900);
    }

    #[test]
    fn rasterize_rejects_malformed_svg() {
        let result = rasterize("this is not svg");
        assert!(matches!(result, Err(ExportError::Svg(_))));
    }
}
