//! Error types for rendering and export.
//!
//! Each stage of the pipeline has its own error enum, and [`Error`] wraps
//! them for callers that drive the whole pipeline. All variants carry
//! miette diagnostic codes so failures print with context.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

// =============================================================================
// Render errors
// =============================================================================

/// Errors produced while turning a canvas into an SVG document.
#[derive(Debug, Error, Diagnostic)]
pub enum RenderError {
    #[error("canvas extent {width} x {height} is not drawable")]
    #[diagnostic(
        code(skema::render::invalid_extent),
        help("the extent must be finite and strictly positive in both dimensions")
    )]
    InvalidExtent { width: f64, height: f64 },

    #[error("render scale {value} is not usable")]
    #[diagnostic(
        code(skema::render::invalid_scale),
        help("the pixels-per-unit scale must be finite and strictly positive")
    )]
    InvalidScale { value: f64 },
}

// =============================================================================
// Export errors
// =============================================================================

/// Errors produced while rasterizing and writing the final image.
#[derive(Debug, Error, Diagnostic)]
pub enum ExportError {
    #[error("generated SVG failed to parse")]
    #[diagnostic(code(skema::export::svg))]
    Svg(#[from] resvg::usvg::Error),

    #[error("raster dimensions {width} x {height} are out of range")]
    #[diagnostic(
        code(skema::export::dimensions),
        help("the scaled pixel dimensions must fit in a u32 and be at least 1 x 1")
    )]
    Dimensions { width: f64, height: f64 },

    #[error("could not allocate a {width} x {height} pixel buffer")]
    #[diagnostic(code(skema::export::pixmap))]
    Pixmap { width: u32, height: u32 },

    #[error("raster buffer does not match {width} x {height} RGBA layout")]
    #[diagnostic(code(skema::export::raster_buffer))]
    RasterBuffer { width: u32, height: u32 },

    #[error("WEBP encoding failed")]
    #[diagnostic(code(skema::export::encode))]
    Encode(#[from] image::ImageError),

    #[error("writing {}", path.display())]
    #[diagnostic(
        code(skema::export::io),
        help("check that the parent directory exists and is writable")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// =============================================================================
// Top-level error
// =============================================================================

/// Any error from the render-and-export pipeline.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Export(#[from] ExportError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_error_display() {
        let err = RenderError::InvalidExtent {
            width: 0.0,
            height: 12.0,
        };
        assert_eq!(err.to_string(), "canvas extent 0 x 12 is not drawable");
    }

    #[test]
    fn io_error_names_the_path() {
        let err = ExportError::Io {
            path: PathBuf::from("docs/out.webp"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(err.to_string(), "writing docs/out.webp");
    }

    #[test]
    fn top_level_error_is_transparent() {
        let err = Error::Render(RenderError::InvalidScale { value: f64::NAN });
        assert_eq!(err.to_string(), "render scale NaN is not usable");
    }
}
