//! Declarative diagram rendering to WEBP.
//!
//! A [`Canvas`] is a fixed in-memory description of a diagram: rounded,
//! labeled shapes, arrows between them, and free-floating annotations on a
//! bounded extent. [`render_and_export`] draws the layers back to front,
//! rasterizes the result at 300 pixels per canvas unit, and writes a single
//! WEBP file.
//!
//! ```no_run
//! use skema::{Arrow, Canvas, Label, Shape};
//!
//! fn main() -> miette::Result<()> {
//!     let mut canvas = Canvas::new(6.0, 3.0, "Two Boxes");
//!     canvas
//!         .shapes
//!         .push(Shape::new(0.5, 1.0, 2.0, 1.0).with_label(Label::new("a", 1.5, 1.5)));
//!     canvas
//!         .shapes
//!         .push(Shape::new(3.5, 1.0, 2.0, 1.0).with_label(Label::new("b", 4.5, 1.5)));
//!     canvas.arrows.push(Arrow::new(2.5, 1.5, 3.5, 1.5));
//!     skema::render_and_export(&canvas, "two-boxes.webp")?;
//!     Ok(())
//! }
//! ```

pub mod architecture;
pub mod canvas;
pub mod errors;
pub mod export;
mod log;
pub mod render;
pub mod types;

pub use canvas::{Annotation, Arrow, Canvas, Highlight, Label, Shape, TextAnchor};
pub use errors::{Error, ExportError, RenderError};
pub use export::{encode_webp, rasterize, render_and_export};
pub use types::{Angle, Color, Length, Point, Size};
