//! Default sizes and settings (canvas units are inches, text sizes in points)

use crate::types::Length;

pub const BASE_PX_PER_UNIT: f64 = 100.0;
pub const EXPORT_DPI: f64 = 300.0;

pub const STROKE_WIDTH: Length = Length::points(2.0);
pub const CORNER_RADIUS: Length = Length::units(0.1);
pub const ARROW_TRIM: Length = Length::points(5.0);
pub const ARROW_HEAD_LENGTH: Length = Length::points(8.0);
pub const ARROW_HEAD_WIDTH: Length = Length::points(6.0);

pub const LABEL_SIZE: Length = Length::points(10.0);
pub const ANNOTATION_SIZE: Length = Length::points(8.0);
pub const TITLE_SIZE: Length = Length::points(20.0);
pub const TITLE_INSET: Length = Length::units(0.5);

pub const LINE_SPACING: f64 = 1.2;
pub const HIGHLIGHT_PAD: f64 = 0.35;
pub const HIGHLIGHT_RADIUS: f64 = 0.3;
pub const FONT_FAMILY: &str = "DejaVu Sans, Helvetica, Arial, sans-serif";

pub const OUTPUT_PATH: &str = "docs/architecture-overview.webp";
