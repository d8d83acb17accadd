//! The declarative canvas model.
//!
//! A [`Canvas`] is a complete, in-memory description of a diagram: a bounded
//! extent, a title, and three layers of content drawn back to front:
//!
//! - [`Shape`]: filled, bordered, rounded rectangles with centered labels
//! - [`Arrow`]: straight connectors with a solid triangular head
//! - [`Annotation`]: free-floating text, optionally highlighted or rotated
//!
//! Coordinates are in canvas units with the origin at the bottom-left and
//! the y axis pointing up. One unit maps to one inch at export time.
//!
//! Constructors take raw `f64` coordinates so diagram definitions stay
//! readable; everything is stored as typed [`Length`] values internally.

use crate::errors::RenderError;
use crate::render::{self, defaults};
use crate::types::{Angle, Color, Length, Point, Size};

/// Horizontal anchoring of a text run relative to its position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TextAnchor {
    /// The position is the horizontal center of the text.
    #[default]
    Middle,
    /// The position is the left edge of the text.
    Start,
}

/// A text label attached to a shape, centered on `at`.
///
/// Multi-line labels use `\n`; lines are stacked around the vertical center.
#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    pub text: String,
    pub at: Point<Length>,
    pub size: Length,
    pub bold: bool,
    pub color: Color,
}

impl Label {
    /// Create a label at `(x, y)` with the default size and color.
    pub fn new(text: impl Into<String>, x: f64, y: f64) -> Self {
        Label {
            text: text.into(),
            at: Point::new(Length::units(x), Length::units(y)),
            size: defaults::LABEL_SIZE,
            bold: false,
            color: Color::BLACK,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn with_size(mut self, size: Length) -> Self {
        self.size = size;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

/// Fill and border styling for a [`Shape`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeStyle {
    pub fill: Color,
    pub stroke: Color,
    pub stroke_width: Length,
    pub corner_radius: Length,
}

impl Default for ShapeStyle {
    fn default() -> Self {
        ShapeStyle {
            fill: Color::WHITE,
            stroke: Color::BLACK,
            stroke_width: defaults::STROKE_WIDTH,
            corner_radius: defaults::CORNER_RADIUS,
        }
    }
}

/// A rounded, bordered rectangle with any number of labels.
///
/// `origin` is the bottom-left corner; `size` extends up and to the right.
#[derive(Clone, Debug, PartialEq)]
pub struct Shape {
    pub origin: Point<Length>,
    pub size: Size<Length>,
    pub style: ShapeStyle,
    pub labels: Vec<Label>,
}

impl Shape {
    /// Create a shape with its bottom-left corner at `(x, y)`.
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Shape {
            origin: Point::new(Length::units(x), Length::units(y)),
            size: Size::new(Length::units(w), Length::units(h)),
            style: ShapeStyle::default(),
            labels: Vec::new(),
        }
    }

    pub fn with_fill(mut self, fill: Color) -> Self {
        self.style.fill = fill;
        self
    }

    pub fn with_label(mut self, label: Label) -> Self {
        self.labels.push(label);
        self
    }
}

/// Stroke and head styling for an [`Arrow`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArrowStyle {
    pub stroke: Color,
    pub stroke_width: Length,
    pub head_length: Length,
    pub head_width: Length,
}

impl Default for ArrowStyle {
    fn default() -> Self {
        ArrowStyle {
            stroke: Color::BLACK,
            stroke_width: defaults::STROKE_WIDTH,
            head_length: defaults::ARROW_HEAD_LENGTH,
            head_width: defaults::ARROW_HEAD_WIDTH,
        }
    }
}

/// A straight connector drawn from `start` to `end` with a solid head
/// at the end. Both endpoints are pulled back by a fixed margin at render
/// time so arrows stop short of the shapes they connect.
#[derive(Clone, Debug, PartialEq)]
pub struct Arrow {
    pub start: Point<Length>,
    pub end: Point<Length>,
    pub style: ArrowStyle,
}

impl Arrow {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Arrow {
            start: Point::new(Length::units(x1), Length::units(y1)),
            end: Point::new(Length::units(x2), Length::units(y2)),
            style: ArrowStyle::default(),
        }
    }

    pub fn with_stroke(mut self, stroke: Color) -> Self {
        self.style.stroke = stroke;
        self
    }
}

/// A background box behind an [`Annotation`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Highlight {
    pub fill: Color,
    pub opacity: f64,
}

impl Highlight {
    pub fn new(fill: Color) -> Self {
        Highlight { fill, opacity: 1.0 }
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }
}

/// Free-floating text drawn on top of shapes and arrows.
#[derive(Clone, Debug, PartialEq)]
pub struct Annotation {
    pub text: String,
    pub at: Point<Length>,
    pub size: Length,
    pub bold: bool,
    pub italic: bool,
    pub color: Color,
    pub anchor: TextAnchor,
    /// Counterclockwise rotation about `at`.
    pub rotation: Angle,
    pub highlight: Option<Highlight>,
}

impl Annotation {
    /// Create an annotation at `(x, y)` with the default size and color.
    pub fn new(text: impl Into<String>, x: f64, y: f64) -> Self {
        Annotation {
            text: text.into(),
            at: Point::new(Length::units(x), Length::units(y)),
            size: defaults::ANNOTATION_SIZE,
            bold: false,
            italic: false,
            color: Color::BLACK,
            anchor: TextAnchor::default(),
            rotation: Angle::ZERO,
            highlight: None,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn with_size(mut self, size: Length) -> Self {
        self.size = size;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn rotated(mut self, rotation: Angle) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_highlight(mut self, highlight: Highlight) -> Self {
        self.highlight = Some(highlight);
        self
    }
}

/// A complete diagram description.
#[derive(Clone, Debug, PartialEq)]
pub struct Canvas {
    /// Drawable area in canvas units, from the origin up and to the right.
    pub extent: Size<Length>,
    /// Title drawn centered near the top edge.
    pub title: String,
    pub shapes: Vec<Shape>,
    pub arrows: Vec<Arrow>,
    pub annotations: Vec<Annotation>,
}

impl Canvas {
    /// Create an empty canvas of `w` x `h` units.
    pub fn new(w: f64, h: f64, title: impl Into<String>) -> Self {
        Canvas {
            extent: Size::new(Length::units(w), Length::units(h)),
            title: title.into(),
            shapes: Vec::new(),
            arrows: Vec::new(),
            annotations: Vec::new(),
        }
    }

    /// Render this canvas to a standalone SVG document.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::InvalidExtent`] when the extent is not finite
    /// and strictly positive.
    pub fn to_svg(&self) -> Result<String, RenderError> {
        render::render_svg(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Builder tests ====================

    #[test]
    fn shape_defaults() {
        let shape = Shape::new(1.0, 2.0, 3.0, 1.0);
        assert_eq!(shape.style.fill, Color::WHITE);
        assert_eq!(shape.style.stroke, Color::BLACK);
        assert_eq!(shape.style.stroke_width, defaults::STROKE_WIDTH);
        assert!(shape.labels.is_empty());
    }

    #[test]
    fn shape_builders_compose() {
        let shape = Shape::new(0.0, 0.0, 2.0, 1.0)
            .with_fill(Color::LIGHT_BLUE)
            .with_label(Label::new("api", 1.0, 0.5).bold());

        assert_eq!(shape.style.fill, Color::LIGHT_BLUE);
        assert_eq!(shape.labels.len(), 1);
        assert!(shape.labels[0].bold);
    }

    #[test]
    fn label_defaults() {
        let label = Label::new("hello", 1.0, 2.0);
        assert_eq!(label.size, defaults::LABEL_SIZE);
        assert_eq!(label.color, Color::BLACK);
        assert!(!label.bold);
    }

    #[test]
    fn arrow_stores_endpoints() {
        let arrow = Arrow::new(1.0, 2.0, 3.0, 4.0).with_stroke(Color::hex(0x2F3542));
        assert_eq!(arrow.start, Point::new(Length::units(1.0), Length::units(2.0)));
        assert_eq!(arrow.end, Point::new(Length::units(3.0), Length::units(4.0)));
        assert_eq!(arrow.style.stroke, Color::hex(0x2F3542));
    }

    #[test]
    fn annotation_defaults() {
        let note = Annotation::new("note", 0.0, 0.0);
        assert_eq!(note.size, defaults::ANNOTATION_SIZE);
        assert_eq!(note.anchor, TextAnchor::Middle);
        assert_eq!(note.rotation, Angle::ZERO);
        assert!(note.highlight.is_none());
        assert!(!note.italic);
    }

    #[test]
    fn annotation_builders_compose() {
        let note = Annotation::new("flow", 5.0, 5.0)
            .italic()
            .rotated(Angle::degrees(45.0))
            .with_anchor(TextAnchor::Start)
            .with_highlight(Highlight::new(Color::WHITE).with_opacity(0.8));

        assert!(note.italic);
        assert_eq!(note.rotation, Angle::degrees(45.0));
        assert_eq!(note.anchor, TextAnchor::Start);
        let highlight = note.highlight.unwrap();
        assert_eq!(highlight.fill, Color::WHITE);
        assert_eq!(highlight.opacity, 0.8);
    }

    // ==================== Canvas tests ====================

    #[test]
    fn canvas_starts_empty() {
        let canvas = Canvas::new(16.0, 12.0, "Test");
        assert_eq!(canvas.extent, Size::new(Length::units(16.0), Length::units(12.0)));
        assert_eq!(canvas.title, "Test");
        assert!(canvas.shapes.is_empty());
        assert!(canvas.arrows.is_empty());
        assert!(canvas.annotations.is_empty());
    }
}
