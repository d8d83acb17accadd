//! SVG rendering for canvas descriptions
//!
//! This module is organized into submodules:
//! - `defaults`: Default sizes and settings
//! - `geometry`: Line chopping and arrowhead construction
//! - `svg`: SVG document assembly
//!
//! Layering is fixed: background, shapes, arrows, title, annotations.

pub mod defaults;
pub mod geometry;
pub mod svg;

use glam::{DVec2, dvec2};

use crate::canvas::{Annotation, Arrow, Canvas, Shape, TextAnchor};
use crate::errors::RenderError;
use crate::types::{Color, Length, Point, Scaler};
use svg::{Rotation, SvgDoc, TextBlock};

/// Maps canvas coordinates (units, y-up) to document pixels (y-down).
struct Frame {
    scaler: Scaler,
    width_px: f64,
    height_px: f64,
}

impl Frame {
    fn new(canvas: &Canvas, px_per_unit: f64) -> Result<Frame, RenderError> {
        let w = canvas.extent.w;
        let h = canvas.extent.h;
        if !w.is_finite() || !h.is_finite() || w.raw() <= 0.0 || h.raw() <= 0.0 {
            return Err(RenderError::InvalidExtent {
                width: w.raw(),
                height: h.raw(),
            });
        }
        let scaler = Scaler::try_new(px_per_unit)
            .map_err(|_| RenderError::InvalidScale { value: px_per_unit })?;
        Ok(Frame {
            width_px: scaler.px(w),
            height_px: scaler.px(h),
            scaler,
        })
    }

    fn px(&self, l: Length) -> f64 {
        self.scaler.px(l)
    }

    /// Canvas point to document pixels, flipping the y axis.
    fn map(&self, p: Point<Length>) -> DVec2 {
        dvec2(self.scaler.px(p.x), self.height_px - self.scaler.px(p.y))
    }
}

/// Render a canvas description to a standalone SVG document.
pub fn render_svg(canvas: &Canvas) -> Result<String, RenderError> {
    let frame = Frame::new(canvas, defaults::BASE_PX_PER_UNIT)?;

    crate::log::debug!(
        shapes = canvas.shapes.len(),
        arrows = canvas.arrows.len(),
        annotations = canvas.annotations.len(),
        "rendering canvas"
    );

    let mut doc = SvgDoc::new(frame.width_px, frame.height_px);
    doc.background(Color::WHITE);

    for shape in &canvas.shapes {
        render_shape(&frame, &mut doc, shape);
    }
    for arrow in &canvas.arrows {
        render_arrow(&frame, &mut doc, arrow);
    }
    render_title(&frame, &mut doc, canvas);
    for note in &canvas.annotations {
        render_annotation(&frame, &mut doc, note);
    }

    Ok(doc.finish())
}

fn render_shape(frame: &Frame, doc: &mut SvgDoc, shape: &Shape) {
    // The model origin is the bottom-left corner; SVG rects hang from the top-left
    let top_left = frame.map(Point::new(shape.origin.x, shape.origin.y + shape.size.h));
    let w = frame.px(shape.size.w);
    let h = frame.px(shape.size.h);
    let rx = geometry::clamp_corner_radius(frame.px(shape.style.corner_radius), w, h);

    doc.rounded_rect(
        top_left.x,
        top_left.y,
        w,
        h,
        rx,
        shape.style.fill,
        shape.style.stroke,
        frame.px(shape.style.stroke_width),
    );

    for label in &shape.labels {
        let at = frame.map(label.at);
        doc.text(&TextBlock {
            text: &label.text,
            x: at.x,
            y: at.y,
            size: frame.px(label.size),
            bold: label.bold,
            italic: false,
            fill: label.color,
            anchor: TextAnchor::Middle,
            rotation: None,
        });
    }
}

fn render_arrow(frame: &Frame, doc: &mut SvgDoc, arrow: &Arrow) {
    let (start, end) = geometry::chop_line(
        frame.map(arrow.start),
        frame.map(arrow.end),
        frame.px(defaults::ARROW_TRIM),
    );

    doc.line(start, end, arrow.style.stroke, frame.px(arrow.style.stroke_width));

    if let Some(head) = geometry::arrowhead(
        start,
        end,
        frame.px(arrow.style.head_length),
        frame.px(arrow.style.head_width),
    ) {
        doc.polygon(&head, arrow.style.stroke);
    }
}

fn render_title(frame: &Frame, doc: &mut SvgDoc, canvas: &Canvas) {
    if canvas.title.is_empty() {
        return;
    }
    let at = frame.map(Point::new(
        canvas.extent.w / 2.0,
        canvas.extent.h - defaults::TITLE_INSET,
    ));
    doc.text(&TextBlock {
        text: &canvas.title,
        x: at.x,
        y: at.y,
        size: frame.px(defaults::TITLE_SIZE),
        bold: true,
        italic: false,
        fill: Color::BLACK,
        anchor: TextAnchor::Middle,
        rotation: None,
    });
}

fn render_annotation(frame: &Frame, doc: &mut SvgDoc, note: &Annotation) {
    let at = frame.map(note.at);
    let size = frame.px(note.size);

    // The model rotates counterclockwise, SVG clockwise
    let rotation = (note.rotation.raw() != 0.0).then(|| Rotation {
        degrees: -note.rotation.raw(),
        cx: at.x,
        cy: at.y,
    });

    if let Some(highlight) = note.highlight {
        let lines: Vec<&str> = note.text.split('\n').collect();
        let widest = lines
            .iter()
            .map(|line| svg::text_width(line, size))
            .fold(0.0, f64::max);
        let text_height = (lines.len() as f64 - 1.0) * size * defaults::LINE_SPACING + size;
        let pad = size * defaults::HIGHLIGHT_PAD;

        let w = widest + pad * 2.0;
        let h = text_height + pad * 2.0;
        let x = match note.anchor {
            TextAnchor::Middle => at.x - w / 2.0,
            TextAnchor::Start => at.x - pad,
        };
        doc.highlight_rect(
            x,
            at.y - h / 2.0,
            w,
            h,
            size * defaults::HIGHLIGHT_RADIUS,
            highlight.fill,
            highlight.opacity,
            rotation,
        );
    }

    doc.text(&TextBlock {
        text: &note.text,
        x: at.x,
        y: at.y,
        size,
        bold: note.bold,
        italic: note.italic,
        fill: note.color,
        anchor: note.anchor,
        rotation,
    });
}
