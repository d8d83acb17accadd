//! SVG generation
//!
//! A small append-only document writer. Elements are emitted in call order,
//! one per line, so layering is exactly the order of the draw calls.

use std::fmt::Write;

use glam::DVec2;

use super::defaults;
use crate::canvas::TextAnchor;
use crate::types::Color;

/// Proportional character widths for the Latin printable range, in
/// hundredths of the average advance. Characters outside the range
/// count as one full advance.
#[rustfmt::skip]
const CHAR_WIDTHS: [u8; 95] = [
    45,  55,  62, 115,  90, 132, 125,  40,
    55,  55,  71, 115,  45,  48,  45,  50,
    91,  91,  91,  91,  91,  91,  91,  91,
    91,  91,  50,  50, 120, 120, 120,  78,
   142, 102, 105, 110, 115, 105,  98, 105,
   125,  58,  58, 107,  95, 145, 125, 115,
    95, 115, 107,  95,  97, 118, 102, 150,
   100,  93, 100,  58,  50,  58, 119,  72,
    72,  86,  92,  80,  92,  85,  52,  92,
    92,  47,  47,  88,  48, 135,  92,  86,
    92,  92,  69,  75,  58,  92,  80, 121,
    81,  80,  76,  91,  49,  91, 118,
];

/// Average character advance as a fraction of the font size.
const CHAR_ASPECT: f64 = 0.571;

/// Estimate the rendered width of a single line of text, in pixels.
pub(crate) fn text_width(text: &str, font_size: f64) -> f64 {
    let mut hundredths: u32 = 0;
    for c in text.chars() {
        if c >= ' ' && c <= '~' {
            hundredths += CHAR_WIDTHS[(c as usize) - 0x20] as u32;
        } else {
            hundredths += 100;
        }
    }
    hundredths as f64 * 0.01 * CHAR_ASPECT * font_size
}

/// A rotation about a fixed point, in SVG degrees (clockwise positive).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rotation {
    pub degrees: f64,
    pub cx: f64,
    pub cy: f64,
}

/// One block of text, possibly multi-line. `y` is the vertical center of
/// the whole block; lines are stacked around it at the configured spacing.
pub struct TextBlock<'a> {
    pub text: &'a str,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub bold: bool,
    pub italic: bool,
    pub fill: Color,
    pub anchor: TextAnchor,
    pub rotation: Option<Rotation>,
}

/// An SVG document under construction.
pub struct SvgDoc {
    width: f64,
    height: f64,
    body: String,
}

impl SvgDoc {
    pub fn new(width: f64, height: f64) -> Self {
        SvgDoc {
            width,
            height,
            body: String::new(),
        }
    }

    /// Fill the whole document with a solid color.
    pub fn background(&mut self, fill: Color) {
        let _ = writeln!(self.body, r#"<rect width="100%" height="100%" fill="{fill}"/>"#);
    }

    pub fn rounded_rect(
        &mut self,
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        rx: f64,
        fill: Color,
        stroke: Color,
        stroke_width: f64,
    ) {
        let _ = writeln!(
            self.body,
            r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{}" fill="{fill}" stroke="{stroke}" stroke-width="{}"/>"#,
            fmt_num(x),
            fmt_num(y),
            fmt_num(w),
            fmt_num(h),
            fmt_num(rx),
            fmt_num(stroke_width),
        );
    }

    /// A borderless rectangle behind text. Opacity 1.0 is omitted from
    /// the output.
    pub fn highlight_rect(
        &mut self,
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        rx: f64,
        fill: Color,
        opacity: f64,
        rotation: Option<Rotation>,
    ) {
        let _ = write!(
            self.body,
            r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{}" fill="{fill}""#,
            fmt_num(x),
            fmt_num(y),
            fmt_num(w),
            fmt_num(h),
            fmt_num(rx),
        );
        if opacity != 1.0 {
            let _ = write!(self.body, r#" fill-opacity="{}""#, fmt_num(opacity));
        }
        if let Some(r) = rotation {
            let _ = write!(self.body, r#" transform="{}""#, rotate_attr(r));
        }
        self.body.push_str("/>\n");
    }

    pub fn line(&mut self, start: DVec2, end: DVec2, stroke: Color, width: f64) {
        let _ = writeln!(
            self.body,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{stroke}" stroke-width="{}"/>"#,
            fmt_num(start.x),
            fmt_num(start.y),
            fmt_num(end.x),
            fmt_num(end.y),
            fmt_num(width),
        );
    }

    pub fn polygon(&mut self, points: &[DVec2], fill: Color) {
        let _ = write!(self.body, r#"<polygon points=""#);
        for (i, p) in points.iter().enumerate() {
            if i > 0 {
                self.body.push(' ');
            }
            let _ = write!(self.body, "{},{}", fmt_num(p.x), fmt_num(p.y));
        }
        let _ = writeln!(self.body, r#"" fill="{fill}"/>"#);
    }

    pub fn text(&mut self, block: &TextBlock<'_>) {
        let _ = write!(
            self.body,
            r#"<text font-family="{}" font-size="{}""#,
            defaults::FONT_FAMILY,
            fmt_num(block.size),
        );
        if block.bold {
            self.body.push_str(r#" font-weight="bold""#);
        }
        if block.italic {
            self.body.push_str(r#" font-style="italic""#);
        }
        let anchor = match block.anchor {
            TextAnchor::Middle => "middle",
            TextAnchor::Start => "start",
        };
        let _ = write!(
            self.body,
            r#" fill="{}" text-anchor="{anchor}" dominant-baseline="central""#,
            block.fill,
        );
        if let Some(r) = block.rotation {
            let _ = write!(self.body, r#" transform="{}""#, rotate_attr(r));
        }
        self.body.push('>');

        // Lines are positioned absolutely, centered on block.y as a group
        let lines: Vec<&str> = block.text.split('\n').collect();
        let line_height = block.size * defaults::LINE_SPACING;
        let first_y = block.y - (lines.len() as f64 - 1.0) / 2.0 * line_height;
        for (i, line) in lines.iter().enumerate() {
            let y = first_y + i as f64 * line_height;
            let _ = write!(
                self.body,
                r#"<tspan x="{}" y="{}">{}</tspan>"#,
                fmt_num(block.x),
                fmt_num(y),
                escape_text(line),
            );
        }
        self.body.push_str("</text>\n");
    }

    /// Close the document and return the full SVG source.
    pub fn finish(self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n{body}</svg>\n",
            w = fmt_num(self.width),
            h = fmt_num(self.height),
            body = self.body,
        )
    }
}

fn rotate_attr(r: Rotation) -> String {
    format!(
        "rotate({} {} {})",
        fmt_num(r.degrees),
        fmt_num(r.cx),
        fmt_num(r.cy)
    )
}

/// Escape text content for inclusion in SVG markup.
fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Format a number matching C's %g format (6 significant figures, trailing zeros trimmed).
pub(crate) fn fmt_num(value: f64) -> String {
    fmt_num_precision(value, 6)
}

/// Format a number with specified significant figures, trailing zeros trimmed.
fn fmt_num_precision(value: f64, sig_figs: i32) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    // Round to specified significant figures
    let abs_val = value.abs();
    let magnitude = abs_val.log10().floor() as i32;
    let scale = 10_f64.powi(sig_figs - 1 - magnitude);
    let rounded = (value * scale).round() / scale;

    // Format with enough decimal places, then trim
    let decimals = (sig_figs - 1 - magnitude).max(0) as usize;
    let s = format!("{:.prec$}", rounded, prec = decimals);
    let s = s.trim_end_matches('0');
    let s = s.trim_end_matches('.');
    s.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== fmt_num tests ====================

    #[test]
    fn fmt_num_trims_trailing_zeros() {
        assert_eq!(fmt_num(50.0), "50");
        assert_eq!(fmt_num(0.0), "0");
        assert_eq!(fmt_num(4800.0), "4800");
        assert_eq!(fmt_num(2.5), "2.5");
    }

    #[test]
    fn fmt_num_keeps_six_significant_figures() {
        assert_eq!(fmt_num(500.0 / 72.0), "6.94444");
        assert_eq!(fmt_num(200.0 / 72.0), "2.77778");
        assert_eq!(fmt_num(200.0 - 500.0 / 72.0), "193.056");
        assert_eq!(fmt_num(-1.0 / 3.0), "-0.333333");
    }

    // ==================== escaping tests ====================

    #[test]
    fn escape_text_handles_markup_characters() {
        assert_eq!(escape_text("a<b & c>d"), "a&lt;b &amp; c&gt;d");
        assert_eq!(escape_text(r#""quoted""#), "&quot;quoted&quot;");
        assert_eq!(escape_text("plain"), "plain");
    }

    // ==================== text_width tests ====================

    #[test]
    fn text_width_grows_with_text() {
        let narrow = text_width("il", 10.0);
        let wide = text_width("WM", 10.0);
        assert!(narrow < wide);
        assert!(text_width("abc", 10.0) < text_width("abcd", 10.0));
    }

    #[test]
    fn text_width_scales_with_font_size() {
        let small = text_width("hello", 8.0);
        let large = text_width("hello", 16.0);
        assert!((large - small * 2.0).abs() < 1e-9);
    }

    // ==================== element tests ====================

    #[test]
    fn rect_element_output() {
        let mut doc = SvgDoc::new(400.0, 300.0);
        doc.rounded_rect(
            100.0,
            100.0,
            200.0,
            100.0,
            10.0,
            Color::WHITE,
            Color::BLACK,
            200.0 / 72.0,
        );
        let svg = doc.finish();
        assert!(svg.contains(
            r#"<rect x="100" y="100" width="200" height="100" rx="10" fill="#FFFFFF" stroke="#000000" stroke-width="2.77778"/>"#
        ));
    }

    #[test]
    fn highlight_omits_full_opacity() {
        let mut doc = SvgDoc::new(100.0, 100.0);
        doc.highlight_rect(0.0, 0.0, 10.0, 10.0, 2.0, Color::WHITE, 1.0, None);
        doc.highlight_rect(0.0, 0.0, 10.0, 10.0, 2.0, Color::WHITE, 0.8, None);
        let svg = doc.finish();
        assert_eq!(svg.matches("fill-opacity").count(), 1);
        assert!(svg.contains(r#"fill-opacity="0.8""#));
    }

    #[test]
    fn multi_line_text_centers_the_block() {
        let mut doc = SvgDoc::new(100.0, 100.0);
        doc.text(&TextBlock {
            text: "one\ntwo",
            x: 50.0,
            y: 100.0,
            size: 10.0,
            bold: false,
            italic: false,
            fill: Color::BLACK,
            anchor: TextAnchor::Middle,
            rotation: None,
        });
        let svg = doc.finish();
        // Two lines at 12px spacing straddle y=100
        assert!(svg.contains(r#"<tspan x="50" y="94">one</tspan>"#));
        assert!(svg.contains(r#"<tspan x="50" y="106">two</tspan>"#));
    }

    #[test]
    fn rotated_text_carries_a_transform() {
        let mut doc = SvgDoc::new(100.0, 100.0);
        doc.text(&TextBlock {
            text: "tilted",
            x: 30.0,
            y: 40.0,
            size: 8.0,
            bold: false,
            italic: true,
            fill: Color::BLACK,
            anchor: TextAnchor::Middle,
            rotation: Some(Rotation {
                degrees: -45.0,
                cx: 30.0,
                cy: 40.0,
            }),
        });
        let svg = doc.finish();
        assert!(svg.contains(r#"transform="rotate(-45 30 40)""#));
        assert!(svg.contains(r#"font-style="italic""#));
    }

    #[test]
    fn document_frame_matches_dimensions() {
        let doc = SvgDoc::new(1600.0, 1200.0);
        let svg = doc.finish();
        assert!(svg.starts_with(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="1600" height="1200" viewBox="0 0 1600 1200">"#
        ));
        assert!(svg.ends_with("</svg>\n"));
    }
}
