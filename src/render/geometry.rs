//! Line and arrowhead geometry, in document pixel space.

use glam::{DVec2, dvec2};

/// Shorten a line by `amount` from both ends
/// Returns (new_start, new_end) as DVec2
pub fn chop_line(start: DVec2, end: DVec2, amount: f64) -> (DVec2, DVec2) {
    let delta = end - start;
    let len = delta.length();

    if len < amount * 2.0 {
        // Line is too short to chop, return midpoint for both
        let mid = (start + end) * 0.5;
        return (mid, mid);
    }

    // Unit vector along the line
    let unit = delta / len;

    // New endpoints
    let new_start = start + unit * amount;
    let new_end = end - unit * amount;

    (new_start, new_end)
}

/// Compute the arrowhead triangle for a line from `start` to `end`.
/// The tip sits at `end` and the head points along the line.
/// Returns None for zero-length lines.
pub fn arrowhead(
    start: DVec2,
    end: DVec2,
    head_length: f64,
    head_width: f64,
) -> Option<[DVec2; 3]> {
    let delta = end - start;
    let len = delta.length();

    if len < 0.001 {
        return None;
    }

    // Unit vector in direction of line
    let unit = delta / len;

    // Perpendicular unit vector
    let perp = dvec2(-unit.y, unit.x);

    // Base points are head_length back along the line, offset by half
    // head_width perpendicular (head_width is the FULL base width)
    let base = end - unit * head_length;
    let half_width = head_width / 2.0;

    let p1 = base + perp * half_width;
    let p2 = base - perp * half_width;

    Some([end, p1, p2])
}

/// Clamp a corner radius so it never exceeds half the rectangle's
/// shorter side, and never goes negative.
pub fn clamp_corner_radius(radius: f64, w: f64, h: f64) -> f64 {
    radius.min(w / 2.0).min(h / 2.0).max(0.0)
}
