//! Strongly-typed numeric primitives (zero-cost newtypes).
//!
//! Design goals:
//! - No raw `f64` in layout logic
//! - Illegal states unrepresentable
//! - Unit conversions only via Scaler

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is zero when non-zero required
    Zero,
    /// Value is negative when positive required
    Negative,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Zero => write!(f, "value is zero"),
            NumericError::Negative => write!(f, "value is negative"),
        }
    }
}

impl std::error::Error for NumericError {}

/// A distance in canvas units.
///
/// One canvas unit corresponds to one inch at export time. Stroke widths
/// and font sizes are usually given in points; [`Length::points`] converts
/// at the conventional 72 points per unit.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Length(pub f64);

impl Length {
    pub const ZERO: Length = Length(0.0);

    /// Create a Length from canvas units (const-friendly, unchecked).
    /// Use `try_new` for values that are not literals.
    #[inline]
    pub const fn units(val: f64) -> Length {
        Length(val)
    }

    /// Create a Length from points (1 pt = 1/72 canvas unit).
    #[inline]
    pub const fn points(val: f64) -> Length {
        Length(val / 72.0)
    }

    /// Create a Length with validation (rejects NaN/infinite)
    #[inline]
    pub fn try_new(val: f64) -> Result<Length, NumericError> {
        if val.is_nan() {
            Err(NumericError::NaN)
        } else if val.is_infinite() {
            Err(NumericError::Infinite)
        } else {
            Ok(Length(val))
        }
    }

    /// Create a non-negative Length with validation
    #[inline]
    pub fn try_non_negative(val: f64) -> Result<Length, NumericError> {
        if val.is_nan() {
            Err(NumericError::NaN)
        } else if val.is_infinite() {
            Err(NumericError::Infinite)
        } else if val < 0.0 {
            Err(NumericError::Negative)
        } else {
            Ok(Length(val))
        }
    }

    /// Get the absolute value
    #[inline]
    pub fn abs(self) -> Length {
        Length(self.0.abs())
    }

    /// Get the minimum of two lengths
    #[inline]
    pub fn min(self, other: Length) -> Length {
        Length(self.0.min(other.0))
    }

    /// Get the maximum of two lengths
    #[inline]
    pub fn max(self, other: Length) -> Length {
        Length(self.0.max(other.0))
    }

    /// Get the raw value (use sparingly, prefer typed operations)
    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }

    /// Check if this length is finite (not NaN or infinite)
    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl Add for Length {
    type Output = Length;
    fn add(self, rhs: Length) -> Length {
        Length(self.0 + rhs.0)
    }
}
impl Sub for Length {
    type Output = Length;
    fn sub(self, rhs: Length) -> Length {
        Length(self.0 - rhs.0)
    }
}
impl Mul<f64> for Length {
    type Output = Length;
    fn mul(self, rhs: f64) -> Length {
        Length(self.0 * rhs)
    }
}
impl Div<f64> for Length {
    type Output = Length;
    fn div(self, rhs: f64) -> Length {
        Length(self.0 / rhs)
    }
}
impl Neg for Length {
    type Output = Length;
    fn neg(self) -> Length {
        Length(-self.0)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Rotation angle in degrees, counterclockwise in canvas space.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Angle(pub f64);

impl Angle {
    pub const ZERO: Angle = Angle(0.0);

    /// Create an Angle from degrees (const-friendly).
    #[inline]
    pub const fn degrees(val: f64) -> Angle {
        Angle(val)
    }

    /// Get the raw value in degrees
    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An opaque RGB color. Displays as `#RRGGBB` for SVG attributes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
    pub const LIGHT_BLUE: Color = Color::hex(0xADD8E6);
    pub const LIGHT_GREEN: Color = Color::hex(0x90EE90);
    pub const LIGHT_YELLOW: Color = Color::hex(0xFFFFE0);
    pub const LIGHT_CORAL: Color = Color::hex(0xF08080);

    /// Create a color from components.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b }
    }

    /// Create a color from a packed `0xRRGGBB` value.
    #[inline]
    pub const fn hex(val: u32) -> Color {
        Color {
            r: ((val >> 16) & 0xFF) as u8,
            g: ((val >> 8) & 0xFF) as u8,
            b: (val & 0xFF) as u8,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Convert canvas units to document pixels with a fixed scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scaler {
    pub px_per_unit: f64,
}

impl Scaler {
    /// Create a new Scaler (unchecked).
    /// Use `try_new` for values that are not literals.
    pub(crate) fn new(px_per_unit: f64) -> Self {
        Scaler { px_per_unit }
    }

    /// Create a Scaler with validation (rejects NaN, infinite, zero, negative)
    pub fn try_new(px_per_unit: f64) -> Result<Self, NumericError> {
        if px_per_unit.is_nan() {
            Err(NumericError::NaN)
        } else if px_per_unit.is_infinite() {
            Err(NumericError::Infinite)
        } else if px_per_unit == 0.0 {
            Err(NumericError::Zero)
        } else if px_per_unit < 0.0 {
            Err(NumericError::Negative)
        } else {
            Ok(Scaler { px_per_unit })
        }
    }

    /// Convert a length in canvas units to raw f64 pixels.
    #[inline]
    pub fn px(&self, l: Length) -> f64 {
        l.0 * self.px_per_unit
    }
}

/// Generic 2D point
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point<T> {
    pub x: T,
    pub y: T,
}

impl<T> Point<T> {
    pub fn new(x: T, y: T) -> Self {
        Point { x, y }
    }
}

/// 2D size
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size<T> {
    pub w: T,
    pub h: T,
}

impl<T> Size<T> {
    pub fn new(w: T, h: T) -> Self {
        Size { w, h }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Length tests ====================

    #[test]
    fn length_try_new_valid() {
        assert!(Length::try_new(1.0).is_ok());
        assert!(Length::try_new(0.0).is_ok());
        assert!(Length::try_new(-1.0).is_ok());
    }

    #[test]
    fn length_try_new_rejects_nan() {
        assert_eq!(Length::try_new(f64::NAN), Err(NumericError::NaN));
    }

    #[test]
    fn length_try_new_rejects_infinity() {
        assert_eq!(Length::try_new(f64::INFINITY), Err(NumericError::Infinite));
        assert_eq!(Length::try_new(f64::NEG_INFINITY), Err(NumericError::Infinite));
    }

    #[test]
    fn length_try_non_negative_rejects_negative() {
        assert_eq!(Length::try_non_negative(-1.0), Err(NumericError::Negative));
        assert!(Length::try_non_negative(0.0).is_ok());
    }

    #[test]
    fn length_points_conversion() {
        assert_eq!(Length::points(72.0), Length::units(1.0));
        assert_eq!(Length::points(36.0), Length::units(0.5));
    }

    #[test]
    fn length_arithmetic() {
        let a = Length(3.0);
        let b = Length(2.0);

        assert_eq!(a + b, Length(5.0));
        assert_eq!(a - b, Length(1.0));
        assert_eq!(a * 2.0, Length(6.0));
        assert_eq!(a / 2.0, Length(1.5));
        assert_eq!(-a, Length(-3.0));
    }

    #[test]
    fn length_min_max() {
        let a = Length(3.0);
        let b = Length(5.0);

        assert_eq!(a.min(b), Length(3.0));
        assert_eq!(a.max(b), Length(5.0));
    }

    #[test]
    fn length_is_finite() {
        assert!(Length(1.0).is_finite());
        assert!(!Length(f64::INFINITY).is_finite());
        assert!(!Length(f64::NAN).is_finite());
    }

    // ==================== Color tests ====================

    #[test]
    fn color_hex_unpacks_components() {
        let c = Color::hex(0x61DAFB);
        assert_eq!(c, Color::rgb(0x61, 0xDA, 0xFB));
    }

    #[test]
    fn color_displays_as_svg_hex() {
        assert_eq!(Color::hex(0x2F3542).to_string(), "#2F3542");
        assert_eq!(Color::WHITE.to_string(), "#FFFFFF");
        assert_eq!(Color::BLACK.to_string(), "#000000");
    }

    // ==================== Scaler tests ====================

    #[test]
    fn scaler_try_new_valid() {
        assert!(Scaler::try_new(100.0).is_ok());
        assert!(Scaler::try_new(1.0).is_ok());
    }

    #[test]
    fn scaler_try_new_rejects_zero() {
        assert_eq!(Scaler::try_new(0.0), Err(NumericError::Zero));
    }

    #[test]
    fn scaler_try_new_rejects_negative() {
        assert_eq!(Scaler::try_new(-1.0), Err(NumericError::Negative));
    }

    #[test]
    fn scaler_try_new_rejects_nan() {
        assert_eq!(Scaler::try_new(f64::NAN), Err(NumericError::NaN));
    }

    #[test]
    fn scaler_converts_length_to_px() {
        let scaler = Scaler::new(100.0);
        assert_eq!(scaler.px(Length(1.0)), 100.0);
        assert_eq!(scaler.px(Length::points(72.0)), 100.0);
    }

    // ==================== Point/Size tests ====================

    #[test]
    fn point_and_size_hold_components() {
        let p = Point::new(Length(1.0), Length(2.0));
        assert_eq!(p.x, Length(1.0));
        assert_eq!(p.y, Length(2.0));

        let s = Size::new(Length(16.0), Length(12.0));
        assert_eq!(s.w, Length(16.0));
        assert_eq!(s.h, Length(12.0));
    }

    // ==================== Angle tests ====================

    #[test]
    fn angle_degrees_roundtrip() {
        let a = Angle::degrees(45.0);
        assert_eq!(a.raw(), 45.0);
        assert_eq!(Angle::ZERO.raw(), 0.0);
    }
}
