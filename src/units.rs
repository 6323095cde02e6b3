//! Conversion between physical (millimeter) and editor (pixel) lengths.
//!
//! OFD stores every length in millimeters. The editing surface works in
//! pixels at a fixed logical resolution of [`DPI`] dots per inch, so
//! `1 mm = 96 / 25.4 ≈ 3.7795 px`.
//!
//! Both functions are plain arithmetic: zero and negative lengths pass
//! through unchanged in sign, so malformed geometry stays visible to the
//! caller instead of being clamped away.

/// Logical device resolution of the editing surface, in dots per inch.
pub const DPI: f64 = 96.0;

/// Millimeters in one inch.
pub const MM_PER_INCH: f64 = 25.4;

/// Pixels per millimeter at [`DPI`].
pub const PIXELS_PER_MM: f64 = DPI / MM_PER_INCH;

/// Convert a length in millimeters to pixels.
#[inline]
pub fn mm_to_pixel(mm: f64) -> f64 {
    mm * PIXELS_PER_MM
}

/// Convert a length in pixels to millimeters.
#[inline]
pub fn pixel_to_mm(px: f64) -> f64 {
    px / PIXELS_PER_MM
}
