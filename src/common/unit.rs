//! Unit conversion utilities.
//!
//! RTF measures physical sizes in twips (1/1440 inch).

pub const TWIPS_PER_INCH: i32 = 1440;

/// Screen resolution assumed when the host does not supply one.
pub const DEFAULT_DPI: f32 = 96.0;

/// Convert twips to device pixels, rounding half up.
///
/// Negative input clamps to zero.
///
/// ```
/// use rtfkit::common::unit::twips_to_pixels;
/// assert_eq!(twips_to_pixels(1440, 96.0), 96);
/// assert_eq!(twips_to_pixels(720, 96.0), 48);
/// ```
#[inline]
pub fn twips_to_pixels(twips: i32, dpi: f32) -> u32 {
    (twips as f32 / TWIPS_PER_INCH as f32 * dpi + 0.5) as u32
}

/// Convert a length given in `units_per_inch` to device pixels.
#[inline]
pub fn units_to_pixels(units: i32, units_per_inch: u32, dpi: f32) -> u32 {
    if units_per_inch == 0 {
        return 0;
    }
    (units as f32 / units_per_inch as f32 * dpi + 0.5) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_twips_to_pixels() {
        assert_eq!(twips_to_pixels(1440, 96.0), 96);
        assert_eq!(twips_to_pixels(1440, 72.0), 72);
        assert_eq!(twips_to_pixels(15, 96.0), 1);
        assert_eq!(twips_to_pixels(0, 96.0), 0);
        assert_eq!(twips_to_pixels(-1440, 96.0), 0);
    }

    #[test]
    fn test_units_to_pixels() {
        assert_eq!(units_to_pixels(576, 576, 96.0), 96);
        assert_eq!(units_to_pixels(100, 0, 96.0), 0);
    }
}
