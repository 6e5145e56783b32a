//! Color primitives: saturating accumulation and the global output-level dimmer.

use smart_leds::RGB8;

/// RGB color constants.
pub use smart_leds::colors;

/// RGB color representation re-exported from `smart_leds`.
pub type Rgb = RGB8;

/// Upper bound of the output-level dimmer. `scale(v, MAX_OUTPUT_LEVEL) == v`.
pub const MAX_OUTPUT_LEVEL: u8 = 128;

/// Adds two colors channel-wise, clamping each channel at 255.
///
/// Overlapping clock features accumulate through this so they blend instead
/// of overwriting each other.
#[must_use]
pub fn saturating_add(current: Rgb, value: Rgb) -> Rgb {
    Rgb::new(
        current.r.saturating_add(value.r),
        current.g.saturating_add(value.g),
        current.b.saturating_add(value.b),
    )
}

/// Applies the 0-128 output-level dimmer to a single channel value.
#[expect(clippy::cast_possible_truncation, reason = "quotient fits in u8")]
#[must_use]
pub const fn scale(value: u8, output_level: u8) -> u8 {
    ((value as u16 * output_level as u16) / MAX_OUTPUT_LEVEL as u16) as u8
}
