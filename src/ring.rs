//! Ordered pixel storage for the LED ring, kept in wire byte order.

use crate::color::{Rgb, saturating_add};

/// Fixed-size pixel buffer for a ring of `N` WS2812-style LEDs.
///
/// Pixels are stored as the wire expects them: three bytes per pixel in
/// green, red, blue order, physical slot order. Logical index 0 is the
/// 12 o'clock position; a rotation `offset` maps logical index `i` to
/// physical slot `(i + offset) % N` so the ring can be mounted in any
/// orientation. Every write goes through that mapping except [`clear`],
/// which zeroes the physical slots in bulk.
///
/// [`clear`]: PixelRing::clear
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelRing<const N: usize> {
    grb: [[u8; 3]; N],
    offset: usize,
}

impl<const N: usize> PixelRing<N> {
    /// Number of pixels in the ring.
    pub const LEN: usize = N;

    /// Creates a dark ring with the given logical-to-physical rotation.
    #[must_use]
    pub const fn new(offset: usize) -> Self {
        assert!(N > 0, "ring must contain at least one pixel");
        Self {
            grb: [[0; 3]; N],
            offset: offset % N,
        }
    }

    /// The configured rotation offset.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    const fn slot(&self, index: usize) -> usize {
        (index % N + self.offset) % N
    }

    /// Overwrites the pixel at a logical index.
    pub fn set(&mut self, index: usize, color: Rgb) {
        let slot = self.slot(index);
        self.grb[slot] = [color.g, color.r, color.b];
    }

    /// Accumulates a color onto the pixel at a logical index, saturating
    /// each channel at 255.
    pub fn add(&mut self, index: usize, color: Rgb) {
        let slot = self.slot(index);
        let [g, r, b] = self.grb[slot];
        let sum = saturating_add(Rgb::new(r, g, b), color);
        self.grb[slot] = [sum.g, sum.r, sum.b];
    }

    /// The color at a logical index.
    #[must_use]
    pub fn get(&self, index: usize) -> Rgb {
        let [g, r, b] = self.grb[self.slot(index)];
        Rgb::new(r, g, b)
    }

    /// Zeroes every physical slot directly; the one write that bypasses the
    /// offset mapping.
    pub fn clear(&mut self) {
        self.grb = [[0; 3]; N];
    }

    /// The frame exactly as it goes onto the wire: green, red, blue per
    /// pixel, physical slot order.
    #[must_use]
    pub fn wire_bytes(&self) -> &[u8] {
        self.grb.as_flattened()
    }

    /// The frame packed as one 24-bit word per pixel (wire bytes in the top
    /// bits), ready for a left-shifting FIFO with a 24-bit threshold.
    #[must_use]
    pub fn wire_words(&self) -> [u32; N] {
        let mut words = [0_u32; N];
        for (word, [g, r, b]) in words.iter_mut().zip(&self.grb) {
            *word = (u32::from(*g) << 24) | (u32::from(*r) << 16) | (u32::from(*b) << 8);
        }
        words
    }
}

impl<const N: usize> Default for PixelRing<N> {
    fn default() -> Self {
        Self::new(0)
    }
}
