//! Bit-exact reference model of the single-wire LED protocol.
//!
//! Every bit occupies the same total period; only the high/low split inside
//! it encodes the value. A sustained low longer than the reset threshold
//! ends the frame, which is why transmission must never pause mid-frame and
//! why the latch gap after the last bit matters. The constants here are the
//! single source of truth for both the hardware driver's cycle budget and
//! the host tests.

use heapless::Vec;

use crate::driver::PixelTransmitter;
use crate::ring::PixelRing;

/// High time of a '0' bit, nanoseconds.
pub const T0H_NS: u32 = 400;
/// High time of a '1' bit, nanoseconds.
pub const T1H_NS: u32 = 800;
/// Total duration of one bit, independent of its value.
pub const BIT_NS: u32 = 1250;
/// Sustained low that the LEDs treat as end-of-frame.
pub const RESET_THRESHOLD_US: u32 = 50;
/// Low time held after the last bit to latch the frame. Comfortably past
/// the reset threshold.
pub const LATCH_US: u32 = 55;

/// One bit on the wire: high for `high_ns`, then low for `low_ns`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, defmt::Format)]
pub struct Pulse {
    pub high_ns: u32,
    pub low_ns: u32,
}

/// The waveform for a single bit.
#[must_use]
pub const fn bit_pulse(bit: bool) -> Pulse {
    let high_ns = if bit { T1H_NS } else { T0H_NS };
    Pulse {
        high_ns,
        low_ns: BIT_NS - high_ns,
    }
}

/// Walks a frame in wire order (green, red, blue per pixel, most
/// significant bit first) and emits the pulse for every bit.
pub fn encode_frame<const N: usize>(ring: &PixelRing<N>, mut emit: impl FnMut(Pulse)) {
    for byte in ring.wire_bytes() {
        for shift in (0_u8..8).rev() {
            emit(bit_pulse((byte >> shift) & 1 == 1));
        }
    }
}

/// Test transmitter that records the complete pulse train of the last frame
/// plus the latch gap. `BITS` must be at least `N * 24` for the rings it is
/// asked to transmit.
#[derive(Debug, Default)]
pub struct WaveformCapture<const BITS: usize> {
    pub pulses: Vec<Pulse, BITS>,
    pub latch_us: u32,
    pub frames: usize,
}

impl<const BITS: usize> WaveformCapture<BITS> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pulses: Vec::new(),
            latch_us: 0,
            frames: 0,
        }
    }
}

impl<const N: usize, const BITS: usize> PixelTransmitter<N> for WaveformCapture<BITS> {
    fn transmit(&mut self, ring: &PixelRing<N>) {
        self.pulses.clear();
        encode_frame(ring, |pulse| {
            let _ = self.pulses.push(pulse);
        });
        self.latch_us = LATCH_US;
        self.frames += 1;
    }
}
