//! The transmit seam between the renderer and the physical LEDs.

use crate::ring::PixelRing;

/// Capability to push one frame to an LED ring.
///
/// `transmit` is synchronous and carries the system's one hard real-time
/// obligation: mid-frame, the data line may never idle longer than a bit
/// period, and after the last bit it must stay low for the latch gap.
/// Implementations either hand the waveform to a peripheral that guarantees
/// the timing (see [`ring_driver`](crate::ring_driver)) or model the wire
/// bit-exactly for tests (see [`waveform`](crate::waveform)).
pub trait PixelTransmitter<const N: usize> {
    fn transmit(&mut self, ring: &PixelRing<N>);
}

impl<T: PixelTransmitter<N>, const N: usize> PixelTransmitter<N> for &mut T {
    fn transmit(&mut self, ring: &PixelRing<N>) {
        (**self).transmit(ring);
    }
}
