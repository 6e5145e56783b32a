//! An analog clock face on a ring of WS2812-style LEDs, disciplined by an
//! external real-time clock.
//!
//! The crate splits into a pure core that builds and tests on the host and
//! a thin hardware layer behind the `pico1` feature:
//!
//! - [`ring`]: wire-ordered pixel storage with a mounting rotation.
//! - [`render`]: eased, integer-only hand and pendulum rendering.
//! - [`millis`]: the drift-compensated sub-second interpolator.
//! - [`rtc`]: the BCD register protocol for the RTC chip.
//! - [`clock`]: the control-loop device tying it all together.
//! - [`waveform`]: bit-exact reference model of the LED wire protocol.
//! - [`ring_driver`] (`pico1`): the PIO waveform generator.

#![no_std]

pub mod clock;
pub mod clock_state;
pub mod color;
pub mod driver;
pub mod error;
pub mod millis;
pub mod render;
pub mod ring;
#[cfg(feature = "pico1")]
pub mod ring_driver;
pub mod rtc;
pub mod waveform;

// Re-export commonly used items
pub use clock::{DEFAULT_PIXEL_OFFSET, RingClock};
pub use clock_state::{ClockMode, ClockState, RingTime};
pub use color::{MAX_OUTPUT_LEVEL, Rgb};
pub use driver::PixelTransmitter;
pub use error::{Error, Result};
pub use millis::{MillisModel, TickCounter};
pub use render::{RING_LEDS, render};
pub use ring::PixelRing;
pub use rtc::RtcLink;
