//! The control-loop device: ties the RTC link, the millisecond model, the
//! renderer, and a pixel transmitter together.

use embedded_hal::i2c::I2c;

use crate::clock_state::{ClockMode, ClockState, RingTime};
use crate::driver::PixelTransmitter;
use crate::error::Result;
use crate::millis::{MillisModel, TickCounter};
use crate::render::{RING_LEDS, render};
use crate::ring::PixelRing;
use crate::rtc::RtcLink;

/// Logical-to-physical rotation of the ring as mounted: physical pixel 37
/// sits at 12 o'clock.
pub const DEFAULT_PIXEL_OFFSET: usize = 37;

/// An analog clock on a ring of LEDs.
///
/// Owns the RTC link, the drift-compensated millisecond model, and the
/// current [`ClockState`]; collaborators (light sensor, buttons) feed their
/// inputs through [`set_output_level`], the mode and pendulum setters, and
/// [`write_time`]. One loop iteration is [`step`]; the `pico1` runner wraps
/// it in a logging loop.
///
/// [`set_output_level`]: RingClock::set_output_level
/// [`write_time`]: RingClock::write_time
/// [`step`]: RingClock::step
pub struct RingClock<BUS, TX> {
    rtc: RtcLink<BUS>,
    transmitter: TX,
    model: MillisModel,
    ticks: &'static TickCounter,
    state: ClockState,
    prev_second: u8,
}

impl<BUS, TX> RingClock<BUS, TX>
where
    BUS: I2c,
    TX: PixelTransmitter<RING_LEDS>,
{
    #[must_use]
    pub fn new(bus: BUS, transmitter: TX, ticks: &'static TickCounter) -> Self {
        Self {
            rtc: RtcLink::new(bus),
            transmitter,
            model: MillisModel::new(),
            ticks,
            state: ClockState::new(),
            prev_second: 0,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &ClockState {
        &self.state
    }

    /// Current raw-ticks-per-second estimate of the millisecond model.
    #[must_use]
    pub const fn calibration(&self) -> u32 {
        self.model.calibration()
    }

    /// Brightness input from the light-sensor collaborator, clamped to
    /// the 0-128 dimmer range.
    pub const fn set_output_level(&mut self, level: u8) {
        self.state.set_output_level(level);
    }

    pub const fn set_mode(&mut self, mode: ClockMode) {
        self.state.mode = mode;
    }

    pub const fn set_pendulum(&mut self, enabled: bool) {
        self.state.pendulum = enabled;
    }

    /// Pushes an edited time to the RTC and, once the device has accepted
    /// it, adopts it locally.
    ///
    /// # Errors
    ///
    /// Propagates the bus error; the device's stored time and the local
    /// state are then both unchanged.
    pub fn write_time(&mut self, time: RingTime) -> Result<()> {
        self.rtc.write_time(time)?;
        self.state.time = time;
        self.prev_second = time.second();
        Ok(())
    }

    /// Runs one control-loop iteration into the given frame buffer:
    /// refresh the time from the RTC, recalibrate the millisecond model
    /// when the second rolled over, render, transmit.
    ///
    /// A bus failure leaves the previous time in place and is returned for
    /// the caller's diagnostics, but the frame is still rendered and
    /// transmitted; no error can leave the ring stale or half-written.
    ///
    /// # Errors
    ///
    /// The RTC read error for this iteration, if any. The next iteration
    /// is itself the retry.
    pub fn step(&mut self, ring: &mut PixelRing<RING_LEDS>) -> Result<()> {
        let refreshed = match self.rtc.read_time() {
            Ok(time) => {
                self.state.time = time;
                Ok(())
            }
            Err(error) => Err(error),
        };

        if self.state.time.second() != self.prev_second {
            self.prev_second = self.state.time.second();
            self.model.recalibrate(self.ticks.take());
        }

        let elapsed_ms = self.model.elapsed_ms(self.ticks.read());
        render(&self.state, elapsed_ms, ring);
        self.transmitter.transmit(ring);
        refreshed
    }

    /// Runs the clock forever, logging bus errors and continuing with the
    /// last known time.
    ///
    /// The short pause between iterations keeps the executor cooperative so
    /// the millisecond tick task stays scheduled; correctness does not
    /// depend on its length once drift compensation is active.
    #[cfg(feature = "pico1")]
    pub async fn run(&mut self) -> ! {
        use defmt::{Debug2Format, debug, info, warn};

        let mut ring = PixelRing::new(DEFAULT_PIXEL_OFFSET);
        let mut logged_second = self.state.time.second();
        info!("ready");
        loop {
            if let Err(error) = self.step(&mut ring) {
                warn!("{}", Debug2Format(&error));
            }
            if self.state.time.second() != logged_second {
                logged_second = self.state.time.second();
                debug!("calibration: {} ticks/s", self.calibration());
            }
            embassy_time::Timer::after_millis(1).await;
        }
    }
}
