//! Drift-compensated "milliseconds within the current second" model.
//!
//! Transmitting a frame to the LEDs blocks interrupt delivery for the whole
//! transfer, so a naive 1 ms tick undercounts real time by a rate that
//! varies with frame cost. Instead of trusting the raw count, the model
//! learns how many ticks actually fit into one RTC second and stretches the
//! running count back onto a nominal 0-1000 ms scale.

use portable_atomic::{AtomicU32, Ordering};

/// Nominal milliseconds (and seeded ticks) per second.
pub const MS_PER_SECOND: u32 = 1000;

/// Free-running tick counter shared between the periodic tick source and
/// the control loop.
///
/// `tick()` is the only writer and is safe to run at any point of the
/// control loop's computation; the loop reads with [`read`] and performs the
/// once-per-second snapshot-and-reset with [`take`]. On cores without a
/// native atomic swap the `portable-atomic` critical-section backend turns
/// [`take`] into a short interrupt-masked window, which keeps the two-step
/// read/reset glitch-free.
///
/// [`read`]: TickCounter::read
/// [`take`]: TickCounter::take
#[derive(Debug)]
pub struct TickCounter(AtomicU32);

impl TickCounter {
    #[must_use]
    pub const fn new() -> Self {
        Self(AtomicU32::new(0))
    }

    /// Advances the counter by one. O(1) and non-blocking; this is the only
    /// work allowed in the tick interrupt context.
    pub fn tick(&self) {
        self.0.fetch_add(1, Ordering::Relaxed);
    }

    /// Current raw tick count.
    #[must_use]
    pub fn read(&self) -> u32 {
        self.0.load(Ordering::Relaxed)
    }

    /// Returns the raw tick count and resets it to zero in one atomic step.
    #[must_use]
    pub fn take(&self) -> u32 {
        self.0.swap(0, Ordering::Relaxed)
    }
}

impl Default for TickCounter {
    fn default() -> Self {
        Self::new()
    }
}

/// Calibrated interpolator mapping raw ticks onto a 0-1000 ms display scale.
#[derive(Clone, Debug)]
pub struct MillisModel {
    calibration: u32,
}

impl MillisModel {
    /// Seeds the calibration at one nominal tick per millisecond.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            calibration: MS_PER_SECOND,
        }
    }

    /// Current estimate of raw ticks per real second. Always positive.
    #[must_use]
    pub const fn calibration(&self) -> u32 {
        self.calibration
    }

    /// Milliseconds since the last second boundary, clamped to 1000.
    ///
    /// Stretches the possibly-undercounted raw ticks back onto the nominal
    /// scale: `min(1000, raw_ticks * 1000 / calibration)`.
    #[expect(clippy::cast_possible_truncation, reason = "clamped to 1000")]
    #[must_use]
    pub const fn elapsed_ms(&self, raw_ticks: u32) -> u16 {
        let stretched =
            raw_ticks as u64 * MS_PER_SECOND as u64 / self.calibration as u64;
        if stretched >= MS_PER_SECOND as u64 {
            MS_PER_SECOND as u16
        } else {
            stretched as u16
        }
    }

    /// Folds the raw tick count measured over the second that just ended
    /// into the calibration: `(raw_ticks + calibration) / 2`.
    ///
    /// Averaging against the previous value damps single-second outliers
    /// caused by variable per-iteration transmission cost. The result is
    /// floored at 1 so [`elapsed_ms`] can never divide by zero.
    ///
    /// [`elapsed_ms`]: MillisModel::elapsed_ms
    pub const fn recalibrate(&mut self, raw_ticks: u32) {
        let next = (raw_ticks + self.calibration) / 2;
        self.calibration = if next == 0 { 1 } else { next };
    }
}

impl Default for MillisModel {
    fn default() -> Self {
        Self::new()
    }
}

/// Periodic tick source: the embassy-native form of the original firmware's
/// 1 ms timer interrupt.
#[cfg(feature = "pico1")]
#[embassy_executor::task]
pub async fn tick_task(counter: &'static TickCounter) -> ! {
    let mut ticker = embassy_time::Ticker::every(embassy_time::Duration::from_millis(1));
    loop {
        ticker.next().await;
        counter.tick();
    }
}
