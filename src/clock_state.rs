//! Clock state owned by the control loop.

use crate::color::MAX_OUTPUT_LEVEL;

/// Time of day. Invariant: hour 0-23, minute and second 0-59, always.
///
/// The RTC decode path is the sole writer during normal operation; the edit
/// operations below are the interface the (external) button handler drives
/// and preserve the invariant through wrap and carry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, defmt::Format)]
pub struct RingTime {
    hour: u8,
    minute: u8,
    second: u8,
}

impl RingTime {
    /// Builds a time, asserting the component ranges.
    #[must_use]
    pub const fn new(hour: u8, minute: u8, second: u8) -> Self {
        assert!(hour < 24, "hour out of range");
        assert!(minute < 60, "minute out of range");
        assert!(second < 60, "second out of range");
        Self {
            hour,
            minute,
            second,
        }
    }

    #[must_use]
    pub const fn hour(self) -> u8 {
        self.hour
    }

    #[must_use]
    pub const fn minute(self) -> u8 {
        self.minute
    }

    #[must_use]
    pub const fn second(self) -> u8 {
        self.second
    }

    /// Next hour, wrapping 23 to 0.
    #[must_use]
    pub const fn increment_hour(self) -> Self {
        Self::new((self.hour + 1) % 24, self.minute, self.second)
    }

    /// Previous hour, wrapping 0 to 23.
    #[must_use]
    pub const fn decrement_hour(self) -> Self {
        Self::new((self.hour + 23) % 24, self.minute, self.second)
    }

    /// Next minute; 59 carries into the hour. Editing minutes restarts the
    /// minute, so seconds reset to zero.
    #[must_use]
    pub const fn increment_minute(self) -> Self {
        if self.minute == 59 {
            Self::new((self.hour + 1) % 24, 0, 0)
        } else {
            Self::new(self.hour, self.minute + 1, 0)
        }
    }

    /// Previous minute; 0 borrows from the hour and wraps to 59. Seconds
    /// reset to zero as with [`increment_minute`].
    ///
    /// [`increment_minute`]: RingTime::increment_minute
    #[must_use]
    pub const fn decrement_minute(self) -> Self {
        if self.minute == 0 {
            Self::new((self.hour + 23) % 24, 59, 0)
        } else {
            Self::new(self.hour, self.minute - 1, 0)
        }
    }
}

/// Whether the clock is displaying time or being set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, defmt::Format)]
pub enum ClockMode {
    #[default]
    Display,
    Edit,
}

/// Everything the renderer needs for one frame: the time, the global
/// dimmer, the UI mode, and the pendulum toggle.
///
/// Created once at startup with a zeroed time and minimum visible
/// brightness; the time is refreshed from the RTC every loop iteration and
/// the output level from the light-sensor collaborator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, defmt::Format)]
pub struct ClockState {
    pub time: RingTime,
    output_level: u8,
    pub mode: ClockMode,
    pub pendulum: bool,
}

impl ClockState {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            time: RingTime::new(0, 0, 0),
            output_level: 1,
            mode: ClockMode::Display,
            pendulum: false,
        }
    }

    /// Global brightness scalar, 0-128.
    #[must_use]
    pub const fn output_level(&self) -> u8 {
        self.output_level
    }

    /// Sets the brightness scalar, clamping to the 0-128 dimmer range.
    pub const fn set_output_level(&mut self, level: u8) {
        self.output_level = if level > MAX_OUTPUT_LEVEL {
            MAX_OUTPUT_LEVEL
        } else {
            level
        };
    }
}

impl Default for ClockState {
    fn default() -> Self {
        Self::new()
    }
}
