//! Register-level link to a DS1307-class real-time clock.
//!
//! The device keeps time in BCD registers: offset 0 = seconds, 1 = minutes,
//! 2 = hours (bit 6 clear selects 24-hour mode). Both operations are
//! synchronous, blocking bus transactions with a bounded worst case; they
//! share one bus with one controller and must only run from the main
//! control loop, never from interrupt context.

use embedded_hal::i2c::{Error as _, I2c};

use crate::clock_state::RingTime;
use crate::error::{Error, Result};

/// 7-bit bus address of the RTC (0xD0/0xD1 in 8-bit write/read form).
pub const RTC_ADDR: u8 = 0x68;

/// Register pointer for the seconds register; minutes and hours follow.
const REG_SECONDS: u8 = 0x00;
/// Seconds register: bit 7 is the clock-halt flag, not part of the value.
const SECONDS_MASK: u8 = 0x7F;
const MINUTES_MASK: u8 = 0x7F;
/// Hours register: bits 6-7 are mode flags; bit 6 clear = 24-hour mode.
const HOURS_MASK: u8 = 0x3F;
const HOUR_MODE_BIT: u8 = 0x40;

/// Decodes a BCD byte: high nibble tens, low nibble ones.
#[must_use]
pub const fn bcd_decode(byte: u8) -> u8 {
    (byte >> 4) * 10 + (byte & 0x0F)
}

/// Encodes a value 0-99 as BCD.
#[must_use]
pub const fn bcd_encode(value: u8) -> u8 {
    ((value / 10) << 4) | (value % 10)
}

/// Masks the register's flag bits, decodes, and clamps to the field range
/// so a glitched read can never produce an out-of-range time component.
const fn decode_field(byte: u8, mask: u8, max: u8) -> u8 {
    let value = bcd_decode(byte & mask);
    if value > max { max } else { value }
}

/// Bus master for the RTC. Owns the bus; [`release`] gives it back.
///
/// [`release`]: RtcLink::release
pub struct RtcLink<BUS> {
    bus: BUS,
}

impl<BUS: I2c> RtcLink<BUS> {
    #[must_use]
    pub const fn new(bus: BUS) -> Self {
        Self { bus }
    }

    /// Disconnects and returns the bus.
    #[must_use]
    pub fn release(self) -> BUS {
        self.bus
    }

    /// Reads the current time: a register-pointer write, then a read of the
    /// three BCD time registers.
    ///
    /// On the wire this is `[0xD0, 0x00]` followed by `[0xD1, ss, mm, hh]`,
    /// the exact framing the device expects. Each phase reports its own
    /// error direction with the bus status code preserved.
    ///
    /// # Errors
    ///
    /// [`Error::RtcWrite`] or [`Error::RtcRead`] if the corresponding phase
    /// does not complete. The caller keeps its previous time on failure.
    pub fn read_time(&mut self) -> Result<RingTime> {
        self.bus
            .write(RTC_ADDR, &[REG_SECONDS])
            .map_err(|error| Error::RtcWrite(error.kind()))?;

        let mut raw = [0_u8; 3];
        self.bus
            .read(RTC_ADDR, &mut raw)
            .map_err(|error| Error::RtcRead(error.kind()))?;

        Ok(RingTime::new(
            decode_field(raw[2], HOURS_MASK, 23),
            decode_field(raw[1], MINUTES_MASK, 59),
            decode_field(raw[0], SECONDS_MASK, 59),
        ))
    }

    /// Writes a new time as one transaction: register pointer plus the
    /// three BCD registers, five bytes on the wire including the address.
    ///
    /// Writing the seconds register also clears the clock-halt flag, and
    /// the hour byte keeps bit 6 clear to stay in 24-hour mode.
    ///
    /// # Errors
    ///
    /// [`Error::RtcWrite`] if the transaction does not complete; the
    /// device's stored time is then unchanged and the caller must not
    /// assume the write took effect.
    pub fn write_time(&mut self, time: RingTime) -> Result<()> {
        let frame = [
            REG_SECONDS,
            bcd_encode(time.second()),
            bcd_encode(time.minute()),
            bcd_encode(time.hour()) & !HOUR_MODE_BIT,
        ];
        self.bus
            .write(RTC_ADDR, &frame)
            .map_err(|error| Error::RtcWrite(error.kind()))
    }
}
