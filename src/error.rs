use derive_more::derive::{Display, Error};
use embedded_hal::i2c::ErrorKind;

/// A specialized `Result` where the error is this crate's `Error` type.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Unified error type for this crate.
///
/// RTC bus failures carry the underlying bus error kind, split by transfer
/// direction, so the control loop can report a useful diagnostic without
/// aborting. `ErrorKind` does not implement `core::error::Error`, hence the
/// `#[error(not(source))]` markers below.
#[derive(Debug, Display, Error)]
pub enum Error {
    /// The write phase of an RTC bus transaction did not complete
    /// (device absent, arbitration loss, or no acknowledgment).
    #[display("rtc write failed: {_0:?}")]
    RtcWrite(#[error(not(source))] ErrorKind),

    /// The read phase of an RTC bus transaction did not complete.
    #[display("rtc read failed: {_0:?}")]
    RtcRead(#[error(not(source))] ErrorKind),
}

impl Error {
    /// The bus status code preserved for diagnostics.
    #[must_use]
    pub const fn bus_kind(&self) -> ErrorKind {
        match self {
            Self::RtcWrite(kind) | Self::RtcRead(kind) => *kind,
        }
    }
}
