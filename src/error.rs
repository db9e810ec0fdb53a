//! Error types.

use chrono::{DateTime, Utc};

/// Errors produced while building a configuration or evaluating a TOTP code.
///
/// Everything except [`Error::BeforeBaseTime`] and [`Error::CounterOverflow`] is reported
/// when a [`Config`](crate::Config) is constructed; HOTP generation itself never fails.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    /// The requested number of digits was outside of the range [6, 9].
    #[error("HOTP codes must have between 6 and 9 digits (got {0})")]
    InvalidDigits(u8),
    /// The HMAC algorithm produces digests too short for dynamic truncation.
    #[error("digest of {len} bytes is too short for dynamic truncation (need at least 20)")]
    DigestTooShort {
        /// Output length of the rejected algorithm, in bytes.
        len: usize,
    },
    /// The time step was zero or negative.
    #[error("time step must be positive")]
    InvalidTimeStep,
    /// The algorithm name was not recognised.
    #[error("unknown HMAC algorithm: {0}")]
    UnknownAlgorithm(String),
    /// A TOTP code was requested for a moment before the configured base time.
    #[error("{now} is before the TOTP base time {base_time}")]
    BeforeBaseTime {
        /// The requested moment.
        now: DateTime<Utc>,
        /// The configured base time.
        base_time: DateTime<Utc>,
    },
    /// The number of elapsed time steps does not fit in a 64-bit counter.
    #[error("elapsed time steps overflow the 64-bit counter")]
    CounterOverflow,
}

pub type Result<T> = std::result::Result<T, Error>;
