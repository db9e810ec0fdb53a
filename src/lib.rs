//! One-time password generation: HOTP ([RFC 4226][4226]) and TOTP ([RFC 6238][6238]).
//!
//! Everything is driven by a validated [`Config`]. HOTP codes are computed from a secret and
//! a moving counter; TOTP codes replace the counter with the number of time steps elapsed
//! since a base time.
//!
//! # Examples
//!
//! A 6-digit HOTP code:
//!
//! ```
//! # use onetime::Config;
//! let config = Config::simple(6)?;
//! let code = config.hotp("SOME_SECRET", 123456);
//! assert_eq!(code.to_string(), "260040");
//! # Ok::<(), onetime::Error>(())
//! ```
//!
//! An 8-digit TOTP code for the current time, as authenticator apps show:
//!
//! ```
//! # use onetime::Config;
//! let config = Config::simple(8)?;
//! let code = config.totp("SOME_SECRET")?;
//! assert_eq!(code.to_string().len(), 8);
//! # Ok::<(), onetime::Error>(())
//! ```
//!
//! A 9-digit HMAC-SHA256 TOTP code with 5-second steps counted from midnight, 2000-01-01 UTC,
//! evaluated against a pinned clock:
//!
//! ```
//! # use chrono::{TimeDelta, TimeZone, Utc};
//! # use onetime::{Config, FixedClock, HashAlgorithm};
//! let base = Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap();
//! let config = Config::builder()
//!     .digits(9)
//!     .algorithm(HashAlgorithm::Sha256)
//!     .time_step(TimeDelta::seconds(5))
//!     .base_time(base)
//!     .build()?;
//! let clock = FixedClock(base + TimeDelta::seconds(1234));
//! assert_eq!(config.totp_with("SOME_SECRET", &clock)?, 67446052_u32);
//! # Ok::<(), onetime::Error>(())
//! ```
//!
//! [4226]: https://datatracker.ietf.org/doc/html/rfc4226
//! [6238]: https://datatracker.ietf.org/doc/html/rfc6238

use core::fmt;

pub mod clock;
pub mod config;
pub mod digest;
pub mod error;
pub mod hotp;
pub mod length;
pub mod totp;

pub use crate::clock::{Clock, FixedClock, SystemClock};
pub use crate::config::{Config, ConfigBuilder};
pub use crate::digest::{Algorithm, Context, Digest, HashAlgorithm};
pub use crate::error::{Error, Result};
pub use crate::hotp::{Counter, CounterBytes};
pub use crate::length::Digits;

/// A one-time password.
///
/// Compares equal to plain `u32`s holding the same value. [`Display`](fmt::Display) pads
/// it with leading zeroes to exactly [`digits`](Code::digits) characters, which is how
/// codes should be shown to users.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Code {
    value: u32,
    digits: Digits,
}

impl Code {
    pub(crate) fn new(value: u32, digits: Digits) -> Self {
        debug_assert!(value < digits.modulus());
        Self { value, digits }
    }

    /// The numeric value, always below `10^digits`.
    pub fn value(self) -> u32 {
        self.value
    }

    /// Length of the code when displayed.
    pub fn digits(self) -> Digits {
        self.digits
    }
}

impl From<Code> for u32 {
    fn from(code: Code) -> Self {
        code.value
    }
}

impl PartialEq<u32> for Code {
    fn eq(&self, other: &u32) -> bool {
        self.value == *other
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{:0width$}",
            self.value,
            width = usize::from(self.digits.get())
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_pads_to_length() {
        let six = Digits::new(6).unwrap();
        let nine = Digits::new(9).unwrap();
        assert_eq!(Code::new(42, six).to_string(), "000042");
        assert_eq!(Code::new(0, nine).to_string(), "000000000");
        assert_eq!(Code::new(999_999, six).to_string(), "999999");
    }

    #[test]
    fn compares_with_integers() {
        let code = Code::new(755224, Digits::MIN);
        assert_eq!(code, 755224_u32);
        assert_eq!(u32::from(code), 755224);
        assert_eq!(code.value(), 755224);
    }
}
