//! HOTP code length restrictions.

use core::fmt;

use crate::error::{Error, Result};

/// Number of decimal digits in a generated code.
///
/// Per [RFC 4226][4226], HOTP codes MUST be at least 6 digits long and possibly 7 or 8.
/// Section E.2 of Appendix E indicates that 9-digit codes are also allowed. [RFC 6238][6238]
/// does not restate a limit, so the same 6–9 range applies to TOTP.
///
/// A `Digits` value can only be obtained through validation, so every code computed with it
/// fits in a `u32`.
///
/// [4226]: https://datatracker.ietf.org/doc/html/rfc4226
/// [6238]: https://datatracker.ietf.org/doc/html/rfc6238
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Digits(u8);

impl Digits {
    /// Smallest allowed code length.
    pub const MIN: Self = Self(6);
    /// Largest allowed code length.
    pub const MAX: Self = Self(9);

    /// Validates a code length.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDigits`] unless `6 <= digits <= 9`.
    ///
    /// ```
    /// # use onetime::Digits;
    /// assert!(Digits::new(6).is_ok());
    /// assert!(Digits::new(9).is_ok());
    /// assert!(Digits::new(5).is_err());
    /// assert!(Digits::new(10).is_err());
    /// ```
    pub fn new(digits: u8) -> Result<Self> {
        if (Self::MIN.0..=Self::MAX.0).contains(&digits) {
            Ok(Self(digits))
        } else {
            Err(Error::InvalidDigits(digits))
        }
    }

    /// The number of digits.
    pub const fn get(self) -> u8 {
        self.0
    }

    /// `10^digits`, the exclusive upper bound on codes of this length.
    pub const fn modulus(self) -> u32 {
        10_u32.pow(self.0 as u32)
    }
}

impl TryFrom<u8> for Digits {
    type Error = Error;
    fn try_from(digits: u8) -> Result<Self> {
        Self::new(digits)
    }
}

impl From<Digits> for u8 {
    fn from(digits: Digits) -> Self {
        digits.0
    }
}

impl fmt::Display for Digits {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_six_through_nine() {
        for n in 6..=9 {
            assert_eq!(Digits::new(n).map(Digits::get), Ok(n));
        }
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(Digits::new(0), Err(Error::InvalidDigits(0)));
        assert_eq!(Digits::new(5), Err(Error::InvalidDigits(5)));
        assert_eq!(Digits::new(10), Err(Error::InvalidDigits(10)));
        assert_eq!(Digits::try_from(255), Err(Error::InvalidDigits(255)));
    }

    #[test]
    fn modulus() {
        assert_eq!(Digits::MIN.modulus(), 1_000_000);
        assert_eq!(Digits::MAX.modulus(), 1_000_000_000);
    }
}
