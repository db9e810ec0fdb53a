//! Counter-based one-time passwords ([RFC 4226][4226]).
//!
//! [4226]: https://datatracker.ietf.org/doc/html/rfc4226

use crate::config::Config;
use crate::digest::{Algorithm, Context, Digest};
use crate::Code;

/// Synchronized moving counter.
///
/// [RFC 4226][4226] describes an "8-byte synchronized moving counter." To allow for more
/// sophisticated forms of counters (including in custom structs, etc.), the `Counter` and
/// [`CounterBytes`] traits are exposed.
///
/// `Counter` is implemented for `u64`, so raw integers can be used as counter values with no
/// additional configuration. Types implementing [`CounterBytes`] get it automatically.
///
/// [4226]: https://datatracker.ietf.org/doc/html/rfc4226
pub trait Counter {
    /// The counter value as an eight-byte, big-endian, unsigned integer.
    fn value(&self) -> u64;
}

/// Raw synchronized moving counter.
///
/// The eight bytes are read big-endian to form the counter, which is how they will be fed to
/// the HMAC.
pub trait CounterBytes {
    /// The counter value as an array of bytes.
    fn value(&self) -> [u8; 8];
}

impl CounterBytes for [u8; 8] {
    fn value(&self) -> [u8; 8] {
        *self
    }
}

impl<T: CounterBytes> Counter for T {
    fn value(&self) -> u64 {
        u64::from_be_bytes(CounterBytes::value(self))
    }
}

impl Counter for u64 {
    fn value(&self) -> u64 {
        *self
    }
}

impl<A: Algorithm> Config<A> {
    /// Computes the HOTP code for `secret` at `counter`.
    ///
    /// Any byte string is accepted as a secret. HMAC tolerates an empty key, so an empty
    /// secret still yields a code, but a warning is logged since it offers no security.
    ///
    /// ```
    /// # use onetime::Config;
    /// let config = Config::simple(6)?;
    /// let secret = b"12345678901234567890";
    /// assert_eq!(config.hotp(secret, 0).value(), 755224);
    /// assert_eq!(config.hotp(secret, [0_u8, 0, 0, 0, 0, 0, 0, 1]).value(), 287082);
    /// # Ok::<(), onetime::Error>(())
    /// ```
    pub fn hotp<S: AsRef<[u8]>, C: Counter>(&self, secret: S, counter: C) -> Code {
        self.digest(secret.as_ref(), counter.value()).truncate(self.digits)
    }

    /// Computes the "raw" HOTP value: the 31-bit result of dynamic truncation.
    ///
    /// No reduction to a number of digits is performed; for that, see [`hotp`](Config::hotp).
    pub fn raw_hotp<S: AsRef<[u8]>, C: Counter>(&self, secret: S, counter: C) -> u32 {
        self.digest(secret.as_ref(), counter.value()).dynamic_truncation()
    }

    fn digest(&self, secret: &[u8], counter: u64) -> <A::Context as Context>::Output {
        if secret.is_empty() {
            log::warn!("computing a one-time password with an empty secret");
        }
        let mut context = self.algorithm.context(secret);
        context.update(&counter.to_be_bytes());
        context.finalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HashAlgorithm;
    use chrono::{DateTime, TimeDelta};

    const SECRET: &[u8] = b"12345678901234567890";

    #[test]
    fn test_raw_hotp() {
        let config = Config::simple(6).unwrap();
        assert_eq!(config.raw_hotp(SECRET, 0), 0x4c93cf18);
        assert_eq!(config.raw_hotp(SECRET, 1), 0x41397eea);
        assert_eq!(config.raw_hotp(SECRET, 2), 0x82fef30);
        assert_eq!(config.raw_hotp(SECRET, 3), 0x66ef7655);
        assert_eq!(config.raw_hotp(SECRET, 4), 0x61c5938a);
        assert_eq!(config.raw_hotp(SECRET, 5), 0x33c083d4);
        assert_eq!(config.raw_hotp(SECRET, 6), 0x7256c032);
        assert_eq!(config.raw_hotp(SECRET, 7), 0x4e5b397);
        assert_eq!(config.raw_hotp(SECRET, 8), 0x2823443f);
        assert_eq!(config.raw_hotp(SECRET, 9), 0x2679dc69);
    }

    #[test]
    fn test_hotp() {
        let config = Config::simple(6).unwrap();
        let expected = [
            755224, 287082, 359152, 969429, 338314, 254676, 287922, 162583, 399871, 520489,
        ];
        for (counter, code) in (0_u64..).zip(expected) {
            assert_eq!(config.hotp(SECRET, counter).value(), code, "counter {}", counter);
        }
    }

    #[test]
    fn longer_codes_keep_low_digits() {
        let raw = 0x4c93cf18_u32;
        for digits in 6..=9 {
            let config = Config::simple(digits).unwrap();
            let code = config.hotp(SECRET, 0);
            assert_eq!(code.value(), raw % 10_u32.pow(digits.into()));
            assert_eq!(code.digits().get(), digits);
        }
        assert_eq!(Config::simple(9).unwrap().hotp(SECRET, 0).value(), 284755224);
    }

    #[test]
    fn codes_stay_in_range() {
        for digits in 6..=9 {
            let config = Config::simple(digits).unwrap();
            let modulus = config.digits().modulus();
            for counter in (0..200).chain([u64::MAX - 1, u64::MAX]) {
                let code = config.hotp(SECRET, counter);
                assert!(code.value() < modulus);
                assert_eq!(code.to_string().len(), usize::from(digits));
            }
        }
    }

    #[test]
    fn deterministic_and_counter_sensitive() {
        let config = Config::simple(8).unwrap();
        assert_eq!(config.hotp(SECRET, 42), config.hotp(SECRET, 42));
        assert_ne!(config.hotp(SECRET, 42), config.hotp(SECRET, 43));
        assert_ne!(config.hotp(SECRET, 42), config.hotp(b"another secret", 42));
    }

    #[test]
    fn byte_counters_are_big_endian() {
        let config = Config::simple(6).unwrap();
        assert_eq!(
            config.hotp(SECRET, [0_u8, 0, 0, 0, 0, 0, 0, 9]),
            config.hotp(SECRET, 9)
        );
        assert_eq!(config.hotp(SECRET, [0xff_u8; 8]), config.hotp(SECRET, u64::MAX));
    }

    #[test]
    fn accepts_any_secret_type() {
        let config = Config::simple(6).unwrap();
        let expected = config.hotp(SECRET, 3);
        assert_eq!(config.hotp("12345678901234567890", 3), expected);
        assert_eq!(config.hotp(String::from("12345678901234567890"), 3), expected);
        assert_eq!(config.hotp(SECRET.to_vec(), 3), expected);
    }

    #[test]
    fn empty_secret_still_produces_a_code() {
        let config = Config::simple(6).unwrap();
        assert_eq!(config.hotp(b"", 0).value(), 328482);
    }

    #[test]
    fn largest_counter() {
        let config = Config::simple(9).unwrap();
        assert_eq!(config.hotp(SECRET, u64::MAX).value(), 663094451);
    }

    #[test]
    fn original_package_example() {
        let config = Config::simple(6).unwrap();
        assert_eq!(config.raw_hotp("SOME_SECRET", 123456), 1294260040);
        assert_eq!(config.hotp("SOME_SECRET", 123456).value(), 260040);
    }

    #[test]
    fn pluggable_algorithm() {
        /// Delegates to HMAC-SHA256 under a different type.
        struct Wrapped;

        impl Algorithm for Wrapped {
            type Context = <HashAlgorithm as Algorithm>::Context;

            fn output_len(&self) -> usize {
                HashAlgorithm::Sha256.output_len()
            }

            fn context(&self, key: &[u8]) -> Self::Context {
                HashAlgorithm::Sha256.context(key)
            }
        }

        let config =
            Config::new(8, Wrapped, TimeDelta::seconds(30), DateTime::UNIX_EPOCH).unwrap();
        let secret = b"12345678901234567890123456789012";
        // RFC 6238 Appendix B, T = 59
        assert_eq!(config.hotp(secret, 1).value(), 46119246);
    }
}
