//! HMAC algorithms, contexts and digests.

use core::fmt;
use core::str::FromStr;

use ring::{digest, hmac};

use crate::error::Error;
use crate::length::Digits;
use crate::Code;

/// Shortest digest that dynamic truncation can index safely.
///
/// The offset is the low nibble of the final byte (at most 15) and four bytes are read from
/// it, so 19 bytes would be enough in principle; [RFC 4226][4226] fixes the floor at the
/// 20 bytes of HMAC-SHA1.
///
/// [4226]: https://datatracker.ietf.org/doc/html/rfc4226
pub const MIN_DIGEST_LEN: usize = 20;

/// Keyed-hash construction used to compute HOTP digests.
///
/// [RFC 4226][4226] prescribes HMAC-SHA1. [RFC 6238][6238] extends this to HMAC-SHA256 and
/// HMAC-SHA512, and other constructions are conceivable, so the algorithm is a trait rather
/// than a fixed type. [`HashAlgorithm`] covers the three RFC algorithms.
///
/// # Notes
///
/// Implementors must produce digests of at least [`MIN_DIGEST_LEN`] bytes. A
/// [`Config`](crate::Config) refuses algorithms whose [`output_len`](Algorithm::output_len)
/// is shorter, and [`Digest::truncate`] relies on that check instead of repeating it.
///
/// [4226]: https://datatracker.ietf.org/doc/html/rfc4226
/// [6238]: https://datatracker.ietf.org/doc/html/rfc6238
pub trait Algorithm {
    /// Running MAC computation produced by [`context`](Algorithm::context).
    type Context: Context;

    /// Length in bytes of the digests this algorithm produces.
    fn output_len(&self) -> usize;

    /// Starts a new MAC computation keyed with `key`.
    ///
    /// Keys of any length, including zero, must be accepted.
    fn context(&self, key: &[u8]) -> Self::Context;
}

/// An in-progress MAC computation.
pub trait Context {
    /// Finished digest.
    type Output: Digest;

    /// Feeds `data` into the computation.
    fn update(&mut self, data: &[u8]);

    /// Consumes the context, producing the digest.
    fn finalize(self) -> Self::Output;
}

/// An HMAC digest which can be reduced to a one-time code.
pub trait Digest: AsRef<[u8]> {
    /// Dynamic truncation ([RFC 4226 section 5.3][5.3]).
    ///
    /// Uses the four lowest-order bits of the final byte as an offset, reads four bytes from
    /// there as a big-endian integer and strips the leading bit. The result is the 31-bit
    /// value the RFC calls `Snum`.
    ///
    /// # Panics
    ///
    /// Digests shorter than 19 bytes may index out of bounds. This cannot happen for digests
    /// produced by an algorithm accepted by [`Config`](crate::Config).
    ///
    /// [5.3]: https://datatracker.ietf.org/doc/html/rfc4226#section-5.3
    fn dynamic_truncation(&self) -> u32 {
        let digest = self.as_ref();
        debug_assert!(digest.len() >= MIN_DIGEST_LEN);
        let offset = (digest[digest.len() - 1] & 0xf) as usize;
        let bytes = [
            // Strip leading bit to remove signed/unsigned ambiguity
            digest[offset] & 0x7f,
            digest[offset + 1],
            digest[offset + 2],
            digest[offset + 3],
        ];
        u32::from_be_bytes(bytes)
    }

    /// Truncates the digest to a code of the given length.
    ///
    /// ```
    /// # use onetime::{Digest, Digits};
    /// // HMAC-SHA1 digest from RFC 4226 section 5.4
    /// let digest: [u8; 20] = [
    ///     0x1f, 0x86, 0x98, 0x69, 0x0e, 0x02, 0xca, 0x16, 0x61, 0x85, 0x50, 0xef, 0x7f, 0x19,
    ///     0xda, 0x8e, 0x94, 0x5b, 0x55, 0x5a,
    /// ];
    /// assert_eq!(digest.truncate(Digits::new(6)?), 872921_u32);
    /// # Ok::<(), onetime::Error>(())
    /// ```
    fn truncate(&self, digits: Digits) -> Code {
        Code::new(self.dynamic_truncation() % digits.modulus(), digits)
    }
}

impl Digest for hmac::Tag {}

impl<const N: usize> Digest for [u8; N] {}

impl Context for hmac::Context {
    type Output = hmac::Tag;

    fn update(&mut self, data: &[u8]) {
        hmac::Context::update(self, data)
    }

    fn finalize(self) -> hmac::Tag {
        self.sign()
    }
}

/// The HMAC algorithms named by RFC 4226 and RFC 6238.
///
/// Parses from, and displays as, the names used by authenticator apps (`SHA1`, `SHA256`,
/// `SHA512`). Parsing ignores case and an optional dash, so `sha-256` is accepted too.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum HashAlgorithm {
    /// HMAC-SHA1, the only algorithm permitted by RFC 4226 itself.
    #[default]
    Sha1,
    /// HMAC-SHA256.
    Sha256,
    /// HMAC-SHA512.
    Sha512,
}

impl HashAlgorithm {
    fn hmac(self) -> hmac::Algorithm {
        match self {
            Self::Sha1 => hmac::HMAC_SHA1_FOR_LEGACY_USE_ONLY,
            Self::Sha256 => hmac::HMAC_SHA256,
            Self::Sha512 => hmac::HMAC_SHA512,
        }
    }
}

impl Algorithm for HashAlgorithm {
    type Context = hmac::Context;

    fn output_len(&self) -> usize {
        match self {
            Self::Sha1 => digest::SHA1_OUTPUT_LEN,
            Self::Sha256 => digest::SHA256_OUTPUT_LEN,
            Self::Sha512 => digest::SHA512_OUTPUT_LEN,
        }
    }

    fn context(&self, key: &[u8]) -> hmac::Context {
        hmac::Context::with_key(&hmac::Key::new(self.hmac(), key))
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Self::Sha1 => "SHA1",
            Self::Sha256 => "SHA256",
            Self::Sha512 => "SHA512",
        })
    }
}

impl FromStr for HashAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().replace('-', "").as_str() {
            "SHA1" => Ok(Self::Sha1),
            "SHA256" => Ok(Self::Sha256),
            "SHA512" => Ok(Self::Sha512),
            _ => Err(Error::UnknownAlgorithm(s.to_owned())),
        }
    }
}
