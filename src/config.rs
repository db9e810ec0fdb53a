//! Validated HOTP/TOTP parameters.

use chrono::{DateTime, TimeDelta, Utc};

use crate::digest::{Algorithm, HashAlgorithm, MIN_DIGEST_LEN};
use crate::error::{Error, Result};
use crate::length::Digits;

/// Default TOTP time step, in seconds ([RFC 6238 section 5.2][5.2]).
///
/// [5.2]: https://datatracker.ietf.org/doc/html/rfc6238#section-5.2
pub const DEFAULT_TIME_STEP_SECS: i64 = 30;

/// Parameters for HOTP and TOTP generation.
///
/// A `Config` can only be obtained through [`Config::simple`], [`Config::new`] or
/// [`Config::builder`], all of which validate it, so generating codes never fails for
/// configuration reasons.
///
/// The HMAC algorithm is a type parameter. It defaults to the runtime-selectable
/// [`HashAlgorithm`], but any [`Algorithm`] implementation with a long enough digest works.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Config<A = HashAlgorithm> {
    pub(crate) digits: Digits,
    pub(crate) algorithm: A,
    pub(crate) time_step: TimeDelta,
    pub(crate) base_time: DateTime<Utc>,
}

impl Config {
    /// HMAC-SHA1 codes of the given length, with 30-second steps counted from the Unix epoch.
    ///
    /// This is the profile Google Authenticator and most other authenticator apps use.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDigits`] unless `6 <= digits <= 9`.
    ///
    /// ```
    /// # use onetime::Config;
    /// let config = Config::simple(6)?;
    /// assert_eq!(config.hotp("SOME_SECRET", 123456).to_string(), "260040");
    /// # Ok::<(), onetime::Error>(())
    /// ```
    pub fn simple(digits: u8) -> Result<Self> {
        Self::builder().digits(digits).build()
    }

    /// Starts a builder preloaded with the [`simple`](Config::simple) defaults and 6 digits.
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

impl<A: Algorithm> Config<A> {
    /// Fully parameterized constructor.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidDigits`] unless `6 <= digits <= 9`.
    /// - [`Error::DigestTooShort`] if `algorithm` produces fewer than 20 bytes.
    /// - [`Error::InvalidTimeStep`] if `time_step` is not positive.
    pub fn new(
        digits: u8,
        algorithm: A,
        time_step: TimeDelta,
        base_time: DateTime<Utc>,
    ) -> Result<Self> {
        let config = validate(digits, &algorithm, time_step).map(|digits| Self {
            digits,
            algorithm,
            time_step,
            base_time,
        });
        if let Err(err) = &config {
            log::debug!("rejected OTP configuration: {}", err);
        }
        config
    }
}

fn validate<A: Algorithm>(digits: u8, algorithm: &A, time_step: TimeDelta) -> Result<Digits> {
    let digits = Digits::new(digits)?;
    let len = algorithm.output_len();
    if len < MIN_DIGEST_LEN {
        return Err(Error::DigestTooShort { len });
    }
    if time_step <= TimeDelta::zero() {
        return Err(Error::InvalidTimeStep);
    }
    Ok(digits)
}

impl<A> Config<A> {
    /// Length of generated codes.
    pub fn digits(&self) -> Digits {
        self.digits
    }

    /// The HMAC algorithm.
    pub fn algorithm(&self) -> &A {
        &self.algorithm
    }

    /// Length of a TOTP time step.
    pub fn time_step(&self) -> TimeDelta {
        self.time_step
    }

    /// Moment at which TOTP step counting starts.
    pub fn base_time(&self) -> DateTime<Utc> {
        self.base_time
    }
}

/// Builder for [`Config`].
///
/// Unset fields keep the defaults of [`Config::simple`]: 6 digits, HMAC-SHA1, a 30-second
/// step and the Unix epoch as base time. Validation happens in [`build`](ConfigBuilder::build).
///
/// ```
/// # use chrono::{TimeDelta, TimeZone, Utc};
/// # use onetime::{Config, HashAlgorithm};
/// let config = Config::builder()
///     .digits(9)
///     .algorithm(HashAlgorithm::Sha256)
///     .time_step(TimeDelta::seconds(5))
///     .base_time(Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap())
///     .build()?;
/// let now = Utc.with_ymd_and_hms(2000, 1, 1, 0, 20, 34).unwrap();
/// assert_eq!(config.steps(now)?, 246);
/// assert_eq!(config.totp_at("SOME_SECRET", now)?.to_string(), "067446052");
/// # Ok::<(), onetime::Error>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct ConfigBuilder<A = HashAlgorithm> {
    digits: u8,
    algorithm: A,
    time_step: TimeDelta,
    base_time: DateTime<Utc>,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self {
            digits: Digits::MIN.get(),
            algorithm: HashAlgorithm::default(),
            time_step: TimeDelta::seconds(DEFAULT_TIME_STEP_SECS),
            base_time: DateTime::UNIX_EPOCH,
        }
    }
}

impl<A: Algorithm> ConfigBuilder<A> {
    /// Sets the code length.
    pub fn digits(mut self, digits: u8) -> Self {
        self.digits = digits;
        self
    }

    /// Replaces the HMAC algorithm, possibly with one of a different type.
    pub fn algorithm<B: Algorithm>(self, algorithm: B) -> ConfigBuilder<B> {
        ConfigBuilder {
            digits: self.digits,
            algorithm,
            time_step: self.time_step,
            base_time: self.base_time,
        }
    }

    /// Sets the TOTP time step.
    pub fn time_step(mut self, time_step: TimeDelta) -> Self {
        self.time_step = time_step;
        self
    }

    /// Sets the moment TOTP step counting starts from.
    pub fn base_time(mut self, base_time: DateTime<Utc>) -> Self {
        self.base_time = base_time;
        self
    }

    /// Validates the parameters.
    ///
    /// # Errors
    ///
    /// See [`Config::new`].
    pub fn build(self) -> Result<Config<A>> {
        Config::new(self.digits, self.algorithm, self.time_step, self.base_time)
    }
}
