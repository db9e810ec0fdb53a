//! Time-based one-time passwords ([RFC 6238][6238]).
//!
//! TOTP is HOTP with the counter replaced by the number of whole time steps elapsed since a
//! base time. Step counting floors toward negative infinity, and any moment before the base
//! time is rejected rather than wrapped into the 64-bit counter.
//!
//! [6238]: https://datatracker.ietf.org/doc/html/rfc6238

use chrono::{DateTime, TimeDelta, Utc};

use crate::clock::{Clock, SystemClock};
use crate::config::Config;
use crate::digest::Algorithm;
use crate::error::{Error, Result};
use crate::Code;

const NANOS_PER_SEC: i128 = 1_000_000_000;

fn unix_nanos(t: DateTime<Utc>) -> i128 {
    i128::from(t.timestamp()) * NANOS_PER_SEC + i128::from(t.timestamp_subsec_nanos())
}

fn delta_nanos(d: TimeDelta) -> i128 {
    i128::from(d.num_seconds()) * NANOS_PER_SEC + i128::from(d.subsec_nanos())
}

impl<A> Config<A> {
    /// Number of whole time steps between the base time and `now`.
    ///
    /// This is the TOTP counter `T = floor((now - T0) / X)`. A moment exactly on the base time
    /// is step 0.
    ///
    /// # Errors
    ///
    /// - [`Error::BeforeBaseTime`] if `now` is earlier than the base time, even by a fraction
    ///   of a step.
    /// - [`Error::CounterOverflow`] if the step count does not fit in a `u64`, which only
    ///   happens with sub-microsecond steps.
    pub fn steps(&self, now: DateTime<Utc>) -> Result<u64> {
        let elapsed = unix_nanos(now) - unix_nanos(self.base_time);
        let steps = elapsed.div_euclid(delta_nanos(self.time_step));
        if steps < 0 {
            log::debug!("TOTP requested at {} before base time {}", now, self.base_time);
            return Err(Error::BeforeBaseTime {
                now,
                base_time: self.base_time,
            });
        }
        let steps = u64::try_from(steps).map_err(|_| Error::CounterOverflow)?;
        log::trace!("{} is TOTP step {}", now, steps);
        Ok(steps)
    }
}

impl<A: Algorithm> Config<A> {
    /// Computes the TOTP code for `secret` at the current wall-clock time.
    ///
    /// # Errors
    ///
    /// See [`steps`](Config::steps).
    pub fn totp<S: AsRef<[u8]>>(&self, secret: S) -> Result<Code> {
        self.totp_with(secret, &SystemClock)
    }

    /// Computes the TOTP code for `secret` at the time reported by `clock`.
    ///
    /// # Errors
    ///
    /// See [`steps`](Config::steps).
    pub fn totp_with<S: AsRef<[u8]>, C: Clock + ?Sized>(
        &self,
        secret: S,
        clock: &C,
    ) -> Result<Code> {
        self.totp_at(secret, clock.now())
    }

    /// Computes the TOTP code for `secret` at `now`.
    ///
    /// ```
    /// # use chrono::DateTime;
    /// # use onetime::Config;
    /// let config = Config::simple(8)?;
    /// let now = DateTime::from_timestamp(59, 0).unwrap();
    /// assert_eq!(config.totp_at("12345678901234567890", now)?.to_string(), "94287082");
    /// # Ok::<(), onetime::Error>(())
    /// ```
    ///
    /// # Errors
    ///
    /// See [`steps`](Config::steps).
    pub fn totp_at<S: AsRef<[u8]>>(&self, secret: S, now: DateTime<Utc>) -> Result<Code> {
        Ok(self.hotp(secret, self.steps(now)?))
    }
}
