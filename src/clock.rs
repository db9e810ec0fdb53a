//! Time sources for TOTP.

use chrono::{DateTime, Utc};

/// Source of the current time.
///
/// TOTP codes depend on the wall clock. Taking the clock as a parameter keeps the engine pure
/// and lets tests pin time with [`FixedClock`].
pub trait Clock {
    /// The current moment.
    fn now(&self) -> DateTime<Utc>;
}

/// The system wall clock.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock stopped at a single moment.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

impl From<DateTime<Utc>> for FixedClock {
    fn from(now: DateTime<Utc>) -> Self {
        Self(now)
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}
