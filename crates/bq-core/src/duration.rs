//! Simulation time model.
//!
//! # Design
//!
//! Every time value in the simulator is a whole number of seconds.  Build
//! durations come from a fixed catalogue and the scheduler only ever adds
//! them together, so integer arithmetic is exact and comparisons are O(1).
//!
//! Minutes are a presentation unit only: [`Duration::as_minutes`] truncates.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// A non-negative span of simulated time, in seconds.
///
/// Named after what it models rather than `std::time::Duration`, which it
/// converts into via [`From`].
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Duration(pub u64);

impl Duration {
    pub const ZERO: Duration = Duration(0);

    #[inline]
    pub const fn from_secs(secs: u64) -> Duration {
        Duration(secs)
    }

    #[inline]
    pub const fn from_mins(mins: u64) -> Duration {
        Duration(mins * 60)
    }

    #[inline]
    pub const fn as_secs(self) -> u64 {
        self.0
    }

    /// Whole minutes, truncating any remainder (`119 s → 1`).
    #[inline]
    pub const fn as_minutes(self) -> u64 {
        self.0 / 60
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// `self - rhs`, clamped at zero.
    #[inline]
    pub fn saturating_sub(self, rhs: Duration) -> Duration {
        Duration(self.0.saturating_sub(rhs.0))
    }
}

impl Add for Duration {
    type Output = Duration;
    #[inline]
    fn add(self, rhs: Duration) -> Duration {
        Duration(self.0 + rhs.0)
    }
}

impl AddAssign for Duration {
    #[inline]
    fn add_assign(&mut self, rhs: Duration) {
        self.0 += rhs.0;
    }
}

impl Sum for Duration {
    fn sum<I: Iterator<Item = Duration>>(iter: I) -> Duration {
        iter.fold(Duration::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Duration> for Duration {
    fn sum<I: Iterator<Item = &'a Duration>>(iter: I) -> Duration {
        iter.copied().sum()
    }
}

impl From<Duration> for std::time::Duration {
    fn from(d: Duration) -> std::time::Duration {
        std::time::Duration::from_secs(d.0)
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}
