//! A single queued unit of work.

use crate::{Duration, VerifyId};

/// One build belonging to a verify.
///
/// Fields are private so a `Build` cannot change after the workload generator
/// produced it; the scheduler only ever moves copies around.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Build {
    verify:   VerifyId,
    duration: Duration,
}

impl Build {
    pub fn new(verify: VerifyId, duration: Duration) -> Self {
        Self { verify, duration }
    }

    #[inline]
    pub fn verify(&self) -> VerifyId {
        self.verify
    }

    #[inline]
    pub fn duration(&self) -> Duration {
        self.duration
    }
}
