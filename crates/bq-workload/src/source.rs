//! `WorkloadSource`: the producer side of the build queue.
//!
//! The scheduler never cares where its queue came from.  Anything that can
//! hand over an ordered `Vec<Build>` implements [`WorkloadSource`]; the two
//! implementations here cover the profile-driven case and explicit queues.

use bq_core::{Build, VerifyId};

use crate::BuildProfile;

/// Produces the ordered build queue for one simulation run.
///
/// Implementations must be deterministic: calling `builds` twice returns the
/// same queue.
pub trait WorkloadSource {
    fn builds(&self) -> Vec<Build>;
}

impl<W: WorkloadSource + ?Sized> WorkloadSource for &W {
    fn builds(&self) -> Vec<Build> {
        (**self).builds()
    }
}

// ── ProfileWorkload ───────────────────────────────────────────────────────────

/// `verify_count` verifies, each made of `profile`'s sub-builds.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProfileWorkload {
    pub verify_count: u32,
    pub profile:      BuildProfile,
}

impl ProfileWorkload {
    pub fn new(verify_count: u32, profile: BuildProfile) -> Self {
        Self { verify_count, profile }
    }

    /// Queue length this workload will produce.
    pub fn build_count(&self) -> usize {
        self.verify_count as usize * self.profile.builds_per_verify()
    }
}

impl WorkloadSource for ProfileWorkload {
    /// Verify-major order; verify ids run `1..=verify_count`.
    fn builds(&self) -> Vec<Build> {
        let catalogue = self.profile.sub_builds();
        let mut queue = Vec::with_capacity(self.build_count());
        for v in 1..=self.verify_count {
            let verify = VerifyId(v);
            queue.extend(catalogue.iter().map(|s| Build::new(verify, s.duration)));
        }
        queue
    }
}

// ── CustomWorkload ────────────────────────────────────────────────────────────

/// An explicit queue, passed through unchanged.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CustomWorkload(pub Vec<Build>);

impl WorkloadSource for CustomWorkload {
    fn builds(&self) -> Vec<Build> {
        self.0.clone()
    }
}

impl From<Vec<Build>> for CustomWorkload {
    fn from(builds: Vec<Build>) -> Self {
        CustomWorkload(builds)
    }
}
