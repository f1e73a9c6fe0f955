//! Build-type profiles: the fixed catalogues a verify is made of.
//!
//! | Profile    | Sub-builds                                                      | Per verify |
//! |------------|-----------------------------------------------------------------|-----------:|
//! | `Light`    | compile, unit-tests, lint                                       |    12 min  |
//! | `Standard` | compile, unit-tests, integration-tests, lint, docs              |    40 min  |
//! | `Heavy`    | compile ×3 platforms, unit, integration, e2e tests, packaging   |   137 min  |

use std::fmt;
use std::str::FromStr;

use bq_core::Duration;

use crate::WorkloadError;

/// One named entry in a profile catalogue.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SubBuild {
    pub name:     &'static str,
    pub duration: Duration,
}

const fn sub(name: &'static str, secs: u64) -> SubBuild {
    SubBuild { name, duration: Duration::from_secs(secs) }
}

const LIGHT: &[SubBuild] = &[
    sub("compile",    240),
    sub("unit-tests", 360),
    sub("lint",       120),
];

const STANDARD: &[SubBuild] = &[
    sub("compile",           480),
    sub("unit-tests",        600),
    sub("integration-tests", 900),
    sub("lint",              180),
    sub("docs",              240),
];

const HEAVY: &[SubBuild] = &[
    sub("compile-linux",     900),
    sub("compile-windows",   1200),
    sub("compile-macos",     1080),
    sub("unit-tests",        720),
    sub("integration-tests", 1500),
    sub("e2e-tests",         2400),
    sub("packaging",         420),
];

/// The closed set of workload catalogues a verify can be built from.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BuildProfile {
    Light,
    #[default]
    Standard,
    Heavy,
}

impl BuildProfile {
    pub const ALL: [BuildProfile; 3] = [BuildProfile::Light, BuildProfile::Standard, BuildProfile::Heavy];

    /// Lower-case label; also what [`FromStr`] accepts.
    pub fn name(self) -> &'static str {
        match self {
            BuildProfile::Light    => "light",
            BuildProfile::Standard => "standard",
            BuildProfile::Heavy    => "heavy",
        }
    }

    /// The catalogue, in the order its builds are queued.
    pub fn sub_builds(self) -> &'static [SubBuild] {
        match self {
            BuildProfile::Light    => LIGHT,
            BuildProfile::Standard => STANDARD,
            BuildProfile::Heavy    => HEAVY,
        }
    }

    /// Combined duration of one verify's builds if run back to back.
    pub fn verify_duration(self) -> Duration {
        self.sub_builds().iter().map(|s| s.duration).sum()
    }

    /// Number of builds each verify contributes to the queue.
    pub fn builds_per_verify(self) -> usize {
        self.sub_builds().len()
    }
}

impl FromStr for BuildProfile {
    type Err = WorkloadError;

    fn from_str(s: &str) -> Result<Self, WorkloadError> {
        let wanted = s.trim();
        BuildProfile::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| WorkloadError::UnknownProfile(wanted.to_owned()))
    }
}

impl fmt::Display for BuildProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
