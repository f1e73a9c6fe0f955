//! Independent runs over many configurations.

use crate::{SimConfig, SimReport, simulate};

/// Simulate every configuration in `configs`.
///
/// Reports come back in input order.  With the `parallel` Cargo feature the
/// runs are spread over Rayon's thread pool; each run owns its data, so the
/// reports are identical either way.
pub fn sweep(configs: &[SimConfig]) -> Vec<SimReport> {
    tracing::debug!(runs = configs.len(), "sweep started");

    #[cfg(not(feature = "parallel"))]
    {
        configs.iter().map(simulate).collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        configs.par_iter().map(simulate).collect()
    }
}
