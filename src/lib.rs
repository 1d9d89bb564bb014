//! Root discovery for the benchmarks tree and its companion simulator.
//!
//! The crate answers two questions: where is the benchmarks checkout, and
//! where is the simulator (`run-sniper`) checkout it should drive. Both honor
//! environment overrides (`BENCHMARKS_ROOT`, `SNIPER_ROOT`, `GRAPHITE_ROOT`)
//! and fall back to the layout around the installed `env-setup` binary. The
//! free functions here read the real process state; `RootResolver` takes an
//! explicit anchor and environment for embedding and tests.

use std::path::PathBuf;

pub mod cli_support;
pub mod env_bindings;
pub mod error;
pub mod resolver;
pub mod runtime;

pub use env_bindings::{
    BENCHMARKS_ROOT_VAR, BENCHMARKS_VARS, EnvBindings, GRAPHITE_ROOT_VAR, SIMULATOR_VARS,
    SNIPER_ROOT_VAR,
};
pub use error::ConfigurationError;
pub use resolver::{Resolved, RootKind, RootMismatch, RootResolver, simulator_candidates};
pub use runtime::{MARKER_FILE, is_root};

/// Benchmarks root for the current process.
///
/// A configured `BENCHMARKS_ROOT` that disagrees with the install location is
/// still returned; the mismatch is reported on stderr.
pub fn resolve_benchmarks_root() -> Result<PathBuf, ConfigurationError> {
    let resolved = RootResolver::from_process()?.resolve_benchmarks_root()?;
    Ok(report_warning(resolved))
}

/// Simulator root for the current process, from `SNIPER_ROOT`,
/// `GRAPHITE_ROOT`, or the directories around the benchmarks root.
pub fn resolve_simulator_root() -> Result<PathBuf, ConfigurationError> {
    let resolved = RootResolver::from_process()?.resolve_simulator_root()?;
    Ok(report_warning(resolved))
}

/// Alias of [`resolve_simulator_root`].
pub fn resolve_simulation_root() -> Result<PathBuf, ConfigurationError> {
    resolve_simulator_root()
}

fn report_warning(resolved: Resolved) -> PathBuf {
    if let Some(warning) = &resolved.warning {
        eprintln!("{warning}");
    }
    resolved.path
}
