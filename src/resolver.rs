//! Benchmarks and simulator root resolution.
//!
//! Search order: honor the configured variables (first one set wins, and it
//! must contain the marker file), otherwise derive the benchmarks root from
//! the install anchor and probe a fixed list of neighbours for the simulator.

use crate::env_bindings::{BENCHMARKS_VARS, EnvBindings, SIMULATOR_VARS, SNIPER_ROOT_VAR};
use crate::runtime::{self, MARKER_FILE, canonicalize_path, is_root};
use crate::ConfigurationError;
use std::fmt;
use std::fs;
use std::iter;
use std::path::{Path, PathBuf};

/// Sibling or child directory names that may hold the simulator checkout.
const SIMULATOR_DIRS: [&str; 2] = ["sniper", "snipersim"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RootKind {
    Benchmarks,
    Simulator,
}

/// Non-fatal: a configured benchmarks root differs from the one implied by
/// the install location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RootMismatch {
    pub variable: String,
    pub configured: PathBuf,
    pub local: PathBuf,
}

impl fmt::Display for RootMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Warning: {} is different from current script directory [{}]!=[{}]",
            self.variable,
            self.configured.display(),
            self.local.display()
        )
    }
}

/// A resolved root plus any warning raised along the way.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolved {
    pub path: PathBuf,
    pub warning: Option<RootMismatch>,
}

impl Resolved {
    fn quiet(path: PathBuf) -> Self {
        Self {
            path,
            warning: None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct RootResolver {
    anchor: PathBuf,
    env: EnvBindings,
}

impl RootResolver {
    /// `anchor` is the install location: the local benchmarks root sits
    /// three directories above it.
    pub fn new(anchor: impl Into<PathBuf>, env: EnvBindings) -> Self {
        Self {
            anchor: anchor.into(),
            env,
        }
    }

    /// Resolver for the current process: anchored at the running executable
    /// and reading the real environment.
    pub fn from_process() -> Result<Self, ConfigurationError> {
        Ok(Self::new(runtime::install_anchor()?, EnvBindings::from_process()))
    }

    pub fn local_benchmarks_root(&self) -> PathBuf {
        runtime::local_root_for(&self.anchor)
    }

    pub fn resolve(&self, kind: RootKind) -> Result<Resolved, ConfigurationError> {
        match kind {
            RootKind::Benchmarks => self.resolve_benchmarks_root(),
            RootKind::Simulator => self.resolve_simulator_root(),
        }
    }

    pub fn resolve_benchmarks_root(&self) -> Result<Resolved, ConfigurationError> {
        let Some(configured) = self.configured_root(BENCHMARKS_VARS) else {
            return Ok(Resolved::quiet(self.local_benchmarks_root()));
        };
        let (variable, path) = configured?;

        let local = self.local_benchmarks_root();
        let warning = (path != local).then(|| RootMismatch {
            variable: variable.to_string(),
            configured: path.clone(),
            local,
        });
        Ok(Resolved { path, warning })
    }

    pub fn resolve_simulator_root(&self) -> Result<Resolved, ConfigurationError> {
        if let Some(configured) = self.configured_root(SIMULATOR_VARS) {
            let (_, path) = configured?;
            return Ok(Resolved::quiet(path));
        }

        let bench = self.resolve_benchmarks_root()?;
        let path = simulator_candidates(&bench.path)
            .find_map(|candidate| marker_dir(&candidate))
            .ok_or_else(|| ConfigurationError::undetermined(SNIPER_ROOT_VAR))?;
        Ok(Resolved {
            path,
            warning: bench.warning,
        })
    }

    pub fn resolve_simulation_root(&self) -> Result<Resolved, ConfigurationError> {
        self.resolve_simulator_root()
    }

    /// First variable in `names` that is set, validated against the marker
    /// file. `None` when none of them is set.
    fn configured_root<'a>(
        &'a self,
        names: &[&'a str],
    ) -> Option<Result<(&'a str, PathBuf), ConfigurationError>> {
        let (variable, value) = self.env.first_of(names)?;
        let root = Path::new(value);
        if !is_root(root) {
            return Some(Err(ConfigurationError::invalid_root(variable, root)));
        }
        Some(Ok((variable, canonicalize_path(root))))
    }
}

/// Marker locations to probe, in priority order, relative to `bench`.
pub fn simulator_candidates(bench: &Path) -> impl Iterator<Item = PathBuf> + '_ {
    SIMULATOR_DIRS
        .iter()
        .flat_map(move |dir| [bench.join("..").join(dir), bench.join(dir)])
        .chain(iter::once(bench.join("..")))
        .map(|dir| dir.join(MARKER_FILE))
}

/// Directory holding `marker` once symlinks are resolved, if it is a file.
fn marker_dir(marker: &Path) -> Option<PathBuf> {
    let canonical = fs::canonicalize(marker).ok()?;
    if !canonical.is_file() {
        return None;
    }
    canonical.parent().map(Path::to_path_buf)
}
