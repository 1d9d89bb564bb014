//! Snapshot of the environment variables consulted during resolution.
//!
//! Resolution reads the environment once, up front, so a resolver can be
//! built for the current process or for an explicit set of bindings without
//! touching the real environment. Values are kept as raw `OsString`s: a root
//! path does not have to be valid UTF-8 to be validated.

use std::collections::BTreeMap;
use std::env;
use std::ffi::{OsStr, OsString};

pub const BENCHMARKS_ROOT_VAR: &str = "BENCHMARKS_ROOT";
pub const SNIPER_ROOT_VAR: &str = "SNIPER_ROOT";
pub const GRAPHITE_ROOT_VAR: &str = "GRAPHITE_ROOT";

/// Variables consulted for the benchmarks root, first-defined-wins.
pub const BENCHMARKS_VARS: &[&str] = &[BENCHMARKS_ROOT_VAR];

/// Variables consulted for the simulator root, first-defined-wins.
pub const SIMULATOR_VARS: &[&str] = &[SNIPER_ROOT_VAR, GRAPHITE_ROOT_VAR];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvBindings {
    values: BTreeMap<String, OsString>,
}

impl EnvBindings {
    /// No variables set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Capture every variable the resolver consults from the process
    /// environment.
    pub fn from_process() -> Self {
        let mut bindings = Self::empty();
        for name in BENCHMARKS_VARS.iter().chain(SIMULATOR_VARS) {
            if let Some(value) = env_non_empty(name) {
                bindings = bindings.with(name, value);
            }
        }
        bindings
    }

    /// Bind `name` to `value`. Empty values leave the variable unset.
    pub fn with(mut self, name: &str, value: impl Into<OsString>) -> Self {
        let value = value.into();
        if value.is_empty() {
            self.values.remove(name);
        } else {
            self.values.insert(name.to_string(), value);
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&OsStr> {
        self.values.get(name).map(OsString::as_os_str)
    }

    /// First bound variable in `names`, with its value.
    pub fn first_of<'a>(&'a self, names: &[&'a str]) -> Option<(&'a str, &'a OsStr)> {
        names
            .iter()
            .find_map(|name| self.get(name).map(|value| (*name, value)))
    }
}

fn env_non_empty(name: &str) -> Option<OsString> {
    env::var_os(name).filter(|value| !value.is_empty())
}
