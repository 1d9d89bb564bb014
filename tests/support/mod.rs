use anyhow::{Context, Result, bail};
use bench_roots::{BENCHMARKS_VARS, MARKER_FILE, SIMULATOR_VARS};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

pub fn helper_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_env-setup"))
}

/// `env-setup` with every root variable cleared so the host environment
/// cannot leak into a test.
pub fn env_setup_command() -> Command {
    let mut cmd = Command::new(helper_binary());
    for name in BENCHMARKS_VARS.iter().chain(SIMULATOR_VARS) {
        cmd.env_remove(name);
    }
    cmd
}

pub fn run_command(mut cmd: Command) -> Result<Output> {
    let output = cmd
        .output()
        .with_context(|| format!("failed to run command: {:?}", cmd))?;
    if output.status.success() {
        Ok(output)
    } else {
        bail!(
            "command {:?} failed: status {:?}\nstdout: {}\nstderr: {}",
            cmd,
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        )
    }
}

/// Create `dir` (and parents) with a marker file inside; returns the
/// canonical directory.
pub fn mark_root(dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    File::create(dir.join(MARKER_FILE))?;
    Ok(fs::canonicalize(dir)?)
}

pub fn stdout_text(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr_text(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
