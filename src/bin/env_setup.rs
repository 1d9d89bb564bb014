//! Prints the benchmarks and simulator roots for shell callers.
//!
//! With no options the tool emits a JSON status record. `--benchmarks`,
//! `--sniper` and `--sim` print bare paths without a trailing newline so
//! scripts can use `$(env-setup --sniper)` directly.

use anyhow::{Context, Result};
use bench_roots::cli_support::{RootsRecord, parse_requests, usage};
use bench_roots::{Resolved, RootKind, RootResolver};
use std::env;
use std::io::{self, Write};
use std::path::PathBuf;

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut args = env::args_os();
    let program = args
        .next()
        .map(|arg| arg.to_string_lossy().into_owned())
        .unwrap_or_else(|| "env-setup".to_string());
    let requests = match parse_requests(args) {
        Ok(requests) => requests,
        Err(err) => {
            println!("{err}");
            print!("{}", usage(&program));
            std::process::exit(1);
        }
    };

    let resolver = RootResolver::from_process()?;
    if requests.is_empty() {
        return print_record(&resolver);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for kind in requests {
        let path = match resolver.resolve(kind) {
            Ok(resolved) => report(resolved),
            Err(err) if kind == RootKind::Benchmarks => {
                return Err(err).context("Unable to resolve the benchmarks root");
            }
            Err(err) => {
                out.flush()?;
                eprintln!("ConfigurationError: {err}");
                std::process::exit(1);
            }
        };
        // Raw bytes, so non-UTF-8 roots survive `$(...)` substitution.
        out.write_all(path.as_os_str().as_encoded_bytes())?;
    }
    out.flush()?;
    Ok(())
}

fn print_record(resolver: &RootResolver) -> Result<()> {
    let benchmarks = benchmarks_root(resolver)?;
    // Simulator failures leave the record's simulator entries empty.
    let simulator = resolver.resolve_simulator_root().ok().map(report);
    let record = RootsRecord::new(&benchmarks, simulator.as_deref());
    println!("{}", serde_json::to_string(&record)?);
    Ok(())
}

fn benchmarks_root(resolver: &RootResolver) -> Result<PathBuf> {
    let resolved = resolver
        .resolve_benchmarks_root()
        .context("Unable to resolve the benchmarks root")?;
    Ok(report(resolved))
}

fn report(resolved: Resolved) -> PathBuf {
    if let Some(warning) = &resolved.warning {
        eprintln!("{warning}");
    }
    resolved.path
}
