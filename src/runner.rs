use std::process::{Command, Stdio};

use anyhow::Result;

use crate::clock::Clock;
use crate::errors::BenchError;
use crate::stats::{self, TrimmedStats};
use crate::types::{CommandSpec, RunConfig};

/// Trimmed statistics for one benchmarked command.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandReport {
    pub command: String,
    pub stats: TrimmedStats,
}

/// Run the configured commands `iterations` times each, strictly
/// sequentially, and reduce every command's timing series to trimmed
/// statistics.
///
/// A child's exit status does not affect the run: failed or not-found
/// commands are timed like any other and flagged with a warning on
/// stderr. There is no timeout — a hung child blocks the benchmark until
/// it exits or the tool is killed.
pub fn run_benchmark(config: &RunConfig, clock: &impl Clock) -> Result<Vec<CommandReport>> {
    let mut series: Vec<Vec<u64>> = config
        .commands
        .iter()
        .map(|_| Vec::with_capacity(config.iterations as usize))
        .collect();

    for iteration in 0..config.iterations {
        for (slot, spec) in config.commands.iter().enumerate() {
            let mut child = build_command(spec);
            let (status, elapsed_ms) = timed(clock, || child.status());
            let status = status.map_err(|source| BenchError::ShellSpawn {
                command: spec.program.clone(),
                source,
            })?;

            // Recorded regardless of the exit status: timing a command
            // that fails fast is still a measurement.
            series[slot].push(elapsed_ms);

            if !status.success() {
                eprintln!(
                    "warning: '{}' exited with {} on iteration {}",
                    spec.program, status, iteration
                );
            }
        }
    }

    let trim = stats::trim_count(config.iterations);
    let reports = config
        .commands
        .iter()
        .zip(series)
        .map(|(spec, mut samples)| {
            samples.sort_unstable();
            let kept = stats::trim_outliers(&samples, trim);
            CommandReport {
                command: spec.program.clone(),
                stats: TrimmedStats::compute(kept, config.precision),
            }
        })
        .collect();

    Ok(reports)
}

/// Two clock readings around `f`; elapsed time truncated to whole
/// milliseconds.
fn timed<T>(clock: &impl Clock, f: impl FnOnce() -> T) -> (T, u64) {
    let start = clock.now();
    let value = f();
    let elapsed = clock.now().saturating_sub(start);
    (value, elapsed.as_millis() as u64)
}

/// Structured launch configuration: the command line goes to the system
/// shell, the working directory and stdout suppression are set on the
/// process builder rather than spliced into the command string.
fn build_command(spec: &CommandSpec) -> Command {
    let mut command = shell_command();
    command.arg(spec.shell_line());
    if let Some(dir) = &spec.working_dir {
        command.current_dir(dir);
    }
    command.stdout(Stdio::null());
    command
}

#[cfg(not(windows))]
fn shell_command() -> Command {
    let mut command = Command::new("sh");
    command.arg("-c");
    command
}

#[cfg(windows)]
fn shell_command() -> Command {
    let mut command = Command::new("cmd");
    command.arg("/C");
    command
}
