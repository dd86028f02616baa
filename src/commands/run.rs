//! Monitor command handler.
//!
//! Reads one JSON sample per line and runs one monitoring cycle per sample.

use anyhow::{Context, Result};
use clap::ArgMatches;
use colored::Colorize;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use std::time::Duration;

use crate::core::dispatch::{DispatchOutcome, Dispatcher};
use crate::core::state_monitor::{Sample, StateMonitor};

/// Totals over a whole run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub cycles: u64,
    pub alerts: usize,
    pub failed_checks: usize,
    pub skipped_lines: usize,
}

pub fn execute(matches: &ArgMatches) -> Result<()> {
    let config = super::load_config(matches)?;
    let interval_ms = matches.get_one::<u64>("interval").copied().unwrap_or(0);

    let mut monitor = if matches.get_flag("dry-run") {
        StateMonitor::with_dispatcher(
            config.thresholds.clone(),
            config.identity.clone(),
            Dispatcher::log_only(),
        )
    } else {
        StateMonitor::new(&config).context("Failed to start state monitor")?
    };

    let reader: Box<dyn BufRead> = match matches.get_one::<PathBuf>("input") {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("Failed to open input: {:?}", path))?,
        )),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let summary = run_samples(&mut monitor, reader, Duration::from_millis(interval_ms))?;

    println!(
        "{} {} cycles, {} alerts, {} failed checks, {} skipped lines",
        "Done:".green().bold(),
        summary.cycles,
        summary.alerts,
        summary.failed_checks,
        summary.skipped_lines
    );
    Ok(())
}

/// Feed every sample in `reader` to the monitor, pausing `interval` between cycles
pub fn run_samples<R: BufRead>(
    monitor: &mut StateMonitor,
    reader: R,
    interval: Duration,
) -> Result<RunSummary> {
    let mut summary = RunSummary::default();

    for (line_no, line) in reader.lines().enumerate() {
        let line = line.context("Failed to read sample input")?;
        if line.trim().is_empty() {
            continue;
        }

        let sample = match Sample::from_json(&line) {
            Ok(sample) => sample,
            Err(e) => {
                log::error!("line={} kind={} error=\"{}\" skipping sample", line_no + 1, e.kind(), e);
                summary.skipped_lines += 1;
                continue;
            }
        };

        if summary.cycles > 0 && !interval.is_zero() {
            std::thread::sleep(interval);
        }

        let report = monitor.evaluate(sample);
        summary.cycles += 1;
        summary.alerts += report.alerts.len();
        summary.failed_checks += report.failures.len();

        for alert in &report.alerts {
            let outcome = match alert.outcome {
                DispatchOutcome::Delivered => "sent".green(),
                DispatchOutcome::LogOnly => "logged".cyan(),
                DispatchOutcome::Failed => "undelivered".red(),
            };
            println!(
                "{} {} [{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string().dimmed(),
                alert.check.name().yellow().bold(),
                outcome,
                alert.message.replace('\n', " | ")
            );
        }
    }

    Ok(summary)
}
