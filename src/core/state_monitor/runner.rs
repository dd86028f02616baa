//! Per-cycle evaluation of all checks.

use crate::core::config::{Identity, MonitorConfig, Thresholds};
use crate::core::dispatch::{DispatchOutcome, Dispatcher};
use crate::error::{MonitorError, Result};

use super::checks::{run_check, CheckKind, CheckStates};
use super::formatter::MessageFormatter;
use super::sample::Sample;
use super::window::SampleWindow;

/// An alert produced by a check during a cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FiredAlert {
    pub check: CheckKind,
    /// Formatted text, header included
    pub message: String,
    pub outcome: DispatchOutcome,
}

/// A check that could not be evaluated during a cycle
#[derive(Debug)]
pub struct CheckFailure {
    pub check: CheckKind,
    pub error: MonitorError,
}

/// Everything that happened during one cycle
#[derive(Debug)]
pub struct CycleReport {
    /// The input sample, unchanged
    pub sample: Sample,
    pub alerts: Vec<FiredAlert>,
    pub failures: Vec<CheckFailure>,
}

impl CycleReport {
    pub fn fired(&self, check: CheckKind) -> bool {
        self.alerts.iter().any(|a| a.check == check)
    }

    pub fn failed(&self, check: CheckKind) -> bool {
        self.failures.iter().any(|f| f.check == check)
    }
}

/// Stateful monitor run once per cycle by the scheduler.
///
/// Holds the previous sample and the per-check debounce state. A failing
/// check or delivery is logged and never stops the cycle.
pub struct StateMonitor {
    thresholds: Thresholds,
    formatter: MessageFormatter,
    dispatcher: Dispatcher,
    states: CheckStates,
    window: SampleWindow,
    cycles: u64,
}

impl StateMonitor {
    /// Build from configuration; only configuration errors are fatal
    pub fn new(config: &MonitorConfig) -> Result<Self> {
        config.validate()?;
        let dispatcher = Dispatcher::from_config(&config.sender)?;
        Ok(Self::with_dispatcher(
            config.thresholds.clone(),
            config.identity.clone(),
            dispatcher,
        ))
    }

    pub fn with_dispatcher(
        thresholds: Thresholds,
        identity: Identity,
        dispatcher: Dispatcher,
    ) -> Self {
        Self {
            thresholds,
            formatter: MessageFormatter::new(identity),
            dispatcher,
            states: CheckStates::default(),
            window: SampleWindow::new(),
            cycles: 0,
        }
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    pub fn formatter(&self) -> &MessageFormatter {
        &self.formatter
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    pub fn states(&self) -> &CheckStates {
        &self.states
    }

    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Run one cycle and hand the sample back unchanged
    pub fn execute(&mut self, sample: Sample) -> Sample {
        self.evaluate(sample).sample
    }

    /// Run every check against the new sample and the one before it
    pub fn evaluate(&mut self, sample: Sample) -> CycleReport {
        self.cycles += 1;
        let (current, previous) = self.window.advance(sample);

        let mut alerts = Vec::new();
        let mut failures = Vec::new();

        for check in CheckKind::ALL {
            match run_check(check, current, previous, &self.thresholds, &mut self.states) {
                Ok(Some(raw)) => {
                    log::info!("check={} alert: {}", check, raw);
                    let message = self.formatter.format(&raw);
                    let outcome = self.dispatcher.dispatch(&message);
                    alerts.push(FiredAlert {
                        check,
                        message,
                        outcome,
                    });
                }
                Ok(None) => {}
                Err(error) => {
                    let level = if error.is_reading_error() {
                        log::Level::Warn
                    } else {
                        log::Level::Error
                    };
                    log::log!(
                        level,
                        "check={} kind={} error=\"{}\" current={} previous={}",
                        check,
                        error.kind(),
                        error,
                        current,
                        previous
                    );
                    failures.push(CheckFailure { check, error });
                }
            }
        }

        CycleReport {
            sample: current.clone(),
            alerts,
            failures,
        }
    }
}
