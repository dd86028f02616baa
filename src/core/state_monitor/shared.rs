use parking_lot::Mutex;
use std::sync::Arc;

use super::runner::{CycleReport, StateMonitor};
use super::sample::Sample;

/// A [`StateMonitor`] that can be driven from several threads.
///
/// The lock is held for the whole cycle, so each evaluation sees exactly one
/// previous sample and debounce counters move one cycle at a time.
#[derive(Clone)]
pub struct SharedMonitor {
    inner: Arc<Mutex<StateMonitor>>,
}

impl SharedMonitor {
    pub fn new(monitor: StateMonitor) -> Self {
        Self {
            inner: Arc::new(Mutex::new(monitor)),
        }
    }

    pub fn evaluate(&self, sample: Sample) -> CycleReport {
        self.inner.lock().evaluate(sample)
    }

    pub fn execute(&self, sample: Sample) -> Sample {
        self.inner.lock().execute(sample)
    }

    pub fn cycles(&self) -> u64 {
        self.inner.lock().cycles()
    }
}
