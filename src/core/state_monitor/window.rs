use super::sample::Sample;

/// Two-slot holder for the previous and current sample
#[derive(Debug, Clone, Default)]
pub struct SampleWindow {
    previous: Option<Sample>,
    current: Option<Sample>,
}

impl SampleWindow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `sample` current and return `(current, previous)`. The old
    /// current sample becomes previous; on the first cycle previous is a
    /// copy of current.
    pub fn advance(&mut self, sample: Sample) -> (&Sample, &Sample) {
        let previous = self.current.take().unwrap_or_else(|| sample.clone());
        let previous = self.previous.insert(previous);
        let current = self.current.insert(sample);
        (&*current, &*previous)
    }

    /// `(current, previous)` once a sample has been pushed
    pub fn pair(&self) -> Option<(&Sample, &Sample)> {
        match (&self.current, &self.previous) {
            (Some(current), Some(previous)) => Some((current, previous)),
            _ => None,
        }
    }

    pub fn current(&self) -> Option<&Sample> {
        self.current.as_ref()
    }

    pub fn previous(&self) -> Option<&Sample> {
        self.previous.as_ref()
    }
}
