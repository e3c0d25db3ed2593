/// Number of successful submissions since the handler was installed.
/// Only ever moves forward; nothing persists it.
#[derive(Debug, Default)]
pub struct SubmissionCounter {
    count: u64,
}

impl SubmissionCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> u64 {
        self.count
    }

    /// Adds one and returns the new value.
    pub fn increment(&mut self) -> u64 {
        self.count += 1;
        self.count
    }
}
