#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sending {
        run_id: u64,
    },
}

/// Lifecycle of the outbound request. At most one run is in flight.
#[derive(Debug, Default, Clone)]
pub struct SubmissionState {
    status: SubmissionStatus,
    next_run_id: u64,
    banner: Option<String>,
}

impl SubmissionState {
    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn is_sending(&self) -> bool {
        matches!(self.status, SubmissionStatus::Sending { .. })
    }

    /// Moves Idle to Sending and returns the new run id; `None` while a run
    /// is already in flight.
    pub fn begin(&mut self) -> Option<u64> {
        if self.is_sending() {
            return None;
        }
        self.next_run_id = self.next_run_id.wrapping_add(1);
        let run_id = self.next_run_id;
        self.status = SubmissionStatus::Sending { run_id };
        self.banner = None;
        Some(run_id)
    }

    /// Returns to Idle if `run_id` is the in-flight run.
    pub fn finish(&mut self, run_id: u64) -> bool {
        match self.status {
            SubmissionStatus::Sending { run_id: current } if current == run_id => {
                self.status = SubmissionStatus::Idle;
                true
            }
            _ => false,
        }
    }

    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    pub fn set_banner(&mut self, message: impl Into<String>) {
        self.banner = Some(message.into());
    }

    pub fn clear_banner(&mut self) -> bool {
        self.banner.take().is_some()
    }
}
