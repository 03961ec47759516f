use super::AppState;
use crate::client::executor::{SubmissionCompletion, SubmissionRequest};
use crate::core::Field;

impl AppState {
    /// Starts a submission if the form is valid and nothing is in flight.
    pub fn submit(&mut self) -> Option<SubmissionRequest> {
        if !self.submit_enabled {
            tracing::debug!("submit ignored: form is invalid");
            return None;
        }
        let Some(run_id) = self.submission.begin() else {
            tracing::debug!("submit ignored: a submission is already in flight");
            return None;
        };

        tracing::info!(run_id, "submitting registration");
        Some(SubmissionRequest {
            run_id,
            payload: self.values.clone(),
        })
    }

    /// Folds a finished request back into the form. Completions for runs
    /// that are no longer in flight are dropped.
    pub fn submission_finished(&mut self, completion: SubmissionCompletion) -> bool {
        let SubmissionCompletion { run_id, result } = completion;
        if !self.submission.finish(run_id) {
            tracing::debug!(run_id, "dropping stale submission result");
            return false;
        }

        match result {
            Ok(user) => {
                tracing::info!(run_id, id = ?user.id(), "user created");
                self.users.push(user);
                self.values.reset();
                self.errors.clear();
                self.submit_enabled = self.schema.is_valid(&self.values);
                self.hydrate_widgets();
                self.focus.set_focus_by_id(Field::Firstname.as_str());
            }
            Err(err) => {
                tracing::warn!(run_id, error = %err, "submission failed");
                self.submission
                    .set_banner(format!("Could not create user: {err}"));
            }
        }
        true
    }

    pub fn clear_banner(&mut self) -> bool {
        self.submission.clear_banner()
    }
}
