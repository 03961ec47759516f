use crate::client::SubmissionClient;
use crate::core::form::FormValues;
use crate::core::user::SubmittedUser;
use crate::error::SubmitError;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRequest {
    pub run_id: u64,
    pub payload: FormValues,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionCompletion {
    pub run_id: u64,
    pub result: Result<SubmittedUser, SubmitError>,
}

/// Runs submissions on worker threads; completions are collected by the
/// runtime loop without blocking.
pub struct SubmissionExecutor {
    client: Arc<dyn SubmissionClient>,
    completion_tx: Sender<SubmissionCompletion>,
    completion_rx: Receiver<SubmissionCompletion>,
}

impl SubmissionExecutor {
    pub fn new(client: Arc<dyn SubmissionClient>) -> Self {
        let (completion_tx, completion_rx) = mpsc::channel::<SubmissionCompletion>();
        Self {
            client,
            completion_tx,
            completion_rx,
        }
    }

    pub fn spawn(&self, request: SubmissionRequest) {
        let client = Arc::clone(&self.client);
        let completion_tx = self.completion_tx.clone();
        std::thread::spawn(move || {
            let result = client.create_user(&request.payload);
            let _ = completion_tx.send(SubmissionCompletion {
                run_id: request.run_id,
                result,
            });
        });
    }

    pub fn drain_ready(&self) -> Vec<SubmissionCompletion> {
        let mut out = Vec::<SubmissionCompletion>::new();
        loop {
            match self.completion_rx.try_recv() {
                Ok(completion) => out.push(completion),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        out
    }
}
