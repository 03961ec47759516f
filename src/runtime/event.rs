use crate::client::executor::SubmissionCompletion;
use crate::core::{NodeId, value::Value};
use crate::terminal::TerminalEvent;

#[derive(Debug, Clone)]
pub struct ValueChange {
    pub target: NodeId,
    pub value: Value,
}

impl ValueChange {
    pub fn new(target: impl Into<NodeId>, value: Value) -> Self {
        Self {
            target: target.into(),
            value,
        }
    }
}

/// Actions emitted by widgets in `InteractionResult`.
/// These flow upward from widgets to the runtime.
#[derive(Debug, Clone)]
pub enum WidgetAction {
    ValueChanged { change: ValueChange },
    /// Widget signals it is done with its value; focus moves to the next input.
    InputDone,
    SubmitRequested,
}

/// Events produced outside the widget tree: background completions and
/// scheduler timers.
#[derive(Debug, Clone)]
pub enum SystemEvent {
    SubmissionFinished { completion: SubmissionCompletion },
    ClearBanner,
}

#[derive(Debug, Clone)]
pub enum AppEvent {
    Terminal(TerminalEvent),
    System(SystemEvent),
}
