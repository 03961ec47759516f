use crate::client::executor::SubmissionRequest;
use crate::runtime::event::WidgetAction;
use crate::runtime::scheduler::SchedulerCommand;

#[derive(Debug, Clone)]
pub enum Effect {
    Action(WidgetAction),
    /// Start the request on the background executor.
    Submit(SubmissionRequest),
    Schedule(SchedulerCommand),
    RequestRender,
}
