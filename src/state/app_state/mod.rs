use crate::config::DEFAULT_BANNER_TTL;
use crate::core::form::FormValues;
use crate::core::schema::Schema;
use crate::core::user::SubmittedUser;
use crate::core::{Field, InputKind};
use crate::state::focus::FocusState;
use crate::state::submission::{SubmissionState, SubmissionStatus};
use crate::state::validation::FieldErrors;
use crate::widgets::inputs::button::ButtonInput;
use crate::widgets::inputs::checkbox::CheckboxInput;
use crate::widgets::inputs::text::{TextInput, TextMode};
use crate::widgets::traits::InteractiveNode;
use std::time::Duration;

pub const SUBMIT_ID: &str = "submit";
pub const SUBMIT_TEXT: &str = "Submit!";

/// Everything the form shows and edits. Owned by the runtime loop and only
/// mutated through the reducer.
pub struct AppState {
    schema: Schema,
    values: FormValues,
    errors: FieldErrors,
    users: Vec<SubmittedUser>,
    submit_enabled: bool,
    submission: SubmissionState,
    nodes: Vec<Box<dyn InteractiveNode>>,
    focus: FocusState,
    banner_ttl: Duration,
    should_exit: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_schema(Schema::registration())
    }

    pub fn with_schema(schema: Schema) -> Self {
        let nodes = registration_nodes();
        let focus = FocusState::from_ids(nodes.iter().map(|node| node.id().to_string()));
        let values = FormValues::default();
        let submit_enabled = schema.is_valid(&values);

        Self {
            schema,
            values,
            errors: FieldErrors::default(),
            users: Vec::new(),
            submit_enabled,
            submission: SubmissionState::default(),
            nodes,
            focus,
            banner_ttl: DEFAULT_BANNER_TTL,
            should_exit: false,
        }
    }

    pub fn with_banner_ttl(mut self, ttl: Duration) -> Self {
        self.banner_ttl = ttl;
        self
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn users(&self) -> &[SubmittedUser] {
        &self.users
    }

    pub fn submit_enabled(&self) -> bool {
        self.submit_enabled
    }

    pub fn submission_status(&self) -> SubmissionStatus {
        self.submission.status()
    }

    pub fn is_sending(&self) -> bool {
        self.submission.is_sending()
    }

    pub fn banner(&self) -> Option<&str> {
        self.submission.banner()
    }

    pub fn banner_ttl(&self) -> Duration {
        self.banner_ttl
    }

    pub fn nodes(&self) -> &[Box<dyn InteractiveNode>] {
        &self.nodes
    }

    pub fn focused_id(&self) -> Option<&str> {
        self.focus.current_id()
    }

    pub fn should_exit(&self) -> bool {
        self.should_exit
    }

    pub fn request_exit(&mut self) {
        self.should_exit = true;
    }

    fn node_mut(&mut self, id: &str) -> Option<&mut dyn InteractiveNode> {
        for node in &mut self.nodes {
            if node.id() == id {
                return Some(node.as_mut());
            }
        }
        None
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

fn registration_nodes() -> Vec<Box<dyn InteractiveNode>> {
    let mut nodes: Vec<Box<dyn InteractiveNode>> =
        Field::ALL.into_iter().map(build_input).collect();
    nodes.push(Box::new(ButtonInput::new(SUBMIT_ID, SUBMIT_TEXT)));
    nodes
}

fn build_input(field: Field) -> Box<dyn InteractiveNode> {
    let (id, label) = (field.as_str(), field.label());
    match field.kind() {
        InputKind::Text => Box::new(TextInput::new(id, label)),
        InputKind::Email => {
            Box::new(TextInput::new(id, label).with_placeholder("name@example.com"))
        }
        InputKind::Password => Box::new(TextInput::new(id, label).with_mode(TextMode::Password)),
        InputKind::Checkbox => Box::new(CheckboxInput::new(id, label)),
    }
}

mod navigation;
mod submission_runtime;
mod value_sync;
