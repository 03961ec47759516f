use crate::widgets::traits::RenderContext;
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone)]
pub struct InputBase {
    id: String,
    label: String,
}

impl InputBase {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_focused(&self, ctx: &RenderContext) -> bool {
        ctx.focused_id.as_deref() == Some(self.id.as_str())
    }

    pub fn focus_marker(&self, focused: bool) -> &'static str {
        if focused { ">" } else { " " }
    }

    /// Text drawn before the value, e.g. `"> Label: "`.
    pub fn prefix(&self, focused: bool) -> String {
        format!("{} {}: ", self.focus_marker(focused), self.label)
    }

    pub fn prefix_width(&self) -> usize {
        // Focus marker and separator are single-width in both states.
        UnicodeWidthStr::width(self.label.as_str()) + 4
    }
}
