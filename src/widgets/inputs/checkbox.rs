use crate::core::value::Value;
use crate::terminal::{KeyCode, KeyEvent};
use crate::ui::span::Span;
use crate::ui::style::{Color, Style};
use crate::widgets::base::InputBase;
use crate::widgets::traits::{
    DrawOutput, Drawable, InteractionResult, Interactive, RenderContext,
};

pub struct CheckboxInput {
    base: InputBase,
    checked: bool,
}

impl CheckboxInput {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            base: InputBase::new(id, label),
            checked: false,
        }
    }

    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }
}

impl Drawable for CheckboxInput {
    fn id(&self) -> &str {
        self.base.id()
    }

    fn label(&self) -> &str {
        self.base.label()
    }

    fn draw(&self, ctx: &RenderContext) -> DrawOutput {
        let focused = self.base.is_focused(ctx);
        let prefix_style = if focused {
            Style::new().color(Color::Cyan).bold()
        } else {
            Style::default()
        };
        let (symbol, style) = if self.checked {
            ("[x]", Style::new().color(Color::Green))
        } else {
            ("[ ]", Style::default())
        };

        DrawOutput {
            lines: vec![vec![
                Span::styled(self.base.prefix(focused), prefix_style),
                Span::styled(symbol, style),
            ]],
        }
    }
}

impl Interactive for CheckboxInput {
    fn on_key(&mut self, key: KeyEvent) -> InteractionResult {
        match key.code {
            KeyCode::Char(' ') => {
                self.checked = !self.checked;
                InteractionResult::value_changed(self.base.id(), Value::Bool(self.checked))
            }
            KeyCode::Enter => InteractionResult::input_done(),
            _ => InteractionResult::ignored(),
        }
    }

    fn value(&self) -> Option<Value> {
        Some(Value::Bool(self.checked))
    }

    fn set_value(&mut self, value: Value) {
        self.checked = value.to_bool();
    }
}

#[cfg(test)]
mod tests {
    use super::CheckboxInput;
    use crate::core::value::Value;
    use crate::runtime::event::WidgetAction;
    use crate::terminal::{KeyCode, KeyEvent};
    use crate::ui::span::line_text;
    use crate::widgets::traits::{Drawable, Interactive, RenderContext};

    #[test]
    fn space_toggles_and_reports_bool() {
        let mut checkbox = CheckboxInput::new("terms", "Terms of Service");
        let result = checkbox.on_key(KeyEvent::plain(KeyCode::Char(' ')));

        let [WidgetAction::ValueChanged { change }] = result.actions.as_slice() else {
            panic!("expected a value change");
        };
        assert_eq!(change.target, "terms");
        assert_eq!(change.value, Value::Bool(true));
        assert_eq!(checkbox.value(), Some(Value::Bool(true)));
    }

    #[test]
    fn draws_check_state() {
        let mut checkbox = CheckboxInput::new("terms", "Terms of Service");
        let ctx = RenderContext::default();
        assert_eq!(
            line_text(&checkbox.draw(&ctx).lines[0]),
            "  Terms of Service: [ ]"
        );

        checkbox.set_value(Value::from("yes"));
        assert_eq!(
            line_text(&checkbox.draw(&ctx).lines[0]),
            "  Terms of Service: [x]"
        );
    }

    #[test]
    fn other_keys_are_ignored() {
        let mut checkbox = CheckboxInput::new("terms", "Terms of Service").with_checked(true);
        let result = checkbox.on_key(KeyEvent::plain(KeyCode::Char('x')));
        assert!(!result.handled);
        assert_eq!(checkbox.value(), Some(Value::Bool(true)));
    }
}
