use crate::runtime::event::WidgetAction;
use crate::terminal::{KeyCode, KeyEvent};
use crate::ui::span::Span;
use crate::ui::style::{Color, Style};
use crate::widgets::base::InputBase;
use crate::widgets::traits::{
    DrawOutput, Drawable, InteractionResult, Interactive, RenderContext,
};

/// Submit button. Emits `SubmitRequested`; whether a submission actually
/// starts is decided by the reducer, so a disabled button is only a style.
pub struct ButtonInput {
    base: InputBase,
    text: String,
}

impl ButtonInput {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            base: InputBase::new(id, label.clone()),
            text: label,
        }
    }
}

impl Drawable for ButtonInput {
    fn id(&self) -> &str {
        self.base.id()
    }

    fn label(&self) -> &str {
        self.base.label()
    }

    fn draw(&self, ctx: &RenderContext) -> DrawOutput {
        let focused = self.base.is_focused(ctx);
        let disabled = ctx.is_disabled(self.base.id());
        let style = match (focused, disabled) {
            (_, true) => Style::new().color(Color::DarkGrey).dim(),
            (true, false) => Style::new()
                .color(Color::White)
                .background(Color::Blue)
                .bold(),
            (false, false) => Style::new().color(Color::Green),
        };

        DrawOutput {
            lines: vec![vec![
                Span::new(format!("{} ", self.base.focus_marker(focused))),
                Span::styled(format!("[ {} ]", self.text), style),
            ]],
        }
    }
}

impl Interactive for ButtonInput {
    fn on_key(&mut self, key: KeyEvent) -> InteractionResult {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                InteractionResult::with_action(WidgetAction::SubmitRequested)
            }
            _ => InteractionResult::ignored(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ButtonInput;
    use crate::runtime::event::WidgetAction;
    use crate::terminal::{KeyCode, KeyEvent};
    use crate::ui::span::line_text;
    use crate::ui::style::Color;
    use crate::widgets::traits::{Drawable, Interactive, RenderContext};

    #[test]
    fn enter_and_space_request_submit() {
        let mut button = ButtonInput::new("submit", "Submit!");
        for code in [KeyCode::Enter, KeyCode::Char(' ')] {
            let result = button.on_key(KeyEvent::plain(code));
            assert!(matches!(
                result.actions.as_slice(),
                [WidgetAction::SubmitRequested]
            ));
        }
        assert!(!button.on_key(KeyEvent::plain(KeyCode::Char('a'))).handled);
    }

    #[test]
    fn disabled_button_is_dimmed() {
        let button = ButtonInput::new("submit", "Submit!");
        let mut ctx = RenderContext::default();
        ctx.disabled.insert("submit".to_string());

        let out = button.draw(&ctx);
        assert_eq!(line_text(&out.lines[0]), "  [ Submit! ]");
        let style = out.lines[0][1].style;
        assert!(style.dim);
        assert_eq!(style.color, Some(Color::DarkGrey));
    }
}
