use super::text_edit;
use crate::core::value::Value;
use crate::terminal::{CursorPos, KeyCode, KeyEvent, KeyModifiers};
use crate::ui::span::Span;
use crate::ui::style::{Color, Style};
use crate::widgets::base::InputBase;
use crate::widgets::traits::{
    DrawOutput, Drawable, InteractionResult, Interactive, RenderContext, TextEditState,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextMode {
    #[default]
    Plain,
    /// Rendered as one `*` per character; word-wise editing is disabled.
    Password,
}

/// Single-line text field. Every edit is reported as a `ValueChanged`
/// action targeting the field's own id.
pub struct TextInput {
    base: InputBase,
    value: String,
    cursor: usize,
    mode: TextMode,
    placeholder: Option<String>,
}

impl TextInput {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            base: InputBase::new(id, label),
            value: String::new(),
            cursor: 0,
            mode: TextMode::Plain,
            placeholder: None,
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_mode(mut self, mode: TextMode) -> Self {
        self.mode = mode;
        self
    }

    fn display_value(&self) -> String {
        match self.mode {
            TextMode::Plain => self.value.clone(),
            TextMode::Password => "*".repeat(text_edit::char_count(&self.value)),
        }
    }

    fn edited_result(&self) -> InteractionResult {
        InteractionResult::value_changed(self.base.id(), Value::Text(self.value.clone()))
    }
}

impl Drawable for TextInput {
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
        let mut line = vec![Span::styled(self.base.prefix(focused), prefix_style)];

        match &self.placeholder {
            Some(placeholder) if self.value.is_empty() => {
                line.push(Span::styled(
                    placeholder.clone(),
                    Style::new().color(Color::DarkGrey),
                ));
            }
            _ => line.push(Span::new(self.display_value())),
        }

        DrawOutput { lines: vec![line] }
    }
}

impl Interactive for TextInput {
    fn on_key(&mut self, key: KeyEvent) -> InteractionResult {
        match key.code {
            KeyCode::Char(_)
                if key.modifiers.contains(KeyModifiers::CONTROL)
                    || key.modifiers.contains(KeyModifiers::ALT) =>
            {
                InteractionResult::ignored()
            }
            KeyCode::Char(ch) => {
                text_edit::insert_char(&mut self.value, &mut self.cursor, ch);
                self.edited_result()
            }
            KeyCode::Backspace => {
                if text_edit::backspace_char(&mut self.value, &mut self.cursor) {
                    return self.edited_result();
                }
                InteractionResult::ignored()
            }
            KeyCode::Delete => {
                if text_edit::delete_char(&mut self.value, &mut self.cursor) {
                    return self.edited_result();
                }
                InteractionResult::ignored()
            }
            KeyCode::Left => {
                if text_edit::move_left(&mut self.cursor, &self.value) {
                    return InteractionResult::handled();
                }
                InteractionResult::ignored()
            }
            KeyCode::Right => {
                if text_edit::move_right(&mut self.cursor, &self.value) {
                    return InteractionResult::handled();
                }
                InteractionResult::ignored()
            }
            KeyCode::Home => {
                self.cursor = 0;
                InteractionResult::handled()
            }
            KeyCode::End => {
                self.cursor = text_edit::char_count(&self.value);
                InteractionResult::handled()
            }
            KeyCode::Enter => InteractionResult::input_done(),
            _ => InteractionResult::ignored(),
        }
    }

    fn text_editing(&mut self) -> Option<TextEditState<'_>> {
        if self.mode != TextMode::Plain {
            return None;
        }
        Some(TextEditState {
            value: &mut self.value,
            cursor: &mut self.cursor,
        })
    }

    fn on_text_edited(&mut self) -> InteractionResult {
        self.edited_result()
    }

    fn cursor_pos(&self) -> Option<CursorPos> {
        let offset = match self.mode {
            TextMode::Plain => text_edit::width_before_cursor(&self.value, self.cursor),
            TextMode::Password => text_edit::clamp_cursor(self.cursor, &self.value),
        };
        let col = self.base.prefix_width() + offset;
        Some(CursorPos {
            col: col.min(u16::MAX as usize) as u16,
            row: 0,
        })
    }

    fn value(&self) -> Option<Value> {
        Some(Value::Text(self.value.clone()))
    }

    fn set_value(&mut self, value: Value) {
        self.value = value.into_text();
        self.cursor = text_edit::char_count(&self.value);
    }
}
