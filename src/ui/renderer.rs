use crate::state::AppState;
use crate::state::app_state::SUBMIT_ID;
use crate::terminal::{CursorPos, TerminalSize};
use crate::ui::span::{Span, SpanLine};
use crate::ui::style::{Color, Style};
use crate::widgets::traits::RenderContext;

pub const TITLE: &str = "Create your account";
pub const USERS_HEADING: &str = "Users";
pub const SENDING_TEXT: &str = "Sending…";
pub const KEY_HINT: &str =
    "Tab/Shift+Tab move · Enter next · Space toggle · Ctrl+S submit · Esc quit";

#[derive(Debug, Default, Clone)]
pub struct RenderFrame {
    pub lines: Vec<SpanLine>,
    pub cursor: Option<CursorPos>,
}

impl RenderFrame {
    fn push(&mut self, line: SpanLine) {
        self.lines.push(line);
    }

    fn blank(&mut self) {
        self.lines.push(Vec::new());
    }

    fn row(&self) -> u16 {
        self.lines.len().min(u16::MAX as usize) as u16
    }
}

pub struct Renderer;

impl Renderer {
    pub fn render(state: &AppState, terminal_size: TerminalSize) -> RenderFrame {
        let mut frame = RenderFrame::default();
        let mut ctx = RenderContext {
            focused_id: state.focused_id().map(ToOwned::to_owned),
            ..RenderContext::default()
        };
        if !state.submit_enabled() || state.is_sending() {
            ctx.disabled.insert(SUBMIT_ID.to_string());
        }

        frame.push(vec![Span::styled(
            TITLE,
            Style::new().color(Color::Cyan).bold(),
        )]);
        frame.blank();

        let errors = state.errors().visible();
        for (_, error) in &errors {
            frame.push(vec![Span::styled(
                format!("  ! {error}"),
                Style::new().color(Color::Red),
            )]);
        }
        if !errors.is_empty() {
            frame.blank();
        }

        for node in state.nodes() {
            if node.id() == SUBMIT_ID {
                frame.blank();
            }
            let out = node.draw(&ctx);
            if frame.cursor.is_none() && ctx.focused_id.as_deref() == Some(node.id()) {
                if let Some(local_cursor) = node.cursor_pos() {
                    frame.cursor = Some(CursorPos {
                        col: local_cursor.col,
                        row: frame.row().saturating_add(local_cursor.row),
                    });
                }
            }
            frame.lines.extend(out.lines);
        }

        if state.is_sending() {
            frame.push(vec![Span::styled(
                format!("  {SENDING_TEXT}"),
                Style::new().color(Color::Yellow),
            )]);
        }
        if let Some(banner) = state.banner() {
            frame.push(vec![Span::styled(
                format!("  {banner}"),
                Style::new().color(Color::Red).bold(),
            )]);
        }

        frame.blank();
        frame.push(vec![Span::styled(USERS_HEADING, Style::new().bold())]);
        if state.users().is_empty() {
            frame.push(vec![Span::styled(
                "  (none yet)",
                Style::new().color(Color::DarkGrey),
            )]);
        }
        let users = state.users();
        // Rows below the user lines: blank, separator, hint.
        let budget = (terminal_size.height as usize).saturating_sub(frame.lines.len() + 3);
        let shown = if users.len() <= budget {
            users.len()
        } else {
            budget.saturating_sub(1).max(1)
        };
        let hidden = users.len() - shown;
        if hidden > 0 {
            frame.push(vec![Span::styled(
                format!("  … {hidden} earlier"),
                Style::new().color(Color::DarkGrey),
            )]);
        }
        for user in &users[hidden..] {
            frame.push(vec![Span::new(format!("  {}", user.values_line()))]);
        }

        frame.blank();
        frame.push(vec![Span::styled(
            separator(terminal_size.width),
            Style::new().color(Color::DarkGrey),
        )]);
        frame.push(vec![Span::styled(
            KEY_HINT,
            Style::new().color(Color::DarkGrey),
        )]);
        frame
    }
}

fn separator(width: u16) -> String {
    "─".repeat((width as usize).clamp(1, 60))
}

#[cfg(test)]
mod tests {
    use super::{KEY_HINT, Renderer, USERS_HEADING};
    use crate::client::executor::SubmissionCompletion;
    use crate::core::Field;
    use crate::core::user::SubmittedUser;
    use crate::core::value::Value;
    use crate::state::AppState;
    use crate::terminal::TerminalSize;
    use crate::ui::span::line_text;

    const SIZE: TerminalSize = TerminalSize {
        width: 80,
        height: 24,
    };

    fn texts(state: &AppState) -> Vec<String> {
        Renderer::render(state, SIZE)
            .lines
            .iter()
            .map(|line| line_text(line))
            .collect()
    }

    #[test]
    fn error_region_lists_field_errors_but_never_terms() {
        let mut state = AppState::new();
        state.field_changed(Field::Firstname, Value::from("Ann"));
        state.field_changed(Field::Email, Value::from(""));
        state.field_changed(Field::Terms, Value::Bool(false));

        let lines = texts(&state);
        let errors: Vec<&String> = lines.iter().filter(|line| line.starts_with("  ! ")).collect();
        assert_eq!(
            errors,
            vec!["  ! User needs to be 6 chars min!", "  ! Email is required"]
        );
    }

    #[test]
    fn submit_button_is_dimmed_until_form_is_valid() {
        let state = AppState::new();
        let frame = Renderer::render(&state, SIZE);
        let button = frame
            .lines
            .iter()
            .find(|line| line_text(line).contains("[ Submit! ]"))
            .expect("button line");
        assert!(button[1].style.dim);
    }

    #[test]
    fn users_are_rendered_as_value_arrays() {
        let mut state = AppState::new();
        for (field, text) in [
            (Field::Firstname, "Alicee"),
            (Field::Lastname, "Smith"),
            (Field::Email, "a@b.com"),
            (Field::Password, "secret"),
        ] {
            state.field_changed(field, Value::from(text));
        }
        let request = state.submit().expect("request");
        let user: SubmittedUser =
            serde_json::from_str(r#"{"firstname":"Alicee","id":"412"}"#).expect("user");
        state.submission_finished(SubmissionCompletion {
            run_id: request.run_id,
            result: Ok(user),
        });

        let lines = texts(&state);
        let heading = lines
            .iter()
            .position(|line| line == USERS_HEADING)
            .expect("heading");
        assert_eq!(lines[heading + 1], r#"  ["Alicee","412"]"#);
    }

    fn submit_user(state: &mut AppState, n: usize) {
        for (field, text) in [
            (Field::Firstname, "Alicee"),
            (Field::Lastname, "Smith"),
            (Field::Email, "a@b.com"),
            (Field::Password, "secret"),
        ] {
            state.field_changed(field, Value::from(text));
        }
        let request = state.submit().expect("request");
        let user: SubmittedUser =
            serde_json::from_str(&format!(r#"{{"id":"{n}"}}"#)).expect("user");
        state.submission_finished(SubmissionCompletion {
            run_id: request.run_id,
            result: Ok(user),
        });
    }

    #[test]
    fn newest_users_stay_on_screen_when_list_overflows() {
        let mut state = AppState::new();
        for n in 1..=20 {
            submit_user(&mut state, n);
        }

        let lines = texts(&state);
        assert!(lines.len() <= SIZE.height as usize);
        assert_eq!(lines.last().map(String::as_str), Some(KEY_HINT));
        assert!(lines.iter().any(|line| line == r#"  ["20"]"#));
        assert!(!lines.iter().any(|line| line == r#"  ["1"]"#));

        let earlier = lines
            .iter()
            .find(|line| line.contains("earlier"))
            .expect("overflow line");
        let shown = lines.iter().filter(|line| line.starts_with("  [\"")).count();
        assert_eq!(earlier, &format!("  … {} earlier", 20 - shown));
    }

    #[test]
    fn short_user_list_is_shown_in_full() {
        let mut state = AppState::new();
        submit_user(&mut state, 1);
        submit_user(&mut state, 2);

        let lines = texts(&state);
        assert!(lines.iter().any(|line| line == r#"  ["1"]"#));
        assert!(!lines.iter().any(|line| line.contains("earlier")));
    }

    #[test]
    fn cursor_follows_focused_text_input() {
        let mut state = AppState::new();
        state.field_changed(Field::Firstname, Value::from("Al"));
        let frame = Renderer::render(&state, SIZE);
        let cursor = frame.cursor.expect("cursor");

        let row = cursor.row as usize;
        assert!(line_text(&frame.lines[row]).starts_with("> First Name: "));
        assert_eq!(cursor.col as usize, "> First Name: ".len() + 2);
    }
}
