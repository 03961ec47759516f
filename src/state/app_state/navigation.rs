use super::AppState;
use crate::terminal::KeyEvent;
use crate::widgets::traits::{InteractionResult, TextAction};

impl AppState {
    pub fn dispatch_key_to_focused(&mut self, key: KeyEvent) -> InteractionResult {
        let Some(focused_id) = self.focus.current_id().map(ToOwned::to_owned) else {
            return InteractionResult::ignored();
        };
        let Some(node) = self.node_mut(&focused_id) else {
            return InteractionResult::ignored();
        };
        node.on_key(key)
    }

    pub fn dispatch_text_action_to_focused(&mut self, action: TextAction) -> InteractionResult {
        let Some(focused_id) = self.focus.current_id().map(ToOwned::to_owned) else {
            return InteractionResult::ignored();
        };
        let Some(node) = self.node_mut(&focused_id) else {
            return InteractionResult::ignored();
        };
        node.on_text_action(action)
    }

    pub fn focus_next(&mut self) {
        self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus.prev();
    }
}
