use super::AppState;
use crate::core::Field;
use crate::core::value::Value;
use crate::runtime::event::ValueChange;

impl AppState {
    /// Applies a widget-reported change. Unknown targets are ignored.
    pub fn apply_value_change(&mut self, change: ValueChange) -> bool {
        match change.target.parse::<Field>() {
            Ok(field) => {
                self.field_changed(field, change.value);
                true
            }
            Err(err) => {
                tracing::debug!(error = %err, "ignoring value change");
                false
            }
        }
    }

    /// Stores the normalized value, revalidates that field and recomputes
    /// whether the whole form may be submitted. Returns `true` if the stored
    /// value changed.
    pub fn field_changed(&mut self, field: Field, raw: Value) -> bool {
        let changed = self.values.set(field, raw);
        let current = self.values.get(field);

        match self.schema.validate_field(field, &current) {
            Ok(()) => self.errors.clear_error(field),
            Err(error) => self.errors.set_error(field, error),
        }
        self.submit_enabled = self.schema.is_valid(&self.values);
        self.sync_widget(field, current);
        changed
    }

    pub(super) fn hydrate_widgets(&mut self) {
        for field in Field::ALL {
            let value = self.values.get(field);
            self.sync_widget(field, value);
        }
    }

    fn sync_widget(&mut self, field: Field, value: Value) {
        let Some(node) = self.node_mut(field.as_str()) else {
            return;
        };
        if node.value().as_ref() != Some(&value) {
            node.set_value(value);
        }
    }
}
