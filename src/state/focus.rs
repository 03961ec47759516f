use crate::core::NodeId;

#[derive(Debug, Default, Clone)]
pub struct FocusState {
    targets: Vec<NodeId>,
    index: Option<usize>,
}

impl FocusState {
    pub fn from_ids(ids: impl IntoIterator<Item = NodeId>) -> Self {
        let targets: Vec<NodeId> = ids.into_iter().collect();
        let index = if targets.is_empty() { None } else { Some(0) };
        Self { targets, index }
    }

    pub fn current_id(&self) -> Option<&str> {
        self.index
            .and_then(|i| self.targets.get(i))
            .map(String::as_str)
    }

    pub fn set_focus_by_id(&mut self, id: &str) {
        if let Some(index) = self.targets.iter().position(|target| target == id) {
            self.index = Some(index);
        }
    }

    pub fn next(&mut self) {
        let Some(current) = self.index else {
            return;
        };
        self.index = Some((current + 1) % self.targets.len());
    }

    pub fn prev(&mut self) {
        let Some(current) = self.index else {
            return;
        };
        self.index = Some((current + self.targets.len() - 1) % self.targets.len());
    }
}
