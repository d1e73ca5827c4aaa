use std::collections::BTreeMap;

/// Selected option index per question id.
///
/// Entries are written only by explicit selection and never removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerMap {
    selections: BTreeMap<u32, usize>,
}

impl AnswerMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records (or overwrites) the selection for a question.
    pub fn record(&mut self, question_id: u32, option: usize) {
        self.selections.insert(question_id, option);
    }

    pub fn get(&self, question_id: u32) -> Option<usize> {
        self.selections.get(&question_id).copied()
    }

    pub fn is_answered(&self, question_id: u32) -> bool {
        self.selections.contains_key(&question_id)
    }

    pub fn len(&self) -> usize {
        self.selections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, usize)> + '_ {
        self.selections.iter().map(|(id, option)| (*id, *option))
    }
}
