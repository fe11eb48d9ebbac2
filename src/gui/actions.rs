use crate::core::{
    BoundingBox,
    CardId,
};

// Widgets push actions here instead of taking the board mutably while drawing
#[derive(Debug, Clone, PartialEq)]
pub enum UiAction {
    Save { id: CardId, source: BoundingBox },
}

#[derive(Debug, Default)]
pub struct ActionQueue {
    actions: Vec<UiAction>,
}

impl ActionQueue {
    pub fn new() -> Self {
        Self { actions: Vec::new() }
    }

    pub fn push(&mut self, action: UiAction) {
        self.actions.push(action);
    }

    pub fn drain(&mut self) -> std::vec::Drain<'_, UiAction> {
        self.actions.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
