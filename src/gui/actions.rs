use crate::core::SortKey;

// Widgets push actions here instead of mutating the session while it is being drawn
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    // Cards
    ToggleBookmark(String),
    FlipCard(String),

    // Comparison table
    SortBy(SortKey),

    // Quiz
    AnswerQuiz(String),
    RestartQuiz,

    // Shell
    ToggleDarkMode,
    ScrollTo(Section),
}

/// Places the page can jump to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Top,
    Quiz,
}

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

impl Default for ActionQueue {
    fn default() -> Self {
        Self::new()
    }
}
