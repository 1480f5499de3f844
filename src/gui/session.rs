use std::collections::HashSet;

use log::{
    debug,
    warn,
};

use super::actions::{
    Section,
    UiAction,
};
use crate::core::{
    sort,
    BookmarkSet,
    Catalog,
    Quiz,
    SortState,
    SubjectRecord,
};

/// All mutable view state for one run of the app. Dropped when the window closes.
pub struct Session {
    bookmarks: BookmarkSet,
    quiz: Quiz,
    sort: SortState,
    flipped: HashSet<String>,
    dark_mode: bool,
    scroll_target: Option<Section>,
}

impl Session {
    pub fn new(dark_mode: bool) -> Self {
        Self {
            bookmarks: BookmarkSet::new(),
            quiz: Quiz::new(),
            sort: SortState::default(),
            flipped: HashSet::new(),
            dark_mode,
            scroll_target: None,
        }
    }

    pub fn apply(&mut self, action: UiAction) {
        debug!("Applying {:?}", action);
        match action {
            UiAction::ToggleBookmark(name) => {
                self.bookmarks.toggle(&name);
            }
            UiAction::FlipCard(name) => {
                if !self.flipped.remove(&name) {
                    self.flipped.insert(name);
                }
            }
            UiAction::SortBy(key) => self.sort.toggle_or_set(key),
            UiAction::AnswerQuiz(answer) => {
                if let Err(e) = self.quiz.submit(&answer) {
                    warn!("Ignoring quiz answer '{}': {}", answer, e);
                }
            }
            UiAction::RestartQuiz => self.quiz.restart(),
            UiAction::ToggleDarkMode => self.dark_mode = !self.dark_mode,
            UiAction::ScrollTo(section) => self.scroll_target = Some(section),
        }
    }

    pub fn apply_all(&mut self, actions: impl IntoIterator<Item = UiAction>) {
        for action in actions {
            self.apply(action);
        }
    }

    pub fn is_bookmarked(&self, name: &str) -> bool {
        self.bookmarks.contains(name)
    }

    pub fn bookmark_count(&self) -> usize {
        self.bookmarks.len()
    }

    pub fn bookmarks(&self) -> &BookmarkSet {
        &self.bookmarks
    }

    pub fn is_flipped(&self, name: &str) -> bool {
        self.flipped.contains(name)
    }

    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    pub fn sort_state(&self) -> SortState {
        self.sort
    }

    pub fn sorted_subjects<'a>(&self, catalog: &'a Catalog) -> Vec<&'a SubjectRecord> {
        sort::sorted(catalog.subjects(), self.sort)
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    /// Hands out a pending scroll request once.
    pub fn take_scroll_target(&mut self) -> Option<Section> {
        self.scroll_target.take()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{
        QuizStep,
        SortDirection,
        SortKey,
    };

    #[test]
    fn test_bookmark_count_tracks_toggles() {
        let mut session = Session::default();
        session.apply_all([
            UiAction::ToggleBookmark("Zoology".to_string()),
            UiAction::ToggleBookmark("Psychology".to_string()),
        ]);
        assert_eq!(session.bookmark_count(), 2);
        assert!(session.is_bookmarked("Zoology"));

        session.apply(UiAction::ToggleBookmark("Zoology".to_string()));
        assert_eq!(session.bookmark_count(), 1);
        assert!(!session.is_bookmarked("Zoology"));
    }

    #[test]
    fn test_flip_is_per_card() {
        let mut session = Session::default();
        session.apply(UiAction::FlipCard("Philosophy".to_string()));
        assert!(session.is_flipped("Philosophy"));
        assert!(!session.is_flipped("Zoology"));

        session.apply(UiAction::FlipCard("Philosophy".to_string()));
        assert!(!session.is_flipped("Philosophy"));
    }

    #[test]
    fn test_flip_does_not_touch_bookmarks() {
        let mut session = Session::default();
        session.apply(UiAction::ToggleBookmark("Zoology".to_string()));
        session.apply(UiAction::FlipCard("Zoology".to_string()));
        assert!(session.is_bookmarked("Zoology"));
        assert_eq!(session.bookmark_count(), 1);
    }

    #[test]
    fn test_sort_actions() {
        let catalog = Catalog::builtin();
        let mut session = Session::default();
        let first = session.sorted_subjects(&catalog)[0].name.clone();
        assert_eq!(first, "Anthropology");

        session.apply(UiAction::SortBy(SortKey::OverlapScore));
        assert_eq!(
            session.sort_state(),
            SortState::new(SortKey::OverlapScore, SortDirection::Descending)
        );
        assert_eq!(session.sorted_subjects(&catalog)[0].name, "Medical Science");

        session.apply(UiAction::SortBy(SortKey::OverlapScore));
        assert_eq!(session.sorted_subjects(&catalog)[0].name, "Philosophy");

        // Catalog order is untouched
        assert_eq!(catalog.subjects()[0].name, "Medical Science");
    }

    #[test]
    fn test_quiz_flow_and_restart() {
        let mut session = Session::default();
        session.apply_all([
            UiAction::AnswerQuiz("Explore society & behavior".to_string()),
            UiAction::AnswerQuiz("Case studies".to_string()),
            UiAction::AnswerQuiz("Personal interest".to_string()),
        ]);
        assert_eq!(
            session.quiz().recommendation().map(|r| r.0),
            Some(["Anthropology", "Psychology"])
        );

        // Extra answers after completion are dropped
        session.apply(UiAction::AnswerQuiz("Personal interest".to_string()));
        assert!(session.quiz().is_completed());

        session.apply(UiAction::RestartQuiz);
        assert_eq!(session.quiz().step(), QuizStep::AwaitingAnswer(0));
    }

    #[test]
    fn test_dark_mode_and_scroll() {
        let mut session = Session::new(true);
        session.apply(UiAction::ToggleDarkMode);
        assert!(!session.dark_mode());

        session.apply(UiAction::ScrollTo(Section::Quiz));
        assert_eq!(session.take_scroll_target(), Some(Section::Quiz));
        assert_eq!(session.take_scroll_target(), None);
    }
}
