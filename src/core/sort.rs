use std::cmp::Ordering;

use super::models::SubjectRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    ScoringPotential,
    OverlapScore,
}

impl SortKey {
    pub fn title(&self) -> &'static str {
        match self {
            SortKey::ScoringPotential => "Scoring Potential",
            SortKey::OverlapScore => "MBBS Overlap",
        }
    }

    pub fn value(&self, subject: &SubjectRecord) -> u8 {
        match self {
            SortKey::ScoringPotential => subject.scoring_potential,
            SortKey::OverlapScore => subject.overlap_score,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "⬆",
            SortDirection::Descending => "⬇",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    pub fn default_direction(_key: SortKey) -> SortDirection {
        SortDirection::Descending
    }

    pub fn toggle_or_set(&mut self, key: SortKey) {
        if self.key == key {
            self.direction = self.direction.reversed();
        } else {
            self.key = key;
            self.direction = Self::default_direction(key);
        }
    }
}

impl Default for SortState {
    fn default() -> Self {
        Self { key: SortKey::ScoringPotential, direction: SortDirection::Descending }
    }
}

/// Returns the subjects ordered by `state`. Ties keep their catalog order in both directions.
pub fn sorted<'a>(subjects: &'a [SubjectRecord], state: SortState) -> Vec<&'a SubjectRecord> {
    let mut ordered: Vec<&SubjectRecord> = subjects.iter().collect();

    // sort_by is stable
    ordered.sort_by(|left, right| {
        let ordering: Ordering = state.key.value(left).cmp(&state.key.value(right));
        match state.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });

    ordered
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::core::{
        catalog::Catalog,
        models::{
            ColorTag,
            SyllabusSize,
        },
    };

    fn names(ordered: &[&SubjectRecord]) -> Vec<String> {
        ordered.iter().map(|s| s.name.clone()).collect()
    }

    #[test]
    fn test_scoring_descending_keeps_catalog_order_on_ties() {
        let catalog = Catalog::builtin();
        let ordered = sorted(
            catalog.subjects(),
            SortState::new(SortKey::ScoringPotential, SortDirection::Descending),
        );
        assert_eq!(
            names(&ordered),
            vec!["Anthropology", "Medical Science", "Psychology", "Zoology", "Philosophy"]
        );
    }

    #[test]
    fn test_scoring_ascending_keeps_catalog_order_on_ties() {
        let catalog = Catalog::builtin();
        let ordered = sorted(
            catalog.subjects(),
            SortState::new(SortKey::ScoringPotential, SortDirection::Ascending),
        );
        assert_eq!(
            names(&ordered),
            vec!["Philosophy", "Zoology", "Medical Science", "Psychology", "Anthropology"]
        );
    }

    #[test]
    fn test_direction_flip_reverses_without_ties() {
        let catalog = Catalog::builtin();
        let mut state = SortState::new(SortKey::OverlapScore, SortDirection::Descending);
        let first = names(&sorted(catalog.subjects(), state));
        assert_eq!(
            first,
            vec!["Medical Science", "Zoology", "Psychology", "Anthropology", "Philosophy"]
        );

        state.toggle_or_set(SortKey::OverlapScore);
        let mut second = names(&sorted(catalog.subjects(), state));
        second.reverse();
        assert_eq!(first, second);
    }

    #[test]
    fn test_sorting_leaves_catalog_untouched() {
        let catalog = Catalog::builtin();
        let before = catalog.subjects().to_vec();
        for key in [SortKey::ScoringPotential, SortKey::OverlapScore] {
            for direction in [SortDirection::Ascending, SortDirection::Descending] {
                let _ = sorted(catalog.subjects(), SortState::new(key, direction));
            }
        }
        assert_eq!(catalog.subjects(), before.as_slice());
    }

    #[test]
    fn test_toggle_or_set() {
        let mut state = SortState::default();
        assert_eq!(state, SortState::new(SortKey::ScoringPotential, SortDirection::Descending));

        state.toggle_or_set(SortKey::ScoringPotential);
        assert_eq!(state.direction, SortDirection::Ascending);

        // A new key always starts descending, whatever the previous direction was
        state.toggle_or_set(SortKey::OverlapScore);
        assert_eq!(state, SortState::new(SortKey::OverlapScore, SortDirection::Descending));

        state.toggle_or_set(SortKey::OverlapScore);
        state.toggle_or_set(SortKey::OverlapScore);
        assert_eq!(state.direction, SortDirection::Descending);
    }

    fn subjects_from(values: Vec<(u8, u8)>) -> Vec<SubjectRecord> {
        values
            .into_iter()
            .enumerate()
            .map(|(i, (overlap, scoring))| {
                SubjectRecord::new(
                    &format!("Subject {i}"),
                    overlap,
                    scoring,
                    SyllabusSize::Medium,
                    "",
                    "",
                    ColorTag::Blue,
                )
            })
            .collect()
    }

    proptest! {
        #[test]
        fn prop_sorted_is_ordered_and_stable(
            values in proptest::collection::vec((0u8..=100, 0u8..=100), 0..12),
            descending in any::<bool>(),
        ) {
            let subjects = subjects_from(values);
            let direction =
                if descending { SortDirection::Descending } else { SortDirection::Ascending };
            let ordered = sorted(&subjects, SortState::new(SortKey::ScoringPotential, direction));

            prop_assert_eq!(ordered.len(), subjects.len());
            for pair in ordered.windows(2) {
                let (a, b) = (pair[0], pair[1]);
                match direction {
                    SortDirection::Ascending => {
                        prop_assert!(a.scoring_potential <= b.scoring_potential);
                    }
                    SortDirection::Descending => {
                        prop_assert!(a.scoring_potential >= b.scoring_potential);
                    }
                }
                if a.scoring_potential == b.scoring_potential {
                    let index_of = |s: &SubjectRecord| subjects.iter().position(|x| x.name == s.name);
                    prop_assert!(index_of(a) < index_of(b));
                }
            }
        }

        #[test]
        fn prop_flip_reverses_distinct_keys(
            values in proptest::collection::btree_set(0u8..=100, 0..12),
        ) {
            let subjects = subjects_from(values.into_iter().map(|v| (v, 50)).collect());
            let mut state = SortState::new(SortKey::OverlapScore, SortDirection::Ascending);
            let first = names(&sorted(&subjects, state));
            state.toggle_or_set(SortKey::OverlapScore);
            let mut second = names(&sorted(&subjects, state));
            second.reverse();
            prop_assert_eq!(first, second);
        }
    }
}
