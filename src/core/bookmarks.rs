/// Subject names the user has saved, in the order they were saved.
///
/// Names are not checked against the catalog. Equality ignores order: two sets are equal
/// when they hold the same names.
#[derive(Debug, Clone, Default)]
pub struct BookmarkSet {
    names: Vec<String>,
}

impl BookmarkSet {
    pub fn new() -> Self {
        Self { names: Vec::new() }
    }

    /// Adds `name` if absent, removes it otherwise. Returns whether it is now bookmarked.
    pub fn toggle(&mut self, name: &str) -> bool {
        if let Some(position) = self.names.iter().position(|saved| saved == name) {
            self.names.remove(position);
            false
        } else {
            self.names.push(name.to_string());
            true
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|saved| saved == name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl PartialEq for BookmarkSet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|name| other.contains(name))
    }
}

impl Eq for BookmarkSet {}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_double_toggle_is_identity() {
        let mut bookmarks = BookmarkSet::new();
        assert!(bookmarks.toggle("Zoology"));
        assert!(bookmarks.contains("Zoology"));
        assert!(!bookmarks.toggle("Zoology"));
        assert!(bookmarks.is_empty());
    }

    #[test]
    fn test_keeps_insertion_order() {
        let mut bookmarks = BookmarkSet::new();
        bookmarks.toggle("Psychology");
        bookmarks.toggle("Anthropology");
        bookmarks.toggle("Zoology");
        bookmarks.toggle("Anthropology");
        assert_eq!(bookmarks.iter().collect::<Vec<_>>(), vec!["Psychology", "Zoology"]);
        assert_eq!(bookmarks.len(), 2);
    }

    #[test]
    fn test_retoggling_earlier_name_keeps_set_equal() {
        let mut bookmarks = BookmarkSet::new();
        bookmarks.toggle("Anthropology");
        bookmarks.toggle("Zoology");
        let before = bookmarks.clone();

        bookmarks.toggle("Anthropology");
        bookmarks.toggle("Anthropology");
        assert_eq!(bookmarks, before);
        assert_eq!(bookmarks.iter().collect::<Vec<_>>(), vec!["Zoology", "Anthropology"]);
    }

    #[test]
    fn test_equality_requires_same_names() {
        let mut left = BookmarkSet::new();
        left.toggle("Psychology");
        let mut right = BookmarkSet::new();
        right.toggle("Philosophy");
        assert_ne!(left, right);

        right.toggle("Psychology");
        assert_ne!(left, right);
        left.toggle("Philosophy");
        assert_eq!(left, right);
    }

    #[test]
    fn test_unknown_names_accepted() {
        let mut bookmarks = BookmarkSet::new();
        assert!(bookmarks.toggle("Astrology"));
        assert!(bookmarks.contains("Astrology"));
    }

    proptest! {
        #[test]
        fn prop_even_toggles_restore_set(
            initial in proptest::collection::vec("[a-e]", 0..6),
            name in "[a-g]",
            pairs in 1usize..4,
        ) {
            let mut bookmarks = BookmarkSet::new();
            for n in &initial {
                if !bookmarks.contains(n) {
                    bookmarks.toggle(n);
                }
            }
            let before = bookmarks.clone();
            for _ in 0..pairs * 2 {
                bookmarks.toggle(&name);
            }
            prop_assert_eq!(bookmarks, before);
        }
    }
}
