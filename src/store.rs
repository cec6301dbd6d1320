use crate::models::Category;

/// Session cache of the category list.
///
/// Starts empty, is filled by the first category load and is only ever
/// replaced wholesale by a later non-empty list; it is never cleared.
#[derive(Default)]
pub struct CategoryStore {
    categories: Vec<Category>,
}

impl CategoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Returns `false` and keeps the current list when `categories` is empty.
    pub fn replace(&mut self, categories: Vec<Category>) -> bool {
        if categories.is_empty() {
            return false;
        }
        self.categories = categories;
        true
    }

    pub fn description_for(&self, name: &str) -> Option<&str> {
        let wanted = name.to_lowercase();
        self.categories
            .iter()
            .find(|c| c.name.to_lowercase() == wanted)
            .and_then(|c| c.description.as_deref())
    }
}

pub fn sample_categories() -> Vec<Category> {
    [
        ("Beef", "Beef dishes."),
        ("Chicken", "Chicken dishes."),
        ("Vegetarian", "Veg recipes."),
    ]
    .into_iter()
    .map(|(name, description)| Category {
        name: name.to_string(),
        thumbnail: None,
        description: Some(description.to_string()),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn description_lookup_ignores_case() {
        let mut store = CategoryStore::new();
        store.replace(sample_categories());
        assert_eq!(store.description_for("beef"), Some("Beef dishes."));
        assert_eq!(store.description_for("VEGETARIAN"), Some("Veg recipes."));
        assert_eq!(store.description_for("Seafood"), None);
    }

    #[test]
    fn empty_replacement_never_clears() {
        let mut store = CategoryStore::new();
        assert!(store.replace(sample_categories()));
        assert!(!store.replace(Vec::new()));
        assert_eq!(store.categories().len(), 3);
    }
}
