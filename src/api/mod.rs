pub mod mealdb;

use crate::models::{Category, MealDetail, MealSummary};
use async_trait::async_trait;
use thiserror::Error;

pub use mealdb::MealDbClient;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("API error: {status} - {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("failed to parse response: {source}. Response: {body}")]
    Malformed {
        body: String,
        #[source]
        source: serde_json::Error,
    },
}

/// The four read-only recipe lookups the browser needs.
///
/// Every failure (transport, status, body) comes back as `None`; callers
/// decide the fallback. An empty `Vec` means the API answered with no
/// matches.
#[async_trait]
pub trait RecipeSource: Send + Sync {
    async fn fetch_categories(&self) -> Option<Vec<Category>>;
    async fn search_meals(&self, query: &str) -> Option<Vec<MealSummary>>;
    async fn filter_by_category(&self, name: &str) -> Option<Vec<MealSummary>>;
    async fn lookup_meal(&self, id: &str) -> Option<MealDetail>;
}

#[cfg(test)]
pub mod testing {
    use super::RecipeSource;
    use crate::models::{Category, Ingredient, MealDetail, MealSummary};
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    /// In-memory source with optional per-call latency.
    #[derive(Default)]
    pub struct FakeSource {
        pub categories: Option<Vec<Category>>,
        pub search: HashMap<String, Vec<MealSummary>>,
        pub by_category: HashMap<String, Vec<MealSummary>>,
        pub meals: HashMap<String, MealDetail>,
        pub delays: HashMap<String, Duration>,
        pub calls: AtomicUsize,
    }

    impl FakeSource {
        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        async fn hit(&self, key: &str) {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(delay) = self.delays.get(key) {
                tokio::time::sleep(*delay).await;
            }
        }
    }

    #[async_trait]
    impl RecipeSource for FakeSource {
        async fn fetch_categories(&self) -> Option<Vec<Category>> {
            self.hit("categories").await;
            self.categories.clone()
        }

        async fn search_meals(&self, query: &str) -> Option<Vec<MealSummary>> {
            self.hit(query).await;
            Some(self.search.get(query).cloned().unwrap_or_default())
        }

        async fn filter_by_category(&self, name: &str) -> Option<Vec<MealSummary>> {
            self.hit(name).await;
            self.by_category.get(name).cloned()
        }

        async fn lookup_meal(&self, id: &str) -> Option<MealDetail> {
            self.hit(id).await;
            self.meals.get(id).cloned()
        }
    }

    pub fn category(name: &str, description: &str) -> Category {
        Category {
            name: name.to_string(),
            thumbnail: Some(format!("https://img.example/{}.png", name.to_lowercase())),
            description: Some(description.to_string()),
        }
    }

    pub fn summary(id: &str, name: &str, area: Option<&str>) -> MealSummary {
        MealSummary {
            id: id.to_string(),
            name: name.to_string(),
            thumbnail: None,
            area: area.map(str::to_string),
            category: None,
        }
    }

    pub fn meal(id: &str, name: &str) -> MealDetail {
        MealDetail {
            id: id.to_string(),
            name: name.to_string(),
            thumbnail: Some("https://img.example/meal.jpg".to_string()),
            category: Some("Pasta".to_string()),
            area: Some("Italian".to_string()),
            source: None,
            tags: Some("Pasta,Quick".to_string()),
            ingredients: vec![
                Ingredient {
                    name: "Penne".to_string(),
                    measure: "200g".to_string(),
                },
                Ingredient {
                    name: "Salt".to_string(),
                    measure: String::new(),
                },
            ],
            instructions: "Boil water. Add pasta! Stir.\nServe hot".to_string(),
        }
    }
}
