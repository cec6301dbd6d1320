use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

pub const MAX_INGREDIENTS: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub thumbnail: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealSummary {
    pub id: String,
    pub name: String,
    pub thumbnail: Option<String>,
    pub area: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingredient {
    pub name: String,
    pub measure: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealDetail {
    pub id: String,
    pub name: String,
    pub thumbnail: Option<String>,
    pub category: Option<String>,
    pub area: Option<String>,
    pub source: Option<String>,
    pub tags: Option<String>,
    pub ingredients: Vec<Ingredient>,
    pub instructions: String,
}

#[derive(Deserialize)]
pub struct CategoriesResponse {
    #[serde(default)]
    pub categories: Option<Vec<CategoryRecord>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRecord {
    pub str_category: String,
    #[serde(default)]
    pub str_category_thumb: Option<String>,
    #[serde(default)]
    pub str_category_description: Option<String>,
}

/// `search.php`, `filter.php` and `lookup.php` all answer `{"meals": [...]}`,
/// with `null` in place of the array when nothing matched.
#[derive(Deserialize)]
pub struct MealsResponse<T> {
    pub meals: Option<Vec<T>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealRecord {
    pub id_meal: String,
    pub str_meal: String,
    #[serde(default)]
    pub str_meal_thumb: Option<String>,
    #[serde(default)]
    pub str_category: Option<String>,
    #[serde(default)]
    pub str_area: Option<String>,
    #[serde(default)]
    pub str_source: Option<String>,
    #[serde(default)]
    pub str_tags: Option<String>,
    #[serde(default)]
    pub str_instructions: Option<String>,
    /// Catches `strIngredient1..20` / `strMeasure1..20` and anything else
    /// the API adds later.
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

impl From<CategoryRecord> for Category {
    fn from(record: CategoryRecord) -> Self {
        Self {
            name: record.str_category,
            thumbnail: non_blank(record.str_category_thumb),
            description: non_blank(record.str_category_description),
        }
    }
}

impl MealRecord {
    fn slot(&self, prefix: &str, index: usize) -> Option<&str> {
        self.extra
            .get(&format!("{}{}", prefix, index))
            .and_then(Value::as_str)
    }

    /// Pairs `strIngredientN` with `strMeasureN` for N in 1..=20, keeping
    /// only slots whose ingredient is non-blank, in slot order.
    pub fn ingredients(&self) -> Vec<Ingredient> {
        (1..=MAX_INGREDIENTS)
            .filter_map(|i| {
                let name = self.slot("strIngredient", i)?.trim();
                if name.is_empty() {
                    return None;
                }
                let measure = self.slot("strMeasure", i).unwrap_or("").trim();
                Some(Ingredient {
                    name: name.to_string(),
                    measure: measure.to_string(),
                })
            })
            .collect()
    }

    pub fn into_summary(self) -> MealSummary {
        MealSummary {
            id: self.id_meal,
            name: self.str_meal,
            thumbnail: non_blank(self.str_meal_thumb),
            area: non_blank(self.str_area),
            category: non_blank(self.str_category),
        }
    }

    pub fn into_detail(self) -> MealDetail {
        let ingredients = self.ingredients();
        MealDetail {
            id: self.id_meal,
            name: self.str_meal,
            thumbnail: non_blank(self.str_meal_thumb),
            category: non_blank(self.str_category),
            area: non_blank(self.str_area),
            source: non_blank(self.str_source),
            tags: non_blank(self.str_tags),
            ingredients,
            instructions: self.str_instructions.unwrap_or_default(),
        }
    }
}
