use crate::display::{MealView, Region, Unit};
use crate::models::{Category, Ingredient, MealDetail, MealSummary};
use crate::route::Route;
use regex::Regex;
use std::sync::OnceLock;

pub const NO_RESULTS: &str = "No results found.";
pub const NO_CATEGORY_MEALS: &str = "No meals found for this category.";
pub const NO_INSTRUCTIONS: &str = "No instructions available.";

fn sentence_end() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[.?!]\s+").expect("static regex"))
}

pub fn render_categories_grid(region: &mut Region, categories: &[Category]) {
    region.clear();
    for category in categories {
        region.push(Unit {
            label: category.name.clone(),
            caption: None,
            image: category.thumbnail.clone(),
            target: Route::Category(category.name.clone()),
        });
    }
}

pub fn render_sidebar(region: &mut Region, categories: &[Category]) {
    region.clear();
    for category in categories {
        region.push(Unit {
            label: category.name.clone(),
            caption: None,
            image: None,
            target: Route::Category(category.name.clone()),
        });
    }
}

/// Meal cards for search results and category listings. `empty_message`
/// replaces the grid when there are no meals.
pub fn render_meal_grid(region: &mut Region, meals: &[MealSummary], empty_message: &str) {
    region.clear();
    if meals.is_empty() {
        region.set_message(empty_message);
        return;
    }
    for meal in meals {
        let caption = meal
            .area
            .clone()
            .or_else(|| meal.category.clone())
            .unwrap_or_default();
        region.push(Unit {
            label: meal.name.clone(),
            caption: Some(caption),
            image: meal.thumbnail.clone(),
            target: Route::Meal(meal.id.clone()),
        });
    }
}

pub fn render_meal_detail(view: &mut MealView, meal: &MealDetail) {
    *view = MealView::default();

    view.image = meal.thumbnail.clone().unwrap_or_default();
    view.title = meal.name.clone();
    view.category = meal.category.clone().unwrap_or_default();
    view.area = meal.area.clone().unwrap_or_default();
    view.source = meal.source.clone();
    view.tags = meal
        .tags
        .as_deref()
        .unwrap_or("")
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect();

    view.ingredients = ingredient_badges(&meal.ingredients);
    let (left, right) = measure_columns(&meal.ingredients);
    view.measures_left = left;
    view.measures_right = right;

    let steps = split_instructions(&meal.instructions);
    if steps.is_empty() {
        view.instructions_message = Some(NO_INSTRUCTIONS.to_string());
    } else {
        view.steps = steps;
    }
}

pub fn breadcrumb(meal: &MealDetail) -> String {
    format!("Home » {}", meal.name)
}

pub fn ingredient_badges(ingredients: &[Ingredient]) -> Vec<String> {
    ingredients
        .iter()
        .enumerate()
        .map(|(i, ingredient)| format!("{}. {}", i + 1, ingredient.name))
        .collect()
}

/// Splits "measure ingredient" rows into two columns by index parity,
/// even indexes on the left.
pub fn measure_columns(ingredients: &[Ingredient]) -> (Vec<String>, Vec<String>) {
    let mut left = Vec::new();
    let mut right = Vec::new();
    for (i, ingredient) in ingredients.iter().enumerate() {
        let row = if ingredient.measure.is_empty() {
            ingredient.name.clone()
        } else {
            format!("{} {}", ingredient.measure, ingredient.name)
        };
        if i % 2 == 0 {
            left.push(row);
        } else {
            right.push(row);
        }
    }
    (left, right)
}

/// Lines are joined with spaces first, then the text is cut after every
/// `.`, `?` or `!` that is followed by whitespace. Abbreviations such as
/// "Dr." split too.
pub fn split_instructions(text: &str) -> Vec<String> {
    let joined = text
        .trim()
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    sentence_end()
        .split(&joined)
        .map(str::trim)
        .filter(|step| !step.is_empty())
        .map(str::to_string)
        .collect()
}
