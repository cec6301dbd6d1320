use crate::display::{PageId, Surface};
use crate::models::{Category, MealDetail, MealSummary};
use crate::render::{self, NO_CATEGORY_MEALS, NO_RESULTS};
use crate::route::{Location, Route};
use crate::store::{sample_categories, CategoryStore};
use tracing::{debug, info};

pub const MEAL_NOT_FOUND: &str = "Meal not found.";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Focus {
    Browse,
    Search,
    Address,
}

/// A resolved navigation, ready for the page controller.
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    Home,
    SearchResults {
        query: String,
        meals: Vec<MealSummary>,
    },
    Category {
        name: String,
        meals: Vec<MealSummary>,
    },
    Meal(MealDetail),
    MealNotFound {
        id: String,
    },
}

pub struct App {
    pub surface: Surface,
    pub store: CategoryStore,
    pub location: Location,
    pub focus: Focus,
    pub search_input: String,
    pub address_input: String,
    pub notice: Option<String>,
    pub loading: bool,
    pub meal_scroll: u16,
    generation: u64,
}

impl App {
    pub fn new(initial_fragment: &str) -> Self {
        Self {
            surface: Surface::default(),
            store: CategoryStore::new(),
            location: Location::new(initial_fragment),
            focus: Focus::Browse,
            search_input: String::new(),
            address_input: String::new(),
            notice: None,
            loading: false,
            meal_scroll: 0,
            generation: 0,
        }
    }

    /// Starts a navigation and returns its generation. Any transition still
    /// in flight from an earlier generation is dropped when it lands.
    pub fn begin_navigation(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.generation
    }

    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }

    /// Applies `transition` if `generation` is still the latest issued.
    pub fn apply(&mut self, generation: u64, transition: Transition) -> bool {
        if !self.is_current(generation) {
            debug!(
                generation,
                current = self.generation,
                "discarding stale navigation"
            );
            return false;
        }
        self.loading = false;
        match transition {
            Transition::Home => self.show_home(),
            Transition::SearchResults { query, meals } => self.show_search_results(&query, &meals),
            Transition::Category { name, meals } => {
                let description = self.store.description_for(&name).unwrap_or("").to_string();
                self.show_category_page(&name, &description, &meals);
            }
            Transition::Meal(meal) => self.show_meal_detail(&meal),
            Transition::MealNotFound { id } => {
                info!(%id, "meal not found");
                self.notice = Some(MEAL_NOT_FOUND.to_string());
                self.show_home();
            }
        }
        true
    }

    /// Installs a category load result, falling back to the built-in sample
    /// set when the fetch failed or came back empty and nothing is cached.
    pub fn install_categories(&mut self, fetched: Option<Vec<Category>>) {
        let replaced = fetched.map_or(false, |categories| self.store.replace(categories));
        if !replaced && self.store.is_empty() {
            info!("using built-in sample categories");
            self.store.replace(sample_categories());
        }
        render::render_categories_grid(&mut self.surface.categories, self.store.categories());
        render::render_sidebar(&mut self.surface.sidebar, self.store.categories());
    }

    pub fn show_home(&mut self) {
        self.surface.hide_all();
        self.surface.show(PageId::Home);
        self.location.set(Route::Home.to_fragment());
    }

    pub fn show_search_results(&mut self, query: &str, meals: &[MealSummary]) {
        self.surface.hide_all();
        self.surface.show(PageId::SearchResults);
        render::render_meal_grid(&mut self.surface.results, meals, NO_RESULTS);
        self.surface.results_query = query.to_string();
        // Leave a draft the user is still typing alone
        if self.focus != Focus::Search {
            self.search_input = query.to_string();
        }
        self.location
            .set(Route::Search(query.to_string()).to_fragment());
    }

    pub fn show_category_page(&mut self, name: &str, description: &str, meals: &[MealSummary]) {
        self.surface.hide_all();
        self.surface.show(PageId::Category);
        self.surface.category_info.name = name.to_string();
        self.surface.category_info.description = description.to_string();
        render::render_meal_grid(&mut self.surface.category_meals, meals, NO_CATEGORY_MEALS);
        self.location
            .set(Route::Category(name.to_string()).to_fragment());
    }

    pub fn show_meal_detail(&mut self, meal: &MealDetail) {
        self.surface.hide_all();
        self.surface.show(PageId::MealDetail);
        self.surface.breadcrumb = render::breadcrumb(meal);
        render::render_meal_detail(&mut self.surface.meal, meal);
        self.meal_scroll = 0;
        self.location.set(Route::Meal(meal.id.clone()).to_fragment());
    }

    pub fn toggle_sidebar(&mut self) {
        self.surface.sidebar_open = !self.surface.sidebar_open;
    }

    pub fn close_sidebar(&mut self) {
        self.surface.sidebar_open = false;
    }

    pub fn move_selection(&mut self, delta: isize) {
        if let Some(region) = self.surface.active_region_mut() {
            region.move_cursor(delta);
        }
    }

    pub fn selected_target(&mut self) -> Option<Route> {
        self.surface
            .active_region_mut()
            .and_then(|region| region.selected())
            .map(|unit| unit.target.clone())
    }

    pub fn scroll_meal(&mut self, delta: i32) {
        let next = (self.meal_scroll as i32 + delta).max(0);
        self.meal_scroll = next.min(u16::MAX as i32) as u16;
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}
