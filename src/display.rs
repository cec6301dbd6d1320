use crate::route::Route;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageId {
    Home,
    SearchResults,
    Category,
    MealDetail,
}

impl PageId {
    pub const ALL: [PageId; 4] = [
        PageId::Home,
        PageId::SearchResults,
        PageId::Category,
        PageId::MealDetail,
    ];

    fn index(self) -> usize {
        match self {
            PageId::Home => 0,
            PageId::SearchResults => 1,
            PageId::Category => 2,
            PageId::MealDetail => 3,
        }
    }
}

/// One card or link in a region. Activation navigates to `target`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Unit {
    pub label: String,
    pub caption: Option<String>,
    pub image: Option<String>,
    pub target: Route,
}

/// A list region: either a set of units or a single message.
#[derive(Default, Debug, PartialEq, Eq)]
pub struct Region {
    units: Vec<Unit>,
    message: Option<String>,
    cursor: usize,
}

impl Region {
    pub fn clear(&mut self) {
        self.units.clear();
        self.message = None;
        self.cursor = 0;
    }

    pub fn push(&mut self, unit: Unit) {
        self.units.push(unit);
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn move_cursor(&mut self, delta: isize) {
        if self.units.is_empty() {
            return;
        }
        let len = self.units.len() as isize;
        self.cursor = (self.cursor as isize + delta).rem_euclid(len) as usize;
    }

    pub fn selected(&self) -> Option<&Unit> {
        self.units.get(self.cursor)
    }
}

#[derive(Default, Debug, PartialEq, Eq)]
pub struct CategoryInfo {
    pub name: String,
    pub description: String,
}

#[derive(Default, Debug, PartialEq, Eq)]
pub struct MealView {
    pub image: String,
    pub title: String,
    pub category: String,
    pub area: String,
    pub source: Option<String>,
    pub tags: Vec<String>,
    pub ingredients: Vec<String>,
    pub measures_left: Vec<String>,
    pub measures_right: Vec<String>,
    pub steps: Vec<String>,
    pub instructions_message: Option<String>,
}

/// Every region the renderers write into, plus page visibility.
#[derive(Default)]
pub struct Surface {
    visible: [bool; 4],
    pub categories: Region,
    pub sidebar: Region,
    pub sidebar_open: bool,
    pub results: Region,
    pub results_query: String,
    pub category_info: CategoryInfo,
    pub category_meals: Region,
    pub meal: MealView,
    pub breadcrumb: String,
}

impl Surface {
    pub fn hide_all(&mut self) {
        self.visible = [false; 4];
    }

    pub fn show(&mut self, page: PageId) {
        self.visible[page.index()] = true;
    }

    pub fn is_visible(&self, page: PageId) -> bool {
        self.visible[page.index()]
    }

    pub fn visible_pages(&self) -> Vec<PageId> {
        PageId::ALL
            .into_iter()
            .filter(|page| self.is_visible(*page))
            .collect()
    }

    pub fn current_page(&self) -> Option<PageId> {
        self.visible_pages().first().copied()
    }

    /// The unit list that keyboard selection acts on for the visible page.
    pub fn active_region_mut(&mut self) -> Option<&mut Region> {
        if self.sidebar_open {
            return Some(&mut self.sidebar);
        }
        match self.current_page()? {
            PageId::Home => Some(&mut self.categories),
            PageId::SearchResults => Some(&mut self.results),
            PageId::Category => Some(&mut self.category_meals),
            PageId::MealDetail => None,
        }
    }
}
