use crate::api::RecipeSource;
use crate::app::{App, Transition};
use crate::route::Route;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info};

/// Fetches the category list and installs it (or the fallback set).
pub async fn load_categories(app: &Mutex<App>, source: &dyn RecipeSource) {
    let fetched = source.fetch_categories().await;
    match &fetched {
        Some(categories) => info!(count = categories.len(), "categories loaded"),
        None => info!("category fetch failed"),
    }
    app.lock().await.install_categories(fetched);
}

/// Performs the fetch a route needs and turns the answer into a page
/// transition. Failures are already `None` here and map to the empty or
/// not-found outcome.
pub async fn resolve(source: &dyn RecipeSource, route: &Route) -> Transition {
    match route {
        Route::Home => Transition::Home,
        Route::Search(query) => Transition::SearchResults {
            query: query.clone(),
            meals: source.search_meals(query).await.unwrap_or_default(),
        },
        Route::Category(name) => Transition::Category {
            name: name.clone(),
            meals: source.filter_by_category(name).await.unwrap_or_default(),
        },
        Route::Meal(id) => match source.lookup_meal(id).await {
            Some(meal) => Transition::Meal(meal),
            None => Transition::MealNotFound { id: id.clone() },
        },
    }
}

/// Routes to `route` and applies the result unless a newer navigation
/// started meanwhile. Returns whether the transition was applied.
///
/// The lock is not held across network calls, so input keeps flowing
/// while a fetch is outstanding.
pub async fn navigate(app: &Mutex<App>, source: &dyn RecipeSource, route: Route) -> bool {
    let (generation, needs_categories) = {
        let mut app = app.lock().await;
        let generation = app.begin_navigation();
        let needs_categories = matches!(route, Route::Category(_)) && app.store.is_empty();
        (generation, needs_categories)
    };
    debug!(generation, %route, "navigating");

    if needs_categories {
        load_categories(app, source).await;
    }

    let transition = resolve(source, &route).await;
    app.lock().await.apply(generation, transition)
}

/// Startup sequence: categories first, then the initial fragment. The
/// generation is claimed before the category load, so a navigation the user
/// starts while categories are still loading supersedes the initial route.
pub async fn start(app: &Mutex<App>, source: &dyn RecipeSource) -> bool {
    let (generation, route) = {
        let mut app = app.lock().await;
        (app.begin_navigation(), app.location.route())
    };
    debug!(generation, %route, "starting");

    load_categories(app, source).await;
    if !app.lock().await.is_current(generation) {
        debug!(generation, "initial route superseded");
        return false;
    }

    let transition = resolve(source, &route).await;
    app.lock().await.apply(generation, transition)
}

pub fn spawn_navigation(app: Arc<Mutex<App>>, source: Arc<dyn RecipeSource>, route: Route) {
    tokio::spawn(async move {
        navigate(&app, source.as_ref(), route).await;
    });
}
