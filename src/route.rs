use std::fmt;
use tracing::debug;

const SEARCH_PREFIX: &str = "/search/";
const CATEGORY_PREFIX: &str = "/category/";
const MEAL_PREFIX: &str = "/meal/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Search(String),
    Category(String),
    Meal(String),
}

impl Route {
    /// Parses a fragment such as `#/category/Side%20Dish`. The leading `#`
    /// is optional. Anything unrecognised, undecodable or with an empty
    /// parameter routes home.
    pub fn parse(fragment: &str) -> Route {
        let path = fragment.trim().trim_start_matches('#');
        if path.is_empty() || path == "/" {
            return Route::Home;
        }

        let (prefix, raw) = match [SEARCH_PREFIX, CATEGORY_PREFIX, MEAL_PREFIX]
            .into_iter()
            .find_map(|prefix| path.strip_prefix(prefix).map(|rest| (prefix, rest)))
        {
            Some(found) => found,
            None => {
                debug!(fragment, "unrecognised fragment");
                return Route::Home;
            }
        };

        let param = match urlencoding::decode(raw) {
            Ok(param) => param.into_owned(),
            Err(e) => {
                debug!(fragment, error = %e, "undecodable fragment");
                return Route::Home;
            }
        };
        if param.trim().is_empty() {
            return Route::Home;
        }

        match prefix {
            SEARCH_PREFIX => Route::Search(param),
            CATEGORY_PREFIX => Route::Category(param),
            _ => Route::Meal(param),
        }
    }

    pub fn to_fragment(&self) -> String {
        match self {
            Route::Home => "#/".to_string(),
            Route::Search(q) => format!("#{}{}", SEARCH_PREFIX, urlencoding::encode(q)),
            Route::Category(name) => format!("#{}{}", CATEGORY_PREFIX, urlencoding::encode(name)),
            Route::Meal(id) => format!("#{}{}", MEAL_PREFIX, urlencoding::encode(id)),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_fragment())
    }
}

/// The current fragment plus a back stack, standing in for a browser's
/// location/history.
///
/// [`Location::set`] is what the page controller writes after a
/// transition; it never routes. [`Location::back`] is an external change
/// and hands the fragment back so the caller can route it.
pub struct Location {
    current: String,
    history: Vec<String>,
}

impl Location {
    pub fn new(initial: &str) -> Self {
        Self {
            current: initial.to_string(),
            history: Vec::new(),
        }
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn route(&self) -> Route {
        Route::parse(&self.current)
    }

    /// Writing the fragment that is already current is a no-op, so a page
    /// transition reached through `back` does not grow the history.
    pub fn set(&mut self, fragment: String) {
        if fragment == self.current {
            return;
        }
        let previous = std::mem::replace(&mut self.current, fragment);
        self.history.push(previous);
    }

    pub fn back(&mut self) -> Option<Route> {
        let previous = self.history.pop()?;
        self.current = previous;
        Some(self.route())
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_four_shapes() {
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("#"), Route::Home);
        assert_eq!(Route::parse("#/"), Route::Home);
        assert_eq!(
            Route::parse("#/search/chicken%20curry"),
            Route::Search("chicken curry".into())
        );
        assert_eq!(
            Route::parse("/category/Side%20Dish"),
            Route::Category("Side Dish".into())
        );
        assert_eq!(Route::parse("#/meal/52772"), Route::Meal("52772".into()));
    }

    #[test]
    fn unknown_or_empty_routes_go_home() {
        assert_eq!(Route::parse("#/favourites"), Route::Home);
        assert_eq!(Route::parse("#/search/"), Route::Home);
        assert_eq!(Route::parse("#/meal/%20"), Route::Home);
        assert_eq!(Route::parse("#/category/%FF"), Route::Home);
    }

    #[test]
    fn fragments_percent_encode_segments() {
        assert_eq!(Route::Home.to_fragment(), "#/");
        assert_eq!(
            Route::Search("mac & cheese".into()).to_fragment(),
            "#/search/mac%20%26%20cheese"
        );
        assert_eq!(
            Route::Category("Side Dish".into()).to_fragment(),
            "#/category/Side%20Dish"
        );
    }

    #[test]
    fn fragment_reparses_to_same_route() {
        for route in [
            Route::Home,
            Route::Search("a/b?c".into()),
            Route::Category("Miscellaneous".into()),
            Route::Meal("53013".into()),
        ] {
            assert_eq!(Route::parse(&route.to_fragment()), route);
        }
    }

    #[test]
    fn back_walks_history_without_duplicating() {
        let mut location = Location::new("#/");
        location.set("#/category/Beef".into());
        location.set("#/meal/1".into());
        location.set("#/meal/1".into());

        assert_eq!(location.back(), Some(Route::Category("Beef".into())));
        // the page controller rewrites the same fragment after routing
        location.set("#/category/Beef".into());
        assert_eq!(location.back(), Some(Route::Home));
        assert_eq!(location.back(), None);
        assert!(!location.can_go_back());
    }
}
