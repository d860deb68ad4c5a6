use bevy::prelude::*;

/// Top-level page the site is showing.
/// `/` -> Home, `/poster` -> Poster, `/presentation` -> Presentation, anything else -> NotFound.
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum Route {
    #[default]
    Home,
    Poster,
    Presentation,
    NotFound,
}

impl Route {
    /// Query strings, fragments and surrounding slashes are ignored.
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        match path.trim_matches('/') {
            "" => Route::Home,
            "poster" => Route::Poster,
            "presentation" => Route::Presentation,
            _ => Route::NotFound,
        }
    }

    /// Parse an in-site link target; `None` for anchors and external links.
    pub fn from_href(href: &str) -> Option<Self> {
        href.starts_with('/').then(|| Self::from_path(href))
    }

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Poster => "/poster",
            Route::Presentation => "/presentation",
            Route::NotFound => "/404",
        }
    }

    /// Address to record in browser history. `None` for the not-found page,
    /// which keeps whatever address the visitor asked for.
    pub fn history_path(self) -> Option<&'static str> {
        match self {
            Route::NotFound => None,
            other => Some(other.path()),
        }
    }

    /// Window / document title; the home title comes from config.
    pub fn title(self, home_title: &str) -> String {
        match self {
            Route::Home => home_title.to_string(),
            Route::Poster => "פוסטר — ClearDrop".into(),
            Route::Presentation => "תסריט מצגת — ClearDrop".into(),
            Route::NotFound => "הדף לא נמצא — ClearDrop".into(),
        }
    }
}

/// Home page phase: the splash gate blocks the content until it completes.
#[derive(SubStates, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
#[source(Route = Route::Home)]
pub enum HomePhase {
    #[default]
    Loading,
    Content,
}

/// Whether the splash already completed in this process.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct SplashState {
    pub shown: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_map_to_routes() {
        assert_eq!(Route::from_path("/"), Route::Home);
        assert_eq!(Route::from_path(""), Route::Home);
        assert_eq!(Route::from_path("/poster"), Route::Poster);
        assert_eq!(Route::from_path("/poster/"), Route::Poster);
        assert_eq!(Route::from_path("/presentation?print=1"), Route::Presentation);
        assert_eq!(Route::from_path("/#problem"), Route::Home);
        assert_eq!(Route::from_path("/admin"), Route::NotFound);
        assert_eq!(Route::from_path("/poster/extra"), Route::NotFound);
    }

    #[test]
    fn not_found_keeps_the_requested_address() {
        assert_eq!(Route::NotFound.history_path(), None);
        for route in [Route::Home, Route::Poster, Route::Presentation] {
            let path = route.history_path().expect("real pages have an address");
            assert_eq!(Route::from_path(path), route);
        }
    }

    #[test]
    fn hrefs_distinguish_routes_from_anchors() {
        assert_eq!(Route::from_href("/presentation"), Some(Route::Presentation));
        assert_eq!(Route::from_href("#safety"), None);
    }
}
