//! URL routes. The default route and `/charts` render the same page;
//! anything unrecognized falls through to the not-found page.

use dioxus::prelude::*;

use crate::pages::{ChartsPage, ConfigPage, Home, InsightsPage, NotFound};
use crate::shell::Shell;

#[derive(Debug, Clone, PartialEq, Routable)]
pub enum Route {
    #[layout(Shell)]
    #[route("/")]
    Home {},
    #[route("/charts")]
    ChartsPage {},
    #[route("/insights")]
    InsightsPage {},
    #[route("/config")]
    ConfigPage {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[cfg(test)]
mod tests {
    use super::Route;

    #[test]
    fn test_default_route_is_the_charts_page() {
        assert_eq!("/".parse::<Route>().unwrap(), Route::Home {});
    }

    #[test]
    fn test_known_paths_map_to_their_pages() {
        assert_eq!("/charts".parse::<Route>().unwrap(), Route::ChartsPage {});
        assert_eq!(
            "/insights".parse::<Route>().unwrap(),
            Route::InsightsPage {}
        );
        assert_eq!("/config".parse::<Route>().unwrap(), Route::ConfigPage {});
    }

    #[test]
    fn test_unknown_path_falls_through_to_not_found() {
        assert_eq!(
            "/xyz".parse::<Route>().unwrap(),
            Route::NotFound {
                segments: vec!["xyz".to_string()]
            }
        );
        assert_eq!(
            "/no/such/page".parse::<Route>().unwrap(),
            Route::NotFound {
                segments: vec!["no".to_string(), "such".to_string(), "page".to_string()]
            }
        );
    }
}
