//! Route table of the user directory.
//!
//! | Location            | Route                  |
//! |---------------------|------------------------|
//! | `/`                 | [`Route::Home`]        |
//! | `/about`            | [`Route::About`]       |
//! | `/users`, `/users/` | [`Route::Users`]       |
//! | `/users/{userId}`   | [`Route::User`]        |
//! | anything else       | [`Route::NotFound`]    |
//!
//! Locations are resolved against a fixed origin with `url`, so dot
//! segments collapse and unsafe characters arrive percent-encoded. A trailing
//! slash is tolerated everywhere. The query string only matters to `/users/`,
//! where it is validated into [`UsersSearch`]. Fragments never affect
//! matching. A `userId` that does not decode to UTF-8 matches nothing.

use std::borrow::Cow;
use std::fmt;

use percent_encoding::percent_decode_str;
use tracing::debug;
use url::Url;

use crate::loader::LoaderDeps;
use crate::search::UsersSearch;

const ORIGIN: &str = "http://localhost/";

/// A location split into its parts. `path` stays percent-encoded and starts
/// with `/` whenever the input is a valid URL reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub path: String,
    pub query: String,
    pub fragment: Option<String>,
}

impl Location {
    pub fn parse(raw: &str) -> Self {
        match Url::parse(ORIGIN).and_then(|origin| origin.join(raw.trim())) {
            Ok(url) => Self {
                path: url.path().to_string(),
                query: url.query().unwrap_or_default().to_string(),
                fragment: url.fragment().map(str::to_string),
            },
            Err(err) => {
                debug!(raw, error = %err, "location is not a URL reference");
                Self {
                    path: raw.to_string(),
                    query: String::new(),
                    fragment: None,
                }
            }
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)?;
        if !self.query.is_empty() {
            write!(f, "?{}", self.query)?;
        }
        if let Some(fragment) = &self.fragment {
            write!(f, "#{fragment}")?;
        }
        Ok(())
    }
}

/// A matched route with its parameters already validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    About,
    Users(UsersSearch),
    User { user_id: String },
    NotFound,
}

impl Route {
    pub fn resolve(location: &Location) -> Self {
        let segments: Vec<&str> = location.path.trim_matches('/').split('/').collect();
        let route = match segments.as_slice() {
            [""] => Self::Home,
            ["about"] => Self::About,
            ["users"] => Self::Users(UsersSearch::from_query(&location.query)),
            ["users", user_id] if !user_id.is_empty() => match decode_segment(user_id) {
                Some(user_id) => Self::User { user_id },
                None => Self::NotFound,
            },
            _ => Self::NotFound,
        };
        debug!(location = %location, ?route, "route matched");
        route
    }

    /// What the route's loader depends on, or `None` for routes without one.
    pub fn loader_deps(&self) -> Option<LoaderDeps> {
        match self {
            Self::Users(search) => Some(LoaderDeps::Users { page: search.page }),
            Self::User { user_id } => Some(LoaderDeps::User {
                user_id: user_id.clone(),
            }),
            Self::Home | Self::About | Self::NotFound => None,
        }
    }

    /// Canonical location for links. `NotFound` has none.
    pub fn href(&self) -> Option<String> {
        match self {
            Self::Home => Some("/".to_string()),
            Self::About => Some("/about".to_string()),
            Self::Users(search) => Some(format!("/users/?{search}")),
            Self::User { user_id } => Some(user_href(user_id)),
            Self::NotFound => None,
        }
    }

    /// Whether a navbar link to `self` is active while `current` is shown.
    /// Search parameters and nested routes do not matter.
    pub fn is_active_for(&self, current: &Route) -> bool {
        match (self, current) {
            (Self::Users(_), Self::Users(_) | Self::User { .. }) => true,
            (Self::Home, Self::Home) | (Self::About, Self::About) => true,
            _ => false,
        }
    }
}

fn user_href(user_id: &str) -> String {
    let mut url = match Url::parse(ORIGIN) {
        Ok(url) => url,
        Err(_) => return format!("/users/{user_id}"),
    };
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty().push("users").push(user_id);
    }
    url.path().to_string()
}

/// Undo percent-encoding in one path segment. `None` when the bytes are
/// not UTF-8.
fn decode_segment(segment: &str) -> Option<String> {
    percent_decode_str(segment)
        .decode_utf8()
        .ok()
        .map(Cow::into_owned)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(raw: &str) -> Route {
        Route::resolve(&Location::parse(raw))
    }

    #[test]
    fn location_splits_query_and_fragment() {
        let location = Location::parse("/users/?page=2#top");
        assert_eq!(location.path, "/users/");
        assert_eq!(location.query, "page=2");
        assert_eq!(location.fragment.as_deref(), Some("top"));
        assert_eq!(location.to_string(), "/users/?page=2#top");
    }

    #[test]
    fn relative_location_gets_leading_slash() {
        assert_eq!(Location::parse("about").path, "/about");
        assert_eq!(Location::parse("").path, "/");
    }

    #[test]
    fn static_routes_match() {
        assert_eq!(resolve("/"), Route::Home);
        assert_eq!(resolve("/about"), Route::About);
        assert_eq!(resolve("/about/"), Route::About);
    }

    #[test]
    fn users_route_validates_search() {
        assert_eq!(resolve("/users/"), Route::Users(UsersSearch::default()));
        match resolve("/users?page=2") {
            Route::Users(search) => assert_eq!(search.page(), 2),
            other => panic!("unexpected route {other:?}"),
        }
        match resolve("/users/?page=0") {
            Route::Users(search) => assert_eq!(search.page(), 1),
            other => panic!("unexpected route {other:?}"),
        }
    }

    #[test]
    fn user_route_extracts_id() {
        assert_eq!(
            resolve("/users/abc123"),
            Route::User {
                user_id: "abc123".to_string()
            }
        );
        assert_eq!(
            resolve("/users/a%20b"),
            Route::User {
                user_id: "a b".to_string()
            }
        );
    }

    #[test]
    fn unknown_paths_are_not_found() {
        for raw in ["/nonexistent", "/users/1/posts", "/users//1", "/about/me"] {
            assert_eq!(resolve(raw), Route::NotFound, "{raw}");
        }
    }

    #[test]
    fn malformed_escape_is_kept() {
        assert_eq!(decode_segment("50%").as_deref(), Some("50%"));
        assert_eq!(decode_segment("%zz1").as_deref(), Some("%zz1"));
        assert_eq!(decode_segment("%41%42").as_deref(), Some("AB"));
    }

    #[test]
    fn non_utf8_user_id_is_not_found() {
        assert_eq!(decode_segment("%FF"), None);
        assert_eq!(resolve("/users/%FF"), Route::NotFound);
        assert_eq!(resolve("/users/%C3%28"), Route::NotFound);
    }

    #[test]
    fn multibyte_user_id_decodes() {
        assert_eq!(
            resolve("/users/%C3%A9t%C3%A9"),
            Route::User {
                user_id: "\u{e9}t\u{e9}".to_string()
            }
        );
    }

    #[test]
    fn dot_segments_are_normalized() {
        assert_eq!(resolve("/users/../about"), Route::About);
        assert_eq!(resolve("/about/./"), Route::About);
        assert_eq!(
            resolve("/users/./7"),
            Route::User {
                user_id: "7".to_string()
            }
        );
    }

    #[test]
    fn unescaped_characters_are_encoded_then_decoded() {
        let location = Location::parse("/users/a b");
        assert_eq!(location.path, "/users/a%20b");
        assert_eq!(
            Route::resolve(&location),
            Route::User {
                user_id: "a b".to_string()
            }
        );
    }

    #[test]
    fn hrefs_round_trip_through_resolve() {
        let routes = [
            Route::Home,
            Route::About,
            Route::Users(UsersSearch::from_query("page=2")),
            Route::User {
                user_id: "a/b c".to_string(),
            },
        ];
        for route in routes {
            let href = route.href().unwrap();
            assert_eq!(resolve(&href), route, "{href}");
        }
        assert_eq!(Route::NotFound.href(), None);
    }

    #[test]
    fn users_link_is_active_on_detail_pages() {
        let users = Route::Users(UsersSearch::default());
        assert!(users.is_active_for(&resolve("/users/?page=4")));
        assert!(users.is_active_for(&resolve("/users/7")));
        assert!(!users.is_active_for(&Route::Home));
        assert!(Route::Home.is_active_for(&Route::Home));
        assert!(!Route::Home.is_active_for(&Route::About));
    }
}
