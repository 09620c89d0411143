//! Text rendering of the root layout and route views.
//!
//! The root layout is the navbar followed by the outlet. Placeholders are
//! fixed strings so a pending, failed or unmatched navigation always looks
//! the same.

use std::fmt::Write;
use std::num::NonZeroU32;

use users_core::{NavLink, Route, Session, UserPage, UserRecord, UsersSearch, View};

pub const PENDING_TEXT: &str = "Loading...";
pub const ERROR_TEXT: &str = "There was an error fetching data";
pub const NOT_FOUND_TEXT: &str = "Page Not found";
pub const GO_HOME_TEXT: &str = "Go to Home page (type `home`)";

const FEATURES: [&str; 6] = [
    "Dynamic routing",
    "Nested layout",
    "Data loading",
    "Search params",
    "Path params",
    "Not found errors",
];

/// Render the whole frame for the session's current state.
pub fn render(session: &Session) -> String {
    let mut out = navbar(&session.nav_links());
    out.push('\n');
    out.push_str(&outlet(&session.view()));
    out
}

pub fn navbar(links: &[NavLink]) -> String {
    links
        .iter()
        .map(|link| {
            if link.active {
                format!("**{}** <{}>", link.label, link.href)
            } else {
                format!("{} <{}>", link.label, link.href)
            }
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

pub fn outlet(view: &View<'_>) -> String {
    match view {
        View::Home => home(),
        View::About => {
            "About\nA routed directory of demo users served by reqres.in.".to_string()
        }
        View::Pending => PENDING_TEXT.to_string(),
        View::Error(_) => ERROR_TEXT.to_string(),
        View::NotFound => format!("{NOT_FOUND_TEXT}\n[{GO_HOME_TEXT}]"),
        View::UserList { search, page } => user_list(*search, page),
        View::UserDetail(user) => user_detail(user),
    }
}

fn home() -> String {
    let mut out = String::from("Welcome to the user directory\nFeatures:");
    for feature in FEATURES {
        let _ = write!(out, "\n- {feature}");
    }
    out
}

fn user_list(search: UsersSearch, page: &UserPage) -> String {
    let mut out = format!(
        "User listing (page {} of {})",
        search.page(),
        page.total_pages
    );
    if page.data.is_empty() {
        out.push_str("\nNo users on this page.");
    }
    for user in &page.data {
        let href = Route::User {
            user_id: user.id.clone(),
        }
        .href()
        .unwrap_or_default();
        let _ = write!(out, "\n- {} <{href}>", user.first_name);
    }
    if page.has_previous() {
        let _ = write!(out, "\nprevious: <{}>", page_href(page.page - 1));
    }
    if page.has_next() {
        let _ = write!(out, "\nnext: <{}>", page_href(page.page + 1));
    }
    out
}

fn page_href(page: u32) -> String {
    NonZeroU32::new(page)
        .and_then(|page| Route::Users(UsersSearch::new(page)).href())
        .unwrap_or_default()
}

fn user_detail(user: &UserRecord) -> String {
    format!(
        "User detail\n{}\nemail: {}\navatar: {}",
        user.full_name(),
        user.email,
        user.avatar
    )
}

#[cfg(test)]
mod tests {
    use users_core::{ApiError, HttpResponse, UsersClient};

    use super::*;

    fn session() -> Session {
        Session::new(UsersClient::parse("http://localhost:3000/api").unwrap())
    }

    #[test]
    fn home_frame_has_navbar_and_features() {
        let frame = render(&session());
        let mut lines = frame.lines();
        assert_eq!(
            lines.next(),
            Some("**Home** </> | About </about> | Users </users/?page=2>")
        );
        assert_eq!(lines.next(), Some("Welcome to the user directory"));
        assert!(frame.contains("- Search params"));
    }

    #[test]
    fn pending_then_list() {
        let mut s = session();
        let load = s.navigate("/users/?page=2").unwrap();
        assert!(render(&s).ends_with(PENDING_TEXT));

        let body = r#"{"page":2,"per_page":2,"total":4,"total_pages":2,"data":[
            {"id":3,"email":"emma.wong@reqres.in","first_name":"Emma","last_name":"Wong","avatar":""},
            {"id":4,"email":"eve.holt@reqres.in","first_name":"Eve","last_name":"Holt","avatar":""}
        ]}"#;
        assert!(s.settle(&load, Ok(HttpResponse::new(200, body))));
        let frame = render(&s);
        assert!(frame.starts_with("Home </> | About </about> | **Users** </users/?page=2>"));
        assert!(frame.contains("User listing (page 2 of 2)"));
        assert!(frame.contains("- Emma </users/3>\n- Eve </users/4>"));
        assert!(frame.contains("previous: </users/?page=1>"));
        assert!(!frame.contains("next:"));
    }

    #[test]
    fn empty_page_says_so() {
        let mut s = session();
        let load = s.navigate("/users/?page=9").unwrap();
        let body = r#"{"page":9,"per_page":6,"total":12,"total_pages":2,"data":[]}"#;
        s.settle(&load, Ok(HttpResponse::new(200, body)));
        assert!(render(&s).contains("No users on this page."));
    }

    #[test]
    fn detail_frame() {
        let mut s = session();
        let load = s.navigate("/users/4").unwrap();
        let body = r#"{"data":{"id":4,"email":"eve.holt@reqres.in","first_name":"Eve","last_name":"Holt","avatar":"https://reqres.in/img/faces/4-image.jpg"}}"#;
        s.settle(&load, Ok(HttpResponse::new(200, body)));
        let frame = render(&s);
        assert!(frame.contains("User detail\nEve Holt\nemail: eve.holt@reqres.in"));
    }

    #[test]
    fn every_error_kind_renders_the_same() {
        for err in [
            ApiError::NotFound,
            ApiError::Transport("refused".to_string()),
            ApiError::DeserializationError("eof".to_string()),
        ] {
            assert_eq!(outlet(&View::Error(&err)), ERROR_TEXT);
        }
    }

    #[test]
    fn not_found_offers_home() {
        let mut s = session();
        s.navigate("/nope");
        let frame = render(&s);
        assert!(frame.contains(NOT_FOUND_TEXT));
        assert!(frame.contains(GO_HOME_TEXT));
        assert!(!frame.contains("**"));
    }
}
