//! Drives the shell against the live mock server, line by line, the way a
//! user typing locations would.

use std::io::Cursor;
use std::net::SocketAddr;

use users_core::{Route, Session};
use users_shell::render::{ERROR_TEXT, NOT_FOUND_TEXT, PENDING_TEXT};
use users_shell::{run_lines, App, ShellConfig, UreqTransport};

fn start_mock_server() -> SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });
    addr
}

fn app(addr: SocketAddr) -> App {
    let config = ShellConfig {
        base_url: format!("http://{addr}/api"),
        api_key: None,
    };
    App::new(Session::new(config.client().unwrap()), UreqTransport::new())
}

#[test]
fn users_page_renders_pending_then_list() {
    let mut app = app(start_mock_server());

    let frames = app.visit("/users/");
    assert_eq!(frames.len(), 2);
    assert!(frames[0].ends_with(PENDING_TEXT));
    assert!(frames[1].contains("User listing (page 1 of 2)"));
    assert!(frames[1].contains("- George </users/1>"));
    assert!(frames[1].contains("next: </users/?page=2>"));
}

#[test]
fn same_page_renders_without_loading() {
    let mut app = app(start_mock_server());

    assert_eq!(app.visit("/users/?page=2").len(), 2);
    let frames = app.visit("/users/?page=2#top");
    assert_eq!(frames.len(), 1);
    assert!(frames[0].contains("- Michael </users/7>"));
}

#[test]
fn unknown_user_renders_error_placeholder() {
    let mut app = app(start_mock_server());

    let frames = app.visit("/users/abc123");
    assert!(frames[0].ends_with(PENDING_TEXT));
    assert!(frames[1].ends_with(ERROR_TEXT));
}

#[test]
fn not_found_then_home_command() {
    let mut app = app(start_mock_server());

    let input = Cursor::new("/nonexistent\n\nhome\n");
    let mut out = Vec::new();
    run_lines(&mut app, input, &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    let frames: Vec<&str> = text.split("----\n").filter(|f| !f.is_empty()).collect();
    assert_eq!(frames.len(), 2);
    assert!(frames[0].contains(NOT_FOUND_TEXT));
    assert!(frames[1].contains("Welcome to the user directory"));
    assert_eq!(app.session().route(), &Route::Home);
}

#[test]
fn detail_page_shows_user() {
    let mut app = app(start_mock_server());

    let frames = app.visit("/users/12");
    assert!(frames[1].contains("Rachel Howell"));
    assert!(frames[1].contains("email: rachel.howell@reqres.in"));
}
