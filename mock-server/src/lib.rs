use std::{sync::Arc, time::Duration};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tracing::debug;

pub const DEFAULT_PER_PAGE: u32 = 6;
const MAX_DELAY_SECS: u64 = 10;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub avatar: String,
}

impl User {
    pub fn new(id: u32, first_name: &str, last_name: &str) -> Self {
        Self {
            id,
            email: format!(
                "{}.{}@reqres.in",
                first_name.to_lowercase(),
                last_name.to_lowercase()
            ),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            avatar: format!("https://reqres.in/img/faces/{id}-image.jpg"),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Support {
    pub url: String,
    pub text: String,
}

impl Default for Support {
    fn default() -> Self {
        Self {
            url: "https://reqres.in/#support-heading".to_string(),
            text: "To keep ReqRes free, contributions towards server costs are appreciated!"
                .to_string(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UserPage {
    pub page: u32,
    pub per_page: u32,
    pub total: u32,
    pub total_pages: u32,
    pub data: Vec<User>,
    pub support: Support,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SingleUser {
    pub data: User,
    pub support: Support,
}

/// Query string of `GET /api/users`. Values stay raw so that garbage falls
/// back to defaults instead of a 400.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub page: Option<String>,
    pub per_page: Option<String>,
    pub delay: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DelayParam {
    pub delay: Option<String>,
}

pub type Db = Arc<Vec<User>>;

/// The twelve users the public demo API serves.
pub fn fixture() -> Vec<User> {
    [
        "George Bluth",
        "Janet Weaver",
        "Emma Wong",
        "Eve Holt",
        "Charles Morris",
        "Tracey Ramos",
        "Michael Lawson",
        "Lindsay Ferguson",
        "Tobias Funke",
        "Byron Fields",
        "George Edwards",
        "Rachel Howell",
    ]
    .iter()
    .zip(1..)
    .map(|(name, id)| {
        let (first, last) = name.split_once(' ').unwrap_or((*name, ""));
        User::new(id, first, last)
    })
    .collect()
}

pub fn app() -> Router {
    app_with(fixture())
}

pub fn app_with(users: Vec<User>) -> Router {
    let db: Db = Arc::new(users);
    Router::new()
        .route("/api/users", get(list_users))
        .route("/api/users/{id}", get(get_user))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Slice `users` the way the demo API does: 1-based pages, empty `data`
/// past the end.
pub fn paginate(users: &[User], page: u32, per_page: u32) -> UserPage {
    let per_page = per_page.max(1);
    let total = u32::try_from(users.len()).unwrap_or(u32::MAX);
    let total_pages = total.div_ceil(per_page);
    let skip = (page.max(1) as usize - 1).saturating_mul(per_page as usize);
    UserPage {
        page,
        per_page,
        total,
        total_pages,
        data: users
            .iter()
            .skip(skip)
            .take(per_page as usize)
            .cloned()
            .collect(),
        support: Support::default(),
    }
}

fn positive(raw: Option<&str>) -> Option<u32> {
    raw?.trim().parse::<u32>().ok().filter(|n| *n > 0)
}

async fn simulate_delay(raw: Option<&str>) {
    if let Some(secs) = raw.and_then(|s| s.trim().parse::<u64>().ok()) {
        debug!(secs, "delaying response");
        tokio::time::sleep(Duration::from_secs(secs.min(MAX_DELAY_SECS))).await;
    }
}

async fn list_users(State(db): State<Db>, Query(params): Query<ListParams>) -> Json<UserPage> {
    simulate_delay(params.delay.as_deref()).await;
    let page = positive(params.page.as_deref()).unwrap_or(1);
    let per_page = positive(params.per_page.as_deref()).unwrap_or(DEFAULT_PER_PAGE);
    Json(paginate(&db, page, per_page))
}

async fn get_user(
    State(db): State<Db>,
    Path(id): Path<String>,
    Query(params): Query<DelayParam>,
) -> Result<Json<SingleUser>, (StatusCode, Json<Value>)> {
    simulate_delay(params.delay.as_deref()).await;
    id.parse::<u32>()
        .ok()
        .and_then(|id| db.iter().find(|u| u.id == id).cloned())
        .map(|data| {
            Json(SingleUser {
                data,
                support: Support::default(),
            })
        })
        .ok_or_else(|| (StatusCode::NOT_FOUND, Json(json!({}))))
}
