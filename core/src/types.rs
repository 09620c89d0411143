//! Domain DTOs for the users API.
//!
//! # Design
//! These types mirror the reqres.in envelopes but are defined independently
//! from the mock-server crate. Integration tests catch any schema drift
//! between the two.
//!
//! The remote API sends `id` as a JSON number while links and route
//! parameters treat it as text, so `UserRecord::id` is a `String` and the
//! decoder accepts either representation.

use serde::{Deserialize, Deserializer, Serialize};

/// A single user as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserRecord {
    #[serde(deserialize_with = "id_from_number_or_string")]
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub avatar: String,
}

impl UserRecord {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Attribution block the API attaches to every envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Support {
    pub url: String,
    pub text: String,
}

/// One page of users plus the pagination fields reported by the API.
///
/// `data` keeps the server's order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserPage {
    pub page: u32,
    pub per_page: u32,
    pub total: u32,
    pub total_pages: u32,
    pub data: Vec<UserRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub support: Option<Support>,
}

impl UserPage {
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }
}

/// A single user wrapped in the API's `{ "data": ... }` envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserEnvelope {
    pub data: UserRecord,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub support: Option<Support>,
}

/// Completed output of a route loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoaderData {
    Users(UserPage),
    User(UserEnvelope),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(u64),
    Text(String),
}

fn id_from_number_or_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Number(n) => n.to_string(),
        RawId::Text(s) => s,
    })
}
