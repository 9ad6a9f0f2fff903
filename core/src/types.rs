//! Domain DTOs for the posts API.
//!
//! # Design
//! The wire format uses the service's own field names, `judul` (title) and
//! `deskripsi` (description). Rust code sees `title` / `description`; serde
//! renames bridge the two. The mock-server crate defines its own copies of
//! these shapes and integration tests catch any drift.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Server-assigned identifier of a post.
///
/// The service owns the id format, so it is kept opaque: whatever JSON
/// number or string arrives is echoed back verbatim in paths. Two ids are
/// equal when they render the same, so `1` and `"1"` name the same post.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PostId {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostId::Number(n) => write!(f, "{n}"),
            PostId::Text(s) => f.write_str(s),
        }
    }
}

impl PartialEq for PostId {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (PostId::Number(a), PostId::Number(b)) => a == b,
            (PostId::Text(a), PostId::Text(b)) => a == b,
            _ => self.to_string() == other.to_string(),
        }
    }
}

impl Eq for PostId {}

impl Hash for PostId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

impl From<u64> for PostId {
    fn from(n: u64) -> Self {
        PostId::Number(n.into())
    }
}

impl From<&str> for PostId {
    /// Integer text becomes `Number` so the path it renders to is the same
    /// either way.
    fn from(s: &str) -> Self {
        match s.parse::<i64>() {
            Ok(n) => PostId::Number(n.into()),
            Err(_) => PostId::Text(s.to_string()),
        }
    }
}

/// A single post returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Post {
    pub id: PostId,
    #[serde(rename = "judul")]
    pub title: String,
    #[serde(rename = "deskripsi")]
    pub description: String,
}

/// Request payload for creating or fully replacing a post.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PostInput {
    #[serde(rename = "judul")]
    pub title: String,
    #[serde(rename = "deskripsi")]
    pub description: String,
}

/// Request payload for a partial update. Only the fields present in the JSON
/// are applied; omitted fields remain unchanged on the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PostPatch {
    #[serde(rename = "judul", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "deskripsi", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<PostInput> for PostPatch {
    fn from(input: PostInput) -> Self {
        Self {
            title: Some(input.title),
            description: Some(input.description),
        }
    }
}
