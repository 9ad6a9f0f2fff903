use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::debug;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub judul: String,
    pub deskripsi: String,
}

#[derive(Deserialize)]
pub struct PostInput {
    pub judul: String,
    pub deskripsi: String,
}

#[derive(Deserialize)]
pub struct PostPatch {
    pub judul: Option<String>,
    pub deskripsi: Option<String>,
}

#[derive(Default)]
pub struct Posts {
    next_id: u64,
    rows: BTreeMap<u64, Post>,
}

impl Posts {
    fn insert(&mut self, input: PostInput) -> Post {
        self.next_id += 1;
        let post = Post {
            id: self.next_id,
            judul: input.judul,
            deskripsi: input.deskripsi,
        };
        self.rows.insert(post.id, post.clone());
        post
    }
}

pub type Db = Arc<RwLock<Posts>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Posts::default()));
    Router::new()
        .route("/api/posts", get(list_posts).post(create_post))
        .route(
            "/api/posts/{id}",
            get(get_post)
                .put(replace_post)
                .patch(patch_post)
                .delete(delete_post),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Ids are sequential, so key order is creation order.
async fn list_posts(State(db): State<Db>) -> Json<Vec<Post>> {
    let posts = db.read().await;
    Json(posts.rows.values().cloned().collect())
}

async fn create_post(
    State(db): State<Db>,
    Json(input): Json<PostInput>,
) -> (StatusCode, Json<Post>) {
    let post = db.write().await.insert(input);
    debug!(id = post.id, "post created");
    (StatusCode::CREATED, Json(post))
}

async fn get_post(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<Json<Post>, StatusCode> {
    let posts = db.read().await;
    posts.rows.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn replace_post(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(input): Json<PostInput>,
) -> Result<Json<Post>, StatusCode> {
    let mut posts = db.write().await;
    let post = posts.rows.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    post.judul = input.judul;
    post.deskripsi = input.deskripsi;
    Ok(Json(post.clone()))
}

async fn patch_post(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(input): Json<PostPatch>,
) -> Result<Json<Post>, StatusCode> {
    let mut posts = db.write().await;
    let post = posts.rows.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    if let Some(judul) = input.judul {
        post.judul = judul;
    }
    if let Some(deskripsi) = input.deskripsi {
        post.deskripsi = deskripsi;
    }
    Ok(Json(post.clone()))
}

async fn delete_post(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<StatusCode, StatusCode> {
    let mut posts = db.write().await;
    let removed = posts.rows.remove(&id).ok_or(StatusCode::NOT_FOUND)?;
    debug!(id = removed.id, "post deleted");
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_serializes_with_wire_names() {
        let post = Post {
            id: 1,
            judul: "Test".to_string(),
            deskripsi: "Isi".to_string(),
        };
        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["judul"], "Test");
        assert_eq!(json["deskripsi"], "Isi");
    }

    #[test]
    fn insert_assigns_sequential_ids() {
        let mut posts = Posts::default();
        let a = posts.insert(PostInput {
            judul: "a".to_string(),
            deskripsi: "a".to_string(),
        });
        let b = posts.insert(PostInput {
            judul: "b".to_string(),
            deskripsi: "b".to_string(),
        });
        assert_eq!((a.id, b.id), (1, 2));
        posts.rows.remove(&2);
        let c = posts.insert(PostInput {
            judul: "c".to_string(),
            deskripsi: "c".to_string(),
        });
        assert_eq!(c.id, 3);
    }

    #[test]
    fn post_input_requires_both_fields() {
        let result: Result<PostInput, _> = serde_json::from_str(r#"{"judul":"only"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn post_patch_all_fields_optional() {
        let input: PostPatch = serde_json::from_str(r#"{}"#).unwrap();
        assert!(input.judul.is_none());
        assert!(input.deskripsi.is_none());
    }

    #[test]
    fn post_patch_partial_fields() {
        let input: PostPatch = serde_json::from_str(r#"{"deskripsi":"baru"}"#).unwrap();
        assert!(input.judul.is_none());
        assert_eq!(input.deskripsi.as_deref(), Some("baru"));
    }
}
