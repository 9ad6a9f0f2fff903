//! Last-fetched snapshot of the post list.

use crate::types::{Post, PostId};

/// Holds exactly what the most recent successful list fetch returned.
///
/// There is no per-entry mutation: after any create/update/delete the
/// controller refetches and swaps the whole snapshot.
#[derive(Debug, Clone, Default)]
pub struct PostListStore {
    posts: Vec<Post>,
}

impl PostListStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace(&mut self, posts: Vec<Post>) {
        self.posts = posts;
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn find(&self, id: &PostId) -> Option<&Post> {
        self.posts.iter().find(|p| &p.id == id)
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}
