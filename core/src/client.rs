//! Stateless HTTP request builder and response parser for the posts API.
//!
//! # Design
//! `PostClient` holds only a `base_url` and carries no mutable state between
//! calls. Each REST operation is split into a `build_*` method that produces
//! an `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! The caller executes the actual HTTP round-trip.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Post, PostId, PostInput, PostPatch};

/// Resource collection path appended to the base URL.
pub const POSTS_PATH: &str = "/api/posts";

/// Synchronous, stateless client for the posts API.
#[derive(Debug, Clone)]
pub struct PostClient {
    base_url: String,
}

impl PostClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn collection_url(&self) -> String {
        format!("{}{POSTS_PATH}", self.base_url)
    }

    fn item_url(&self, id: &PostId) -> String {
        format!("{}{POSTS_PATH}/{id}", self.base_url)
    }

    pub fn build_list_posts(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.collection_url(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_post(&self, input: &PostInput) -> Result<HttpRequest, ApiError> {
        json_request(HttpMethod::Post, self.collection_url(), input)
    }

    pub fn build_replace_post(&self, id: &PostId, input: &PostInput) -> Result<HttpRequest, ApiError> {
        json_request(HttpMethod::Put, self.item_url(id), input)
    }

    pub fn build_patch_post(&self, id: &PostId, patch: &PostPatch) -> Result<HttpRequest, ApiError> {
        json_request(HttpMethod::Patch, self.item_url(id), patch)
    }

    pub fn build_delete_post(&self, id: &PostId) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: self.item_url(id),
            headers: Vec::new(),
            body: None,
        }
    }

    /// The returned order is the server's order; nothing is re-sorted.
    pub fn parse_list_posts(&self, response: HttpResponse) -> Result<Vec<Post>, ApiError> {
        check_status(&response)?;
        parse_body(&response)
    }

    pub fn parse_create_post(&self, response: HttpResponse) -> Result<Post, ApiError> {
        check_status(&response)?;
        parse_body(&response)
    }

    pub fn parse_replace_post(&self, response: HttpResponse) -> Result<Post, ApiError> {
        check_status(&response)?;
        parse_body(&response)
    }

    pub fn parse_patch_post(&self, response: HttpResponse) -> Result<Post, ApiError> {
        check_status(&response)?;
        parse_body(&response)
    }

    /// Any body on a successful delete is ignored.
    pub fn parse_delete_post(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }

    /// Status-only check for any mutation whose response body is unused.
    /// A `204`, an empty body or a wrapped payload all count as success.
    pub fn parse_mutation_ack(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }
}

fn json_request<T: Serialize>(method: HttpMethod, path: String, payload: &T) -> Result<HttpRequest, ApiError> {
    let body = serde_json::to_string(payload).map_err(|e| ApiError::SerializationError(e.to_string()))?;
    Ok(HttpRequest {
        method,
        path,
        headers: vec![("content-type".to_string(), "application/json".to_string())],
        body: Some(body),
    })
}

fn parse_body<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, ApiError> {
    serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

/// Map non-2xx status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if (200..300).contains(&response.status) {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}
