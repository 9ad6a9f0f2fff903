//! Client core for the posts service: request building, the post form state
//! machine and the list it edits.
//!
//! # Overview
//! `PostClient` builds `HttpRequest` values and parses `HttpResponse` values
//! without touching the network (host-does-IO pattern). `Controller` drives
//! the form and list through a host-supplied `Transport`, so the whole state
//! machine runs against a scripted fake in tests.
//!
//! # Design
//! - `PostClient` is stateless; it holds only `base_url`.
//! - `FormState` transitions are pure; `Controller` adds the network calls
//!   and the refetch-after-every-mutation policy.
//! - The list store is never patched locally. It always holds the last
//!   successful list response.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod controller;
pub mod error;
pub mod form;
pub mod http;
pub mod store;
pub mod transport;
pub mod types;

pub use client::PostClient;
pub use controller::{Controller, Dispatch, SubmitOutcome};
pub use error::ApiError;
pub use form::{validate, Draft, Field, FieldErrors, FormMode, FormState, Mutation, SubmitRejection};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use store::PostListStore;
pub use transport::Transport;
pub use types::{Post, PostId, PostInput, PostPatch};
