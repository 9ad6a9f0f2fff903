//! Terminal shell for the posts client: configuration, the HTTP transport,
//! text rendering and the command loop around `posts_core::Controller`.

pub mod config;
pub mod repl;
pub mod transport;
pub mod view;

pub use config::{Config, ConfigError};
pub use transport::UreqTransport;
