//! HTTP Handlers

mod auth;
mod ping;
mod submission;

pub use auth::*;
pub use ping::*;
pub use submission::*;
