//! Remote data access for the InnovaLex dashboard.
//!
//! The hosted backend exposes each table over a PostgREST-style REST API and
//! authenticates users through a hosted auth service. This crate wraps both:
//!
//! - [`TableBackend`]: the seam every repository talks through.
//! - [`RestClient`]: `reqwest` implementation against `/rest/v1`.
//! - [`MemoryBackend`]: in-process implementation with the backend's
//!   column defaults, for tests and offline runs.
//! - [`AuthClient`]: password sign-in, sign-up, current user, sign-out.
//! - [`models`] and [`repositories`]: typed rows and per-table access.

pub mod auth;
pub mod backend;
pub mod error;
mod http;
pub mod memory;
pub mod models;
pub mod query;
pub mod repositories;
pub mod rest;

pub use auth::AuthClient;
pub use backend::TableBackend;
pub use error::RemoteError;
pub use memory::MemoryBackend;
pub use query::Query;
pub use rest::{BackendConfig, RestClient};
