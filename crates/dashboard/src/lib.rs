//! InnovaLex dashboard: entity stores, forms, pages and the layout shell.
//!
//! Everything here is host-agnostic. A [`Dashboard`](app::Dashboard) is
//! built from a [`TableBackend`](innovalex_db::TableBackend), a
//! [`SessionContext`](session::SessionContext) and an
//! [`EventBus`](innovalex_events::EventBus); pages are plain view models
//! that [`render`] turns into text for the console host.

pub mod app;
pub mod auth;
pub mod config;
pub mod error;
pub mod forms;
pub mod layout;
pub mod pages;
pub mod render;
pub mod session;
pub mod stores;
