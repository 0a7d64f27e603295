//! In-memory todo list served over HTTP.
//!
//! [`store::TodoStore`] owns the records and id assignment;
//! [`api::create_router`] maps the `/todos` routes onto it.

pub mod api;
pub mod config;
pub mod models;
pub mod store;
