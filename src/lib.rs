//! Minimal user CRUD API over Postgres with password login and JWT bearer auth.
//!
//! `POST /signup` and `POST /login` are public; `GET /`, `PUT /:id` and
//! `DELETE /:id` require `Authorization: Bearer <token>`.

pub mod app;
pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod state;
pub mod users;

pub use app::build_app;
pub use config::AppConfig;
pub use error::ApiError;
pub use state::AppState;
