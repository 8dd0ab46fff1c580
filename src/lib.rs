//! EngagED API: REST and admin backend for institutions, educators, lectures,
//! quiz questions, answer options, and anonymous student answers.

pub mod admin;
pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod openapi;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::AppConfig;
pub use error::{AppError, ConfigError};
pub use migration::apply_migrations;
pub use routes::{build_router, build_router_with_limit};
pub use service::{CrudService, LinkService};
pub use state::AppState;
pub use store::{connect, ensure_database_exists};
