//! Data-access layer: one transactional unit per call.

mod crud;
mod links;
pub use crud::{CrudService, DEFAULT_LIMIT, MAX_LIMIT};
pub use links::LinkService;
