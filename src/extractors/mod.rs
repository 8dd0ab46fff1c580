//! Request extractors that reject through `AppError`.

pub mod json;
pub mod pagination;
pub use json::ValidJson;
pub use pagination::Pagination;
