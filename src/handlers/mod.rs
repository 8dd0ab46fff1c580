//! HTTP handlers for entity CRUD, associations, device lookup, and admin views.

pub mod admin;
pub mod entity;
pub mod links;
pub mod student_answer;
