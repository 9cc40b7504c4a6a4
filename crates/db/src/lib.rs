//! In-memory storage for categories and questions.
//!
//! [`models`] holds the stored entities and the request DTOs that carry
//! them over the wire; [`repositories`] owns the collections and enforces
//! the uniqueness, nesting and ownership invariants on every mutation.

pub mod models;
pub mod repositories;
