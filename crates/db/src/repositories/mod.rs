//! Repositories own the in-memory collections.
//!
//! Each repository guards its collection with a single `RwLock` held for
//! the duration of one call, and re-checks its invariants under the write
//! lock before mutating.

pub mod category_repo;
pub mod question_repo;

pub use category_repo::CategoryRepo;
pub use question_repo::{QuestionLookup, QuestionRepo};
