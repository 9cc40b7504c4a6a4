//! Domain building blocks shared by the store and the HTTP layer.
//!
//! Nothing in this crate performs I/O: it defines the identifier type,
//! the formatting rules for names, titles and options, and the error
//! taxonomy every other crate reports through.

pub mod error;
pub mod types;
pub mod validation;
