//! Structural validation of raw cluster documents
//!
//! A hand-authored declarative schema ([`def`]) and a fail-fast checker
//! ([`check`]) that runs before the typed model is built.

pub mod check;
pub mod def;

pub use check::check;
pub use def::{cluster_schema, Schema, ID_PATTERN};
