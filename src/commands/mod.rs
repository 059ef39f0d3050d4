//! # Command Implementations
//!
//! The dedupe flow and the pieces it is built from.

pub mod dedupe;

pub use dedupe::{DedupeOptions, Outcome};
