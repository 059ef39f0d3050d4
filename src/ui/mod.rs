//! # User Interface
//!
//! Colored terminal output and stdin prompts.

pub mod log;
pub mod prompt;

pub use log::{banner, debug, error, header, info, success, warn, Log};
pub use prompt::{confirm, select_option};
