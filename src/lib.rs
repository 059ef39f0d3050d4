//! # dupefinder Library
//!
//! Finds items in a 1Password vault that share a title and last-updated
//! timestamp, and archives the redundant copies through the `op` CLI.

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod gateway;
pub mod ui;
