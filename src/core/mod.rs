//! Core domain types

pub mod duplicates;
pub mod item;

pub use duplicates::{find_duplicates, redundant_count, sorted_by_title, DuplicateGroup};
pub use item::{Account, Item, Vault};
