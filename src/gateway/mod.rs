//! # External Data Gateway
//!
//! Everything that talks to the `op` CLI goes through [`VaultCli`], so the
//! dedupe flow can run against a fake in tests.

pub mod args;
pub mod error;
pub mod op;

pub use error::GatewayError;
pub use op::OpCli;

use crate::core::{Account, Item, Vault};

pub trait VaultCli {
	/// Program name used when printing command lines.
	fn program(&self) -> &str;

	fn list_accounts(&self) -> Result<Vec<Account>, GatewayError>;

	fn list_vaults(&self, account: &str) -> Result<Vec<Vault>, GatewayError>;

	/// Items in `vault`. Without an account, `op` uses its default one.
	fn list_items(&self, vault: &str, account: Option<&str>) -> Result<Vec<Item>, GatewayError>;

	/// Soft-delete one item. Irreversible from this tool's point of view.
	fn archive_item(&self, id: &str, vault: &str, account: Option<&str>) -> Result<(), GatewayError>;
}
