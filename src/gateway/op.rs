//! `op` subprocess invocation

use serde::de::DeserializeOwned;
use std::process::{Command, Output};

use super::{args, GatewayError, VaultCli};
use crate::core::{Account, Item, Vault};
use crate::ui;

/// Talks to the real 1Password CLI.
pub struct OpCli {
	program: String,
}

impl OpCli {
	pub fn new(program: impl Into<String>) -> Self {
		Self {
			program: program.into(),
		}
	}

	fn run(&self, args: &[String]) -> Result<Output, GatewayError> {
		let command = args::render(&self.program, args);
		ui::debug(&format!("Running: {}", command));

		let output = Command::new(&self.program)
			.args(args)
			.output()
			.map_err(|source| GatewayError::Spawn {
				program: self.program.clone(),
				source,
			})?;

		if !output.status.success() {
			return Err(GatewayError::Exit {
				command,
				code: output.status.code(),
				stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
			});
		}

		Ok(output)
	}

	fn run_json<T: DeserializeOwned>(&self, args: &[String]) -> Result<T, GatewayError> {
		let output = self.run(args)?;
		parse_json(&args::render(&self.program, args), &output.stdout)
	}
}

impl VaultCli for OpCli {
	fn program(&self) -> &str {
		&self.program
	}

	fn list_accounts(&self) -> Result<Vec<Account>, GatewayError> {
		self.run_json(&args::list_accounts())
	}

	fn list_vaults(&self, account: &str) -> Result<Vec<Vault>, GatewayError> {
		self.run_json(&args::list_vaults(account))
	}

	fn list_items(&self, vault: &str, account: Option<&str>) -> Result<Vec<Item>, GatewayError> {
		let items: Vec<Item> = self.run_json(&args::list_items(vault, account))?;
		ui::debug(&format!("Parsed {} items from vault {}", items.len(), vault));
		Ok(items)
	}

	fn archive_item(&self, id: &str, vault: &str, account: Option<&str>) -> Result<(), GatewayError> {
		self.run(&args::archive_item(id, vault, account)).map(|_| ())
	}
}

/// Parse captured stdout. Empty output counts as an empty list, which is what
/// `op` prints for a vault with no items.
pub(crate) fn parse_json<T: DeserializeOwned>(command: &str, stdout: &[u8]) -> Result<T, GatewayError> {
	let body = if stdout.iter().all(u8::is_ascii_whitespace) {
		&b"[]"[..]
	} else {
		stdout
	};

	serde_json::from_slice(body).map_err(|source| GatewayError::MalformedJson {
		command: command.to_string(),
		source,
	})
}
