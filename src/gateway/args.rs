//! Argument templates for each `op` invocation

use crate::config::FORMAT_JSON;

pub fn list_accounts() -> Vec<String> {
	let mut args = strings(&["account", "list"]);
	args.extend(strings(&FORMAT_JSON));
	args
}

pub fn list_vaults(account: &str) -> Vec<String> {
	let mut args = strings(&["vault", "list", "--account", account]);
	args.extend(strings(&FORMAT_JSON));
	args
}

pub fn list_items(vault: &str, account: Option<&str>) -> Vec<String> {
	let mut args = strings(&["item", "list", "--vault", vault]);
	if let Some(account) = account {
		args.extend(strings(&["--account", account]));
	}
	args.extend(strings(&FORMAT_JSON));
	args
}

/// `op item delete --archive` moves the item to the vault's archive instead of erasing it.
pub fn archive_item(id: &str, vault: &str, account: Option<&str>) -> Vec<String> {
	let mut args = strings(&["item", "delete", id, "--vault", vault]);
	if let Some(account) = account {
		args.extend(strings(&["--account", account]));
	}
	args.push("--archive".to_string());
	args
}

/// Human-readable command line, as printed in dry-run mode.
pub fn render(program: &str, args: &[String]) -> String {
	std::iter::once(program)
		.chain(args.iter().map(String::as_str))
		.collect::<Vec<_>>()
		.join(" ")
}

fn strings(parts: &[&str]) -> Vec<String> {
	parts.iter().map(|s| s.to_string()).collect()
}
