//! Dedupe command - find and archive duplicate vault items

use anyhow::{Context, Result};
use std::io::{BufRead, Write};

use crate::config::{self, ACCOUNT_PROMPT, NO_DUPLICATES, VAULT_PROMPT};
use crate::core::{find_duplicates, redundant_count, sorted_by_title, Account, DuplicateGroup, Item};
use crate::gateway::{args, VaultCli};
use crate::ui;

#[derive(Debug, Clone, Default)]
pub struct DedupeOptions {
	/// Vault to scan. Prompted for when absent.
	pub vault: Option<String>,
	/// Account `user_uuid`. Prompted for when absent and no vault is given.
	pub account: Option<String>,
	/// Print archive commands instead of running them.
	pub dry_run: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
	NoDuplicates,
	Declined,
	DryRun { planned: usize },
	Archived { archived: usize, failed: usize },
}

/// Run the whole flow: pick a vault, group its items, confirm, archive.
///
/// Menus, the summary and per-item actions go to `output`; answers are read
/// from `input`.
pub fn run<C, R, W>(cli: &C, input: &mut R, output: &mut W, options: &DedupeOptions) -> Result<Outcome>
where
	C: VaultCli + ?Sized,
	R: BufRead,
	W: Write,
{
	let (vault, account) = resolve_target(cli, input, output, options)?;
	let account = account.as_deref();

	ui::info(&format!("Listing items in vault {}", vault));
	let items = cli
		.list_items(&vault, account)
		.with_context(|| format!("Failed to list items in vault \"{}\"", vault))?;

	let groups = find_duplicates(&items);
	ui::debug(&format!("{} items, {} duplicate groups", items.len(), groups.len()));

	if groups.is_empty() {
		writeln!(output, "{}", NO_DUPLICATES)?;
		return Ok(Outcome::NoDuplicates);
	}

	print_summary(output, &groups)?;

	let question = config::archive_question(groups.len(), options.dry_run);
	if !ui::confirm(input, output, &question)? {
		ui::info("Cancelled");
		return Ok(Outcome::Declined);
	}

	if options.dry_run {
		print_plan(cli.program(), output, &groups, &vault, account)?;
		let planned = redundant_count(&groups);
		ui::success(&format!("Dry run: {} items would be archived", planned));
		return Ok(Outcome::DryRun { planned });
	}

	let (archived, failed) = archive(cli, output, &groups, &vault, account)?;

	ui::success(&format!("Archived {} items", archived));
	if failed > 0 {
		ui::warn(&format!("{} items could not be archived", failed));
	}

	Ok(Outcome::Archived { archived, failed })
}

/// Vault name plus the account used to scope calls, prompting where needed.
fn resolve_target<C, R, W>(
	cli: &C,
	input: &mut R,
	output: &mut W,
	options: &DedupeOptions,
) -> Result<(String, Option<String>)>
where
	C: VaultCli + ?Sized,
	R: BufRead,
	W: Write,
{
	// An empty vault name counts as none given.
	if let Some(vault) = options.vault.as_deref().filter(|v| !v.is_empty()) {
		return Ok((vault.to_string(), options.account.clone()));
	}

	let account = match &options.account {
		Some(account) => account.clone(),
		None => {
			let accounts = cli.list_accounts().context("Failed to list accounts")?;
			let labels: Vec<String> = accounts.iter().map(Account::label).collect();
			let choice = ui::select_option(input, output, &labels, ACCOUNT_PROMPT)?;
			accounts[choice].user_uuid.clone()
		}
	};

	let vaults = cli
		.list_vaults(&account)
		.with_context(|| format!("Failed to list vaults for account {}", account))?;
	let names: Vec<&str> = vaults.iter().map(|v| v.name.as_str()).collect();
	let choice = ui::select_option(input, output, &names, VAULT_PROMPT)?;
	let vault = &vaults[choice];
	ui::debug(&format!("Selected vault {} ({})", vault.name, vault.id));

	Ok((vault.name.clone(), Some(account)))
}

fn print_summary<W: Write>(output: &mut W, groups: &[DuplicateGroup]) -> Result<()> {
	writeln!(output, "{} duplicates were found:", groups.len())?;
	for group in sorted_by_title(groups) {
		writeln!(output, "  {}: {} duplicates", group.title, group.len())?;
	}
	Ok(())
}

fn print_plan<W: Write>(
	program: &str,
	output: &mut W,
	groups: &[DuplicateGroup],
	vault: &str,
	account: Option<&str>,
) -> Result<()> {
	for (group, item) in redundant_items(groups) {
		let command = args::render(program, &args::archive_item(item_id(item), vault, account));
		writeln!(output, "To archive item {}, Would run: `{}`", group.title, command)?;
	}
	Ok(())
}

/// Archive every redundant item. A failed call is reported and skipped; earlier
/// archives stay in place.
fn archive<C, W>(
	cli: &C,
	output: &mut W,
	groups: &[DuplicateGroup],
	vault: &str,
	account: Option<&str>,
) -> Result<(usize, usize)>
where
	C: VaultCli + ?Sized,
	W: Write,
{
	let mut archived = 0;
	let mut failed = 0;

	for (group, item) in redundant_items(groups) {
		writeln!(output, "Archiving dupe of {}", group.title)?;
		output.flush()?;

		match cli.archive_item(item_id(item), vault, account) {
			Ok(()) => archived += 1,
			Err(e) => {
				ui::warn(&format!("Could not archive {} ({}): {}", group.title, item_id(item), e));
				failed += 1;
			}
		}
	}

	Ok((archived, failed))
}

fn redundant_items(groups: &[DuplicateGroup]) -> impl Iterator<Item = (&DuplicateGroup, &Item)> {
	groups
		.iter()
		.flat_map(|group| group.redundant().iter().map(move |item| (group, item)))
}

// Grouping only admits items with an id.
fn item_id(item: &Item) -> &str {
	item.id.as_deref().unwrap_or_default()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::core::Vault;
	use crate::gateway::GatewayError;
	use std::cell::RefCell;
	use std::io::Cursor;

	#[derive(Default)]
	struct FakeCli {
		accounts: Vec<Account>,
		vaults: Vec<Vault>,
		items: Vec<Item>,
		failing_ids: Vec<String>,
		item_lists: RefCell<Vec<(String, Option<String>)>>,
		archived: RefCell<Vec<(String, String, Option<String>)>>,
	}

	impl FakeCli {
		fn with_items(items: Vec<Item>) -> Self {
			Self {
				items,
				..Default::default()
			}
		}

		fn archived_ids(&self) -> Vec<String> {
			self.archived.borrow().iter().map(|(id, _, _)| id.clone()).collect()
		}
	}

	impl VaultCli for FakeCli {
		fn program(&self) -> &str {
			"op"
		}

		fn list_accounts(&self) -> Result<Vec<Account>, GatewayError> {
			Ok(self.accounts.clone())
		}

		fn list_vaults(&self, _account: &str) -> Result<Vec<Vault>, GatewayError> {
			Ok(self.vaults.clone())
		}

		fn list_items(&self, vault: &str, account: Option<&str>) -> Result<Vec<Item>, GatewayError> {
			self.item_lists
				.borrow_mut()
				.push((vault.to_string(), account.map(str::to_string)));
			Ok(self.items.clone())
		}

		fn archive_item(&self, id: &str, vault: &str, account: Option<&str>) -> Result<(), GatewayError> {
			self.archived
				.borrow_mut()
				.push((id.to_string(), vault.to_string(), account.map(str::to_string)));
			if self.failing_ids.iter().any(|f| f == id) {
				return Err(GatewayError::Exit {
					command: format!("op item delete {}", id),
					code: Some(1),
					stderr: "item not found".to_string(),
				});
			}
			Ok(())
		}
	}

	fn scenario_items() -> Vec<Item> {
		vec![
			Item::new("1", "A", "t1"),
			Item::new("2", "A", "t1"),
			Item::new("3", "B", "t2"),
		]
	}

	fn in_vault(dry_run: bool) -> DedupeOptions {
		DedupeOptions {
			vault: Some("Private".to_string()),
			account: None,
			dry_run,
		}
	}

	fn run_with(cli: &FakeCli, answers: &str, options: &DedupeOptions) -> (Outcome, String) {
		let mut input = Cursor::new(answers.as_bytes().to_vec());
		let mut output = Vec::new();
		let outcome = run(cli, &mut input, &mut output, options).unwrap();
		(outcome, String::from_utf8(output).unwrap())
	}

	#[test]
	fn test_archives_only_redundant_copy() {
		let cli = FakeCli::with_items(scenario_items());
		let (outcome, out) = run_with(&cli, "y\n", &in_vault(false));

		assert_eq!(outcome, Outcome::Archived { archived: 1, failed: 0 });
		assert_eq!(
			*cli.archived.borrow(),
			vec![("2".to_string(), "Private".to_string(), None)]
		);
		assert!(out.contains("1 duplicates were found:\n  A: 2 duplicates\n"));
		assert!(out.contains("Would you like to archive these 1 duplicates now? (y/N): "));
		assert!(out.contains("Archiving dupe of A\n"));
	}

	#[test]
	fn test_no_duplicates() {
		let cli = FakeCli::with_items(Vec::new());
		let (outcome, out) = run_with(&cli, "", &in_vault(false));

		assert_eq!(outcome, Outcome::NoDuplicates);
		assert_eq!(out, "No duplicate items found.\n");
		assert!(cli.archived.borrow().is_empty());
	}

	#[test]
	fn test_declined_archives_nothing() {
		let mut items = scenario_items();
		items.push(Item::new("4", "B", "t2"));
		let cli = FakeCli::with_items(items);

		for answer in ["n\n", "\n", "yes\n", ""] {
			let (outcome, _) = run_with(&cli, answer, &in_vault(false));
			assert_eq!(outcome, Outcome::Declined);
		}
		assert!(cli.archived.borrow().is_empty());
	}

	#[test]
	fn test_dry_run_matches_normal_run_without_calls() {
		let items = vec![
			Item::new("1", "Zed", "t1"),
			Item::new("2", "Alpha", "t2"),
			Item::new("3", "Zed", "t1"),
			Item::new("4", "Alpha", "t2"),
			Item::new("5", "Alpha", "t2"),
		];

		let dry = FakeCli::with_items(items.clone());
		let (dry_outcome, dry_out) = run_with(&dry, "y\n", &in_vault(true));

		let real = FakeCli::with_items(items);
		let (real_outcome, real_out) = run_with(&real, "y\n", &in_vault(false));

		assert_eq!(dry_outcome, Outcome::DryRun { planned: 3 });
		assert_eq!(real_outcome, Outcome::Archived { archived: 3, failed: 0 });
		assert!(dry.archived.borrow().is_empty());
		assert_eq!(real.archived_ids(), vec!["3", "4", "5"]);

		let summary = "2 duplicates were found:\n  Alpha: 3 duplicates\n  Zed: 2 duplicates\n";
		assert!(dry_out.contains(summary));
		assert!(real_out.contains(summary));

		assert!(dry_out.contains("This is a dry run. The command to archive these 2 duplicates will be printed but not executed. Continue? (y/N): "));
		assert!(dry_out.contains("To archive item Zed, Would run: `op item delete 3 --vault Private --archive`\n"));
		assert!(dry_out.contains("To archive item Alpha, Would run: `op item delete 4 --vault Private --archive`\n"));
		assert!(dry_out.contains("To archive item Alpha, Would run: `op item delete 5 --vault Private --archive`\n"));
		assert!(!dry_out.contains("Archiving dupe"));
	}

	#[test]
	fn test_failed_archive_continues() {
		let items = vec![
			Item::new("1", "A", "t1"),
			Item::new("2", "A", "t1"),
			Item::new("3", "A", "t1"),
			Item::new("4", "B", "t2"),
			Item::new("5", "B", "t2"),
		];
		let cli = FakeCli {
			items,
			failing_ids: vec!["2".to_string()],
			..Default::default()
		};
		let (outcome, _) = run_with(&cli, "Y\n", &in_vault(false));

		assert_eq!(outcome, Outcome::Archived { archived: 2, failed: 1 });
		assert_eq!(cli.archived_ids(), vec!["2", "3", "5"]);
	}

	#[test]
	fn test_interactive_account_and_vault_selection() {
		let cli = FakeCli {
			accounts: vec![
				Account {
					url: "one.1password.com".to_string(),
					email: "a@example.com".to_string(),
					user_uuid: "U1".to_string(),
				},
				Account {
					url: "two.1password.com".to_string(),
					email: "b@example.com".to_string(),
					user_uuid: "U2".to_string(),
				},
			],
			vaults: vec![
				Vault { id: "v1".to_string(), name: "Private".to_string() },
				Vault { id: "v2".to_string(), name: "Shared".to_string() },
			],
			items: scenario_items(),
			..Default::default()
		};

		let (outcome, out) = run_with(&cli, "2\nx\n2\ny\n", &DedupeOptions::default());

		assert_eq!(outcome, Outcome::Archived { archived: 1, failed: 0 });
		assert_eq!(
			*cli.item_lists.borrow(),
			vec![("Shared".to_string(), Some("U2".to_string()))]
		);
		assert_eq!(
			*cli.archived.borrow(),
			vec![("2".to_string(), "Shared".to_string(), Some("U2".to_string()))]
		);
		assert!(out.contains("1. one.1password.com (a@example.com)"));
		assert!(out.contains("2. Shared"));
		assert!(out.contains("Invalid option. Please try again."));
	}

	#[test]
	fn test_account_flag_skips_account_menu() {
		let cli = FakeCli {
			vaults: vec![Vault { id: "v1".to_string(), name: "Private".to_string() }],
			items: scenario_items(),
			..Default::default()
		};
		let options = DedupeOptions {
			account: Some("U9".to_string()),
			..Default::default()
		};

		let (outcome, out) = run_with(&cli, "1\nn\n", &options);

		assert_eq!(outcome, Outcome::Declined);
		assert!(!out.contains(ACCOUNT_PROMPT));
		assert_eq!(
			*cli.item_lists.borrow(),
			vec![("Private".to_string(), Some("U9".to_string()))]
		);
	}

	#[test]
	fn test_empty_vault_name_shows_menus() {
		let cli = FakeCli {
			accounts: vec![Account {
				url: "one.1password.com".to_string(),
				email: "a@example.com".to_string(),
				user_uuid: "U1".to_string(),
			}],
			vaults: vec![Vault { id: "v1".to_string(), name: "Private".to_string() }],
			items: scenario_items(),
			..Default::default()
		};
		let options = DedupeOptions {
			vault: Some(String::new()),
			..Default::default()
		};

		let (outcome, out) = run_with(&cli, "1\n1\nn\n", &options);

		assert_eq!(outcome, Outcome::Declined);
		assert!(out.contains(ACCOUNT_PROMPT));
		assert!(out.contains(VAULT_PROMPT));
		assert_eq!(
			*cli.item_lists.borrow(),
			vec![("Private".to_string(), Some("U1".to_string()))]
		);
	}

	#[test]
	fn test_no_accounts_is_an_error() {
		let cli = FakeCli::default();
		let mut input = Cursor::new(b"1\n".to_vec());
		let mut output = Vec::new();
		assert!(run(&cli, &mut input, &mut output, &DedupeOptions::default()).is_err());
	}
}
