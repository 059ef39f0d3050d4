//! Application configuration and constants

// === External Tool ===
pub const DEFAULT_OP_BINARY: &str = "op";
pub const FORMAT_JSON: [&str; 2] = ["--format", "json"];

// === Prompts ===
pub const ACCOUNT_PROMPT: &str = "Select an account:";
pub const VAULT_PROMPT: &str = "Select a vault:";
pub const OPTION_PROMPT: &str = "Enter the number of the option: ";
pub const INVALID_OPTION: &str = "Invalid option. Please try again.";
pub const NO_DUPLICATES: &str = "No duplicate items found.";

pub const ABOUT: &str = "\
This program finds and archives duplicates in a given vault.
Use --dry to print the commands that would be run without executing them.
Use --help for more information.";

pub fn archive_question(count: usize, dry_run: bool) -> String {
	if dry_run {
		format!(
			"This is a dry run. The command to archive these {} duplicates will be printed but not executed. Continue? (y/N): ",
			count
		)
	} else {
		format!("Would you like to archive these {} duplicates now? (y/N): ", count)
	}
}
