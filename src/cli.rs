use clap::builder::styling::{AnsiColor, Color, Style, Styles};
use clap::Parser;
use colored::Colorize;

use crate::commands::DedupeOptions;
use crate::config::DEFAULT_OP_BINARY;

fn styles() -> Styles {
	Styles::styled()
		.header(Style::new().bold().fg_color(Some(Color::Ansi(AnsiColor::Blue))))
		.usage(Style::new().bold().fg_color(Some(Color::Ansi(AnsiColor::Blue))))
		.literal(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Blue))))
		.placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow))))
		.valid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Blue))))
		.invalid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red))))
}

#[derive(Parser, Debug)]
#[command(
	name = "dupefinder",
	author,
	version,
	about = "Find and archive duplicate items in a 1Password vault",
	styles = styles(),
	after_help = format!(
		"{title}
  {bin}                    {pick_desc}
  {bin} {vault}            {vault_desc}
  {bin} {vault} {dry}      {dry_desc}",
		title = "Examples:".bright_blue().bold(),
		bin = "dupefinder".bright_blue(),
		vault = "Private".yellow(),
		dry = "--dry".yellow(),
		pick_desc = "Pick account and vault interactively".dimmed(),
		vault_desc = "Scan the Private vault".dimmed(),
		dry_desc = "Print archive commands only".dimmed(),
	),
)]
pub struct Cli {
	/// Vault to scan (prompted for when omitted)
	#[arg(value_name = "VAULT")]
	pub vault: Option<String>,

	/// Dry run: just print the commands that would be run
	#[arg(long = "dry")]
	pub dry: bool,

	/// Account user UUID to scope `op` calls (skips the account menu)
	#[arg(short = 'a', long = "account", value_name = "ID")]
	pub account: Option<String>,

	/// Path to the 1Password CLI
	#[arg(long = "op-bin", value_name = "PATH", default_value = DEFAULT_OP_BINARY)]
	pub op_bin: String,

	/// Enable verbose debug output
	#[arg(short = 'v', long = "verbose")]
	pub verbose: bool,
}

impl Cli {
	pub fn dedupe_options(&self) -> DedupeOptions {
		DedupeOptions {
			vault: self.vault.clone(),
			account: self.account.clone(),
			dry_run: self.dry,
		}
	}
}
