//! dupefinder - archive duplicate 1Password items
//!
//! Lists a vault through the `op` CLI, groups items sharing a title and
//! last-updated timestamp, and archives every copy but the first.

use clap::Parser;
use std::io;

use dupefinder::cli::Cli;
use dupefinder::commands::dedupe;
use dupefinder::config::ABOUT;
use dupefinder::gateway::OpCli;
use dupefinder::ui::{self, Log};

fn main() {
	let cli = Cli::parse();

	Log::set_verbose(cli.verbose);
	ui::banner(ABOUT);
	println!();

	let op = OpCli::new(cli.op_bin.as_str());
	let stdin = io::stdin();
	let mut input = stdin.lock();
	let mut output = io::stdout();

	if let Err(e) = dedupe::run(&op, &mut input, &mut output, &cli.dedupe_options()) {
		ui::error(&format!("{:#}", e));
		std::process::exit(1);
	}
}
