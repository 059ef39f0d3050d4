//! Numbered menus and yes/no questions on stdin

use anyhow::{bail, Result};
use colored::Colorize;
use std::io::{BufRead, Write};

use crate::config::{INVALID_OPTION, OPTION_PROMPT};

/// Print a numbered menu and read until a valid 1-based choice arrives.
///
/// Returns the 0-based index of the chosen option. Non-numeric and
/// out-of-range answers re-prompt. Fails when there is nothing to choose
/// from or input ends.
pub fn select_option<R, W, S>(input: &mut R, output: &mut W, options: &[S], prompt: &str) -> Result<usize>
where
	R: BufRead,
	W: Write,
	S: AsRef<str>,
{
	if options.is_empty() {
		bail!("Nothing to choose from for \"{}\"", prompt);
	}

	writeln!(output, "{}", prompt.bright_blue().bold())?;
	for (i, option) in options.iter().enumerate() {
		writeln!(output, "{}. {}", i + 1, option.as_ref())?;
	}

	loop {
		write!(output, "{}", OPTION_PROMPT)?;
		output.flush()?;

		let Some(line) = read_answer(input)? else {
			bail!("Input closed before an option was selected");
		};

		match parse_choice(&line, options.len()) {
			Some(index) => return Ok(index),
			None => writeln!(output, "{}", INVALID_OPTION)?,
		}
	}
}

/// Ask a question and return true only for "y" (any case).
pub fn confirm<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> Result<bool> {
	write!(output, "{}", question)?;
	output.flush()?;

	let answer = read_answer(input)?.unwrap_or_default();

	Ok(answer.trim().eq_ignore_ascii_case("y"))
}

/// One line of input, decoded lossily. `None` once input is exhausted.
fn read_answer<R: BufRead>(input: &mut R) -> Result<Option<String>> {
	let mut buf = Vec::new();
	if input.read_until(b'\n', &mut buf)? == 0 {
		return Ok(None);
	}
	Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}

/// 0-based index for a 1-based answer made of ASCII digits only.
fn parse_choice(line: &str, count: usize) -> Option<usize> {
	let digits = line.trim();
	if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
		return None;
	}
	match digits.parse::<usize>() {
		Ok(n) if (1..=count).contains(&n) => Some(n - 1),
		_ => None,
	}
}
