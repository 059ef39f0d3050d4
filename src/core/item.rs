//! Records returned by the `op` CLI

use serde::Deserialize;

/// A vault item as listed by `op item list`.
///
/// Only the three fields used for duplicate detection are kept; any of them
/// may be missing or `null` in the tool's output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Item {
	pub id: Option<String>,
	pub title: Option<String>,
	pub updated_at: Option<String>,
}

impl Item {
	pub fn new(id: &str, title: &str, updated_at: &str) -> Self {
		Self {
			id: Some(id.to_string()),
			title: Some(title.to_string()),
			updated_at: Some(updated_at.to_string()),
		}
	}

	/// Returns `(id, title, updated_at)` when all three are present.
	pub fn complete(&self) -> Option<(&str, &str, &str)> {
		Some((
			self.id.as_deref()?,
			self.title.as_deref()?,
			self.updated_at.as_deref()?,
		))
	}

	pub fn display_title(&self) -> &str {
		self.title.as_deref().unwrap_or("<untitled>")
	}
}

/// A signed-in account from `op account list`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Account {
	#[serde(default)]
	pub url: String,
	#[serde(default)]
	pub email: String,
	pub user_uuid: String,
}

impl Account {
	pub fn label(&self) -> String {
		format!("{} ({})", self.url, self.email)
	}
}

/// A vault from `op vault list`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Vault {
	#[serde(default)]
	pub id: String,
	pub name: String,
}
