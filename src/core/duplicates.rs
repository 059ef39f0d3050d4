//! Duplicate detection by exact (title, updated_at) match

use std::collections::HashMap;

use super::item::Item;

/// Items sharing one (title, updated_at) key, in listing order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateGroup {
	pub title: String,
	pub updated_at: String,
	pub items: Vec<Item>,
}

impl DuplicateGroup {
	/// The first-listed item, which is never archived.
	pub fn keeper(&self) -> &Item {
		&self.items[0]
	}

	/// Every member after the keeper.
	pub fn redundant(&self) -> &[Item] {
		&self.items[1..]
	}

	pub fn len(&self) -> usize {
		self.items.len()
	}

	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}
}

/// Group items by exact (title, updated_at) and keep groups of two or more.
///
/// Items missing `id`, `title` or `updated_at` are skipped. Groups come back
/// in the order their key was first seen.
pub fn find_duplicates(items: &[Item]) -> Vec<DuplicateGroup> {
	let mut index: HashMap<(&str, &str), usize> = HashMap::new();
	let mut groups: Vec<DuplicateGroup> = Vec::new();

	for item in items {
		let Some((_, title, updated_at)) = item.complete() else {
			continue;
		};

		match index.get(&(title, updated_at)) {
			Some(&slot) => groups[slot].items.push(item.clone()),
			None => {
				index.insert((title, updated_at), groups.len());
				groups.push(DuplicateGroup {
					title: title.to_string(),
					updated_at: updated_at.to_string(),
					items: vec![item.clone()],
				});
			}
		}
	}

	groups.retain(|g| g.len() > 1);
	groups
}

/// Groups ordered by title for display. Stable, so equal titles keep listing order.
pub fn sorted_by_title(groups: &[DuplicateGroup]) -> Vec<&DuplicateGroup> {
	let mut sorted: Vec<&DuplicateGroup> = groups.iter().collect();
	sorted.sort_by(|a, b| a.title.cmp(&b.title));
	sorted
}

/// Total number of items that would be archived across all groups.
pub fn redundant_count(groups: &[DuplicateGroup]) -> usize {
	groups.iter().map(|g| g.redundant().len()).sum()
}
