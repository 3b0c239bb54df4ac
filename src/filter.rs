//! Filter Utilities
//!
//! Derive the visible cards from the full collection.

use crate::models::{FilterMode, Item};

/// Items visible under `mode`, in collection order
pub fn filter_items(items: &[Item], mode: FilterMode) -> Vec<Item> {
    match mode {
        FilterMode::All => items.to_vec(),
        FilterMode::Active => items.iter().filter(|item| item.is_active).cloned().collect(),
        FilterMode::Inactive => items.iter().filter(|item| !item.is_active).cloned().collect(),
    }
}
