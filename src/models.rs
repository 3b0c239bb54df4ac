//! Frontend Models
//!
//! Data structures for the card list.

use serde::Deserialize;

/// Item as it arrives in `data.json` (no id yet)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawItem {
    pub logo: String,
    pub name: String,
    pub description: String,
    pub is_active: bool,
}

/// Item held in the collection; `id` is its position in the last load
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: u32,
    pub logo: String,
    pub name: String,
    pub description: String,
    pub is_active: bool,
}

impl Item {
    pub fn from_raw(id: u32, raw: RawItem) -> Self {
        Self {
            id,
            logo: raw.logo,
            name: raw.name,
            description: raw.description,
            is_active: raw.is_active,
        }
    }
}

/// Which cards are visible
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FilterMode {
    #[default]
    All,
    Active,
    Inactive,
}

impl FilterMode {
    pub fn as_attr(self) -> &'static str {
        match self {
            FilterMode::All => "all",
            FilterMode::Active => "active",
            FilterMode::Inactive => "inactive",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FilterMode::All => "All",
            FilterMode::Active => "Active",
            FilterMode::Inactive => "Inactive",
        }
    }
}

/// Filter buttons in display order
pub const FILTER_MODES: [FilterMode; 3] = [FilterMode::All, FilterMode::Active, FilterMode::Inactive];
