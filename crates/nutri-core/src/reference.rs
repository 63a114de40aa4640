//! Static food reference table.
//!
//! The table maps a lowercase food name to its calories per unit. Iteration
//! order is the order entries were supplied in, and partial matching takes
//! the first hit in that order, so the order is part of the contract.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{NutriError, Result};

/// How a food's calorie value is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    #[serde(rename = "per-100g")]
    Per100g,
    #[serde(rename = "per-100ml")]
    Per100ml,
    #[serde(rename = "per-piece")]
    PerPiece,
}

impl Unit {
    /// Stable string form, matching the serialized value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Per100g => "per-100g",
            Self::Per100ml => "per-100ml",
            Self::PerPiece => "per-piece",
        }
    }

    /// Short label for a quantity of this unit ("g", "ml", "pc").
    pub fn quantity_label(&self) -> &'static str {
        match self {
            Self::Per100g => "g",
            Self::Per100ml => "ml",
            Self::PerPiece => "pc",
        }
    }

    /// Unrounded calories for `quantity` of a food worth `calories_per_unit`.
    pub fn calories_for(&self, calories_per_unit: f64, quantity: f64) -> f64 {
        match self {
            Self::Per100g | Self::Per100ml => calories_per_unit * quantity / 100.0,
            Self::PerPiece => calories_per_unit * quantity,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single row of the reference table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodReferenceEntry {
    /// Lowercase lookup key
    pub name: String,

    /// Calories per `unit`
    pub calories_per_unit: f64,

    /// Measurement basis for `calories_per_unit`
    pub unit: Unit,
}

impl FoodReferenceEntry {
    pub fn new(name: impl Into<String>, calories_per_unit: f64, unit: Unit) -> Self {
        Self {
            name: name.into(),
            calories_per_unit,
            unit,
        }
    }
}

// Foods the tracker logs as whole servings are counted per piece.
const BUILTIN_FOODS: &[(&str, f64, Unit)] = &[
    ("rice", 130.0, Unit::Per100g),
    ("dal", 116.0, Unit::Per100g),
    ("chicken", 239.0, Unit::Per100g),
    ("fish", 206.0, Unit::Per100g),
    ("roti", 297.0, Unit::Per100g),
    ("idli", 58.0, Unit::PerPiece),
    ("dosa", 168.0, Unit::PerPiece),
    ("sambar", 85.0, Unit::Per100g),
    ("coconut chutney", 181.0, Unit::Per100g),
    ("banana", 89.0, Unit::PerPiece),
    ("apple", 52.0, Unit::PerPiece),
    ("milk", 42.0, Unit::Per100ml),
    ("yogurt", 59.0, Unit::Per100g),
    ("groundnuts", 567.0, Unit::Per100g),
    ("orange", 47.0, Unit::PerPiece),
    ("salmon", 208.0, Unit::PerPiece),
    ("bread", 75.0, Unit::PerPiece),
    ("egg", 70.0, Unit::PerPiece),
    ("salad", 20.0, Unit::PerPiece),
    ("pasta", 220.0, Unit::PerPiece),
    ("cheese", 113.0, Unit::PerPiece),
    ("cookie", 150.0, Unit::PerPiece),
    ("pizza", 285.0, Unit::PerPiece),
    ("burger", 540.0, Unit::PerPiece),
    ("fries", 320.0, Unit::PerPiece),
    ("smoothie", 180.0, Unit::PerPiece),
    ("nuts", 28.0, Unit::PerPiece),
    ("avocado", 160.0, Unit::PerPiece),
];

/// Foods offered as one-tap suggestions by interactive callers.
pub const QUICK_ADD: &[&str] = &["Apple", "Banana", "Chicken", "Salad", "Yogurt"];

/// Immutable food reference table.
#[derive(Debug, Clone)]
pub struct ReferenceTable {
    entries: Vec<FoodReferenceEntry>,
}

impl ReferenceTable {
    /// Build a table from caller-supplied entries.
    ///
    /// Names are trimmed and lowercased. Empty or duplicate names and
    /// negative or non-finite calorie values are rejected.
    ///
    /// # Errors
    ///
    /// Returns `NutriError::InvalidReference` describing the first bad entry.
    pub fn new(entries: impl IntoIterator<Item = FoodReferenceEntry>) -> Result<Self> {
        let mut seen = HashSet::new();
        let mut normalized = Vec::new();

        for mut entry in entries {
            entry.name = normalize_name(&entry.name);
            if entry.name.is_empty() {
                return Err(NutriError::InvalidReference(
                    "food name cannot be empty".to_string(),
                ));
            }
            if !entry.calories_per_unit.is_finite() || entry.calories_per_unit < 0.0 {
                return Err(NutriError::InvalidReference(format!(
                    "\"{}\" has invalid calories {}",
                    entry.name, entry.calories_per_unit
                )));
            }
            if !seen.insert(entry.name.clone()) {
                return Err(NutriError::InvalidReference(format!(
                    "duplicate food \"{}\"",
                    entry.name
                )));
            }
            normalized.push(entry);
        }

        Ok(Self {
            entries: normalized,
        })
    }

    /// The built-in table shipped with Nutri.
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN_FOODS
                .iter()
                .map(|(name, calories, unit)| FoodReferenceEntry::new(*name, *calories, *unit))
                .collect(),
        }
    }

    /// Exact lookup by an already-normalized name.
    pub fn get(&self, normalized: &str) -> Option<&FoodReferenceEntry> {
        self.entries.iter().find(|entry| entry.name == normalized)
    }

    /// First entry whose key contains `normalized` or is contained in it.
    pub fn find_partial(&self, normalized: &str) -> Option<&FoodReferenceEntry> {
        if normalized.is_empty() {
            return None;
        }
        self.entries
            .iter()
            .find(|entry| normalized.contains(entry.name.as_str()) || entry.name.contains(normalized))
    }

    /// Iterate entries in table order.
    pub fn iter(&self) -> impl Iterator<Item = &FoodReferenceEntry> {
        self.entries.iter()
    }

    /// All food names in table order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|entry| entry.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ReferenceTable {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Trim and lowercase a raw food name.
pub fn normalize_name(raw: &str) -> String {
    raw.trim().to_lowercase()
}
