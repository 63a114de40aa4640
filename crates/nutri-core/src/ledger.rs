//! The calorie ledger: reference lookups, the ordered food log, and
//! aggregate queries over it.
//!
//! A `Ledger` is an explicit, caller-owned instance. Mutations take
//! `&mut self`, so one ledger sees at most one mutation at a time; hosts
//! serving several users keep one ledger per user.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::config::{LedgerConfig, MatchingMode};
use crate::error::{NutriError, Result};
use crate::progress::Progress;
use crate::reference::{normalize_name, ReferenceTable, Unit};

/// Opaque identifier of a logged entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(Uuid);

impl EntryId {
    fn mint() -> Self {
        Self(Uuid::new_v4())
    }

    /// First 8 hex characters, for display.
    pub fn short(&self) -> String {
        self.0.to_string()[..8].to_string()
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for EntryId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// How a food name was resolved against the reference table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MatchKind {
    /// The normalized name is a table key
    Exact,
    /// A table key and the name contain one another
    Partial { key: String },
    /// Nothing matched; the configured default estimate was used
    Estimate,
}

/// Outcome of `Ledger::resolve_food`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resolution {
    pub calories_per_unit: f64,
    pub unit: Unit,
    pub matched: MatchKind,
}

impl Resolution {
    /// Whether a reference entry was found (as opposed to a default estimate).
    pub fn found(&self) -> bool {
        !matches!(self.matched, MatchKind::Estimate)
    }
}

/// An immutable record in the food log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggedFoodEntry {
    pub id: EntryId,

    /// Name as typed (trimmed, original casing)
    pub display_name: String,

    /// Amount in `unit` terms (grams, millilitres, or pieces)
    pub quantity: f64,

    pub unit: Unit,

    /// Rounded calories for this entry
    pub calories: u32,

    pub matched: MatchKind,

    pub logged_at: DateTime<Utc>,
}

/// Totals plus progress toward the configured daily goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub total: u64,
    pub entry_count: usize,
    pub progress: Progress,
}

/// The calorie-tracking engine.
#[derive(Debug, Clone)]
pub struct Ledger {
    reference: ReferenceTable,
    config: LedgerConfig,
    entries: Vec<LoggedFoodEntry>,
    /// Ids of removed entries; never handed out again.
    retired: HashSet<EntryId>,
}

impl Ledger {
    /// Create an empty ledger over the built-in reference table.
    ///
    /// # Errors
    ///
    /// Returns `NutriError::InvalidConfig` if `config` fails validation.
    pub fn new(config: LedgerConfig) -> Result<Self> {
        Self::with_reference(ReferenceTable::builtin(), config)
    }

    /// Create an empty ledger over a caller-supplied reference table.
    pub fn with_reference(reference: ReferenceTable, config: LedgerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            reference,
            config,
            entries: Vec::new(),
            retired: HashSet::new(),
        })
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    pub fn reference(&self) -> &ReferenceTable {
        &self.reference
    }

    /// Resolve a free-text food name to a calorie value.
    ///
    /// Strict mode only accepts exact (case-insensitive, trimmed) names.
    /// Lenient mode falls back to the first substring match in table order,
    /// then to the configured default estimate, so it never fails on a
    /// non-blank name.
    ///
    /// # Errors
    ///
    /// - `NutriError::EmptyName` for blank input
    /// - `NutriError::FoodNotFound` on a strict-mode miss
    pub fn resolve_food(&self, raw_name: &str) -> Result<Resolution> {
        let normalized = normalize_name(raw_name);
        if normalized.is_empty() {
            return Err(NutriError::EmptyName);
        }

        if let Some(entry) = self.reference.get(&normalized) {
            debug!(food = %normalized, "exact reference match");
            return Ok(Resolution {
                calories_per_unit: entry.calories_per_unit,
                unit: entry.unit,
                matched: MatchKind::Exact,
            });
        }

        match self.config.matching_mode {
            MatchingMode::Strict => {
                debug!(food = %normalized, "no exact match in strict mode");
                Err(NutriError::FoodNotFound {
                    name: raw_name.trim().to_string(),
                })
            }
            MatchingMode::Lenient => {
                if let Some(entry) = self.reference.find_partial(&normalized) {
                    debug!(food = %normalized, key = %entry.name, "partial reference match");
                    return Ok(Resolution {
                        calories_per_unit: entry.calories_per_unit,
                        unit: entry.unit,
                        matched: MatchKind::Partial {
                            key: entry.name.clone(),
                        },
                    });
                }
                debug!(
                    food = %normalized,
                    calories = self.config.default_calories,
                    "no reference match, using default estimate"
                );
                Ok(Resolution {
                    calories_per_unit: f64::from(self.config.default_calories),
                    unit: Unit::PerPiece,
                    matched: MatchKind::Estimate,
                })
            }
        }
    }

    /// Log a food and return the created entry.
    ///
    /// With a quantity, calories follow the resolved unit: per-100g and
    /// per-100ml foods scale by `quantity / 100`, per-piece foods by
    /// `quantity`. Without one, the entry is a single piece credited at the
    /// food's table value. The log is only touched once validation and
    /// resolution have both succeeded.
    ///
    /// # Errors
    ///
    /// - `NutriError::EmptyName` for blank input
    /// - `NutriError::InvalidQuantity` for a non-positive, non-finite, or
    ///   overflowing quantity
    /// - `NutriError::FoodNotFound` on a strict-mode miss
    pub fn add_entry(&mut self, raw_name: &str, quantity: Option<f64>) -> Result<LoggedFoodEntry> {
        let display_name = raw_name.trim();
        if display_name.is_empty() {
            return Err(NutriError::EmptyName);
        }
        if let Some(q) = quantity {
            if !q.is_finite() || q <= 0.0 {
                return Err(NutriError::invalid_quantity(q));
            }
        }

        let resolution = self.resolve_food(display_name)?;

        let (quantity, unit, raw_calories) = match quantity {
            Some(q) => (
                q,
                resolution.unit,
                resolution.unit.calories_for(resolution.calories_per_unit, q),
            ),
            None => (1.0, Unit::PerPiece, resolution.calories_per_unit),
        };

        let rounded = raw_calories.round();
        if !rounded.is_finite() || rounded > f64::from(u32::MAX) {
            return Err(NutriError::invalid_quantity(quantity));
        }

        let entry = LoggedFoodEntry {
            id: self.next_id(),
            display_name: display_name.to_string(),
            quantity,
            unit,
            calories: rounded as u32,
            matched: resolution.matched,
            logged_at: Utc::now(),
        };

        debug!(
            id = %entry.id,
            food = %entry.display_name,
            calories = entry.calories,
            "logged food entry"
        );
        self.entries.push(entry.clone());
        Ok(entry)
    }

    /// Remove the entry with `id`, returning whether anything was removed.
    pub fn remove_entry(&mut self, id: &EntryId) -> bool {
        match self.entries.iter().position(|entry| &entry.id == id) {
            Some(index) => {
                let removed = self.entries.remove(index);
                self.retired.insert(removed.id);
                debug!(id = %removed.id, calories = removed.calories, "removed food entry");
                true
            }
            None => false,
        }
    }

    /// Sum of calories over the current log.
    pub fn total_calories(&self) -> u64 {
        self.entries
            .iter()
            .map(|entry| u64::from(entry.calories))
            .sum()
    }

    /// Progress toward an explicit goal, using the configured overage threshold.
    pub fn progress(&self, goal: u32) -> Progress {
        Progress::compute(self.total_calories(), goal, self.config.overage_threshold)
    }

    /// Totals and progress toward the configured daily goal.
    pub fn summary(&self) -> Summary {
        Summary {
            total: self.total_calories(),
            entry_count: self.entries.len(),
            progress: self.progress(self.config.daily_goal),
        }
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[LoggedFoodEntry] {
        &self.entries
    }

    pub fn get(&self, id: &EntryId) -> Option<&LoggedFoodEntry> {
        self.entries.iter().find(|entry| &entry.id == id)
    }

    /// Entries whose id string starts with `prefix` (case-insensitive).
    pub fn matching_prefix(&self, prefix: &str) -> Vec<&LoggedFoodEntry> {
        let prefix = prefix.trim().to_ascii_lowercase();
        if prefix.is_empty() {
            return Vec::new();
        }
        self.entries
            .iter()
            .filter(|entry| entry.id.to_string().starts_with(&prefix))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Mint an id that is neither live nor retired.
    fn next_id(&self) -> EntryId {
        loop {
            let id = EntryId::mint();
            if !self.retired.contains(&id) && self.get(&id).is_none() {
                return id;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::Status;
    use crate::reference::FoodReferenceEntry;

    fn strict() -> Ledger {
        Ledger::new(LedgerConfig::default()).unwrap()
    }

    fn lenient() -> Ledger {
        Ledger::new(LedgerConfig::new().matching_mode(MatchingMode::Lenient)).unwrap()
    }

    #[test]
    fn test_add_per_100g() {
        let mut ledger = strict();
        let entry = ledger.add_entry("rice", Some(150.0)).unwrap();
        assert_eq!(entry.calories, 195);
        assert_eq!(entry.unit, Unit::Per100g);
        assert_eq!(entry.matched, MatchKind::Exact);
        assert_eq!(ledger.total_calories(), 195);
    }

    #[test]
    fn test_add_per_piece_and_per_100ml() {
        let mut ledger = strict();
        assert_eq!(ledger.add_entry("idli", Some(3.0)).unwrap().calories, 174);
        assert_eq!(ledger.add_entry("milk", Some(250.0)).unwrap().calories, 105);
    }

    #[test]
    fn test_add_rounds_half_away_from_zero() {
        // 89 * 0.5 = 44.5
        let mut ledger = strict();
        assert_eq!(ledger.add_entry("banana", Some(0.5)).unwrap().calories, 45);
    }

    #[test]
    fn test_add_keeps_display_casing() {
        let mut ledger = strict();
        let entry = ledger.add_entry("  Coconut Chutney ", Some(50.0)).unwrap();
        assert_eq!(entry.display_name, "Coconut Chutney");
        assert_eq!(entry.calories, 91);
    }

    #[test]
    fn test_omitted_quantity_is_one_piece() {
        let mut ledger = strict();
        let entry = ledger.add_entry("rice", None).unwrap();
        assert_eq!(entry.quantity, 1.0);
        assert_eq!(entry.unit, Unit::PerPiece);
        assert_eq!(entry.calories, 130);
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut ledger = strict();
        assert_eq!(ledger.add_entry("", Some(100.0)), Err(NutriError::EmptyName));
        assert_eq!(ledger.add_entry("   ", None), Err(NutriError::EmptyName));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_invalid_quantity_rejected() {
        let mut ledger = strict();
        for q in [-5.0, 0.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                ledger.add_entry("rice", Some(q)),
                Err(NutriError::InvalidQuantity(_))
            ));
        }
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_overflowing_quantity_rejected() {
        let mut ledger = strict();
        assert!(matches!(
            ledger.add_entry("groundnuts", Some(1e12)),
            Err(NutriError::InvalidQuantity(_))
        ));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_strict_miss_is_not_found() {
        let mut ledger = strict();
        let err = ledger.add_entry("unicorn meat", Some(100.0)).unwrap_err();
        assert_eq!(
            err,
            NutriError::FoodNotFound {
                name: "unicorn meat".to_string()
            }
        );
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_strict_ignores_substrings() {
        let ledger = strict();
        assert!(ledger.resolve_food("Chicken Biryani").is_err());
    }

    #[test]
    fn test_lenient_partial_match() {
        let ledger = lenient();
        let resolution = ledger.resolve_food("Chicken Biryani").unwrap();
        assert!(resolution.found());
        assert_eq!(resolution.calories_per_unit, 239.0);
        assert_eq!(
            resolution.matched,
            MatchKind::Partial {
                key: "chicken".to_string()
            }
        );
    }

    #[test]
    fn test_lenient_default_estimate() {
        let ledger = Ledger::new(
            LedgerConfig::new()
                .matching_mode(MatchingMode::Lenient)
                .default_calories(250),
        )
        .unwrap();
        let resolution = ledger.resolve_food("unicorn meat").unwrap();
        assert!(!resolution.found());
        assert_eq!(resolution.calories_per_unit, 250.0);
        assert_eq!(resolution.unit, Unit::PerPiece);
    }

    #[test]
    fn test_resolve_blank_is_empty_name() {
        assert_eq!(lenient().resolve_food(" \t"), Err(NutriError::EmptyName));
    }

    #[test]
    fn test_remove_entry() {
        let mut ledger = strict();
        let apple = ledger.add_entry("apple", None).unwrap();
        let rice = ledger.add_entry("rice", Some(100.0)).unwrap();

        assert!(ledger.remove_entry(&apple.id));
        assert!(!ledger.remove_entry(&apple.id));
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.entries()[0].id, rice.id);
        assert_eq!(ledger.total_calories(), 130);
    }

    #[test]
    fn test_entries_keep_insertion_order() {
        let mut ledger = strict();
        let names = ["egg", "bread", "milk"];
        for name in names {
            ledger.add_entry(name, None).unwrap();
        }
        let logged: Vec<&str> = ledger
            .entries()
            .iter()
            .map(|e| e.display_name.as_str())
            .collect();
        assert_eq!(logged, names);
    }

    #[test]
    fn test_ids_are_unique() {
        let mut ledger = strict();
        let mut ids = std::collections::HashSet::new();
        for _ in 0..50 {
            let entry = ledger.add_entry("egg", None).unwrap();
            assert!(ids.insert(entry.id));
        }
    }

    #[test]
    fn test_remove_then_add_mints_fresh_id() {
        let mut ledger = strict();
        let old = ledger.add_entry("egg", None).unwrap();
        assert!(ledger.remove_entry(&old.id));
        assert!(ledger.retired.contains(&old.id));

        let new = ledger.add_entry("egg", None).unwrap();
        assert_ne!(new.id, old.id);
        assert!(!ledger.remove_entry(&old.id));
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.get(&new.id), Some(&new));
    }

    #[test]
    fn test_matching_prefix() {
        let mut ledger = strict();
        let entry = ledger.add_entry("egg", None).unwrap();
        let short = entry.id.short();
        let found = ledger.matching_prefix(&short.to_uppercase());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, entry.id);
        assert!(ledger.matching_prefix("").is_empty());
    }

    #[test]
    fn test_summary_uses_configured_goal() {
        let mut ledger = Ledger::new(LedgerConfig::new().daily_goal(500)).unwrap();
        ledger.add_entry("burger", None).unwrap();
        let summary = ledger.summary();
        assert_eq!(summary.total, 540);
        assert_eq!(summary.entry_count, 1);
        assert_eq!(summary.progress.goal, 500);
        assert_eq!(summary.progress.status, Status::Exceeded);
        assert_eq!(summary.progress.overage, Some(40));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let result = Ledger::new(LedgerConfig::new().overage_threshold(0.5));
        assert!(matches!(result, Err(NutriError::InvalidConfig(_))));
    }

    #[test]
    fn test_custom_reference_table() {
        let table = ReferenceTable::new(vec![FoodReferenceEntry::new(
            "Tea",
            2.0,
            Unit::Per100ml,
        )])
        .unwrap();
        let mut ledger = Ledger::with_reference(table, LedgerConfig::default()).unwrap();
        assert_eq!(ledger.add_entry("tea", Some(300.0)).unwrap().calories, 6);
        assert!(ledger.add_entry("rice", Some(100.0)).is_err());
    }

    #[test]
    fn test_entry_id_round_trips_through_string() {
        let mut ledger = strict();
        let entry = ledger.add_entry("egg", None).unwrap();
        let parsed: EntryId = entry.id.to_string().parse().unwrap();
        assert_eq!(parsed, entry.id);
    }
}
