//! # Nutri Core
//!
//! Core library for Nutri - a calorie-tracking ledger.
//!
//! This crate provides the calorie computation engine independent of any
//! presentation layer.
//!
//! ## Architecture
//!
//! - **reference**: Static food reference table and measurement units
//! - **ledger**: Food resolution, the ordered food log, totals
//! - **progress**: Goal-progress status
//! - **config**: Matching mode, default estimate, goal, overage threshold
//!
//! ## Example
//!
//! ```
//! use nutri_core::{Ledger, LedgerConfig, Status};
//!
//! let mut ledger = Ledger::new(LedgerConfig::default()).unwrap();
//! let entry = ledger.add_entry("rice", Some(150.0)).unwrap();
//! assert_eq!(entry.calories, 195);
//! assert_eq!(ledger.progress(2000).status, Status::Low);
//! ```

pub mod config;
pub mod error;
pub mod ledger;
pub mod progress;
pub mod reference;

pub use config::{LedgerConfig, MatchingMode};
pub use error::{NutriError, Result};
pub use ledger::{EntryId, Ledger, LoggedFoodEntry, MatchKind, Resolution, Summary};
pub use progress::{Progress, Status};
pub use reference::{FoodReferenceEntry, ReferenceTable, Unit, QUICK_ADD};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
