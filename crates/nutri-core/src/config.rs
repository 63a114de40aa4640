//! Ledger configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{NutriError, Result};

/// Default daily calorie goal.
pub const DEFAULT_DAILY_GOAL: u32 = 2000;

/// Default estimate for unmatched foods in lenient mode.
pub const DEFAULT_ESTIMATE_CALORIES: u32 = 100;

/// How food names are matched against the reference table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchingMode {
    /// Exact name match only; misses are errors
    #[default]
    Strict,
    /// Exact, then substring match, then a default estimate
    Lenient,
}

impl MatchingMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Lenient => "lenient",
        }
    }
}

impl fmt::Display for MatchingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchingMode {
    type Err = NutriError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "lenient" => Ok(Self::Lenient),
            other => Err(NutriError::InvalidConfig(format!(
                "unknown matching mode \"{}\" (use strict or lenient)",
                other
            ))),
        }
    }
}

/// Tunable ledger behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    /// Name matching policy
    pub matching_mode: MatchingMode,

    /// Calories credited to an unmatched food in lenient mode
    pub default_calories: u32,

    /// Daily calorie goal used by `Ledger::summary`
    pub daily_goal: u32,

    /// Optional ratio of the goal above which status becomes `high`.
    ///
    /// When unset, anything above the goal is `exceeded`.
    pub overage_threshold: Option<f64>,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            matching_mode: MatchingMode::default(),
            default_calories: DEFAULT_ESTIMATE_CALORIES,
            daily_goal: DEFAULT_DAILY_GOAL,
            overage_threshold: None,
        }
    }
}

impl LedgerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn matching_mode(mut self, mode: MatchingMode) -> Self {
        self.matching_mode = mode;
        self
    }

    pub fn default_calories(mut self, calories: u32) -> Self {
        self.default_calories = calories;
        self
    }

    pub fn daily_goal(mut self, goal: u32) -> Self {
        self.daily_goal = goal;
        self
    }

    pub fn overage_threshold(mut self, ratio: f64) -> Self {
        self.overage_threshold = Some(ratio);
        self
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns `NutriError::InvalidConfig` if the overage threshold is set but
    /// not a finite ratio of at least 1.0.
    pub fn validate(&self) -> Result<()> {
        if let Some(ratio) = self.overage_threshold {
            if !ratio.is_finite() || ratio < 1.0 {
                return Err(NutriError::InvalidConfig(format!(
                    "overage_threshold must be a ratio >= 1.0, got {}",
                    ratio
                )));
            }
        }
        Ok(())
    }
}
