//! Goal-progress computation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Categorical consumption status relative to a goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Below 80% of the goal
    Low,
    /// Between 80% and 100% of the goal (or up to the overage threshold)
    Good,
    /// Above the configured overage threshold
    High,
    /// Above the goal with no overage threshold configured
    Exceeded,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Good => "good",
            Self::High => "high",
            Self::Exceeded => "exceeded",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Consumed-vs-goal summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Progress {
    pub consumed: u64,
    pub goal: u32,
    /// `max(0, goal - consumed)`
    pub remaining: u64,
    /// Percent of goal consumed, clamped to `[0, 100]`
    pub percent: f64,
    pub status: Status,
    /// Calories above the goal, when over it
    pub overage: Option<u64>,
}

impl Progress {
    /// Compute progress toward `goal`.
    ///
    /// `overage_threshold` is a ratio of the goal: when set, consumption up to
    /// `ratio * goal` still counts as `Good` and beyond it becomes `High`.
    /// When unset, anything above the goal is `Exceeded`.
    pub fn compute(consumed: u64, goal: u32, overage_threshold: Option<f64>) -> Self {
        let goal_u64 = u64::from(goal);
        let remaining = goal_u64.saturating_sub(consumed);
        let overage = (consumed > goal_u64).then(|| consumed - goal_u64);

        let percent = if goal == 0 {
            if consumed > 0 {
                100.0
            } else {
                0.0
            }
        } else {
            (consumed as f64 * 100.0 / goal as f64).min(100.0)
        };

        // 80% boundary compared in integers: consumed < 0.8 * goal.
        let status = if consumed * 5 < goal_u64 * 4 {
            Status::Low
        } else if consumed <= goal_u64 {
            Status::Good
        } else {
            match overage_threshold {
                Some(ratio) if consumed as f64 <= ratio * goal as f64 => Status::Good,
                Some(_) => Status::High,
                None => Status::Exceeded,
            }
        };

        Self {
            consumed,
            goal,
            remaining,
            percent,
            status,
            overage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nothing_consumed() {
        let p = Progress::compute(0, 2000, None);
        assert_eq!(p.remaining, 2000);
        assert_eq!(p.percent, 0.0);
        assert_eq!(p.status, Status::Low);
        assert_eq!(p.overage, None);
    }

    #[test]
    fn test_exactly_at_goal() {
        let p = Progress::compute(2000, 2000, None);
        assert_eq!(p.remaining, 0);
        assert_eq!(p.percent, 100.0);
        assert_eq!(p.status, Status::Good);
        assert_eq!(p.overage, None);
    }

    #[test]
    fn test_over_goal() {
        let p = Progress::compute(2500, 2000, None);
        assert_eq!(p.remaining, 0);
        assert_eq!(p.percent, 100.0);
        assert_eq!(p.status, Status::Exceeded);
        assert_eq!(p.overage, Some(500));
    }

    #[test]
    fn test_low_good_boundary() {
        assert_eq!(Progress::compute(1599, 2000, None).status, Status::Low);
        assert_eq!(Progress::compute(1600, 2000, None).status, Status::Good);
        assert_eq!(Progress::compute(1600, 2000, None).percent, 80.0);
    }

    #[test]
    fn test_overage_threshold_tiers() {
        let within = Progress::compute(2300, 2000, Some(1.2));
        assert_eq!(within.status, Status::Good);
        assert_eq!(within.overage, Some(300));

        let above = Progress::compute(2500, 2000, Some(1.2));
        assert_eq!(above.status, Status::High);
        assert_eq!(above.overage, Some(500));
    }

    #[test]
    fn test_zero_goal() {
        let empty = Progress::compute(0, 0, None);
        assert_eq!(empty.percent, 0.0);
        assert_eq!(empty.status, Status::Good);

        let some = Progress::compute(10, 0, None);
        assert_eq!(some.percent, 100.0);
        assert_eq!(some.status, Status::Exceeded);
        assert_eq!(some.overage, Some(10));
    }
}
