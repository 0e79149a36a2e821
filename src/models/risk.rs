use serde::{Deserialize, Serialize};

/// Banded risk level derived from a numeric score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Band boundaries: low [0, 0.3), medium [0.3, 0.6), high [0.6, ∞).
    pub fn from_score(score: f64) -> Self {
        if score >= 0.6 {
            RiskLevel::High
        } else if score >= 0.3 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

/// Per-category score for one clause, kept even below the flag threshold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryScore {
    pub category_id: String,
    /// Clamped to [0, 1].
    pub score: f64,
    pub matched_triggers: Vec<String>,
}

/// A triggered risk finding for a specific clause and catalog category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskFlag {
    pub clause_id: String,
    pub clause_index: usize,
    pub category_id: String,
    /// Severity in [0, 1]; equal to the category score that crossed the threshold.
    pub severity: f64,
    pub matched_triggers: Vec<String>,
    pub rationale: String,
    pub advice: String,
}

/// Risk scorer output for one clause.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClauseRisk {
    pub scores: Vec<CategoryScore>,
    pub flags: Vec<RiskFlag>,
}

impl ClauseRisk {
    /// The clause's single headline score: its worst category.
    pub fn max_score(&self) -> f64 {
        self.scores
            .iter()
            .map(|s| s.score)
            .fold(0.0, f64::max)
    }

    pub fn risk_level(&self) -> RiskLevel {
        RiskLevel::from_score(self.max_score())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_level_bands() {
        assert_eq!(RiskLevel::from_score(0.0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(0.29), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(0.3), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(0.59), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(0.6), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(1.0), RiskLevel::High);
    }

    #[test]
    fn test_max_score_empty_is_zero() {
        let risk = ClauseRisk {
            scores: vec![],
            flags: vec![],
        };
        assert_eq!(risk.max_score(), 0.0);
        assert_eq!(risk.risk_level(), RiskLevel::Low);
    }

    #[test]
    fn test_max_score_picks_worst_category() {
        let risk = ClauseRisk {
            scores: vec![
                CategoryScore {
                    category_id: "penalty".to_string(),
                    score: 0.4,
                    matched_triggers: vec![],
                },
                CategoryScore {
                    category_id: "unlimited_liability".to_string(),
                    score: 0.9,
                    matched_triggers: vec![],
                },
            ],
            flags: vec![],
        };
        assert_eq!(risk.max_score(), 0.9);
        assert_eq!(risk.risk_level(), RiskLevel::High);
    }

    mod prop_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_risk_level_total(score in 0.0f64..=1.0) {
                // Every in-range score maps to exactly one band.
                let level = RiskLevel::from_score(score);
                match level {
                    RiskLevel::Low => prop_assert!(score < 0.3),
                    RiskLevel::Medium => prop_assert!((0.3..0.6).contains(&score)),
                    RiskLevel::High => prop_assert!(score >= 0.6),
                }
            }

            #[test]
            fn prop_risk_level_monotonic(a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
                let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
                prop_assert!(RiskLevel::from_score(lo) <= RiskLevel::from_score(hi));
            }
        }
    }
}
