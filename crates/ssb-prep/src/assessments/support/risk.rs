use serde::{Deserialize, Serialize};

/// Readiness classification shared by every battery. `Low` marks the
/// strongest trait evidence, `High` the weakest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    pub const fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Moderate => "moderate",
            RiskLevel::High => "high",
        }
    }
}

/// Fixed cutoffs mapping a percentage (or aggregate score) to a risk level.
/// The text batteries and the physical battery deliberately use different
/// cutoffs; do not unify them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskThresholds {
    pub low: f64,
    pub moderate: f64,
}

/// 80/65 policy used by the three text batteries and the PIQ engine.
pub const TEXT_BATTERY_THRESHOLDS: RiskThresholds = RiskThresholds {
    low: 80.0,
    moderate: 65.0,
};

/// 75/60 policy used by the physical readiness engine.
pub const PHYSICAL_THRESHOLDS: RiskThresholds = RiskThresholds {
    low: 75.0,
    moderate: 60.0,
};

impl RiskThresholds {
    pub fn classify(&self, percentage: f64) -> RiskLevel {
        if percentage >= self.low {
            RiskLevel::Low
        } else if percentage >= self.moderate {
            RiskLevel::Moderate
        } else {
            RiskLevel::High
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_battery_cutoffs() {
        assert_eq!(TEXT_BATTERY_THRESHOLDS.classify(80.0), RiskLevel::Low);
        assert_eq!(TEXT_BATTERY_THRESHOLDS.classify(79.9), RiskLevel::Moderate);
        assert_eq!(TEXT_BATTERY_THRESHOLDS.classify(65.0), RiskLevel::Moderate);
        assert_eq!(TEXT_BATTERY_THRESHOLDS.classify(64.9), RiskLevel::High);
    }

    #[test]
    fn physical_cutoffs_sit_lower() {
        assert_eq!(PHYSICAL_THRESHOLDS.classify(75.0), RiskLevel::Low);
        assert_eq!(PHYSICAL_THRESHOLDS.classify(74.0), RiskLevel::Moderate);
        assert_eq!(PHYSICAL_THRESHOLDS.classify(59.9), RiskLevel::High);
    }

    #[test]
    fn higher_percentage_never_yields_worse_tier() {
        let mut previous = RiskLevel::High;
        for step in 0..=1000 {
            let pct = f64::from(step) / 10.0;
            let tier = TEXT_BATTERY_THRESHOLDS.classify(pct);
            assert!(tier <= previous, "tier worsened at {pct}");
            previous = tier;
        }
    }
}
