use serde::{Deserialize, Serialize};

/// Vision assessment category from the medical self-report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisionCategory {
    Normal,
    Correctable,
    Inadequate,
}

impl VisionCategory {
    pub const fn label(self) -> &'static str {
        match self {
            VisionCategory::Normal => "normal",
            VisionCategory::Correctable => "correctable",
            VisionCategory::Inadequate => "inadequate",
        }
    }
}

/// Body-metric and fitness self-report. Numeric fields arrive already
/// clamped by the intake boundary: height to 50–250 cm, weight to
/// 20–200 kg.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicalProfile {
    pub height_cm: f64,
    pub weight_kg: f64,
    pub vision: VisionCategory,
    pub flat_foot: bool,
    pub color_blindness: bool,
    pub surgery_history: bool,
    pub pushup_count: u32,
    pub run_minutes: f64,
    pub situp_count: u32,
}

/// Body-mass-index band the candidate falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Fit,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub const fn label(self) -> &'static str {
        match self {
            BmiCategory::Underweight => "underweight",
            BmiCategory::Fit => "fit",
            BmiCategory::Overweight => "overweight",
            BmiCategory::Obese => "obese",
        }
    }
}
