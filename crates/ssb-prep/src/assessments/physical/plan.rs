//! Four-week remediation plan.
//!
//! Each week is chosen by a fixed decision tree over the evaluated
//! profile: week 1 by BMI band, week 2 by fitness sub-score, week 3 by
//! structural findings, week 4 by whether any flagged condition needs
//! supporting documents at the medical board.

use serde::{Deserialize, Serialize};

use super::domain::{BmiCategory, PhysicalProfile, VisionCategory};

/// One week of the remediation plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyTask {
    pub week: u8,
    pub focus: String,
    pub task: String,
}

/// Fitness sub-scores below this get the foundational strength block.
const FOUNDATIONAL_FITNESS_CUTOFF: u32 = 15;

pub(super) fn build(
    profile: &PhysicalProfile,
    category: BmiCategory,
    fitness_score: u32,
) -> Vec<WeeklyTask> {
    let week1 = match category {
        BmiCategory::Underweight => WeeklyTask {
            week: 1,
            focus: "Nutrition".to_string(),
            task: "Increase daily calorie intake with protein-dense meals and track weight twice a week.".to_string(),
        },
        BmiCategory::Fit => WeeklyTask {
            week: 1,
            focus: "Nutrition".to_string(),
            task: "Maintain current calorie intake and hold steady-state cardio three times this week.".to_string(),
        },
        BmiCategory::Overweight | BmiCategory::Obese => WeeklyTask {
            week: 1,
            focus: "Nutrition".to_string(),
            task: "Reduce daily calorie intake, cut refined sugar, and add a 30-minute brisk walk every day.".to_string(),
        },
    };

    let week2 = if fitness_score < FOUNDATIONAL_FITNESS_CUTOFF {
        WeeklyTask {
            week: 2,
            focus: "Strength".to_string(),
            task: "Foundational block: assisted push-ups, bodyweight squats, and planks on alternate days.".to_string(),
        }
    } else {
        WeeklyTask {
            week: 2,
            focus: "Strength".to_string(),
            task: "Advanced block: interval runs, full push-up pyramids, and weighted core circuits.".to_string(),
        }
    };

    let week3 = if profile.flat_foot {
        WeeklyTask {
            week: 3,
            focus: "Structure".to_string(),
            task: "Daily arch-correction exercises: towel scrunches, calf raises, and short barefoot walks on sand.".to_string(),
        }
    } else if profile.vision != VisionCategory::Normal {
        WeeklyTask {
            week: 3,
            focus: "Vision".to_string(),
            task: "Book an ophthalmology review and confirm whether correction meets the entry standard.".to_string(),
        }
    } else {
        WeeklyTask {
            week: 3,
            focus: "Mobility".to_string(),
            task: "Hip, ankle, and shoulder mobility work after each session to protect running form.".to_string(),
        }
    };

    let week4 = if profile.color_blindness || profile.vision != VisionCategory::Normal {
        let mut documents = Vec::new();
        if profile.color_blindness {
            documents.push("Ishihara colour-vision test report");
        }
        if profile.vision != VisionCategory::Normal {
            documents.push("refraction report and ophthalmologist certificate");
        }
        WeeklyTask {
            week: 4,
            focus: "Documentation".to_string(),
            task: format!(
                "Collect supporting documents for the medical board: {}.",
                documents.join("; ")
            ),
        }
    } else {
        WeeklyTask {
            week: 4,
            focus: "Re-test".to_string(),
            task: "Repeat the push-up, sit-up, and run tests and compare against this week's baseline.".to_string(),
        }
    };

    vec![week1, week2, week3, week4]
}
