//! Physical-readiness scoring.
//!
//! Converts body metrics and fitness counts into four sub-scores (body
//! mass 0–30, vision 0–25, condition flags 0–25, fitness 0–25), an
//! aggregate clamped to [0, 100], a risk tier on the 75/60 policy, and a
//! four-week remediation plan.

mod domain;
mod plan;

pub use domain::{BmiCategory, PhysicalProfile, VisionCategory};
pub use plan::WeeklyTask;

use serde::{Deserialize, Serialize};

use super::support::risk::{RiskLevel, PHYSICAL_THRESHOLDS};

/// Full physical evaluation outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicalReport {
    pub bmi: f64,
    pub bmi_category: BmiCategory,
    pub bmi_score: u32,
    pub vision_score: u32,
    pub condition_score: u32,
    pub fitness_score: u32,
    pub total_score: u32,
    pub risk: RiskLevel,
    pub plan: Vec<WeeklyTask>,
}

/// Evaluate a physical profile end to end.
pub fn evaluate(profile: &PhysicalProfile) -> PhysicalReport {
    let bmi = body_mass_index(profile.weight_kg, profile.height_cm);
    let bmi_category = categorize_bmi(bmi);

    let bmi_score = match bmi_category {
        BmiCategory::Fit => 30,
        BmiCategory::Underweight | BmiCategory::Overweight => 20,
        BmiCategory::Obese => 10,
    };

    let vision_score = match profile.vision {
        VisionCategory::Normal => 25,
        VisionCategory::Correctable => 20,
        VisionCategory::Inadequate => 0,
    };

    // Deductions are independent and cumulative; the floor catches stacks
    // that would go past zero.
    let mut condition: i32 = 25;
    if profile.flat_foot {
        condition -= 10;
    }
    if profile.color_blindness {
        condition -= 20;
    }
    if profile.surgery_history {
        condition -= 10;
    }
    let condition_score = condition.max(0) as u32;

    let fitness_score = pushup_component(profile.pushup_count)
        + run_component(profile.run_minutes)
        + situp_component(profile.situp_count);

    let total_score =
        (bmi_score + vision_score + condition_score + fitness_score).clamp(0, 100);

    PhysicalReport {
        bmi,
        bmi_category,
        bmi_score,
        vision_score,
        condition_score,
        fitness_score,
        total_score,
        risk: PHYSICAL_THRESHOLDS.classify(f64::from(total_score)),
        plan: plan::build(profile, bmi_category, fitness_score),
    }
}

/// Weight over squared height in metres, rounded to two decimals.
pub fn body_mass_index(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    let raw = weight_kg / (height_m * height_m);
    (raw * 100.0).round() / 100.0
}

const fn pushup_component(count: u32) -> u32 {
    if count > 40 {
        10
    } else if count >= 20 {
        7
    } else {
        4
    }
}

fn run_component(minutes: f64) -> u32 {
    if minutes < 6.0 {
        10
    } else if minutes <= 7.0 {
        8
    } else if minutes <= 8.0 {
        6
    } else {
        4
    }
}

const fn situp_component(count: u32) -> u32 {
    if count > 40 {
        5
    } else if count >= 20 {
        3
    } else {
        2
    }
}

fn categorize_bmi(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::Fit
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fit_profile() -> PhysicalProfile {
        PhysicalProfile {
            height_cm: 170.0,
            weight_kg: 70.0,
            vision: VisionCategory::Normal,
            flat_foot: false,
            color_blindness: false,
            surgery_history: false,
            pushup_count: 45,
            run_minutes: 5.0,
            situp_count: 45,
        }
    }

    #[test]
    fn fit_candidate_clamps_at_one_hundred() {
        let report = evaluate(&fit_profile());

        assert_eq!(report.bmi, 24.22);
        assert_eq!(report.bmi_category, BmiCategory::Fit);
        assert_eq!(report.bmi_score, 30);
        assert_eq!(report.vision_score, 25);
        assert_eq!(report.condition_score, 25);
        assert_eq!(report.fitness_score, 25);
        // Raw sum is 105; the aggregate is clamped.
        assert_eq!(report.total_score, 100);
        assert_eq!(report.risk, RiskLevel::Low);
        assert!(report.plan[0].task.contains("cardio"));
    }

    #[test]
    fn condition_deductions_stack_and_floor_at_zero() {
        let mut profile = fit_profile();
        profile.flat_foot = true;
        profile.color_blindness = true;
        profile.surgery_history = true;

        let report = evaluate(&profile);
        assert_eq!(report.condition_score, 0);
        assert_eq!(report.total_score, 80);
    }

    #[test]
    fn bmi_band_edges() {
        assert_eq!(categorize_bmi(18.49), BmiCategory::Underweight);
        assert_eq!(categorize_bmi(18.5), BmiCategory::Fit);
        assert_eq!(categorize_bmi(24.99), BmiCategory::Fit);
        assert_eq!(categorize_bmi(25.0), BmiCategory::Overweight);
        assert_eq!(categorize_bmi(30.0), BmiCategory::Obese);
    }

    #[test]
    fn fitness_components_follow_their_cutoffs() {
        assert_eq!(pushup_component(41), 10);
        assert_eq!(pushup_component(40), 7);
        assert_eq!(pushup_component(19), 4);
        assert_eq!(run_component(5.9), 10);
        assert_eq!(run_component(7.0), 8);
        assert_eq!(run_component(8.0), 6);
        assert_eq!(run_component(8.1), 4);
        assert_eq!(situp_component(41), 5);
        assert_eq!(situp_component(20), 3);
        assert_eq!(situp_component(19), 2);
    }

    #[test]
    fn weak_fitness_draws_the_foundational_block() {
        let mut profile = fit_profile();
        profile.pushup_count = 10;
        profile.run_minutes = 9.0;
        profile.situp_count = 10;

        let report = evaluate(&profile);
        // 4 + 4 + 2 sits under the foundational cutoff.
        assert_eq!(report.fitness_score, 10);
        assert!(report.plan[1].task.contains("Foundational"));
    }

    #[test]
    fn week_three_prioritizes_flat_foot_over_vision() {
        let mut profile = fit_profile();
        profile.flat_foot = true;
        profile.vision = VisionCategory::Correctable;

        let report = evaluate(&profile);
        assert!(report.plan[2].task.contains("arch-correction"));

        profile.flat_foot = false;
        let report = evaluate(&profile);
        assert!(report.plan[2].task.contains("ophthalmology"));
    }

    #[test]
    fn week_four_lists_documents_for_flagged_conditions() {
        let mut profile = fit_profile();
        profile.color_blindness = true;
        profile.vision = VisionCategory::Correctable;

        let report = evaluate(&profile);
        assert_eq!(report.plan.len(), 4);
        let week4 = &report.plan[3];
        assert!(week4.task.contains("Ishihara"));
        assert!(week4.task.contains("refraction"));

        let clean = evaluate(&fit_profile());
        assert!(clean.plan[3].task.contains("compare"));
    }

    #[test]
    fn underweight_candidate_is_told_to_gain() {
        let mut profile = fit_profile();
        profile.weight_kg = 50.0;

        let report = evaluate(&profile);
        assert_eq!(report.bmi_category, BmiCategory::Underweight);
        assert_eq!(report.bmi_score, 20);
        assert!(report.plan[0].task.contains("Increase"));
    }

    #[test]
    fn evaluation_is_deterministic() {
        let profile = fit_profile();
        assert_eq!(evaluate(&profile), evaluate(&profile));
    }
}
