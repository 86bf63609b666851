use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use ssb_prep::assessments::attempts::{
    AssessmentOutcome, AssessmentService, AttemptRecord, CandidateId, NarrativeAnswer,
    PhysicalSubmission, PiqSubmission, SituationalAnswer, WordAssociationAnswer,
};
use ssb_prep::assessments::bank::{PromptKind, QuestionBank};
use ssb_prep::error::AppError;

use crate::infra::InMemoryAttemptRepository;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Optional partner question bank CSV to draw prompts from
    #[arg(long)]
    pub(crate) bank_csv: Option<PathBuf>,
    /// Candidate identifier used for the demo run
    #[arg(long, default_value = "demo-aspirant")]
    pub(crate) candidate: String,
}

/// Score a canned candidate across every battery against the active
/// question bank and print the resulting reports.
pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let bank = match &args.bank_csv {
        Some(path) => QuestionBank::from_csv_path(path)?,
        None => QuestionBank::standard(),
    };

    let repository = Arc::new(InMemoryAttemptRepository::default());
    let service = AssessmentService::new(repository);
    let candidate = CandidateId(args.candidate.clone());

    println!("SSB preparation scoring demo");
    println!("Candidate: {}", candidate.0);
    if args.bank_csv.is_some() {
        println!("Question bank: partner CSV import ({} prompts)", bank.prompts().len());
    } else {
        println!("Question bank: built-in standard catalog");
    }

    let situational: Vec<SituationalAnswer> = bank
        .of_kind(PromptKind::Situational)
        .iter()
        .map(|prompt| SituationalAnswer {
            prompt_id: prompt.key.clone(),
            theme: Some(prompt.theme.clone()),
            response: "I will organize the group, assign tasks, and alert the authorities immediately."
                .to_string(),
        })
        .collect();
    if !situational.is_empty() {
        let record = service.submit_situational(candidate.clone(), situational)?;
        render_attempt(&record);
    }

    let narrative: Vec<NarrativeAnswer> = bank
        .of_kind(PromptKind::Narrative)
        .iter()
        .map(|prompt| NarrativeAnswer {
            picture_id: prompt.key.clone(),
            theme: Some(prompt.theme.clone()),
            difficulty: Some(prompt.difficulty.label().to_string()),
            story: "The young officer noticed the flood had stranded several villagers near the \
                    bridge. He stayed calm, made a plan, and organized the rescue with his team. \
                    First he assigned volunteers to guide children, then arranged boats. Finally \
                    everyone was saved and reached the camp safely, and the village returned to \
                    normal."
                .to_string(),
        })
        .collect();
    if !narrative.is_empty() {
        let record = service.submit_narrative(candidate.clone(), narrative)?;
        render_attempt(&record);
    }

    let words: Vec<WordAssociationAnswer> = bank
        .of_kind(PromptKind::WordAssociation)
        .iter()
        .map(|prompt| WordAssociationAnswer {
            word_id: prompt.key.clone(),
            word: prompt.prompt.clone(),
            theme: Some(prompt.theme.clone()),
            difficulty: Some(prompt.difficulty.label().to_string()),
            sentence: format!(
                "I use {} to train, serve, and lead my team every day.",
                prompt.prompt
            ),
        })
        .collect();
    if !words.is_empty() {
        let record = service.submit_word_association(candidate.clone(), words)?;
        render_attempt(&record);
    }

    let record = service.submit_piq(candidate.clone(), demo_piq())?;
    render_attempt(&record);

    let record = service.submit_physical(candidate.clone(), demo_physical())?;
    render_attempt(&record);

    let readiness = service.readiness(&candidate)?;
    println!("\nComposite readiness index: {}", readiness.readiness_index);

    Ok(())
}

fn demo_piq() -> PiqSubmission {
    PiqSubmission {
        position_of_responsibility: true,
        team_sports_years: 2,
        ncc_involvement: false,
        sports_level: "district".to_string(),
        organized_event: true,
        volunteer_work: false,
        family_responsibility: true,
        academic_consistency: true,
        public_speaking: false,
        competitive_achievements: true,
        attempt_number: 2,
    }
}

fn demo_physical() -> PhysicalSubmission {
    PhysicalSubmission {
        height_cm: 172.0,
        weight_kg: 81.0,
        vision: "correctable".to_string(),
        flat_foot: false,
        color_blindness: false,
        surgery_history: false,
        pushup_count: 25,
        run_minutes: 7.5,
        situp_count: 30,
    }
}

fn render_attempt(record: &AttemptRecord) {
    let view = record.view();
    println!(
        "\n[{}] score {:.0}/100, risk {}, recorded {}",
        view.battery,
        view.score,
        view.risk,
        view.recorded_at.format("%Y-%m-%d %H:%M:%S")
    );

    match &record.outcome {
        AssessmentOutcome::Situational(report) => {
            for (theme, slice) in &report.themes {
                println!("- {theme}: {:.0}/{:.0}", slice.score, slice.max_score);
            }
        }
        AssessmentOutcome::Narrative(report) => {
            for (theme, slice) in &report.themes {
                println!("- {theme}: {:.0}/{:.0}", slice.score, slice.max_score);
            }
        }
        AssessmentOutcome::WordAssociation(report) => {
            for (theme, slice) in &report.themes {
                println!("- {theme}: {:.0}/{:.0}", slice.score, slice.max_score);
            }
        }
        AssessmentOutcome::Piq(report) => {
            println!(
                "- OLQ: leadership {}, initiative {}, responsibility {}, social {}, confidence {}, consistency {}",
                report.olq.leadership,
                report.olq.initiative,
                report.olq.responsibility,
                report.olq.social_adaptability,
                report.olq.confidence,
                report.olq.consistency
            );
            for question in &report.follow_up_questions {
                println!("- likely probe ({}): {}", question.olq_trait.label(), question.question);
            }
        }
        AssessmentOutcome::Physical(report) => {
            println!(
                "- BMI {:.2} ({}), sub-scores: body {}, vision {}, condition {}, fitness {}",
                report.bmi,
                report.bmi_category.label(),
                report.bmi_score,
                report.vision_score,
                report.condition_score,
                report.fitness_score
            );
            for task in &report.plan {
                println!("- week {} [{}]: {}", task.week, task.focus, task.task);
            }
        }
    }
}
