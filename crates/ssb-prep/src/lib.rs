//! Core library for the SSB preparation platform.
//!
//! The heart of the crate is [`assessments`]: six pure, deterministic scoring
//! engines for the practice batteries (situational reactions, thematic
//! stories, word association, the PIQ biographical questionnaire, physical
//! readiness, and the composite readiness index), together with the intake,
//! repository, and routing layer that surrounds them.

pub mod assessments;
pub mod config;
pub mod error;
pub mod telemetry;
