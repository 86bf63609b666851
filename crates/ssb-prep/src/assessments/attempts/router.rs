use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{AttemptId, CandidateId};
use super::intake::{
    NarrativeAnswer, PhysicalSubmission, PiqSubmission, SituationalAnswer, WordAssociationAnswer,
};
use super::repository::{AttemptRepository, RepositoryError};
use super::service::{AssessmentService, AssessmentServiceError};

/// Router builder exposing HTTP endpoints for battery submission and
/// readiness lookups.
pub fn assessment_router<R>(service: Arc<AssessmentService<R>>) -> Router
where
    R: AttemptRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/assessments/situational",
            post(submit_situational::<R>),
        )
        .route("/api/v1/assessments/narrative", post(submit_narrative::<R>))
        .route(
            "/api/v1/assessments/word-association",
            post(submit_word_association::<R>),
        )
        .route("/api/v1/assessments/piq", post(submit_piq::<R>))
        .route("/api/v1/assessments/physical", post(submit_physical::<R>))
        .route("/api/v1/attempts/:attempt_id", get(attempt_status::<R>))
        .route(
            "/api/v1/candidates/:candidate_id/readiness",
            get(candidate_readiness::<R>),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
struct SituationalRequest {
    candidate_id: String,
    answers: Vec<SituationalAnswer>,
}

#[derive(Debug, Deserialize)]
struct NarrativeRequest {
    candidate_id: String,
    answers: Vec<NarrativeAnswer>,
}

#[derive(Debug, Deserialize)]
struct WordAssociationRequest {
    candidate_id: String,
    answers: Vec<WordAssociationAnswer>,
}

#[derive(Debug, Deserialize)]
struct PiqRequest {
    candidate_id: String,
    profile: PiqSubmission,
}

#[derive(Debug, Deserialize)]
struct PhysicalRequest {
    candidate_id: String,
    profile: PhysicalSubmission,
}

async fn submit_situational<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    axum::Json(request): axum::Json<SituationalRequest>,
) -> Response
where
    R: AttemptRepository + 'static,
{
    submission_response(
        service.submit_situational(CandidateId(request.candidate_id), request.answers),
    )
}

async fn submit_narrative<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    axum::Json(request): axum::Json<NarrativeRequest>,
) -> Response
where
    R: AttemptRepository + 'static,
{
    submission_response(service.submit_narrative(CandidateId(request.candidate_id), request.answers))
}

async fn submit_word_association<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    axum::Json(request): axum::Json<WordAssociationRequest>,
) -> Response
where
    R: AttemptRepository + 'static,
{
    submission_response(
        service.submit_word_association(CandidateId(request.candidate_id), request.answers),
    )
}

async fn submit_piq<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    axum::Json(request): axum::Json<PiqRequest>,
) -> Response
where
    R: AttemptRepository + 'static,
{
    submission_response(service.submit_piq(CandidateId(request.candidate_id), request.profile))
}

async fn submit_physical<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    axum::Json(request): axum::Json<PhysicalRequest>,
) -> Response
where
    R: AttemptRepository + 'static,
{
    submission_response(service.submit_physical(CandidateId(request.candidate_id), request.profile))
}

async fn attempt_status<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Path(attempt_id): Path<String>,
) -> Response
where
    R: AttemptRepository + 'static,
{
    let id = AttemptId(attempt_id);
    match service.attempt(&id) {
        Ok(record) => {
            let view = record.view();
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(AssessmentServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "attempt_id": id.0,
                "error": "attempt not found",
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => internal_error(other),
    }
}

async fn candidate_readiness<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Path(candidate_id): Path<String>,
) -> Response
where
    R: AttemptRepository + 'static,
{
    match service.readiness(&CandidateId(candidate_id)) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(other) => internal_error(other),
    }
}

fn submission_response(
    result: Result<super::domain::AttemptRecord, AssessmentServiceError>,
) -> Response {
    match result {
        Ok(record) => {
            let view = record.view();
            (StatusCode::ACCEPTED, axum::Json(view)).into_response()
        }
        Err(AssessmentServiceError::Intake(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(AssessmentServiceError::Repository(RepositoryError::Conflict)) => {
            let payload = json!({
                "error": "attempt already exists",
            });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(other) => internal_error(other),
    }
}

fn internal_error(error: AssessmentServiceError) -> Response {
    let payload = json!({
        "error": error.to_string(),
    });
    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
}
