use crate::infra::AppState;
use axum::extract::Query;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use ssb_prep::assessments::attempts::{assessment_router, AssessmentService, AttemptRepository};
use ssb_prep::assessments::bank::QuestionBank;

pub(crate) fn with_assessment_routes<R>(service: Arc<AssessmentService<R>>) -> axum::Router
where
    R: AttemptRepository + 'static,
{
    assessment_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/practice/prompts",
            axum::routing::get(practice_prompts),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct PromptQuery {
    #[serde(default)]
    kind: Option<String>,
}

/// Serve the built-in practice catalog so clients can render the practice
/// modules without a separate content service. An optional `kind` query
/// parameter narrows the listing to one battery.
pub(crate) async fn practice_prompts(Query(query): Query<PromptQuery>) -> Json<serde_json::Value> {
    let bank = QuestionBank::standard();
    let prompts: Vec<_> = bank
        .prompts()
        .iter()
        .filter(|prompt| match &query.kind {
            Some(kind) => prompt.kind.label() == kind.trim().to_ascii_lowercase(),
            None => true,
        })
        .collect();
    Json(json!({ "prompts": prompts }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ssb_prep::assessments::bank::PromptKind;

    #[tokio::test]
    async fn healthcheck_reports_ok() {
        let Json(body) = healthcheck().await;
        assert_eq!(body.get("status"), Some(&json!("ok")));
    }

    #[tokio::test]
    async fn practice_prompts_cover_all_batteries() {
        let Json(body) = practice_prompts(Query(PromptQuery::default())).await;
        let prompts = body
            .get("prompts")
            .and_then(serde_json::Value::as_array)
            .expect("prompt list");
        assert!(!prompts.is_empty());

        for kind in [
            PromptKind::Situational,
            PromptKind::Narrative,
            PromptKind::WordAssociation,
        ] {
            assert!(
                prompts
                    .iter()
                    .any(|prompt| prompt.get("kind") == Some(&json!(kind.label()))),
                "missing prompts for {}",
                kind.label()
            );
        }
    }

    #[tokio::test]
    async fn practice_prompts_filter_by_kind() {
        let query = PromptQuery {
            kind: Some("word_association".to_string()),
        };
        let Json(body) = practice_prompts(Query(query)).await;
        let prompts = body
            .get("prompts")
            .and_then(serde_json::Value::as_array)
            .expect("prompt list");
        assert!(!prompts.is_empty());
        assert!(prompts
            .iter()
            .all(|prompt| prompt.get("kind") == Some(&json!("word_association"))));
    }
}
