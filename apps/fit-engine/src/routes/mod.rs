pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::matching::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Fit API
        .route("/api/v1/fit/evaluate", post(handlers::handle_evaluate))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::EngineConfig;
    use crate::matching::ontology::SoftSkillOntology;
    use crate::matching::testing::{FixedJudge, StaticEmbeddings};
    use crate::matching::FitEngine;

    fn app() -> Router {
        let similarity = StaticEmbeddings::new()
            .with("Backend Engineer", vec![1.0, 0.0])
            .with("Backend Developer", vec![0.96, 0.28])
            .with("Frontend Developer", vec![0.2, 0.98]);
        let engine = FitEngine::new(
            EngineConfig::new(0.6),
            Arc::new(SoftSkillOntology::default()),
            Arc::new(similarity),
            Arc::new(FixedJudge::new(0.7)),
        )
        .unwrap();
        build_router(AppState { engine })
    }

    fn evaluate(body: String) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/v1/fit/evaluate")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    fn payload(roles: &[&str]) -> Value {
        json!({
            "resume": {
                "sections": {
                    "Work Experience": ["Backend developer at Acme, Jan 2019 - Jan 2023"],
                    "Skills": "Rust, SQL"
                },
                "hard_skills": ["Rust", "SQL"],
                "declared_roles": roles
            },
            "job": {
                "title": "Backend Engineer",
                "sections": {
                    "Responsibilities": "Build and run billing services",
                    "Requirements": ["Rust", "SQL", "Kafka"]
                },
                "hard_skills_required": ["rust", "sql", "kafka"],
                "years_experience_required": 3,
                "contact_person": {"name": "Jane Doe", "role": "Engineering Manager"}
            }
        })
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["service"], "fit-engine");
    }

    #[tokio::test]
    async fn test_evaluate_routes_with_contact() {
        let (status, body) = send(evaluate(payload(&["Backend Developer"]).to_string())).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body["request_id"].is_string());
        let outcome = &body["outcome"];
        assert_eq!(outcome["status"], "routed");
        assert_eq!(outcome["decision"]["mode"], "Personalized");
        assert_eq!(outcome["decision"]["contact"]["name"], "Jane Doe");
        let score = outcome["decision"]["breakdown"]["final_score"].as_f64().unwrap();
        assert!((0.0..=1.0).contains(&score));
    }

    #[tokio::test]
    async fn test_evaluate_rejected_by_title_gate() {
        let (status, body) = send(evaluate(payload(&["Frontend Developer"]).to_string())).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["outcome"]["status"], "rejected");
        assert_eq!(body["outcome"]["gate"]["passed"], false);
    }

    #[tokio::test]
    async fn test_evaluate_empty_documents_is_unprocessable() {
        let (status, body) = send(evaluate("{}".to_string())).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "MALFORMED_EXTRACTION");
    }

    #[tokio::test]
    async fn test_evaluate_invalid_json_is_bad_request() {
        let (status, body) = send(evaluate("{not json".to_string())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }
}
