//! # API REST
//!
//! REST API for the patient service.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialization, CORS, status codes)
//!
//! Uses `api-shared` for wire types and `patient-core` for data operations.

#![warn(rust_2018_idioms)]

pub mod error;

use api_shared::{ErrorRes, HealthRes, HealthService, PatientRequestDto, PatientResponseDto};
use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
    routing::get,
    Router,
};
use patient_core::PatientService;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use error::ApiError;

/// Application state shared across REST API handlers
#[derive(Clone)]
pub struct AppState {
    pub patient_service: PatientService,
}

#[derive(OpenApi)]
#[openapi(
    paths(health, list_patients, create_patient),
    components(schemas(HealthRes, ErrorRes, PatientRequestDto, PatientResponseDto))
)]
pub struct ApiDoc;

/// Builds the REST application.
///
/// Routes:
/// - `GET /health`
/// - `GET /patients`
/// - `POST /patients`
/// - Swagger UI at `/swagger-ui`, OpenAPI document at `/api-docs/openapi.json`
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/patients", get(list_patients).post(create_patient))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for monitoring and load balancers.
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    get,
    path = "/patients",
    responses(
        (status = 200, description = "List of patients", body = [PatientResponseDto]),
        (status = 500, description = "Internal server error", body = ErrorRes)
    )
)]
/// List all patients in the system
///
/// # Errors
/// Returns `500 Internal Server Error` if the patient store cannot be read.
#[axum::debug_handler]
async fn list_patients(
    State(state): State<AppState>,
) -> Result<Json<Vec<PatientResponseDto>>, ApiError> {
    let patients = state.patient_service.list_patients()?;
    Ok(Json(patients))
}

#[utoipa::path(
    post,
    path = "/patients",
    request_body = PatientRequestDto,
    responses(
        (status = 200, description = "Patient created", body = PatientResponseDto),
        (status = 400, description = "Email address already exists", body = ErrorRes),
        (status = 422, description = "Malformed request body", body = ErrorRes),
        (status = 500, description = "Internal server error", body = ErrorRes)
    )
)]
/// Create a new patient record
///
/// # Errors
/// Returns:
/// - `400 Bad Request` if another patient already uses the email address,
/// - the extractor's status (400, 415 or 422) if the body is not a valid request,
/// - `500 Internal Server Error` if the patient store cannot be written.
#[axum::debug_handler]
async fn create_patient(
    State(state): State<AppState>,
    payload: Result<Json<PatientRequestDto>, JsonRejection>,
) -> Result<Json<PatientResponseDto>, ApiError> {
    let Json(req) = payload?;
    let created = state.patient_service.create_patient(req)?;
    tracing::info!("created patient {}", created.id);
    Ok(Json(created))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use patient_core::repositories::memory::InMemoryPatientRepository;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app() -> Router {
        let repo = Arc::new(InMemoryPatientRepository::new());
        router(AppState {
            patient_service: PatientService::new(repo),
        })
    }

    fn post_patient(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/patients")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_owned()))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    const CAROL: &str = r#"{
        "name": "Carol",
        "email": "carol@example.com",
        "address": "1 High Street",
        "dateOfBirth": "1990-01-15",
        "registeredDate": "2024-03-01"
    }"#;

    #[tokio::test]
    async fn test_health() {
        let response = app().oneshot(get_request("/health")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["ok"], true);
    }

    #[tokio::test]
    async fn test_list_patients_empty() {
        let response = app().oneshot(get_request("/patients")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await, serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_create_then_list() {
        let app = app();

        let response = app.clone().oneshot(post_patient(CAROL)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let created = json_body(response).await;
        assert_eq!(created["name"], "Carol");
        assert_eq!(created["dateOfBirth"], "1990-01-15");
        let id = created["id"].as_str().unwrap().to_string();
        assert_eq!(id.len(), 32);

        let response = app.oneshot(get_request("/patients")).await.unwrap();
        let listed = json_body(response).await;
        let listed = listed.as_array().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0]["id"], id);
        assert_eq!(listed[0]["email"], "carol@example.com");
    }

    #[tokio::test]
    async fn test_duplicate_email_is_bad_request() {
        let app = app();
        app.clone().oneshot(post_patient(CAROL)).await.unwrap();

        let response = app.oneshot(post_patient(CAROL)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(
            body["message"],
            "Email address already exists: carol@example.com"
        );
    }

    #[tokio::test]
    async fn test_malformed_date_is_rejected() {
        let body = CAROL.replace("1990-01-15", "15/01/1990");

        let response = app().oneshot(post_patient(&body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = json_body(response).await;
        assert!(
            body["message"].as_str().unwrap().contains("dateOfBirth"),
            "message should name the failing field: {body}"
        );
    }

    #[tokio::test]
    async fn test_invalid_json_gets_json_error_body() {
        let response = app().oneshot(post_patient("{ not json")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert!(body["message"].is_string());
    }

    #[tokio::test]
    async fn test_missing_content_type_gets_json_error_body() {
        let request = Request::builder()
            .method("POST")
            .uri("/patients")
            .body(Body::from(CAROL))
            .unwrap();

        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
        let body = json_body(response).await;
        assert!(body["message"].is_string());
    }

    #[tokio::test]
    async fn test_openapi_document_lists_patient_routes() {
        let response = app()
            .oneshot(get_request("/api-docs/openapi.json"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let doc = json_body(response).await;
        assert!(doc["paths"]["/patients"]["get"].is_object());
        assert!(doc["paths"]["/patients"]["post"].is_object());
    }
}
