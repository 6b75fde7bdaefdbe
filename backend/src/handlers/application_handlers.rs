use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::models::application_models::NewSchoolApplication;
use crate::AppState;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email regex"));

const DUPLICATE_MESSAGE: &str = "Duplicate entry: this email has already applied for this school";
const RECEIVED_MESSAGE: &str = "Application received. Our team will contact you shortly.";

// Request DTO — field names match the browser client's JSON.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchoolApplicationRequest {
    pub name: String,
    pub email: String,
    pub number: String,
    pub designation: String,
    pub school_name: String,
    #[serde(default)]
    pub message: String,
}

// Every outcome, including errors, carries this body so the client can
// always read `success`.
#[derive(Serialize, Deserialize)]
pub struct ApplicationResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ApplicationResponse {
    fn success(message: &str) -> Self {
        Self {
            success: true,
            message: Some(message.to_string()),
        }
    }

    fn failure(message: String) -> Self {
        Self {
            success: false,
            message: Some(message),
        }
    }
}

fn first_missing_field(application_req: &SchoolApplicationRequest) -> Option<&'static str> {
    if application_req.name.trim().is_empty() {
        return Some("name");
    }
    if application_req.email.trim().is_empty() {
        return Some("email");
    }
    if application_req.number.trim().is_empty() {
        return Some("number");
    }
    if application_req.designation.trim().is_empty() {
        return Some("designation");
    }
    if application_req.school_name.trim().is_empty() {
        return Some("schoolName");
    }
    None
}

pub async fn submit_application(
    State(state): State<Arc<AppState>>,
    Json(application_req): Json<SchoolApplicationRequest>,
) -> Result<(StatusCode, Json<ApplicationResponse>), (StatusCode, Json<ApplicationResponse>)> {
    if let Some(field) = first_missing_field(&application_req) {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApplicationResponse::failure(format!(
                "Missing required field: {}",
                field
            ))),
        ));
    }

    if !EMAIL_RE.is_match(application_req.email.trim()) {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApplicationResponse::failure(
                "Invalid email address".to_string(),
            )),
        ));
    }

    match state
        .application_repository
        .exists_for_school(&application_req.email, &application_req.school_name)
    {
        Ok(true) => {
            return Err((
                StatusCode::CONFLICT,
                Json(ApplicationResponse::failure(DUPLICATE_MESSAGE.to_string())),
            ));
        }
        Ok(false) => {}
        Err(e) => {
            tracing::error!("Failed to check for an existing application: {}", e);
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApplicationResponse::failure("Database error".to_string())),
            ));
        }
    }

    let new_application = NewSchoolApplication {
        name: application_req.name.trim().to_string(),
        email: application_req.email.trim().to_string(),
        number: application_req.number.trim().to_string(),
        designation: application_req.designation.trim().to_string(),
        school_name: application_req.school_name.trim().to_string(),
        message: application_req.message.trim().to_string(),
        created_at: Utc::now().timestamp() as i32,
    };

    if let Err(e) = state.application_repository.insert(new_application) {
        tracing::error!("Failed to store a school application: {}", e);
        return Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApplicationResponse::failure("Database error".to_string())),
        ));
    }

    tracing::info!(
        "Stored school application from {} ({})",
        application_req.school_name.trim(),
        application_req.email.trim()
    );
    Ok((
        StatusCode::CREATED,
        Json(ApplicationResponse::success(RECEIVED_MESSAGE)),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request};
    use axum::routing::{get, post};
    use axum::Router;
    use diesel::r2d2::{self, ConnectionManager};
    use diesel::SqliteConnection;
    use http_body_util::BodyExt;
    use serde_json::json;
    use tower::ServiceExt;

    use crate::repositories::application_repository::{ensure_schema, ApplicationRepository};

    fn test_app() -> (Router, Arc<AppState>) {
        let manager = ConnectionManager::<SqliteConnection>::new(":memory:");
        let pool = r2d2::Pool::builder()
            .max_size(1)
            .build(manager)
            .expect("Failed to create pool");
        ensure_schema(&pool).expect("Failed to set up schema");

        let state = Arc::new(AppState {
            application_repository: Arc::new(ApplicationRepository::new(pool)),
        });
        let app = Router::new()
            .route("/api/health", get(crate::health_check))
            .route("/api/school-applications", post(submit_application))
            .with_state(state.clone());
        (app, state)
    }

    fn valid_body() -> serde_json::Value {
        json!({
            "name": "Asha Verma",
            "email": "asha@school.edu",
            "number": "+91 98765 43210",
            "designation": "Principal",
            "schoolName": "Sunrise Public School",
            "message": "Interested in the program."
        })
    }

    async fn submit(app: &Router, body: serde_json::Value) -> (StatusCode, ApplicationResponse) {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/school-applications")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let parsed = serde_json::from_slice(&bytes).unwrap();
        (status, parsed)
    }

    #[tokio::test]
    async fn accepts_a_valid_application() {
        let (app, state) = test_app();
        let (status, body) = submit(&app, valid_body()).await;

        assert_eq!(status, StatusCode::CREATED);
        assert!(body.success);
        assert_eq!(state.application_repository.count().unwrap(), 1);
    }

    #[tokio::test]
    async fn rejects_a_blank_required_field() {
        let (app, state) = test_app();
        let mut body = valid_body();
        body["schoolName"] = json!("   ");
        let (status, parsed) = submit(&app, body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(!parsed.success);
        assert!(parsed.message.unwrap().contains("schoolName"));
        assert_eq!(state.application_repository.count().unwrap(), 0);
    }

    #[tokio::test]
    async fn rejects_a_malformed_email() {
        let (app, state) = test_app();
        let mut body = valid_body();
        body["email"] = json!("not-an-email");
        let (status, parsed) = submit(&app, body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(!parsed.success);
        assert_eq!(parsed.message.unwrap(), "Invalid email address");
        assert_eq!(state.application_repository.count().unwrap(), 0);
    }

    #[tokio::test]
    async fn rejects_a_duplicate_application() {
        let (app, state) = test_app();
        let (first_status, _) = submit(&app, valid_body()).await;
        assert_eq!(first_status, StatusCode::CREATED);

        let (status, parsed) = submit(&app, valid_body()).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert!(!parsed.success);
        assert!(parsed.message.unwrap().contains("Duplicate entry"));
        assert_eq!(state.application_repository.count().unwrap(), 1);
    }

    #[tokio::test]
    async fn duplicate_check_ignores_email_case() {
        let (app, _state) = test_app();
        submit(&app, valid_body()).await;

        let mut body = valid_body();
        body["email"] = json!("ASHA@SCHOOL.EDU");
        let (status, parsed) = submit(&app, body).await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert!(parsed.message.unwrap().contains("Duplicate entry"));
    }

    #[tokio::test]
    async fn same_email_may_apply_for_another_school() {
        let (app, state) = test_app();
        submit(&app, valid_body()).await;

        let mut body = valid_body();
        body["schoolName"] = json!("Another Public School");
        let (status, parsed) = submit(&app, body).await;

        assert_eq!(status, StatusCode::CREATED);
        assert!(parsed.success);
        assert_eq!(state.application_repository.count().unwrap(), 2);
    }

    #[tokio::test]
    async fn message_field_is_optional() {
        let (app, _state) = test_app();
        let mut body = valid_body();
        body.as_object_mut().unwrap().remove("message");
        let (status, parsed) = submit(&app, body).await;

        assert_eq!(status, StatusCode::CREATED);
        assert!(parsed.success);
    }

    #[tokio::test]
    async fn health_check_answers_ok() {
        let (app, _state) = test_app();
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"OK");
    }
}
