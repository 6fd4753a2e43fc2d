//! End-to-end checks of `ApiClient` against an in-process stand-in for the
//! candidate service.

use autoparse_core::{ApiClient, ApiError, Attachment};
use axum::extract::{Multipart, Path};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;

async fn list() -> Json<serde_json::Value> {
    Json(json!([
        {"id": 1, "name": "Asha Rao", "email": "asha@example.com", "extractionStatus": "Completed"},
        {"id": "b2", "name": "Ravi Iyer", "email": "ravi@example.com", "status": "In Review"}
    ]))
}

async fn detail(Path(id): Path<String>) -> Response {
    match id.as_str() {
        "missing" => (StatusCode::NOT_FOUND, "Candidate not found").into_response(),
        "broken" => StatusCode::SERVICE_UNAVAILABLE.into_response(),
        "empty" => StatusCode::NO_CONTENT.into_response(),
        "garbled" => (StatusCode::OK, "<html>oops</html>").into_response(),
        _ => Json(json!({
            "id": id,
            "name": "Asha Rao",
            "email": "asha@example.com",
            "skills": "Rust, Go, ",
            "confidence_scores": {"name": 0.98},
            "documents": [{"type": "PAN", "fileName": "pan.pdf"}]
        }))
        .into_response(),
    }
}

/// Field name → file name for every part received.
async fn fields(mut multipart: Multipart) -> Vec<(String, String)> {
    let mut seen = Vec::new();
    while let Some(field) = multipart.next_field().await.unwrap() {
        let name = field.name().unwrap_or_default().to_string();
        let file = field.file_name().unwrap_or_default().to_string();
        let _ = field.bytes().await.unwrap();
        seen.push((name, file));
    }
    seen
}

async fn upload(multipart: Multipart) -> Json<serde_json::Value> {
    let seen = fields(multipart).await;
    let (field, file) = seen.first().cloned().unwrap_or_default();
    Json(json!({"id": 101, "name": file, "email": "", "status": field}))
}

async fn request_documents(Path(id): Path<String>) -> Json<serde_json::Value> {
    Json(json!({"message": format!("Hello candidate {id}, please share your PAN and Aadhaar.")}))
}

async fn submit_documents(Path(id): Path<String>, multipart: Multipart) -> Response {
    let seen = fields(multipart).await;
    if id == "quiet" {
        return StatusCode::NO_CONTENT.into_response();
    }
    let names: Vec<String> = seen.into_iter().map(|(name, _)| name).collect();
    Json(json!({"message": format!("received {}", names.join(","))})).into_response()
}

async fn serve() -> ApiClient {
    let router = Router::new()
        .route("/api/candidates/", get(list))
        .route("/api/candidates/upload/", post(upload))
        .route("/api/candidates/{id}/", get(detail))
        .route(
            "/api/candidates/{id}/request-documents/",
            post(request_documents),
        )
        .route("/api/candidates/{id}/submit-documents/", post(submit_documents));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    ApiClient::new(format!("http://{addr}/"))
}

#[tokio::test]
async fn lists_candidates() {
    let client = serve().await;
    let candidates = client.list_candidates().await.unwrap();
    assert_eq!(candidates.len(), 2);
    assert_eq!(candidates[0].id, "1");
    assert_eq!(candidates[0].display_status(), "Completed");
    assert_eq!(candidates[1].status_class(), "in-review");
}

#[tokio::test]
async fn fetches_details() {
    let client = serve().await;
    let details = client.get_candidate("abc").await.unwrap().unwrap();
    assert_eq!(details.id(), "abc");
    assert_eq!(details.skills(), vec!["Rust", "Go"]);
    assert_eq!(details.confidence().unwrap()["name"], 0.98);
    assert_eq!(details.documents()[0].doc_type, "PAN");
}

#[tokio::test]
async fn error_body_becomes_message() {
    let client = serve().await;
    let err = client.get_candidate("missing").await.unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.to_string(), "Candidate not found");
}

#[tokio::test]
async fn empty_error_body_uses_status_line() {
    let client = serve().await;
    let err = client.get_candidate("broken").await.unwrap_err();
    assert_eq!(err.status(), Some(503));
    assert_eq!(err.to_string(), "503 Service Unavailable");
}

#[tokio::test]
async fn no_content_yields_nothing() {
    let client = serve().await;
    assert!(client.get_candidate("empty").await.unwrap().is_none());
    let message = client
        .submit_documents("quiet", Some(Attachment::new("pan.png", vec![1])), None)
        .await
        .unwrap();
    assert_eq!(message, "");
}

#[tokio::test]
async fn malformed_json_is_a_decode_error() {
    let client = serve().await;
    let err = client.get_candidate("garbled").await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn uploads_resume_in_resume_field() {
    let client = serve().await;
    let created = client
        .upload_resume(Attachment::new("asha.pdf", b"%PDF-1.7".to_vec()))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(created.id, "101");
    assert_eq!(created.name, "asha.pdf");
    assert_eq!(created.status.as_deref(), Some("resume"));
}

#[tokio::test]
async fn requests_documents() {
    let client = serve().await;
    let message = client.request_documents("7").await.unwrap();
    assert!(message.starts_with("Hello candidate 7"));
}

#[tokio::test]
async fn submits_only_present_documents() {
    let client = serve().await;
    let only_aadhar = client
        .submit_documents("7", None, Some(Attachment::new("aadhar.jpg", vec![0xff, 0xd8])))
        .await
        .unwrap();
    assert_eq!(only_aadhar, "received aadhar_card");

    let both = client
        .submit_documents(
            "7",
            Some(Attachment::new("pan.pdf", vec![1])),
            Some(Attachment::new("aadhar.pdf", vec![2])),
        )
        .await
        .unwrap();
    assert_eq!(both, "received pan_card,aadhar_card");
}

#[tokio::test]
async fn transport_failure_has_no_status() {
    let client = ApiClient::new("http://127.0.0.1:1");
    let err = client.list_candidates().await.unwrap_err();
    assert!(matches!(err, ApiError::RequestFailed { status: None, .. }));
}
