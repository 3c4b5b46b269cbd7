use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use database_layer::{
    DatabaseError, DatabaseResult, DiseaseCatalog, DiseaseRecord, InMemoryDiseaseCatalog, InMemoryHistoryRepository,
    Organ,
};
use serde_json::{json, Value};
use std::sync::Arc;
use symptom_engine::{HistoryEntry, HistoryError, HistoryRecorder, KeywordModel, MedicalHistoryRecord};
use tower::ServiceExt;

use homecare_server::{create_app, HomecareServer, ServerConfig};

/// Catalog whose store is unreachable
struct DownCatalog;

#[async_trait]
impl DiseaseCatalog for DownCatalog {
    async fn list_diseases(&self) -> DatabaseResult<Vec<DiseaseRecord>> {
        Err(down())
    }
    async fn get_disease(&self, _disease_id: i64) -> DatabaseResult<Option<DiseaseRecord>> {
        Err(down())
    }
    async fn get_disease_by_name(&self, _name: &str) -> DatabaseResult<Option<DiseaseRecord>> {
        Err(down())
    }
    async fn search_diseases(&self, _query: &str) -> DatabaseResult<Vec<DiseaseRecord>> {
        Err(down())
    }
    async fn diseases_by_organ(&self, _organ_system: &str) -> DatabaseResult<Vec<DiseaseRecord>> {
        Err(down())
    }
    async fn list_organs(&self) -> DatabaseResult<Vec<Organ>> {
        Err(down())
    }
    async fn find_by_approximate_name(&self, _key: &str) -> DatabaseResult<Option<DiseaseRecord>> {
        Err(down())
    }
    async fn ping(&self) -> bool {
        false
    }
}

fn down() -> DatabaseError {
    DatabaseError::ConnectionFailed("connection refused".to_string())
}

/// History store that rejects every write
struct ReadOnlyHistory;

#[async_trait]
impl HistoryRecorder for ReadOnlyHistory {
    async fn record(&self, _entry: HistoryEntry) -> Result<MedicalHistoryRecord, HistoryError> {
        Err(HistoryError::Query("read-only replica".to_string()))
    }
    async fn list_for_user(&self, _user_id: &str, _limit: u32) -> Result<Vec<MedicalHistoryRecord>, HistoryError> {
        Ok(Vec::new())
    }
}

fn in_memory_app() -> Router {
    create_app(HomecareServer::new_in_memory(
        ServerConfig::default(),
        KeywordModel::builtin(),
    ))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap_or(Value::Null)
    };
    (status, value)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).method("GET").body(Body::empty()).unwrap()
}

fn predict_request(body: Value, user_id: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .uri("/api/v1/diseases/predict")
        .method("POST")
        .header("content-type", "application/json");
    if let Some(user_id) = user_id {
        builder = builder.header("x-user-id", user_id);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let app = in_memory_app();

    let (status, body) = send(&app, get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["checks"]["database"], "healthy");
}

#[tokio::test]
async fn test_predict_dengue() {
    let app = in_memory_app();

    let (status, body) = send(
        &app,
        predict_request(json!({ "symptoms": "I have high fever and joint pain" }), None),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["totalMatches"], 6);
    assert_eq!(body["predictions"].as_array().unwrap().len(), 3);

    let top = &body["predictions"][0];
    assert_eq!(top["diseaseKey"], "dengue");
    assert_eq!(top["confidence"], 50);
    assert_eq!(top["matchedKeywords"], json!(["high fever", "joint pain"]));
    assert_eq!(top["reference"]["disease_name"], "Dengue");
    assert!(body["disclaimer"].as_str().unwrap().contains("healthcare professional"));
}

#[tokio::test]
async fn test_predict_without_matches() {
    let app = in_memory_app();

    let (status, body) = send(&app, predict_request(json!({ "symptoms": "I feel great today" }), None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalMatches"], 0);
    assert_eq!(body["predictions"], json!([]));
}

#[tokio::test]
async fn test_predict_rejects_blank_symptoms() {
    let app = in_memory_app();

    let (status, body) = send(&app, predict_request(json!({ "symptoms": "   " }), None)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error_type"], "validation_error");
    assert_eq!(body["success"], false);

    let (status, _) = send(&app, predict_request(json!({}), None)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_predict_rejects_malformed_json() {
    let app = in_memory_app();
    let request = Request::builder()
        .uri("/api/v1/diseases/predict")
        .method("POST")
        .header("content-type", "application/json")
        .body(Body::from("{\"symptoms\": "))
        .unwrap();

    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error_type"], "bad_request");
}

#[tokio::test]
async fn test_prediction_is_recorded_for_identified_caller() {
    let app = in_memory_app();

    let (status, _) = send(
        &app,
        predict_request(json!({ "symptoms": "I have high fever and joint pain" }), Some("patient-7")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let request = Request::builder()
        .uri("/api/v1/medical-history")
        .header("x-user-id", "patient-7")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::OK);
    let history = body["history"].as_array().unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0]["predicted_disease"], "Dengue");
    assert_eq!(history[0]["confidence_score"], 50);
    assert_eq!(history[0]["notes"], "Matched symptoms: high fever, joint pain");
}

#[tokio::test]
async fn test_body_user_id_is_recorded() {
    let history = Arc::new(InMemoryHistoryRepository::new());
    let server = HomecareServer::from_parts(
        ServerConfig::default(),
        KeywordModel::builtin(),
        Arc::new(InMemoryDiseaseCatalog::seeded()),
        history.clone(),
    );
    let app = create_app(server);

    send(
        &app,
        predict_request(json!({ "symptoms": "wheezing", "user_id": "patient-9" }), None),
    )
    .await;
    send(&app, predict_request(json!({ "symptoms": "wheezing" }), None)).await;
    send(&app, predict_request(json!({ "symptoms": "nothing wrong" }), Some("patient-9"))).await;

    assert_eq!(history.len(), 1);
    let records = history.list_for_user("patient-9", 50).await.unwrap();
    assert_eq!(records[0].predicted_disease, "Asthma");
}

#[tokio::test]
async fn test_history_requires_identity() {
    let app = in_memory_app();

    let (status, body) = send(&app, get("/api/v1/medical-history")).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error_type"], "authentication_error");
}

#[tokio::test]
async fn test_recording_failure_does_not_fail_prediction() {
    let server = HomecareServer::from_parts(
        ServerConfig::default(),
        KeywordModel::builtin(),
        Arc::new(InMemoryDiseaseCatalog::seeded()),
        Arc::new(ReadOnlyHistory),
    );
    let app = create_app(server);

    let (status, body) = send(&app, predict_request(json!({ "symptoms": "jaundice" }), Some("patient-1"))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["predictions"][0]["reference"]["disease_name"], "Hepatitis");
}

#[tokio::test]
async fn test_reference_outage_returns_503() {
    let server = HomecareServer::from_parts(
        ServerConfig::default(),
        KeywordModel::builtin(),
        Arc::new(DownCatalog),
        Arc::new(InMemoryHistoryRepository::new()),
    );
    let app = create_app(server);

    let (status, body) = send(&app, predict_request(json!({ "symptoms": "fever and chills" }), None)).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error_type"], "service_unavailable");

    let (status, body) = send(&app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "degraded");

    let (status, _) = send(&app, get("/api/v1/diseases")).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_disease_catalog_endpoints() {
    let app = in_memory_app();

    let (status, body) = send(&app, get("/api/v1/diseases")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 13);

    let (status, body) = send(&app, get("/api/v1/diseases/1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["disease"]["disease_name"], "Dengue");

    let (status, body) = send(&app, get("/api/v1/diseases/999")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error_type"], "not_found");
}

#[tokio::test]
async fn test_search_endpoint() {
    let app = in_memory_app();

    let (status, body) = send(&app, get("/api/v1/diseases/search?query=respiratory")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 4);

    let (status, _) = send(&app, get("/api/v1/diseases/search?query=%20")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, get("/api/v1/diseases/search")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_organ_endpoints() {
    let app = in_memory_app();

    let (status, body) = send(&app, get("/api/v1/organs")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["organs"].as_array().unwrap().len(), 7);
    assert_eq!(body["organs"][0]["organ_name"], "Heart");

    let (status, body) = send(&app, get("/api/v1/organs/Digestive/diseases")).await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body["diseases"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["disease_name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Cholera", "Gastroenteritis", "Hepatitis", "Typhoid"]);
}

#[tokio::test]
async fn test_malformed_disease_id_returns_json_error() {
    let app = in_memory_app();

    let (status, body) = send(&app, get("/api/v1/diseases/abc")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error_type"], "bad_request");
    assert!(body["error_id"].as_str().is_some_and(|id| !id.is_empty()));
}

#[tokio::test]
async fn test_malformed_history_limit_returns_json_error() {
    let app = in_memory_app();
    let request = Request::builder()
        .uri("/api/v1/medical-history?limit=x")
        .header("x-user-id", "patient-7")
        .body(Body::empty())
        .unwrap();

    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error_type"], "bad_request");
    assert_eq!(body["error_code"], "VALIDATION_1003");
}
