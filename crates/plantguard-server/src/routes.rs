//! Router assembly

use crate::{handlers, AppState};
use axum::{
    routing::{get, post},
    Router,
};
use std::path::Path;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

pub fn build_router(state: AppState, static_dir: Option<&Path>) -> Router {
    let mut app = Router::new()
        // Health check
        .route("/health", get(handlers::health))
        // REST API routes
        .nest("/api", api_routes());

    // SPA fallback - unknown paths serve the frontend
    if let Some(dir) = static_dir {
        let index = dir.join("index.html");
        app = app.fallback_service(ServeDir::new(dir).fallback(ServeFile::new(index)));
    }

    app.layer(
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    )
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/diseases", get(handlers::diseases::list))
        .route("/diseases/:id", get(handlers::diseases::get))
        .route(
            "/diseases/category/:category",
            get(handlers::diseases::by_category),
        )
        .route(
            "/diseases/:id/treatments",
            get(handlers::diseases::treatments),
        )
        .route(
            "/diseases/:id/prevention",
            get(handlers::diseases::prevention),
        )
        .route("/categories", get(handlers::diseases::categories))
        .route("/outbreaks", get(handlers::outbreaks::list))
        .route("/map/markers", get(handlers::map::markers))
        .route("/forecasts", get(handlers::map::forecasts))
        .route("/news", get(handlers::news::latest))
        .route("/detect", post(handlers::detect::detect))
        .route("/users", post(handlers::users::signup))
        .route("/users/:id", get(handlers::users::get))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use plantguard_core::{PlantStore, SeededRandom};
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app_with(store: MemoryStore) -> Router {
        let store: Arc<dyn PlantStore> = Arc::new(store);
        let state = AppState::new(store, Arc::new(SeededRandom::new(3)), 3);
        build_router(state, None)
    }

    fn app() -> Router {
        app_with(MemoryStore::with_sample_data())
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        send(app, request).await
    }

    async fn post_json(app: Router, uri: &str, body: String) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap();
        send(app, request).await
    }

    #[tokio::test]
    async fn test_list_diseases() {
        let (status, body) = get_json(app(), "/api/diseases").await;
        assert_eq!(status, StatusCode::OK);
        let diseases = body.as_array().unwrap();
        assert_eq!(diseases.len(), 3);
        assert_eq!(diseases[0]["id"], 1);
        assert_eq!(diseases[0]["name"], "Powdery Mildew");
        assert_eq!(diseases[0]["type"], "Fungal");
        assert!(diseases[0]["affectedPlants"].is_array());
    }

    #[tokio::test]
    async fn test_get_disease_by_id() {
        let (status, body) = get_json(app(), "/api/diseases/3").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Late Blight");
        assert_eq!(body["severity"], "Severe");
    }

    #[tokio::test]
    async fn test_invalid_and_missing_disease_id() {
        let (status, body) = get_json(app(), "/api/diseases/abc").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Invalid disease ID");

        let (status, body) = get_json(app(), "/api/diseases/9999").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Disease not found");
    }

    #[tokio::test]
    async fn test_out_of_range_ids_are_absent() {
        let (status, body) = get_json(app(), "/api/diseases/99999999999").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Disease not found");

        let (status, body) = get_json(app(), "/api/diseases/99999999999/treatments").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));

        let (status, body) = get_json(app(), "/api/diseases/99999999999/prevention").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));

        let (status, _) = get_json(app(), "/api/users/99999999999").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_diseases_by_category() {
        let (status, body) = get_json(app(), "/api/diseases/category/All").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 3);

        let (_, body) = get_json(app(), "/api/diseases/category/Tomatoes").await;
        let diseases = body.as_array().unwrap();
        assert_eq!(diseases.len(), 1);
        assert_eq!(diseases[0]["name"], "Late Blight");

        let (status, body) = get_json(app(), "/api/diseases/category/Houseplants").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_treatments_and_prevention() {
        let (status, body) = get_json(app(), "/api/diseases/1/treatments").await;
        assert_eq!(status, StatusCode::OK);
        let treatments = body.as_array().unwrap();
        assert_eq!(treatments.len(), 4);
        assert_eq!(treatments[3]["type"], "Chemical");
        assert_eq!(treatments[0]["diseaseId"], 1);

        let (status, body) = get_json(app(), "/api/diseases/1/prevention").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 6);
        assert_eq!(body[0]["icon"], "wind");

        let (status, body) = get_json(app(), "/api/diseases/999/treatments").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));

        let (status, _) = get_json(app(), "/api/diseases/x/prevention").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_outbreaks() {
        let (status, body) = get_json(app(), "/api/outbreaks").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 3);
        assert_eq!(body[0]["region"], "Northeast Region");
        assert_eq!(body[0]["status"], "active");

        let (_, body) = get_json(app(), "/api/outbreaks?region=Southern%20Region").await;
        let outbreaks = body.as_array().unwrap();
        assert_eq!(outbreaks.len(), 1);
        assert_eq!(outbreaks[0]["diseaseId"], 2);
    }

    #[tokio::test]
    async fn test_map_markers() {
        let (status, body) = get_json(app(), "/api/map/markers").await;
        assert_eq!(status, StatusCode::OK);
        let markers = body.as_array().unwrap();
        assert_eq!(markers.len(), 3);
        assert_eq!(markers[0]["lat"], 42.36);
        assert_eq!(markers[0]["lng"], -71.05);
        assert_eq!(markers[0]["diseaseName"], "Late Blight");
        assert_eq!(markers[0]["reportCount"], 15);
    }

    #[tokio::test]
    async fn test_forecasts() {
        let (status, body) = get_json(app(), "/api/forecasts").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!([
                {"diseaseName": "Powdery Mildew", "riskLevel": "High", "riskPercentage": 85},
                {"diseaseName": "Black Spot", "riskLevel": "Moderate", "riskPercentage": 60},
                {"diseaseName": "Late Blight", "riskLevel": "Low", "riskPercentage": 25},
            ])
        );
    }

    #[tokio::test]
    async fn test_news_limits() {
        let (status, body) = get_json(app(), "/api/news").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 3);

        let (_, body) = get_json(app(), "/api/news?limit=2").await;
        let articles = body.as_array().unwrap();
        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0]["title"], "Breakthrough in Fighting Tomato Blight");
        assert_eq!(
            articles[1]["title"],
            "New Citrus Disease Spreading in Western Regions"
        );
        assert!(articles[0]["publishedDate"]
            .as_str()
            .unwrap()
            .starts_with("2023-06-15"));

        let (status, body) = get_json(app(), "/api/news?limit=").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 3);

        let (status, body) = get_json(app(), "/api/news?limit=lots").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Invalid limit");
    }

    #[tokio::test]
    async fn test_detect() {
        let request = json!({ "image": "data:image/jpeg;base64,/9j/4AAQSkZJRg==" });
        let (status, body) = post_json(app(), "/api/detect", request.to_string()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["detected"], true);
        let confidence = body["confidence"].as_u64().unwrap();
        assert!((70..=99).contains(&confidence));
        let disease_id = body["diseaseId"].as_i64().unwrap();
        assert!((1..=3).contains(&disease_id));
    }

    #[tokio::test]
    async fn test_detect_malformed_body() {
        let (status, body) = post_json(app(), "/api/detect", "{}".to_string()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Invalid image data");

        let (status, _) = post_json(app(), "/api/detect", r#"{"image": 12}"#.to_string()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = post_json(app(), "/api/detect", "not json".to_string()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_detect_empty_catalog_is_internal_error() {
        let request = json!({ "image": "aGVsbG8=" });
        let (status, body) =
            post_json(app_with(MemoryStore::new()), "/api/detect", request.to_string()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "Error processing image");
    }

    #[tokio::test]
    async fn test_signup_and_lookup() {
        let app = app();
        let request = json!({ "username": "fern", "password": "photosynthesis" });

        let (status, body) = post_json(app.clone(), "/api/users", request.to_string()).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body, json!({ "id": 1, "username": "fern" }));

        let (status, body) = post_json(app.clone(), "/api/users", request.to_string()).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert!(body["message"].as_str().unwrap().contains("fern"));

        let (status, body) = get_json(app.clone(), "/api/users/1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["username"], "fern");
        assert!(body.get("password").is_none());

        let (status, _) = get_json(app, "/api/users/2").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_signup_validation() {
        let request = json!({ "username": "  ", "password": "x" });
        let (status, body) = post_json(app(), "/api/users", request.to_string()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Username is required");
    }

    #[tokio::test]
    async fn test_categories_and_health() {
        let (status, body) = get_json(app(), "/api/categories").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0], json!({ "id": "All", "name": "All" }));
        assert_eq!(body.as_array().unwrap().len(), 5);

        let (status, body) = get_json(app(), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }
}
