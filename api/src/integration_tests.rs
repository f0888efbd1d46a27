//! Router-level tests for the CarValue API
//!
//! Each test builds the real application state against a temporary
//! directory (model artifact + listing store) and drives it through
//! axum-test.
//!
//! Run with: cargo test integration_tests

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{json, Value};
    use tempfile::TempDir;

    use crate::config::Config;
    use crate::test_utils::SAMPLE_MODEL_JSON;
    use crate::{build_router, AppState};

    struct TestApp {
        server: TestServer,
        // Keeps the model and listing files alive for the test
        _dir: TempDir,
    }

    async fn spawn_app(model_json: Option<&str>) -> TestApp {
        let dir = tempfile::tempdir().unwrap();
        let model_path = dir.path().join("model.json");
        if let Some(json) = model_json {
            std::fs::write(&model_path, json).unwrap();
        }

        let config = Config {
            model_path,
            listings_path: dir.path().join("data").join("listings.json"),
            ..Config::default()
        };
        let state = AppState::build(config).await.unwrap();
        let server = TestServer::new(build_router(state).unwrap()).unwrap();

        TestApp { server, _dir: dir }
    }

    fn scenario_a() -> [(&'static str, &'static str); 5] {
        [
            ("model_year", "2020"),
            ("age", "4"),
            ("fuel_type", "Gasoline"),
            ("transmission", "Automatic"),
            ("clean_title", "1"),
        ]
    }

    #[tokio::test]
    async fn index_lists_endpoints() {
        let app = spawn_app(None).await;

        let response = app.server.get("/").await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let body: Value = response.json();
        assert!(body["message"].is_string());
        assert_eq!(body["endpoints"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn health_reports_missing_model() {
        let app = spawn_app(None).await;

        let body: Value = app.server.get("/health").await.json();

        assert_eq!(body["status"], "ok");
        assert_eq!(body["model_loaded"], false);
    }

    #[tokio::test]
    async fn current_price_uses_fallback_without_model() {
        let app = spawn_app(None).await;

        let response = app.server.get("/price/current").add_query_params(scenario_a()).await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["current_price"], 24_300.0);
        assert_eq!(body["source"], "fallback");
        assert_eq!(body["attributes"]["model_year"], 2020);
        assert_eq!(body["attributes"]["clean_title"], true);
    }

    #[tokio::test]
    async fn current_price_accepts_yes_no_title() {
        let app = spawn_app(None).await;

        let response = app
            .server
            .get("/price/current")
            .add_query_params([
                ("model_year", "2020"),
                ("age", "4"),
                ("fuel_type", "Gasoline"),
                ("transmission", "Automatic"),
                ("clean_title", "No"),
            ])
            .await;

        let body: Value = response.json();
        assert_eq!(body["current_price"], 21_300.0);
    }

    #[tokio::test]
    async fn current_price_uses_loaded_model() {
        let app = spawn_app(Some(SAMPLE_MODEL_JSON)).await;

        let body: Value = app
            .server
            .get("/price/current")
            .add_query_params(scenario_a())
            .await
            .json();

        assert_eq!(body["current_price"], 19_000.0);
        assert_eq!(body["source"], "model");
    }

    #[tokio::test]
    async fn broken_model_still_serves_fallback() {
        let app = spawn_app(Some("{ definitely not a model")).await;

        let body: Value = app
            .server
            .get("/price/current")
            .add_query_params(scenario_a())
            .await
            .json();

        assert_eq!(body["current_price"], 24_300.0);
        assert_eq!(body["source"], "fallback");
    }

    #[tokio::test]
    async fn current_price_rejects_missing_params() {
        let app = spawn_app(None).await;

        let response = app
            .server
            .get("/price/current")
            .add_query_param("model_year", "2020")
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["error"], "Missing required fields");
        assert_eq!(body["required"].as_array().unwrap().len(), 5);
        assert!(body["details"].as_str().unwrap().contains("clean_title"));
    }

    #[tokio::test]
    async fn current_price_rejects_bad_numbers() {
        let app = spawn_app(None).await;

        let response = app
            .server
            .get("/price/current")
            .add_query_params([
                ("model_year", "abc"),
                ("age", "4"),
                ("fuel_type", "Gasoline"),
                ("transmission", "Automatic"),
                ("clean_title", "1"),
            ])
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["error"], "Conversion error");
    }

    #[tokio::test]
    async fn future_price_defaults_to_twelve_months() {
        let app = spawn_app(None).await;

        let response = app.server.get("/price/future").add_query_params(scenario_a()).await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["months"], 12);
        assert_eq!(body["yearly_rate"], 0.1);
        assert_eq!(body["current_price"], 24_300.0);
        assert_eq!(body["future_price"], 21_987.55);
    }

    #[tokio::test]
    async fn future_price_with_zero_months_is_current_price() {
        let app = spawn_app(None).await;

        let body: Value = app
            .server
            .get("/price/future")
            .add_query_params(scenario_a())
            .add_query_param("months", "0")
            .await
            .json();

        assert_eq!(body["future_price"], body["current_price"]);
    }

    #[tokio::test]
    async fn future_price_accepts_rate_override() {
        let app = spawn_app(None).await;

        let body: Value = app
            .server
            .get("/price/future")
            .add_query_params(scenario_a())
            .add_query_param("months", "24")
            .add_query_param("yearly_rate", "0.2")
            .await
            .json();

        let expected = (24_300.0 * (-0.4f64).exp() * 100.0).round() / 100.0;
        assert_eq!(body["months"], 24);
        assert_eq!(body["future_price"].as_f64().unwrap(), expected);
    }

    #[tokio::test]
    async fn current_price_survives_extreme_model_year() {
        let app = spawn_app(None).await;

        let response = app
            .server
            .get("/price/current")
            .add_query_params([
                ("model_year", "-2147483648"),
                ("age", "0"),
                ("fuel_type", "Gasoline"),
                ("transmission", "Manual"),
                ("clean_title", "1"),
            ])
            .await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["current_price"], 5_000.0);
        assert_eq!(body["source"], "fallback");
    }

    #[tokio::test]
    async fn future_price_rejects_overflowing_projection() {
        let app = spawn_app(None).await;

        let response = app
            .server
            .get("/price/future")
            .add_query_params(scenario_a())
            .add_query_param("months", "100000")
            .add_query_param("yearly_rate", "-1000")
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["error"], "Validation error");
        assert!(body["details"].as_str().unwrap().contains("yearly_rate"));
    }

    #[tokio::test]
    async fn future_price_rejects_bad_months() {
        let app = spawn_app(None).await;

        let response = app
            .server
            .get("/price/future")
            .add_query_params(scenario_a())
            .add_query_param("months", "soon")
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn publish_listing_returns_recommendation() {
        let app = spawn_app(None).await;

        let response = app
            .server
            .post("/listings")
            .json(&json!({
                "model_year": 2020,
                "age": 4,
                "fuel_type": "Gasoline",
                "transmission": "Automatic",
                "clean_title": "Yes",
                "price": 23000
            }))
            .await;

        assert_eq!(response.status_code(), StatusCode::CREATED);
        let body: Value = response.json();
        assert_eq!(body["listing_id"], 1);
        assert_eq!(body["asking_price"], 23_000.0);
        assert_eq!(body["recommended_price"], 24_300.0);
        assert_eq!(body["listing"]["fuel_type"], "Gasoline");
    }

    #[tokio::test]
    async fn published_listings_are_listed() {
        let app = spawn_app(None).await;
        for price in [23_000, 25_500] {
            app.server
                .post("/listings")
                .json(&json!({
                    "model_year": "2019",
                    "age": "5",
                    "fuel_type": "Electric",
                    "transmission": "Manual",
                    "clean_title": 1,
                    "precio": price
                }))
                .await;
        }

        let body: Value = app.server.get("/listings").await.json();

        assert_eq!(body["total"], 2);
        assert_eq!(body["listings"][1]["id"], 2);
        assert_eq!(body["listings"][1]["asking_price"], 25_500.0);
    }

    #[tokio::test]
    async fn publish_listing_rejects_missing_price() {
        let app = spawn_app(None).await;

        let response = app
            .server
            .post("/listings")
            .json(&json!({
                "model_year": 2020,
                "age": 4,
                "fuel_type": "Gasoline",
                "transmission": "Automatic",
                "clean_title": 1
            }))
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["details"], "Missing required fields: price");
        assert_eq!(body["required"].as_array().unwrap().len(), 6);
    }

    #[tokio::test]
    async fn publish_listing_rejects_non_positive_price() {
        let app = spawn_app(None).await;

        let response = app
            .server
            .post("/listings")
            .json(&json!({
                "model_year": 2020,
                "age": 4,
                "fuel_type": "Gasoline",
                "transmission": "Automatic",
                "clean_title": 1,
                "price": -10
            }))
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        let listings: Value = app.server.get("/listings").await.json();
        assert_eq!(listings["total"], 0);
    }

    #[tokio::test]
    async fn publish_listing_rejects_malformed_json() {
        let app = spawn_app(None).await;

        let response = app
            .server
            .post("/listings")
            .content_type("application/json")
            .text("{ not json")
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["error"], "Bad request");
    }

    #[tokio::test]
    async fn metrics_count_requests_and_predictions() {
        let app = spawn_app(None).await;
        app.server.get("/price/current").add_query_params(scenario_a()).await;
        app.server.get("/price/future").add_query_params(scenario_a()).await;

        let body: Value = app.server.get("/metrics").await.json();

        assert_eq!(body["requests"], 3);
        assert_eq!(body["predictions"], 2);
        assert_eq!(body["fallback_predictions"], 2);
        assert_eq!(body["model_loaded"], false);
        assert!(body.get("model_name").is_none());
    }

    #[tokio::test]
    async fn health_responds_via_tower_oneshot() {
        use axum::body::Body;
        use axum::http::Request;
        use tower::ServiceExt;

        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            model_path: dir.path().join("model.json"),
            listings_path: dir.path().join("listings.json"),
            ..Config::default()
        };
        let router = build_router(AppState::build(config).await.unwrap()).unwrap();

        let response = router
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
