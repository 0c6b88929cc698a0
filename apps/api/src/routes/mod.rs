pub mod health;
pub mod themes;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::export::handlers as export;
use crate::portfolio::handlers as portfolio;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);

    Router::new()
        .route("/health", get(health::health_handler))
        // Portfolio API
        .route(
            "/api/v1/portfolios/default",
            get(portfolio::handle_default_portfolio),
        )
        .route(
            "/api/v1/portfolios/classify",
            post(portfolio::handle_classify),
        )
        .route(
            "/api/v1/portfolios/generate",
            post(portfolio::handle_generate),
        )
        // Theme registry
        .route("/api/v1/themes", get(themes::handle_list_themes))
        .route("/api/v1/themes/:id", get(themes::handle_get_theme))
        // Export API
        .route("/api/v1/exports/html", post(export::handle_export_html))
        .route(
            "/api/v1/exports/component",
            post(export::handle_export_component),
        )
        .route("/api/v1/exports/pdf", post(export::handle_export_pdf))
        // AI assistant
        .route("/api/v1/ai/refine", post(portfolio::handle_refine))
        .route(
            "/api/v1/ai/project-description",
            post(portfolio::handle_project_description),
        )
        .route(
            "/api/v1/ai/suggest-skills",
            post(portfolio::handle_suggest_skills),
        )
        .route("/api/v1/ai/quota", get(portfolio::handle_quota))
        .layer(body_limit)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::llm_client::{fake::ScriptedBackend, LlmBackend};

    const PROMPT: &str = "My name is Ada Lovelace. I am a software engineer in London \
        with 7 years of experience building data pipelines in Rust and Python.";

    fn config() -> Config {
        Config {
            simulate_latency: false,
            ..Config::default()
        }
    }

    fn offline_app() -> Router {
        build_router(AppState::new(config(), None))
    }

    fn app_with_llm(backend: ScriptedBackend, config: Config) -> Router {
        let llm: Arc<dyn LlmBackend> = Arc::new(backend);
        build_router(AppState::new(config, Some(llm)))
    }

    async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> Response {
        let mut request = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                request = request.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };
        app.oneshot(request.body(body).unwrap()).await.unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn exportable_record() -> Value {
        json!({
            "personalInfo": {
                "fullName": "Ada  Lovelace",
                "title": "Engineer",
                "email": "ada@example.com"
            },
            "skills": [{"name": "Rust", "category": "Technical", "level": "Expert"}],
            "theme": "creative"
        })
    }

    #[tokio::test]
    async fn test_health() {
        let response = send(offline_app(), Method::GET, "/health", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["service"], "folio-api");
    }

    #[tokio::test]
    async fn test_default_portfolio_is_blank_minimal() {
        let response = send(offline_app(), Method::GET, "/api/v1/portfolios/default", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["personalInfo"]["fullName"], "");
        assert_eq!(body["theme"], "minimal");
        assert_eq!(body["experience"], json!([]));
    }

    #[tokio::test]
    async fn test_classify_extracts_fields() {
        let response = send(
            offline_app(),
            Method::POST,
            "/api/v1/portfolios/classify",
            Some(json!({ "prompt": PROMPT })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["extractedName"], "Ada Lovelace");
        assert_eq!(body["experienceYears"], "7");
    }

    #[tokio::test]
    async fn test_generate_with_mock_backend() {
        let response = send(
            offline_app(),
            Method::POST,
            "/api/v1/portfolios/generate",
            Some(json!({ "prompt": PROMPT })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["backend"], "mock");
        assert_eq!(body["stages"].as_array().unwrap().len(), 4);
        assert_eq!(body["portfolio"]["personalInfo"]["fullName"], "Ada Lovelace");
        assert_eq!(body["portfolio"]["theme"], "modern");
    }

    #[tokio::test]
    async fn test_generate_rejects_short_prompt() {
        let response = send(
            offline_app(),
            Method::POST,
            "/api/v1/portfolios/generate",
            Some(json!({ "prompt": "I code." })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_remote_generation_without_llm_is_unavailable() {
        let response = send(
            offline_app(),
            Method::POST,
            "/api/v1/portfolios/generate",
            Some(json!({ "prompt": PROMPT, "backend": "remote" })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_generate_with_remote_backend() {
        let reply = json!({
            "personalInfo": {"fullName": "Ada Lovelace", "title": "Engineer"},
            "experience": [{"position": "Lead", "company": "Engines", "current": true, "endDate": "2020-01"}],
            "skills": null
        })
        .to_string();
        let app = app_with_llm(ScriptedBackend::replying(reply), config());

        let response = send(
            app,
            Method::POST,
            "/api/v1/portfolios/generate",
            Some(json!({ "prompt": PROMPT, "backend": "remote" })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["backend"], "remote");
        assert_eq!(body["portfolio"]["theme"], "minimal");
        assert_eq!(body["portfolio"]["skills"], json!([]));
        assert_eq!(body["portfolio"]["experience"][0]["endDate"], "");
        assert_eq!(
            body["stages"],
            json!([
                "Generating your portfolio...",
                "Analyzing your description...",
                "Finalizing..."
            ])
        );
    }

    #[tokio::test]
    async fn test_themes_listing_and_lookup() {
        let response = send(offline_app(), Method::GET, "/api/v1/themes", None).await;
        assert_eq!(json_body(response).await.as_array().unwrap().len(), 3);

        let response = send(offline_app(), Method::GET, "/api/v1/themes/modern", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["name"], "Modern");

        let response = send(offline_app(), Method::GET, "/api/v1/themes/sunset", None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_export_html_returns_attachment() {
        let response = send(
            offline_app(),
            Method::POST,
            "/api/v1/exports/html",
            Some(json!({ "portfolio": exportable_record() })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/html");
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"ada-lovelace-portfolio.html\""
        );
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains("<h2>Skills</h2>"));
        assert!(!html.contains("<h2>Experience</h2>"));
    }

    #[tokio::test]
    async fn test_export_requires_personal_fields() {
        let response = send(
            offline_app(),
            Method::POST,
            "/api/v1/exports/component",
            Some(json!({ "portfolio": {"personalInfo": {"fullName": "Ada"}} })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(
            body["error"]["message"],
            "Please complete the required fields before exporting: title, email"
        );
    }

    #[tokio::test]
    async fn test_export_component_uses_fixed_filename() {
        let response = send(
            offline_app(),
            Method::POST,
            "/api/v1/exports/component",
            Some(json!({ "portfolio": exportable_record(), "theme": "modern" })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/javascript");
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"Portfolio.jsx\""
        );
    }

    fn multipart(fields: &[(&str, &str)]) -> Request<Body> {
        let mut body = String::new();
        for (name, value) in fields {
            body.push_str(&format!(
                "--BOUNDARY\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            ));
        }
        body.push_str("--BOUNDARY--\r\n");
        Request::builder()
            .method(Method::POST)
            .uri("/api/v1/exports/pdf")
            .header(header::CONTENT_TYPE, "multipart/form-data; boundary=BOUNDARY")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_export_pdf_without_snapshot_fails_generically() {
        let response = offline_app()
            .oneshot(multipart(&[("fullName", "Ada Lovelace")]))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = json_body(response).await;
        assert_eq!(body["error"]["code"], "EXPORT_ERROR");
        assert_eq!(
            body["error"]["message"],
            "Failed to generate PDF. Please try again."
        );
    }

    #[tokio::test]
    async fn test_export_pdf_with_undecodable_snapshot_fails_generically() {
        let response = offline_app()
            .oneshot(multipart(&[("fullName", "Ada"), ("snapshot", "not a png")]))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            json_body(response).await["error"]["message"],
            "Failed to generate PDF. Please try again."
        );
    }

    #[tokio::test]
    async fn test_export_pdf_requires_name() {
        let response = offline_app()
            .oneshot(multipart(&[("snapshot", "ignored")]))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_ai_routes_unavailable_without_key() {
        let response = send(
            offline_app(),
            Method::POST,
            "/api/v1/ai/refine",
            Some(json!({ "text": "I build reliable backend systems." })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(json_body(response).await["error"]["code"], "UNAVAILABLE");
    }

    #[tokio::test]
    async fn test_refine_and_quota_share_the_limiter() {
        let config = Config {
            ai_rate_limit_max: 1,
            ai_rate_limit_window: Duration::from_secs(60),
            ..config()
        };
        let app = app_with_llm(ScriptedBackend::replying("A sharper bio."), config);
        let body = json!({ "text": "I build reliable backend systems.", "kind": "bio" });

        let response = send(app.clone(), Method::POST, "/api/v1/ai/refine", Some(body.clone())).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["text"], "A sharper bio.");

        let response = send(app.clone(), Method::GET, "/api/v1/ai/quota", None).await;
        assert_eq!(json_body(response).await["remaining"], 0);

        let response = send(app, Method::POST, "/api/v1/ai/refine", Some(body)).await;
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(json_body(response).await["error"]["code"], "RATE_LIMITED");
    }

    #[tokio::test(start_paused = true)]
    async fn test_parallel_refines_share_one_ceiling() {
        let config = Config {
            ai_rate_limit_max: 2,
            ..config()
        };
        let backend = ScriptedBackend::replying("Sharper.").with_delay(Duration::from_secs(1));
        let app = app_with_llm(backend, config);
        let body = json!({ "text": "I build reliable backend systems." });

        let tasks: Vec<_> = (0..6)
            .map(|_| {
                let app = app.clone();
                let body = body.clone();
                tokio::spawn(async move {
                    send(app, Method::POST, "/api/v1/ai/refine", Some(body))
                        .await
                        .status()
                })
            })
            .collect();

        let mut statuses = Vec::new();
        for task in tasks {
            statuses.push(task.await.unwrap());
        }
        let ok = statuses.iter().filter(|s| **s == StatusCode::OK).count();
        let limited = statuses
            .iter()
            .filter(|s| **s == StatusCode::TOO_MANY_REQUESTS)
            .count();
        assert_eq!((ok, limited), (2, 4));
    }

    #[tokio::test]
    async fn test_suggest_skills_merges_without_duplicates() {
        let app = app_with_llm(ScriptedBackend::replying("Rust, Kubernetes, rust, SQL"), config());
        let response = send(
            app,
            Method::POST,
            "/api/v1/ai/suggest-skills",
            Some(json!({
                "experience": [{"position": "Engineer", "company": "Acme"}],
                "skills": [{"name": "Rust"}]
            })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        let names: Vec<&str> = body["skills"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["Rust", "Kubernetes", "SQL"]);
        assert_eq!(body["added"], 2);
    }
}
