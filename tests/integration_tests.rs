use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use qrstudio::core::models::StyleOptions;
use qrstudio::web::routes::create_routes;
use qrstudio::web::server::ServerState;
use serde_json::{json, Value};
use tower::util::ServiceExt;
use tower_http::cors::{Any, CorsLayer};

// Helper function to create test app
fn create_test_app() -> Router {
    // Add CORS layer like in the actual server
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    create_routes(ServerState {
        defaults: StyleOptions::default(),
    })
    .layer(cors)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_app();

    let request = Request::builder()
        .uri("/api/health")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let health_data = body_json(response).await;
    assert_eq!(health_data["status"], "healthy");
    assert_eq!(health_data["service"], "qrstudio");
}

#[tokio::test]
async fn test_presets_endpoint() {
    let app = create_test_app();

    let request = Request::builder()
        .uri("/api/presets")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let presets = body_json(response).await;
    for name in ["default", "minimal", "colorful", "dark"] {
        assert!(presets.get(name).is_some(), "missing preset {}", name);
    }
    assert_eq!(presets["colorful"]["gradient"], "linear");
}

#[tokio::test]
async fn test_render_text_payload() {
    let app = create_test_app();

    let request = post_json(
        "/api/render",
        json!({ "payload": { "type": "text", "text": "https://example.com" } }),
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let svg = body["svg"].as_str().unwrap();
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains(r##"fill="#000000""##));

    // Default style: quiet zone of 4 modules on each side
    let modules = body["modules"].as_u64().unwrap();
    assert_eq!(body["canvas"].as_u64().unwrap(), modules + 8);
}

#[tokio::test]
async fn test_render_wifi_payload_with_style() {
    let app = create_test_app();

    let request = post_json(
        "/api/render",
        json!({
            "payload": {
                "type": "wifi",
                "ssid": "Office",
                "password": "secret1",
                "security": "WPA",
                "hidden": true
            },
            "style": {
                "pixel_size": 256,
                "foreground": "#3b82f6",
                "module_shape": "circle",
                "border_width": 2
            }
        }),
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let svg = body["svg"].as_str().unwrap();
    assert!(svg.contains(r#"width="256""#));
    assert!(svg.contains("<circle"));
    assert!(svg.contains("#3b82f6"));

    let modules = body["modules"].as_u64().unwrap();
    assert_eq!(body["canvas"].as_u64().unwrap(), modules + 4);
}

#[tokio::test]
async fn test_render_contact_payload() {
    let app = create_test_app();

    let request = post_json(
        "/api/render",
        json!({
            "payload": {
                "type": "contact",
                "name": "Jane Doe",
                "email": "jane@x.com"
            }
        }),
    );
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_render_rejects_empty_payload() {
    let app = create_test_app();

    let request = post_json(
        "/api/render",
        json!({ "payload": { "type": "text", "text": "   " } }),
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(body["error"], "nothing to encode");
}

#[tokio::test]
async fn test_render_rejects_empty_contact() {
    let app = create_test_app();

    // All identifying fields empty: generation is suppressed
    let request = post_json(
        "/api/render",
        json!({ "payload": { "type": "contact", "company": "Acme" } }),
    );
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_render_capacity_error_is_recoverable() {
    let app = create_test_app();

    let request = post_json(
        "/api/render",
        json!({
            "payload": { "type": "text", "text": "x".repeat(3000) },
            "style": { "error_correction": "HIGH" }
        }),
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("HIGH"));
}

#[tokio::test]
async fn test_render_png_endpoint() {
    let app = create_test_app();

    let request = post_json(
        "/api/render/png",
        json!({
            "payload": { "type": "text", "text": "png please" },
            "style": { "pixel_size": 128 }
        }),
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "image/png"
    );

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&body[..8], b"\x89PNG\r\n\x1a\n");

    let decoded = image::load_from_memory(&body).unwrap();
    assert_eq!(decoded.width(), 128);
    assert_eq!(decoded.height(), 128);
}

#[tokio::test]
async fn test_render_png_rejects_bad_color() {
    let app = create_test_app();

    let request = post_json(
        "/api/render/png",
        json!({
            "payload": { "type": "text", "text": "hello" },
            "style": { "background": "blue" }
        }),
    );
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_unknown_api_route_returns_json_404() {
    let app = create_test_app();

    let request = Request::builder()
        .uri("/api/unknown")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"], "API endpoint not found");
}

#[tokio::test]
async fn test_index_page_served() {
    let app = create_test_app();

    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let html = String::from_utf8(body.to_vec()).unwrap();
    assert!(html.contains("<title>QR Studio</title>"));
    assert!(html.contains("/api/render"));
}
