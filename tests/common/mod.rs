#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use rcoach::config::{
    BookingConfig, BrandConfig, Config, ContactConfig, ObservabilityConfig, ServerConfig,
};
use tower::ServiceExt;

pub const BRAND: &str = "Test Research Coaching";
pub const RECIPIENT: &str = "coach@example.com";

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
        brand: BrandConfig {
            name: BRAND.to_string(),
            tagline: "Guided research support.".to_string(),
            short_blurb: "Design strong studies with confidence.".to_string(),
            accent: "Evidence. Clarity. Impact.".to_string(),
        },
        contact: ContactConfig {
            email: RECIPIENT.to_string(),
            phone: "+264 00 000 0000".to_string(),
            location: "Windhoek, Namibia (Remote worldwide)".to_string(),
        },
        booking: BookingConfig {
            url: "https://calendly.com/test-coach".to_string(),
        },
        observability: ObservabilityConfig::default(),
    }
}

pub fn create_test_app() -> Router {
    rcoach::app(test_config())
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub body: String,
}

pub async fn send(app: Router, request: Request<Body>) -> TestResponse {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.into_body().collect().await.unwrap().to_bytes();

    TestResponse {
        status,
        headers,
        body: String::from_utf8(body.to_vec()).unwrap(),
    }
}

pub async fn get(uri: &str) -> TestResponse {
    send(
        create_test_app(),
        Request::builder().uri(uri).body(Body::empty()).unwrap(),
    )
    .await
}

pub async fn post_form(uri: &str, fields: &[(&str, &str)]) -> TestResponse {
    let body = serde_urlencoded::to_string(fields).unwrap();

    send(
        create_test_app(),
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap(),
    )
    .await
}

/// `raw` HTML-escaped with named and with numeric entities.
pub fn escaped(raw: &str) -> [String; 2] {
    [
        raw.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;"),
        raw.replace('&', "&#38;")
            .replace('<', "&#60;")
            .replace('>', "&#62;"),
    ]
}

/// Whether `body` contains `raw` once HTML-escaped.
pub fn html_contains(body: &str, raw: &str) -> bool {
    escaped(raw).iter().any(|value| body.contains(value.as_str()))
}
