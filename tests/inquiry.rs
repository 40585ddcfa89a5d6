use axum::http::StatusCode;
use rcoach_inquiry::{InquiryDraft, ServiceCategory, compose_mailto};

mod common;

#[tokio::test]
async fn test_post_inquiry_redirects_to_mail_client() {
    let response = common::post_form(
        "/inquiry",
        &[
            ("name", "Jane Doe"),
            ("email", "jane@example.com"),
            ("service", "quant"),
            ("message", "Need help with thesis"),
        ],
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);

    let draft = InquiryDraft::new(
        "Jane Doe",
        "jane@example.com",
        Some(ServiceCategory::QuantitativeAnalysis),
        "Need help with thesis",
    );
    let href = compose_mailto(&draft, common::RECIPIENT, common::BRAND);

    assert!(
        href.starts_with(
            "mailto:coach@example.com?subject=Inquiry%3A%20Quantitative%20Data%20Analysis"
        )
    );
    assert!(common::escaped(&href).iter().any(|href| {
        response
            .body
            .contains(&format!("<meta http-equiv=\"refresh\" content=\"0;url={href}\">"))
    }));
    assert!(
        common::escaped(&href)
            .iter()
            .any(|href| response.body.contains(&format!("<a href=\"{href}\">")))
    );
    assert!(
        response
            .body
            .contains("If nothing happens, email <strong>coach@example.com</strong> directly.")
    );
    assert!(
        response
            .body
            .contains("If your email client didn’t open, copy this address: <strong>coach@example.com</strong>")
    );
}

#[tokio::test]
async fn test_post_inquiry_keeps_form_values() {
    let response = common::post_form(
        "/inquiry",
        &[
            ("name", "Sam <Lee>"),
            ("email", "sam@example.com"),
            ("service", "qual"),
            ("message", "Interviews & codes"),
        ],
    )
    .await;

    assert!(common::html_contains(&response.body, "Sam <Lee>"));
    assert!(response.body.contains("value=\"sam@example.com\""));
    assert!(response.body.contains("<option value=\"qual\" selected>"));
    assert!(common::html_contains(&response.body, "Interviews & codes"));
}

#[tokio::test]
async fn test_post_inquiry_with_unknown_service_uses_fallback() {
    let response = common::post_form(
        "/inquiry",
        &[("name", ""), ("email", ""), ("service", "mixed"), ("message", "")],
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("subject=Inquiry%3A%20Research%20Support%20%7C%20"));
}

#[tokio::test]
async fn test_mailto_endpoint_returns_composed_uri() {
    let response = common::get(
        "/inquiry/mailto?name=Ann&email=ann%40example.com&service=full&message=Line%201%0ALine%202",
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);

    let json: serde_json::Value = serde_json::from_str(&response.body).unwrap();
    let draft = InquiryDraft::new(
        "Ann",
        "ann@example.com",
        Some(ServiceCategory::FullProjectSupport),
        "Line 1\nLine 2",
    );

    assert_eq!(
        json["href"],
        compose_mailto(&draft, common::RECIPIENT, common::BRAND)
    );
    assert_eq!(
        json["subject"],
        format!("Inquiry: Full Project Support | {}", common::BRAND)
    );
    assert_eq!(
        json["body"],
        "Name: Ann\nEmail: ann@example.com\nService: Full Project Support\n\nMessage:\nLine 1\nLine 2"
    );
}

#[tokio::test]
async fn test_mailto_endpoint_without_parameters() {
    let response = common::get("/inquiry/mailto").await;
    let json: serde_json::Value = serde_json::from_str(&response.body).unwrap();

    assert_eq!(
        json["body"],
        "Name: \nEmail: \nService: Research Support\n\nMessage:\n"
    );
}
