//! Router level tests covering route wiring, the admin token guard and CORS.

use axum::{
    body::Body,
    http::{header, HeaderValue, Request, StatusCode},
    Router,
};
use billing_admin::server::{
    config::{Config, CorsOrigins},
    model::app::AppState,
    startup::build_router,
};
use billing_test_utils::prelude::*;
use tower::ServiceExt;

use crate::util::body_bytes;

fn config(cors_allowed_origins: CorsOrigins, admin_api_token: Option<&str>) -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        bind_address: "127.0.0.1:0".parse().unwrap(),
        cors_allowed_origins,
        admin_api_token: admin_api_token.map(str::to_string),
    }
}

async fn app(cors_allowed_origins: CorsOrigins, admin_api_token: Option<&str>) -> Result<(TestContext, Router), TestError> {
    let test = TestBuilder::new().with_billing_tables().build().await?;
    let router = build_router(
        &config(cors_allowed_origins, admin_api_token),
        test.to_app_state::<AppState>(),
    );

    Ok((test, router))
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

/// Expect admin routes to be reachable without a token when none is configured
#[tokio::test]
async fn open_without_configured_token() -> Result<(), TestError> {
    let (_test, router) = app(CorsOrigins::Any, None).await?;

    let resp = router.oneshot(get("/api/admin/houses")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 401 without a matching bearer token and 200 with it
#[tokio::test]
async fn requires_configured_token() -> Result<(), TestError> {
    let (_test, router) = app(CorsOrigins::Any, Some("secret")).await?;

    let resp = router.clone().oneshot(get("/api/admin/houses")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let wrong = Request::builder()
        .uri("/api/admin/houses")
        .header(header::AUTHORIZATION, "Bearer nope")
        .body(Body::empty())
        .unwrap();
    let resp = router.clone().oneshot(wrong).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let right = Request::builder()
        .uri("/api/admin/houses")
        .header(header::AUTHORIZATION, "Bearer secret")
        .body(Body::empty())
        .unwrap();
    let resp = router.oneshot(right).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 401 for a token of the right length that differs in a single byte
#[tokio::test]
async fn rejects_same_length_wrong_token() -> Result<(), TestError> {
    let (_test, router) = app(CorsOrigins::Any, Some("secret")).await?;

    let request = Request::builder()
        .uri("/api/admin/houses")
        .header(header::AUTHORIZATION, "Bearer secreT")
        .body(Body::empty())
        .unwrap();
    let resp = router.oneshot(request).await.unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect the OpenAPI document to stay public when a token is configured
#[tokio::test]
async fn docs_do_not_require_token() -> Result<(), TestError> {
    let (_test, router) = app(CorsOrigins::Any, Some("secret")).await?;

    let resp = router
        .oneshot(get("/api/docs/openapi.json"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect the listed origin to be allowed and any other origin to receive no CORS header
#[tokio::test]
async fn restricts_cors_to_listed_origins() -> Result<(), TestError> {
    let allowed = HeaderValue::from_static("https://admin.example.com");
    let (_test, router) = app(CorsOrigins::List(vec![allowed.clone()]), None).await?;

    let request = Request::builder()
        .uri("/api/admin/bills")
        .header(header::ORIGIN, allowed.clone())
        .body(Body::empty())
        .unwrap();
    let resp = router.clone().oneshot(request).await.unwrap();
    assert_eq!(
        resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN),
        Some(&allowed)
    );

    let request = Request::builder()
        .uri("/api/admin/bills")
        .header(header::ORIGIN, "https://evil.example.com")
        .body(Body::empty())
        .unwrap();
    let resp = router.oneshot(request).await.unwrap();
    assert!(resp
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());

    Ok(())
}

/// Expect static path segments to win over the ID routes they share a prefix with
#[tokio::test]
async fn routes_static_segments_before_ids() -> Result<(), TestError> {
    let (test, router) = app(CorsOrigins::Any, None).await?;
    let house = test.house().insert_house("M-001", None).await?;
    test.bill()
        .insert_bill(house.id, BillStatus::Unpaid, factory::date(2025, 1, 5))
        .await?;

    let resp = router
        .clone()
        .oneshot(get("/api/admin/bills/date-range?startDate=2025-01-01&endDate=2025-01-31"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = router
        .clone()
        .oneshot(get("/api/admin/houses/meter-number/UNKNOWN"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(body_bytes(resp).await.is_empty());

    let resp = router
        .oneshot(get("/api/admin/owner/Test%20Owner"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect malformed parameters to be rejected with 400
#[tokio::test]
async fn rejects_malformed_parameters() -> Result<(), TestError> {
    let (_test, router) = app(CorsOrigins::Any, None).await?;

    for uri in [
        "/api/admin/bills/status/BOGUS",
        "/api/admin/bills/date-range?startDate=2025-01-01",
        "/api/admin/bills/due-date/2025-02-30",
        "/api/admin/houses/not-a-number",
    ] {
        let resp = router.clone().oneshot(get(uri)).await.unwrap();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "for {}", uri);
    }

    Ok(())
}
