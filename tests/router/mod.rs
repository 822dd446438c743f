//! Requests sent through the full router, with session and multipart handling in place.

use std::io::Cursor;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use hireboard::{
    model::company::{CompanyDto, ImageDto},
    server::router::routes,
};
use hireboard_test_utils::prelude::*;
use image::{ImageFormat, Rgb, RgbImage};
use tower::ServiceExt;
use tower_sessions::{MemoryStore, SessionManagerLayer};

use crate::util::{json_body, TestContextExt, TEST_APP_URL, TEST_PASSWORD};

const BOUNDARY: &str = "hireboard-test-boundary";

fn app(test: &TestContext) -> Router {
    let state = test.into_app_state();

    routes(&state.storage)
        .with_state(state)
        .layer(SessionManagerLayer::new(MemoryStore::default()))
}

fn png() -> Vec<u8> {
    let mut buf = Vec::new();
    RgbImage::from_pixel(400, 400, Rgb([240, 120, 0]))
        .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .unwrap();

    buf
}

fn multipart_body(field: &str, content_type: &str, bytes: &[u8]) -> Vec<u8> {
    let mut body = format!(
        "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{field}\"; filename=\"upload\"\r\n\
         Content-Type: {content_type}\r\n\r\n"
    )
    .into_bytes();
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    body
}

/// Cookie header carrying every cookie set on `response`
fn cookies<B>(response: &axum::http::Response<B>) -> String {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .filter_map(|value| value.split(';').next())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Registers a company over HTTP and returns its session cookie
async fn register_company(app: &Router) -> String {
    let body = serde_json::json!({
        "name": "Acme",
        "email": "jobs@acme.test",
        "password": TEST_PASSWORD,
        "password_confirmation": TEST_PASSWORD,
    });

    let response = app
        .clone()
        .oneshot(
            Request::post("/api/company/register")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    cookies(&response)
}

/// Expect the public tier list to be served
#[tokio::test]
async fn serves_tiers() -> Result<(), TestError> {
    let test = TestBuilder::new().with_listing_tables().build().await?;

    let response = app(&test)
        .oneshot(Request::get("/api/job-tiers").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    Ok(())
}

/// Expect a JSON 404 for a listing that does not exist
#[tokio::test]
async fn unknown_job_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_listing_tables().build().await?;

    let response = app(&test)
        .oneshot(Request::get("/api/jobs/999").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = json_body(response).await;
    assert!(body["error"].is_string());

    Ok(())
}

/// Expect the session cookie from registration to authenticate later requests
#[tokio::test]
async fn session_cookie_authenticates_company() -> Result<(), TestError> {
    let test = TestBuilder::new().with_auth_tables().build().await?;
    let app = app(&test);
    let cookie = register_company(&app).await;

    let response = app
        .clone()
        .oneshot(
            Request::get("/api/company/me")
                .header(header::COOKIE, cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let company: CompanyDto = json_body(response).await;
    assert_eq!(company.email, "jobs@acme.test");
    assert!(!company.email_verified);

    Ok(())
}

/// Expect an uploaded logo to be stored and served from the storage disk
#[tokio::test]
async fn uploads_and_serves_logo() -> Result<(), TestError> {
    let test = TestBuilder::new().with_auth_tables().build().await?;
    let app = app(&test);
    let cookie = register_company(&app).await;

    let response = app
        .clone()
        .oneshot(
            Request::post("/api/company/logo")
                .header(header::COOKIE, cookie)
                .header(
                    header::CONTENT_TYPE,
                    format!("multipart/form-data; boundary={BOUNDARY}"),
                )
                .body(Body::from(multipart_body("logo", "image/png", &png())))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let logo: ImageDto = json_body(response).await;
    assert!(logo.url.starts_with(&format!("{TEST_APP_URL}/storage/")));
    assert!(test.storage_dir.path().join(&logo.path).exists());

    let response = app
        .oneshot(
            Request::get(format!("/storage/{}", logo.path))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    Ok(())
}

/// Expect a text file posted as a logo to fail validation
#[tokio::test]
async fn rejects_non_image_logo() -> Result<(), TestError> {
    let test = TestBuilder::new().with_auth_tables().build().await?;
    let app = app(&test);
    let cookie = register_company(&app).await;

    let response = app
        .oneshot(
            Request::post("/api/company/logo")
                .header(header::COOKIE, cookie)
                .header(
                    header::CONTENT_TYPE,
                    format!("multipart/form-data; boundary={BOUNDARY}"),
                )
                .body(Body::from(multipart_body(
                    "logo",
                    "text/plain",
                    b"definitely not an image",
                )))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    Ok(())
}
