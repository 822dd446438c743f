//! Helpers for building application state and inspecting responses in integration tests

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use hireboard::server::{
    error::Error,
    mail::Mailer,
    model::{app::AppState, auth::Guard, session::principal::SessionPrincipalId},
    service::auth::{password::PasswordHasher, throttle::LoginThrottle},
    storage::Storage,
};
use hireboard_test_utils::TestContext;
use serde::de::DeserializeOwned;

pub static TEST_APP_URL: &str = "http://localhost:8080";
pub static TEST_PASSWORD: &str = "correct horse battery";

/// Low iteration count, hashing at production cost would dominate test time
const TEST_HASH_ITERATIONS: u32 = 1_000;

/// Extension trait for TestContext to create AppState with an outbox mailer
pub trait TestContextExt {
    fn into_app_state(&self) -> AppState;
}

impl TestContextExt for TestContext {
    fn into_app_state(&self) -> AppState {
        AppState {
            db: self.db.clone(),
            storage: Storage::new(self.storage_dir.path(), TEST_APP_URL),
            mailer: Mailer::outbox("Hireboard <no-reply@localhost>").unwrap(),
            hasher: PasswordHasher::new(TEST_HASH_ITERATIONS),
            throttle: LoginThrottle::new(5, 60),
            app_url: TEST_APP_URL.to_string(),
        }
    }
}

/// Store `principal_id` as logged in on `guard` in the test session
pub async fn log_in(test: &TestContext, guard: Guard, principal_id: i32) {
    SessionPrincipalId::insert(&test.session, guard, principal_id)
        .await
        .unwrap();
}

/// Convert a handler result into its response, error or not
pub fn respond<T: IntoResponse>(result: Result<T, Error>) -> Response {
    result.into_response()
}

pub fn status<T: IntoResponse>(result: Result<T, Error>) -> StatusCode {
    respond(result).status()
}

/// Read a JSON response body
pub async fn json_body<T: DeserializeOwned>(response: Response) -> T {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    serde_json::from_slice(&bytes).unwrap()
}
