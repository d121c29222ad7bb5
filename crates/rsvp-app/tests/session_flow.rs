//! Login, logout and route gating.

mod support;

use assert_matches::assert_matches;
use serde_json::json;

use rsvp_app::errors::{GENERIC_SERVER_ERROR, INVALID_CREDENTIALS_ERROR};
use rsvp_app::routes::Route;
use rsvp_app::session::MemorySessionStore;
use rsvp_app::transport::{HttpMethod, AUTH_HEADER};
use rsvp_app::views::Credentials;
use rsvp_app::workflows::{check_health, login_user, logout_user, navigate};
use rsvp_app::{ApiError, LoginError, SessionStore};

use support::{assert_request, TestEnv};

#[tokio::test]
async fn wrong_password_shows_credentials_error() {
    let env = TestEnv::anonymous();
    env.transport.respond(401, json!({"error": "unauthorized"}));

    let result = login_user(&env.app_core, &Credentials::new("alice", "wrong")).await;
    assert_matches!(result, Err(LoginError::Api(ApiError::InvalidSession)));

    let state = env.state().await;
    assert_eq!(state.auth.error_message, INVALID_CREDENTIALS_ERROR);
    assert!(!state.auth.is_authenticated);
    assert!(!state.auth.is_fetching);
    assert!(state.notice.current().is_none());
    assert_eq!(env.session.token(), None);

    let request = env.transport.last_request().expect("request");
    assert_request(&request, HttpMethod::Post, "/api/sessions");
    assert_eq!(request.header(AUTH_HEADER), None);
}

#[tokio::test]
async fn login_persists_token_and_opens_control_panel() {
    let env = TestEnv::anonymous();
    env.transport
        .respond(201, json!({"username": "alice", "authToken": "tok-1"}));

    let grant = login_user(&env.app_core, &Credentials::new("alice", "secret"))
        .await
        .expect("login");
    assert_eq!(grant.auth_token, "tok-1");

    assert_eq!(env.session.token().as_deref(), Some("tok-1"));
    assert_eq!(env.session.username().as_deref(), Some("alice"));

    let state = env.state().await;
    assert!(state.auth.is_authenticated);
    assert_eq!(state.auth.user.as_deref(), Some("alice"));
    assert!(state.auth.error_message.is_empty());
    assert_eq!(state.route, Route::ControlPanel);

    let body = env.transport.last_request().and_then(|r| r.body).expect("body");
    assert_eq!(body["username"], json!("alice"));
    assert_eq!(body["password"], json!("secret"));
}

#[tokio::test]
async fn server_error_on_login_flashes_generic_error() {
    let env = TestEnv::anonymous();
    env.transport.respond(500, json!({}));

    let result = login_user(&env.app_core, &Credentials::new("alice", "secret")).await;
    assert_matches!(result, Err(LoginError::Api(ApiError::Server { status: 500 })));

    let state = env.state().await;
    assert_eq!(
        state.notice.current().map(|n| n.message.as_str()),
        Some(GENERIC_SERVER_ERROR)
    );
    assert!(!state.auth.is_authenticated);
}

#[tokio::test]
async fn logout_clears_even_when_server_fails() {
    let env = TestEnv::logged_in();
    env.transport.respond(500, json!({}));

    logout_user(&env.app_core).await;

    let request = env.transport.last_request().expect("request");
    assert_request(&request, HttpMethod::Delete, "/api/sessions");
    assert_eq!(request.header(AUTH_HEADER), Some("token-123"));

    assert_eq!(env.session.token(), None);
    let state = env.state().await;
    assert!(!state.auth.is_authenticated);
    assert_eq!(state.route, Route::Login);
}

#[tokio::test]
async fn control_panel_requires_login() {
    let env = TestEnv::anonymous();
    assert_eq!(navigate(&env.app_core, Route::ControlPanel).await, Route::Login);
    assert_eq!(env.state().await.route, Route::Login);

    let env = TestEnv::with_session(MemorySessionStore::with_session("t", "bob"));
    assert!(env.state().await.auth.is_authenticated);
    assert_eq!(
        navigate(&env.app_core, Route::ControlPanel).await,
        Route::ControlPanel
    );
}

#[tokio::test]
async fn health_check() {
    let env = TestEnv::anonymous();
    env.transport.respond(200, json!({"status": "ok"}));
    env.transport.respond(503, json!({}));

    assert_eq!(check_health(&env.app_core).await, Ok(()));
    assert_eq!(
        check_health(&env.app_core).await,
        Err(ApiError::Server { status: 503 })
    );
    let request = env.transport.last_request().expect("request");
    assert_request(&request, HttpMethod::Get, "/api/healthcheck");
}
