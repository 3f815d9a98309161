//! Sign-in, sign-out and registration against a live studio-api.

mod common;

use std::sync::Arc;

use assert_matches::assert_matches;
use axum::routing::post;
use axum::{Json, Router};
use studio_api::bootstrap::{ADMIN_EMAIL, ADMIN_PASSWORD};
use studio_api::handlers::auth::EMAIL_TAKEN;
use studio_client::auth::AuthState;
use studio_client::error::ClientError;
use studio_client::guard::Route;
use studio_client::storage::{FileStorage, MemoryStorage, TokenStorage, IDENTITY_KEY, TOKEN_KEY};
use studio_client::views::{LoginView, RegisterView, SessionListView, GENERIC_ERROR};
use studio_core::capability::Capability;
use studio_core::forms::LoginForm;

#[tokio::test]
async fn valid_login_lands_on_sessions() {
    let server = common::spawn_server().await;
    let (ctx, storage) = server.client();

    common::login_admin(&ctx).await;

    assert_eq!(ctx.navigator.current(), Route::Sessions);
    assert_eq!(ctx.auth.state(), AuthState::Authenticated { admin: true });
    assert!(storage.get(TOKEN_KEY).unwrap().is_some());

    let list = SessionListView::open(ctx.clone()).await.unwrap();
    assert!(list.sessions.is_empty());
}

#[tokio::test]
async fn invalid_login_stays_unauthenticated_with_error() {
    let server = common::spawn_server().await;
    let (ctx, storage) = server.client();
    ctx.navigate(Route::Login);

    let mut view = LoginView::new(ctx.clone());
    view.form = LoginForm::new(ADMIN_EMAIL, "wrong-password");
    let result = view.submit().await;

    assert_matches!(result, Err(ClientError::InvalidCredentials));
    assert_eq!(view.error.as_deref(), Some(GENERIC_ERROR));
    assert!(!ctx.auth.is_authenticated());
    assert_eq!(ctx.navigator.current(), Route::Login);
    assert_eq!(storage.get(TOKEN_KEY).unwrap(), None);
}

#[tokio::test]
async fn empty_login_form_cannot_be_submitted() {
    let server = common::spawn_server().await;
    let (ctx, _) = server.client();

    let mut view = LoginView::new(ctx.clone());
    assert!(!view.can_submit());
    assert_matches!(view.submit().await, Err(ClientError::Validation(_)));
    assert_eq!(view.error.as_deref(), Some(GENERIC_ERROR));
}

#[tokio::test]
async fn logout_clears_token_and_guards_sessions() {
    let server = common::spawn_server().await;
    let (ctx, storage) = server.client();
    common::login_admin(&ctx).await;

    ctx.logout().unwrap();

    assert_eq!(storage.get(TOKEN_KEY).unwrap(), None);
    assert_eq!(ctx.auth.state(), AuthState::Unauthenticated);
    assert_eq!(ctx.navigator.current(), Route::Home);
    assert_eq!(ctx.navigate_path("/sessions"), Route::Login);
}

#[tokio::test]
async fn register_then_sign_in() {
    let server = common::spawn_server().await;
    let (ctx, _) = server.client();
    ctx.navigate(Route::Register);

    let mut view = RegisterView::new(ctx.clone());
    assert!(!view.can_submit());
    view.form = common::register_form("toto3@toto.com");
    assert!(view.can_submit());

    assert_eq!(view.submit().await.unwrap(), Route::Login);
    assert!(!ctx.auth.is_authenticated());

    common::login_as(&ctx, "toto3@toto.com", "test!1234").await;
    assert_eq!(ctx.auth.state(), AuthState::Authenticated { admin: false });
    assert_eq!(ctx.auth.viewer_id(), Some(2));
}

#[tokio::test]
async fn register_with_taken_email_shows_service_message() {
    let server = common::spawn_server().await;
    let (ctx, _) = server.client();
    ctx.navigate(Route::Register);

    let mut view = RegisterView::new(ctx.clone());
    view.form = common::register_form(ADMIN_EMAIL);
    let result = view.submit().await;

    assert_matches!(result, Err(ClientError::Conflict(ref message)) if message == EMAIL_TAKEN);
    assert_eq!(view.error.as_deref(), Some(EMAIL_TAKEN));
    assert_eq!(ctx.navigator.current(), Route::Register);
}

#[tokio::test]
async fn persisted_token_survives_reload() {
    let server = common::spawn_server().await;
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");

    let first = server.client_with(std::sync::Arc::new(FileStorage::new(&path)));
    common::login_as(&first, ADMIN_EMAIL, ADMIN_PASSWORD).await;

    let reloaded = server.client_with(std::sync::Arc::new(FileStorage::new(&path)));
    let identity = reloaded.auth.restore().unwrap().expect("identity restored");
    assert!(identity.admin);

    assert_eq!(reloaded.navigate(Route::Sessions), Route::Sessions);
    SessionListView::open(reloaded.clone()).await.unwrap();
}

#[tokio::test]
async fn rejected_token_forces_logout_and_redirect() {
    let server = common::spawn_server().await;
    let (ctx, storage) = server.client();
    common::login_admin(&ctx).await;

    // Present a token the service never issued.
    storage.set(TOKEN_KEY, "forged").unwrap();
    let forged = server.client_with(storage.clone());
    forged.auth.restore().unwrap().unwrap();
    forged.navigate(Route::Sessions);

    let result = SessionListView::open(forged.clone()).await;

    assert_matches!(result, Err(ClientError::Unauthorized(_)));
    assert_eq!(forged.auth.state(), AuthState::Unauthenticated);
    assert_eq!(forged.navigator.current(), Route::Login);
    assert_eq!(storage.get(TOKEN_KEY).unwrap(), None);
}

#[tokio::test]
async fn tokenless_login_drops_earlier_persisted_session() {
    let app = Router::new().route(
        "/api/auth/login",
        post(|| async {
            Json(serde_json::json!({
                "id": 2,
                "username": "user@studio.com",
                "firstName": "John",
                "lastName": "User",
                "admin": false,
            }))
        }),
    );
    let url = common::spawn_stub(app).await;

    let storage = Arc::new(MemoryStorage::new());
    storage.set(TOKEN_KEY, "admin-token").unwrap();
    storage
        .set(
            IDENTITY_KEY,
            r#"{"id":1,"username":"yoga@studio.com","firstName":"Admin","lastName":"Admin","admin":true}"#,
        )
        .unwrap();
    let ctx = common::client_for(&url, storage.clone());
    assert!(ctx.auth.restore().unwrap().is_some_and(|identity| identity.admin));

    let identity = ctx
        .auth
        .login(&LoginForm::new("user@studio.com", "test!1234"))
        .await
        .unwrap();
    assert_eq!(identity.id, 2);
    assert_eq!(ctx.auth.token(), None);

    let reloaded = common::client_for(&url, storage.clone());
    assert!(reloaded.auth.restore().unwrap().is_none());
    assert_eq!(storage.get(TOKEN_KEY).unwrap(), None);
}
