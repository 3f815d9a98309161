#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;

use studio_api::auth::jwt::JwtConfig;
use studio_api::bootstrap::{seed_demo_data, ADMIN_EMAIL, ADMIN_PASSWORD};
use studio_api::config::ServerConfig;
use studio_api::router::build_app_router;
use studio_api::state::AppState;
use studio_client::config::ClientConfig;
use studio_client::context::AppContext;
use studio_client::guard::Route;
use studio_client::storage::{MemoryStorage, TokenStorage};
use studio_client::views::LoginView;
use studio_core::forms::{LoginForm, RegisterForm};
use studio_db::DbPool;

/// A studio-api instance listening on an ephemeral local port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub pool: DbPool,
}

impl TestServer {
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// A fresh client context with its own in-memory storage.
    pub fn client(&self) -> (AppContext, Arc<MemoryStorage>) {
        let storage = Arc::new(MemoryStorage::new());
        let ctx = self.client_with(storage.clone());
        (ctx, storage)
    }

    pub fn client_with(&self, storage: Arc<dyn TokenStorage>) -> AppContext {
        AppContext::with_storage(&ClientConfig::new(self.url()), storage).unwrap()
    }
}

fn server_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:4200".to_string()],
        request_timeout_secs: 30,
        seed_demo_data: true,
        jwt: JwtConfig {
            secret: "client-e2e-secret".to_string(),
            access_token_expiry_mins: 60,
        },
    }
}

/// Start a seeded server in the background.
pub async fn spawn_server() -> TestServer {
    let pool = studio_db::create_pool();
    seed_demo_data(&pool).await.unwrap();

    let config = server_config();
    let state = AppState {
        pool: pool.clone(),
        config: Arc::new(config.clone()),
    };
    let app = build_app_router(state, &config);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestServer { addr, pool }
}

/// Serve a hand-written router, for responses the real service never gives.
pub async fn spawn_stub(app: axum::Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

/// A client context pointed at `url`.
pub fn client_for(url: &str, storage: Arc<dyn TokenStorage>) -> AppContext {
    AppContext::with_storage(&ClientConfig::new(url), storage).unwrap()
}

/// Sign in through the login page.
pub async fn login_as(ctx: &AppContext, email: &str, password: &str) {
    ctx.navigate(Route::Login);
    let mut view = LoginView::new(ctx.clone());
    view.form = LoginForm::new(email, password);
    assert_eq!(view.submit().await.unwrap(), Route::Sessions);
}

pub async fn login_admin(ctx: &AppContext) {
    login_as(ctx, ADMIN_EMAIL, ADMIN_PASSWORD).await;
}

pub fn register_form(email: &str) -> RegisterForm {
    RegisterForm {
        first_name: "Toto".into(),
        last_name: "Toto".into(),
        email: email.into(),
        password: "test!1234".into(),
    }
}

/// Register a member through the store and sign them in.
pub async fn login_member(ctx: &AppContext, email: &str) {
    ctx.auth.register(&register_form(email)).await.unwrap();
    login_as(ctx, email, "test!1234").await;
}
