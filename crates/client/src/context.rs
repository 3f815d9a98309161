//! The shared bundle every view receives.

use std::future::Future;
use std::sync::Arc;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::account::AccountClient;
use crate::auth::{AuthSessionStore, AuthState};
use crate::config::ClientConfig;
use crate::directory::SessionDirectory;
use crate::error::{ClientError, ClientResult};
use crate::guard::{Route, RouteGuard};
use crate::http::ApiClient;
use crate::navigator::Navigator;
use crate::notifier::Notifier;
use crate::storage::{FileStorage, MemoryStorage, TokenStorage};

/// Explicitly passed application context.
///
/// Cheap to clone; clones share the same store, navigator and notifier.
#[derive(Clone)]
pub struct AppContext {
    pub api: ApiClient,
    pub auth: Arc<AuthSessionStore>,
    pub navigator: Arc<Navigator>,
    pub notifier: Arc<Notifier>,
}

impl AppContext {
    /// Build a context, persisting to `config.storage_path` when set.
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let storage: Arc<dyn TokenStorage> = match &config.storage_path {
            Some(path) => Arc::new(FileStorage::new(path)),
            None => Arc::new(MemoryStorage::new()),
        };
        Self::with_storage(config, storage)
    }

    pub fn with_storage(config: &ClientConfig, storage: Arc<dyn TokenStorage>) -> ClientResult<Self> {
        let api = ApiClient::new(config)?;
        let auth = Arc::new(AuthSessionStore::new(api.clone(), storage));
        Ok(Self {
            api,
            auth,
            navigator: Arc::new(Navigator::new()),
            notifier: Arc::new(Notifier::new()),
        })
    }

    pub fn directory(&self) -> SessionDirectory {
        SessionDirectory::new(self.api.clone(), Arc::clone(&self.auth))
    }

    pub fn account(&self) -> AccountClient {
        AccountClient::new(self.api.clone(), Arc::clone(&self.auth))
    }

    /// Navigate through the route guard. Returns the route shown.
    pub fn navigate(&self, route: Route) -> Route {
        self.navigator.navigate(self.auth.as_ref(), route)
    }

    pub fn navigate_path(&self, path: &str) -> Route {
        self.navigate(Route::parse(path))
    }

    /// Sign out and return to the home page.
    pub fn logout(&self) -> ClientResult<()> {
        let result = self.auth.logout();
        self.navigate(Route::Home);
        result
    }

    /// Run an authenticated call on behalf of the view owning `scope`.
    ///
    /// If the view is left before the call completes, the call is dropped
    /// and [`ClientError::Stale`] returned. A 401 ends the session and
    /// redirects to the login page.
    pub async fn guarded<T, F>(&self, scope: &CancellationToken, call: F) -> ClientResult<T>
    where
        F: Future<Output = ClientResult<T>>,
    {
        let result = tokio::select! {
            biased;
            () = scope.cancelled() => return Err(ClientError::Stale),
            result = call => result,
        };

        match result {
            Err(ClientError::Unauthorized(message)) => {
                self.expire();
                Err(ClientError::Unauthorized(message))
            }
            _ if scope.is_cancelled() => Err(ClientError::Stale),
            other => other,
        }
    }

    /// Force the signed-out state after the service rejected the token.
    pub fn expire(&self) {
        tracing::warn!("Session rejected by the service, signing out");
        if let Err(e) = self.auth.logout() {
            tracing::warn!(error = %e, "Failed to clear stored credentials");
        }
        self.navigate(Route::Login);
    }

    /// Watch the auth state and redirect to the login page whenever the
    /// viewer loses access to the current route.
    pub fn spawn_route_guard(&self) -> JoinHandle<()> {
        let ctx = self.clone();
        let mut rx = self.auth.subscribe();
        tokio::spawn(async move {
            while rx.changed().await.is_ok() {
                let state = *rx.borrow_and_update();
                let current = ctx.navigator.current();
                if state == AuthState::Unauthenticated
                    && !RouteGuard::permits(ctx.auth.as_ref(), current)
                {
                    ctx.navigate(Route::Login);
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use assert_matches::assert_matches;

    use super::*;
    use crate::storage::{IDENTITY_KEY, TOKEN_KEY};

    fn context() -> (AppContext, Arc<MemoryStorage>) {
        let storage = Arc::new(MemoryStorage::new());
        let config = ClientConfig::new("http://127.0.0.1:9");
        (AppContext::with_storage(&config, storage.clone()).unwrap(), storage)
    }

    fn sign_in(ctx: &AppContext, storage: &MemoryStorage) {
        storage.set(TOKEN_KEY, "t").unwrap();
        storage
            .set(
                IDENTITY_KEY,
                r#"{"id":2,"username":"u@studio.com","firstName":"A","lastName":"B","admin":false}"#,
            )
            .unwrap();
        ctx.auth.restore().unwrap();
    }

    #[tokio::test]
    async fn cancelled_scope_discards_response() {
        let (ctx, _) = context();
        let scope = ctx.navigator.scope();
        scope.cancel();

        let result = ctx.guarded(&scope, async { Ok(42) }).await;
        assert_matches!(result, Err(ClientError::Stale));
    }

    #[tokio::test]
    async fn navigating_away_drops_in_flight_call() {
        let (ctx, storage) = context();
        sign_in(&ctx, &storage);
        ctx.navigate(Route::Sessions);
        let scope = ctx.navigator.scope();

        let slow = ctx.guarded(&scope, async {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(())
        });
        let leave = async {
            tokio::task::yield_now().await;
            ctx.navigate(Route::Me);
        };

        let (result, ()) = tokio::join!(slow, leave);
        assert_matches!(result, Err(ClientError::Stale));
    }

    #[tokio::test]
    async fn unauthorized_forces_logout_and_redirect() {
        let (ctx, storage) = context();
        sign_in(&ctx, &storage);
        ctx.navigate(Route::Sessions);
        let scope = ctx.navigator.scope();

        let result: ClientResult<()> = ctx
            .guarded(&scope, async {
                Err(ClientError::Unauthorized("Invalid or expired token".into()))
            })
            .await;

        assert_matches!(result, Err(ClientError::Unauthorized(_)));
        assert_eq!(ctx.auth.state(), AuthState::Unauthenticated);
        assert_eq!(ctx.navigator.current(), Route::Login);
        assert_eq!(storage.get(TOKEN_KEY).unwrap(), None);
    }

    #[tokio::test]
    async fn logout_goes_home_and_guard_blocks_sessions() {
        let (ctx, storage) = context();
        sign_in(&ctx, &storage);
        ctx.navigate(Route::Sessions);

        ctx.logout().unwrap();
        assert_eq!(ctx.navigator.current(), Route::Home);

        assert_eq!(ctx.navigate_path("/sessions"), Route::Login);
    }

    #[tokio::test]
    async fn route_guard_task_redirects_on_sign_out() {
        let (ctx, storage) = context();
        sign_in(&ctx, &storage);
        ctx.navigate(Route::Me);
        let guard = ctx.spawn_route_guard();

        ctx.auth.logout().unwrap();

        tokio::time::timeout(Duration::from_secs(5), async {
            while ctx.navigator.current() != Route::Login {
                tokio::task::yield_now().await;
            }
        })
        .await
        .expect("guard should redirect to login");
        guard.abort();
    }
}
