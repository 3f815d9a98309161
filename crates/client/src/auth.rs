//! The Auth Session Store: sole owner of the signed-in identity.

use std::sync::{Arc, PoisonError, RwLock};

use studio_core::capability::Capability;
use studio_core::forms::{LoginForm, RegisterForm};
use studio_core::models::identity::Identity;
use studio_core::models::MessageResponse;
use studio_core::types::DbId;
use tokio::sync::watch;
use validator::Validate;

use crate::error::{ClientError, ClientResult};
use crate::http::ApiClient;
use crate::storage::{TokenStorage, IDENTITY_KEY, TOKEN_KEY};

/// Authentication state as seen by the route guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    Unauthenticated,
    Authenticated { admin: bool },
}

impl AuthState {
    fn of(identity: Option<&Identity>) -> Self {
        match identity {
            Some(identity) => AuthState::Authenticated {
                admin: identity.admin,
            },
            None => AuthState::Unauthenticated,
        }
    }
}

/// Holds the authenticated [`Identity`] for the lifetime of the client
/// session.
///
/// Other components only ever see `Arc<Identity>` snapshots. State changes
/// are broadcast on a [`watch`] channel.
pub struct AuthSessionStore {
    api: ApiClient,
    storage: Arc<dyn TokenStorage>,
    identity: RwLock<Option<Arc<Identity>>>,
    state: watch::Sender<AuthState>,
}

impl AuthSessionStore {
    pub fn new(api: ApiClient, storage: Arc<dyn TokenStorage>) -> Self {
        let (state, _) = watch::channel(AuthState::Unauthenticated);
        Self {
            api,
            storage,
            identity: RwLock::new(None),
            state,
        }
    }

    /// Sign in with email and password.
    ///
    /// An invalid form is rejected before any request is sent. A 401 from
    /// the service becomes [`ClientError::InvalidCredentials`]. Any failure
    /// signs out whoever was signed in before, so the store ends up empty.
    pub async fn login(&self, form: &LoginForm) -> ClientResult<Arc<Identity>> {
        match self.try_login(form).await {
            Ok(identity) => {
                tracing::info!(user_id = identity.id, admin = identity.admin, "Signed in");
                Ok(identity)
            }
            Err(e) => {
                if let Err(storage) = self.logout() {
                    tracing::warn!(error = %storage, "Failed to clear storage after failed login");
                }
                Err(e)
            }
        }
    }

    async fn try_login(&self, form: &LoginForm) -> ClientResult<Arc<Identity>> {
        form.validate()?;

        let identity: Identity = self
            .api
            .post_json("/api/auth/login", None, form)
            .await
            .map_err(|e| match e {
                ClientError::Unauthorized(_) => ClientError::InvalidCredentials,
                other => other,
            })?;

        self.establish(identity)
    }

    /// Create a non-admin account. Does not sign in.
    ///
    /// A 400 from the service (email taken) becomes
    /// [`ClientError::Conflict`] carrying the service's message.
    pub async fn register(&self, form: &RegisterForm) -> ClientResult<MessageResponse> {
        form.validate()?;

        let response: MessageResponse = self
            .api
            .post_json("/api/auth/register", None, form)
            .await
            .map_err(|e| match e {
                ClientError::Api {
                    status: 400,
                    message,
                } => ClientError::Conflict(message),
                other => other,
            })?;

        tracing::info!(email = %form.email, "Registered account");
        Ok(response)
    }

    /// Drop the identity and the persisted keys.
    ///
    /// The in-memory identity is always cleared, even if storage fails.
    pub fn logout(&self) -> ClientResult<()> {
        let previous = self.replace(None);
        if let Some(identity) = previous {
            tracing::info!(user_id = identity.id, "Signed out");
        }
        self.storage.remove(TOKEN_KEY)?;
        self.storage.remove(IDENTITY_KEY)?;
        Ok(())
    }

    /// Re-establish the identity persisted by an earlier login.
    ///
    /// Both keys must be present; a lone or unreadable entry is discarded.
    pub fn restore(&self) -> ClientResult<Option<Arc<Identity>>> {
        let (Some(token), Some(raw)) = (
            self.storage.get(TOKEN_KEY)?,
            self.storage.get(IDENTITY_KEY)?,
        ) else {
            return Ok(None);
        };

        let mut identity: Identity = match serde_json::from_str(&raw) {
            Ok(identity) => identity,
            Err(e) => {
                tracing::warn!(error = %e, "Discarding unreadable stored identity");
                self.logout()?;
                return Ok(None);
            }
        };
        identity.token = Some(token);

        let identity = Arc::new(identity);
        self.replace(Some(Arc::clone(&identity)));
        tracing::info!(user_id = identity.id, "Restored session from storage");
        Ok(Some(identity))
    }

    /// Snapshot of the current identity.
    pub fn identity(&self) -> Option<Arc<Identity>> {
        self.identity
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Bearer token of the current identity, if the service issued one.
    pub fn token(&self) -> Option<String> {
        self.identity().and_then(|identity| identity.token.clone())
    }

    pub fn state(&self) -> AuthState {
        *self.state.borrow()
    }

    /// Receiver notified on every sign-in and sign-out.
    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.state.subscribe()
    }

    /// Persist `identity` and make it current. Without a token, keys left by
    /// an earlier sign-in are removed so a reload cannot revive them.
    fn establish(&self, identity: Identity) -> ClientResult<Arc<Identity>> {
        match identity.token.as_deref() {
            Some(token) => {
                let snapshot = Identity {
                    token: None,
                    ..identity.clone()
                };
                let raw = serde_json::to_string(&snapshot).map_err(|e| {
                    ClientError::Storage(format!("Failed to encode identity: {e}"))
                })?;
                self.storage.set(TOKEN_KEY, token)?;
                self.storage.set(IDENTITY_KEY, &raw)?;
            }
            None => {
                self.storage.remove(TOKEN_KEY)?;
                self.storage.remove(IDENTITY_KEY)?;
            }
        }

        let identity = Arc::new(identity);
        self.replace(Some(Arc::clone(&identity)));
        Ok(identity)
    }

    fn replace(&self, next: Option<Arc<Identity>>) -> Option<Arc<Identity>> {
        let state = AuthState::of(next.as_deref());
        let previous = {
            let mut slot = self
                .identity
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            std::mem::replace(&mut *slot, next)
        };
        self.state.send_replace(state);
        previous
    }
}

impl Capability for AuthSessionStore {
    fn viewer_id(&self) -> Option<DbId> {
        self.identity().map(|identity| identity.id)
    }

    fn is_admin(&self) -> bool {
        self.identity().is_some_and(|identity| identity.admin)
    }
}
