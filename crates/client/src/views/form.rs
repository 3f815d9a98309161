use studio_core::capability::Capability;
use studio_core::forms::{is_submittable, SessionForm};
use studio_core::models::session::Session;
use studio_core::models::teacher::Teacher;
use studio_core::types::DbId;
use tokio_util::sync::CancellationToken;

use crate::context::AppContext;
use crate::error::{ClientError, ClientResult};
use crate::guard::Route;
use crate::notifier::{SESSION_CREATED, SESSION_UPDATED};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Update(DbId),
}

/// The `/sessions/create` and `/sessions/update/{id}` pages.
pub struct SessionFormView {
    ctx: AppContext,
    scope: CancellationToken,
    pub mode: FormMode,
    pub form: SessionForm,
    /// Choices for the teacher picker.
    pub teachers: Vec<Teacher>,
}

impl SessionFormView {
    /// Open the form. Non-admins are sent back to the session list.
    pub async fn open(ctx: AppContext, mode: FormMode) -> ClientResult<Self> {
        if !ctx.auth.is_admin() {
            ctx.navigate(Route::Sessions);
            return Err(ClientError::Forbidden("Admin role required".into()));
        }

        let scope = ctx.navigator.scope();
        let directory = ctx.directory();
        let teachers = ctx.guarded(&scope, directory.teachers()).await?;
        let form = match mode {
            FormMode::Create => SessionForm::default(),
            FormMode::Update(id) => {
                let session = ctx.guarded(&scope, directory.get(id)).await?;
                SessionForm::from_session(&session)
            }
        };

        Ok(Self {
            ctx,
            scope,
            mode,
            form,
            teachers,
        })
    }

    pub fn can_submit(&self) -> bool {
        is_submittable(&self.form)
    }

    /// Save, notify, and return to the list.
    ///
    /// An invalid form fails with `Validation` and nothing is sent.
    pub async fn submit(&self) -> ClientResult<Session> {
        let payload = self.form.to_payload()?;
        let directory = self.ctx.directory();

        let (session, notice) = match self.mode {
            FormMode::Create => (
                self.ctx
                    .guarded(&self.scope, directory.create(&payload))
                    .await?,
                SESSION_CREATED,
            ),
            FormMode::Update(id) => (
                self.ctx
                    .guarded(&self.scope, directory.update(id, &payload))
                    .await?,
                SESSION_UPDATED,
            ),
        };

        self.ctx.notifier.notify(notice);
        self.ctx.navigate(Route::Sessions);
        Ok(session)
    }

    pub fn back(&self) -> Route {
        self.ctx.navigate(Route::Sessions)
    }
}

impl std::fmt::Debug for SessionFormView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionFormView")
            .field("mode", &self.mode)
            .field("form", &self.form)
            .field("teachers", &self.teachers)
            .finish_non_exhaustive()
    }
}
