use studio_core::models::session::Session;
use studio_core::types::DbId;
use tokio_util::sync::CancellationToken;

use crate::affordance::{self, Affordance};
use crate::context::AppContext;
use crate::error::ClientResult;
use crate::guard::Route;

/// The `/sessions` page.
pub struct SessionListView {
    ctx: AppContext,
    scope: CancellationToken,
    pub sessions: Vec<Session>,
}

impl SessionListView {
    /// Load the list for the current route.
    pub async fn open(ctx: AppContext) -> ClientResult<Self> {
        let scope = ctx.navigator.scope();
        let sessions = ctx.guarded(&scope, ctx.directory().list()).await?;
        Ok(Self {
            ctx,
            scope,
            sessions,
        })
    }

    pub async fn refresh(&mut self) -> ClientResult<()> {
        self.sessions = self
            .ctx
            .guarded(&self.scope, self.ctx.directory().list())
            .await?;
        Ok(())
    }

    /// Controls shown on the page header.
    pub fn page_affordances(&self) -> Vec<Affordance> {
        affordance::visible(self.ctx.auth.as_ref(), [Affordance::Create])
    }

    /// Controls shown on each session card.
    pub fn card_affordances(&self) -> Vec<Affordance> {
        affordance::visible(
            self.ctx.auth.as_ref(),
            [Affordance::Detail, Affordance::Edit],
        )
    }

    pub fn open_create(&self) -> Route {
        self.ctx.navigate(Route::SessionCreate)
    }

    pub fn open_detail(&self, id: DbId) -> Route {
        self.ctx.navigate(Route::SessionDetail(id))
    }

    pub fn open_update(&self, id: DbId) -> Route {
        self.ctx.navigate(Route::SessionUpdate(id))
    }
}

impl std::fmt::Debug for SessionListView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionListView")
            .field("sessions", &self.sessions)
            .finish_non_exhaustive()
    }
}
