use studio_core::capability::Capability;
use studio_core::models::session::Session;
use studio_core::models::teacher::Teacher;
use studio_core::types::DbId;
use tokio_util::sync::CancellationToken;

use crate::affordance::{self, Affordance};
use crate::context::AppContext;
use crate::error::ClientResult;
use crate::guard::Route;
use crate::notifier::SESSION_DELETED;
use crate::roster::RosterMembershipController;

/// The `/sessions/detail/{id}` page.
pub struct SessionDetailView {
    ctx: AppContext,
    scope: CancellationToken,
    pub session: Session,
    pub teacher: Teacher,
    /// Present for signed-in non-admins only.
    roster: Option<RosterMembershipController>,
}

impl SessionDetailView {
    pub async fn open(ctx: AppContext, id: DbId) -> ClientResult<Self> {
        let scope = ctx.navigator.scope();
        let detail = ctx.guarded(&scope, ctx.directory().detail(id)).await?;

        let roster = match ctx.auth.viewer_id() {
            Some(user_id) if affordance::is_visible(ctx.auth.as_ref(), Affordance::Participate) => {
                Some(RosterMembershipController::new(
                    ctx.directory(),
                    &detail.session,
                    user_id,
                ))
            }
            _ => None,
        };

        Ok(Self {
            ctx,
            scope,
            session: detail.session,
            teacher: detail.teacher,
            roster,
        })
    }

    /// Number of participants on the roster.
    pub fn attendees(&self) -> usize {
        self.session.users.len()
    }

    /// Controls shown: Edit/Delete for admins, the participation toggle for
    /// everyone else.
    pub fn affordances(&self) -> Vec<Affordance> {
        let mut shown = affordance::visible(
            self.ctx.auth.as_ref(),
            [Affordance::Edit, Affordance::Delete],
        );
        if let Some(roster) = &self.roster {
            shown.push(roster.affordance());
        }
        shown
    }

    pub fn roster(&self) -> Option<&RosterMembershipController> {
        self.roster.as_ref()
    }

    /// Join or leave the roster; the session is replaced by the service's
    /// copy once the change is confirmed.
    pub async fn toggle_participation(&mut self) -> ClientResult<Affordance> {
        let Some(roster) = &self.roster else {
            return Err(crate::error::ClientError::Forbidden(
                "Participation is not available to admins".into(),
            ));
        };
        let session = self.ctx.guarded(&self.scope, roster.toggle()).await?;
        let label = roster.affordance();
        self.session = session;
        Ok(label)
    }

    pub async fn delete(&self) -> ClientResult<Route> {
        self.ctx
            .guarded(&self.scope, self.ctx.directory().delete(self.session.id))
            .await?;
        self.ctx.notifier.notify(SESSION_DELETED);
        Ok(self.ctx.navigate(Route::Sessions))
    }

    pub fn edit(&self) -> Route {
        self.ctx.navigate(Route::SessionUpdate(self.session.id))
    }

    pub fn back(&self) -> Route {
        self.ctx.navigate(Route::Sessions)
    }
}

impl std::fmt::Debug for SessionDetailView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionDetailView")
            .field("session", &self.session)
            .field("teacher", &self.teacher)
            .finish_non_exhaustive()
    }
}
