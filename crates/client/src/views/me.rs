use studio_core::models::user::User;
use tokio_util::sync::CancellationToken;

use crate::context::AppContext;
use crate::error::ClientResult;
use crate::guard::Route;
use crate::notifier::ACCOUNT_DELETED;

/// The `/me` page: the viewer's profile.
pub struct MeView {
    ctx: AppContext,
    scope: CancellationToken,
    pub user: User,
}

impl MeView {
    pub async fn open(ctx: AppContext) -> ClientResult<Self> {
        let scope = ctx.navigator.scope();
        let user = ctx.guarded(&scope, ctx.account().me()).await?;
        Ok(Self { ctx, scope, user })
    }

    /// Admins cannot delete their account from this page.
    pub fn can_delete(&self) -> bool {
        !self.user.admin
    }

    /// Delete the account, sign out and go home.
    pub async fn delete_account(&self) -> ClientResult<Route> {
        self.ctx
            .guarded(&self.scope, self.ctx.account().delete_me())
            .await?;
        self.ctx.notifier.notify(ACCOUNT_DELETED);
        self.ctx.logout()?;
        Ok(self.ctx.navigator.current())
    }

    pub fn back(&self) -> Route {
        self.ctx.navigate(Route::Sessions)
    }
}
