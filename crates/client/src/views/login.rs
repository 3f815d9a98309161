use studio_core::forms::{is_submittable, LoginForm};

use super::GENERIC_ERROR;
use crate::context::AppContext;
use crate::error::ClientResult;
use crate::guard::Route;

/// The `/login` page.
pub struct LoginView {
    ctx: AppContext,
    pub form: LoginForm,
    pub error: Option<String>,
}

impl LoginView {
    pub fn new(ctx: AppContext) -> Self {
        Self {
            ctx,
            form: LoginForm::default(),
            error: None,
        }
    }

    pub fn can_submit(&self) -> bool {
        is_submittable(&self.form)
    }

    /// Sign in and land on the session list.
    ///
    /// Any failure leaves the viewer signed out on this page with
    /// [`GENERIC_ERROR`] shown.
    pub async fn submit(&mut self) -> ClientResult<Route> {
        match self.ctx.auth.login(&self.form).await {
            Ok(_) => {
                self.error = None;
                Ok(self.ctx.navigate(Route::Sessions))
            }
            Err(e) => {
                self.error = Some(GENERIC_ERROR.to_string());
                Err(e)
            }
        }
    }
}
