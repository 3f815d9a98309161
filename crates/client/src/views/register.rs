use studio_core::forms::{is_submittable, RegisterForm};

use super::GENERIC_ERROR;
use crate::context::AppContext;
use crate::error::{ClientError, ClientResult};
use crate::guard::Route;

/// The `/register` page.
pub struct RegisterView {
    ctx: AppContext,
    pub form: RegisterForm,
    pub error: Option<String>,
}

impl RegisterView {
    pub fn new(ctx: AppContext) -> Self {
        Self {
            ctx,
            form: RegisterForm::default(),
            error: None,
        }
    }

    pub fn can_submit(&self) -> bool {
        is_submittable(&self.form)
    }

    /// Create the account and go to the login page.
    ///
    /// A refusal from the service shows its message and stays here.
    pub async fn submit(&mut self) -> ClientResult<Route> {
        match self.ctx.auth.register(&self.form).await {
            Ok(_) => {
                self.error = None;
                Ok(self.ctx.navigate(Route::Login))
            }
            Err(e) => {
                self.error = Some(match &e {
                    ClientError::Conflict(message) => message.clone(),
                    _ => GENERIC_ERROR.to_string(),
                });
                Err(e)
            }
        }
    }
}
