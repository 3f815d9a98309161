//! View models: one per page, each holding its form or loaded data plus the
//! cancellation scope it was opened under.

pub mod detail;
pub mod form;
pub mod list;
pub mod login;
pub mod me;
pub mod register;

pub use detail::SessionDetailView;
pub use form::{FormMode, SessionFormView};
pub use list::SessionListView;
pub use login::LoginView;
pub use me::MeView;
pub use register::RegisterView;

/// Message shown on the login page for any failed attempt.
pub const GENERIC_ERROR: &str = "An error occurred";
