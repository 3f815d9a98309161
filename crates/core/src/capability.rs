//! The single capability check every view consults before rendering
//! admin-gated controls.

use crate::models::identity::Identity;
use crate::types::DbId;

/// Read-only questions a view may ask about the current viewer.
pub trait Capability {
    /// Id of the signed-in user, if any.
    fn viewer_id(&self) -> Option<DbId>;

    /// Whether the viewer holds the admin flag.
    fn is_admin(&self) -> bool;

    fn is_authenticated(&self) -> bool {
        self.viewer_id().is_some()
    }
}

impl Capability for Identity {
    fn viewer_id(&self) -> Option<DbId> {
        Some(self.id)
    }

    fn is_admin(&self) -> bool {
        self.admin
    }
}

impl<C: Capability> Capability for Option<C> {
    fn viewer_id(&self) -> Option<DbId> {
        self.as_ref().and_then(Capability::viewer_id)
    }

    fn is_admin(&self) -> bool {
        self.as_ref().is_some_and(Capability::is_admin)
    }
}

impl<C: Capability + ?Sized> Capability for std::sync::Arc<C> {
    fn viewer_id(&self) -> Option<DbId> {
        (**self).viewer_id()
    }

    fn is_admin(&self) -> bool {
        (**self).is_admin()
    }
}
