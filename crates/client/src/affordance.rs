//! Which controls a viewer is shown.
//!
//! [`is_visible`] is the single admin-gating policy; views never test the
//! admin flag themselves.

use std::fmt;

use studio_core::capability::Capability;

/// A control a view may render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Affordance {
    Create,
    Detail,
    Edit,
    Delete,
    Participate,
    DoNotParticipate,
}

impl Affordance {
    pub fn label(&self) -> &'static str {
        match self {
            Affordance::Create => "Create",
            Affordance::Detail => "Detail",
            Affordance::Edit => "Edit",
            Affordance::Delete => "Delete",
            Affordance::Participate => "Participate",
            Affordance::DoNotParticipate => "Do not participate",
        }
    }
}

impl fmt::Display for Affordance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Whether `viewer` is shown `affordance`.
///
/// Mutating controls are admin-only; roster controls are for signed-in
/// non-admins.
pub fn is_visible<C: Capability + ?Sized>(viewer: &C, affordance: Affordance) -> bool {
    if !viewer.is_authenticated() {
        return false;
    }
    match affordance {
        Affordance::Create | Affordance::Edit | Affordance::Delete => viewer.is_admin(),
        Affordance::Detail => true,
        Affordance::Participate | Affordance::DoNotParticipate => !viewer.is_admin(),
    }
}

/// The subset of `candidates` visible to `viewer`, order preserved.
pub fn visible<C: Capability + ?Sized>(
    viewer: &C,
    candidates: impl IntoIterator<Item = Affordance>,
) -> Vec<Affordance> {
    candidates
        .into_iter()
        .filter(|a| is_visible(viewer, *a))
        .collect()
}

#[cfg(test)]
mod tests {
    use studio_core::models::identity::Identity;

    use super::*;

    fn viewer(admin: bool) -> Option<Identity> {
        Some(Identity {
            id: 2,
            username: "user@studio.com".into(),
            first_name: "John".into(),
            last_name: "User".into(),
            admin,
            token: None,
        })
    }

    const ALL: [Affordance; 6] = [
        Affordance::Create,
        Affordance::Detail,
        Affordance::Edit,
        Affordance::Delete,
        Affordance::Participate,
        Affordance::DoNotParticipate,
    ];

    #[test]
    fn admin_sees_mutations_not_roster() {
        assert_eq!(
            visible(&viewer(true), ALL),
            vec![
                Affordance::Create,
                Affordance::Detail,
                Affordance::Edit,
                Affordance::Delete
            ]
        );
    }

    #[test]
    fn member_sees_roster_not_mutations() {
        assert_eq!(
            visible(&viewer(false), ALL),
            vec![
                Affordance::Detail,
                Affordance::Participate,
                Affordance::DoNotParticipate
            ]
        );
    }

    #[test]
    fn anonymous_sees_nothing() {
        let anonymous: Option<Identity> = None;
        assert!(visible(&anonymous, ALL).is_empty());
    }

    #[test]
    fn labels() {
        assert_eq!(Affordance::DoNotParticipate.to_string(), "Do not participate");
        assert_eq!(Affordance::Participate.label(), "Participate");
    }
}
