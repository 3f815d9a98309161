//! The participant set of a session.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::types::DbId;

/// User ids registered on a session, kept sorted and free of duplicates.
///
/// Serialized as a plain JSON array; repeated ids in incoming JSON collapse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster(BTreeSet<DbId>);

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, user_id: DbId) -> bool {
        self.0.contains(&user_id)
    }

    /// Returns `false` if the user was already on the roster.
    pub fn insert(&mut self, user_id: DbId) -> bool {
        self.0.insert(user_id)
    }

    /// Returns `false` if the user was not on the roster.
    pub fn remove(&mut self, user_id: DbId) -> bool {
        self.0.remove(&user_id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = DbId> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<DbId> for Roster {
    fn from_iter<I: IntoIterator<Item = DbId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
