use crate::USERS_ROOT;

use st_core::Identity;

use std::fmt;

/// Slash-separated location of a node in the record store.
///
/// Only constructed from validated identities, so the user segment never contains
/// separators or reserved characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordPath(String);

impl RecordPath {
    /// `users/<identity>`: the single record holding a user's sleep session.
    pub fn for_user(identity: &Identity) -> Self {
        Self(format!("{USERS_ROOT}/{identity}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
