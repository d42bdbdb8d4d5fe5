use serde::{Deserialize, Serialize};

/// A user record returned by the service.
///
/// The proxy treats it as opaque: it only observes presence or absence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: u64,
}

impl UserRecord {
    pub fn new(id: u64) -> Self {
        Self { id }
    }
}

impl std::fmt::Display for UserRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "user #{}", self.id)
    }
}
