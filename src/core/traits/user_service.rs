use crate::core::models::user::UserRecord;

/// Port for the user service wrapped by the logging proxy.
///
/// Implementations live in `adapters::server` (e.g. StubServer,
/// MemoryServer). The core layer only depends on this trait, never on
/// a concrete backend.
///
/// There is deliberately no error channel: a missing user is a normal
/// absent result, not a fault. `save_user` reports failure as `false`.
pub trait UserService: Send + Sync {
    /// Persist the user with the given id. Returns `true` on success.
    fn save_user(&self, id: u64) -> bool;

    /// Look up the user with the given id, or `None` if not found.
    fn get_user(&self, id: u64) -> Option<UserRecord>;
}

// Lets the proxy wrap a backend chosen at runtime.
impl<T: UserService + ?Sized> UserService for Box<T> {
    fn save_user(&self, id: u64) -> bool {
        (**self).save_user(id)
    }

    fn get_user(&self, id: u64) -> Option<UserRecord> {
        (**self).get_user(id)
    }
}
