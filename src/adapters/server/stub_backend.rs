use crate::core::models::user::UserRecord;
use crate::core::traits::user_service::UserService;

/// Stub backend: every save succeeds, every lookup hits.
///
/// This is the seam where real persistence would plug in. The stub
/// never produces an absent result, so the proxy's ERROR branch for
/// lookups is only reachable with other backends.
pub struct StubServer;

impl UserService for StubServer {
    fn save_user(&self, _id: u64) -> bool {
        true
    }

    fn get_user(&self, id: u64) -> Option<UserRecord> {
        Some(UserRecord::new(id))
    }
}
