use std::collections::HashMap;
use std::sync::Mutex;

use crate::core::models::user::UserRecord;
use crate::core::traits::user_service::UserService;

/// In-memory backend: saves insert into a map, lookups only hit for
/// previously saved ids. Unlike `StubServer`, this backend exercises
/// the absent-result path.
pub struct MemoryServer {
    users: Mutex<HashMap<u64, UserRecord>>,
}

impl MemoryServer {
    pub fn new() -> Self {
        Self {
            users: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for MemoryServer {
    fn default() -> Self {
        Self::new()
    }
}

impl UserService for MemoryServer {
    fn save_user(&self, id: u64) -> bool {
        let mut users = self.users.lock().unwrap_or_else(|e| e.into_inner());
        users.insert(id, UserRecord::new(id));
        true
    }

    fn get_user(&self, id: u64) -> Option<UserRecord> {
        let users = self.users.lock().unwrap_or_else(|e| e.into_inner());
        users.get(&id).cloned()
    }
}
