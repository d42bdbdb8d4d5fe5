pub mod memory_backend;
pub mod stub_backend;

use crate::core::errors::{CallwatchError, Result};
use crate::core::traits::user_service::UserService;

use memory_backend::MemoryServer;
use stub_backend::StubServer;

/// Backend names accepted by `from_name`, in display order.
pub const AVAILABLE_BACKENDS: &[&str] = &["stub", "memory"];

/// Select a server backend by name.
pub fn from_name(name: &str) -> Result<Box<dyn UserService>> {
    match name {
        "stub" => Ok(Box::new(StubServer)),
        "memory" => Ok(Box::new(MemoryServer::new())),
        _ => Err(CallwatchError::UnknownBackend {
            name: name.to_string(),
            available: AVAILABLE_BACKENDS.join(", "),
        }),
    }
}
