use std::sync::Mutex;

use crate::core::models::log_entry::{LogEntry, Operation, Outcome};
use crate::core::models::user::UserRecord;
use crate::core::traits::user_service::UserService;

/// Logging proxy over a `UserService`.
///
/// Forwards every call to the wrapped subject, classifies the result
/// into an `Outcome`, appends one `LogEntry` per call, and returns the
/// subject's result unchanged. The call log is the only side channel;
/// it lives for the proxy's lifetime and is append-only.
///
/// Implements `UserService` itself, so callers holding the port cannot
/// tell the proxy from the real backend.
pub struct LoggingProxy<S: UserService> {
    subject: S,
    logs: Mutex<Vec<LogEntry>>,
}

impl<S: UserService> LoggingProxy<S> {
    /// Wrap a subject. The proxy owns it for its whole lifetime.
    pub fn new(subject: S) -> Self {
        Self {
            subject,
            logs: Mutex::new(Vec::new()),
        }
    }

    /// Render all entries, one per line, in call order.
    ///
    /// Read-only snapshot: repeated calls without intervening
    /// operations produce identical output.
    pub fn render_logs(&self) -> String {
        self.lock_logs()
            .iter()
            .map(LogEntry::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Cloned snapshot of the call log, in call order.
    pub fn entries(&self) -> Vec<LogEntry> {
        self.lock_logs().clone()
    }

    /// Number of intercepted calls so far.
    pub fn len(&self) -> usize {
        self.lock_logs().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock_logs().is_empty()
    }

    fn record(&self, operation: Operation, outcome: Outcome) {
        self.lock_logs().push(LogEntry::now(operation, outcome));
    }

    // A poisoned lock still holds a valid append-only list: no entry
    // is ever half-written, so recover rather than propagate.
    fn lock_logs(&self) -> std::sync::MutexGuard<'_, Vec<LogEntry>> {
        self.logs.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl<S: UserService> UserService for LoggingProxy<S> {
    fn save_user(&self, id: u64) -> bool {
        let result = self.subject.save_user(id);
        let outcome = if result { Outcome::Success } else { Outcome::Error };
        self.record(Operation::SaveUser, outcome);

        result
    }

    fn get_user(&self, id: u64) -> Option<UserRecord> {
        let result = self.subject.get_user(id);
        let outcome = if result.is_some() { Outcome::Success } else { Outcome::Error };
        self.record(Operation::GetUser, outcome);

        result
    }
}
