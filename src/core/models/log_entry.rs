use serde::{Deserialize, Serialize};

/// Classification of one intercepted call's result.
///
/// `Error` covers a `false` save and an absent lookup alike; there is
/// no partial success.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Success,
    Error,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Success => write!(f, "SUCCESS"),
            Outcome::Error => write!(f, "ERROR"),
        }
    }
}

/// Operations of the user service that get recorded in the call log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    SaveUser,
    GetUser,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::SaveUser => write!(f, "SaveUser"),
            Operation::GetUser => write!(f, "GetUser"),
        }
    }
}

/// A single entry in the call log. Created once per intercepted call,
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub operation: Operation,
    pub outcome: Outcome,
}

impl LogEntry {
    /// Build an entry stamped with the current time.
    pub fn now(operation: Operation, outcome: Outcome) -> Self {
        Self {
            timestamp: chrono::Utc::now(),
            operation,
            outcome,
        }
    }
}

impl std::fmt::Display for LogEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "date: {}, info: Called {} method, response: {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.outcome,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn outcome_renders_uppercase() {
        assert_eq!(Outcome::Success.to_string(), "SUCCESS");
        assert_eq!(Outcome::Error.to_string(), "ERROR");
    }

    #[test]
    fn entry_renders_expected_line() {
        let entry = LogEntry {
            timestamp: chrono::Utc.with_ymd_and_hms(2026, 3, 14, 9, 26, 53).unwrap(),
            operation: Operation::SaveUser,
            outcome: Outcome::Success,
        };

        assert_eq!(
            entry.to_string(),
            "date: 2026-03-14 09:26:53 UTC, info: Called SaveUser method, response: SUCCESS"
        );
    }

    #[test]
    fn get_user_error_line() {
        let entry = LogEntry {
            timestamp: chrono::Utc.with_ymd_and_hms(2026, 3, 14, 9, 27, 0).unwrap(),
            operation: Operation::GetUser,
            outcome: Outcome::Error,
        };

        assert_eq!(
            entry.to_string(),
            "date: 2026-03-14 09:27:00 UTC, info: Called GetUser method, response: ERROR"
        );
    }

    #[test]
    fn serializes_snake_case() {
        let entry = LogEntry::now(Operation::GetUser, Outcome::Error);
        let json = serde_json::to_string(&entry).unwrap();

        assert!(json.contains("\"operation\":\"get_user\""));
        assert!(json.contains("\"outcome\":\"error\""));
    }
}
