use std::str::FromStr;

use crate::core::errors::CallwatchError;

/// One call to issue against the proxied service, parsed from a CLI
/// spec of the form `save:<id>` or `get:<id>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallOp {
    Save(u64),
    Get(u64),
}

impl FromStr for CallOp {
    type Err = CallwatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CallwatchError::InvalidCallSpec { spec: s.to_string() };

        let (op, id) = s.split_once(':').ok_or_else(invalid)?;
        let id: u64 = id.trim().parse().map_err(|_| invalid())?;

        match op.trim().to_lowercase().as_str() {
            "save" => Ok(CallOp::Save(id)),
            "get" => Ok(CallOp::Get(id)),
            _ => Err(invalid()),
        }
    }
}
