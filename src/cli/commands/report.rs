use crate::cli::output;
use crate::core::errors::{CallwatchError, Result};
use crate::core::services::logging_proxy::LoggingProxy;
use crate::core::traits::user_service::UserService;

/// Print the proxy's call log, as text lines or JSON lines.
///
/// Shared by `run` and `demo`. Text mode prints the rendered snapshot
/// verbatim; JSON mode serializes one entry per line.
pub fn print_log<S: UserService>(proxy: &LoggingProxy<S>, json: bool, quiet: bool) -> Result<()> {
    if proxy.is_empty() {
        if !quiet {
            output::warning("No calls recorded");
        }
        return Ok(());
    }

    if !quiet {
        output::header(&format!("callwatch log ({} calls)", proxy.len()));
        println!();
    }

    if json {
        for entry in proxy.entries() {
            let line = serde_json::to_string(&entry).map_err(|e| CallwatchError::LogError {
                detail: format!("Failed to serialize log entry: {e}"),
            })?;
            println!("{line}");
        }
    } else {
        println!("{}", proxy.render_logs());
    }

    Ok(())
}
