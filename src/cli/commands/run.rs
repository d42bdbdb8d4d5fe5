use crate::adapters::server;
use crate::cli::commands::report;
use crate::cli::output;
use crate::core::errors::Result;
use crate::core::models::call_op::CallOp;
use crate::core::services::logging_proxy::LoggingProxy;
use crate::core::traits::user_service::UserService;

/// Execute the `callwatch run` command.
///
/// Parses the call specs, issues them in order through a logging proxy
/// over the selected backend, then prints the call log. Parsing happens
/// up front so a bad spec fails before any call is issued.
pub fn execute(
    calls: &[String],
    backend: &str,
    json: bool,
    verbose: bool,
    quiet: bool,
) -> Result<()> {
    let ops = calls
        .iter()
        .map(|spec| spec.parse::<CallOp>())
        .collect::<Result<Vec<_>>>()?;

    let subject = server::from_name(backend)?;
    let proxy = LoggingProxy::new(subject);

    for op in &ops {
        issue(&proxy, *op, verbose);
    }

    report::print_log(&proxy, json, quiet)
}

/// Issue one call through the proxy, narrating it in verbose mode.
fn issue<S: UserService>(proxy: &LoggingProxy<S>, op: CallOp, verbose: bool) {
    match op {
        CallOp::Save(id) => {
            let saved = proxy.save_user(id);
            if verbose {
                if saved {
                    output::success(&format!("save_user({id}) -> true"));
                } else {
                    output::warning(&format!("save_user({id}) -> false"));
                }
            }
        }
        CallOp::Get(id) => {
            let user = proxy.get_user(id);
            if verbose {
                match user {
                    Some(user) => output::success(&format!("get_user({id}) -> {user}")),
                    None => output::warning(&format!("get_user({id}) -> absent")),
                }
            }
        }
    }
}
