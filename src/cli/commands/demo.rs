use crate::adapters::server::stub_backend::StubServer;
use crate::cli::commands::report;
use crate::cli::output;
use crate::core::errors::Result;
use crate::core::services::logging_proxy::LoggingProxy;
use crate::core::traits::user_service::UserService;

/// Execute the `callwatch demo` command.
///
/// Runs the canonical scripted sequence against the stub backend:
/// three saves, then two lookups, then the rendered call log. With the
/// stub every call succeeds, so the log shows five SUCCESS entries.
pub fn execute(json: bool, quiet: bool) -> Result<()> {
    if !quiet {
        output::header("callwatch demo");
        output::detail("wrapping StubServer in a logging proxy");
    }

    let proxy = LoggingProxy::new(StubServer);

    proxy.save_user(1);
    proxy.save_user(2);
    proxy.save_user(3);

    proxy.get_user(1);
    proxy.get_user(4);

    report::print_log(&proxy, json, quiet)
}
