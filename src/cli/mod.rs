pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

/// Wrap your services. Watch every call.
#[derive(Parser, Debug)]
#[command(name = "callwatch", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Server backend to wrap (stub, memory)
    #[arg(long, global = true)]
    pub backend: Option<String>,

    /// Emit the call log as JSON lines instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output: print each call as it is issued
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode: only show the call log
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to alternative config file
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Issue a sequence of calls through the proxy and print the log
    Run {
        /// Calls to issue, in order: save:<id> or get:<id>
        #[arg(required = true)]
        calls: Vec<String>,
    },

    /// Run the canonical scripted sequence against the stub backend
    Demo,
}
