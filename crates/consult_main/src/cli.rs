use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "consult", version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Enable verbose logging.
    ///
    /// Raises the default log level from `info` to `debug`. `RUST_LOG`
    /// still takes precedence when set.
    #[arg(long, short = 'v', global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Ask an expert a single question and print the answer.
    Ask {
        /// Expert to consult: `sales` or `marketing`.
        #[arg(long, short = 'r', default_value = "sales")]
        role: String,

        /// The question. Read from stdin when omitted.
        text: Option<String>,
    },

    /// Serve the consultation form over HTTP.
    Serve {
        /// Address to listen on. Defaults to the configured `bind`.
        #[arg(long, short = 'b')]
        bind: Option<String>,
    },

    /// List the experts that can be consulted.
    Roles,
}
