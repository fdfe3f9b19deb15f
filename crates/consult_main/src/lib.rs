mod ask;
mod cli;
mod logging;
mod runner;
mod server;

pub use cli::{Cli, Command};
pub use logging::init_tracing;
pub use runner::run;
pub use server::{AppState, router};
