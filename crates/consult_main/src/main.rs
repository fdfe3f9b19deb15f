use anyhow::Result;
use clap::Parser;
use consult_main::{Cli, init_tracing, run};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    run(cli).await
}
