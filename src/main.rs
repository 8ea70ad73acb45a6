//! `mcp`: Blockscout on-chain data over the Model Context Protocol.

use anyhow::Context;
use blockscout_cli::{CliArgs, McpApp};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    let app = McpApp::from_args(&args).context("failed to load configuration")?;
    app.run(args).await?;
    Ok(())
}
