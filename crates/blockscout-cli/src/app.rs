//! Application entry: logging setup and command dispatch.

use blockscout_core::{BlockscoutClient, ChainId, Error, Result};
use blockscout_mcp::{OnChainServer, serve_stdio};
use tracing_subscriber::EnvFilter;

use crate::cli::{CliArgs, Command};
use crate::config::McpConfig;
use crate::config_handlers;

// ============================================================================
// McpApp
// ============================================================================

/// The `mcp` command line application.
pub struct McpApp {
    name: String,
    version: String,
    config: McpConfig,
}

impl McpApp {
    /// Create from CLI args, loading config from file/env.
    pub fn from_args(args: &CliArgs) -> Result<Self> {
        let config = McpConfig::load(args.config.as_deref())?;
        Ok(Self::new(config))
    }

    /// Create an application with an already-loaded config.
    pub fn new(config: McpConfig) -> Self {
        Self {
            name: config.project_name.clone(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            config,
        }
    }

    /// Override the version string.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// The loaded configuration.
    pub fn config(&self) -> &McpConfig {
        &self.config
    }

    /// Initialise tracing-based logging on stderr.
    ///
    /// Uses `RUST_LOG` env var if set, otherwise defaults based on verbosity flags.
    /// Stdout is reserved for the MCP protocol.
    pub fn init_logging(&self, verbose: bool, quiet: bool) {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else if quiet {
            EnvFilter::new("warn")
        } else if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        };

        // A subscriber may already be set (e.g. in tests).
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    }

    /// Build a Blockscout client from the loaded config.
    pub fn client(&self) -> Result<BlockscoutClient> {
        BlockscoutClient::new(self.config.client_config()?)
    }

    /// Run the CLI with the given arguments.
    pub async fn run(&self, args: CliArgs) -> Result<()> {
        self.init_logging(args.verbose, args.quiet);

        match args.command {
            None | Some(Command::Serve) => self.serve().await,
            Some(Command::Version) => {
                println!("{} {}", self.name, self.version);
                Ok(())
            }
            Some(Command::Health { chain_id }) => self.health(chain_id).await,
            Some(Command::Chain { chain_id }) => self.chain(chain_id).await,
            Some(Command::Tools) => self.list_tools(),
            Some(Command::Config(config_cmd)) => {
                config_handlers::handle_config_command(args.config.as_deref(), config_cmd.command)
            }
        }
    }

    async fn serve(&self) -> Result<()> {
        let client = self.client()?;
        tracing::info!(
            version = %self.version,
            registry = client.registry().base_url(),
            "starting {}",
            self.name
        );
        serve_stdio(OnChainServer::new(client)).await
    }

    async fn health(&self, chain_id: ChainId) -> Result<()> {
        let client = self.client()?;
        let explorer = client.registry().explorer_url(chain_id).await?;
        match client.get_stats(chain_id).await {
            Ok(_) => {
                println!("{}: chain {chain_id} explorer {explorer} is reachable", self.name);
                Ok(())
            }
            Err(e) => {
                eprintln!("{}: chain {chain_id} explorer {explorer} is unreachable", self.name);
                Err(e)
            }
        }
    }

    async fn chain(&self, chain_id: ChainId) -> Result<()> {
        let info = self.client()?.chain_info(chain_id).await?;
        let json = serde_json::to_string_pretty(&info).map_err(Error::from)?;
        println!("{json}");
        Ok(())
    }

    fn list_tools(&self) -> Result<()> {
        let server = OnChainServer::new(self.client()?);
        let mut tools = server.tools();
        tools.sort_by(|a, b| a.name.cmp(&b.name));
        for tool in tools {
            println!(
                "{:<45} {}",
                tool.name,
                tool.description.as_deref().unwrap_or_default()
            );
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn mock_config(server: &MockServer) -> McpConfig {
        let mut config = McpConfig::default();
        config.registry.url = format!("{}/api/chains", server.uri());
        config.http.max_retries = 0;
        config.explorers.insert("1".into(), server.uri());
        config
    }

    #[test]
    fn test_app_new() {
        let app = McpApp::new(McpConfig::default()).with_version("1.2.3");
        assert_eq!(app.name, "blockscout-mcp");
        assert_eq!(app.version, "1.2.3");
        assert_eq!(app.config().http.timeout_secs, 30);
    }

    #[test]
    fn test_app_from_args_with_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "project_name = \"from-file\"\n").unwrap();

        let args = CliArgs::parse_from(["mcp", "--config", path.to_str().unwrap()]);
        let app = McpApp::from_args(&args).unwrap();
        assert_eq!(app.name, "from-file");
    }

    #[test]
    fn test_client_rejects_invalid_config() {
        let mut config = McpConfig::default();
        config.explorers.insert("base".into(), "https://base.blockscout.com".into());
        assert!(McpApp::new(config).client().is_err());
    }

    #[tokio::test]
    async fn test_run_version_command() {
        let app = McpApp::new(McpConfig::default());
        let args = CliArgs::parse_from(["mcp", "version"]);
        assert!(app.run(args).await.is_ok());
    }

    #[tokio::test]
    async fn test_run_tools_command() {
        let app = McpApp::new(McpConfig::default());
        let args = CliArgs::parse_from(["mcp", "tools"]);
        assert!(app.run(args).await.is_ok());
    }

    #[tokio::test]
    async fn test_run_health_command() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v2/stats"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .expect(1)
            .mount(&server)
            .await;

        let app = McpApp::new(mock_config(&server));
        let args = CliArgs::parse_from(["mcp", "health"]);
        assert!(app.run(args).await.is_ok());
    }

    #[tokio::test]
    async fn test_run_health_command_unreachable() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v2/stats"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let app = McpApp::new(mock_config(&server));
        let args = CliArgs::parse_from(["mcp", "health", "--chain-id", "1"]);
        assert!(app.run(args).await.is_err());
    }

    #[tokio::test]
    async fn test_run_chain_command() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/chains/100"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "name": "Gnosis",
                "explorers": [{"url": "https://gnosis.blockscout.com/"}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let app = McpApp::new(mock_config(&server));
        let args = CliArgs::parse_from(["mcp", "chain", "100"]);
        assert!(app.run(args).await.is_ok());
    }

    #[tokio::test]
    async fn test_run_chain_command_unknown() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/chains/424242"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let app = McpApp::new(mock_config(&server));
        let args = CliArgs::parse_from(["mcp", "chain", "424242"]);
        let err = app.run(args).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_run_config_command_dispatch() {
        let app = McpApp::new(McpConfig::default());
        let args = CliArgs::parse_from(["mcp", "config", "path"]);
        assert!(app.run(args).await.is_ok());
    }

    #[test]
    fn test_init_logging() {
        let app = McpApp::new(McpConfig::default());
        app.init_logging(false, false);
        app.init_logging(true, false);
        app.init_logging(false, true);
    }
}
