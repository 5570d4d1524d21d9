use anyhow::Result;
use auteur_pipeline::PipelineExecutor;
use auteur_server::{ObservabilityConfig, ServerConfig, init_observability, serve, shutdown_observability};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about = "Auteur script-to-video server", long_about = None)]
struct Args {
    /// TOML configuration file
    #[arg(short, long, env = "AUTEUR_CONFIG")]
    config: Option<PathBuf>,

    /// Address to bind (e.g., "0.0.0.0:3000")
    #[arg(short, long)]
    bind: Option<String>,

    /// Ceiling on a whole job, in seconds
    #[arg(long)]
    max_duration_secs: Option<u64>,

    /// Emit JSON-formatted logs (`--json-logs=false` turns them off)
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    json_logs: Option<bool>,

    /// Export tracing spans to stdout (`--stdout-spans=false` turns it off)
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    stdout_spans: Option<bool>,
}

impl Args {
    fn into_config(self) -> Result<ServerConfig> {
        let base = match &self.config {
            Some(path) => ServerConfig::from_file(path)?,
            None => ServerConfig::default(),
        };
        self.merge(base.with_env_overrides()?)
    }

    /// Layer command-line values over `base`; flags left unset keep its values.
    fn merge(self, base: ServerConfig) -> Result<ServerConfig> {
        let config = ServerConfig::builder()
            .bind_address(self.bind.unwrap_or_else(|| base.bind_address().clone()))
            .max_duration_secs(self.max_duration_secs.unwrap_or(*base.max_duration_secs()))
            .json_logs(self.json_logs.unwrap_or(*base.json_logs()))
            .stdout_spans(self.stdout_spans.unwrap_or(*base.stdout_spans()))
            .log_level(base.log_level().clone())
            .build()?;
        config.validate()?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine
    dotenvy::dotenv().ok();

    let config = Args::parse().into_config()?;
    init_observability(&ObservabilityConfig::from(&config)).map_err(|e| anyhow::anyhow!(e))?;

    info!(
        bind = %config.bind_address(),
        max_duration_secs = config.max_duration_secs(),
        "Starting Auteur server"
    );

    let result = serve(&config, PipelineExecutor::default()).await;
    shutdown_observability();
    result?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enabled_base() -> ServerConfig {
        ServerConfig::builder()
            .json_logs(true)
            .stdout_spans(true)
            .build()
            .unwrap()
    }

    #[test]
    fn bare_flags_enable_settings() {
        let args = Args::try_parse_from(["auteur-server", "--json-logs", "--stdout-spans"]).unwrap();
        let config = args.merge(ServerConfig::default()).unwrap();
        assert!(*config.json_logs());
        assert!(*config.stdout_spans());
    }

    #[test]
    fn explicit_false_overrides_base() {
        let args =
            Args::try_parse_from(["auteur-server", "--json-logs=false", "--stdout-spans=false"]).unwrap();
        let config = args.merge(enabled_base()).unwrap();
        assert!(!*config.json_logs());
        assert!(!*config.stdout_spans());
    }

    #[test]
    fn absent_flags_keep_base() {
        let args = Args::try_parse_from(["auteur-server", "--max-duration-secs", "45"]).unwrap();
        let config = args.merge(enabled_base()).unwrap();
        assert!(*config.json_logs());
        assert!(*config.stdout_spans());
        assert_eq!(*config.max_duration_secs(), 45);
    }

    #[test]
    fn zero_ceiling_from_cli_is_rejected() {
        let args = Args::try_parse_from(["auteur-server", "--max-duration-secs", "0"]).unwrap();
        assert!(args.merge(ServerConfig::default()).is_err());
    }
}
