use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser};
use freshguard_core::domain::{
    common::FreshguardConfig, freshness::value_objects::PredictorConfig,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "freshguard-api", version, about = "FreshGuard freshness prediction API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub log: LogArgs,

    #[command(flatten)]
    pub predictor: PredictorArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix prepended to every route, e.g. "/api"
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,

    /// Do not install the Prometheus recorder nor expose /metrics
    #[arg(long = "disable-metrics", env = "DISABLE_METRICS")]
    pub disable_metrics: bool,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    /// tracing-subscriber filter directive, overridden by RUST_LOG when set
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON")]
    pub json: bool,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct PredictorArgs {
    /// JSON file overriding the default scoring constants
    #[arg(long = "predictor-config", env = "PREDICTOR_CONFIG")]
    pub config_path: Option<PathBuf>,
}

impl TryFrom<Args> for FreshguardConfig {
    type Error = anyhow::Error;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let predictor = match args.predictor.config_path {
            Some(path) => {
                let json = std::fs::read_to_string(&path).map_err(|e| {
                    anyhow::anyhow!("failed to read predictor config {}: {e}", path.display())
                })?;
                PredictorConfig::from_json(&json)?
            }
            None => PredictorConfig::default(),
        };

        Ok(FreshguardConfig { predictor })
    }
}
