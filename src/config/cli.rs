use crate::config::Config;
use crate::core::loader::RowPolicy;
use crate::core::lookup::IdFormat;
use crate::utils::error::Result;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "promo-lookup")]
#[command(about = "Serve promotions loaded from a CSV file over HTTP")]
pub struct CliArgs {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Path to the promotions CSV file
    #[arg(short, long)]
    pub data: Option<String>,

    #[arg(long)]
    pub host: Option<String>,

    #[arg(short, long)]
    pub port: Option<u16>,

    /// How to treat rows with fewer than three fields
    #[arg(long, value_enum)]
    pub row_policy: Option<RowPolicy>,

    /// Accepted identifier shape on the lookup route
    #[arg(long, value_enum)]
    pub id_format: Option<IdFormat>,

    /// Emit logs as JSON
    #[arg(long)]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliArgs {
    /// Loads the config file when one was given, then applies flag overrides.
    pub fn into_config(self) -> Result<Config> {
        let base = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };
        Ok(self.apply(base))
    }

    pub fn apply(self, mut config: Config) -> Config {
        if let Some(data) = self.data {
            config.dataset.path = data;
        }
        if let Some(host) = self.host {
            config.server.host = host;
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(row_policy) = self.row_policy {
            config.dataset.row_policy = row_policy;
        }
        if let Some(id_format) = self.id_format {
            config.lookup.id_format = id_format;
        }
        config
    }
}
