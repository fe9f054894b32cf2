use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "dbo-insights")]
#[command(about = "Client pipeline for the DBO insights aggregation service")]
pub struct CliConfig {
    #[arg(long, default_value = "http://localhost:3030/aggregator")]
    pub service_url: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn service_url(&self) -> &str {
        &self.service_url
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("service_url", &self.service_url)
    }
}
