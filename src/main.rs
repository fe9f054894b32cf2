use clap::Parser;
use dbo_insights::domain::reference;
use dbo_insights::utils::{logger, validation::Validate};
use dbo_insights::{CliConfig, FilterPipeline, HttpAggregator};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting dbo-insights client");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
        tracing::debug!("Filterable locations: {:?}", reference::LOCATIONS);
        tracing::debug!("Gender codes: {:?}", reference::GENDERS);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let aggregator = HttpAggregator::new(config.service_url.clone());
    let mut pipeline = FilterPipeline::new(aggregator);

    // One fetch with the default filter state, then print whatever the
    // service published.
    pipeline.start().await;
    pipeline.settled().await;

    let view = pipeline.view().await;
    match view.data {
        Some(payload) => println!("{}", serde_json::to_string_pretty(&payload)?),
        None => println!("No data published (request failed, see logs)"),
    }

    Ok(())
}
