pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::http::HttpAggregator;
pub use config::CliConfig;
pub use core::orchestrator::{FetchPhase, FilterPipeline};
pub use core::query::build_query;
pub use domain::model::{FilterState, Query, QueryResult, RateValue, ResultView};
pub use utils::error::{InsightsError, Result};
