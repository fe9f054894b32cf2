pub mod orchestrator;
pub mod query;

pub use crate::domain::model::{FilterState, Query, QueryResult, ResultView};
pub use crate::domain::ports::{Aggregator, ConfigProvider};
pub use crate::utils::error::Result;
