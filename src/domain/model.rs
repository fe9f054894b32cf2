use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Interest-rate input for a single year. Seeded years start out numeric;
/// a user edit replaces the value with the raw entered text, which is only
/// coerced when the query is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RateValue {
    Number(f64),
    Text(String),
}

impl RateValue {
    /// Whether this entry contributes to the query. Numeric zero, NaN and
    /// the empty string all mean "exclude this year".
    pub fn is_active(&self) -> bool {
        match self {
            RateValue::Number(n) => *n != 0.0 && !n.is_nan(),
            RateValue::Text(s) => !s.is_empty(),
        }
    }

    /// Numeric coercion at query-build time. Non-numeric text yields NaN,
    /// which is passed through to the query unchanged rather than dropped.
    pub fn as_number(&self) -> f64 {
        match self {
            RateValue::Number(n) => *n,
            RateValue::Text(s) => s.trim().parse().unwrap_or(f64::NAN),
        }
    }
}

/// The complete set of user-adjustable inputs that determine the query.
/// Process-local, never persisted; mutated only through the pipeline's
/// setters.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    pub locations: Vec<String>,
    /// Gender code, "" meaning "any".
    pub gender: String,
    /// Plan labels. Carried in the state but not part of the query; a
    /// change here never triggers a fetch.
    pub plans: Vec<String>,
    pub age_from: Option<u32>,
    pub age_to: Option<u32>,
    /// Year -> rate, iterated in ascending-year order when the query is
    /// built. Seeded with the five configured years.
    pub year_rates: BTreeMap<String, RateValue>,
}

impl Default for FilterState {
    fn default() -> Self {
        let year_rates = [
            ("2019", 0.013),
            ("2020", 0.012),
            ("2021", 0.011),
            ("2022", 0.01),
            ("2023", 0.01),
        ]
        .into_iter()
        .map(|(year, rate)| (year.to_string(), RateValue::Number(rate)))
        .collect();

        Self {
            locations: Vec::new(),
            gender: String::new(),
            plans: Vec::new(),
            age_from: None,
            age_to: None,
            year_rates,
        }
    }
}

/// Query sent to the aggregation service. Derived from [`FilterState`] at
/// the moment of fetch and never stored independently of it. Absent filters
/// are omitted from the serialized object entirely.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Query {
    #[serde(rename = "Geschlecht", skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,

    #[serde(rename = "Standort", skip_serializing_if = "Option::is_none")]
    pub location: Option<LocationFilter>,

    #[serde(rename = "Alter", skip_serializing_if = "Option::is_none")]
    pub age: Option<AgeFilter>,

    #[serde(rename = "JahrZins")]
    pub year_rates: Vec<YearRate>,
}

/// "Value must be one of this set."
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationFilter {
    #[serde(rename = "$in")]
    pub any_of: Vec<String>,
}

/// Strictly greater than `over`, less than or equal to `up_to`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgeFilter {
    #[serde(rename = "$gt")]
    pub over: u32,
    #[serde(rename = "$lte")]
    pub up_to: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearRate {
    #[serde(rename = "jahr")]
    pub year: String,
    #[serde(rename = "zins")]
    pub rate: f64,
}

/// Payload returned by the aggregation service, passed through to the
/// rendering collaborators with no shape imposed.
pub type QueryResult = serde_json::Value;

/// What the rendering collaborators consume: the latest published payload
/// (if any fetch has succeeded yet) and the loading flag.
#[derive(Debug, Clone, Default)]
pub struct ResultView {
    pub data: Option<QueryResult>,
    pub loading: bool,
}
