use std::sync::Arc;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use crate::core::query::build_query;
use crate::domain::model::{FilterState, RateValue, ResultView};
use crate::domain::ports::Aggregator;

/// Fetch phase of the pipeline. `Loading` is entered when a request is
/// dispatched; any completion (success or failure) returns it to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchPhase {
    Idle,
    Loading,
}

#[derive(Debug)]
struct Published {
    data: Option<serde_json::Value>,
    phase: FetchPhase,
}

/// The fetch-relevant subset of the filter state. `plans` is deliberately
/// absent: changing it never triggers a request.
#[derive(Debug, Clone, PartialEq)]
struct FetchDeps {
    locations: Vec<String>,
    gender: String,
    age_from: Option<u32>,
    age_to: Option<u32>,
    year_rates: Vec<(String, RateValue)>,
}

impl FetchDeps {
    fn of(state: &FilterState) -> Self {
        Self {
            locations: state.locations.clone(),
            gender: state.gender.clone(),
            age_from: state.age_from,
            age_to: state.age_to,
            year_rates: state
                .year_rates
                .iter()
                .map(|(year, rate)| (year.clone(), rate.clone()))
                .collect(),
        }
    }
}

/// Filter-state-to-query pipeline: holds the filter state, detects changes
/// of the fetch-relevant subset, and dispatches one aggregation request per
/// change. Results are published into a shared slot for the rendering
/// collaborators.
///
/// Overlapping requests run unguarded and whichever settles last wins the
/// publish; there is no cancellation, timeout or retry. Failures are logged
/// here and swallowed; the previously published payload stays in place.
pub struct FilterPipeline<A: Aggregator + 'static> {
    state: FilterState,
    last_deps: Option<FetchDeps>,
    aggregator: Arc<A>,
    published: Arc<Mutex<Published>>,
    in_flight: Arc<Mutex<Vec<JoinHandle<()>>>>,
}

impl<A: Aggregator + 'static> FilterPipeline<A> {
    pub fn new(aggregator: A) -> Self {
        Self {
            state: FilterState::default(),
            last_deps: None,
            aggregator: Arc::new(aggregator),
            published: Arc::new(Mutex::new(Published {
                data: None,
                phase: FetchPhase::Idle,
            })),
            in_flight: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Issue the initial request with the default state.
    pub async fn start(&mut self) {
        self.refetch_if_changed().await;
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// Apply several mutations as one batch; at most one request is issued
    /// no matter how many fields the closure touches.
    pub async fn update<F: FnOnce(&mut FilterState)>(&mut self, mutate: F) {
        mutate(&mut self.state);
        self.refetch_if_changed().await;
    }

    pub async fn set_locations(&mut self, locations: Vec<String>) {
        self.update(|state| state.locations = locations).await;
    }

    pub async fn set_gender(&mut self, gender: impl Into<String>) {
        let gender = gender.into();
        self.update(|state| state.gender = gender).await;
    }

    pub async fn set_age_from(&mut self, from: Option<u32>) {
        self.update(|state| state.age_from = from).await;
    }

    pub async fn set_age_to(&mut self, to: Option<u32>) {
        self.update(|state| state.age_to = to).await;
    }

    /// Inert by design: stored, but neither queried nor a fetch trigger.
    pub async fn set_plans(&mut self, plans: Vec<String>) {
        self.update(|state| state.plans = plans).await;
    }

    /// Store the raw entered text for a year; coercion happens at
    /// query-build time.
    pub async fn set_year_rate(&mut self, year: &str, raw: impl Into<String>) {
        let value = RateValue::Text(raw.into());
        let year = year.to_string();
        self.update(|state| {
            state.year_rates.insert(year, value);
        })
        .await;
    }

    async fn refetch_if_changed(&mut self) {
        let deps = FetchDeps::of(&self.state);
        if self.last_deps.as_ref() == Some(&deps) {
            return;
        }
        self.last_deps = Some(deps);

        let query = build_query(&self.state);
        tracing::debug!("Filter change, dispatching aggregation request");

        self.published.lock().await.phase = FetchPhase::Loading;

        let aggregator = Arc::clone(&self.aggregator);
        let published = Arc::clone(&self.published);
        let handle = tokio::spawn(async move {
            match aggregator.find(&query).await {
                Ok(payload) => {
                    let mut published = published.lock().await;
                    published.data = Some(payload);
                    published.phase = FetchPhase::Idle;
                }
                Err(err) => {
                    // Logged and swallowed: the previous payload stays
                    // published, nothing reaches the renderers, no retry.
                    tracing::warn!("Aggregation request failed: {}", err);
                    published.lock().await.phase = FetchPhase::Idle;
                }
            }
        });
        self.in_flight.lock().await.push(handle);
    }

    /// Snapshot for the rendering collaborators.
    pub async fn view(&self) -> ResultView {
        let published = self.published.lock().await;
        ResultView {
            data: published.data.clone(),
            loading: published.phase == FetchPhase::Loading,
        }
    }

    /// Wait for every dispatched request to settle. The pipeline itself
    /// never awaits its own requests; this is for drivers and tests.
    pub async fn settled(&self) {
        loop {
            let handle = self.in_flight.lock().await.pop();
            match handle {
                Some(handle) => {
                    let _ = handle.await;
                }
                None => break,
            }
        }
    }
}
