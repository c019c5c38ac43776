use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use genmix_core::{GenMixError, IndexResponse, SeriesId, SeriesResponse, TimeSeriesSource};

/// Instruction for how a method should behave for a given series.
#[derive(Clone)]
pub enum MockBehavior<T> {
    /// Return the provided value immediately.
    Return(T),
    /// Return the provided value after a delay.
    Delay(Duration, T),
    /// Fail immediately with the provided error.
    Fail(GenMixError),
    /// Hang indefinitely (simulate a stalled fetch).
    Hang,
}

#[derive(Default)]
struct InternalState {
    index_rules: HashMap<SeriesId, MockBehavior<IndexResponse>>,
    series_rules: HashMap<SeriesId, MockBehavior<SeriesResponse>>,
    index_requests: Vec<SeriesId>,
    series_requests: Vec<(SeriesId, i64)>,
}

/// Controller handle used by tests to drive the dynamic mock from the outside.
pub struct DynamicMockController {
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockController {
    /// Set the behavior for `latest_index` calls for a specific series.
    pub async fn set_index_behavior(
        &self,
        series: SeriesId,
        behavior: MockBehavior<IndexResponse>,
    ) {
        let mut guard = self.state.lock().await;
        guard.index_rules.insert(series, behavior);
    }

    /// Set the behavior for `series` calls for a specific series.
    pub async fn set_series_behavior(
        &self,
        series: SeriesId,
        behavior: MockBehavior<SeriesResponse>,
    ) {
        let mut guard = self.state.lock().await;
        guard.series_rules.insert(series, behavior);
    }

    /// Return the series whose index was requested, in call order.
    pub async fn index_requests(&self) -> Vec<SeriesId> {
        self.state.lock().await.index_requests.clone()
    }

    /// Return the `(series, index_ts)` pairs requested, in call order.
    pub async fn series_requests(&self) -> Vec<(SeriesId, i64)> {
        self.state.lock().await.series_requests.clone()
    }

    /// Clear all configured behaviors and request logs.
    pub async fn clear_all_behaviors(&self) {
        let mut guard = self.state.lock().await;
        guard.index_rules.clear();
        guard.series_rules.clear();
        guard.index_requests.clear();
        guard.series_requests.clear();
    }
}

/// A source that defers all behavior to an external controller.
pub struct DynamicMockSource {
    name: &'static str,
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockSource {
    /// Create a new dynamic mock source and its controller.
    #[must_use]
    pub fn new_with_controller(
        name: &'static str,
    ) -> (Arc<dyn TimeSeriesSource>, DynamicMockController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        let controller = DynamicMockController {
            state: Arc::clone(&state),
        };
        let me = Arc::new(Self { name, state });
        (me as Arc<dyn TimeSeriesSource>, controller)
    }

    async fn play<T>(behavior: Option<MockBehavior<T>>, what: &str) -> Result<T, GenMixError> {
        match behavior {
            Some(MockBehavior::Return(v)) => Ok(v),
            Some(MockBehavior::Delay(d, v)) => {
                tokio::time::sleep(d).await;
                Ok(v)
            }
            Some(MockBehavior::Fail(e)) => Err(e),
            Some(MockBehavior::Hang) => {
                std::future::pending::<()>().await;
                unreachable!()
            }
            None => Err(GenMixError::Other(format!("no mock behavior for {what}"))),
        }
    }
}

#[async_trait]
impl TimeSeriesSource for DynamicMockSource {
    fn name(&self) -> &'static str {
        self.name
    }

    fn vendor(&self) -> &'static str {
        "DynamicMock"
    }

    async fn latest_index(&self, series: SeriesId) -> Result<IndexResponse, GenMixError> {
        // Acquire behavior snapshot without holding the lock across await points
        let behavior = {
            let mut guard = self.state.lock().await;
            guard.index_requests.push(series);
            guard.index_rules.get(&series).cloned()
        };
        Self::play(behavior, &format!("index of {series}")).await
    }

    async fn series(
        &self,
        series: SeriesId,
        index_ts: i64,
    ) -> Result<SeriesResponse, GenMixError> {
        let behavior = {
            let mut guard = self.state.lock().await;
            guard.series_requests.push((series, index_ts));
            guard.series_rules.get(&series).cloned()
        };
        Self::play(behavior, &format!("series {series}")).await
    }
}
