use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;
use tracing::info;

use crate::{
    WeatherProvider, WeatherRequest, WeatherResponse,
    provider::FetchError,
    query::Query,
    session::SessionEvent,
    state::{RequestId, ViewState},
};

/// Result of one spawned fetch, delivered back to the session loop.
#[derive(Debug)]
pub struct FetchOutcome {
    pub id: RequestId,
    pub query: Query,
    pub result: Result<WeatherResponse, FetchError>,
}

/// Issues one provider call per query and numbers them.
#[derive(Debug)]
pub struct Fetcher {
    provider: Arc<dyn WeatherProvider>,
    last_id: u64,
    events: UnboundedSender<SessionEvent>,
}

impl Fetcher {
    pub fn new(provider: Arc<dyn WeatherProvider>, events: UnboundedSender<SessionEvent>) -> Self {
        Self { provider, last_id: 0, events }
    }

    /// Mark `state` as loading and spawn the request. The outcome arrives as
    /// [`SessionEvent::Fetched`]. Must be called from within a tokio runtime.
    pub fn issue(&mut self, state: &mut ViewState, request: WeatherRequest) -> RequestId {
        self.last_id += 1;
        let id = RequestId(self.last_id);
        state.begin(id);
        info!(request = id.0, query = %request.query, mode = ?request.mode, "fetching weather");

        let provider = Arc::clone(&self.provider);
        let events = self.events.clone();
        tokio::spawn(async move {
            let result = provider.get_weather(&request).await;
            let outcome = FetchOutcome { id, query: request.query, result };
            // The receiver is gone once the session has shut down.
            let _ = events.send(SessionEvent::Fetched(outcome));
        });

        id
    }
}

/// Run a single request to completion against `state`, without spawning.
pub async fn fetch_once(
    provider: &dyn WeatherProvider,
    state: &mut ViewState,
    request: WeatherRequest,
) -> RequestId {
    let id = RequestId(state.latest_request().map_or(1, |r| r.0 + 1));
    state.begin(id);
    info!(request = id.0, query = %request.query, mode = ?request.mode, "fetching weather");

    let result = provider.get_weather(&request).await;
    state.complete(id, result);
    id
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MockProvider, sample_response};
    use tokio::sync::mpsc;

    #[tokio::test]
    async fn issue_numbers_requests_and_reports_outcome() {
        let provider = Arc::new(MockProvider::new().respond("Jaipur", sample_response("Jaipur")));
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut fetcher = Fetcher::new(provider.clone(), tx);
        let mut state = ViewState::new();

        let id = fetcher.issue(&mut state, WeatherRequest::forecast(Query::Place("Jaipur".into())));
        assert_eq!(id, RequestId(1));
        assert!(state.loading);

        let Some(SessionEvent::Fetched(outcome)) = rx.recv().await else {
            panic!("expected a fetch outcome");
        };
        assert_eq!(outcome.id, id);
        assert_eq!(outcome.query, Query::Place("Jaipur".into()));
        assert!(outcome.result.is_ok());
        assert_eq!(provider.calls().len(), 1);

        let second = fetcher.issue(&mut state, WeatherRequest::forecast(Query::Place("Oslo".into())));
        assert_eq!(second, RequestId(2));
    }

    #[tokio::test]
    async fn fetch_once_applies_result() {
        let provider = MockProvider::new();
        let mut state = ViewState::new();

        fetch_once(&provider, &mut state, WeatherRequest::forecast(Query::Place("Nowhere123".into())))
            .await;

        assert!(!state.loading);
        assert!(state.data.is_none());
        assert_eq!(state.error.as_deref(), Some("City not found"));
    }
}
