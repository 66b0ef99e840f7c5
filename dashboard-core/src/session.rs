//! One dashboard session: input, fetch lifecycle and view state wired together.
//!
//! The session owns all mutable state and is driven from a single loop that
//! feeds it user actions and the [`SessionEvent`]s produced by spawned work.

use std::sync::Arc;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info, warn};

use crate::{
    WeatherProvider, WeatherRequest,
    fetcher::{FetchOutcome, Fetcher},
    geo::{Coordinates, GeoError, Geolocator},
    input::InputController,
    query::Query,
    render::{self, DashboardView},
    state::{RequestId, ViewState},
};

/// Ticket for one "use my location" lookup. Only the newest pending one is honoured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupId(pub u64);

#[derive(Debug)]
pub enum SessionEvent {
    Fetched(FetchOutcome),
    Located { lookup: LookupId, result: Result<Coordinates, GeoError> },
}

#[derive(Debug)]
pub struct Session {
    state: ViewState,
    input: InputController,
    fetcher: Fetcher,
    default_query: Query,
    started: bool,
    last_lookup: u64,
    pending_lookup: Option<LookupId>,
    events: UnboundedSender<SessionEvent>,
}

impl Session {
    pub fn new(
        provider: Arc<dyn WeatherProvider>,
        geolocator: Arc<dyn Geolocator>,
        default_query: Query,
    ) -> (Self, UnboundedReceiver<SessionEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let session = Self {
            state: ViewState::new(),
            input: InputController::new(geolocator),
            fetcher: Fetcher::new(provider, tx.clone()),
            default_query,
            started: false,
            last_lookup: 0,
            pending_lookup: None,
            events: tx,
        };
        (session, rx)
    }

    /// Issue the default query. Only the first call does anything.
    pub fn start(&mut self) -> Option<RequestId> {
        if self.started {
            return None;
        }
        self.started = true;
        self.pending_lookup = None;
        let query = self.default_query.clone();
        Some(self.fetcher.issue(&mut self.state, WeatherRequest::forecast(query)))
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn input(&self) -> &InputController {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut InputController {
        &mut self.input
    }

    /// Search for the text in the field. Ignored while loading or when blank.
    pub fn submit(&mut self) -> Option<RequestId> {
        if self.state.loading {
            return None;
        }
        let query = self.input.submit()?;
        // A newer search supersedes any lookup still in flight.
        self.pending_lookup = None;
        Some(self.fetcher.issue(&mut self.state, WeatherRequest::forecast(query)))
    }

    /// Start a location lookup; the answer arrives as [`SessionEvent::Located`].
    /// Returns `false` when the controls are disabled or a lookup is already running.
    pub fn locate(&mut self) -> bool {
        if self.state.loading || self.pending_lookup.is_some() {
            return false;
        }

        self.last_lookup += 1;
        let lookup = LookupId(self.last_lookup);
        self.pending_lookup = Some(lookup);

        let geolocator = self.input.geolocator();
        let events = self.events.clone();
        tokio::spawn(async move {
            let result = geolocator.locate().await;
            let _ = events.send(SessionEvent::Located { lookup, result });
        });
        true
    }

    pub fn handle(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::Fetched(outcome) => {
                if self.state.complete(outcome.id, outcome.result) {
                    info!(request = outcome.id.0, query = %outcome.query, "view updated");
                }
            }
            SessionEvent::Located { lookup, result } => {
                if self.pending_lookup != Some(lookup) {
                    debug!(lookup = lookup.0, "discarding superseded location lookup");
                    return;
                }
                self.pending_lookup = None;

                match InputController::resolve_location(result) {
                    Ok(query) => {
                        self.fetcher.issue(&mut self.state, WeatherRequest::forecast(query));
                    }
                    Err(err) => {
                        warn!(error = %err, "location lookup failed");
                        self.state.show_error(err.user_message());
                    }
                }
            }
        }
    }

    pub fn view(&self) -> DashboardView {
        render::render(&self.state, self.input.text())
    }
}
