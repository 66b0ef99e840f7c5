use tracing::{debug, warn};

use crate::{WeatherResponse, provider::FetchError};

/// Sequence number handed out for every issued fetch. Later requests compare greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Success,
    Failure,
}

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub data: Option<WeatherResponse>,
    pub loading: bool,
    pub error: Option<String>,
    latest: Option<RequestId>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, id: RequestId) {
        self.loading = true;
        self.error = None;
        self.latest = Some(id);
    }

    /// Apply the outcome of request `id`.
    ///
    /// Outcomes of anything but the most recently issued request are dropped.
    /// Returns whether the outcome was applied.
    pub fn complete(
        &mut self,
        id: RequestId,
        outcome: Result<WeatherResponse, FetchError>,
    ) -> bool {
        if self.latest != Some(id) {
            let latest = self.latest.map(|l| l.0);
            debug!(request = id.0, ?latest, "discarding superseded response");
            return false;
        }

        match outcome {
            Ok(data) => {
                self.data = Some(data);
                self.error = None;
            }
            Err(err) => {
                warn!(request = id.0, error = %err, "weather fetch failed");
                self.data = None;
                self.error = Some(err.user_message().to_string());
            }
        }
        self.loading = false;
        true
    }

    /// Surface an error that did not come from a fetch, e.g. a failed location lookup.
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn latest_request(&self) -> Option<RequestId> {
        self.latest
    }

    pub fn phase(&self) -> Phase {
        if self.loading {
            Phase::Loading
        } else if self.error.is_some() {
            Phase::Failure
        } else if self.data.is_some() {
            Phase::Success
        } else {
            Phase::Idle
        }
    }
}
