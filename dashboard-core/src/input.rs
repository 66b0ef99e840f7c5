use std::sync::Arc;

use crate::{
    geo::{Coordinates, GeoError, Geolocator},
    query::Query,
};

/// The search field plus the "use my location" trigger.
#[derive(Debug)]
pub struct InputController {
    text: String,
    geolocator: Arc<dyn Geolocator>,
}

impl InputController {
    pub fn new(geolocator: Arc<dyn Geolocator>) -> Self {
        Self { text: String::new(), geolocator }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn insert(&mut self, c: char) {
        self.text.push(c);
    }

    pub fn backspace(&mut self) {
        self.text.pop();
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Query for the current field contents, `None` when blank.
    pub fn submit(&self) -> Option<Query> {
        Query::place(&self.text)
    }

    pub fn geolocator(&self) -> Arc<dyn Geolocator> {
        Arc::clone(&self.geolocator)
    }

    /// Ask the geolocator for a position and turn it into a `"lat,lon"` query.
    pub async fn locate(&self) -> Result<Query, GeoError> {
        Self::resolve_location(self.geolocator.locate().await)
    }

    pub fn resolve_location(located: Result<Coordinates, GeoError>) -> Result<Query, GeoError> {
        located.map(Query::from)
    }
}
