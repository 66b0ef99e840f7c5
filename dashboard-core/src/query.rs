use std::fmt;

use crate::geo::Coordinates;

/// Location descriptor sent to the provider as the `q` parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum Query {
    Place(String),
    Coordinates(Coordinates),
}

impl Query {
    /// Build a place query from raw user input.
    ///
    /// Returns `None` for empty or whitespace-only input.
    pub fn place(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() { None } else { Some(Query::Place(trimmed.to_string())) }
    }
}

impl From<Coordinates> for Query {
    fn from(coords: Coordinates) -> Self {
        Query::Coordinates(coords)
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Query::Place(name) => f.write_str(name),
            Query::Coordinates(c) => write!(f, "{},{}", c.latitude, c.longitude),
        }
    }
}

/// Which provider endpoint a request goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchMode {
    Current,
    #[default]
    Forecast,
}

impl FetchMode {
    pub fn endpoint(&self) -> &'static str {
        match self {
            FetchMode::Current => "current.json",
            FetchMode::Forecast => "forecast.json",
        }
    }
}
