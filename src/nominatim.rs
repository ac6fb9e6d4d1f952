use std::{
    thread,
    time::{Duration, Instant},
};

use anyhow::Result;
use serde::Deserialize;
use ureq::Agent;

use crate::coords::Coordinate;

const ENDPOINT: &str = "https://nominatim.openstreetmap.org/search";

// Nominatim caps bulk geocoding at one request per second.
const PERIOD: Duration = Duration::from_secs(1);

const STATE: &str = "Paraíba";
const STATE_SHORT: &str = "PB";

/// Blocks the caller until the next call fits inside the rate window.
pub struct RateLimiter {
    period: Duration,
    last: Option<Instant>,
}

impl RateLimiter {
    pub fn new(period: Duration) -> Self {
        RateLimiter { period, last: None }
    }

    pub fn wait(&mut self) {
        if let Some(last) = self.last {
            let elapsed = last.elapsed();
            if elapsed < self.period {
                thread::sleep(self.period - elapsed);
            }
        }
        self.last = Some(Instant::now());
    }
}

pub struct Geocoder {
    agent: Agent,
    limiter: RateLimiter,
}

impl Geocoder {
    pub fn new() -> Self {
        Geocoder {
            agent: crate::utils::agent(),
            limiter: RateLimiter::new(PERIOD),
        }
    }

    /// Single-result search. `Ok(None)` means Nominatim had no match;
    /// transport and parse failures stay errors so callers can tell the two
    /// apart.
    pub fn search(&mut self, query: &str) -> Result<Option<Coordinate>> {
        self.limiter.wait();
        let places: Vec<Place> = self
            .agent
            .get(ENDPOINT)
            .query("q", query)
            .query("format", "json")
            .query("limit", "1")
            .query("addressdetails", "0")
            .call()?
            .into_json()?;
        match places.first() {
            Some(place) => Ok(Some(place.coordinate()?)),
            None => Ok(None),
        }
    }
}

// lat/lon arrive as JSON strings
#[derive(Debug, Deserialize)]
pub struct Place {
    lat: String,
    lon: String,
}

impl Place {
    pub fn coordinate(&self) -> Result<Coordinate> {
        Ok(Coordinate::new(self.lat.parse()?, self.lon.parse()?))
    }
}

/// Per-municipality outcome.
pub enum Resolution {
    Primary(Coordinate),
    Fallback(Coordinate),
    NotFound,
    Failed(anyhow::Error),
}

/// Query with the full state name first, then once more with the
/// abbreviation. Only a clean miss triggers the fallback; an error on either
/// query gives up on the item.
pub fn resolve(
    mut search: impl FnMut(&str) -> Result<Option<Coordinate>>,
    name: &str,
) -> Resolution {
    match search(&format!("{name}, {STATE}, Brasil")) {
        Ok(Some(x)) => Resolution::Primary(x),
        Ok(None) => match search(&format!("{name}, {STATE_SHORT}, Brasil")) {
            Ok(Some(x)) => Resolution::Fallback(x),
            Ok(None) => Resolution::NotFound,
            Err(e) => Resolution::Failed(e),
        },
        Err(e) => Resolution::Failed(e),
    }
}
