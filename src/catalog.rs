//! Station catalog: the fixed set of answers a round can pick from.
//!
//! The catalog is parsed once at startup from JSON embedded in the binary and
//! validated so that every later lookup can assume a non-empty, well-formed list.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Built-in catalog: Amsterdam metro stations.
const BUILTIN_STATIONS: &str = include_str!("../assets/stations.json");

/// Longitude/latitude pair in degrees. Serialized as `[lon, lat]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinates {
    pub longitude: f64,
    pub latitude: f64,
}

impl Coordinates {
    pub const fn new(longitude: f64, latitude: f64) -> Self {
        Self { longitude, latitude }
    }
}

impl From<[f64; 2]> for Coordinates {
    fn from([longitude, latitude]: [f64; 2]) -> Self {
        Self { longitude, latitude }
    }
}

impl From<Coordinates> for [f64; 2] {
    fn from(c: Coordinates) -> Self {
        [c.longitude, c.latitude]
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub id: String,
    /// Display name, also the answer key for guesses.
    pub name: String,
    pub coordinates: Coordinates,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("station catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("station catalog is empty")]
    Empty,
    #[error("duplicate station id `{0}`")]
    DuplicateId(String),
    #[error("station `{0}` has a blank name")]
    BlankName(String),
}

/// Ordered, non-empty list of stations. Read-only after construction.
#[derive(Clone, Debug, PartialEq)]
pub struct Catalog {
    stations: Vec<Station>,
}

impl Catalog {
    pub fn new(stations: Vec<Station>) -> Result<Self, CatalogError> {
        if stations.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut seen = HashSet::with_capacity(stations.len());
        for s in &stations {
            if s.name.trim().is_empty() {
                return Err(CatalogError::BlankName(s.id.clone()));
            }
            if !seen.insert(s.id.as_str()) {
                return Err(CatalogError::DuplicateId(s.id.clone()));
            }
        }
        Ok(Self { stations })
    }

    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let stations: Vec<Station> = serde_json::from_str(raw)?;
        Self::new(stations)
    }

    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_STATIONS)
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Uniformly random station. Never fails: the list is non-empty by construction.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &Station {
        &self.stations[rng.gen_range(0..self.stations.len())]
    }
}
