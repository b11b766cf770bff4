use serde::{Deserialize, Serialize};

/// A resolved device position.
///
/// Only two producers exist: `LocationAcquirer` on a successful
/// acquisition (address always filled in, via geocoding or the
/// coordinate fallback) and [`Location::new`] for an initial value
/// supplied by the UI. A `Location` never circulates without
/// coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    pub address: Option<String>,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64, address: Option<String>) -> Self {
        Self {
            latitude,
            longitude,
            address,
        }
    }
}

/// Wire shape of the position inside a hospital recommendation request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UserLocation {
    pub lat: f64,
    pub lon: f64,
}

impl From<&Location> for UserLocation {
    fn from(location: &Location) -> Self {
        Self {
            lat: location.latitude,
            lon: location.longitude,
        }
    }
}
