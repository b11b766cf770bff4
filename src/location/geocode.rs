use std::future::Future;

use thiserror::Error;

/// Reverse geocoding failure. Absorbed by the acquirer, which degrades
/// to the coordinate-formatted address and never fails an acquisition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("주소 변환에 실패했습니다: {0}")]
pub struct GeocodeError(pub String);

/// Conversion of coordinates to a human-readable address string.
///
/// Async and fallible so a network-backed geocoder can replace the
/// placeholder without changing `LocationAcquirer`.
pub trait ReverseGeocode {
    fn reverse(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> impl Future<Output = Result<String, GeocodeError>> + Send;
}

/// Coordinate pair rendered the way the UI shows an unresolved address:
/// six decimal digits for each axis.
pub fn format_coordinates(latitude: f64, longitude: f64) -> String {
    format!("위도: {latitude:.6}, 경도: {longitude:.6}")
}

/// Placeholder geocoder: echoes the coordinates back as the address.
#[derive(Debug, Default, Clone, Copy)]
pub struct CoordinateGeocoder;

impl ReverseGeocode for CoordinateGeocoder {
    async fn reverse(&self, latitude: f64, longitude: f64) -> Result<String, GeocodeError> {
        Ok(format_coordinates(latitude, longitude))
    }
}
