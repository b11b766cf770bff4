use std::sync::Mutex;

use crate::models::Location;

use super::geocode::{format_coordinates, ReverseGeocode};
use super::provider::{PositionOptions, PositionProvider};
use super::{AcquisitionState, LocationError};

/// Single-shot geolocation acquisition state machine.
///
/// `Idle → Requesting → {Resolved, Failed}`, re-entered from either
/// terminal by the next [`acquire`](Self::acquire). At most one request
/// is outstanding at a time; a concurrent second call is rejected with
/// `LocationError::RequestInFlight` instead of racing two platform
/// callbacks against the same observed state.
pub struct LocationAcquirer<P, G> {
    provider: P,
    geocoder: G,
    options: PositionOptions,
    /// Snapshot for observers. Short critical sections only, never held
    /// across an await.
    state: Mutex<AcquisitionState>,
    /// Held across the provider await; try-locked so a second caller is
    /// turned away instead of queued.
    in_flight: tokio::sync::Mutex<()>,
}

impl<P: PositionProvider, G: ReverseGeocode> LocationAcquirer<P, G> {
    pub fn new(provider: P, geocoder: G) -> Self {
        Self {
            provider,
            geocoder,
            options: PositionOptions::default(),
            state: Mutex::new(AcquisitionState::Idle),
            in_flight: tokio::sync::Mutex::new(()),
        }
    }

    /// Current state of the machine.
    pub fn state(&self) -> AcquisitionState {
        self.state
            .lock()
            .map(|s| s.clone())
            .unwrap_or(AcquisitionState::Idle)
    }

    /// Acquire the device position once.
    ///
    /// Geocoding the fix is best-effort: on geocoder failure the address
    /// degrades to the coordinate-formatted string, never failing the
    /// acquisition. Every other failure surfaces as a `LocationError`.
    /// No automatic retry; callers re-invoke.
    pub async fn acquire(&self) -> Result<Location, LocationError> {
        if !self.provider.available() {
            // Capability miss: fail before the machine ever leaves Idle.
            tracing::warn!("position capability unavailable");
            return Err(LocationError::CapabilityUnavailable);
        }

        let Ok(_guard) = self.in_flight.try_lock() else {
            return Err(LocationError::RequestInFlight);
        };

        self.set_state(AcquisitionState::Requesting);
        tracing::debug!(
            high_accuracy = self.options.high_accuracy,
            timeout_ms = self.options.timeout.as_millis() as u64,
            "requesting position"
        );

        match self.provider.current_position(self.options).await {
            Ok(fix) => {
                let address = match self.geocoder.reverse(fix.latitude, fix.longitude).await {
                    Ok(address) => address,
                    Err(e) => {
                        tracing::warn!(error = %e, "reverse geocode failed, using coordinate fallback");
                        format_coordinates(fix.latitude, fix.longitude)
                    }
                };
                let location = Location::new(fix.latitude, fix.longitude, Some(address));
                self.set_state(AcquisitionState::Resolved(location.clone()));
                tracing::info!(
                    lat = location.latitude,
                    lon = location.longitude,
                    "position acquired"
                );
                Ok(location)
            }
            Err(fault) => {
                let error = LocationError::from(fault);
                self.set_state(AcquisitionState::Failed(error.clone()));
                tracing::warn!(?fault, "position acquisition failed");
                Err(error)
            }
        }
    }

    fn set_state(&self, next: AcquisitionState) {
        if let Ok(mut state) = self.state.lock() {
            *state = next;
        }
    }
}
