use std::future::Future;
use std::time::Duration;

/// Options forwarded to the platform position query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionOptions {
    pub high_accuracy: bool,
    pub timeout: Duration,
    /// Maximum acceptable age of a cached fix. Zero means a fresh fix
    /// is always requested.
    pub maximum_age: Duration,
}

impl Default for PositionOptions {
    fn default() -> Self {
        Self {
            high_accuracy: true,
            timeout: Duration::from_secs(15),
            maximum_age: Duration::ZERO,
        }
    }
}

/// A raw fix from the platform, before geocoding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawPosition {
    pub latitude: f64,
    pub longitude: f64,
}

/// Platform position failure, classified at the provider boundary.
///
/// Providers bridging a W3C-style numeric error code can use
/// [`PositionFault::from_code`]; no raw platform code travels past this
/// type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionFault {
    PermissionDenied,
    PositionUnavailable,
    Timeout,
    Unknown,
}

impl PositionFault {
    /// Map a W3C GeolocationPositionError code (1..=3) onto a fault.
    pub fn from_code(code: u16) -> Self {
        match code {
            1 => Self::PermissionDenied,
            2 => Self::PositionUnavailable,
            3 => Self::Timeout,
            _ => Self::Unknown,
        }
    }
}

/// Platform capability: a single-shot asynchronous position query.
///
/// Implementations are supplied by the embedding shell (webview bridge,
/// OS location service). Tests use in-memory providers.
pub trait PositionProvider {
    /// Whether the platform exposes a position capability at all.
    /// A `false` here fails acquisition before any request is issued.
    fn available(&self) -> bool {
        true
    }

    /// Issue one position request honoring `options`. The provider owns
    /// timeout enforcement; expiry is reported as `PositionFault::Timeout`.
    fn current_position(
        &self,
        options: PositionOptions,
    ) -> impl Future<Output = Result<RawPosition, PositionFault>> + Send;
}
