//! Geolocation acquisition.
//!
//! `LocationAcquirer` drives a single-shot position request against a
//! platform capability (`PositionProvider`), reverse-geocodes the fix
//! (`ReverseGeocode`), and surfaces every failure as a `LocationError`
//! whose `Display` text is the exact string the UI shows.

pub mod acquirer;
pub mod geocode;
pub mod provider;

pub use acquirer::*;
pub use geocode::*;
pub use provider::*;

use thiserror::Error;

use crate::models::Location;

/// Classified geolocation failure.
///
/// The five capability/platform causes carry fixed Korean UI copy; all
/// of them are retryable by calling `acquire()` again, except
/// `CapabilityUnavailable` which needs the capability to appear first.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    /// The platform exposes no position capability at all.
    #[error("이 브라우저는 위치 서비스를 지원하지 않습니다.")]
    CapabilityUnavailable,

    #[error("위치 권한이 거부되었습니다. 브라우저 설정에서 위치 권한을 허용해주세요.")]
    PermissionDenied,

    #[error("위치 정보를 사용할 수 없습니다.")]
    PositionUnavailable,

    #[error("위치 정보 요청 시간이 초과되었습니다.")]
    Timeout,

    #[error("위치 정보를 가져오는 중 오류가 발생했습니다.")]
    Unknown,

    /// A second `acquire()` was issued while one was already in flight.
    #[error("이미 위치 요청이 진행 중입니다.")]
    RequestInFlight,
}

impl From<PositionFault> for LocationError {
    fn from(fault: PositionFault) -> Self {
        match fault {
            PositionFault::PermissionDenied => Self::PermissionDenied,
            PositionFault::PositionUnavailable => Self::PositionUnavailable,
            PositionFault::Timeout => Self::Timeout,
            PositionFault::Unknown => Self::Unknown,
        }
    }
}

/// Observable state of a `LocationAcquirer`.
///
/// `Resolved` and `Failed` are terminal but re-enterable: the next
/// `acquire()` restarts the machine.
#[derive(Debug, Clone, PartialEq)]
pub enum AcquisitionState {
    Idle,
    Requesting,
    Resolved(Location),
    Failed(LocationError),
}
