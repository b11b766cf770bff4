use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::{ApiConfig, GUIDANCE_PATH, HOSPITALS_PATH};
use crate::models::{EmergencyGuidance, HospitalRecommendationResponse, UserLocation};

use super::{EmergencyApiError, Operation};

/// HTTP client for the two emergency-service operations.
///
/// Endpoints are resolved once at construction from the runtime mode;
/// callers never learn which mode is active. The client holds no session
/// state: every invocation is exactly one POST, no retry, no caching.
pub struct EmergencyApiClient {
    http: reqwest::Client,
    guidance_endpoint: String,
    hospitals_endpoint: String,
}

/// Body of a guidance request.
#[derive(Serialize)]
struct GuidanceRequest<'a> {
    emergency_text: &'a str,
}

/// Body of a hospital recommendation request.
#[derive(Serialize)]
struct HospitalsRequest<'a> {
    emergency_text: &'a str,
    user_location: UserLocation,
}

/// Error body the service may attach to a non-success status.
#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

impl EmergencyApiClient {
    pub fn new(config: &ApiConfig) -> Self {
        let http = reqwest::Client::builder()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http,
            guidance_endpoint: config.endpoint(GUIDANCE_PATH),
            hospitals_endpoint: config.endpoint(HOSPITALS_PATH),
        }
    }

    /// Request immediate-action guidance for a free-text emergency
    /// description.
    pub async fn request_guidance(
        &self,
        emergency_text: &str,
    ) -> Result<EmergencyGuidance, EmergencyApiError> {
        let body = GuidanceRequest { emergency_text };
        self.post_json(Operation::Guidance, &self.guidance_endpoint, &body)
            .await
    }

    /// Request ranked hospital recommendations for a free-text emergency
    /// description at a known position.
    pub async fn request_hospital_recommendations(
        &self,
        emergency_text: &str,
        location: UserLocation,
    ) -> Result<HospitalRecommendationResponse, EmergencyApiError> {
        let body = HospitalsRequest {
            emergency_text,
            user_location: location,
        };
        self.post_json(Operation::HospitalRecommendation, &self.hospitals_endpoint, &body)
            .await
    }

    /// Shared transport: one JSON POST, strict typed parse, normalized
    /// failure.
    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        op: Operation,
        endpoint: &str,
        body: &B,
    ) -> Result<T, EmergencyApiError> {
        tracing::debug!(%op, endpoint, "emergency API request");

        let response = self.http.post(endpoint).json(body).send().await.map_err(|e| {
            tracing::error!(%op, error = %e, "emergency API request failed to complete");
            EmergencyApiError::Transport {
                message: format!("{} API 호출에 실패했습니다.", op.label()),
                source: e,
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let error = normalize_http_failure(op, endpoint, status, &body);
            tracing::warn!(%op, status = status.as_u16(), "emergency API returned error status");
            return Err(error);
        }

        response.json::<T>().await.map_err(|e| {
            tracing::error!(%op, error = %e, "emergency API response did not match the expected model");
            EmergencyApiError::MalformedResponse {
                message: format!("{} 응답을 해석할 수 없습니다.", op.label()),
                source: e,
            }
        })
    }
}

/// Extract a display message from a non-success response. Priority: a
/// JSON `detail` field, then the 404 backend-down diagnostic, then the
/// generic status line.
fn normalize_http_failure(
    _op: Operation,
    endpoint: &str,
    status: StatusCode,
    body: &str,
) -> EmergencyApiError {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        if let Some(detail) = parsed.detail {
            return EmergencyApiError::Http {
                status: status.as_u16(),
                message: detail,
            };
        }
    }

    if status == StatusCode::NOT_FOUND {
        return EmergencyApiError::Http {
            status: status.as_u16(),
            message: format!(
                "백엔드 서버를 찾을 수 없습니다 (404). 서버가 실행 중인지 확인해주세요. 엔드포인트: {endpoint}"
            ),
        };
    }

    let message = match status.canonical_reason() {
        Some(reason) => format!("API 요청 실패: {} {}", status.as_u16(), reason),
        None => format!("API 요청 실패: {}", status.as_u16()),
    };
    EmergencyApiError::Http {
        status: status.as_u16(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use std::net::SocketAddr;
    use std::sync::{Arc, Mutex};

    use axum::extract::Json;
    use axum::http::StatusCode as AxumStatus;
    use axum::routing::post;
    use axum::Router;
    use serde_json::{json, Value};

    use crate::config::RuntimeMode;

    use super::*;

    // ── Normalization rules (pure) ──────────────────────────

    #[test]
    fn detail_field_wins_for_any_status() {
        for code in [StatusCode::BAD_REQUEST, StatusCode::NOT_FOUND, StatusCode::INTERNAL_SERVER_ERROR] {
            let error = normalize_http_failure(
                Operation::Guidance,
                "http://api/api/emergency/guidance",
                code,
                r#"{"detail": "X"}"#,
            );
            assert_eq!(error.to_string(), "X");
            assert_eq!(error.status(), Some(code.as_u16()));
        }
    }

    #[test]
    fn not_found_without_detail_names_the_endpoint() {
        let endpoint = "http://api/api/emergency/hospitals";
        let error = normalize_http_failure(
            Operation::HospitalRecommendation,
            endpoint,
            StatusCode::NOT_FOUND,
            "",
        );
        let message = error.to_string();
        assert!(message.contains(endpoint));
        assert!(message.contains("백엔드 서버를 찾을 수 없습니다 (404)"));
    }

    #[test]
    fn other_statuses_fall_back_to_the_status_line() {
        let error = normalize_http_failure(
            Operation::Guidance,
            "http://api/api/emergency/guidance",
            StatusCode::INTERNAL_SERVER_ERROR,
            "not json",
        );
        assert_eq!(error.to_string(), "API 요청 실패: 500 Internal Server Error");
    }

    #[test]
    fn json_body_without_detail_still_falls_through() {
        let error = normalize_http_failure(
            Operation::Guidance,
            "http://api/api/emergency/guidance",
            StatusCode::BAD_GATEWAY,
            r#"{"error": "unrelated shape"}"#,
        );
        assert_eq!(error.to_string(), "API 요청 실패: 502 Bad Gateway");
    }

    // ── End-to-end against a local fixture server ───────────

    async fn spawn_server(app: Router) -> SocketAddr {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        addr
    }

    fn client_for(addr: SocketAddr) -> EmergencyApiClient {
        let config = ApiConfig::new(RuntimeMode::Production, format!("http://{addr}"));
        EmergencyApiClient::new(&config)
    }

    fn sample_guidance() -> Value {
        json!({
            "situation_summary": "성인 흉통",
            "immediate_actions": ["119에 신고하세요"],
            "do_not_do": ["환자를 혼자 두지 마세요"]
        })
    }

    #[tokio::test]
    async fn guidance_posts_emergency_text_and_returns_parsed_model() {
        let seen: Arc<Mutex<Option<Value>>> = Arc::new(Mutex::new(None));
        let seen_handler = seen.clone();
        let app = Router::new().route(
            GUIDANCE_PATH,
            post(move |Json(body): Json<Value>| {
                let seen = seen_handler.clone();
                async move {
                    *seen.lock().unwrap() = Some(body);
                    Json(sample_guidance())
                }
            }),
        );
        let addr = spawn_server(app).await;

        let guidance = client_for(addr).request_guidance("chest pain").await.unwrap();

        assert_eq!(
            seen.lock().unwrap().take().unwrap(),
            json!({ "emergency_text": "chest pain" })
        );
        assert_eq!(guidance.situation_summary, "성인 흉통");
        assert_eq!(guidance.immediate_actions, vec!["119에 신고하세요"]);
    }

    #[tokio::test]
    async fn hospitals_posts_text_and_location_and_preserves_order() {
        let seen: Arc<Mutex<Option<Value>>> = Arc::new(Mutex::new(None));
        let seen_handler = seen.clone();
        let app = Router::new().route(
            HOSPITALS_PATH,
            post(move |Json(body): Json<Value>| {
                let seen = seen_handler.clone();
                async move {
                    *seen.lock().unwrap() = Some(body);
                    Json(json!({
                        "hospitals": [
                            hospital_json(1, "한강성심병원"),
                            hospital_json(2, "서울백병원"),
                        ],
                        "ranking_explanation": {
                            "summary": "이송 시간 우선",
                            "details": ["두 병원 모두 외상 수용 가능"]
                        }
                    }))
                }
            }),
        );
        let addr = spawn_server(app).await;

        let response = client_for(addr)
            .request_hospital_recommendations("fall injury", UserLocation { lat: 37.5, lon: 127.0 })
            .await
            .unwrap();

        assert_eq!(
            seen.lock().unwrap().take().unwrap(),
            json!({
                "emergency_text": "fall injury",
                "user_location": { "lat": 37.5, "lon": 127.0 }
            })
        );
        assert_eq!(response.hospitals.len(), 2);
        assert_eq!(response.hospitals[0].hospital_name, "한강성심병원");
        assert_eq!(response.hospitals[1].hospital_name, "서울백병원");
        assert!(response.ranks_are_contiguous());
    }

    #[tokio::test]
    async fn detail_from_error_body_reaches_the_caller_verbatim() {
        let app = Router::new().route(
            GUIDANCE_PATH,
            post(|| async {
                (
                    AxumStatus::INTERNAL_SERVER_ERROR,
                    Json(json!({ "detail": "모델 서버가 응답하지 않습니다" })),
                )
            }),
        );
        let addr = spawn_server(app).await;

        let error = client_for(addr).request_guidance("chest pain").await.unwrap_err();
        assert_eq!(error.to_string(), "모델 서버가 응답하지 않습니다");
        assert_eq!(error.status(), Some(500));
    }

    #[tokio::test]
    async fn missing_route_surfaces_the_backend_down_diagnostic() {
        // Guidance route only; the hospitals path 404s with an empty body.
        let app = Router::new().route(GUIDANCE_PATH, post(|| async { Json(sample_guidance()) }));
        let addr = spawn_server(app).await;

        let error = client_for(addr)
            .request_hospital_recommendations("fall injury", UserLocation { lat: 37.5, lon: 127.0 })
            .await
            .unwrap_err();

        let message = error.to_string();
        assert!(message.contains("백엔드 서버를 찾을 수 없습니다 (404)"));
        assert!(message.contains(HOSPITALS_PATH));
        assert_eq!(error.status(), Some(404));
    }

    #[tokio::test]
    async fn unreachable_server_is_a_transport_error() {
        // Bind then drop to get a port nothing is listening on.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let error = client_for(addr).request_guidance("chest pain").await.unwrap_err();
        assert!(matches!(error, EmergencyApiError::Transport { .. }));
        assert_eq!(error.to_string(), "응급 가이드 API 호출에 실패했습니다.");
        assert_eq!(error.status(), None);
    }

    #[tokio::test]
    async fn unparseable_success_body_is_malformed_not_http() {
        // 200 with a body missing required fields.
        let app = Router::new().route(
            GUIDANCE_PATH,
            post(|| async { Json(json!({ "situation_summary": "요약만 있음" })) }),
        );
        let addr = spawn_server(app).await;

        let error = client_for(addr).request_guidance("chest pain").await.unwrap_err();
        assert!(matches!(error, EmergencyApiError::MalformedResponse { .. }));
        assert_eq!(error.to_string(), "응급 가이드 응답을 해석할 수 없습니다.");
    }

    fn hospital_json(rank: u32, name: &str) -> Value {
        json!({
            "rank": rank,
            "hospital_id": format!("H{rank:03}"),
            "hospital_name": name,
            "hospital_phone": "02-000-0000",
            "accept_prob": 0.8,
            "distance_km": 2.0,
            "travel_time_min": 7.0,
            "er_beds": 3, "icu_beds": 2, "trauma_icu_beds": 1,
            "total_er_beds": 10, "total_icu_beds": 8, "total_beds": 300,
            "ct_available": true, "ventilator_available": true,
            "filter_level": 1, "district_level": 1, "same_district": 1
        })
    }
}
