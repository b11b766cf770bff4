use serde::{Deserialize, Serialize};

/// One ranked hospital candidate from the recommendation service.
///
/// `rank` is 1-based and unique within a response; per-hospital bed
/// counts never exceed their corresponding totals. Both are invariants
/// of the remote contract, not enforced at parse time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendedHospital {
    pub rank: u32,
    pub hospital_id: String,
    pub hospital_name: String,
    pub hospital_phone: String,
    /// Estimated acceptance probability in [0, 1]; computed upstream.
    pub accept_prob: f64,
    pub distance_km: f64,
    pub travel_time_min: f64,
    pub er_beds: u32,
    pub icu_beds: u32,
    pub trauma_icu_beds: u32,
    pub total_er_beds: u32,
    pub total_icu_beds: u32,
    pub total_beds: u32,
    pub ct_available: bool,
    pub ventilator_available: bool,
    pub filter_level: i32,
    pub district_level: i32,
    /// 0|1 flag from the wire.
    pub same_district: u8,
}

impl RecommendedHospital {
    pub fn is_same_district(&self) -> bool {
        self.same_district == 1
    }
}

/// Why the hospitals were ranked the way they were.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingExplanation {
    pub summary: String,
    pub details: Vec<String>,
}

/// One complete answer from the recommendation service.
///
/// Produced atomically by a single call, never mutated after receipt,
/// superseded wholesale by the next response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HospitalRecommendationResponse {
    pub hospitals: Vec<RecommendedHospital>,
    pub ranking_explanation: RankingExplanation,
}

impl HospitalRecommendationResponse {
    /// Ranks must be exactly 1..=N in response order (decreasing
    /// suitability). An empty response satisfies this trivially.
    pub fn ranks_are_contiguous(&self) -> bool {
        self.hospitals
            .iter()
            .enumerate()
            .all(|(i, h)| h.rank as usize == i + 1)
    }
}
