//! Request/response messages exchanged with a ranking worker.
//!
//! The shapes match what a browser Web Worker receives and posts back:
//!
//! ```text
//! request:  { "options": [...], "weights": [...], "criteria_types": ["min", "max", "min"] }
//! success:  { "status": "success", "data": { "ranked_options": [...] } }
//! error:    { "status": "error", "message": "..." }
//! ```
//!
//! `weights` and `criteria_types` are in payload order (cost, availability,
//! risk); see [`crate::decision::from_wire_order`].

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::decision::{
    from_wire_order, rank_checked, to_wire_order, Alternative, RankedAlternative,
};
use crate::error::{McdaError, Result};
use crate::topsis::Direction;

const ENCODE_FAILURE: &str = r#"{"status":"error","message":"failed to encode response"}"#;

/// A single ranking request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopsisRequest {
    /// Alternatives to rank.
    pub options: Vec<Alternative>,
    /// Weights in cost, availability, risk order.
    pub weights: Vec<f64>,
    /// Directions as wire strings (`"max"`/`"min"`), same order.
    pub criteria_types: Vec<String>,
}

impl TopsisRequest {
    /// Builds a request from values already in payload order.
    pub fn new(options: Vec<Alternative>, weights: Vec<f64>, directions: &[Direction]) -> Self {
        Self {
            options,
            weights,
            criteria_types: directions.iter().map(|d| d.as_str().to_owned()).collect(),
        }
    }

    /// Builds a request from weights and directions in
    /// [`Criterion::COLUMNS`](crate::decision::Criterion::COLUMNS) order.
    pub fn from_columns(
        options: Vec<Alternative>,
        weights: &[f64],
        directions: &[Direction],
    ) -> Result<Self> {
        Ok(Self::new(
            options,
            to_wire_order("weights", weights)?,
            &to_wire_order("directions", directions)?,
        ))
    }
}

/// Payload of a successful response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedPayload {
    pub ranked_options: Vec<RankedAlternative>,
}

/// The single response to a [`TopsisRequest`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum WorkerResponse {
    Success { data: RankedPayload },
    Error { message: String },
}

impl WorkerResponse {
    pub fn success(ranked_options: Vec<RankedAlternative>) -> Self {
        Self::Success {
            data: RankedPayload { ranked_options },
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }

    /// Converts an `error` response into [`McdaError::Rejected`].
    pub fn into_result(self) -> Result<Vec<RankedAlternative>> {
        match self {
            Self::Success { data } => Ok(data.ranked_options),
            Self::Error { message } => Err(McdaError::Rejected(message)),
        }
    }
}

/// Processes one request. Never panics on bad input; failures become an
/// `error` response.
pub fn handle_request(request: &TopsisRequest) -> WorkerResponse {
    match process(request) {
        Ok(ranked) => WorkerResponse::success(ranked),
        Err(e) => {
            warn!(error = %e, "ranking request rejected");
            WorkerResponse::error(e.to_string())
        }
    }
}

/// JSON-in, JSON-out form of [`handle_request`].
///
/// Undecodable input yields an `error` response.
pub fn handle_message(json: &str) -> String {
    let response = match serde_json::from_str::<TopsisRequest>(json) {
        Ok(request) => handle_request(&request),
        Err(e) => {
            let err = McdaError::from(e);
            warn!(error = %err, "undecodable ranking message");
            WorkerResponse::error(err.to_string())
        }
    };
    serde_json::to_string(&response).unwrap_or_else(|_| ENCODE_FAILURE.to_owned())
}

fn process(request: &TopsisRequest) -> Result<Vec<RankedAlternative>> {
    if request.options.is_empty() {
        return Ok(Vec::new());
    }
    let directions = Direction::parse_all(&request.criteria_types)?;
    let weights = from_wire_order("weights", &request.weights)?;
    let directions = from_wire_order("directions", &directions)?;
    rank_checked(&request.options, &weights, &directions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn request_json() -> Value {
        json!({
            "options": [
                {
                    "name": "A",
                    "parameters": {"base_cost": 8000.0, "risk": 0.1, "availability": 0.99}
                },
                {
                    "name": "B",
                    "parameters": {"base_cost": 12000.0, "risk": 0.05, "availability": 0.999}
                }
            ],
            "weights": [0.4, 0.4, 0.2],
            "criteria_types": ["min", "max", "min"]
        })
    }

    #[test]
    fn test_success_message_shape() {
        let out = handle_message(&request_json().to_string());
        let out: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(out["status"], "success");
        let ranked = out["data"]["ranked_options"].as_array().unwrap();
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0]["name"], "A");
        let score = ranked[0]["topsis_score"].as_f64().unwrap();
        assert!((score - 0.553_539_489_842_525_9).abs() < 1e-12);
    }

    #[test]
    fn test_empty_options_succeed() {
        let msg = json!({"options": [], "weights": [], "criteria_types": []});
        let out: Value = serde_json::from_str(&handle_message(&msg.to_string())).unwrap();
        assert_eq!(out["status"], "success");
        assert_eq!(out["data"]["ranked_options"], json!([]));
    }

    #[test]
    fn test_malformed_json_is_error_response() {
        let out: Value = serde_json::from_str(&handle_message("{not json")).unwrap();
        assert_eq!(out["status"], "error");
        assert!(out["message"].as_str().unwrap().starts_with("malformed message"));
    }

    #[test]
    fn test_missing_field_is_error_response() {
        let msg = json!({"options": [], "weights": []});
        let out: Value = serde_json::from_str(&handle_message(&msg.to_string())).unwrap();
        assert_eq!(out["status"], "error");
    }

    #[test]
    fn test_unknown_direction_rejected() {
        let mut msg = request_json();
        msg["criteria_types"] = json!(["min", "cost", "max"]);
        let out: Value = serde_json::from_str(&handle_message(&msg.to_string())).unwrap();
        assert_eq!(out["status"], "error");
        assert!(out["message"].as_str().unwrap().contains("cost"));
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let mut msg = request_json();
        msg["weights"] = json!([0.5, 0.5]);
        let out: Value = serde_json::from_str(&handle_message(&msg.to_string())).unwrap();
        assert_eq!(out["status"], "error");
        assert!(out["message"].as_str().unwrap().contains("weights"));
    }

    #[test]
    fn test_request_new_encodes_directions() {
        let req = TopsisRequest::new(
            vec![Alternative::new("A", 1.0, 0.1, 0.9)],
            vec![1.0, 1.0, 1.0],
            &[Direction::Min, Direction::Max, Direction::Min],
        );
        assert_eq!(req.criteria_types, vec!["min", "max", "min"]);
        assert!(matches!(handle_request(&req), WorkerResponse::Success { .. }));
    }

    #[test]
    fn test_from_columns_reorders() {
        let req = TopsisRequest::from_columns(
            vec![],
            &[0.25, 0.125, 0.625],
            &[Direction::Min, Direction::Min, Direction::Max],
        )
        .unwrap();
        assert_eq!(req.weights, vec![0.25, 0.625, 0.125]);
        assert_eq!(req.criteria_types, vec!["min", "max", "min"]);
        assert!(TopsisRequest::from_columns(vec![], &[1.0], &[Direction::Min]).is_err());
    }

    #[test]
    fn test_payload_order_matches_direct_rank() {
        let direct = rank_checked(
            &[
                Alternative::new("A", 8000.0, 0.1, 0.99),
                Alternative::new("B", 12000.0, 0.05, 0.999),
            ],
            &[0.4, 0.2, 0.4],
            &[Direction::Min, Direction::Min, Direction::Max],
        )
        .unwrap();
        let request: TopsisRequest = serde_json::from_value(request_json()).unwrap();
        let via_worker = handle_request(&request).into_result().unwrap();
        assert_eq!(via_worker, direct);
    }

    #[test]
    fn test_availability_weight_follows_payload_order() {
        // All weight on the second payload column: availability, maximized.
        let mut msg = request_json();
        msg["weights"] = json!([0.0, 1.0, 0.0]);
        let out: Value = serde_json::from_str(&handle_message(&msg.to_string())).unwrap();
        assert_eq!(out["data"]["ranked_options"][0]["name"], "B");
        let top = out["data"]["ranked_options"][0]["topsis_score"].as_f64().unwrap();
        assert!((top - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_huge_weights_keep_scores_finite() {
        let options: Vec<Value> = (0..200)
            .map(|i| {
                json!({
                    "name": format!("opt-{i}"),
                    "parameters": {
                        "base_cost": 1000.0 + i as f64,
                        "risk": 0.01 * (i % 50) as f64,
                        "availability": 0.9 + 0.0005 * (i % 100) as f64
                    }
                })
            })
            .collect();
        let msg = json!({
            "options": options,
            "weights": [1e308, 1e308, 1e308],
            "criteria_types": ["min", "max", "min"]
        });
        let out = handle_message(&msg.to_string());
        assert!(!out.contains("null"));
        let out: Value = serde_json::from_str(&out).unwrap();
        let ranked = out["data"]["ranked_options"].as_array().unwrap();
        assert_eq!(ranked.len(), 200);
        assert!(ranked
            .iter()
            .all(|r| (0.0..=1.0).contains(&r["topsis_score"].as_f64().unwrap())));
    }

    #[test]
    fn test_into_result() {
        let err = WorkerResponse::error("boom").into_result().unwrap_err();
        assert!(matches!(err, McdaError::Rejected(ref m) if m == "boom"));
        assert!(WorkerResponse::success(vec![]).into_result().unwrap().is_empty());
    }

    #[test]
    fn test_response_roundtrip_tagging() {
        let json = serde_json::to_value(WorkerResponse::error("bad")).unwrap();
        assert_eq!(json, json!({"status": "error", "message": "bad"}));
    }
}
