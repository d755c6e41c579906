//! Mocked disease detection from an uploaded image

use crate::error::ApiError;
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use plantguard_core::DiseaseDetectionResult;
use serde::Deserialize;
use tracing::{error, warn};

#[derive(Debug, Deserialize)]
pub struct DetectRequest {
    /// Base64 image, optionally as a `data:` URL
    image: String,
}

pub async fn detect(
    State(state): State<AppState>,
    body: Result<Json<DetectRequest>, JsonRejection>,
) -> Result<Json<DiseaseDetectionResult>, ApiError> {
    let Json(req) = body.map_err(|e| {
        warn!("Rejected detection request: {}", e);
        ApiError::bad_request("Invalid image data")
    })?;

    let image =
        decode_image(&req.image).ok_or_else(|| ApiError::bad_request("Invalid image data"))?;

    state
        .insights
        .detect_disease(&image)
        .await
        .map(Json)
        .map_err(|e| {
            error!("Detection failed: {}", e);
            ApiError::internal("Error processing image")
        })
}

/// Decode a non-empty base64 payload, stripping any `data:...;base64,` prefix
fn decode_image(raw: &str) -> Option<Vec<u8>> {
    let payload = match raw.split_once(";base64,") {
        Some((prefix, data)) if prefix.starts_with("data:") => data,
        _ => raw,
    };
    let compact: String = payload.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return None;
    }
    STANDARD.decode(compact).ok().filter(|bytes| !bytes.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_plain_and_data_url() {
        assert_eq!(decode_image("aGVsbG8="), Some(b"hello".to_vec()));
        assert_eq!(
            decode_image("data:image/png;base64,aGVsbG8="),
            Some(b"hello".to_vec())
        );
        assert_eq!(decode_image("aGVs\nbG8="), Some(b"hello".to_vec()));
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert_eq!(decode_image(""), None);
        assert_eq!(decode_image("   "), None);
        assert_eq!(decode_image("not base64!"), None);
    }
}
