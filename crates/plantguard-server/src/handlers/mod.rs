//! HTTP handlers

pub mod detect;
pub mod diseases;
pub mod health;
pub mod map;
pub mod news;
pub mod outbreaks;
pub mod users;

pub use health::health;

use crate::error::ApiError;
use plantguard_core::RecordId;
use std::num::IntErrorKind;

/// Parse a numeric path id, rejecting anything else as a 400
///
/// A number outside the `RecordId` range is valid input that can never match
/// a record, so it comes back as `None` and callers treat it as absent.
fn parse_id(raw: &str, what: &str) -> Result<Option<RecordId>, ApiError> {
    match raw.trim().parse::<RecordId>() {
        Ok(id) => Ok(Some(id)),
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            Ok(None)
        }
        Err(_) => Err(ApiError::bad_request(format!("Invalid {} ID", what))),
    }
}
