//! Response normalization
//!
//! Maps every transport outcome onto a [`ResponseEnvelope`]. The exchange's
//! own envelope is authoritative and passes through untouched; a synthetic
//! envelope is produced only when there is none to pass through.

use coinex_types::{ResponseEnvelope, SyntheticCode};
use tracing::warn;

use crate::transport::{RawResponse, TransportError};

/// Convert a transport outcome into an envelope
///
/// Never fails: network errors and unparseable bodies become envelopes with
/// a negative [`SyntheticCode`].
pub fn normalize(outcome: Result<RawResponse, TransportError>) -> ResponseEnvelope {
    match outcome {
        Ok(raw) => normalize_response(raw),
        Err(err) => {
            warn!(error = %err, "Transport failure");
            ResponseEnvelope::synthetic(err.synthetic_code(), err.to_string())
        }
    }
}

fn normalize_response(raw: RawResponse) -> ResponseEnvelope {
    // 4xx/5xx responses usually still carry a structured envelope
    match serde_json::from_str::<ResponseEnvelope>(&raw.body) {
        Ok(envelope) => envelope,
        Err(err) if raw.is_success() => {
            warn!(status = raw.status, error = %err, "Response body is not an envelope");
            ResponseEnvelope::synthetic(
                SyntheticCode::MalformedBody,
                format!("Malformed response body: {err}"),
            )
        }
        Err(_) => {
            warn!(status = raw.status, "HTTP error without envelope");
            ResponseEnvelope::synthetic(
                SyntheticCode::HttpStatus,
                format!("HTTP error {} {}", raw.status, raw.status_text()),
            )
        }
    }
}
