//! `multipart/form-data` encoding of relay payloads.

use super::payload::RelayPayload;
use crate::error::{RelayError, RelayResult};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static BOUNDARY_COUNTER: AtomicU64 = AtomicU64::new(0);

const MAX_BOUNDARY_ATTEMPTS: usize = 8;

/// An encoded body with its content type (which carries the boundary).
#[derive(Debug, Clone)]
pub struct MultipartBody {
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Encode `payload` with a freshly generated boundary.
///
/// The boundary is regenerated until it does not occur in any field.
pub fn encode(payload: &RelayPayload) -> RelayResult<MultipartBody> {
    for _ in 0..MAX_BOUNDARY_ATTEMPTS {
        let boundary = next_boundary();
        if !collides(payload, &boundary) {
            return encode_with_boundary(payload, &boundary);
        }
    }
    Err(RelayError::EncodingError(
        "could not pick a boundary absent from the payload".to_string(),
    ))
}

/// Encode `payload` with a caller-supplied boundary.
pub fn encode_with_boundary(payload: &RelayPayload, boundary: &str) -> RelayResult<MultipartBody> {
    if boundary.is_empty() || boundary.len() > 70 {
        return Err(RelayError::EncodingError(format!(
            "invalid boundary length: {}",
            boundary.len()
        )));
    }
    if collides(payload, boundary) {
        return Err(RelayError::EncodingError(
            "boundary occurs inside the payload".to_string(),
        ));
    }

    let mut bytes = Vec::new();
    for (name, value) in payload.fields() {
        if name.contains(['"', '\r', '\n']) {
            return Err(RelayError::EncodingError(format!(
                "field name not encodable: {:?}",
                name
            )));
        }
        bytes.extend_from_slice(format!("--{}\r\n", boundary).as_bytes());
        bytes.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", name).as_bytes(),
        );
        bytes.extend_from_slice(value.as_bytes());
        bytes.extend_from_slice(b"\r\n");
    }
    bytes.extend_from_slice(format!("--{}--\r\n", boundary).as_bytes());

    Ok(MultipartBody {
        content_type: format!("multipart/form-data; boundary={}", boundary),
        bytes,
    })
}

fn next_boundary() -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default();
    let count = BOUNDARY_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("----ActechFormBoundary{:016x}{:04x}", nanos, count & 0xffff)
}

fn collides(payload: &RelayPayload, boundary: &str) -> bool {
    payload
        .fields()
        .iter()
        .any(|(name, value)| name.contains(boundary) || value.contains(boundary))
}
