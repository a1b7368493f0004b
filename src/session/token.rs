//! Structural bearer token decoding.
//!
//! The token is JWT-shaped: three dot-separated base64url segments with
//! a JSON claims payload. Only structure is checked client-side; the
//! signature is never verified here. Possession of a well-formed, fresh
//! token is treated as sufficient proof by this tier, and authenticity
//! is the server's responsibility on every request.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

/// Claims carried by the bearer token.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
pub struct Claims {
    /// Opaque subject identifier.
    pub id: String,
    /// Display name of the subject.
    pub username: String,
    /// Expiry instant, seconds since the Unix epoch.
    pub eat: u64,
}

/// Reasons a stored token failed structural decoding.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// Token does not have the three-segment shape.
    #[error("token is not a three-segment token")]
    Malformed,
    /// Payload segment is not valid base64url.
    #[error("payload segment is not base64url: {0}")]
    Payload(#[from] base64::DecodeError),
    /// Payload is not JSON or is missing required claims.
    #[error("claims payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Decode the claims payload of a bearer token.
///
/// Accepts arbitrary garbage without panicking: corrupted storage,
/// truncated tokens, and user-edited values all come back as
/// `DecodeError`, never as a fault in the caller's flow.
///
/// # Errors
///
/// Returns `DecodeError` when the token is not three dot-separated
/// segments, the payload segment is not base64url, or the JSON body
/// does not carry the required claims.
pub fn decode(token: &str) -> Result<Claims, DecodeError> {
    let mut segments = token.split('.');
    let (Some(_header), Some(payload), Some(_signature), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        return Err(DecodeError::Malformed);
    };

    let bytes = URL_SAFE_NO_PAD.decode(payload)?;
    Ok(serde_json::from_slice(&bytes)?)
}
