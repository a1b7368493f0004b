use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use super::*;

/// Forge a JWT-shaped token around an arbitrary JSON payload. The
/// signature segment is junk; this tier never verifies it.
fn forge(payload: &str) -> String {
    let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload);
    format!("{header}.{body}.not-a-real-signature")
}

// =============================================================
// decode: well-formed tokens
// =============================================================

#[test]
fn decode_valid_token_yields_claims() {
    let token = forge(r#"{"id":"u1","username":"ada","eat":1700000000}"#);
    let claims = decode(&token).unwrap();
    assert_eq!(
        claims,
        Claims {
            id: "u1".to_owned(),
            username: "ada".to_owned(),
            eat: 1_700_000_000,
        }
    );
}

#[test]
fn decode_ignores_extra_claims() {
    let token = forge(r#"{"id":"u1","username":"ada","eat":1,"iss":"api","role":"admin"}"#);
    let claims = decode(&token).unwrap();
    assert_eq!(claims.id, "u1");
}

#[test]
fn decode_does_not_verify_signature() {
    let header = URL_SAFE_NO_PAD.encode("{}");
    let body = URL_SAFE_NO_PAD.encode(r#"{"id":"u1","username":"ada","eat":1}"#);
    let token = format!("{header}.{body}.");
    assert!(decode(&token).is_ok());
}

#[test]
fn decode_accepts_zero_expiry() {
    let token = forge(r#"{"id":"u1","username":"ada","eat":0}"#);
    assert_eq!(decode(&token).unwrap().eat, 0);
}

// =============================================================
// decode: malformed shapes
// =============================================================

#[test]
fn decode_empty_string_is_malformed() {
    assert!(matches!(decode(""), Err(DecodeError::Malformed)));
}

#[test]
fn decode_plain_string_is_malformed() {
    assert!(matches!(decode("garbage"), Err(DecodeError::Malformed)));
}

#[test]
fn decode_two_segments_is_malformed() {
    assert!(matches!(decode("a.b"), Err(DecodeError::Malformed)));
}

#[test]
fn decode_four_segments_is_malformed() {
    assert!(matches!(decode("a.b.c.d"), Err(DecodeError::Malformed)));
}

// =============================================================
// decode: corrupt payloads
// =============================================================

#[test]
fn decode_non_base64_payload_errors() {
    assert!(matches!(
        decode("a.!not-base64!.c"),
        Err(DecodeError::Payload(_))
    ));
}

#[test]
fn decode_non_json_payload_errors() {
    let body = URL_SAFE_NO_PAD.encode("this is not json");
    let token = format!("a.{body}.c");
    assert!(matches!(decode(&token), Err(DecodeError::Json(_))));
}

#[test]
fn decode_missing_claims_errors() {
    let token = forge(r#"{"id":"u1"}"#);
    assert!(matches!(decode(&token), Err(DecodeError::Json(_))));
}

#[test]
fn decode_truncated_payload_errors() {
    let full = forge(r#"{"id":"u1","username":"ada","eat":1700000000}"#);
    let truncated = &full[..full.len() / 2];
    assert!(decode(truncated).is_err());
}
