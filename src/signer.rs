// ===============================
// src/signer.rs
// ===============================
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use chrono::Utc;
use hmac::{Hmac, Mac};
use serde::Serialize;
use sha2::Sha384;

use crate::error::CliError;

type HmacSha384 = Hmac<Sha384>;

/// Both values are transmitted: the base64 payload travels in its own header,
/// not just inside the signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedPayload {
    pub b64: String,
    pub signature: String,
}

/// Current wall-clock time in whole milliseconds, as a decimal string.
///
/// The exchange rejects non-increasing nonces as replays, so two requests on
/// the same credentials must not be issued within the same millisecond. Fine
/// for a human-driven CLI issuing one request per process.
pub fn next_nonce() -> String {
    Utc::now().timestamp_millis().to_string()
}

/// Serialize `payload` to compact JSON, base64-encode it, and HMAC-SHA384 the
/// base64 BYTES (not the raw JSON) with `secret`, hex-encoded lowercase.
/// That ordering is the exchange's protocol and must not change.
pub fn sign<P: Serialize>(secret: &[u8], payload: &P) -> Result<SignedPayload, CliError> {
    if secret.is_empty() {
        return Err(CliError::Config("API secret is empty".to_string()));
    }

    let json = serde_json::to_vec(payload)
        .map_err(|e| CliError::Validation(format!("unserializable payload: {e}")))?;
    let b64 = BASE64.encode(json);

    let mut mac = HmacSha384::new_from_slice(secret)
        .map_err(|e| CliError::Config(format!("invalid HMAC key: {e}")))?;
    mac.update(b64.as_bytes());
    let signature = hex::encode(mac.finalize().into_bytes());

    Ok(SignedPayload { b64, signature })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{OrderKind, OrderSpec, Side};
    use crate::payload::{ActiveOrders, NewOrder};

    const SECRET: &[u8] = b"topsecret";
    const NONCE: &str = "1700000000000";

    fn order_spec(amount: f64) -> OrderSpec {
        OrderSpec {
            symbol: "btcusd".to_string(),
            amount,
            price: 10000.0,
            side: Side::Buy,
            kind: OrderKind::StopLimit,
        }
    }

    #[test]
    fn sign_is_deterministic_for_fixed_nonce() {
        let a = sign(SECRET, &ActiveOrders::new(NONCE.to_string())).unwrap();
        let b = sign(SECRET, &ActiveOrders::new(NONCE.to_string())).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn sign_matches_known_vector() {
        let signed = sign(SECRET, &ActiveOrders::new(NONCE.to_string())).unwrap();
        assert_eq!(
            signed.b64,
            "eyJyZXF1ZXN0IjoiL3YxL29yZGVycyIsIm5vbmNlIjoiMTcwMDAwMDAwMDAwMCJ9"
        );
        assert_eq!(
            signed.signature,
            "e4058a6f070d33cd8af6d095eaaf11ba84a7b8b4594670be63ce10821cff5959460cdcc4d7356be77b667aa9f13becd5"
        );
    }

    #[test]
    fn stop_order_matches_known_vector() {
        let payload = NewOrder::from_spec(NONCE.to_string(), &order_spec(0.1));
        let signed = sign(SECRET, &payload).unwrap();
        assert_eq!(
            signed.signature,
            "e3d3ac86196f7d38fea51e82fecb4e75fad9fc3ac70ac2de572d9671f2437863b125b8c6ed10b8f1b21ef2221ee99602"
        );
    }

    #[test]
    fn digest_covers_base64_not_raw_json() {
        // The same payload HMAC'd over its raw JSON bytes must NOT produce
        // the signature the exchange expects.
        let payload = ActiveOrders::new(NONCE.to_string());
        let signed = sign(SECRET, &payload).unwrap();

        let json = serde_json::to_vec(&payload).unwrap();
        let mut mac = HmacSha384::new_from_slice(SECRET).unwrap();
        mac.update(&json);
        let over_raw = hex::encode(mac.finalize().into_bytes());

        assert_ne!(signed.signature, over_raw);
        assert_eq!(
            over_raw,
            "5720a65c4a7252aee961ae86731faadf2e704b18829b6f7a6561ebd30d932c0086f76f9b76b0f46adc5238a0c2056df7"
        );
    }

    #[test]
    fn amount_change_changes_signature() {
        let a = sign(SECRET, &NewOrder::from_spec(NONCE.to_string(), &order_spec(0.1))).unwrap();
        let b = sign(SECRET, &NewOrder::from_spec(NONCE.to_string(), &order_spec(0.2))).unwrap();
        assert_ne!(a.b64, b.b64);
        assert_ne!(a.signature, b.signature);
    }

    #[test]
    fn empty_secret_is_a_config_error() {
        let err = sign(b"", &ActiveOrders::new(NONCE.to_string())).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }

    #[test]
    fn nonces_strictly_increase_across_milliseconds() {
        let first: i64 = next_nonce().parse().unwrap();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let second: i64 = next_nonce().parse().unwrap();
        assert!(second > first);
    }
}
