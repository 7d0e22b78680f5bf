use crate::error::{Result, WebhookError};
use crate::headers::{extract_headers, HeaderLookup};
use base64::{engine::general_purpose::STANDARD as BASE64_STANDARD, Engine};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::collections::HashMap;
use std::time::{SystemTime, UNIX_EPOCH};
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

/// Prefix carried by webhook signing secrets (`whsec_<base64>`).
pub const SECRET_PREFIX: &str = "whsec_";

/// Version prefix carried by each signature candidate in the header.
const SIGNATURE_VERSION_PREFIX: &str = "v1,";

/// The three signing header values for one webhook delivery.
///
/// Produced by [`generate_header`]; mainly useful for tests and mock senders.
/// Implements [`HeaderLookup`], so generated headers can be fed straight back
/// into [`verify_header`], and converts into a plain map via
/// [`into_map`](Self::into_map) for consumers that want one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookHeaders {
    /// Message id (`svix-id`).
    pub id: String,
    /// Unix timestamp in seconds, as a decimal string (`svix-timestamp`).
    pub timestamp: String,
    /// Signature header value, pre-formatted as `v1,<base64>` (`svix-signature`).
    pub signature: String,
}

impl WebhookHeaders {
    /// Convert into a plain header map keyed by the `svix-*` names.
    pub fn into_map(self) -> HashMap<String, String> {
        HashMap::from([
            ("svix-id".to_string(), self.id),
            ("svix-timestamp".to_string(), self.timestamp),
            ("svix-signature".to_string(), self.signature),
        ])
    }
}

impl HeaderLookup for WebhookHeaders {
    fn get(&self, name: &str) -> Option<String> {
        match name.to_ascii_lowercase().as_str() {
            "svix-id" => Some(self.id.clone()),
            "svix-timestamp" => Some(self.timestamp.clone()),
            "svix-signature" => Some(self.signature.clone()),
            _ => None,
        }
    }
}

/// Verify the webhook signature header against the raw payload.
///
/// Extracts the signing headers, optionally enforces the timestamp freshness
/// window, recomputes the expected MAC, and compares it against every `v1,`
/// candidate in the signature header using a constant-time comparison. A
/// single matching candidate is enough; senders include multiple candidates
/// during secret rotation.
///
/// `payload` must be the exact bytes received over the wire. Re-serializing
/// the body before verification changes the signed content and the signature
/// will not match.
///
/// Passing `tolerance: None` skips the freshness check entirely, which
/// disables replay protection. See [`crate::event::construct_event_with_tolerance`]
/// for the caveats.
///
/// # Errors
///
/// Fails closed with the matching [`WebhookError`] variant: missing headers,
/// an unusable secret, a stale or unparseable timestamp, a signature header
/// with no `v1,` candidates, or no candidate matching the computed MAC.
pub fn verify_header(
    payload: &[u8],
    headers: &impl HeaderLookup,
    secret: &str,
    tolerance: Option<u64>,
) -> Result<()> {
    let (msg_id, timestamp, signature) = extract_headers(headers)?;

    if let Some(tolerance) = tolerance {
        // Sample the clock once per verification call.
        verify_timestamp(&timestamp, tolerance, unix_now())?;
    }

    let expected = compute_mac(&msg_id, &timestamp, payload, secret)?;
    verify_signature(&expected, &signature)
}

/// Compute the expected signature for a webhook payload.
///
/// The MAC is HMAC-SHA256 over `{msg_id}.{timestamp}.{payload}` keyed by the
/// decoded secret, returned as standard base64.
///
/// # Errors
///
/// Returns [`WebhookError::InvalidSecret`] if the secret does not
/// base64-decode after stripping the `whsec_` prefix.
pub fn compute_signature(
    msg_id: &str,
    timestamp: &str,
    payload: &[u8],
    secret: &str,
) -> Result<String> {
    let mac = compute_mac(msg_id, timestamp, payload, secret)?;
    Ok(BASE64_STANDARD.encode(mac))
}

/// Generate signing headers for a payload.
///
/// Inverse of [`verify_header`]: produces the id, timestamp, and
/// `v1,`-formatted signature a real sender would attach. Useful for testing
/// webhook consumers without a live sender.
///
/// # Example
///
/// ```rust,ignore
/// use straddle_webhooks::signature::{generate_header, verify_header};
///
/// let payload = br#"{"event_type":"ping"}"#;
/// let headers = generate_header("msg_1", 1731705121, payload, secret)?;
/// verify_header(payload, &headers, secret, None)?;
/// ```
pub fn generate_header(
    msg_id: &str,
    timestamp: i64,
    payload: &[u8],
    secret: &str,
) -> Result<WebhookHeaders> {
    let timestamp = timestamp.to_string();
    let signature = compute_signature(msg_id, &timestamp, payload, secret)?;
    Ok(WebhookHeaders {
        id: msg_id.to_string(),
        timestamp,
        signature: format!("{SIGNATURE_VERSION_PREFIX}{signature}"),
    })
}

/// Generate a fresh webhook signing secret.
///
/// Returns a `whsec_`-prefixed standard-base64 encoding of 32 random bytes.
pub fn generate_secret() -> String {
    use rand::RngCore;

    let mut secret = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut secret);
    format!("{SECRET_PREFIX}{}", BASE64_STANDARD.encode(secret))
}

/// Decode a signing secret into raw key bytes, stripping the `whsec_` prefix
/// if present.
fn decode_secret(secret: &str) -> Result<Vec<u8>> {
    let encoded = secret.strip_prefix(SECRET_PREFIX).unwrap_or(secret);
    BASE64_STANDARD
        .decode(encoded)
        .map_err(|_| WebhookError::InvalidSecret)
}

/// HMAC-SHA256 over the signed content, streamed so the payload bytes are
/// hashed exactly as received.
fn compute_mac(msg_id: &str, timestamp: &str, payload: &[u8], secret: &str) -> Result<Vec<u8>> {
    let key = decode_secret(secret)?;
    let mut mac = HmacSha256::new_from_slice(&key).expect("HMAC can take key of any size");
    mac.update(msg_id.as_bytes());
    mac.update(b".");
    mac.update(timestamp.as_bytes());
    mac.update(b".");
    mac.update(payload);
    Ok(mac.finalize().into_bytes().to_vec())
}

/// Check the timestamp against a symmetric freshness window around `now`.
///
/// The window rejects both past and future timestamps: a one-sided check
/// would let captured deliveries be replayed indefinitely from the other
/// direction.
fn verify_timestamp(timestamp: &str, tolerance: u64, now: i64) -> Result<()> {
    let ts: i64 = timestamp
        .parse()
        .map_err(|_| WebhookError::InvalidTimestamp {
            value: timestamp.to_string(),
        })?;

    let diff = now.abs_diff(ts);
    if diff > tolerance {
        return Err(WebhookError::TimestampOutOfTolerance { diff, tolerance });
    }
    Ok(())
}

/// Compare every `v1,` candidate in the signature header against the expected
/// raw MAC bytes.
fn verify_signature(expected: &[u8], sig_header: &str) -> Result<()> {
    let candidates: Vec<&str> = sig_header
        .split_whitespace()
        .filter_map(|token| token.strip_prefix(SIGNATURE_VERSION_PREFIX))
        .collect();

    if candidates.is_empty() {
        return Err(WebhookError::NoV1Signatures {
            sig_header: sig_header.to_string(),
        });
    }

    for candidate in candidates {
        // A candidate that fails to decode is a non-match, not a hard error:
        // it must not veto a valid rotation sibling.
        let Ok(bytes) = BASE64_STANDARD.decode(candidate) else {
            continue;
        };
        if secure_compare(expected, &bytes) {
            return Ok(());
        }
    }

    tracing::debug!("webhook signature verification failed");
    Err(WebhookError::SignatureMismatch {
        sig_header: sig_header.to_string(),
    })
}

/// Constant-time comparison to prevent timing attacks
///
/// Uses the `subtle` crate, whose optimization barriers keep the compiler
/// from turning the comparison back into an early-exit loop that leaks the
/// mismatch position.
fn secure_compare(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}

fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_secs() as i64)
}
