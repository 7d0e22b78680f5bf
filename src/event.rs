use crate::error::Result;
use crate::headers::HeaderLookup;
use crate::signature::verify_header;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Default timestamp freshness window, in seconds.
pub const DEFAULT_TOLERANCE_SECS: u64 = 300;

/// Verify a webhook delivery and return the parsed event payload.
///
/// Runs full signature verification with the default freshness window of
/// [`DEFAULT_TOLERANCE_SECS`] (5 minutes), then parses the payload as a JSON
/// object with string keys. Business fields are returned as-is, never
/// validated or coerced.
///
/// `payload` must be the raw request body bytes exactly as received.
///
/// # Example
///
/// ```rust,ignore
/// use straddle_webhooks::{construct_event, events};
///
/// let event = construct_event(&body, &headers, &secret)?;
/// match event.get("event_type").and_then(|v| v.as_str()) {
///     Some(events::CHARGE_CREATED_V1) => handle_charge(&event["data"]),
///     _ => {}
/// }
/// ```
///
/// # Errors
///
/// Any verification failure from [`verify_header`], or
/// [`WebhookError::MalformedPayload`](crate::WebhookError::MalformedPayload)
/// if the verified payload is not a JSON object. The latter is a distinct
/// failure path: a delivery can be authentically signed yet structurally
/// invalid.
pub fn construct_event(
    payload: &[u8],
    headers: &impl HeaderLookup,
    secret: &str,
) -> Result<Map<String, Value>> {
    construct_event_with_tolerance(payload, headers, secret, Some(DEFAULT_TOLERANCE_SECS))
}

/// [`construct_event`] with an explicit timestamp tolerance.
///
/// Passing `Some(secs)` overrides the freshness window. Passing `None` skips
/// the freshness check entirely.
///
/// # Security
///
/// `None` disables replay protection: a captured delivery stays verifiable
/// forever. This is a deliberate opt-out for consumers that handle replay
/// downstream (e.g. via their own idempotency layer), not a default, and it
/// is logged as a warning on every call.
pub fn construct_event_with_tolerance(
    payload: &[u8],
    headers: &impl HeaderLookup,
    secret: &str,
    tolerance: Option<u64>,
) -> Result<Map<String, Value>> {
    verify(payload, headers, secret, tolerance)?;
    Ok(serde_json::from_slice(payload)?)
}

/// Verify a webhook delivery and deserialize the payload into a typed event.
///
/// Same verification gate as [`construct_event_with_tolerance`], with the
/// payload deserialized into the caller's event type instead of a generic
/// JSON object.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(serde::Deserialize)]
/// struct ChargeEvent {
///     event_type: String,
///     data: ChargeData,
/// }
///
/// let event: ChargeEvent =
///     construct_event_as(&body, &headers, &secret, Some(300))?;
/// ```
pub fn construct_event_as<T: DeserializeOwned>(
    payload: &[u8],
    headers: &impl HeaderLookup,
    secret: &str,
    tolerance: Option<u64>,
) -> Result<T> {
    verify(payload, headers, secret, tolerance)?;
    Ok(serde_json::from_slice(payload)?)
}

fn verify(
    payload: &[u8],
    headers: &impl HeaderLookup,
    secret: &str,
    tolerance: Option<u64>,
) -> Result<()> {
    if tolerance.is_none() {
        tracing::warn!(
            "webhook timestamp tolerance disabled - replayed deliveries will verify successfully"
        );
    }
    verify_header(payload, headers, secret, tolerance)
}
