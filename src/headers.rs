use crate::error::{Result, WebhookError};
use std::collections::HashMap;

/// Accepted webhook header families, in preference order.
///
/// The extractor picks the first prefix for which a `{prefix}-id` header is
/// present and reads all three headers with that prefix; it never mixes
/// prefixes within one verification call.
pub const HEADER_PREFIXES: [&str; 2] = ["svix", "webhook"];

/// Trait for looking up webhook headers from a request
///
/// Different host frameworks expose incoming headers differently: a typed
/// header map, a plain string map, an env-style normalized dictionary.
/// Implement this trait to adapt your framework's header container.
///
/// Lookups must be case-insensitive where the container allows it; the
/// extractor additionally falls back to the uppercase/underscore form of each
/// name (`svix-id` → `SVIX_ID`) and its `HTTP_`-prefixed variant
/// (`HTTP_SVIX_ID`) so normalized and env-style maps work without an adapter
/// of their own.
///
/// # Example
///
/// ```rust,ignore
/// use straddle_webhooks::headers::HeaderLookup;
///
/// struct MyRequest { /* ... */ }
///
/// impl HeaderLookup for MyRequest {
///     fn get(&self, name: &str) -> Option<String> {
///         self.header(name).map(str::to_owned)
///     }
/// }
/// ```
pub trait HeaderLookup {
    /// Look up a single header value by name.
    fn get(&self, name: &str) -> Option<String>;
}

impl HeaderLookup for HashMap<String, String> {
    fn get(&self, name: &str) -> Option<String> {
        // Exact hit first, then a case-insensitive scan. These maps hold a
        // handful of entries, so a scan beats maintaining a lowered index.
        if let Some(value) = HashMap::get(self, name) {
            return Some(value.clone());
        }
        self.iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.clone())
    }
}

impl HeaderLookup for http::HeaderMap {
    fn get(&self, name: &str) -> Option<String> {
        // HeaderMap lookups are case-insensitive natively. Signing headers
        // are ASCII; anything else is treated as absent.
        http::HeaderMap::get(self, name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned)
    }
}

/// Look up a header, falling back to its normalized uppercase/underscore form
/// and the `HTTP_`-prefixed variant some server environments expose.
fn header_value(headers: &impl HeaderLookup, name: &str) -> Option<String> {
    headers.get(name).or_else(|| {
        let normalized = normalized_name(name);
        headers
            .get(&normalized)
            .or_else(|| headers.get(&format!("HTTP_{normalized}")))
    })
}

/// `svix-id` → `SVIX_ID`
fn normalized_name(name: &str) -> String {
    name.to_ascii_uppercase().replace('-', "_")
}

/// Extract the three signing headers (message id, timestamp, signature).
///
/// Tries the accepted prefixes in order and uses the first one for which an
/// id header is present. All three headers must come from that same prefix.
///
/// # Errors
///
/// Returns [`WebhookError::MissingHeaders`] if no accepted prefix yields all
/// three required values.
pub fn extract_headers(headers: &impl HeaderLookup) -> Result<(String, String, String)> {
    let prefix = HEADER_PREFIXES
        .iter()
        .find(|p| header_value(headers, &format!("{p}-id")).is_some())
        .ok_or(WebhookError::MissingHeaders)?;

    let msg_id = header_value(headers, &format!("{prefix}-id"));
    let timestamp = header_value(headers, &format!("{prefix}-timestamp"));
    let signature = header_value(headers, &format!("{prefix}-signature"));

    match (msg_id, timestamp, signature) {
        (Some(msg_id), Some(timestamp), Some(signature)) => Ok((msg_id, timestamp, signature)),
        _ => Err(WebhookError::MissingHeaders),
    }
}
