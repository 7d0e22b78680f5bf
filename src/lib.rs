//! straddle-webhooks - Svix-compatible webhook verification for Straddle
//!
//! Authenticates inbound webhook deliveries from the Straddle payment
//! platform: verifies the HMAC-SHA256 signature over the raw payload,
//! enforces a timestamp freshness window against replays, and hands back the
//! parsed event.
//!
//! The verifier is a pure function of its inputs: no I/O, no shared state,
//! safe to call concurrently from any number of threads or tasks.
//!
//! # Features
//!
//! - **Verification**: HMAC-SHA256 over `{id}.{timestamp}.{payload}` with
//!   constant-time comparison
//! - **Secret rotation**: any one of multiple `v1,` signature candidates
//!   is sufficient
//! - **Replay protection**: symmetric timestamp tolerance, 5 minutes by
//!   default
//! - **Header flexibility**: accepts both the `svix-*` and `webhook-*`
//!   header families, case-insensitively, from any [`HeaderLookup`] adapter
//! - **Testing**: [`generate_header`] and [`generate_secret`] produce
//!   deliveries your consumer tests can verify end to end
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use straddle_webhooks::{construct_event, events};
//! # fn handle(body: &[u8], headers: &http::HeaderMap) -> straddle_webhooks::Result<()> {
//! let secret = std::env::var("STRADDLE_WEBHOOK_SECRET").unwrap_or_default();
//!
//! // `body` must be the raw request bytes, untouched.
//! let event = construct_event(body, headers, &secret)?;
//!
//! match event.get("event_type").and_then(|v| v.as_str()) {
//!     Some(events::CHARGE_CREATED_V1) => { /* handle the charge */ }
//!     _ => {}
//! }
//! # Ok(())
//! # }
//! ```
//!
//! On any verification failure the delivery must be rejected (typically with
//! an HTTP 400) without touching the payload's business data. Duplicate
//! deliveries of the same message id are possible by design; idempotent
//! processing is the consumer's responsibility.

mod error;
pub mod event;
pub mod events;
pub mod headers;
pub mod signature;

// Re-exports for public API
pub use error::{Result, WebhookError};
pub use event::{
    construct_event, construct_event_as, construct_event_with_tolerance, DEFAULT_TOLERANCE_SECS,
};
pub use headers::{HeaderLookup, HEADER_PREFIXES};
pub use signature::{
    compute_signature, generate_header, generate_secret, verify_header, WebhookHeaders,
    SECRET_PREFIX,
};
