//! Webhook event type constants for the Straddle platform.
//!
//! Pure reference data: compare against the `event_type` field of a verified
//! event instead of scattering string literals.
//!
//! ```rust,ignore
//! use straddle_webhooks::events;
//!
//! match event.get("event_type").and_then(|v| v.as_str()) {
//!     Some(events::CHARGE_CREATED_V1) => handle_new_charge(&event["data"]),
//!     Some(events::CHARGE_EVENT_V1) => handle_charge_update(&event["data"]),
//!     _ => {}
//! }
//! ```

// Embed
pub const ACCOUNT_CREATED_V1: &str = "account.created.v1";
pub const ACCOUNT_EVENT_V1: &str = "account.event.v1";
pub const REPRESENTATIVE_CREATED_V1: &str = "representative.created.v1";
pub const REPRESENTATIVE_EVENT_V1: &str = "representative.event.v1";
pub const LINKED_BANK_ACCOUNT_CREATED_V1: &str = "linked_bank_account.created.v1";
pub const LINKED_BANK_ACCOUNT_EVENT_V1: &str = "linked_bank_account.event.v1";
pub const CAPABILITY_REQUEST_CREATED_V1: &str = "capability_request.created.v1";
pub const CAPABILITY_REQUEST_EVENT_V1: &str = "capability_request.event.v1";

// Core
pub const CUSTOMER_CREATED_V1: &str = "customer.created.v1";
pub const CUSTOMER_EVENT_V1: &str = "customer.event.v1";
pub const PAYKEY_CREATED_V1: &str = "paykey.created.v1";
pub const PAYKEY_EVENT_V1: &str = "paykey.event.v1";
pub const CHARGE_CREATED_V1: &str = "charge.created.v1";
pub const CHARGE_EVENT_V1: &str = "charge.event.v1";
pub const PAYOUT_CREATED_V1: &str = "payout.created.v1";
pub const PAYOUT_EVENT_V1: &str = "payout.event.v1";

// Funding
pub const FUNDING_EVENT_CREATED_V1: &str = "funding_event.created.v1";
pub const FUNDING_EVENT_EVENT_V1: &str = "funding_event.event.v1";
