/// The error type for webhook verification failures.
///
/// Verification is a fail-closed gate: every failure is surfaced as exactly
/// one of these variants and none are retried or swallowed internally. An
/// HTTP handler receiving any of these should reject the delivery (typically
/// with a 400) and must not process the payload's business data.
#[derive(Debug, thiserror::Error)]
pub enum WebhookError {
    /// No accepted header prefix (`svix-*` or `webhook-*`) yielded all three
    /// required headers (id, timestamp, signature).
    #[error("Missing required webhook headers")]
    MissingHeaders,

    /// The signing secret did not base64-decode after stripping the
    /// `whsec_` prefix.
    #[error("Invalid webhook secret format")]
    InvalidSecret,

    /// The timestamp header is not a valid integer.
    #[error("Invalid timestamp: {value}")]
    InvalidTimestamp { value: String },

    /// The timestamp is outside the allowed freshness window, in either
    /// direction.
    #[error("Timestamp outside tolerance zone ({diff}s > {tolerance}s)")]
    TimestampOutOfTolerance { diff: u64, tolerance: u64 },

    /// The signature header contained no `v1,`-prefixed candidates.
    #[error("No v1 signatures found")]
    NoV1Signatures { sig_header: String },

    /// No candidate signature matched the computed MAC.
    #[error("No matching signature found")]
    SignatureMismatch { sig_header: String },

    /// The payload passed verification but is not valid JSON. A delivery can
    /// be authentically signed yet structurally invalid; this variant lets
    /// callers distinguish "who sent this" from "what did they send".
    #[error("Malformed webhook payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),
}

impl WebhookError {
    /// The raw signature header value, when this failure carries one.
    ///
    /// Present on [`NoV1Signatures`](Self::NoV1Signatures) and
    /// [`SignatureMismatch`](Self::SignatureMismatch) for diagnostics.
    pub fn sig_header(&self) -> Option<&str> {
        match self {
            Self::NoV1Signatures { sig_header } | Self::SignatureMismatch { sig_header } => {
                Some(sig_header)
            }
            _ => None,
        }
    }
}

/// Result type alias for webhook verification operations.
pub type Result<T> = std::result::Result<T, WebhookError>;
