//! Reasons a raw string is not accepted as a Reddit link.

/// Errors that can occur during link normalization.
///
/// [`crate::normalize`] turns every variant into `None`; the variants exist so
/// that callers and logs can tell why an input was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NormalizeError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed, got `{0}`")]
    UnsupportedScheme(String),

    #[error("Host `{0}` is not a reddit host")]
    ForeignHost(String),

    #[error("Subdomain `{0}` belongs to a separate reddit service")]
    ServiceSubdomain(String),

    #[error("Host `{0}` has more than one unrecognized subdomain")]
    NestedSubdomain(String),
}
