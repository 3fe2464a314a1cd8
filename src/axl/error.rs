//! Error types for AXL operations.

use thiserror::Error;

/// Errors that can occur while talking to the AXL service.
#[derive(Error, Debug)]
pub enum AxlError {
    /// The service explicitly rejected the operation with a SOAP fault.
    #[error("AXL fault {code}: {message}")]
    Fault { code: String, message: String },

    /// Network connectivity error (DNS, connection refused, TLS handshake).
    #[error("Network error: {0}")]
    Network(String),

    /// Request exceeded the configured deadline.
    #[error("Request timeout after {0}s")]
    Timeout(u64),

    /// The endpoint answered with a non-SOAP error response.
    #[error("Unexpected HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// Response body doesn't match the expected SOAP shape.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// The local WSDL is missing or unusable. Startup-fatal.
    #[error("Schema error: {0}")]
    Schema(String),

    /// TLS material (CA bundle) could not be loaded.
    #[error("TLS configuration error: {0}")]
    Tls(String),

    /// The endpoint did not answer at bind time. Startup-fatal.
    #[error("AXL endpoint unreachable: {0}")]
    Unreachable(String),

    /// SOAP envelope construction failed.
    #[error("SOAP encoding error: {0}")]
    Encode(String),
}

impl AxlError {
    /// Short machine-readable code used in failure pages.
    pub fn code(&self) -> &'static str {
        match self {
            AxlError::Fault { .. } => "axl_fault",
            AxlError::Network(_) => "transport_error",
            AxlError::Timeout(_) => "transport_timeout",
            AxlError::Http { .. } => "upstream_http",
            AxlError::InvalidResponse(_) => "invalid_response",
            AxlError::Schema(_) => "schema_error",
            AxlError::Tls(_) => "tls_error",
            AxlError::Unreachable(_) => "endpoint_unreachable",
            AxlError::Encode(_) => "encode_error",
        }
    }
}
