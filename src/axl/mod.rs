//! AXL session layer.
//!
//! This module provides the `LineForwarding` trait and the HTTP/SOAP client
//! that implements it against a CUCM AXL endpoint. The trait deliberately
//! exposes only the one operation this application uses, with typed request
//! and response shapes, instead of the full dynamic surface of the AXL
//! contract.

use async_trait::async_trait;

pub mod client;
pub mod error;
pub mod schema;
pub mod soap;

pub use client::AxlClient;
pub use error::AxlError;
pub use schema::AxlSchema;

/// Outcome of a successful `updateLine` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateLineResponse {
    /// The pkid of the updated line record, when the service returns one.
    pub record_id: Option<String>,
}

/// The single AXL operation this application performs.
///
/// Object-safe so it can be shared as `Arc<dyn LineForwarding>`; the live
/// implementation is [`AxlClient`], tests substitute their own.
#[async_trait]
pub trait LineForwarding: Send + Sync + 'static {
    /// Set every call-forward condition of the line identified by `pattern`
    /// to `destination`.
    ///
    /// Applies the same destination uniformly to all six forwarding variants
    /// (busy, no-answer, not-registered, each with its internal counterpart)
    /// in one remote call. Exactly one request is issued; there is no retry.
    ///
    /// # Returns
    ///
    /// - `Ok(UpdateLineResponse)` when the service accepted the update
    /// - `Err(AxlError::Fault)` when the service rejected it with a SOAP fault
    /// - `Err(AxlError::Timeout)` / `Err(AxlError::Network)` on transport failure
    async fn update_line_forwarding(
        &self,
        pattern: &str,
        destination: &str,
    ) -> Result<UpdateLineResponse, AxlError>;
}
