//! Forwarding-update orchestration.
//!
//! The core of the application: resolve the submitted target to a dialable
//! destination, issue exactly one remote `updateLine` call, and translate the
//! result into a presentation-ready [`UpdateOutcome`]. Every failure path
//! produces an outcome rather than an error, so the web layer never has to
//! surface a raw server error.

pub mod error;

pub use error::ResolveError;

use crate::axl::{AxlError, LineForwarding};
use crate::config::MappingConfig;
use crate::extensions::ExtensionMap;
use std::sync::Arc;

/// The forwarding destination as submitted by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ForwardingTarget {
    /// A dialable number typed directly into the form.
    Number(String),
    /// A floor name to resolve through the extension map.
    Floor(String),
}

/// One form submission: which line to change, and where to forward it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForwardingSubmission {
    /// Directory-number pattern identifying the line record.
    pub pattern: String,
    pub target: ForwardingTarget,
}

/// Terminal result of handling one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The remote service accepted the update; echoes the submitted values.
    Success { pattern: String, destination: String },
    /// The update did not happen; `code` is a short machine-readable kind.
    Failure { message: String, code: String },
}

impl UpdateOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, UpdateOutcome::Success { .. })
    }
}

/// The forwarding-update orchestrator.
///
/// Holds the shared AXL session handle and the mapping configuration. One
/// instance serves every request; it keeps no per-request state.
pub struct Orchestrator {
    client: Arc<dyn LineForwarding>,
    mapping: MappingConfig,
}

impl Orchestrator {
    pub fn new(client: Arc<dyn LineForwarding>, mapping: MappingConfig) -> Self {
        Self { client, mapping }
    }

    /// Handle one submission end to end.
    ///
    /// Resolution failures short-circuit before any remote call; otherwise
    /// exactly one `updateLine` invocation is made, with no retry on failure.
    pub async fn handle(&self, submission: ForwardingSubmission) -> UpdateOutcome {
        let pattern = submission.pattern.trim().to_string();
        if pattern.is_empty() {
            return UpdateOutcome::Failure {
                message: "No phone number was provided".to_string(),
                code: "empty_pattern".to_string(),
            };
        }

        let destination = match self.resolve(&submission.target) {
            Ok(destination) => destination,
            Err(e) => {
                tracing::warn!(pattern = %pattern, error = %e, "destination resolution failed");
                return UpdateOutcome::Failure {
                    message: e.to_string(),
                    code: e.code().to_string(),
                };
            }
        };

        match self
            .client
            .update_line_forwarding(&pattern, &destination)
            .await
        {
            Ok(response) => {
                tracing::info!(
                    pattern = %pattern,
                    destination = %destination,
                    record_id = ?response.record_id,
                    "forwarding updated"
                );
                UpdateOutcome::Success {
                    pattern,
                    destination,
                }
            }
            Err(AxlError::Fault { code, message }) => {
                tracing::warn!(
                    pattern = %pattern,
                    destination = %destination,
                    fault_code = %code,
                    fault_message = %message,
                    "updateLine rejected by AXL"
                );
                UpdateOutcome::Failure {
                    message: format!(
                        "There was an issue updating {} with the forwarding number {}: {}",
                        pattern, destination, message
                    ),
                    code,
                }
            }
            Err(e) => {
                tracing::error!(
                    pattern = %pattern,
                    destination = %destination,
                    error = %e,
                    "updateLine transport failure"
                );
                UpdateOutcome::Failure {
                    message: format!(
                        "There was an issue updating {} with the forwarding number {}: {}",
                        pattern, destination, e
                    ),
                    code: e.code().to_string(),
                }
            }
        }
    }

    /// Resolve the submitted target to a dialable destination.
    ///
    /// In map mode the extension file is re-read here, once per submission.
    /// An unknown floor is an explicit resolution failure; the remote call is
    /// never attempted with an unresolved destination.
    fn resolve(&self, target: &ForwardingTarget) -> Result<String, ResolveError> {
        match target {
            ForwardingTarget::Number(number) => {
                let number = number.trim();
                if number.is_empty() {
                    Err(ResolveError::EmptyDestination)
                } else {
                    Ok(number.to_string())
                }
            }
            ForwardingTarget::Floor(floor) => {
                if !self.mapping.enabled {
                    return Err(ResolveError::MappingDisabled);
                }
                let map = ExtensionMap::load(&self.mapping.path)?;
                map.resolve(floor)
                    .map(str::to_string)
                    .ok_or_else(|| ResolveError::UnknownFloor(floor.clone()))
            }
        }
    }
}
