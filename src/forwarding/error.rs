//! Resolution error types.

use crate::extensions::ExtensionMapError;
use thiserror::Error;

/// Failures while resolving a submission to a dialable destination.
///
/// All of these occur before any remote call is attempted.
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("no forwarding destination was provided")]
    EmptyDestination,

    #[error("floor '{0}' is not in the extension map")]
    UnknownFloor(String),

    #[error("a floor selection was submitted but floor mapping is disabled")]
    MappingDisabled,

    #[error(transparent)]
    Map(#[from] ExtensionMapError),
}

impl ResolveError {
    /// Short machine-readable code used in failure pages.
    pub fn code(&self) -> &'static str {
        match self {
            ResolveError::EmptyDestination => "empty_destination",
            ResolveError::UnknownFloor(_) => "floor_not_found",
            ResolveError::MappingDisabled => "mapping_disabled",
            ResolveError::Map(_) => "extension_map_error",
        }
    }
}
