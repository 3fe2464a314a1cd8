//! Callfwd - self-service call-forwarding console for Cisco CUCM.
//!
//! This library bridges a small HTML form to a single remote administrative
//! operation: the AXL `updateLine` SOAP call. A submission carries a directory
//! number and a forwarding destination (typed directly, or resolved from a
//! floor-to-extension map); the orchestrator issues exactly one remote call
//! and renders the outcome back as a page.

pub mod axl;
pub mod cli;
pub mod config;
pub mod extensions;
pub mod forwarding;
pub mod web;
