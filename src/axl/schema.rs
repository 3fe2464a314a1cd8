//! WSDL descriptor loading.
//!
//! The AXL WSDL is a large generated document; the only facts the client
//! needs from it are the API namespace and its version (the version goes
//! into the `SOAPAction` header). The file is still required to be present
//! and well-formed at startup so a misdeployed instance fails before it
//! serves a single request.

use crate::axl::error::AxlError;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::path::Path;

/// Namespace prefix shared by every AXL API revision.
const AXL_NAMESPACE_PREFIX: &str = "http://www.cisco.com/AXL/API/";

/// The facts extracted from the local AXL WSDL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxlSchema {
    /// Target namespace, e.g. `http://www.cisco.com/AXL/API/14.0`.
    pub namespace: String,
    /// Schema version, e.g. `14.0`.
    pub version: String,
}

impl AxlSchema {
    /// Read and parse the WSDL at `path`.
    pub fn load(path: &Path) -> Result<Self, AxlError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AxlError::Schema(format!("cannot read {}: {}", path.display(), e)))?;
        Self::parse(&content)
    }

    /// Extract the AXL target namespace from WSDL text.
    pub fn parse(wsdl: &str) -> Result<Self, AxlError> {
        let mut reader = Reader::from_str(wsdl);
        loop {
            match reader.read_event() {
                Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                    for attr in e.attributes().flatten() {
                        if attr.key.local_name().as_ref() != b"targetNamespace" {
                            continue;
                        }
                        let value = attr
                            .unescape_value()
                            .map_err(|e| AxlError::Schema(e.to_string()))?;
                        if let Some(version) = value.strip_prefix(AXL_NAMESPACE_PREFIX) {
                            return Ok(Self {
                                namespace: value.to_string(),
                                version: version.to_string(),
                            });
                        }
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(AxlError::Schema(format!("malformed WSDL: {}", e)));
                }
                _ => {}
            }
        }
        Err(AxlError::Schema(
            "no AXL target namespace found in WSDL".to_string(),
        ))
    }

    /// `SOAPAction` header value for an operation at this schema version.
    pub fn soap_action(&self, operation: &str) -> String {
        format!("CUCM:DB ver={} {}", self.version, operation)
    }
}
