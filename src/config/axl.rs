//! AXL session configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for the remote AXL session.
///
/// Address and credentials are normally supplied through the `CUCM_ADDRESS`,
/// `AXL_USERNAME` and `AXL_PASSWORD` environment variables; the file-based
/// fields here exist so a deployment can also pin them in `callfwd.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AxlConfig {
    /// CUCM hostname or IP. A full base URL (`scheme://host:port`) is also
    /// accepted for non-standard deployments.
    pub address: String,
    /// AXL service port, used when `address` is a bare hostname.
    pub port: u16,
    /// Basic-auth username for the AXL service account.
    pub username: String,
    /// Basic-auth password for the AXL service account.
    #[serde(skip_serializing)]
    pub password: String,
    /// Local WSDL describing the AXL contract, read once at startup.
    pub wsdl_path: PathBuf,
    /// Per-request timeout for the remote call.
    pub timeout_seconds: u64,
    /// Verify the CUCM TLS certificate. Disabled by default because CUCM
    /// ships with a self-signed Tomcat certificate; enable together with
    /// `ca_bundle` for production.
    pub verify_tls: bool,
    /// PEM file with the CUCM Tomcat certificate chain. Supplying this
    /// enables strict verification regardless of `verify_tls`.
    pub ca_bundle: Option<PathBuf>,
    /// Log every outbound SOAP request and inbound response body.
    pub trace_wire: bool,
}

impl Default for AxlConfig {
    fn default() -> Self {
        Self {
            address: String::new(),
            port: 8443,
            username: String::new(),
            password: String::new(),
            wsdl_path: PathBuf::from("schema/AXLAPI.wsdl"),
            timeout_seconds: 10,
            verify_tls: false,
            ca_bundle: None,
            trace_wire: false,
        }
    }
}

impl AxlConfig {
    /// Full URL of the AXL endpoint.
    pub fn endpoint_url(&self) -> String {
        if self.address.contains("://") {
            format!("{}/axl/", self.address.trim_end_matches('/'))
        } else {
            format!("https://{}:{}/axl/", self.address, self.port)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axl_config_defaults() {
        let config = AxlConfig::default();
        assert_eq!(config.port, 8443);
        assert_eq!(config.timeout_seconds, 10);
        assert!(!config.verify_tls);
        assert!(!config.trace_wire);
        assert_eq!(config.wsdl_path, PathBuf::from("schema/AXLAPI.wsdl"));
    }

    #[test]
    fn test_endpoint_url_from_hostname() {
        let config = AxlConfig {
            address: "cucm.example.com".into(),
            ..Default::default()
        };
        assert_eq!(config.endpoint_url(), "https://cucm.example.com:8443/axl/");
    }

    #[test]
    fn test_endpoint_url_from_full_url() {
        let config = AxlConfig {
            address: "http://127.0.0.1:9100".into(),
            ..Default::default()
        };
        assert_eq!(config.endpoint_url(), "http://127.0.0.1:9100/axl/");
    }
}
