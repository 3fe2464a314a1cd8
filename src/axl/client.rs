//! Live AXL client implementation.

use crate::axl::error::AxlError;
use crate::axl::schema::AxlSchema;
use crate::axl::{soap, LineForwarding, UpdateLineResponse};
use crate::config::AxlConfig;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;

/// Wire trace target, so the very chatty body logging can be filtered
/// independently of the rest of the crate.
const WIRE_TARGET: &str = "callfwd::axl::wire";

/// The process-wide AXL session.
///
/// Constructed once at startup by [`AxlClient::connect`] and shared read-only
/// by every request handler. The inner `reqwest::Client` pools connections
/// and is safe for concurrent reuse.
#[derive(Debug)]
pub struct AxlClient {
    http: reqwest::Client,
    endpoint: String,
    namespace: String,
    soap_action: String,
    username: String,
    password: String,
    timeout_seconds: u64,
    trace_wire: bool,
}

impl AxlClient {
    /// Bootstrap the AXL session.
    ///
    /// Loads the local WSDL, builds the HTTP client with the configured TLS
    /// policy, and probes the endpoint. Any failure here is startup-fatal:
    /// the caller must not serve requests with a half-constructed session.
    pub async fn connect(config: &AxlConfig) -> Result<Self, AxlError> {
        let schema = AxlSchema::load(&config.wsdl_path)?;
        tracing::info!(
            namespace = %schema.namespace,
            version = %schema.version,
            wsdl = %config.wsdl_path.display(),
            "loaded AXL schema descriptor"
        );

        let mut builder =
            reqwest::Client::builder().timeout(Duration::from_secs(config.timeout_seconds));

        if let Some(ca_path) = &config.ca_bundle {
            // A CA bundle implies strict verification with that root.
            let pem = std::fs::read(ca_path).map_err(|e| {
                AxlError::Tls(format!("cannot read {}: {}", ca_path.display(), e))
            })?;
            let cert = reqwest::Certificate::from_pem(&pem)
                .map_err(|e| AxlError::Tls(e.to_string()))?;
            builder = builder.add_root_certificate(cert);
        } else if !config.verify_tls {
            // CUCM ships a self-signed Tomcat certificate; verification is
            // off unless a trusted bundle is supplied.
            builder = builder.danger_accept_invalid_certs(true);
        }

        let http = builder
            .build()
            .map_err(|e| AxlError::Network(e.to_string()))?;

        let client = Self {
            http,
            endpoint: config.endpoint_url(),
            soap_action: schema.soap_action("updateLine"),
            namespace: schema.namespace,
            username: config.username.clone(),
            password: config.password.clone(),
            timeout_seconds: config.timeout_seconds,
            trace_wire: config.trace_wire,
        };
        client.probe().await?;
        Ok(client)
    }

    /// Verify the endpoint answers at all.
    ///
    /// Any HTTP status counts as reachable (an unauthenticated GET to the
    /// AXL path normally returns 401); only connect-level failures are fatal.
    async fn probe(&self) -> Result<(), AxlError> {
        match self.http.get(&self.endpoint).send().await {
            Ok(response) => {
                tracing::debug!(
                    endpoint = %self.endpoint,
                    status = %response.status(),
                    "AXL endpoint reachable"
                );
                Ok(())
            }
            Err(e) if e.is_timeout() => Err(AxlError::Timeout(self.timeout_seconds)),
            Err(e) => Err(AxlError::Unreachable(e.to_string())),
        }
    }

    fn map_send_error(&self, e: reqwest::Error) -> AxlError {
        if e.is_timeout() {
            AxlError::Timeout(self.timeout_seconds)
        } else {
            AxlError::Network(e.to_string())
        }
    }
}

#[async_trait]
impl LineForwarding for AxlClient {
    async fn update_line_forwarding(
        &self,
        pattern: &str,
        destination: &str,
    ) -> Result<UpdateLineResponse, AxlError> {
        let body = soap::build_update_line(&self.namespace, pattern, destination)?;

        if self.trace_wire {
            tracing::debug!(
                target: WIRE_TARGET,
                endpoint = %self.endpoint,
                soap_action = %self.soap_action,
                body = %body,
                "outbound updateLine request"
            );
        }

        let response = self
            .http
            .post(&self.endpoint)
            .basic_auth(&self.username, Some(&self.password))
            .header(CONTENT_TYPE, "text/xml; charset=utf-8")
            .header("SOAPAction", &self.soap_action)
            .body(body)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| AxlError::InvalidResponse(e.to_string()))?;

        if self.trace_wire {
            tracing::debug!(
                target: WIRE_TARGET,
                status = %status,
                body = %text,
                "inbound updateLine response"
            );
        }

        // Faults arrive as HTTP 500 with a SOAP body, so parse first and only
        // fall back to the raw status when the body is not SOAP at all.
        match soap::parse_update_line_response(&text) {
            Ok(parsed) => Ok(parsed),
            Err(AxlError::InvalidResponse(detail)) if !status.is_success() => {
                Err(AxlError::Http {
                    status: status.as_u16(),
                    message: detail,
                })
            }
            Err(e) => Err(e),
        }
    }
}
