//! Shared test utilities for callfwd integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use callfwd::axl::{AxlError, LineForwarding, UpdateLineResponse};
use callfwd::config::MappingConfig;
use callfwd::forwarding::Orchestrator;
use callfwd::web::{create_router, AppState};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

/// A WSDL snippet with just enough structure for the schema loader.
pub const TEST_WSDL: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<definitions xmlns="http://schemas.xmlsoap.org/wsdl/"
             targetNamespace="http://www.cisco.com/AXL/API/14.0">
    <types/>
</definitions>"#;

/// A successful updateLine response envelope.
pub const SUCCESS_ENVELOPE: &str = r#"<?xml version="1.0"?>
<soapenv:Envelope xmlns:soapenv="http://schemas.xmlsoap.org/soap/envelope/">
  <soapenv:Body>
    <ns:updateLineResponse xmlns:ns="http://www.cisco.com/AXL/API/14.0">
      <return>{12345678-1234-1234-1234-123456789012}</return>
    </ns:updateLineResponse>
  </soapenv:Body>
</soapenv:Envelope>"#;

/// An AXL fault envelope for an unknown line.
pub const FAULT_ENVELOPE: &str = r#"<?xml version="1.0"?>
<soapenv:Envelope xmlns:soapenv="http://schemas.xmlsoap.org/soap/envelope/">
  <soapenv:Body>
    <soapenv:Fault>
      <faultcode>soapenv:Client</faultcode>
      <faultstring>Item not valid</faultstring>
      <detail>
        <axlError>
          <axlcode>5007</axlcode>
          <axlmessage>Item not valid: the specified Line was not found</axlmessage>
        </axlError>
      </detail>
    </soapenv:Fault>
  </soapenv:Body>
</soapenv:Envelope>"#;

/// Write the test WSDL into `dir` and return its path.
pub fn write_wsdl(dir: &Path) -> PathBuf {
    let path = dir.join("AXLAPI.wsdl");
    std::fs::write(&path, TEST_WSDL).unwrap();
    path
}

/// Write an extension map into `dir` and return a mapping config using it.
pub fn mapping_with(dir: &TempDir, json: &str) -> MappingConfig {
    let path = dir.path().join("extension-mapping.json");
    std::fs::write(&path, json).unwrap();
    MappingConfig {
        enabled: true,
        path,
    }
}

/// Mapping disabled, pointing nowhere.
pub fn mapping_disabled() -> MappingConfig {
    MappingConfig {
        enabled: false,
        path: PathBuf::from("/nonexistent/extension-mapping.json"),
    }
}

/// Scripted stand-in for the AXL session; records every call.
pub struct MockLineClient {
    pub calls: Mutex<Vec<(String, String)>>,
    response: MockResponse,
}

enum MockResponse {
    Success,
    Fault { code: String, message: String },
    Timeout,
}

impl MockLineClient {
    pub fn succeeding() -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            response: MockResponse::Success,
        })
    }

    pub fn faulting(code: &str, message: &str) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            response: MockResponse::Fault {
                code: code.to_string(),
                message: message.to_string(),
            },
        })
    }

    pub fn timing_out() -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            response: MockResponse::Timeout,
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl LineForwarding for MockLineClient {
    async fn update_line_forwarding(
        &self,
        pattern: &str,
        destination: &str,
    ) -> Result<UpdateLineResponse, AxlError> {
        self.calls
            .lock()
            .unwrap()
            .push((pattern.to_string(), destination.to_string()));
        match &self.response {
            MockResponse::Success => Ok(UpdateLineResponse {
                record_id: Some("{pkid}".to_string()),
            }),
            MockResponse::Fault { code, message } => Err(AxlError::Fault {
                code: code.clone(),
                message: message.clone(),
            }),
            MockResponse::Timeout => Err(AxlError::Timeout(10)),
        }
    }
}

/// Build the application router around a mock client.
pub fn test_app(client: Arc<MockLineClient>, mapping: MappingConfig) -> axum::Router {
    let orchestrator = Orchestrator::new(client, mapping.clone());
    let state = Arc::new(AppState::new(orchestrator, mapping));
    create_router(state)
}
