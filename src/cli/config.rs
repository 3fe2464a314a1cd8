//! Config init command implementation

use crate::cli::ConfigInitArgs;
use anyhow::{bail, Context};

const SAMPLE_CONFIG: &str = r#"# callfwd configuration
#
# Credentials may also come from the environment:
#   CUCM_ADDRESS, AXL_USERNAME, AXL_PASSWORD

[server]
host = "0.0.0.0"
port = 5000

[axl]
# CUCM hostname or IP (AXL service assumed on port 8443)
address = ""
username = ""
password = ""
# Local copy of the AXL WSDL, downloaded from the CUCM plugins page
wsdl_path = "schema/AXLAPI.wsdl"
timeout_seconds = 10
# CUCM ships a self-signed certificate, so verification is off by default.
# For production, point ca_bundle at the Tomcat certificate .pem instead.
verify_tls = false
# ca_bundle = "cucm-tomcat.pem"
# Log full SOAP request/response bodies
trace_wire = false

[mapping]
# When enabled, the form offers floor names from the JSON map below
enabled = true
path = "extension-mapping.json"

[logging]
level = "info"
format = "pretty"
"#;

/// Write a starter configuration file.
pub fn handle_config_init(args: &ConfigInitArgs) -> Result<(), anyhow::Error> {
    if args.output.exists() && !args.force {
        bail!(
            "{} already exists (use --force to overwrite)",
            args.output.display()
        );
    }
    std::fs::write(&args.output, SAMPLE_CONFIG)
        .with_context(|| format!("cannot write {}", args.output.display()))?;
    println!("Wrote {}", args.output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CallfwdConfig;

    #[test]
    fn test_sample_config_parses() {
        let config: CallfwdConfig = toml::from_str(SAMPLE_CONFIG).unwrap();
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.axl.timeout_seconds, 10);
        assert!(config.mapping.enabled);
        assert!(!config.axl.verify_tls);
    }
}
