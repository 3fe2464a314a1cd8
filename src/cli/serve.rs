//! Serve command implementation

use crate::axl::AxlClient;
use crate::cli::ServeArgs;
use crate::config::{CallfwdConfig, LogFormat, LoggingConfig};
use crate::forwarding::Orchestrator;
use crate::web::{create_router, AppState};
use anyhow::Context;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Load configuration with CLI overrides
pub fn load_config_with_overrides(args: &ServeArgs) -> Result<CallfwdConfig, anyhow::Error> {
    // Load from file if it exists, otherwise use defaults
    let mut config = if args.config.exists() {
        CallfwdConfig::load(Some(&args.config))?
    } else {
        CallfwdConfig::default()
    };

    // Apply environment variable overrides
    config = config.with_env_overrides();

    // Apply CLI overrides (highest priority)
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(ref host) = args.host {
        config.server.host = host.clone();
    }
    if let Some(ref log_level) = args.log_level {
        config.logging.level = log_level.clone();
    }
    if args.trace_wire {
        config.axl.trace_wire = true;
    }

    Ok(config)
}

/// Initialize tracing based on configuration
pub fn init_tracing(config: &LoggingConfig) -> Result<(), anyhow::Error> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format {
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .try_init()?;
        }
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .try_init()?;
        }
    }

    Ok(())
}

/// Run the server until the process is terminated.
///
/// The AXL session is bootstrapped exactly once here; a bootstrap failure
/// aborts startup before the listener is bound.
pub async fn run_serve(args: &ServeArgs) -> Result<(), anyhow::Error> {
    let config = load_config_with_overrides(args)?;
    init_tracing(&config.logging)?;
    config.validate()?;

    let client = AxlClient::connect(&config.axl)
        .await
        .context("AXL session bootstrap failed")?;
    tracing::info!(endpoint = %config.axl.endpoint_url(), "AXL session established");

    let orchestrator = Orchestrator::new(Arc::new(client), config.mapping.clone());
    let state = Arc::new(AppState::new(orchestrator, config.mapping.clone()));
    let app = create_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("cannot bind {}", addr))?;
    tracing::info!(
        addr = %addr,
        mapping_enabled = config.mapping.enabled,
        "callfwd listening"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
