//! CLI module for callfwd
//!
//! # Commands
//!
//! - `serve` - Start the call-forwarding console
//! - `config init` - Write a starter configuration file
//!
//! # Example
//!
//! ```bash
//! # Start with default config, credentials from the environment
//! CUCM_ADDRESS=cucm.example.com AXL_USERNAME=axluser AXL_PASSWORD=secret callfwd serve
//!
//! # Write a commented callfwd.toml to edit
//! callfwd config init
//! ```

pub mod config;
pub mod serve;

pub use config::handle_config_init;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Callfwd - call-forwarding console for CUCM
#[derive(Parser, Debug)]
#[command(
    name = "callfwd",
    version,
    about = "Self-service call-forwarding console for Cisco CUCM"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the server
    Serve(ServeArgs),
    /// Configuration utilities
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "callfwd.toml")]
    pub config: PathBuf,

    /// Override server port
    #[arg(short, long, env = "CALLFWD_PORT")]
    pub port: Option<u16>,

    /// Override bind address
    #[arg(long, env = "CALLFWD_HOST")]
    pub host: Option<String>,

    /// Override log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log every SOAP request and response body
    #[arg(long)]
    pub trace_wire: bool,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Write a starter configuration file
    Init(ConfigInitArgs),
}

#[derive(Args, Debug)]
pub struct ConfigInitArgs {
    /// Where to write the file
    #[arg(short, long, default_value = "callfwd.toml")]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(short, long)]
    pub force: bool,
}
