use std::path::PathBuf;

use clap::Parser;

/// Front end assets shipped with this crate.
pub const DEFAULT_STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/static");

#[derive(Debug, Clone, Parser)]
#[command(name = "mergington-server", about = "Mergington High School activities API")]
pub struct ServerConfig {
    /// Address the HTTP server listens on
    #[arg(long, env = "BIND_ADDRESS", default_value = "0.0.0.0:8000")]
    pub bind_address: String,

    /// Directory served under /static
    #[arg(long, env = "STATIC_DIR", default_value = DEFAULT_STATIC_DIR)]
    pub static_dir: PathBuf,

    /// Print a colored log of every signup and removal
    #[arg(long, env = "MONITORING")]
    pub monitoring: bool,
}
