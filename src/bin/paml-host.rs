use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use PAMLDLL::host::{default_library_path, run_host, HostConfig, TracingSink};
use PAMLDLL::logging;

/// Load PAMLDLL, bind `Add`, and run a scene that logs `Add(a, b)` on start.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the plugin library (defaults to the platform name of PAMLDLL)
    #[arg(short, long, env = "PAML_LIBRARY")]
    library: Option<PathBuf>,

    /// First operand
    #[arg(short, long, default_value_t = 4, allow_negative_numbers = true)]
    a: i32,

    /// Second operand
    #[arg(short, long, default_value_t = 5, allow_negative_numbers = true)]
    b: i32,

    /// Number of update frames to run after start
    #[arg(short, long, default_value_t = 1)]
    frames: u64,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl From<Cli> for HostConfig {
    fn from(cli: Cli) -> Self {
        HostConfig {
            library: cli.library.unwrap_or_else(default_library_path),
            a: cli.a,
            b: cli.b,
            frames: cli.frames,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if !logging::init(if cli.verbose { "debug" } else { "info" }) {
        tracing::debug!("tracing subscriber already installed");
    }

    let config = HostConfig::from(cli);
    tracing::debug!(?config, "host configuration");

    match run_host(&config, TracingSink) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "failed to run host");
            ExitCode::FAILURE
        }
    }
}
