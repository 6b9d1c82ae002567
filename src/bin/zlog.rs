//! `zlog` binary: one leveled line per invocation.
//!
//! Usage:
//!   zlog [--config PATH] [--caller PATH] [--color MODE] <LEVEL> [MESSAGE]...

use clap::Parser;
use std::process::ExitCode;
use zlog::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Thresholds and overrides come from config, so it must load before anything is logged
    let config = match cli.load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            return ExitCode::FAILURE;
        }
    };

    zlog::configure(&config);
    cli.run(zlog::global())
}
