//
//  podio
//  main.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use podio::cli::{Cli, Commands};
use podio::{exit_codes, PodioError};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    init_logging();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Execute command
    let result = run(cli).await;

    // Handle result and exit
    match result {
        Ok(()) => std::process::exit(exit_codes::SUCCESS),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(exit_code(&e));
        }
    }
}

/// Initialize logging based on environment
fn init_logging() {
    let filter = EnvFilter::try_from_env("PODIO_DEBUG")
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Maps API failures onto the documented exit codes
fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<PodioError>().and_then(PodioError::status) {
        Some(401) | Some(403) => exit_codes::AUTH_ERROR,
        Some(404) => exit_codes::NOT_FOUND,
        _ => exit_codes::ERROR,
    }
}

/// Main command dispatcher
async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Auth(cmd) => cmd.run(&cli.global).await,
        Commands::Org(cmd) => cmd.run(&cli.global).await,
        Commands::Space(cmd) => cmd.run(&cli.global).await,
        Commands::App(cmd) => cmd.run(&cli.global).await,
        Commands::Item(cmd) => cmd.run(&cli.global).await,
        Commands::Comment(cmd) => cmd.run(&cli.global).await,
        Commands::File(cmd) => cmd.run(&cli.global).await,
        Commands::Version => {
            println!("podio version {}", podio::VERSION);
            Ok(())
        }
    }
}
