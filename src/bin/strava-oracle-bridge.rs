// ABOUTME: Server binary for the Strava OAuth callback to oracle request bridge
// ABOUTME: Serves the callback over HTTP or runs a single invocation from an event file
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Strava Oracle Bridge Binary
//!
//! Loads configuration from the environment (failing fast when a credential
//! is missing), then either serves `/oauth/callback` or, with `--event`,
//! handles one event and prints the response envelope.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use strava_oracle_bridge::{
    config::BridgeConfig,
    handler::{CallbackHandler, InboundEvent},
    logging, routes, server,
};
use tokio::io::AsyncReadExt;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "strava-oracle-bridge")]
#[command(about = "Exchange Strava OAuth codes and forward the token to an oracle request")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Handle a single event JSON file (`-` for stdin) and print the envelope
    #[arg(long)]
    event: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = BridgeConfig::from_env().context("Configuration error")?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    info!("{}", config.summary());

    let handler = CallbackHandler::from_config(&config)?;

    if let Some(path) = args.event {
        return invoke_once(&handler, &path).await;
    }

    if let Err(e) = server::run(routes::router(Arc::new(handler)), config.http_port).await {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}

/// Run one invocation and write the envelope to stdout
async fn invoke_once(handler: &CallbackHandler, path: &Path) -> Result<()> {
    let raw = if path.as_os_str() == "-" {
        let mut buffer = String::new();
        tokio::io::stdin().read_to_string(&mut buffer).await?;
        buffer
    } else {
        tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read event file {}", path.display()))?
    };

    let event: InboundEvent = serde_json::from_str(&raw).context("Invalid event JSON")?;
    let envelope = handler.handle(&event).await?;

    println!("{}", serde_json::to_string(&envelope)?);
    Ok(())
}
