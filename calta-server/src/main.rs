mod cli;
mod error;
mod routes;
mod source;

use std::{env, sync::Arc};

use anyhow::Context;
use axum_server::{tls_rustls::RustlsConfig, Handle};
use log::{error, info, warn};
use reqwest::Client;
use tokio::{net::TcpListener, signal};

use crate::{
    cli::Invocation,
    routes::{router, AppState},
};

const DEFAULT_LOG: &str = "calta_server=info,calta_schedule=info";

fn setup_logging() {
    let filters = env::var("LOG").unwrap_or_else(|_| DEFAULT_LOG.to_string());

    pretty_env_logger::formatted_builder()
        .parse_filters(&filters)
        .init();
}

async fn shutdown_signal() {
    if let Err(err) = signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }

    info!("Shutting down");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_logging();

    let args = match cli::parse(env::args().skip(1), |key| env::var(key).ok())
        .context("Invalid configuration")?
    {
        Invocation::Help(usage) => {
            println!("{usage}");
            return Ok(());
        }
        Invocation::Serve(args) => args,
    };

    let public_dir = if args.public_dir.is_dir() {
        Some(args.public_dir.as_path())
    } else {
        warn!("No public directory at {}", args.public_dir.display());
        None
    };

    let client = Client::builder()
        .build()
        .context("Failed to build HTTP client")?;

    info!("Reading schedule from {}", args.source);

    let state = AppState {
        source: Arc::new(args.source),
        client,
    };

    let router = router(state, public_dir);

    match args.tls {
        Some(tls) => {
            let config = RustlsConfig::from_pem_file(&tls.cert, &tls.key)
                .await
                .with_context(|| {
                    format!(
                        "Failed to load TLS certificate {} and key {}",
                        tls.cert.display(),
                        tls.key.display()
                    )
                })?;

            let handle = Handle::new();
            let shutdown = handle.clone();
            tokio::spawn(async move {
                shutdown_signal().await;
                shutdown.graceful_shutdown(None);
            });

            info!("Listening at https://{}", args.address);
            axum_server::bind_rustls(args.address, config)
                .handle(handle)
                .serve(router.into_make_service())
                .await
                .with_context(|| format!("Failed to serve on {}", args.address))?;
        }
        None => {
            let listener = TcpListener::bind(args.address)
                .await
                .with_context(|| format!("Failed to bind {}", args.address))?;
            info!("Listening at http://{}", args.address);

            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;
        }
    }

    Ok(())
}
