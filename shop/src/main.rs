//! Storefront replay host
//!
//! Replays a newline-delimited stream of shop actions through a [`Store`] and
//! prints the resulting state as JSON on stdout.
//!
//! ```bash
//! STOREFRONT_CATALOG=catalog.json storefront < actions.ndjson
//! ```

use anyhow::Context;
use shop::config::DEFAULT_LOG_FILTER;
use shop::{ShopConfig, ShopReducer, ShopState, decode_action_stream, decode_catalog, encode_state};
use storefront_core::ActionKind;
use storefront_runtime::Store;
use storefront_runtime::metrics::MetricsRecorder;
use tokio::io::AsyncReadExt;
use tokio::sync::broadcast::error::RecvError;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ShopConfig::from_env();

    let (filter, filter_error) = match config.env_filter() {
        Ok(filter) => (filter, None),
        Err(e) => (EnvFilter::new(DEFAULT_LOG_FILTER), Some(e)),
    };

    // Logs go to stderr so stdout carries only the final state
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Some(error) = filter_error {
        tracing::warn!(
            %error,
            filter = %config.log_filter,
            default = DEFAULT_LOG_FILTER,
            "Invalid STOREFRONT_LOG, using default filter"
        );
    }

    tracing::info!(?config, "Starting storefront");

    let mut recorder = MetricsRecorder::new();
    if config.metrics_enabled {
        recorder
            .install()
            .context("Failed to install metrics recorder")?;
    }

    let store = Store::with_config(ShopState::default(), ShopReducer::new(), config.store_config());

    let mut actions = store.subscribe_actions();
    let logger = tokio::spawn(async move {
        loop {
            match actions.recv().await {
                Ok(action) => tracing::info!(kind = action.kind(), "Applied action"),
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "Action log fell behind");
                }
                Err(RecvError::Closed) => break,
            }
        }
    });

    if let Some(path) = &config.catalog_path {
        let raw = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read catalog {}", path.display()))?;
        let catalog = decode_catalog(&raw)
            .with_context(|| format!("Failed to decode catalog {}", path.display()))?;

        tracing::info!(
            products = catalog.products.len(),
            categories = catalog.categories.len(),
            "Seeding catalog"
        );
        for action in catalog.into_actions() {
            store.send(action).await?;
        }
    }

    let input = match &config.actions_path {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read actions {}", path.display()))?,
        None => {
            let mut buf = String::new();
            tokio::io::stdin()
                .read_to_string(&mut buf)
                .await
                .context("Failed to read actions from stdin")?;
            buf
        }
    };

    let replay = decode_action_stream(input.as_bytes()).context("Failed to decode actions")?;
    tracing::info!(count = replay.len(), "Replaying actions");

    for action in replay {
        store.send(action).await?;
    }

    store.shutdown();
    let state = store.snapshot().await;

    // Dropping the last handle closes the broadcast channel
    drop(store);
    if let Err(e) = logger.await {
        tracing::warn!(error = %e, "Action log task failed");
    }

    println!("{}", encode_state(&state)?);

    if let Some(rendered) = recorder.render() {
        eprintln!("{rendered}");
    }

    tracing::info!(
        cart_items = state.cart.len(),
        cart_open = state.cart_open,
        "Storefront finished"
    );
    Ok(())
}
