use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use txnstore::api;
use txnstore::config::{CliArgs, Config};
use txnstore::store::TransactionStore;

#[tokio::main]
async fn main() {
    let cli = CliArgs::parse();
    let config = Config::load(&cli);

    let filter = EnvFilter::try_new(&config.logging.level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    if config.logging.json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    let store = Arc::new(TransactionStore::with_max_chain_depth(
        config.store.max_chain_depth,
    ));
    let app = api::app(store);

    let addr = config.listen_addr();
    tracing::info!(%addr, "API listening");

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .unwrap();
}
