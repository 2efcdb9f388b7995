//! Get Places Lambda - Serves the approved places list from Airtable.
//!
//! Keeps the Airtable token on the server side and answers the browser with
//! permissive CORS headers.

use std::sync::Arc;

use lambda_http::{run, service_fn, Body, Error, Request, Response};
use shared::{AirtableClient, Config};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Application state
struct AppState {
    config: Config,
    airtable: AirtableClient,
}

impl AppState {
    fn new() -> Self {
        let config = Config::from_env();
        info!(
            table = %config.table_name,
            credentials = config.credentials().is_ok(),
            "Loaded configuration"
        );

        Self {
            config,
            airtable: AirtableClient::new(reqwest::Client::new()),
        }
    }
}

async fn handler(state: Arc<AppState>, event: Request) -> Result<Response<Body>, Error> {
    shared::handle(&state.config, &state.airtable, &event).await
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let state = Arc::new(AppState::new());

    run(service_fn(move |event| {
        let state = Arc::clone(&state);
        async move { handler(state, event).await }
    }))
    .await
}
