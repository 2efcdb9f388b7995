//! The get-places request pipeline.

use lambda_http::http::Method;
use lambda_http::{Body, Request, Response};
use tracing::{error, info, warn};

use crate::airtable::RecordSource;
use crate::http::{cors_response, json_response};
use crate::models::{approved_places, PlaceView, PlacesResponse};
use crate::{Config, Error};

/// Serve one request: answer preflight, otherwise fetch and return approved places.
pub async fn handle<S>(
    config: &Config,
    source: &S,
    event: &Request,
) -> Result<Response<Body>, lambda_http::Error>
where
    S: RecordSource + Sync,
{
    if *event.method() == Method::OPTIONS {
        return cors_response(200, Body::Empty);
    }

    match fetch_places(config, source).await {
        Ok(places) => json_response(200, &PlacesResponse { places }),
        Err(err) => {
            match &err {
                Error::CredentialsMissing => warn!("Airtable credentials not configured"),
                _ => error!(error.kind = err.kind(), error = %err, "Failed to fetch places"),
            }
            json_response(err.status_code(), &err.body())
        }
    }
}

async fn fetch_places<S>(config: &Config, source: &S) -> crate::Result<Vec<PlaceView>>
where
    S: RecordSource + Sync,
{
    let credentials = config.credentials()?;
    let records = source
        .list_records(&credentials, &config.table_name)
        .await?;

    let total = records.len();
    let places = approved_places(records);
    info!(records = total, approved = places.len(), "Fetched places");

    Ok(places)
}
