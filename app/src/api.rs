//! HTTP client for the path-addressed detail resources.
//!
//! The only asynchronous data access in the app: zoo tables are bundled, but
//! per-strategy detail documents live next to the site as static JSON and
//! are fetched by URL-encoded id. A 404 maps to the distinct `NotFound`
//! state; transport and decode failures map to the generic error state. No
//! retries — every failure is terminal for the current render.

use zoo_core::{DataError, StrategyDetail};

use gloo_net::http::Request;

/// Fetch `assets/data/strategies/{id}.json` and decode it.
pub async fn fetch_strategy_detail(id: &str) -> Result<StrategyDetail, DataError> {
    let encoded = String::from(js_sys::encode_uri_component(id));
    let url = format!("/assets/data/strategies/{encoded}.json");

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|err| DataError::Fetch(err.to_string()))?;

    match response.status() {
        200 => {
            let body = response
                .text()
                .await
                .map_err(|err| DataError::Fetch(err.to_string()))?;
            StrategyDetail::from_json(&body)
        }
        404 => Err(DataError::NotFound(id.to_string())),
        status => Err(DataError::Fetch(format!("HTTP {status}"))),
    }
}
