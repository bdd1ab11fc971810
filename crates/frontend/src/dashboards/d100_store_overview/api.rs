use crate::shared::api_utils::api_url;
use contracts::dashboards::d100_store_overview::AnalyticsResponse;
use gloo_net::http::Request;

/// Probe the analytics backend. Used before uploads so the user gets a
/// clear "server down" message instead of a raw fetch failure.
pub async fn check_server_connection() -> bool {
    match Request::get(&api_url("/api/analytics")).send().await {
        Ok(response) => response.ok(),
        Err(_) => false,
    }
}

/// Fetch the full analytics payload (metrics, sub-category analysis and
/// the layout record mapping).
pub async fn fetch_analytics() -> Result<AnalyticsResponse, String> {
    let response = Request::get(&api_url("/api/analytics"))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: AnalyticsResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data)
}
