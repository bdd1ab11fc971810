use crate::dashboards::d100_store_overview::api::check_server_connection;
use crate::shared::api_utils::api_url;
use contracts::dashboards::d100_store_overview::{ApiError, ProcessDataResponse};
use gloo_net::http::Request;

/// Upload a dataset file to the analytics backend and trigger
/// server-side (re)computation.
///
/// The file goes as the `file` field of a multipart body; the browser
/// sets the multipart content type itself.
pub async fn process_data_file(file: web_sys::File) -> Result<ProcessDataResponse, String> {
    if !check_server_connection().await {
        return Err("Backend server is not running. Please start the analytics server.".to_string());
    }

    let form_data =
        web_sys::FormData::new().map_err(|e| format!("Failed to build form data: {:?}", e))?;
    form_data
        .append_with_blob_and_filename("file", &file, &file.name())
        .map_err(|e| format!("Failed to attach file: {:?}", e))?;

    let response = Request::post(&api_url("/api/process-data"))
        .body(form_data)
        .map_err(|e| format!("Failed to build request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        let status = response.status();
        // The backend sends {"error": "..."} with non-2xx statuses
        let message = match response.json::<ApiError>().await {
            Ok(body) if !body.error.is_empty() => body.error,
            _ => format!("HTTP error: {}", status),
        };
        return Err(message);
    }

    let data: ProcessDataResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data)
}
