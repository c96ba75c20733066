use gloo_net::http::Request;
use shared::{RemoteStatus, ScanResultsResponse, ScanStatusResponse, StartScanResponse};

/// Creates a new scan job on the server and returns its id.
pub async fn start_scan() -> Result<String, String> {
    let response = Request::post("/api/scan")
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(format!("Server error: {} - {}", status, body));
    }

    let body: StartScanResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;
    body.scan_id
        .ok_or_else(|| "Server returned no scan id".to_string())
}

/// Polls the status of an active scan. A 404 is folded into the body-level
/// `not_found` so the controller has a single session-lost signal; any other
/// failure is a transient poll error.
pub async fn fetch_status(scan_id: &str) -> Result<ScanStatusResponse, String> {
    let response = Request::get(&format!("/api/scan/status/{}", scan_id))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    match response.status() {
        404 => Ok(ScanStatusResponse {
            status: RemoteStatus::NotFound,
            progress: None,
            stage: None,
        }),
        200 => response
            .json()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e)),
        other => Err(format!("Server error: {}", other)),
    }
}

/// One-shot fetch of a completed scan's defects and summary. A 202 carries a
/// `not_ready` status body, which callers treat as results-not-available.
pub async fn fetch_results(scan_id: &str) -> Result<ScanResultsResponse, String> {
    let response = Request::get(&format!("/api/scan/results/{}", scan_id))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    match response.status() {
        200 | 202 => response
            .json()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e)),
        other => Err(format!("Server error: {}", other)),
    }
}

pub fn report_url(scan_id: &str) -> String {
    format!("/api/scan/report/{}", scan_id)
}
