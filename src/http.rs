//! Response handling shared by the marketplace clients

use crate::error::{Result, SyncError};
use serde::de::DeserializeOwned;

/// Turn a non-success response into `SyncError::HttpStatus`, keeping the body for the log
pub(crate) async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    log::error!("Request failed with status {}: {}", status, body);
    Err(SyncError::HttpStatus { status, body })
}

/// Check the status, then decode the body as JSON
pub(crate) async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let response = check_status(response).await?;
    let text = response.text().await?;
    log::debug!("Response body: {} bytes", text.len());
    Ok(serde_json::from_str(&text)?)
}
