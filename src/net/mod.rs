//! Host-side HTTP executor, the only module that performs network I/O.
//!
//! Automatic status-code-as-error handling is disabled so 4xx/5xx
//! responses come back as data and the api layer decides what they mean.
//! No timeout is configured on the agent.

use crate::api::client::HttpResponse;
use crate::api::error::FetchError;

fn agent() -> ureq::Agent {
    ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent()
}

/// Execute a plain GET and return the textual response.
pub fn get(url: &str) -> Result<HttpResponse, FetchError> {
    let mut response = agent()
        .get(url)
        .call()
        .map_err(|error| FetchError::Network(error.to_string()))?;

    let status = response.status().as_u16();
    let body = response
        .body_mut()
        .read_to_string()
        .map_err(|error| FetchError::Network(error.to_string()))?;

    Ok(HttpResponse { status, body })
}

/// Download raw bytes (picture data). Unlike [`get`], a non-2xx status is
/// an error here outright since there is no body worth interpreting.
pub fn get_bytes(url: &str) -> Result<Vec<u8>, FetchError> {
    let mut response = agent()
        .get(url)
        .call()
        .map_err(|error| FetchError::Network(error.to_string()))?;

    let status = response.status().as_u16();
    if !(200..300).contains(&status) {
        return Err(FetchError::BadStatus {
            status,
            body: String::new(),
        });
    }

    response
        .body_mut()
        .read_to_vec()
        .map_err(|error| FetchError::Network(error.to_string()))
}
