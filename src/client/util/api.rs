//! Requests from the browser to the JSON API.

#[cfg(feature = "web")]
use serde::de::DeserializeOwned;

#[cfg(feature = "web")]
use crate::model::{
    api::PageDto,
    job::{JobListingDto, JobSearchParams},
};

/// Percent-encodes a query string value
pub fn encode_query_value(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());

    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char)
            }
            _ => encoded.push_str(&format!("%{byte:02X}")),
        }
    }

    encoded
}

/// Builds the `/api/jobs` query string, unset parameters are left out
pub fn job_search_query(
    search: Option<&str>,
    location: Option<&str>,
    remote: Option<bool>,
    page: Option<u64>,
) -> String {
    let mut pairs = Vec::new();

    if let Some(search) = search {
        pairs.push(format!("search={}", encode_query_value(search)));
    }
    if let Some(location) = location {
        pairs.push(format!("location={}", encode_query_value(location)));
    }
    if let Some(remote) = remote {
        pairs.push(format!("remote={remote}"));
    }
    if let Some(page) = page {
        pairs.push(format!("page={page}"));
    }

    pairs.join("&")
}

/// GETs `url` and decodes a JSON body, error bodies are turned into a message
#[cfg(feature = "web")]
async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    use reqwasm::http::Request;

    let response = Request::get(url)
        .credentials(reqwasm::http::RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if response.status() == 200 {
        return response
            .json::<T>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e));
    }

    use crate::model::api::ErrorDto;

    if let Ok(error_dto) = response.json::<ErrorDto>().await {
        Err(format!(
            "Request failed with status {}: {}",
            response.status(),
            error_dto.error
        ))
    } else {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        Err(format!(
            "Request failed with status {}: {}",
            response.status(),
            error_text
        ))
    }
}

/// Search published job listings
#[cfg(feature = "web")]
pub async fn search_jobs(params: &JobSearchParams) -> Result<PageDto<JobListingDto>, String> {
    let query = job_search_query(
        params.search.as_deref(),
        params.location.as_deref(),
        params.remote,
        params.page,
    );

    get_json(&format!("/api/jobs?{query}")).await
}

/// Retrieve a published job listing
#[cfg(feature = "web")]
pub async fn get_job(id: i32) -> Result<JobListingDto, String> {
    get_json(&format!("/api/jobs/{id}")).await
}
