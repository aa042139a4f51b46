// GitHub API HTTP client.
// Handles request headers, base URL selection, and response status checking.

use reqwest::{
    Client, Response, StatusCode,
    header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT},
};

use crate::error::{Result, StatsError};

const GITHUB_API_BASE: &str = "https://api.github.com";

/// GitHub REST API client.
pub struct GitHubClient {
    client: Client,
    base_url: String,
}

impl GitHubClient {
    /// Create a client for api.github.com.
    ///
    /// Requests are anonymous unless a GITHUB_TOKEN environment variable is
    /// present; the token only raises the rate limit, none of the fetched
    /// resources require it.
    pub fn new() -> Result<Self> {
        Self::with_base_url(GITHUB_API_BASE)
    }

    /// Create a client against an alternate API base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let mut headers = HeaderMap::new();

        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github.v3+json"),
        );
        headers.insert(USER_AGENT, HeaderValue::from_static("repostats"));

        if let Ok(token) = std::env::var("GITHUB_TOKEN") {
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&format!("Bearer {}", token))
                    .map_err(|e| StatsError::Other(e.to_string()))?,
            );
        }

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(StatsError::Api)?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Make a GET request to the API.
    pub async fn get(&self, endpoint: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url, endpoint);
        let response = self.client.get(&url).send().await.map_err(StatsError::Api)?;

        check_response(response)
    }

    /// Make a GET request with query parameters.
    pub async fn get_with_params<T: serde::Serialize + ?Sized>(
        &self,
        endpoint: &str,
        params: &T,
    ) -> Result<Response> {
        let url = format!("{}{}", self.base_url, endpoint);
        let response = self
            .client
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(StatsError::Api)?;

        check_response(response)
    }
}

/// Check response status and convert errors.
fn check_response(response: Response) -> Result<Response> {
    match response.status() {
        StatusCode::OK | StatusCode::CREATED | StatusCode::ACCEPTED => Ok(response),
        StatusCode::NOT_FOUND => {
            let url = response.url().to_string();
            Err(StatsError::NotFound(url))
        }
        StatusCode::FORBIDDEN if rate_limit_exhausted(&response) => {
            let reset_at = header_value(&response, "x-ratelimit-reset")
                .and_then(|v| v.parse::<i64>().ok())
                .and_then(|secs| chrono::DateTime::from_timestamp(secs, 0))
                .map(|dt| dt.format("%H:%M:%S").to_string())
                .unwrap_or_else(|| "unknown".to_string());
            Err(StatsError::RateLimited { reset_at })
        }
        status => {
            let url = response.url().to_string();
            Err(StatsError::Status {
                status: status.as_u16(),
                url,
            })
        }
    }
}

fn rate_limit_exhausted(response: &Response) -> bool {
    header_value(response, "x-ratelimit-remaining").and_then(|v| v.parse::<u64>().ok()) == Some(0)
}

fn header_value(response: &Response, name: &str) -> Option<String> {
    response
        .headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.to_string())
}
