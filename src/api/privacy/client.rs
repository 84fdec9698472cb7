use reqwest::Client as HttpClient;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use super::models::{ApiError, ErrorResponse, TransactionBatch, TransactionPage};
use crate::config::Config;
use tracing::{debug, trace, warn};

/// Privacy.com API client for reading card transactions
pub struct PrivacyClient {
    http_client: HttpClient,
    api_key: String,
    base_url: String,
    page_size: u32,
}

impl PrivacyClient {
    /// Create a new client from the loaded configuration
    pub fn new(config: Config) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key: config.api_key,
            base_url: config.base_url,
            page_size: config.page_size,
        }
    }

    /// Create default headers with authorization
    fn create_headers(&self) -> Result<HeaderMap, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut auth_value = HeaderValue::from_str(&format!("api-key {}", self.api_key))
            .map_err(|e| ApiError::RequestError(format!("Failed to create auth header: {}", e)))?;
        auth_value.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth_value);

        Ok(headers)
    }

    fn transactions_url(&self) -> String {
        format!("{}/transaction?page_size={}", self.base_url, self.page_size)
    }

    /// Map a non-success status and its body to an error
    fn error_from_status(status: reqwest::StatusCode, body_text: String) -> ApiError {
        let status_code = status.as_u16();

        match status_code {
            400 => {
                match serde_json::from_str::<ErrorResponse>(&body_text) {
                    Ok(ErrorResponse { message: Some(message), debugging_request_id }) => {
                        debug!("Bad request (request id {:?})", debugging_request_id);
                        ApiError::BadRequest(message)
                    }
                    _ => ApiError::BadRequest(body_text),
                }
            }
            401 => ApiError::Unauthorized(body_text),
            403 => ApiError::Forbidden(body_text),
            404 => ApiError::NotFound(body_text),
            429 => {
                warn!("Rate limited by the Privacy API");
                ApiError::RateLimited(body_text)
            }
            500..=599 => {
                warn!("Server error {}: {}", status_code, body_text);
                ApiError::ServerError(status_code, body_text)
            }
            _ => ApiError::HttpError(status_code, body_text),
        }
    }

    /// GET /transaction
    ///
    /// Downloads the most recent transactions, newest first. Only the first
    /// page is requested; anything older than `page_size` entries is not
    /// reachable.
    ///
    /// # Returns
    /// * `Ok(TransactionBatch)` - Up to `page_size` transactions
    /// * `Err(ApiError)` - Transport failure, non-2xx status or bad body
    pub async fn fetch_transactions(&self) -> Result<TransactionBatch, ApiError> {
        let url = self.transactions_url();
        let headers = self.create_headers()?;

        debug!("GET {}", url);
        let response = self.http_client
            .get(&url)
            .headers(headers)
            .send()
            .await
            .map_err(|e| ApiError::RequestError(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            return Err(Self::error_from_status(status, body_text));
        }

        let page = response
            .json::<TransactionPage>()
            .await
            .map_err(|e| ApiError::DeserializationError(format!("Failed to parse response: {}", e)))?;

        trace!("{:#?}", page);
        debug!(
            "Fetched {} transactions (page {:?}, total_entries: {:?}, total_pages: {:?})",
            page.data.len(),
            page.page,
            page.total_entries,
            page.total_pages
        );
        if let Some(total) = page.total_entries {
            if total > page.data.len() as u64 {
                warn!(
                    "Only the {} most recent of {} transactions are searched",
                    page.data.len(),
                    total
                );
            }
        }

        Ok(page.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    fn client() -> PrivacyClient {
        PrivacyClient::new(Config {
            api_key: "test-key".to_string(),
            base_url: "https://sandbox.privacy.com/v1".to_string(),
            page_size: 1000,
        })
    }

    #[test]
    fn test_transactions_url() {
        assert_eq!(
            client().transactions_url(),
            "https://sandbox.privacy.com/v1/transaction?page_size=1000"
        );
    }

    #[test]
    fn test_auth_header() {
        let headers = client().create_headers().unwrap();
        let auth = headers.get(AUTHORIZATION).unwrap();
        assert_eq!(auth.to_str().unwrap(), "api-key test-key");
        assert!(auth.is_sensitive());
    }

    #[test]
    fn test_auth_header_rejects_control_chars() {
        let client = PrivacyClient::new(Config {
            api_key: "bad\nkey".to_string(),
            base_url: "https://api.privacy.com/v1".to_string(),
            page_size: 1000,
        });
        assert!(matches!(client.create_headers(), Err(ApiError::RequestError(_))));
    }

    #[test]
    fn test_error_from_status() {
        let err = PrivacyClient::error_from_status(
            StatusCode::BAD_REQUEST,
            r#"{"message": "page_size too large"}"#.to_string(),
        );
        assert!(matches!(err, ApiError::BadRequest(ref m) if m == "page_size too large"));

        let err = PrivacyClient::error_from_status(StatusCode::UNAUTHORIZED, "nope".to_string());
        assert!(matches!(err, ApiError::Unauthorized(_)));

        let err = PrivacyClient::error_from_status(StatusCode::BAD_GATEWAY, String::new());
        assert!(matches!(err, ApiError::ServerError(502, _)));

        let err = PrivacyClient::error_from_status(StatusCode::IM_A_TEAPOT, String::new());
        assert!(matches!(err, ApiError::HttpError(418, _)));
    }
}
