use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Timestamp layout used by the `created` field
pub const CREATED_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Merchant attached to a transaction by the card network
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Merchant {
    #[serde(default)]
    pub descriptor: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
}

/// Card the transaction was made with
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Card {
    #[serde(default)]
    pub memo: String,
}

/// A single card transaction. Amounts are signed cents; refunds are negative.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub amount: i64,
    pub created: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub result: String,
    #[serde(default)]
    pub merchant: Merchant,
    #[serde(default)]
    pub card: Option<Card>,
}

impl Transaction {
    /// Full creation timestamp (UTC, second precision)
    pub fn created_at(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.created, CREATED_FORMAT).ok()
    }

    /// Calendar date portion of the creation timestamp
    pub fn created_date(&self) -> Option<NaiveDate> {
        self.created
            .get(..10)
            .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
    }

    /// First ten characters of `created`, i.e. `yyyy-mm-dd`
    pub fn created_day(&self) -> &str {
        self.created.get(..10).unwrap_or(&self.created)
    }

    pub fn card_memo(&self) -> &str {
        self.card.as_ref().map(|c| c.memo.as_str()).unwrap_or("")
    }
}

/// Response body of `GET /transaction`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionPage {
    pub data: Vec<Transaction>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub total_entries: Option<u64>,
    #[serde(default)]
    pub total_pages: Option<u32>,
}

/// Transactions from one fetch, newest first
pub type TransactionBatch = Vec<Transaction>;

/// Error response body from the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: Option<String>,
    pub debugging_request_id: Option<String>,
}

/// Errors raised while talking to the Privacy API
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// 400 Bad Request
    #[error("Bad Request: {0}")]
    BadRequest(String),
    /// 401 Unauthorized, usually a wrong or revoked API key
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
    /// 403 Forbidden
    #[error("Forbidden: {0}")]
    Forbidden(String),
    /// 404 Not Found
    #[error("Not Found: {0}")]
    NotFound(String),
    /// 429 Too Many Requests
    #[error("Rate Limited: {0}")]
    RateLimited(String),
    /// 5xx Server Error
    #[error("Server Error ({0}): {1}")]
    ServerError(u16, String),
    /// Other HTTP errors
    #[error("HTTP Error ({0}): {1}")]
    HttpError(u16, String),
    /// Network/request error
    #[error("Request Error: {0}")]
    RequestError(String),
    /// Deserialization error
    #[error("Deserialization Error: {0}")]
    DeserializationError(String),
}
