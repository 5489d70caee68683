use review_scheduler::dto::{CreateReviewRequest, DueCardsResponse, ReviewResponse};
use reqwest::Client;
use uuid::Uuid;

/// Error type for CLI client operations
#[derive(Debug)]
pub enum ClientError {
    /// Server returned an error status with a message body
    Server { status: reqwest::StatusCode, message: String },
    /// Network/connection/request error
    Request(reqwest::Error),
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientError::Server { status, message } => write!(f, "Server error ({}): {}", status.as_u16(), message),
            ClientError::Request(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClientError::Request(err) => Some(err),
            ClientError::Server { .. } => None,
        }
    }
}

/// Extension trait for checking HTTP responses and extracting server error messages
trait ResponseExt {
    async fn check(self) -> Result<reqwest::Response, ClientError>;
}

impl ResponseExt for reqwest::Response {
    async fn check(self) -> Result<reqwest::Response, ClientError> {
        if self.status().is_success() {
            return Ok(self);
        }
        let status = self.status();
        let message = match self.json::<serde_json::Value>().await {
            Ok(body) => body.get("error").and_then(|e| e.as_str()).unwrap_or("Unknown error").to_string(),
            Err(_) => format!("HTTP {}", status),
        };
        Err(ClientError::Server { status, message })
    }
}

/// HTTP client wrapper for communicating with the review scheduler server
pub struct ReviewSchedulerClient {
    /// The base URL of the server (e.g. "http://localhost:3000")
    base_url: String,
    client: Client,
}

impl ReviewSchedulerClient {
    /// Creates a new ReviewSchedulerClient
    pub fn new(base_url: String) -> Self {
        Self { base_url, client: Client::new() }
    }

    /// Records a review outcome for `(user_id, card_id)`.
    pub async fn create_review(
        &self,
        user_id: Uuid,
        card_id: Uuid,
        rating: i32,
        idempotency_key: &str,
    ) -> Result<ReviewResponse, ClientError> {
        let url = format!("{}/reviews", self.base_url);
        let dto = CreateReviewRequest { user_id, card_id, rating, idempotency_key: idempotency_key.to_string() };
        let response = self.client.post(&url).json(&dto).send().await.map_err(ClientError::Request)?.check().await?;
        response.json().await.map_err(ClientError::Request)
    }

    /// Lists the cards due for `user_id` by `until` (an RFC 3339 timestamp).
    pub async fn list_due_cards(&self, user_id: Uuid, until: &str) -> Result<DueCardsResponse, ClientError> {
        let url = format!("{}/users/{}/due-cards", self.base_url, user_id);
        let response = self
            .client
            .get(&url)
            .query(&[("until", until)])
            .send()
            .await
            .map_err(ClientError::Request)?
            .check()
            .await?;
        response.json().await.map_err(ClientError::Request)
    }
}
