//! Plant.id HTTP client
//!
//! Handles communication with the Plant.id v3 web service.
//! See: https://plant.id/docs
//!
//! ## API Quirks & Best Practices
//!
//! ### Image Payload Encoding
//! The creation endpoint accepts base64 image strings, but some deployments
//! reject raw base64 with HTTP 400 and want a `data:image/jpeg;base64,`
//! prefix instead. We send the raw form first and retry exactly once with the
//! prefixed form on a 400. Any other failure status is surfaced immediately.
//!
//! ### Two-Step Flow
//! Creation returns a job token (under `access_token` or `id` - the endpoint
//! is inconsistent); species details are only available from the retrieval
//! endpoint for that token. When no token comes back, the creation response
//! itself carries the result and is used directly.

use reqwest::StatusCode;

use super::{adapter, dto};
use crate::identification::domain::{Candidate, IdentificationError};
use crate::identification::photo::EncodedPhoto;

/// Details requested from the retrieval endpoint, as a comma list.
/// Commas are legal in a query string and must not be percent-encoded.
const DETAILS: &str = "common_names,url,description,edible_parts,watering,toxicity";

/// Plant.id API client
pub struct PlantIdClient {
    api_key: String,
    http_client: reqwest::Client,
    base_url: String,
    language: String,
}

impl PlantIdClient {
    /// Create a new client with the given API key and detail language
    ///
    /// The client is configured to:
    /// - Accept gzip-compressed responses (reduces bandwidth)
    /// - Send User-Agent header identifying the application
    pub fn new(api_key: impl Into<String>, language: impl Into<String>) -> Self {
        let http_client = reqwest::Client::builder()
            .gzip(true) // Accept gzip-compressed responses
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            api_key: api_key.into(),
            http_client,
            base_url: "https://api.plant.id/api/v3".to_string(),
            language: language.into(),
        }
    }

    /// Create a client for testing with custom base URL
    #[cfg(test)]
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            http_client: reqwest::Client::new(),
            base_url: base_url.into(),
            language: "en".to_string(),
        }
    }

    /// Identify a photo and return domain candidates.
    ///
    /// Runs the full create-then-retrieve flow. The two calls are strictly
    /// sequential - retrieval needs the token from creation.
    pub async fn identify(
        &self,
        photo: &EncodedPhoto,
    ) -> Result<Vec<Candidate>, IdentificationError> {
        let created = self.create_identification(photo).await?;

        let response = match adapter::extract_token(&created) {
            Some(token) => {
                let token = token.to_string();
                tracing::debug!(token = %token, "retrieving identification details");
                self.retrieve_identification(&token).await?
            }
            // No token: the creation response carries the result directly
            None => created,
        };

        Ok(adapter::to_candidates(response))
    }

    /// POST the creation request, retrying once with a data-URI payload if
    /// the endpoint rejects raw base64 as a bad request
    async fn create_identification(
        &self,
        photo: &EncodedPhoto,
    ) -> Result<dto::IdentificationResponse, IdentificationError> {
        let response = self.send_create(photo.base64.clone()).await?;

        let response = if should_retry_with_data_uri(response.status()) {
            tracing::debug!("creation rejected raw base64, retrying with data-URI prefix");
            self.send_create(photo.as_data_uri()).await?
        } else {
            response
        };

        parse_response(response).await
    }

    async fn send_create(&self, image: String) -> Result<reqwest::Response, IdentificationError> {
        let body = dto::CreateRequest {
            images: vec![image],
            similar_images: true,
        };

        self.http_client
            .post(format!("{}/identification", self.base_url))
            .header("Api-Key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| IdentificationError::Network(e.to_string()))
    }

    /// GET full details for a previously created identification job
    async fn retrieve_identification(
        &self,
        token: &str,
    ) -> Result<dto::IdentificationResponse, IdentificationError> {
        let url = format!(
            "{}/identification/{}?details={}&language={}",
            self.base_url,
            urlencoding::encode(token),
            DETAILS,
            urlencoding::encode(&self.language)
        );

        let response = self
            .http_client
            .get(&url)
            .header("Api-Key", &self.api_key)
            .send()
            .await
            .map_err(|e| IdentificationError::Network(e.to_string()))?;

        parse_response(response).await
    }
}

/// The single documented retry case: creation answered 400 to raw base64
fn should_retry_with_data_uri(status: StatusCode) -> bool {
    status == StatusCode::BAD_REQUEST
}

/// Check the status and decode the JSON body
async fn parse_response(
    response: reqwest::Response,
) -> Result<dto::IdentificationResponse, IdentificationError> {
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(IdentificationError::Api {
            status: status.as_u16(),
            body: truncate_body(&body),
        });
    }

    response
        .json::<dto::IdentificationResponse>()
        .await
        .map_err(|e| IdentificationError::Parse(e.to_string()))
}

/// Error bodies are shown to the user; keep them short
fn truncate_body(body: &str) -> String {
    body.chars().take(200).collect()
}
