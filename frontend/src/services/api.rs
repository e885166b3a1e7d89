use gloo::net::http::Request;
use shared::{ApiError, ReviewDecision, ReviewRequest, ReviewResponse};

/// API client for the review-submission endpoint
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn review_url(&self, application_id: &str) -> String {
        format!("{}/api/applications/{}/review", self.base_url, application_id)
    }

    /// Record an approve/reject decision for an application
    pub async fn submit_review(
        &self,
        application_id: &str,
        decision: ReviewDecision,
    ) -> Result<ReviewResponse, ApiError> {
        if application_id.trim().is_empty() {
            return Err(ApiError::MissingApplicationId);
        }

        let url = self.review_url(application_id);
        let response = Request::post(&url)
            .json(&ReviewRequest { decision })
            .map_err(|e| ApiError::Serialization(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            let status = response.status();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ApiError::Server { status, message });
        }

        response
            .json::<ReviewResponse>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_review_url_trims_base() {
        let client = ApiClient::with_base_url("http://localhost:5000/");
        assert_eq!(
            client.review_url("65f1c0a2"),
            "http://localhost:5000/api/applications/65f1c0a2/review"
        );
    }
}
