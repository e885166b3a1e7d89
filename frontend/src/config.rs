use shared::UploadUrlBuilder;
use yew::prelude::*;

use crate::services::api::ApiClient;

pub const DEFAULT_UPLOADS_BASE_URL: &str = "http://localhost:5000";
pub const DEFAULT_TOAST_TIMEOUT_MS: u32 = 3000;

/// Shown in place of a document image that failed to load
pub const PLACEHOLDER_IMAGE: &str = "data:image/svg+xml;utf8,\
<svg xmlns='http://www.w3.org/2000/svg' width='320' height='240' viewBox='0 0 320 240'>\
<rect width='320' height='240' fill='%23eeeeee'/>\
<text x='160' y='125' font-family='sans-serif' font-size='16' text-anchor='middle' fill='%23888888'>Image unavailable</text>\
</svg>";

/// Runtime settings shared by every modal through a `ContextProvider`
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub uploads: UploadUrlBuilder,
    /// When set, review decisions are submitted to this API before being announced
    pub review_api_base_url: Option<String>,
    pub toast_timeout_ms: u32,
    pub placeholder_image: AttrValue,
}

impl AppConfig {
    /// Settings baked in at build time (`VERIFY_UPLOADS_BASE_URL`, `VERIFY_REVIEW_API_BASE_URL`)
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("VERIFY_UPLOADS_BASE_URL"),
            option_env!("VERIFY_REVIEW_API_BASE_URL"),
        )
    }

    pub fn from_values(uploads_base_url: Option<&str>, review_api_base_url: Option<&str>) -> Self {
        let uploads_base_url = uploads_base_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_UPLOADS_BASE_URL);
        let review_api_base_url = review_api_base_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(str::to_string);

        Self {
            uploads: UploadUrlBuilder::new(uploads_base_url),
            review_api_base_url,
            toast_timeout_ms: DEFAULT_TOAST_TIMEOUT_MS,
            placeholder_image: AttrValue::Static(PLACEHOLDER_IMAGE),
        }
    }

    /// Client for the review endpoint, if one is configured
    pub fn review_client(&self) -> Option<ApiClient> {
        self.review_api_base_url
            .as_deref()
            .map(ApiClient::with_base_url)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}

/// Configuration from the nearest provider, or the defaults when there is none
#[hook]
pub fn use_app_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::DocumentRef;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.uploads.base_url(), "http://localhost:5000");
        assert_eq!(config.review_api_base_url, None);
        assert!(config.review_client().is_none());
        assert_eq!(config.toast_timeout_ms, 3000);
    }

    #[test]
    fn test_configured_hosts() {
        let config = AppConfig::from_values(Some("https://files.example.org/"), Some(" https://api.example.org "));
        let doc = DocumentRef::from("C:\\uploads\\gov_id.png");
        assert_eq!(config.uploads.document_url(&doc), "https://files.example.org/uploads/gov_id.png");
        assert_eq!(
            config.review_client().map(|c| c.review_url("abc")),
            Some("https://api.example.org/api/applications/abc/review".to_string())
        );
    }

    #[test]
    fn test_blank_values_fall_back() {
        let config = AppConfig::from_values(Some("   "), Some(""));
        assert_eq!(config.uploads.base_url(), DEFAULT_UPLOADS_BASE_URL);
        assert!(config.review_client().is_none());
    }
}
