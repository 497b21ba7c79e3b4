use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::api::raw::{CategoriesEnvelope, MealsEnvelope, RawCategory, RawMeal};
use crate::api::MealApi;
use crate::config::FeedConfig;
use crate::error::FeedError;

/// HTTP client for a TheMealDB-style provider.
///
/// Wraps the four read endpoints plus name search and returns parsed wire
/// records. No retries, caching, or rate limiting happens here; callers that
/// need those add them on top.
pub struct MealDbClient {
    client: Client,
    base_url: String,
}

impl MealDbClient {
    /// Create a client from configuration
    pub fn new(config: &FeedConfig) -> Result<Self, FeedError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .user_agent(&config.user_agent)
            .build()?;

        Ok(MealDbClient {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        MealDbClient {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn get_envelope<T: DeserializeOwned>(&self, path_and_query: &str) -> Result<T, FeedError> {
        let url = format!("{}/{}", self.base_url, path_and_query);
        debug!("GET {}", url);

        let body = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        serde_json::from_str(&body).map_err(|e| FeedError::parse(&url, e))
    }
}

#[async_trait]
impl MealApi for MealDbClient {
    async fn list_categories(&self) -> Result<Vec<RawCategory>, FeedError> {
        let envelope: CategoriesEnvelope = self.get_envelope("categories.php").await?;
        Ok(envelope.categories)
    }

    async fn random_meal(&self) -> Result<RawMeal, FeedError> {
        let envelope: MealsEnvelope = self.get_envelope("random.php").await?;
        envelope
            .into_meals()
            .into_iter()
            .next()
            .ok_or_else(|| FeedError::parse(format!("{}/random.php", self.base_url), "empty meals envelope"))
    }

    async fn meals_by_category(&self, category: &str) -> Result<Vec<RawMeal>, FeedError> {
        let envelope: MealsEnvelope = self
            .get_envelope(&format!("filter.php?c={}", encode_query(category)))
            .await?;
        Ok(envelope.into_meals())
    }

    async fn meal_by_id(&self, id: &str) -> Result<Option<RawMeal>, FeedError> {
        let envelope: MealsEnvelope = self
            .get_envelope(&format!("lookup.php?i={}", encode_query(id)))
            .await?;
        Ok(envelope.into_meals().into_iter().next())
    }

    async fn search_meals(&self, query: &str) -> Result<Vec<RawMeal>, FeedError> {
        let envelope: MealsEnvelope = self
            .get_envelope(&format!("search.php?s={}", encode_query(query)))
            .await?;
        Ok(envelope.into_meals())
    }
}

/// Minimal percent-encoding for query values (space and reserved characters)
fn encode_query(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}
