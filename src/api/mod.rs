mod client;
pub mod raw;

pub use client::MealDbClient;

use async_trait::async_trait;

use crate::error::FeedError;
use raw::{RawCategory, RawMeal};

/// Unified interface over the meal provider's endpoints.
///
/// A pure transport seam: implementations return raw wire records and do no
/// normalization, retrying, or caching. The pipeline owns all policy.
#[async_trait]
pub trait MealApi: Send + Sync {
    /// Full category listing (`categories.php`)
    async fn list_categories(&self) -> Result<Vec<RawCategory>, FeedError>;

    /// One randomly chosen full meal record (`random.php`)
    async fn random_meal(&self) -> Result<RawMeal, FeedError>;

    /// Abbreviated records for one category (`filter.php?c=`)
    async fn meals_by_category(&self, category: &str) -> Result<Vec<RawMeal>, FeedError>;

    /// Full record for an id, or `None` if the id is unknown (`lookup.php?i=`)
    async fn meal_by_id(&self, id: &str) -> Result<Option<RawMeal>, FeedError>;

    /// Full records matching a name query (`search.php?s=`)
    async fn search_meals(&self, query: &str) -> Result<Vec<RawMeal>, FeedError>;
}
