//! Home-feed aggregation for TheMealDB-style meal APIs.
//!
//! Two layers: [`MealDbClient`] wraps the provider's JSON endpoints and
//! returns raw wire records, and [`HomeFeedPipeline`] orchestrates the
//! concurrent fetches, normalizes everything into the internal
//! [`Recipe`]/[`Category`] model, and owns the [`HomeFeedState`] read model
//! the UI renders from.
//!
//! ```no_run
//! use mealfeed::{FeedConfig, HomeFeedPipeline};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), mealfeed::FeedError> {
//! let config = FeedConfig::load()?;
//! let pipeline = HomeFeedPipeline::from_config(&config)?;
//! pipeline.load_home_feed().await;
//!
//! let feed = pipeline.snapshot();
//! println!("{} categories", feed.categories.len());
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod feed;
pub mod model;
pub mod normalize;

pub use api::{MealApi, MealDbClient};
pub use config::FeedConfig;
pub use error::FeedError;
pub use feed::HomeFeedPipeline;
pub use model::{Category, HomeFeedState, Recipe};
pub use normalize::CategoryExclusions;
