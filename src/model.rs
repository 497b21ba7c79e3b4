use serde::Serialize;

/// A meal category, render-ready.
///
/// Ids are assigned by insertion order (1-based) after exclusion filtering,
/// so they are stable within one category listing but not across provider
/// reorderings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Category {
    pub id: u32,
    pub name: String,
    pub image: String,
    pub description: String,
}

/// A normalized recipe, render-ready.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub image: String,
    /// Instructions text verbatim; empty when the source omits it
    pub description: String,
    pub category: String,
    pub area: String,
    /// Ordered "measure ingredient" strings, empty slots dropped
    pub ingredients: Vec<String>,
    /// Display heuristic derived from the id, not provider data
    pub cook_time: String,
    /// Display heuristic derived from the id, not provider data
    pub servings: String,
    pub youtube_url: Option<String>,
}

/// The home-feed read model.
///
/// Owned exclusively by the pipeline; consumers read cloned snapshots.
/// Successful loads replace the whole value, so a reader never observes a
/// mix of old and new fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HomeFeedState {
    pub categories: Vec<Category>,
    /// Name of the category whose recipes are currently listed.
    /// Always a member of `categories` when present.
    pub selected_category: Option<String>,
    /// Recipes for the selected category only
    pub recipes: Vec<Recipe>,
    pub featured_recipe: Option<Recipe>,
    pub loading: bool,
    pub refreshing: bool,
    /// Most recent fetch failure, surfaced for display; cleared on success
    pub error: Option<String>,
}
