use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use log::{debug, error, warn};

use crate::api::{MealApi, MealDbClient};
use crate::config::FeedConfig;
use crate::error::FeedError;
use crate::model::{Category, HomeFeedState, Recipe};
use crate::normalize::{normalize_category, normalize_meal, CategoryExclusions};

/// Assembles and owns the home-feed read model.
///
/// The pipeline is the sole writer of [`HomeFeedState`]; consumers read
/// cloned snapshots via [`snapshot`](HomeFeedPipeline::snapshot) and drive
/// changes only through the operations here. Fetch failures never escape as
/// errors from the feed operations: they are logged and folded into the
/// state's `error` field, with the failure policies described on each
/// operation.
pub struct HomeFeedPipeline {
    api: Arc<dyn MealApi>,
    exclusions: CategoryExclusions,
    state: Mutex<HomeFeedState>,
    // Stamp for the in-flight category fetch. A response is published only
    // while it still holds the latest stamp, so an older category switch
    // resolving late can never clobber a newer one.
    category_token: AtomicU64,
    refresh_in_flight: AtomicBool,
}

impl HomeFeedPipeline {
    pub fn new(api: Arc<dyn MealApi>, exclusions: CategoryExclusions) -> Self {
        HomeFeedPipeline {
            api,
            exclusions,
            state: Mutex::new(HomeFeedState::default()),
            category_token: AtomicU64::new(0),
            refresh_in_flight: AtomicBool::new(false),
        }
    }

    /// Pipeline backed by a [`MealDbClient`] built from configuration
    pub fn from_config(config: &FeedConfig) -> Result<Self, FeedError> {
        let client = MealDbClient::new(config)?;
        Ok(HomeFeedPipeline::new(
            Arc::new(client),
            CategoryExclusions::new(&config.excluded_categories),
        ))
    }

    /// Current state snapshot
    pub fn snapshot(&self) -> HomeFeedState {
        self.lock_state().clone()
    }

    /// Assemble the full home feed: category listing and featured meal
    /// fetched concurrently, then the first category's recipe list.
    ///
    /// Fails soft. A category-listing failure leaves the previous state in
    /// place (stale but consistent); a featured-meal failure keeps the
    /// previous featured recipe; a recipe-list failure publishes an empty
    /// list. `loading` is cleared on every path, and the new state is
    /// published as a single replacement.
    pub async fn load_home_feed(&self) {
        self.lock_state().loading = true;

        let (categories_result, featured_result) =
            tokio::join!(self.api.list_categories(), self.api.random_meal());

        let raw_categories = match categories_result {
            Ok(categories) => categories,
            Err(err) => {
                error!("Home feed load failed: {}", err);
                let mut state = self.lock_state();
                state.loading = false;
                state.error = Some(err.to_string());
                return;
            }
        };

        let categories: Vec<Category> = raw_categories
            .iter()
            .filter(|c| !self.exclusions.is_excluded(&c.name))
            .enumerate()
            .map(|(index, c)| normalize_category(c, index))
            .collect();
        let selected_category = categories.first().map(|c| c.name.clone());

        let mut error = None;

        // Dependent fetch, awaited before publishing: the feed must never
        // show a selected category with its recipe list still unresolved.
        let token = self.next_category_token();
        let recipes = match &selected_category {
            Some(name) => match self.fetch_category_recipes(name).await {
                Ok(recipes) => recipes,
                Err(err) => {
                    warn!("Recipes for {} failed during home feed load: {}", name, err);
                    error = Some(err.to_string());
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        if let Err(err) = &featured_result {
            warn!("Featured meal fetch failed: {}", err);
            error = Some(err.to_string());
        }

        let mut state = self.lock_state();
        // A fetch error keeps the previous featured recipe; a record that
        // fails normalization does not.
        let featured_recipe = match &featured_result {
            Ok(meal) => normalize_meal(meal),
            Err(_) => state.featured_recipe.clone(),
        };
        // A newer category switch may have landed while we were fetching;
        // its published recipes win over ours.
        let stale = token != self.category_token.load(Ordering::SeqCst);
        *state = HomeFeedState {
            categories,
            selected_category: if stale {
                state.selected_category.clone()
            } else {
                selected_category
            },
            recipes: if stale { state.recipes.clone() } else { recipes },
            featured_recipe,
            loading: false,
            refreshing: state.refreshing,
            error,
        };
    }

    /// Fetch and publish the recipe list for one category.
    ///
    /// On failure the list is cleared rather than left showing the previous
    /// category's rows: the user changed context, so stale results would be
    /// wrong. The failure is surfaced through the state `error` field.
    pub async fn load_category(&self, name: &str) {
        let token = self.next_category_token();

        match self.fetch_category_recipes(name).await {
            Ok(recipes) => {
                self.publish_if_current(token, |state| {
                    state.recipes = recipes;
                    state.selected_category = Some(name.to_string());
                    state.error = None;
                });
            }
            Err(err) => {
                error!("Loading category {} failed: {}", name, err);
                self.publish_if_current(token, |state| {
                    state.recipes = Vec::new();
                    state.selected_category = Some(name.to_string());
                    state.error = Some(err.to_string());
                });
            }
        }
    }

    /// [`load_category`](Self::load_category) unless `name` is already the
    /// selected category, in which case this is a no-op.
    pub async fn select_category(&self, name: &str) {
        let current = self.lock_state().selected_category.clone();
        if current.as_deref() == Some(name) {
            debug!("Category {} already selected", name);
            return;
        }
        self.load_category(name).await;
    }

    /// Re-run the full home-feed load, pull-to-refresh style.
    ///
    /// A refresh requested while one is in flight is dropped, not queued, so
    /// two overlapping cycles can never interleave their publishes.
    pub async fn refresh(&self) {
        if self.refresh_in_flight.swap(true, Ordering::SeqCst) {
            debug!("Refresh already in flight, dropping");
            return;
        }

        self.lock_state().refreshing = true;
        self.load_home_feed().await;
        self.lock_state().refreshing = false;
        self.refresh_in_flight.store(false, Ordering::SeqCst);
    }

    /// Full recipe for a detail view. Unknown ids map to
    /// [`FeedError::NotFound`]; this does not touch the home-feed state.
    pub async fn recipe_detail(&self, id: &str) -> Result<Recipe, FeedError> {
        let meal = self
            .api
            .meal_by_id(id)
            .await?
            .ok_or_else(|| FeedError::NotFound(id.to_string()))?;

        normalize_meal(&meal)
            .ok_or_else(|| FeedError::parse(format!("lookup.php?i={}", id), "record missing id or name"))
    }

    /// Name search through the same normalize-and-filter pipeline as the
    /// feed. Does not touch the home-feed state.
    pub async fn search(&self, query: &str) -> Result<Vec<Recipe>, FeedError> {
        let meals = self.api.search_meals(query).await?;
        Ok(meals
            .iter()
            .filter_map(normalize_meal)
            .filter(|recipe| !self.exclusions.is_excluded(&recipe.category))
            .collect())
    }

    /// Up to `count` random recipes, fetched concurrently and de-duplicated
    /// by id. Individual fetch failures are logged and skipped.
    pub async fn random_recipes(&self, count: usize) -> Vec<Recipe> {
        let mut handles = Vec::with_capacity(count);
        for _ in 0..count {
            let api = Arc::clone(&self.api);
            handles.push(tokio::spawn(async move { api.random_meal().await }));
        }

        let mut recipes: Vec<Recipe> = Vec::new();
        for handle in handles {
            let meal = match handle.await {
                Ok(Ok(meal)) => meal,
                Ok(Err(err)) => {
                    warn!("Random meal fetch failed: {}", err);
                    continue;
                }
                Err(err) => {
                    warn!("Random meal task failed: {}", err);
                    continue;
                }
            };
            let Some(recipe) = normalize_meal(&meal) else {
                continue;
            };
            if self.exclusions.is_excluded(&recipe.category) {
                continue;
            }
            if recipes.iter().all(|r| r.id != recipe.id) {
                recipes.push(recipe);
            }
        }
        recipes
    }

    async fn fetch_category_recipes(&self, name: &str) -> Result<Vec<Recipe>, FeedError> {
        let meals = self.api.meals_by_category(name).await?;
        let recipes = meals
            .iter()
            .filter_map(normalize_meal)
            .map(|mut recipe| {
                // filter.php summaries carry no category field
                if recipe.category.is_empty() {
                    recipe.category = name.to_string();
                }
                recipe
            })
            .filter(|recipe| !self.exclusions.is_excluded(&recipe.category))
            .collect();
        Ok(recipes)
    }

    fn next_category_token(&self) -> u64 {
        self.category_token.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Run `publish` under the state lock only if `token` is still the
    /// latest issued category stamp. Returns whether the publish happened.
    fn publish_if_current(&self, token: u64, publish: impl FnOnce(&mut HomeFeedState)) -> bool {
        let mut state = self.lock_state();
        if token != self.category_token.load(Ordering::SeqCst) {
            debug!("Dropping stale category response (token {})", token);
            return false;
        }
        publish(&mut state);
        true
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, HomeFeedState> {
        // Guards are short-lived and never held across an await, so the
        // lock cannot be poisoned by an async cancellation.
        self.state.lock().expect("home feed state lock poisoned")
    }
}
