use serde::Deserialize;
use serde_json::Value;

/// Number of ingredient/measure slot pairs in a meal record
pub const INGREDIENT_SLOTS: usize = 20;

/// A category as returned by `categories.php`.
///
/// The provider nulls out fields instead of omitting them, so everything
/// deserializes with an empty-string default.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCategory {
    #[serde(rename = "strCategory", default, deserialize_with = "null_to_empty")]
    pub name: String,
    #[serde(rename = "strCategoryThumb", default, deserialize_with = "null_to_empty")]
    pub thumb: String,
    #[serde(
        rename = "strCategoryDescription",
        default,
        deserialize_with = "null_to_empty"
    )]
    pub description: String,
}

/// A meal as returned by the meal endpoints.
///
/// `filter.php` returns abbreviated records (id/name/thumb only); the other
/// endpoints return the full shape. The twenty `strIngredientN`/`strMeasureN`
/// slot pairs are captured through the flattened remainder rather than forty
/// named fields.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawMeal {
    #[serde(rename = "idMeal", default)]
    pub id: Option<String>,
    #[serde(rename = "strMeal", default)]
    pub name: Option<String>,
    #[serde(rename = "strMealThumb", default)]
    pub thumb: Option<String>,
    #[serde(rename = "strInstructions", default)]
    pub instructions: Option<String>,
    #[serde(rename = "strCategory", default)]
    pub category: Option<String>,
    #[serde(rename = "strArea", default)]
    pub area: Option<String>,
    #[serde(rename = "strYoutube", default)]
    pub youtube: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl RawMeal {
    /// Ingredient text for a 1-based slot, if present and a string
    pub fn ingredient(&self, slot: usize) -> Option<&str> {
        self.slot_str("strIngredient", slot)
    }

    /// Measure text for a 1-based slot, if present and a string
    pub fn measure(&self, slot: usize) -> Option<&str> {
        self.slot_str("strMeasure", slot)
    }

    fn slot_str(&self, prefix: &str, slot: usize) -> Option<&str> {
        self.extra
            .get(&format!("{}{}", prefix, slot))
            .and_then(Value::as_str)
    }
}

/// Envelope for `categories.php`
#[derive(Debug, Deserialize)]
pub struct CategoriesEnvelope {
    #[serde(default)]
    pub categories: Vec<RawCategory>,
}

/// Envelope shared by every meal endpoint.
///
/// The provider answers `{"meals": null}` for empty results, which maps to
/// `None` here, not a deserialization failure.
#[derive(Debug, Deserialize)]
pub struct MealsEnvelope {
    #[serde(default)]
    pub meals: Option<Vec<RawMeal>>,
}

impl MealsEnvelope {
    /// Records as a vec, treating a null `meals` as empty
    pub fn into_meals(self) -> Vec<RawMeal> {
        self.meals.unwrap_or_default()
    }
}

fn null_to_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}
