use std::collections::HashSet;

use crate::api::raw::{RawCategory, RawMeal, INGREDIENT_SLOTS};
use crate::model::{Category, Recipe};

/// Case-insensitive set of category names excluded from every feed surface.
#[derive(Debug, Clone)]
pub struct CategoryExclusions {
    names: HashSet<String>,
}

impl CategoryExclusions {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        CategoryExclusions {
            names: names
                .into_iter()
                .map(|n| n.as_ref().trim().to_lowercase())
                .filter(|n| !n.is_empty())
                .collect(),
        }
    }

    pub fn is_excluded(&self, name: &str) -> bool {
        self.names.contains(&name.trim().to_lowercase())
    }
}

impl Default for CategoryExclusions {
    fn default() -> Self {
        CategoryExclusions::new(["beef"])
    }
}

/// Build a `Category` from a wire record.
///
/// `index` is the position within the already-filtered listing; ids are
/// 1-based in that order.
pub fn normalize_category(raw: &RawCategory, index: usize) -> Category {
    Category {
        id: index as u32 + 1,
        name: raw.name.clone(),
        image: raw.thumb.clone(),
        description: raw.description.clone(),
    }
}

/// Build a `Recipe` from a wire record, or `None` when the record is missing
/// its id or name. A `None` is an expected filtering outcome, not an error.
pub fn normalize_meal(raw: &RawMeal) -> Option<Recipe> {
    let id = non_blank(raw.id.as_deref())?;
    let title = non_blank(raw.name.as_deref())?;

    let mut ingredients = Vec::new();
    for slot in 1..=INGREDIENT_SLOTS {
        let Some(ingredient) = non_blank(raw.ingredient(slot)) else {
            continue;
        };
        let measure = raw.measure(slot).unwrap_or("").trim();
        ingredients.push(format!("{} {}", measure, ingredient).trim().to_string());
    }

    Some(Recipe {
        id: id.to_string(),
        title: title.to_string(),
        image: raw.thumb.clone().unwrap_or_default(),
        description: raw.instructions.clone().unwrap_or_default(),
        category: raw.category.clone().unwrap_or_default(),
        area: raw.area.clone().unwrap_or_default(),
        ingredients,
        cook_time: display_cook_time(id),
        servings: display_servings(id),
        youtube_url: non_blank(raw.youtube.as_deref()).map(str::to_string),
    })
}

/// Display-only cook time. The provider has no structured timing field, so
/// this derives a stable placeholder from the id: same recipe, same value,
/// across loads and processes.
pub fn display_cook_time(id: &str) -> String {
    format!("{} minutes", 15 + (id_fold(id) % 10) * 5)
}

/// Display-only serving count, same id-keyed scheme as [`display_cook_time`].
pub fn display_servings(id: &str) -> String {
    format!("{}", 2 + id_fold(id) % 5)
}

// 31-multiplier byte fold; stable across platforms and releases, unlike
// the std hasher.
fn id_fold(id: &str) -> u64 {
    id.bytes()
        .fold(0u64, |acc, b| acc.wrapping_mul(31).wrapping_add(b as u64))
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    match value {
        Some(v) if !v.trim().is_empty() => Some(v.trim()),
        _ => None,
    }
}
