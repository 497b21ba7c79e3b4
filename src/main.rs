use std::env;

use mealfeed::{FeedConfig, HomeFeedPipeline};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = FeedConfig::load()?;
    let pipeline = HomeFeedPipeline::from_config(&config)?;

    pipeline.load_home_feed().await;

    // Optional category argument switches the feed before printing
    if let Some(category) = env::args().nth(1) {
        pipeline.select_category(&category).await;
    }

    let feed = pipeline.snapshot();
    if let Some(error) = &feed.error {
        eprintln!("warning: {}", error);
    }

    if let Some(featured) = &feed.featured_recipe {
        println!(
            "Featured: {} ({} | {} | serves {})",
            featured.title, featured.area, featured.cook_time, featured.servings
        );
    }

    println!(
        "Categories: {}",
        feed.categories
            .iter()
            .map(|c| c.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );

    if let Some(selected) = &feed.selected_category {
        println!("\n{} ({} recipes)", selected, feed.recipes.len());
        for recipe in &feed.recipes {
            println!("  {}  {}", recipe.id, recipe.title);
        }
    }

    Ok(())
}
