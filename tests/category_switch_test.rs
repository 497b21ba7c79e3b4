use std::sync::Arc;

use mealfeed::{CategoryExclusions, HomeFeedPipeline, MealDbClient};

fn pipeline_for(server: &mockito::Server) -> HomeFeedPipeline {
    HomeFeedPipeline::new(
        Arc::new(MealDbClient::with_base_url(server.url())),
        CategoryExclusions::default(),
    )
}

async fn loaded_pipeline(server: &mut mockito::Server) -> (HomeFeedPipeline, mockito::Mock) {
    server
        .mock("GET", "/categories.php")
        .with_status(200)
        .with_body(
            r#"{"categories": [
                {"strCategory": "Chicken", "strCategoryThumb": "u1", "strCategoryDescription": "d1"},
                {"strCategory": "Dessert", "strCategoryThumb": "u2", "strCategoryDescription": "d2"}
            ]}"#,
        )
        .create();
    server
        .mock("GET", "/random.php")
        .with_status(200)
        .with_body(r#"{"meals": [{"idMeal": "1", "strMeal": "Featured Dish"}]}"#)
        .create();
    let chicken_mock = server
        .mock("GET", "/filter.php?c=Chicken")
        .with_status(200)
        .with_body(r#"{"meals": [{"idMeal": "10", "strMeal": "Chicken Dish", "strMealThumb": "t"}]}"#)
        .expect(1)
        .create();

    let pipeline = pipeline_for(server);
    pipeline.load_home_feed().await;
    (pipeline, chicken_mock)
}

#[tokio::test]
async fn test_select_category_switches_recipes() {
    let mut server = mockito::Server::new_async().await;
    let (pipeline, _chicken_mock) = loaded_pipeline(&mut server).await;

    let dessert_mock = server
        .mock("GET", "/filter.php?c=Dessert")
        .with_status(200)
        .with_body(
            r#"{"meals": [
                {"idMeal": "20", "strMeal": "Apple Frangipan Tart", "strMealThumb": "t1"},
                {"idMeal": "21", "strMeal": "Banana Pancakes", "strMealThumb": "t2"}
            ]}"#,
        )
        .create();

    pipeline.select_category("Dessert").await;

    let feed = pipeline.snapshot();
    assert_eq!(feed.selected_category.as_deref(), Some("Dessert"));
    let titles: Vec<&str> = feed.recipes.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["Apple Frangipan Tart", "Banana Pancakes"]);
    // switching the list leaves the rest of the feed alone
    assert_eq!(feed.categories.len(), 2);
    assert!(feed.featured_recipe.is_some());
    dessert_mock.assert();
}

#[tokio::test]
async fn test_switch_failure_clears_recipes() {
    let mut server = mockito::Server::new_async().await;
    let (pipeline, _chicken_mock) = loaded_pipeline(&mut server).await;
    assert_eq!(pipeline.snapshot().recipes.len(), 1);

    server
        .mock("GET", "/filter.php?c=Dessert")
        .with_status(500)
        .with_body("boom")
        .create();

    pipeline.select_category("Dessert").await;

    // the user changed context: show "no recipes", not the previous
    // category's rows
    let feed = pipeline.snapshot();
    assert_eq!(feed.selected_category.as_deref(), Some("Dessert"));
    assert!(feed.recipes.is_empty());
    assert!(feed.error.is_some());
    assert!(feed.featured_recipe.is_some());
}

#[tokio::test]
async fn test_select_current_category_is_noop() {
    let mut server = mockito::Server::new_async().await;
    let (pipeline, chicken_mock) = loaded_pipeline(&mut server).await;

    pipeline.select_category("Chicken").await;

    let feed = pipeline.snapshot();
    assert_eq!(feed.selected_category.as_deref(), Some("Chicken"));
    assert_eq!(feed.recipes.len(), 1);
    assert!(feed.error.is_none());
    // exactly the initial fetch, no refetch for the already-selected category
    chicken_mock.assert();
}

#[tokio::test]
async fn test_excluded_category_recipes_are_filtered() {
    let mut server = mockito::Server::new_async().await;
    let (pipeline, _chicken_mock) = loaded_pipeline(&mut server).await;

    // full records with an excluded category slip through list endpoints
    // sometimes; the pipeline still drops them
    server
        .mock("GET", "/filter.php?c=Dessert")
        .with_status(200)
        .with_body(
            r#"{"meals": [
                {"idMeal": "30", "strMeal": "Sneaky Brisket", "strMealThumb": "t", "strCategory": "Beef"},
                {"idMeal": "31", "strMeal": "Treacle Tart", "strMealThumb": "t"}
            ]}"#,
        )
        .create();

    pipeline.select_category("Dessert").await;

    let feed = pipeline.snapshot();
    let titles: Vec<&str> = feed.recipes.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["Treacle Tart"]);
}
