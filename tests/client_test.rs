use mealfeed::{FeedError, MealApi, MealDbClient};

#[tokio::test]
async fn test_list_categories_parses_envelope() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/categories.php")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"categories": [
                {"strCategory": "Seafood", "strCategoryThumb": "s.png", "strCategoryDescription": "Fish and shellfish"},
                {"strCategory": "Vegan", "strCategoryThumb": null, "strCategoryDescription": null}
            ]}"#,
        )
        .create();

    let client = MealDbClient::with_base_url(server.url());
    let categories = client.list_categories().await.unwrap();

    assert_eq!(categories.len(), 2);
    assert_eq!(categories[0].name, "Seafood");
    assert_eq!(categories[0].thumb, "s.png");
    // nulled fields come back as empty strings
    assert_eq!(categories[1].thumb, "");
    mock.assert();
}

#[tokio::test]
async fn test_non_success_status_is_network_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/categories.php")
        .with_status(500)
        .with_body("internal error")
        .create();

    let client = MealDbClient::with_base_url(server.url());
    let result = client.list_categories().await;
    assert!(matches!(result, Err(FeedError::Network(_))));
}

#[tokio::test]
async fn test_invalid_json_is_parse_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/random.php")
        .with_status(200)
        .with_body("<html>definitely not json</html>")
        .create();

    let client = MealDbClient::with_base_url(server.url());
    let result = client.random_meal().await;
    assert!(matches!(result, Err(FeedError::Parse { .. })));
}

#[tokio::test]
async fn test_random_empty_envelope_is_parse_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/random.php")
        .with_status(200)
        .with_body(r#"{"meals": null}"#)
        .create();

    let client = MealDbClient::with_base_url(server.url());
    let result = client.random_meal().await;
    assert!(matches!(result, Err(FeedError::Parse { .. })));
}

#[tokio::test]
async fn test_lookup_null_envelope_is_none() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/lookup.php?i=99999")
        .with_status(200)
        .with_body(r#"{"meals": null}"#)
        .create();

    let client = MealDbClient::with_base_url(server.url());
    let meal = client.meal_by_id("99999").await.unwrap();
    assert!(meal.is_none());
    mock.assert();
}

#[tokio::test]
async fn test_filter_null_envelope_is_empty() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/filter.php?c=Goat")
        .with_status(200)
        .with_body(r#"{"meals": null}"#)
        .create();

    let client = MealDbClient::with_base_url(server.url());
    let meals = client.meals_by_category("Goat").await.unwrap();
    assert!(meals.is_empty());
}

#[tokio::test]
async fn test_search_query_is_percent_encoded() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/search.php?s=arroz%20con%20pollo")
        .with_status(200)
        .with_body(r#"{"meals": [{"idMeal": "52770", "strMeal": "Arroz con pollo"}]}"#)
        .create();

    let client = MealDbClient::with_base_url(server.url());
    let meals = client.search_meals("arroz con pollo").await.unwrap();
    assert_eq!(meals.len(), 1);
    assert_eq!(meals[0].name.as_deref(), Some("Arroz con pollo"));
    mock.assert();
}
