mod common;

use serde_json::Value;

// ─── BOOK FINDERS ────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_find_by_title_returns_seeded_books() {
    let server = common::make_seeded_server().await;

    let response = server
        .get("/books/search/findByTitle")
        .add_query_param("title", "Spring Microservices")
        .await;

    response.assert_status_ok();
    let items = response.json::<Value>()["items"].clone();
    assert_eq!(items.as_array().unwrap().len(), 1);
    assert_eq!(items[0]["price"]["amount"], "45.83");
    assert_eq!(items[0]["price"]["currency"], "USD");
    assert_eq!(items[0]["authors"][0]["firstName"], "Felipe");
    assert_eq!(items[0]["authors"][0]["lastName"], "Gutierrez");

    let response = server
        .get("/books/search/findByTitle")
        .add_query_param("title", "Pro Spring Boot")
        .await;

    let items = response.json::<Value>()["items"].clone();
    assert_eq!(items.as_array().unwrap().len(), 1);
    assert_eq!(items[0]["price"]["amount"], "42.74");
    assert_eq!(items[0]["authors"][0]["firstName"], "Rajesh");
    assert_eq!(items[0]["authors"][0]["lastName"], "RV");
}

#[tokio::test]
async fn test_find_by_title_is_exact() {
    let server = common::make_seeded_server().await;

    let response = server
        .get("/books/search/findByTitle")
        .add_query_param("title", "Spring")
        .await;

    response.assert_status_ok();
    assert!(common::titles(&response.json::<Value>()).is_empty());
}

#[tokio::test]
async fn test_find_by_title_contains_matches_both_seeded_books() {
    let server = common::make_seeded_server().await;

    let response = server
        .get("/books/search/findByTitleContains")
        .add_query_param("keyword", "Spring")
        .await;

    assert_eq!(
        common::titles(&response.json::<Value>()),
        vec!["Spring Microservices", "Pro Spring Boot"]
    );
}

#[tokio::test]
async fn test_find_by_title_contains_is_case_sensitive() {
    let server = common::make_seeded_server().await;

    let response = server
        .get("/books/search/findByTitleContains")
        .add_query_param("keyword", "spring")
        .await;

    response.assert_status_ok();
    assert!(common::titles(&response.json::<Value>()).is_empty());
}

#[tokio::test]
async fn test_find_by_published_date_after_is_strict() {
    let server = common::make_seeded_server().await;

    let response = server
        .get("/books/search/findByPublishedDateAfter")
        .add_query_param("publishedDate", "2016-06-01")
        .await;
    assert_eq!(
        common::titles(&response.json::<Value>()),
        vec!["Spring Microservices"]
    );

    let response = server
        .get("/books/search/findByPublishedDateAfter")
        .add_query_param("publishedDate", "2016-06-28")
        .await;
    assert!(common::titles(&response.json::<Value>()).is_empty());
}

#[tokio::test]
async fn test_find_by_published_date_after_rejects_bad_date() {
    let server = common::make_seeded_server().await;

    let response = server
        .get("/books/search/findByPublishedDateAfter")
        .add_query_param("publishedDate", "June 2016")
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_find_by_title_contains_and_published_date_after() {
    let server = common::make_seeded_server().await;

    let response = server
        .get("/books/search/findByTitleContainsAndPublishedDateAfter")
        .add_query_param("keyword", "Boot")
        .add_query_param("publishedDate", "2016-01-01")
        .await;
    assert_eq!(
        common::titles(&response.json::<Value>()),
        vec!["Pro Spring Boot"]
    );

    let response = server
        .get("/books/search/findByTitleContainsAndPublishedDateAfter")
        .add_query_param("keyword", "Boot")
        .add_query_param("publishedDate", "2016-06-01")
        .await;
    assert!(common::titles(&response.json::<Value>()).is_empty());
}

#[tokio::test]
async fn test_price_range_bounds_are_inclusive() {
    let server = common::make_seeded_server().await;

    let response = server
        .get("/books/search/findByTitleContainsAndPriceCurrencyAndPriceAmountBetween")
        .add_query_param("keyword", "Spring")
        .add_query_param("currency", "USD")
        .add_query_param("low", "42.74")
        .add_query_param("high", "45.83")
        .await;

    response.assert_status_ok();
    assert_eq!(
        common::titles(&response.json::<Value>()),
        vec!["Spring Microservices", "Pro Spring Boot"]
    );
}

#[tokio::test]
async fn test_price_range_filters_by_currency_and_amount() {
    let server = common::make_seeded_server().await;

    let response = server
        .get("/books/search/findByTitleContainsAndPriceCurrencyAndPriceAmountBetween")
        .add_query_param("keyword", "Spring")
        .add_query_param("currency", "EUR")
        .add_query_param("low", "0.01")
        .add_query_param("high", "100")
        .await;
    assert!(common::titles(&response.json::<Value>()).is_empty());

    let response = server
        .get("/books/search/findByTitleContainsAndPriceCurrencyAndPriceAmountBetween")
        .add_query_param("keyword", "Spring")
        .add_query_param("currency", "USD")
        .add_query_param("low", "43")
        .add_query_param("high", "50")
        .await;
    assert_eq!(
        common::titles(&response.json::<Value>()),
        vec!["Spring Microservices"]
    );
}

#[tokio::test]
async fn test_price_range_with_inverted_bounds_is_empty() {
    let server = common::make_seeded_server().await;

    let response = server
        .get("/books/search/findByTitleContainsAndPriceCurrencyAndPriceAmountBetween")
        .add_query_param("keyword", "Spring")
        .add_query_param("currency", "USD")
        .add_query_param("low", "50")
        .add_query_param("high", "40")
        .await;

    response.assert_status_ok();
    assert!(common::titles(&response.json::<Value>()).is_empty());
}

#[tokio::test]
async fn test_price_range_requires_all_parameters() {
    let server = common::make_seeded_server().await;

    let response = server
        .get("/books/search/findByTitleContainsAndPriceCurrencyAndPriceAmountBetween")
        .add_query_param("keyword", "Spring")
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_find_by_authors_last_name() {
    let server = common::make_seeded_server().await;

    let response = server
        .get("/books/search/findByAuthorsLastName")
        .add_query_param("lastName", "Gutierrez")
        .await;

    assert_eq!(
        common::titles(&response.json::<Value>()),
        vec!["Spring Microservices"]
    );
}

#[tokio::test]
async fn test_book_with_two_matching_authors_is_listed_once() {
    let server = common::make_seeded_server().await;
    let other = common::create_author(&server, "Maria", "Gutierrez").await;
    common::create_book(&server, "Spring Cloud", &[common::GUTIERREZ, other]).await;

    let response = server
        .get("/books/search/findByAuthorsLastName")
        .add_query_param("lastName", "Gutierrez")
        .await;

    assert_eq!(
        common::titles(&response.json::<Value>()),
        vec!["Spring Microservices", "Spring Cloud"]
    );
}

#[tokio::test]
async fn test_book_finder_index() {
    let server = common::make_server(common::create_test_state());

    let response = server.get("/books/search").await;

    response.assert_status_ok();
    let items = response.json::<Value>()["items"].clone();
    assert_eq!(items.as_array().unwrap().len(), 6);
    assert_eq!(items[0]["name"], "findByTitle");
    assert_eq!(items[0]["href"], "/books/search/findByTitle{?title}");
}

// ─── AUTHOR FINDERS ──────────────────────────────────────────────────────────

#[tokio::test]
async fn test_find_by_books_title_is_consistent_with_authors_last_name() {
    let server = common::make_seeded_server().await;

    let response = server
        .get("/authors/search/findByBooksTitle")
        .add_query_param("title", "Spring Microservices")
        .await;

    response.assert_status_ok();
    let items = response.json::<Value>()["items"].clone();
    assert_eq!(items.as_array().unwrap().len(), 1);
    assert_eq!(items[0]["lastName"], "Gutierrez");
    assert_eq!(items[0]["books"][0]["title"], "Spring Microservices");
}

#[tokio::test]
async fn test_find_by_last_name() {
    let server = common::make_seeded_server().await;

    let response = server
        .get("/authors/search/findByLastName")
        .add_query_param("lastName", "RV")
        .await;

    let items = response.json::<Value>()["items"].clone();
    assert_eq!(items.as_array().unwrap().len(), 1);
    assert_eq!(items[0]["firstName"], "Rajesh");
}

#[tokio::test]
async fn test_author_finder_without_match_is_empty_list() {
    let server = common::make_seeded_server().await;

    let response = server
        .get("/authors/search/findByLastName")
        .add_query_param("lastName", "Nobody")
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["items"], serde_json::json!([]));
}

#[tokio::test]
async fn test_author_finder_index() {
    let server = common::make_server(common::create_test_state());

    let response = server.get("/authors/search").await;

    let items = response.json::<Value>()["items"].clone();
    assert_eq!(items[1]["href"], "/authors/search/findByBooksTitle{?title}");
}
