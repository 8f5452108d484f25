use crate::common::{TOKEN, client_for, fixture, setup_server};
use httpmock::Method::GET;
use stockdash::{StockSearch, search_stocks};

#[tokio::test]
async fn text_query_makes_one_call_and_caps_results() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/search")
            .query_param("q", "apple")
            .query_param("token", TOKEN);
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("search", "apple", "json"));
    });
    let client = client_for(&server);

    let hits = search_stocks(&client, Some("  apple  ")).await;

    mock.assert_calls(1);
    assert_eq!(hits.len(), 15);
    assert!(hits.iter().all(|h| !h.is_in_watchlist && !h.symbol.is_empty()));

    let first = &hits[0];
    assert_eq!(first.symbol, "AAPL");
    assert_eq!(first.name, "APPLE INC");
    assert_eq!(first.exchange, "AAPL");
    assert_eq!(first.kind, "Common Stock");
}

#[tokio::test]
async fn repeated_query_is_served_from_the_revalidation_cache() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/search").query_param("q", "apple");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("search", "apple", "json"));
    });
    let client = client_for(&server);

    let first = search_stocks(&client, Some("apple")).await;
    let second = search_stocks(&client, Some("apple")).await;

    mock.assert_calls(1);
    assert_eq!(first, second);
}

#[tokio::test]
async fn sparse_hits_get_defaults_and_blank_symbols_are_dropped() {
    let server = setup_server();
    let _mock = server.mock(|when, then| {
        when.method(GET).path("/search").query_param("q", "odd");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"count":3,"result":[{"symbol":"odd1"},{"description":"No symbol"},{"symbol":"","type":"ETP"}]}"#);
    });
    let client = client_for(&server);

    let hits = search_stocks(&client, Some("odd")).await;

    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].symbol, "ODD1");
    assert_eq!(hits[0].name, "ODD1");
    assert_eq!(hits[0].exchange, "US");
    assert_eq!(hits[0].kind, "Stock");
}

#[tokio::test]
async fn missing_result_field_yields_nothing() {
    let server = setup_server();
    let _mock = server.mock(|when, then| {
        when.method(GET).path("/search");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"count":0}"#);
    });
    let client = client_for(&server);

    assert!(search_stocks(&client, Some("zzzz")).await.is_empty());
}

#[tokio::test]
async fn upstream_error_is_swallowed_but_reported() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/search");
        then.status(429).body("slow down");
    });
    let client = client_for(&server);

    let report = StockSearch::new(&client).query("tesla").fetch_report().await;

    mock.assert();
    assert!(report.items.is_empty());
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].source, "tesla");
}
