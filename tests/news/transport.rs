use stockdash::{DashError, FinnhubClient, NewsBuilder, StockSearch};
use url::Url;

const SECRET: &str = "SECRET-TOKEN-123";

// Nothing listens on port 1, so every request fails before a response arrives.
fn unreachable_client() -> FinnhubClient {
    FinnhubClient::builder()
        .base_url(Url::parse("http://127.0.0.1:1/api/v1/").unwrap())
        .api_key(SECRET)
        .build()
        .unwrap()
}

#[tokio::test]
async fn connection_errors_do_not_expose_the_token() {
    let client = unreachable_client();

    let report = NewsBuilder::new(&client)
        .symbols(&["AAPL"])
        .limit(1)
        .fetch_report()
        .await
        .unwrap();

    assert!(report.items.is_empty());
    assert_eq!(report.failures.len(), 1);
    let failure = &report.failures[0].error;
    assert!(matches!(failure, DashError::Http(_)));
    assert!(!failure.to_string().contains(SECRET));
    assert!(!format!("{failure:?}").contains(SECRET));
}

#[tokio::test]
async fn search_connection_errors_do_not_expose_the_token() {
    let client = unreachable_client();

    let report = StockSearch::new(&client).query("apple").fetch_report().await;

    assert!(report.items.is_empty());
    assert_eq!(report.failures.len(), 1);
    assert!(!report.failures[0].error.to_string().contains(SECRET));
    assert!(!format!("{:?}", report.failures[0].error).contains(SECRET));
}
