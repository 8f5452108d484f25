use crate::common::{
    article, client_for, fixture, mock_company_news, mock_company_news_status, mock_general_news,
    setup_server,
};
use serde_json::json;
use stockdash::{NewsBuilder, get_news};

#[tokio::test]
async fn symbols_are_visited_cyclically_and_sorted_newest_first() {
    let server = setup_server();
    let aapl = mock_company_news(&server, "AAPL", json!([article(1, "Apple beats", 1_000)]));
    let msft = mock_company_news(&server, "MSFT", json!([article(2, "Microsoft ships", 2_000)]));
    let client = client_for(&server);

    let news = get_news(&client, &["aapl", " msft "]).await.unwrap();

    aapl.assert_calls(3);
    msft.assert_calls(3);
    assert_eq!(news.len(), 6);
    assert!(news.windows(2).all(|w| w[0].datetime >= w[1].datetime));

    for a in &news {
        let expected = if a.round % 2 == 0 { "AAPL" } else { "MSFT" };
        assert_eq!(a.symbol.as_deref(), Some(expected));
        assert_eq!(a.related, expected);
        assert_eq!(a.category, "company");
    }
    let rounds: Vec<_> = news.iter().map(|a| a.round).collect();
    assert_eq!(rounds, [1, 3, 5, 0, 2, 4]);
}

#[tokio::test]
async fn only_the_first_valid_article_of_each_response_is_kept() {
    let server = setup_server();
    let body: serde_json::Value = serde_json::from_str(&fixture("company_news", "AAPL", "json")).unwrap();
    let _aapl = mock_company_news(&server, "AAPL", body);
    let client = client_for(&server);

    let news = NewsBuilder::new(&client).symbols(&["AAPL"]).limit(1).fetch().await.unwrap();

    assert_eq!(news.len(), 1);
    assert_eq!(news[0].id, 9002);
    assert_eq!(news[0].headline, "Apple unveils new chips");
    assert_eq!(news[0].source, "Yahoo");
}

#[tokio::test]
async fn duplicate_symbols_are_revisited_every_round() {
    let server = setup_server();
    let aapl = mock_company_news(&server, "AAPL", json!([article(7, "Apple again", 5_000)]));
    let client = client_for(&server);

    let news = get_news(&client, &["AAPL", "aapl"]).await.unwrap();

    aapl.assert_calls(6);
    assert_eq!(news.len(), 6);
    assert!(news.iter().all(|a| a.symbol.as_deref() == Some("AAPL")));
    let rounds: Vec<_> = news.iter().map(|a| a.round).collect();
    assert_eq!(rounds, [0, 1, 2, 3, 4, 5]);
}

#[tokio::test]
async fn failing_symbol_contributes_nothing_but_keeps_its_rounds() {
    let server = setup_server();
    let aapl = mock_company_news(&server, "AAPL", json!([article(1, "Apple beats", 1_000)]));
    let bad = mock_company_news_status(&server, "BAD", 500);
    let client = client_for(&server);

    let report = NewsBuilder::new(&client)
        .symbols(&["AAPL", "BAD"])
        .fetch_report()
        .await
        .unwrap();

    aapl.assert_calls(3);
    bad.assert_calls(3);
    assert_eq!(report.items.len(), 3);
    assert!(report.items.iter().all(|a| a.symbol.as_deref() == Some("AAPL")));
    assert!(!report.is_complete());
    assert_eq!(report.failures.len(), 3);
    assert!(report.failures.iter().all(|f| f.source == "BAD"));
    match &report.failures[0].error {
        stockdash::DashError::Status { status, url } => {
            assert_eq!(*status, 500);
            assert!(url.contains("symbol=BAD"));
            assert!(!url.contains(crate::common::TOKEN));
        }
        other => panic!("expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn empty_responses_yield_an_empty_list_without_fallback() {
    let server = setup_server();
    let aapl = mock_company_news(&server, "AAPL", json!([]));
    let general = mock_general_news(&server);
    let client = client_for(&server);

    let news = get_news(&client, &["AAPL"]).await.unwrap();

    assert!(news.is_empty());
    aapl.assert_calls(6);
    general.assert_calls(0);
}

#[tokio::test]
async fn limit_caps_rounds() {
    let server = setup_server();
    let aapl = mock_company_news(&server, "AAPL", json!([article(1, "Apple beats", 1_000)]));
    let msft = mock_company_news(&server, "MSFT", json!([article(2, "Microsoft ships", 2_000)]));
    let client = client_for(&server);

    let news = NewsBuilder::new(&client)
        .symbols(&["AAPL", "MSFT", "NVDA"])
        .limit(2)
        .fetch()
        .await
        .unwrap();

    aapl.assert_calls(1);
    msft.assert_calls(1);
    assert_eq!(news.len(), 2);
    assert_eq!(news[0].symbol.as_deref(), Some("MSFT"));
}

#[tokio::test]
async fn oversized_limit_is_clamped_to_six_rounds() {
    let server = setup_server();
    let aapl = mock_company_news(&server, "AAPL", json!([]));
    let client = client_for(&server);

    let news = NewsBuilder::new(&client)
        .symbols(&["AAPL"])
        .limit(10_000)
        .fetch()
        .await
        .unwrap();

    assert!(news.is_empty());
    aapl.assert_calls(6);
}

#[tokio::test]
async fn company_news_is_never_served_from_cache() {
    let server = setup_server();
    let aapl = mock_company_news(&server, "AAPL", json!([article(1, "Apple beats", 1_000)]));
    let client = client_for(&server);

    NewsBuilder::new(&client).symbols(&["AAPL"]).limit(1).fetch().await.unwrap();
    NewsBuilder::new(&client).symbols(&["AAPL"]).limit(1).fetch().await.unwrap();

    aapl.assert_calls(2);
}

#[tokio::test]
async fn blank_symbols_fall_back_to_general_news() {
    let server = setup_server();
    let general = mock_general_news(&server);
    let client = client_for(&server);

    let news = get_news(&client, &[" ", ""]).await.unwrap();

    general.assert();
    assert_eq!(news.len(), 6);
    assert!(news.iter().all(|a| a.symbol.is_none()));
}
