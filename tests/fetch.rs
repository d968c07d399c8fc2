mod common;

use chrono::NaiveDate;
use navlens::core::{ChartClient, NavError};
use navlens::fetch::{HistoryRequest, Range};

#[tokio::test]
async fn fetch_happy_path_drops_null_rows() {
    let server = common::setup_server();
    let mock = common::mock_chart(&server, "BTC-USD");

    let client = ChartClient::builder()
        .base_chart(common::chart_base(&server))
        .build()
        .unwrap();

    let (bars, meta) = HistoryRequest::new(&client, "BTC-USD")
        .range(Range::Y5)
        .fetch()
        .await
        .unwrap();

    mock.assert();
    // fixture has 5 timestamps, one with null OHLC
    assert_eq!(bars.len(), 4);
    assert_eq!(bars[0].date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    assert!(bars.windows(2).all(|w| w[0].date < w[1].date));
    assert!(bars.iter().all(|b| b.close > 0.0));

    assert_eq!(meta.symbol, "BTC-USD");
    assert_eq!(meta.currency.as_deref(), Some("USD"));
    assert_eq!(meta.regular_market_price, Some(101141.77));
}

#[tokio::test]
async fn fetch_http_error_is_status() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(httpmock::Method::GET)
            .path("/v8/finance/chart/BTC-USD");
        then.status(500);
    });

    let client = ChartClient::builder()
        .base_chart(common::chart_base(&server))
        .build()
        .unwrap();

    let err = HistoryRequest::new(&client, "BTC-USD")
        .fetch()
        .await
        .unwrap_err();

    mock.assert();
    match err {
        NavError::Status { status, .. } => assert_eq!(status, 500),
        other => panic!("expected Status error, got {other}"),
    }
}

#[tokio::test]
async fn fetch_api_error_node_is_data_error() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(httpmock::Method::GET)
            .path("/v8/finance/chart/NOPE");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"chart":{"result":null,"error":{"code":"Not Found","description":"No data found, symbol may be delisted"}}}"#);
    });

    let client = ChartClient::builder()
        .base_chart(common::chart_base(&server))
        .build()
        .unwrap();

    let err = HistoryRequest::new(&client, "NOPE").fetch().await.unwrap_err();

    mock.assert();
    match err {
        NavError::Data(msg) => assert!(msg.contains("Not Found")),
        other => panic!("expected Data error, got {other}"),
    }
}

#[tokio::test]
async fn fetch_rejects_inverted_period() {
    use chrono::{Duration, TimeZone, Utc};

    let server = common::setup_server();
    let client = ChartClient::builder()
        .base_chart(common::chart_base(&server))
        .build()
        .unwrap();

    let start = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
    let err = HistoryRequest::new(&client, "BTC-USD")
        .between(start, start - Duration::days(1))
        .fetch()
        .await
        .unwrap_err();

    assert!(matches!(err, NavError::InvalidDates));
}
