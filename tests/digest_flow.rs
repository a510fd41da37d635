//! End-to-end digest runs against local Alpha Vantage and Twilio stand-ins.
//!
//! Pacing and retry delays are set to zero so nothing waits in real time.

use std::collections::HashMap;
use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_string_contains, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use quote_courier::adapters::alpha_vantage::{AlphaVantageClient, AlphaVantageConfig};
use quote_courier::adapters::twilio::{TwilioClient, TwilioConfig};
use quote_courier::application::{
    DigestError, DigestJob, DispatchError, Dispatcher, FetchError, QuoteFetcher, RetryPolicy,
};
use quote_courier::config::Settings;

// ============================================================================
// Test Fixtures
// ============================================================================

fn settings(extra: &[(&str, &str)]) -> Settings {
    let mut env: HashMap<String, String> = [
        ("ALPHA_VANTAGE_API_KEY", "test-key"),
        ("TWILIO_ACCOUNT_SID", "AC123"),
        ("TWILIO_AUTH_TOKEN", "secret"),
        ("TWILIO_PHONE_NUMBER", "+15551234567"),
        ("MY_PHONE_NUMBER", "+15557654321"),
    ]
    .iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();
    for (k, v) in extra {
        env.insert(k.to_string(), v.to_string());
    }
    Settings::from_lookup(|name| env.get(name).cloned()).unwrap()
}

fn global_quote(symbol: &str, price: &str, change: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "Global Quote": {
            "01. symbol": symbol,
            "05. price": price,
            "10. change percent": change
        }
    }))
}

async fn mount_quote(server: &MockServer, symbol: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/query"))
        .and(query_param("symbol", symbol))
        .respond_with(response)
        .mount(server)
        .await;
}

fn job(settings: &Settings, quotes: &MockServer) -> DigestJob<AlphaVantageClient> {
    let client = AlphaVantageClient::with_config(
        AlphaVantageConfig::new(settings.alpha_vantage_api_key.clone())
            .with_base_url(format!("{}/query", quotes.uri())),
    )
    .unwrap();
    let fetcher = QuoteFetcher::new(client)
        .with_request_interval(Duration::ZERO)
        .with_retry_policy(RetryPolicy::immediate(2));
    DigestJob::new(fetcher, settings.symbols.clone())
}

fn dispatcher(settings: &Settings, messages: &MockServer) -> Dispatcher<TwilioClient> {
    let base = messages.uri();
    Dispatcher::from_settings(&settings.messaging, |creds| {
        TwilioClient::with_config(
            TwilioConfig::new(creds.account_sid.clone(), creds.auth_token.clone())
                .with_api_base_url(base),
        )
        .map_err(|e| anyhow::anyhow!(e))
    })
    .unwrap()
}

fn twilio_created() -> ResponseTemplate {
    ResponseTemplate::new(201).set_body_json(json!({"sid": "SM42", "status": "queued"}))
}

// ============================================================================
// Tests
// ============================================================================

#[tokio::test]
async fn test_sms_digest_end_to_end() {
    let quotes = MockServer::start().await;
    let messages = MockServer::start().await;
    let settings = settings(&[("STOCK_SYMBOLS", "NVDA, GOOGL")]);

    mount_quote(&quotes, "NVDA", global_quote("NVDA", "120.50", "+1.2%")).await;
    mount_quote(&quotes, "GOOGL", global_quote("GOOGL", "175.00", "-0.3%")).await;

    Mock::given(method("POST"))
        .and(path("/2010-04-01/Accounts/AC123/Messages.json"))
        .and(body_string_contains("To=%2B15557654321"))
        .and(body_string_contains("From=%2B15551234567"))
        .respond_with(twilio_created())
        .expect(1)
        .mount(&messages)
        .await;

    let report = job(&settings, &quotes)
        .run(&dispatcher(&settings, &messages))
        .await
        .unwrap();

    assert_eq!(
        report.message,
        "Stocks 8am: NVDA $120.50 (+1.2%), GOOGL $175.00 (-0.3%).\nData: Alpha Vantage"
    );
    assert_eq!(report.sent.sid, "SM42");
}

#[tokio::test]
async fn test_whatsapp_digest_end_to_end() {
    let quotes = MockServer::start().await;
    let messages = MockServer::start().await;
    let settings = settings(&[("STOCK_SYMBOLS", "TEAM"), ("DELIVERY_MODE", "WHATSAPP")]);

    mount_quote(&quotes, "TEAM", global_quote("TEAM", "210.10", "0.00%")).await;

    Mock::given(method("POST"))
        .and(body_string_contains("To=whatsapp%3A%2B15557654321"))
        .and(body_string_contains("From=whatsapp%3A%2B15551234567"))
        .respond_with(twilio_created())
        .expect(1)
        .mount(&messages)
        .await;

    job(&settings, &quotes)
        .run(&dispatcher(&settings, &messages))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_transient_failure_is_retried() {
    let quotes = MockServer::start().await;
    let messages = MockServer::start().await;
    let settings = settings(&[("STOCK_SYMBOLS", "LIFE")]);

    // First LIFE request hits the rate limit, the retry succeeds
    Mock::given(method("GET"))
        .and(query_param("symbol", "LIFE"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Information": "Thank you for using Alpha Vantage! Please consider spreading out your free API requests more sparingly (1 request per second)."
        })))
        .up_to_n_times(1)
        .expect(1)
        .mount(&quotes)
        .await;
    mount_quote(&quotes, "LIFE", global_quote("LIFE", "7.25", "+3.1%")).await;

    Mock::given(method("POST"))
        .and(body_string_contains("Body=Stocks+8am%3A+LIFE+%247.25+%28%2B3.1%25%29"))
        .respond_with(twilio_created())
        .expect(1)
        .mount(&messages)
        .await;

    job(&settings, &quotes)
        .run(&dispatcher(&settings, &messages))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_persistent_failure_aborts_without_sending() {
    let quotes = MockServer::start().await;
    let messages = MockServer::start().await;
    let settings = settings(&[("STOCK_SYMBOLS", "NVDA,LIFE,GOOGL")]);

    mount_quote(&quotes, "NVDA", global_quote("NVDA", "120.50", "+1.2%")).await;
    Mock::given(method("GET"))
        .and(query_param("symbol", "LIFE"))
        .respond_with(ResponseTemplate::new(500))
        .expect(2)
        .mount(&quotes)
        .await;
    Mock::given(method("GET"))
        .and(query_param("symbol", "GOOGL"))
        .respond_with(global_quote("GOOGL", "175.00", "-0.3%"))
        .expect(0)
        .mount(&quotes)
        .await;

    Mock::given(method("POST"))
        .respond_with(twilio_created())
        .expect(0)
        .mount(&messages)
        .await;

    let err = job(&settings, &quotes)
        .run(&dispatcher(&settings, &messages))
        .await
        .unwrap_err();

    match err {
        DigestError::Fetch(FetchError::Exhausted { symbol, attempts, .. }) => {
            assert_eq!(symbol, "LIFE");
            assert_eq!(attempts, 2);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_provider_rejection_surfaces() {
    let quotes = MockServer::start().await;
    let messages = MockServer::start().await;
    let settings = settings(&[("STOCK_SYMBOLS", "NVDA")]);

    mount_quote(&quotes, "NVDA", global_quote("NVDA", "120.50", "+1.2%")).await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "code": 21606,
            "message": "The From phone number is not a valid, SMS-capable inbound phone number",
            "status": 400
        })))
        .expect(1)
        .mount(&messages)
        .await;

    let err = job(&settings, &quotes)
        .run(&dispatcher(&settings, &messages))
        .await
        .unwrap_err();

    assert!(matches!(err, DigestError::Dispatch(DispatchError::Send(_))));
}

#[tokio::test]
async fn test_missing_messaging_setting_stops_before_any_request() {
    let settings = {
        let mut s = settings(&[]);
        s.messaging.to = None;
        s
    };

    let result: Result<Dispatcher<TwilioClient>, DispatchError> =
        Dispatcher::from_settings(&settings.messaging, |_| -> Result<_, DispatchError> {
            panic!("client must not be built without MY_PHONE_NUMBER")
        });

    match result {
        Err(DispatchError::MissingSettings { missing }) => assert_eq!(missing, vec!["MY_PHONE_NUMBER"]),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected missing settings"),
    }
}
