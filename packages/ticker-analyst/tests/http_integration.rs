use httpmock::{
    Method::{GET, POST},
    MockServer,
};
use ticker_analyst::ai::AnthropicCompletion;
use ticker_analyst::{
    AnalysisError, AnalysisStage, Analyzer, AnalyzerConfig, FetchError, HttpFetcher,
    MockCompletion, PageFetcher,
};

fn anthropic_body(text: &str) -> String {
    serde_json::json!({
        "id": "msg_test",
        "type": "message",
        "role": "assistant",
        "model": "claude-3-sonnet-20240229",
        "content": [{"type": "text", "text": text}],
        "stop_reason": "end_turn",
        "usage": {"input_tokens": 100, "output_tokens": 20}
    })
    .to_string()
}

#[tokio::test]
async fn http_fetcher_returns_page_on_200() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/p/monitor");
        then.status(200)
            .header("content-type", "text/html; charset=utf-8")
            .body("<html><body>AAPL is up.</body></html>");
    });

    let fetcher = HttpFetcher::new().unwrap();
    let page = fetcher.fetch(&server.url("/p/monitor")).await.unwrap();

    mock.assert();
    assert_eq!(page.status, 200);
    assert_eq!(page.html, "<html><body>AAPL is up.</body></html>");
    assert_eq!(page.content_type.as_deref(), Some("text/html; charset=utf-8"));
}

#[tokio::test]
async fn http_fetcher_rejects_non_2xx() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/missing");
        then.status(404).body("not found");
    });

    let fetcher = HttpFetcher::new().unwrap();
    let err = fetcher.fetch(&server.url("/missing")).await.unwrap_err();

    assert!(matches!(err, FetchError::Status { status: 404, .. }));
}

#[tokio::test]
async fn http_404_fails_analysis_without_model_calls() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/gone");
        then.status(404);
    });

    let model = MockCompletion::new().with_default_response("TICKERS: [AAPL]");
    let analyzer = Analyzer::new(HttpFetcher::new().unwrap(), model);

    let err = analyzer.analyze(&server.url("/gone")).await.unwrap_err();

    assert!(matches!(err, AnalysisError::Fetch(_)));
    assert_eq!(err.stage(), Some(AnalysisStage::Fetching));
    assert_eq!(analyzer.model().call_count(), 0);
}

#[tokio::test]
async fn full_run_against_mock_page_and_mock_anthropic() {
    let pages = MockServer::start();
    pages.mock(|when, then| {
        when.method(GET).path("/newsletter");
        then.status(200)
            .header("content-type", "text/html")
            .body("<html><head><script>track()</script></head><body>AAPL is up. GOOGL too.</body></html>");
    });

    let api = MockServer::start();
    let extraction = api.mock(|when, then| {
        when.method(POST)
            .path("/v1/messages")
            .header("x-api-key", "sk-ant-test")
            .body_includes("TICKERS: [list all tickers separated by commas]")
            .body_includes("\"max_tokens\":400");
        then.status(200)
            .header("content-type", "application/json")
            .body(anthropic_body("Here you go.\nTICKERS: [AAPL, GOOGL]"));
    });
    let summary = api.mock(|when, then| {
        when.method(POST)
            .path("/v1/messages")
            .body_includes("related to stock ticker AAPL.");
        then.status(200)
            .header("content-type", "application/json")
            .body(anthropic_body("SUMMARY: Both stocks show upward momentum."));
    });

    let model = AnthropicCompletion::new("sk-ant-test").with_base_url(api.url("/v1"));
    let analyzer = Analyzer::with_config(
        HttpFetcher::new().unwrap(),
        model,
        AnalyzerConfig::new().with_max_tokens(400),
    );

    let result = analyzer.analyze(&pages.url("/newsletter")).await.unwrap();

    extraction.assert();
    summary.assert();
    assert_eq!(result.tickers, vec!["AAPL", "GOOGL"]);
    assert_eq!(result.summary, "Both stocks show upward momentum.");
}

#[tokio::test]
async fn anthropic_error_surfaces_as_model_call_failure() {
    let pages = MockServer::start();
    pages.mock(|when, then| {
        when.method(GET).path("/newsletter");
        then.status(200).body("<p>MSFT</p>");
    });

    let api = MockServer::start();
    api.mock(|when, then| {
        when.method(POST).path("/v1/messages");
        then.status(529)
            .header("content-type", "application/json")
            .body(r#"{"type":"error","error":{"type":"overloaded_error","message":"Overloaded"}}"#);
    });

    let model = AnthropicCompletion::new("sk-ant-test").with_base_url(api.url("/v1"));
    let analyzer = Analyzer::new(HttpFetcher::new().unwrap(), model);

    let err = analyzer.analyze(&pages.url("/newsletter")).await.unwrap_err();

    assert_eq!(err.stage(), Some(AnalysisStage::ExtractingTickers));
    assert!(err.to_string().contains("overloaded_error: Overloaded"));
}
