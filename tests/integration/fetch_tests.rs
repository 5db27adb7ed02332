use crate::support::{page_url, serve_page, serve_status, unreachable_url, SAMPLE_PAGE};
use page_harvest::config::DEFAULT_USER_AGENT;
use page_harvest::scrape::{build_http_client, scrape_page, DocumentSource, ReqwestFetcher};
use page_harvest::FetchError;
use scraper::Selector;
use wiremock::matchers::{header, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fetcher() -> ReqwestFetcher {
    ReqwestFetcher::new(DEFAULT_USER_AGENT).expect("Failed to build fetcher")
}

#[tokio::test]
async fn test_fetch_document_parses_body() {
    let server = serve_page(SAMPLE_PAGE).await;

    let document = fetcher()
        .fetch_document(&page_url(&server))
        .await
        .expect("Fetch should succeed");

    let title = Selector::parse("title").unwrap();
    let text: String = document.select(&title).next().unwrap().text().collect();
    assert_eq!(text, "Sample");
}

#[tokio::test]
async fn test_scrape_page_over_http() {
    let server = serve_page(SAMPLE_PAGE).await;

    let data = scrape_page(&fetcher(), &page_url(&server)).await.unwrap();

    assert_eq!(data.headings, vec!["Title", "Sub", "A,B"]);
    assert_eq!(data.links, vec!["/a", "", "https://other.com/x"]);
}

#[tokio::test]
async fn test_request_carries_user_agent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(header("user-agent", DEFAULT_USER_AGENT))
        .respond_with(ResponseTemplate::new(200).set_body_string("<h1>ok</h1>"))
        .expect(1)
        .mount(&server)
        .await;

    let data = scrape_page(&fetcher(), &server.uri()).await.unwrap();

    assert_eq!(data.headings, vec!["ok"]);
}

#[tokio::test]
async fn test_fetcher_with_custom_client() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(header("user-agent", "CustomHarvester/2.0"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<h2>custom</h2>"))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_http_client("CustomHarvester/2.0").expect("Failed to build client");
    let fetcher = ReqwestFetcher::with_client(client);

    let data = scrape_page(&fetcher, &server.uri()).await.unwrap();

    assert_eq!(data.headings, vec!["custom"]);
}

#[tokio::test]
async fn test_not_found_is_status_error() {
    let server = serve_status(404).await;

    let result = fetcher().fetch_document(&page_url(&server)).await;

    match result {
        Err(FetchError::Status { status, url }) => {
            assert_eq!(status, 404);
            assert_eq!(url, page_url(&server));
        }
        other => panic!("Expected status error, got {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
async fn test_server_error_is_status_error() {
    let server = serve_status(503).await;

    let result = fetcher().fetch_document(&page_url(&server)).await;

    assert!(matches!(result, Err(FetchError::Status { status: 503, .. })));
}

#[tokio::test]
async fn test_single_request_without_retry() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let result = fetcher().fetch_document(&server.uri()).await;

    assert!(result.is_err());
    // expect(1) is verified when the server drops
}

#[tokio::test]
async fn test_connection_refused_is_request_error() {
    let result = fetcher().fetch_document(&unreachable_url()).await;

    assert!(matches!(result, Err(FetchError::Request { .. })));
}

#[tokio::test]
async fn test_non_html_body_still_parses() {
    let server = serve_page("just some text, no markup").await;

    let data = scrape_page(&fetcher(), &page_url(&server)).await.unwrap();

    assert!(data.headings.is_empty());
    assert!(data.links.is_empty());
}
