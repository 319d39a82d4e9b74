use ecfs_scrape::config::Config;
use ecfs_scrape::query::ConstraintKey;
use ecfs_scrape::{EcfsError, HttpFetcher, ParseError, ProceedingsQuery, QueryOutput, QueryWarning};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SEARCH_PATH: &str = "/ecfs/proceeding_search/execute";
const DETAIL_PAGE: &str = include_str!("../fixtures/proceeding_detail.html");
const RESULTS_PAGE: &str = include_str!("../fixtures/results_page.html");

/// Creates a configuration pointing at the mock server
fn create_test_config(server: &MockServer) -> Config {
    let mut config = Config::default();
    config.client.base_url = format!("{}{}", server.uri(), SEARCH_PATH);
    config.client.timeout_secs = 5;
    config.client.connect_timeout_secs = 2;
    config.user_agent.client_name = "TestBot".to_string();
    config
}

fn html(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_string(body)
        .insert_header("content-type", "text/html; charset=utf-8")
}

#[tokio::test]
async fn test_docket_lookup() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .and(query_param("name", "12-375"))
        .respond_with(html(DETAIL_PAGE))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = create_test_config(&mock_server);
    let fetcher = HttpFetcher::new(&config).unwrap();
    let mut query = ProceedingsQuery::from_config(&config).unwrap();
    query.set("docket_number", "12-375").unwrap();

    let outcome = query.execute(&fetcher, true).await.unwrap();
    assert!(outcome.warnings.is_empty());

    let proceeding = match outcome.output {
        QueryOutput::Proceeding(proceeding) => proceeding,
        other => panic!("expected a proceeding, got {:?}", other),
    };
    assert_eq!(proceeding.docket_number(), Some("12-375"));
    assert_eq!(proceeding.bureau(), Some("Wireline Competition Bureau"));
    assert_eq!(
        proceeding.subject(),
        Some("Rates for Interstate Inmate Calling Services")
    );
    assert_eq!(proceeding.get("date_created"), Some("12/24/2012"));
    assert_eq!(proceeding.get("total_filings"), Some("2344"));
    assert_eq!(proceeding.get("filings_in_last_30_days"), Some("17"));
}

#[tokio::test]
async fn test_docket_lookup_ignores_other_constraints() {
    let mock_server = MockServer::start().await;

    // Only the docket number may reach the server
    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .and(query_param("bureauCode", "WC"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .and(query_param("name", "12-375"))
        .respond_with(html(DETAIL_PAGE))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = create_test_config(&mock_server);
    let fetcher = HttpFetcher::new(&config).unwrap();
    let mut query = ProceedingsQuery::from_config(&config).unwrap();
    query.set("docket_number", "12-375").unwrap();
    query.set("bureau_code", "WC").unwrap();

    let outcome = query.execute(&fetcher, true).await.unwrap();
    assert_eq!(
        outcome.warnings,
        vec![QueryWarning::IgnoredConstraints(vec![
            ConstraintKey::BureauCode
        ])]
    );
    assert!(matches!(outcome.output, QueryOutput::Proceeding(_)));
}

#[tokio::test]
async fn test_results_listing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .and(query_param("bureauCode", "WC"))
        .and(query_param("pageNumber", "1"))
        .and(query_param("pageSize", "25"))
        .respond_with(html(RESULTS_PAGE))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = create_test_config(&mock_server);
    let fetcher = HttpFetcher::new(&config).unwrap();
    let mut query = ProceedingsQuery::from_config(&config).unwrap();
    query.set("bureau_code", "WC").unwrap();
    query.set("page_number", "1").unwrap();
    query.set("per_page", "25").unwrap();

    let outcome = query.execute(&fetcher, true).await.unwrap();
    let set = match outcome.output {
        QueryOutput::ResultSet(set) => set,
        other => panic!("expected a result set, got {:?}", other),
    };

    assert_eq!(set.fcc_url, query.url().as_str());
    assert_eq!(set.constraints, *query.constraints());
    assert_eq!(set.current_page, 1);
    assert_eq!(set.total_pages, 6);
    assert_eq!(set.first_result, 1);
    assert_eq!(set.last_result, 3);
    assert_eq!(set.total_results, 137);
    assert!(set.has_next_page());

    let dockets: Vec<_> = set
        .results
        .iter()
        .map(|p| p.docket_number().unwrap_or_default())
        .collect();
    assert_eq!(dockets, vec!["12-375", "10-90", "11-42"]);
    assert_eq!(set.results[1].subject(), Some("Connect America Fund"));
    assert_eq!(
        set.results[2].bureau(),
        Some("Wireline Competition Bureau")
    );
}

#[tokio::test]
async fn test_raw_listing_matches_typecast() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .respond_with(html(RESULTS_PAGE))
        .expect(2)
        .mount(&mock_server)
        .await;

    let config = create_test_config(&mock_server);
    let fetcher = HttpFetcher::new(&config).unwrap();
    let mut query = ProceedingsQuery::from_config(&config).unwrap();
    query.set("page_number", "1").unwrap();

    let raw = query.execute(&fetcher, false).await.unwrap().output;
    let typed = query.execute(&fetcher, true).await.unwrap().output;

    assert!(matches!(raw, QueryOutput::RawResults(_)));
    assert_eq!(typed.into_raw(), raw);
}

#[tokio::test]
async fn test_http_error_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let config = create_test_config(&mock_server);
    let fetcher = HttpFetcher::new(&config).unwrap();
    let mut query = ProceedingsQuery::from_config(&config).unwrap();
    query.set("docket_number", "12-375").unwrap();

    let result = query.execute(&fetcher, true).await;
    assert!(matches!(
        result,
        Err(EcfsError::HttpStatus { status: 503, .. })
    ));
}

#[tokio::test]
async fn test_unexpected_page_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .respond_with(html(
            "<html><body><h1>Scheduled maintenance</h1></body></html>",
        ))
        .mount(&mock_server)
        .await;

    let config = create_test_config(&mock_server);
    let fetcher = HttpFetcher::new(&config).unwrap();

    let mut detail = ProceedingsQuery::from_config(&config).unwrap();
    detail.set("docket_number", "12-375").unwrap();
    assert!(matches!(
        detail.execute(&fetcher, true).await,
        Err(EcfsError::Parse(ParseError::MissingElement(_)))
    ));

    let mut listing = ProceedingsQuery::from_config(&config).unwrap();
    listing.set("page_number", "1").unwrap();
    assert!(matches!(
        listing.execute(&fetcher, true).await,
        Err(EcfsError::Parse(ParseError::MissingElement(_)))
    ));
}

#[tokio::test]
async fn test_connection_refused() {
    // Bind and drop a listener so nothing accepts on the port
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };

    let mut config = Config::default();
    config.client.base_url = format!("http://{}{}", addr, SEARCH_PATH);
    let fetcher = HttpFetcher::new(&config).unwrap();
    let mut query = ProceedingsQuery::from_config(&config).unwrap();
    query.set("docket_number", "12-375").unwrap();

    assert!(matches!(
        query.execute(&fetcher, true).await,
        Err(EcfsError::Http { .. })
    ));
}
