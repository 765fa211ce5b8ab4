//! Integration tests for the API client against a mock backend.

use std::time::Duration;

use bolso_core::api::{ApiClient, ApiConfig};
use wiremock::matchers::{body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> ApiClient {
    client_with_timeout(server, Duration::from_secs(8))
}

fn client_with_timeout(server: &MockServer, timeout: Duration) -> ApiClient {
    ApiClient::new(ApiConfig::new(server.uri(), timeout)).unwrap()
}

const DASHBOARD_BODY: &str = r#"{
    "period": "2024-05",
    "summary": {"income": "4500.00", "expense": "4350.00", "balance": "150.00"},
    "top_category": "Transporte",
    "insight": "Você está em zona de cautela.",
    "transactions": [
        {"date": "2024-05-02", "description": "Salário", "category": "Receita", "type": "income", "amount": "4500.00"},
        {"date": "2024-05-03", "description": "Uber centro", "category": "Transporte", "type": "expense", "amount": "120.50"}
    ]
}"#;

#[tokio::test]
async fn error_statuses_yield_no_data() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = client(&server);
    assert!(client.health().await.unwrap().is_none());
    // No mock for /api/session: the 404 is also "no data", not an error.
    assert!(client.session().await.unwrap().is_none());
}

#[tokio::test]
async fn malformed_json_yields_no_data() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/session"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let client = client(&server);
    assert!(client.session().await.unwrap().is_none());
}

#[tokio::test]
async fn dashboard_decodes_the_snapshot() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/dashboard"))
        .and(query_param("period", "2024-05"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "application/json")
                .set_body_string(DASHBOARD_BODY),
        )
        .mount(&server)
        .await;

    let snapshot = client(&server)
        .dashboard(Some("2024-05"))
        .await
        .unwrap()
        .expect("snapshot");

    assert_eq!(snapshot.period, "2024-05");
    assert_eq!(snapshot.summary.balance, "150.00");
    assert_eq!(snapshot.top_category.as_deref(), Some("Transporte"));
    assert_eq!(snapshot.transactions.len(), 2);
}

#[tokio::test]
async fn login_posts_form_encoded_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .and(header(
            "content-type",
            "application/x-www-form-urlencoded",
        ))
        .and(body_string_contains("email=ana%40example.com"))
        .and(body_string_contains("password=secret"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    assert!(client(&server).login("ana@example.com", "secret").await.unwrap());
}

#[tokio::test]
async fn create_transaction_posts_the_draft_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/transactions"))
        .and(body_string_contains("transaction_type=expense"))
        .and(body_string_contains("amount=120.50"))
        .and(body_string_contains("txn_date=2024-05-03"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let draft = bolso_core::types::TransactionDraft {
        kind: bolso_core::types::TransactionType::Expense,
        amount: "120.50".into(),
        description: "Uber centro".into(),
        date: "2024-05-03".into(),
    };
    assert!(client(&server).create_transaction(&draft).await.unwrap());
}

#[tokio::test]
async fn rejected_login_reports_failure_not_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    assert!(!client(&server).login("ana@example.com", "wrong").await.unwrap());
}

#[tokio::test]
async fn slow_responses_abort_as_connectivity_failures() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
        .mount(&server)
        .await;

    let client = client_with_timeout(&server, Duration::from_millis(100));
    assert!(client.health().await.is_err());
}
