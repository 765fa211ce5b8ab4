use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

use super::{ApiConfig, DEFAULT_BASE_URL};
use crate::types::{DashboardSnapshot, HealthStatus, SessionInfo, TransactionDraft};

/// SmartBudget API client.
///
/// Carries a cookie store so the backend's session cookie rides along on
/// every request, and applies the configured timeout to each request so a
/// stalled server surfaces as a connectivity failure instead of a hang.
pub struct ApiClient {
    config: ApiConfig,
    http: reqwest::Client,
}

impl ApiClient {
    /// Creates a new API client with the given configuration.
    ///
    /// # Panics
    /// - In test builds (`#[cfg(test)]`), panics if `base_url` is the default
    ///   backend address.
    /// - At runtime, panics if `BOLSO_BLOCK_REAL_API=1` and `base_url` is the
    ///   default backend address.
    ///
    /// This keeps tests from silently depending on a locally running backend.
    /// Point `SMARTBUDGET_API_URL` at a mock server instead.
    pub fn new(config: ApiConfig) -> Result<Self> {
        #[cfg(test)]
        assert!(
            config.base_url != DEFAULT_BASE_URL,
            "Tests must not use the default backend address!\n\
             Set SMARTBUDGET_API_URL to a mock server (e.g., wiremock).\n\
             Found base_url: {}",
            config.base_url
        );

        #[cfg(not(test))]
        if std::env::var("BOLSO_BLOCK_REAL_API").is_ok_and(|v| v == "1")
            && config.base_url == DEFAULT_BASE_URL
        {
            panic!(
                "BOLSO_BLOCK_REAL_API=1 but trying to use the default backend address!\n\
                 Set SMARTBUDGET_API_URL to a mock server.\n\
                 Found base_url: {}",
                config.base_url
            );
        }

        let http = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(config.timeout)
            .build()
            .context("build http client")?;

        Ok(Self { config, http })
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// POST /login with form-encoded credentials. True on a 2xx response.
    pub async fn login(&self, email: &str, password: &str) -> Result<bool> {
        self.post_form("/login", &[("email", email), ("password", password)])
            .await
    }

    /// POST /register with form-encoded fields. True on a 2xx response.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<bool> {
        self.post_form(
            "/register",
            &[("name", name), ("email", email), ("password", password)],
        )
        .await
    }

    /// POST /logout. True on a 2xx response.
    pub async fn logout(&self) -> Result<bool> {
        self.post_form("/logout", &[]).await
    }

    /// GET / as text. Only the legacy re-validation probe looks at this.
    pub async fn fetch_home(&self) -> Result<String> {
        let response = self
            .http
            .get(self.url("/"))
            .send()
            .await
            .context("GET /")?;
        response.text().await.context("read home document")
    }

    /// GET /api/health.
    pub async fn health(&self) -> Result<Option<HealthStatus>> {
        self.get_json("/api/health").await
    }

    /// GET /api/session.
    pub async fn session(&self) -> Result<Option<SessionInfo>> {
        self.get_json("/api/session").await
    }

    /// GET /api/dashboard, optionally filtered to a YYYY-MM period.
    pub async fn dashboard(&self, period: Option<&str>) -> Result<Option<DashboardSnapshot>> {
        let path = match period {
            Some(period) => format!("/api/dashboard?period={period}"),
            None => "/api/dashboard".to_string(),
        };
        self.get_json(&path).await
    }

    /// POST /api/transactions with a form-encoded draft. True on a 2xx response.
    ///
    /// Callers are expected to run `draft.validate()` first; the server
    /// re-validates regardless.
    pub async fn create_transaction(&self, draft: &TransactionDraft) -> Result<bool> {
        self.post_form(
            "/api/transactions",
            &[
                ("transaction_type", draft.kind.as_str()),
                ("amount", draft.amount.trim()),
                ("description", draft.description.trim()),
                ("txn_date", draft.date.trim()),
            ],
        )
        .await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.config.base_url)
    }

    async fn post_form(&self, path: &str, fields: &[(&str, &str)]) -> Result<bool> {
        let response = self
            .http
            .post(self.url(path))
            .form(fields)
            .send()
            .await
            .with_context(|| format!("POST {path}"))?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!("POST {path} returned {status}");
        }
        Ok(status.is_success())
    }

    /// GET a JSON body. Non-2xx responses and bodies that fail to parse both
    /// yield `Ok(None)` ("no data"); only transport failures are errors.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>> {
        let response = self
            .http
            .get(self.url(path))
            .send()
            .await
            .with_context(|| format!("GET {path}"))?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!("GET {path} returned {status}");
            return Ok(None);
        }

        match response.json::<T>().await {
            Ok(body) => Ok(Some(body)),
            Err(err) => {
                tracing::debug!("GET {path} body did not parse: {err}");
                Ok(None)
            }
        }
    }
}
