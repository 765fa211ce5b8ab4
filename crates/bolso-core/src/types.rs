//! Domain types exchanged with the SmartBudget backend.
//!
//! Amounts travel as decimal strings end to end; the server owns transaction
//! identity, categories and ordering, so nothing here is persisted
//! client-side.

use serde::{Deserialize, Serialize};

use crate::messages;

/// Transaction direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    /// Wire value used in form bodies.
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }

    /// Prefix shown next to amounts in listings.
    pub fn sign(self) -> char {
        match self {
            TransactionType::Income => '+',
            TransactionType::Expense => '-',
        }
    }

    /// Label shown in the transaction form.
    pub fn label(self) -> &'static str {
        match self {
            TransactionType::Income => "Receita",
            TransactionType::Expense => "Despesa",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            TransactionType::Income => TransactionType::Expense,
            TransactionType::Expense => TransactionType::Income,
        }
    }
}

/// One transaction as rendered by the dashboard endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub date: String,
    pub description: String,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub amount: String,
}

/// Monthly totals, decimal strings as sent by the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Summary {
    pub income: String,
    pub expense: String,
    pub balance: String,
}

/// Read-only projection fetched per request; never cached or merged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub period: String,
    pub summary: Summary,
    #[serde(default)]
    pub top_category: Option<String>,
    #[serde(default)]
    pub insight: Option<String>,
    #[serde(default)]
    pub transactions: Vec<TransactionRecord>,
}

/// Response of GET /api/health.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

/// Response of GET /api/session, the session-introspection contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionInfo {
    pub authenticated: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<SessionUser>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: i64,
    pub name: String,
}

/// Transient form state for a new transaction. Submitted and discarded.
#[derive(Debug, Clone)]
pub struct TransactionDraft {
    pub kind: TransactionType,
    pub amount: String,
    pub description: String,
    pub date: String,
}

impl TransactionDraft {
    /// Client-side validation, applied before any network call.
    ///
    /// Mirrors the server's own form validation so obviously broken drafts
    /// never leave the client.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.amount.trim().is_empty()
            || self.description.trim().is_empty()
            || self.date.trim().is_empty()
        {
            return Err(messages::TXN_MISSING_FIELDS);
        }

        let amount: f64 = self
            .amount
            .trim()
            .parse()
            .map_err(|_| messages::TXN_INVALID_VALUES)?;
        if !amount.is_finite() || amount <= 0.0 {
            return Err(messages::TXN_INVALID_VALUES);
        }

        chrono::NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d")
            .map_err(|_| messages::TXN_INVALID_VALUES)?;

        Ok(())
    }
}
