//! Effects returned by the reducer for the runtime to execute.
//!
//! The reducer stays pure: it mutates state and returns effects, never
//! performs I/O or spawns tasks directly.

use bolso_core::types::TransactionDraft;

#[derive(Debug)]
pub enum UiEffect {
    SignIn { email: String, password: String },
    SignUp {
        name: String,
        email: String,
        password: String,
    },
    SignOut,
    LoadDashboard { period: Option<String> },
    SaveTransaction { draft: TransactionDraft },
    /// Run the best-effort session re-validation probe.
    Revalidate,
}
