//! Events consumed by the reducer.
//!
//! Terminal input arrives as `Key`; everything else is sent by the async
//! handlers through the runtime inbox.

use bolso_core::types::DashboardSnapshot;
use crossterm::event::KeyEvent;

#[derive(Debug)]
pub enum UiEvent {
    Key(KeyEvent),
    /// Login finished; `error` is the user-facing message, None on success.
    SignInDone { error: Option<String> },
    /// Registration finished; same contract as `SignInDone`.
    SignUpDone { error: Option<String> },
    SignOutDone,
    /// Dashboard fetch finished; Err carries the status message to show.
    DashboardLoaded {
        result: Result<DashboardSnapshot, String>,
    },
    /// Transaction submission finished.
    TransactionSaved { result: Result<(), String> },
    /// Re-validation probe finished with the server's verdict.
    ProbeFinished { signed_in: bool },
}
