//! Full-screen TUI for bolso.

pub mod effects;
pub mod events;
pub mod gate;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stderr};

use anyhow::Result;
use bolso_core::auth::AuthController;
pub use runtime::TuiRuntime;

/// Runs the interactive client until the user quits.
pub async fn run_app(controller: AuthController, default_period: Option<String>) -> Result<()> {
    if !stderr().is_terminal() {
        anyhow::bail!(
            "The interactive mode requires a terminal.\n\
             Use subcommands like `bolso dashboard` for non-interactive use."
        );
    }

    let mut runtime = TuiRuntime::new(controller, default_period)?;
    runtime.run()
}
