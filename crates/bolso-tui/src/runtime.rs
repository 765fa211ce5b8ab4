//! Event loop wiring terminal input, the reducer and async effects together.
//!
//! The loop is synchronous: it drains the inbox, redraws when something
//! changed and polls the terminal with a short timeout. Effects run on
//! spawned tokio tasks and report back through the inbox channel.

use std::io::Stdout;
use std::time::Duration;

use anyhow::Result;
use bolso_core::auth::AuthController;
use bolso_core::messages;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tracing::warn;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::{render, terminal, update};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

pub struct TuiRuntime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    pub state: AppState,
    controller: AuthController,
    inbox_tx: UnboundedSender<UiEvent>,
    inbox_rx: UnboundedReceiver<UiEvent>,
}

impl TuiRuntime {
    pub fn new(controller: AuthController, default_period: Option<String>) -> Result<Self> {
        terminal::install_panic_hook();
        let terminal = terminal::setup_terminal()?;

        // Read the persisted flag before the first frame so the gate never
        // flashes the wrong screen.
        controller.init();
        let state = AppState::new(controller.ready(), controller.signed_in(), default_period);

        let (inbox_tx, inbox_rx) = unbounded_channel();
        Ok(Self {
            terminal,
            state,
            controller,
            inbox_tx,
            inbox_rx,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        let effects = update::apply_gate(&mut self.state);
        self.execute(effects);

        let mut dirty = true;
        while !self.state.should_quit {
            while let Ok(ui_event) = self.inbox_rx.try_recv() {
                let effects = update::update(&mut self.state, ui_event);
                self.execute(effects);
                dirty = true;
            }

            if dirty {
                self.terminal.draw(|frame| render::render(&self.state, frame))?;
                dirty = false;
            }

            if event::poll(POLL_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        let effects = update::update(&mut self.state, UiEvent::Key(key));
                        self.execute(effects);
                        dirty = true;
                    }
                    Event::Resize(_, _) => dirty = true,
                    _ => {}
                }
            }
        }

        terminal::restore_terminal()
    }

    fn execute(&self, effects: Vec<UiEffect>) {
        for effect in effects {
            let controller = self.controller.clone();
            let tx = self.inbox_tx.clone();
            match effect {
                UiEffect::SignIn { email, password } => {
                    tokio::spawn(async move {
                        let error = controller.sign_in(&email, &password).await;
                        let _ = tx.send(UiEvent::SignInDone { error });
                    });
                }
                UiEffect::SignUp {
                    name,
                    email,
                    password,
                } => {
                    tokio::spawn(async move {
                        let error = controller.sign_up(&name, &email, &password).await;
                        let _ = tx.send(UiEvent::SignUpDone { error });
                    });
                }
                UiEffect::SignOut => {
                    tokio::spawn(async move {
                        controller.sign_out().await;
                        let _ = tx.send(UiEvent::SignOutDone);
                    });
                }
                UiEffect::LoadDashboard { period } => {
                    tokio::spawn(async move {
                        let result = match controller.client().dashboard(period.as_deref()).await {
                            Ok(Some(snapshot)) => Ok(snapshot),
                            Ok(None) => Err(messages::DASHBOARD_FAILED.to_string()),
                            Err(err) => {
                                warn!(error = %format!("{err:#}"), "dashboard fetch failed");
                                Err(messages::CONNECTION_ERROR.to_string())
                            }
                        };
                        let _ = tx.send(UiEvent::DashboardLoaded { result });
                    });
                }
                UiEffect::SaveTransaction { draft } => {
                    tokio::spawn(async move {
                        let result = match controller.client().create_transaction(&draft).await {
                            Ok(true) => Ok(()),
                            Ok(false) => Err(messages::TXN_SAVE_FAILED.to_string()),
                            Err(err) => {
                                warn!(error = %format!("{err:#}"), "transaction submit failed");
                                Err(messages::CONNECTION_ERROR.to_string())
                            }
                        };
                        let _ = tx.send(UiEvent::TransactionSaved { result });
                    });
                }
                UiEffect::Revalidate => {
                    tokio::spawn(async move {
                        let signed_in = controller.revalidate().await;
                        let _ = tx.send(UiEvent::ProbeFinished { signed_in });
                    });
                }
            }
        }
    }
}
