//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(state, event)`
//! and executes the returned effects. After any session transition the
//! navigation gate runs and swaps the visible screen when the stacks
//! disagree.

use bolso_core::messages;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::gate::{self, GateDecision};
use crate::state::{
    AppState, DashboardField, DashboardScreen, LoginScreen, RegisterScreen, Screen,
};

/// The main reducer function.
pub fn update(state: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Key(key) => handle_key(state, key),

        UiEvent::SignInDone { error } => {
            if let Screen::Login(screen) = &mut state.screen {
                screen.in_flight = false;
                screen.error = error.clone();
            }
            if error.is_none() {
                state.signed_in = true;
                return apply_gate(state);
            }
            vec![]
        }

        UiEvent::SignUpDone { error } => {
            if let Screen::Register(screen) = &mut state.screen {
                screen.in_flight = false;
                screen.error = error.clone();
            }
            if error.is_none() {
                state.signed_in = true;
                return apply_gate(state);
            }
            vec![]
        }

        UiEvent::SignOutDone => {
            state.signed_in = false;
            apply_gate(state)
        }

        UiEvent::DashboardLoaded { result } => {
            if let Screen::Dashboard(screen) = &mut state.screen {
                screen.loading = false;
                match result {
                    Ok(snapshot) => {
                        screen.status = messages::DASHBOARD_UPDATED.to_string();
                        screen.data = Some(snapshot);
                    }
                    Err(message) => screen.status = message,
                }
            }
            vec![]
        }

        UiEvent::TransactionSaved { result } => {
            if let Screen::Dashboard(screen) = &mut state.screen {
                screen.saving = false;
                match result {
                    Ok(()) => {
                        screen.status = messages::TXN_SAVED.to_string();
                        screen.form.amount.clear();
                        screen.form.description.clear();
                        let period = screen.period();
                        return vec![UiEffect::LoadDashboard { period }];
                    }
                    Err(message) => screen.status = message,
                }
            }
            vec![]
        }

        UiEvent::ProbeFinished { signed_in } => {
            state.signed_in = signed_in;
            apply_gate(state)
        }
    }
}

/// Runs the navigation gate and swaps screens when it redirects.
///
/// Entering the dashboard kicks off the initial fetch and the best-effort
/// re-validation probe, like the original screen mount did.
pub fn apply_gate(state: &mut AppState) -> Vec<UiEffect> {
    match gate::decide(state.ready, state.signed_in, state.screen.group()) {
        GateDecision::Hold | GateDecision::Stay => vec![],
        GateDecision::ToLogin => {
            state.screen = Screen::Login(LoginScreen::default());
            vec![]
        }
        GateDecision::ToDashboard => {
            let screen = DashboardScreen::new(state.default_period.clone());
            let period = screen.period();
            state.screen = Screen::Dashboard(screen);
            vec![
                UiEffect::LoadDashboard { period },
                UiEffect::Revalidate,
            ]
        }
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if ctrl && matches!(key.code, KeyCode::Char('c' | 'q')) {
        state.should_quit = true;
        return vec![];
    }

    // Toggle between the two unauthenticated screens.
    if ctrl && key.code == KeyCode::Char('t') {
        match state.screen {
            Screen::Login(_) => state.screen = Screen::Register(RegisterScreen::default()),
            Screen::Register(_) => state.screen = Screen::Login(LoginScreen::default()),
            Screen::Dashboard(_) => {}
        }
        return vec![];
    }

    match &mut state.screen {
        Screen::Login(screen) => handle_login_key(screen, key, ctrl, &mut state.should_quit),
        Screen::Register(screen) => handle_register_key(screen, key, ctrl, &mut state.should_quit),
        Screen::Dashboard(screen) => handle_dashboard_key(screen, key, ctrl, &mut state.should_quit),
    }
}

fn handle_login_key(
    screen: &mut LoginScreen,
    key: KeyEvent,
    ctrl: bool,
    should_quit: &mut bool,
) -> Vec<UiEffect> {
    match key.code {
        KeyCode::Esc => {
            *should_quit = true;
            vec![]
        }
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Down | KeyCode::Up => {
            screen.focus = screen.focus.next();
            vec![]
        }
        KeyCode::Enter => {
            if screen.in_flight {
                return vec![];
            }
            screen.in_flight = true;
            screen.error = None;
            vec![UiEffect::SignIn {
                email: screen.email.trim().to_string(),
                password: screen.password.clone(),
            }]
        }
        KeyCode::Backspace => {
            field_login(screen).pop();
            vec![]
        }
        KeyCode::Char(c) if !ctrl => {
            field_login(screen).push(c);
            vec![]
        }
        _ => vec![],
    }
}

fn field_login(screen: &mut LoginScreen) -> &mut String {
    match screen.focus {
        crate::state::LoginField::Email => &mut screen.email,
        crate::state::LoginField::Password => &mut screen.password,
    }
}

fn handle_register_key(
    screen: &mut RegisterScreen,
    key: KeyEvent,
    ctrl: bool,
    should_quit: &mut bool,
) -> Vec<UiEffect> {
    match key.code {
        KeyCode::Esc => {
            *should_quit = true;
            vec![]
        }
        KeyCode::Tab | KeyCode::Down => {
            screen.focus = screen.focus.next();
            vec![]
        }
        KeyCode::BackTab | KeyCode::Up => {
            screen.focus = screen.focus.prev();
            vec![]
        }
        KeyCode::Enter => {
            if screen.in_flight {
                return vec![];
            }
            screen.in_flight = true;
            screen.error = None;
            vec![UiEffect::SignUp {
                name: screen.name.trim().to_string(),
                email: screen.email.trim().to_string(),
                password: screen.password.clone(),
            }]
        }
        KeyCode::Backspace => {
            field_register(screen).pop();
            vec![]
        }
        KeyCode::Char(c) if !ctrl => {
            field_register(screen).push(c);
            vec![]
        }
        _ => vec![],
    }
}

fn field_register(screen: &mut RegisterScreen) -> &mut String {
    match screen.focus {
        crate::state::RegisterField::Name => &mut screen.name,
        crate::state::RegisterField::Email => &mut screen.email,
        crate::state::RegisterField::Password => &mut screen.password,
    }
}

fn handle_dashboard_key(
    screen: &mut DashboardScreen,
    key: KeyEvent,
    ctrl: bool,
    should_quit: &mut bool,
) -> Vec<UiEffect> {
    if ctrl {
        return match key.code {
            // Sair
            KeyCode::Char('l') => vec![UiEffect::SignOut],
            KeyCode::Char('r') => reload(screen),
            _ => vec![],
        };
    }

    match key.code {
        KeyCode::Esc => {
            *should_quit = true;
            vec![]
        }
        KeyCode::Tab | KeyCode::Down => {
            screen.focus = screen.focus.next();
            vec![]
        }
        KeyCode::BackTab | KeyCode::Up => {
            screen.focus = screen.focus.prev();
            vec![]
        }
        KeyCode::Left | KeyCode::Right if screen.focus == DashboardField::Kind => {
            screen.form.kind = screen.form.kind.toggled();
            vec![]
        }
        KeyCode::Char(' ') if screen.focus == DashboardField::Kind => {
            screen.form.kind = screen.form.kind.toggled();
            vec![]
        }
        KeyCode::Enter => match screen.focus {
            DashboardField::Period => reload(screen),
            _ => submit_transaction(screen),
        },
        KeyCode::Backspace => {
            if let Some(field) = field_dashboard(screen) {
                field.pop();
            }
            vec![]
        }
        KeyCode::Char(c) => {
            if let Some(field) = field_dashboard(screen) {
                field.push(c);
            }
            vec![]
        }
        _ => vec![],
    }
}

fn field_dashboard(screen: &mut DashboardScreen) -> Option<&mut String> {
    match screen.focus {
        DashboardField::Period => Some(&mut screen.period_input),
        DashboardField::Amount => Some(&mut screen.form.amount),
        DashboardField::Description => Some(&mut screen.form.description),
        DashboardField::Date => Some(&mut screen.form.date),
        DashboardField::Kind => None,
    }
}

fn reload(screen: &mut DashboardScreen) -> Vec<UiEffect> {
    screen.loading = true;
    screen.status = messages::DASHBOARD_LOADING.to_string();
    vec![UiEffect::LoadDashboard {
        period: screen.period(),
    }]
}

/// Validates the draft client-side; nothing hits the network on a bad form.
fn submit_transaction(screen: &mut DashboardScreen) -> Vec<UiEffect> {
    if screen.saving {
        return vec![];
    }

    let draft = screen.form.draft();
    if let Err(message) = draft.validate() {
        screen.status = message.to_string();
        return vec![];
    }

    screen.saving = true;
    screen.status = messages::TXN_SAVING.to_string();
    vec![UiEffect::SaveTransaction { draft }]
}

#[cfg(test)]
mod tests {
    use super::*;
    use bolso_core::types::{DashboardSnapshot, Summary};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> UiEvent {
        UiEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn signed_out_state() -> AppState {
        AppState::new(true, false, None)
    }

    fn dashboard_state() -> AppState {
        let mut state = AppState::new(true, true, None);
        let effects = apply_gate(&mut state);
        assert_eq!(effects.len(), 2);
        state
    }

    fn snapshot() -> DashboardSnapshot {
        DashboardSnapshot {
            period: "2024-05".into(),
            summary: Summary {
                income: "4500.00".into(),
                expense: "4350.00".into(),
                balance: "150.00".into(),
            },
            top_category: Some("Transporte".into()),
            insight: None,
            transactions: vec![],
        }
    }

    #[test]
    fn gate_opens_dashboard_for_a_persisted_session() {
        let mut state = AppState::new(true, true, Some("2024-05".into()));
        let effects = apply_gate(&mut state);

        assert!(matches!(state.screen, Screen::Dashboard(_)));
        assert!(matches!(
            effects.as_slice(),
            [
                UiEffect::LoadDashboard { period: Some(p) },
                UiEffect::Revalidate
            ] if p == "2024-05"
        ));
    }

    #[test]
    fn gate_holds_while_unready() {
        let mut state = AppState::new(false, true, None);
        assert!(apply_gate(&mut state).is_empty());
        assert!(matches!(state.screen, Screen::Login(_)));
    }

    #[test]
    fn typing_fills_the_focused_login_field() {
        let mut state = signed_out_state();
        update(&mut state, key(KeyCode::Char('a')));
        update(&mut state, key(KeyCode::Tab));
        update(&mut state, key(KeyCode::Char('x')));

        let Screen::Login(screen) = &state.screen else {
            panic!("expected login screen");
        };
        assert_eq!(screen.email, "a");
        assert_eq!(screen.password, "x");
    }

    #[test]
    fn enter_submits_login_once() {
        let mut state = signed_out_state();
        let effects = update(&mut state, key(KeyCode::Enter));
        assert!(matches!(effects.as_slice(), [UiEffect::SignIn { .. }]));

        // Request already in flight: repeated submissions do nothing.
        let effects = update(&mut state, key(KeyCode::Enter));
        assert!(effects.is_empty());
    }

    #[test]
    fn successful_sign_in_routes_to_dashboard() {
        let mut state = signed_out_state();
        update(&mut state, key(KeyCode::Enter));

        let effects = update(&mut state, UiEvent::SignInDone { error: None });
        assert!(state.signed_in);
        assert!(matches!(state.screen, Screen::Dashboard(_)));
        assert!(matches!(
            effects.as_slice(),
            [UiEffect::LoadDashboard { .. }, UiEffect::Revalidate]
        ));
    }

    #[test]
    fn failed_sign_in_shows_the_error_and_stays() {
        let mut state = signed_out_state();
        update(&mut state, key(KeyCode::Enter));

        let effects = update(
            &mut state,
            UiEvent::SignInDone {
                error: Some(messages::LOGIN_FAILED.to_string()),
            },
        );
        assert!(effects.is_empty());
        assert!(!state.signed_in);

        let Screen::Login(screen) = &state.screen else {
            panic!("expected login screen");
        };
        assert!(!screen.in_flight);
        assert_eq!(screen.error.as_deref(), Some(messages::LOGIN_FAILED));
    }

    #[test]
    fn sign_out_routes_back_to_login() {
        let mut state = dashboard_state();
        update(&mut state, UiEvent::SignOutDone);
        assert!(matches!(state.screen, Screen::Login(_)));
    }

    #[test]
    fn failed_probe_routes_back_to_login() {
        let mut state = dashboard_state();
        update(&mut state, UiEvent::ProbeFinished { signed_in: false });
        assert!(!state.signed_in);
        assert!(matches!(state.screen, Screen::Login(_)));
    }

    #[test]
    fn confirming_probe_changes_nothing() {
        let mut state = dashboard_state();
        update(&mut state, UiEvent::ProbeFinished { signed_in: true });
        assert!(matches!(state.screen, Screen::Dashboard(_)));
    }

    #[test]
    fn empty_draft_is_rejected_before_any_request() {
        let mut state = dashboard_state();
        // Move focus off the period filter onto the form.
        update(&mut state, key(KeyCode::Tab));
        let effects = update(&mut state, key(KeyCode::Enter));

        assert!(effects.is_empty());
        let Screen::Dashboard(screen) = &state.screen else {
            panic!("expected dashboard");
        };
        assert_eq!(screen.status, messages::TXN_MISSING_FIELDS);
        assert!(!screen.saving);
    }

    #[test]
    fn dashboard_load_updates_data_and_status() {
        let mut state = dashboard_state();
        update(
            &mut state,
            UiEvent::DashboardLoaded {
                result: Ok(snapshot()),
            },
        );

        let Screen::Dashboard(screen) = &state.screen else {
            panic!("expected dashboard");
        };
        assert!(!screen.loading);
        assert_eq!(screen.status, messages::DASHBOARD_UPDATED);
        assert_eq!(
            screen.data.as_ref().unwrap().summary.balance,
            "150.00"
        );
    }

    #[test]
    fn saved_transaction_clears_the_form_and_reloads() {
        let mut state = dashboard_state();
        if let Screen::Dashboard(screen) = &mut state.screen {
            screen.form.amount = "120.50".into();
            screen.form.description = "Uber centro".into();
        }

        let effects = update(&mut state, UiEvent::TransactionSaved { result: Ok(()) });
        assert!(matches!(
            effects.as_slice(),
            [UiEffect::LoadDashboard { .. }]
        ));

        let Screen::Dashboard(screen) = &state.screen else {
            panic!("expected dashboard");
        };
        assert_eq!(screen.status, messages::TXN_SAVED);
        assert!(screen.form.amount.is_empty());
        assert!(screen.form.description.is_empty());
    }

    #[test]
    fn ctrl_t_toggles_between_auth_screens() {
        let mut state = signed_out_state();
        update(
            &mut state,
            UiEvent::Key(KeyEvent::new(KeyCode::Char('t'), KeyModifiers::CONTROL)),
        );
        assert!(matches!(state.screen, Screen::Register(_)));

        update(
            &mut state,
            UiEvent::Key(KeyEvent::new(KeyCode::Char('t'), KeyModifiers::CONTROL)),
        );
        assert!(matches!(state.screen, Screen::Login(_)));
    }

    #[test]
    fn ctrl_l_requests_sign_out_from_the_dashboard() {
        let mut state = dashboard_state();
        let effects = update(
            &mut state,
            UiEvent::Key(KeyEvent::new(KeyCode::Char('l'), KeyModifiers::CONTROL)),
        );
        assert!(matches!(effects.as_slice(), [UiEffect::SignOut]));
    }
}
