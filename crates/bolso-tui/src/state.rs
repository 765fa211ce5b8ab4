//! Application state.
//!
//! One screen is visible at a time; the navigation gate in `update` swaps
//! screens when the session state and the current group disagree. Each screen
//! owns its transient form state and a single "request in flight" flag — the
//! controller itself never exposes a pending state.

use bolso_core::messages;
use bolso_core::types::{DashboardSnapshot, TransactionDraft, TransactionType};

use crate::gate::ScreenGroup;

pub struct AppState {
    pub should_quit: bool,
    /// Whether the persisted session flag has been read.
    pub ready: bool,
    /// Last known session state; the gate reacts to changes.
    pub signed_in: bool,
    pub screen: Screen,
    /// Period the dashboard opens on (config value; current month when None).
    pub default_period: Option<String>,
}

impl AppState {
    pub fn new(ready: bool, signed_in: bool, default_period: Option<String>) -> Self {
        Self {
            should_quit: false,
            ready,
            signed_in,
            screen: Screen::Login(LoginScreen::default()),
            default_period,
        }
    }
}

pub enum Screen {
    Login(LoginScreen),
    Register(RegisterScreen),
    Dashboard(DashboardScreen),
}

impl Screen {
    pub fn group(&self) -> ScreenGroup {
        match self {
            Screen::Login(_) | Screen::Register(_) => ScreenGroup::Auth,
            Screen::Dashboard(_) => ScreenGroup::App,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Email,
    Password,
}

impl LoginField {
    pub fn next(self) -> Self {
        match self {
            LoginField::Email => LoginField::Password,
            LoginField::Password => LoginField::Email,
        }
    }
}

#[derive(Default)]
pub struct LoginScreen {
    pub email: String,
    pub password: String,
    pub focus: LoginField,
    pub in_flight: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegisterField {
    #[default]
    Name,
    Email,
    Password,
}

impl RegisterField {
    pub fn next(self) -> Self {
        match self {
            RegisterField::Name => RegisterField::Email,
            RegisterField::Email => RegisterField::Password,
            RegisterField::Password => RegisterField::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            RegisterField::Name => RegisterField::Password,
            RegisterField::Email => RegisterField::Name,
            RegisterField::Password => RegisterField::Email,
        }
    }
}

#[derive(Default)]
pub struct RegisterScreen {
    pub name: String,
    pub email: String,
    pub password: String,
    pub focus: RegisterField,
    pub in_flight: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardField {
    #[default]
    Period,
    Amount,
    Description,
    Date,
    Kind,
}

impl DashboardField {
    pub fn next(self) -> Self {
        match self {
            DashboardField::Period => DashboardField::Amount,
            DashboardField::Amount => DashboardField::Description,
            DashboardField::Description => DashboardField::Date,
            DashboardField::Date => DashboardField::Kind,
            DashboardField::Kind => DashboardField::Period,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            DashboardField::Period => DashboardField::Kind,
            DashboardField::Amount => DashboardField::Period,
            DashboardField::Description => DashboardField::Amount,
            DashboardField::Date => DashboardField::Description,
            DashboardField::Kind => DashboardField::Date,
        }
    }
}

/// New-transaction form. Submitted and discarded; the server owns identity.
pub struct TransactionForm {
    pub kind: TransactionType,
    pub amount: String,
    pub description: String,
    pub date: String,
}

impl TransactionForm {
    pub fn new_today() -> Self {
        Self {
            kind: TransactionType::Expense,
            amount: String::new(),
            description: String::new(),
            date: chrono::Local::now().date_naive().to_string(),
        }
    }

    pub fn draft(&self) -> TransactionDraft {
        TransactionDraft {
            kind: self.kind,
            amount: self.amount.clone(),
            description: self.description.clone(),
            date: self.date.clone(),
        }
    }
}

pub struct DashboardScreen {
    /// Period filter input (YYYY-MM); empty means "current month".
    pub period_input: String,
    pub status: String,
    pub data: Option<DashboardSnapshot>,
    pub loading: bool,
    pub saving: bool,
    pub form: TransactionForm,
    pub focus: DashboardField,
}

impl DashboardScreen {
    pub fn new(default_period: Option<String>) -> Self {
        Self {
            period_input: default_period.unwrap_or_default(),
            status: messages::DASHBOARD_LOADING.to_string(),
            data: None,
            loading: true,
            saving: false,
            form: TransactionForm::new_today(),
            focus: DashboardField::default(),
        }
    }

    /// Period to request, or None for the server's current month.
    pub fn period(&self) -> Option<String> {
        let trimmed = self.period_input.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }
}
