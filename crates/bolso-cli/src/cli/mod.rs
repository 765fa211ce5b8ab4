//! CLI entry and dispatch.

use anyhow::{Context, Result};
use bolso_core::api::{ApiClient, ApiConfig};
use bolso_core::auth::AuthController;
use bolso_core::config::Config;
use bolso_core::session::SessionStore;
use bolso_core::types::TransactionType;
use clap::Parser;

mod commands;

#[derive(Parser)]
#[command(name = "bolso")]
#[command(version)]
#[command(about = "Terminal client for the SmartBudget backend")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override the backend base URL (also SMARTBUDGET_API_URL)
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Log in and persist the session
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Create an account and sign in
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Log out and clear the persisted session
    Logout,
    /// Show session and backend status
    Status,
    /// Print the dashboard for a period
    Dashboard {
        /// Period to show (default: current month)
        #[arg(long, value_name = "YYYY-MM")]
        period: Option<String>,
    },
    /// Record a new transaction
    Add {
        /// Transaction type
        #[arg(long = "type", value_enum)]
        kind: KindArg,

        /// Amount (e.g. 42.50)
        #[arg(long)]
        amount: String,

        #[arg(long)]
        description: String,

        /// Transaction date (default: today)
        #[arg(long, value_name = "YYYY-MM-DD")]
        date: Option<String>,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum KindArg {
    Income,
    Expense,
}

impl From<KindArg> for TransactionType {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Income => TransactionType::Income,
            KindArg::Expense => TransactionType::Expense,
        }
    }
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let _log_guard = crate::logging::init();

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;
    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    // Config commands work without a backend.
    if let Some(Commands::Config { command }) = &cli.command {
        match command {
            ConfigCommands::Path => commands::config::path(),
            ConfigCommands::Init => commands::config::init()?,
        }
        return Ok(());
    }

    let config = Config::load().context("load config")?;

    // An explicit --base-url beats the env var and the config file.
    let api_config = match cli.base_url.as_deref() {
        Some(url) => ApiConfig::new(url, std::time::Duration::from_secs(config.timeout_secs)),
        None => ApiConfig::resolve(config.base_url.as_deref(), config.timeout_secs)?,
    };
    let client = ApiClient::new(api_config).context("build API client")?;
    let controller = AuthController::new(client, SessionStore::open_default());
    controller.init();

    match cli.command {
        // default to the interactive client
        None => bolso_tui::run_app(controller, config.default_period).await,

        Some(Commands::Login { email, password }) => {
            commands::auth::login(&controller, &email, &password).await
        }
        Some(Commands::Register {
            name,
            email,
            password,
        }) => commands::auth::register(&controller, &name, &email, &password).await,
        Some(Commands::Logout) => commands::auth::logout(&controller).await,

        Some(Commands::Status) => commands::status::run(&controller).await,
        Some(Commands::Dashboard { period }) => {
            commands::dashboard::run(&controller, period.as_deref()).await
        }
        Some(Commands::Add {
            kind,
            amount,
            description,
            date,
        }) => {
            let date =
                date.unwrap_or_else(|| chrono::Local::now().date_naive().to_string());
            commands::transactions::add(&controller, kind.into(), &amount, &description, &date)
                .await
        }

        Some(Commands::Config { .. }) => unreachable!("handled above"),
    }
}
