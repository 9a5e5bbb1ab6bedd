use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;
use tracing_subscriber::EnvFilter;

use ledgerboard::cli::{
    handle_category_command, handle_dashboard_command, handle_report_command,
    handle_settings_command, handle_transaction_command, CategoryCommands, ReportCommands,
    SettingsCommands, TransactionCommands,
};
use ledgerboard::config::{paths::BoardPaths, PreferencesStore};
use ledgerboard::gateway::{transport::ReqwestTransport, Gateway, Session};
use ledgerboard::models::Timeframe;

#[derive(Parser)]
#[command(
    name = "ledgerboard",
    version,
    about = "Personal finance dashboard client",
    long_about = "ledgerboard is a terminal client for a personal finance dashboard \
                  backend. It shows spending summaries, category breakdowns, and \
                  budget alerts, and exports reports in several formats."
)]
struct Cli {
    /// Backend API base URL
    #[arg(
        long,
        env = "LEDGERBOARD_API_URL",
        default_value = "http://localhost:4000/api",
        global = true
    )]
    api_url: String,

    /// User id for scoped requests
    #[arg(long, env = "LEDGERBOARD_USER", global = true)]
    user: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the dashboard
    #[command(alias = "dash")]
    Dashboard {
        /// Timeframe: day, week, month, year, all
        #[arg(short, long, default_value = "month")]
        timeframe: Timeframe,
    },

    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Category statistics commands
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Report and export commands
    #[command(subcommand)]
    Report(ReportCommands),

    /// Preferences and budget configuration
    #[command(subcommand)]
    Settings(SettingsCommands),

    /// Show current configuration and paths
    Config,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let paths = BoardPaths::new()?;
    let store = PreferencesStore::load(paths.clone());

    let session = match &cli.user {
        Some(user) => Session::authenticated(user.clone()),
        None => Session::anonymous(),
    };
    let transport = ReqwestTransport::new(&cli.api_url)?;
    let gateway = Gateway::new(Box::new(transport), session);

    match cli.command {
        Some(Commands::Dashboard { timeframe }) => {
            handle_dashboard_command(&gateway, &store, timeframe)?;
        }
        Some(Commands::Transaction(cmd)) => {
            handle_transaction_command(&gateway, &store, cmd)?;
        }
        Some(Commands::Category(cmd)) => {
            handle_category_command(&gateway, &store, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&gateway, &store, &paths, cmd)?;
        }
        Some(Commands::Settings(cmd)) => {
            handle_settings_command(&store, cmd)?;
        }
        Some(Commands::Config) => {
            println!("ledgerboard configuration");
            println!("=========================");
            println!("Data directory:    {}", paths.base_dir().display());
            println!("Settings file:     {}", paths.settings_file().display());
            println!("Budget file:       {}", paths.budget_file().display());
            println!("Exports directory: {}", paths.exports_dir().display());
            println!("Backend API:       {}", cli.api_url);
            match cli.user {
                Some(user) => println!("User:              {}", user),
                None => println!("User:              (not signed in)"),
            }
        }
        None => {
            println!("ledgerboard - personal finance dashboard client");
            println!();
            println!("Run 'ledgerboard --help' for usage information.");
            println!("Run 'ledgerboard dashboard' to see your spending overview.");
        }
    }

    Ok(())
}
