//! Category CLI commands

use clap::Subcommand;

use crate::config::PreferencesStore;
use crate::display;
use crate::error::BoardResult;
use crate::gateway::Gateway;
use crate::models::Timeframe;
use crate::views::CategoryStatsView;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List spending by category
    List {
        /// Timeframe: day, week, month, year, all
        #[arg(short, long, default_value = "month")]
        timeframe: Timeframe,
    },

    /// Show one category's breakdown and monthly history
    Show {
        /// Category name
        name: String,
    },
}

/// Handle a category command
pub fn handle_category_command(
    gateway: &Gateway,
    store: &PreferencesStore,
    cmd: CategoryCommands,
) -> BoardResult<()> {
    let mut view = CategoryStatsView::new();

    match cmd {
        CategoryCommands::List { timeframe } => {
            view.set_timeframe(timeframe, gateway);
            if let Some(err) = &view.soft_error {
                eprintln!("warning: {}", err);
            }
            println!("{}", display::format_category_table(&view.summaries, store));
        }

        CategoryCommands::Show { name } => {
            view.select(gateway, &name);
            if let Some(err) = &view.soft_error {
                eprintln!("warning: {}", err);
            }
            if let Some(detail) = &view.selected {
                println!("{}", display::format_category_detail(detail, store));
            }
        }
    }

    Ok(())
}
