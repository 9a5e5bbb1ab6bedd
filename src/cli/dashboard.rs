//! Dashboard CLI command

use crate::alerts::{AlertLevel, LogNotifier};
use crate::config::PreferencesStore;
use crate::display;
use crate::error::BoardResult;
use crate::gateway::Gateway;
use crate::models::Timeframe;
use crate::views::DashboardView;

/// Render the dashboard: summary, budget alert, recent activity, breakdown
pub fn handle_dashboard_command(
    gateway: &Gateway,
    store: &PreferencesStore,
    timeframe: Timeframe,
) -> BoardResult<()> {
    let mut view = DashboardView::new();
    view.set_timeframe(timeframe, gateway, store, &LogNotifier);

    for err in &view.soft_errors {
        eprintln!("warning: {}", err);
    }

    println!("{}", display::format_summary_panel(&view.summary, store));

    if let Some(alert) = &view.alert {
        if alert.level >= AlertLevel::NearBudget {
            println!("!! {}\n", alert.message());
        } else {
            println!("{}\n", alert.message());
        }
    }

    println!("Recent transactions");
    println!("{}", display::format_transaction_table(&view.recent, store));

    println!("Spending by category");
    println!("{}", display::format_category_table(&view.categories, store));

    Ok(())
}
