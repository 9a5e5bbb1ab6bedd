//! Transaction CLI commands

use clap::Subcommand;

use crate::config::PreferencesStore;
use crate::display;
use crate::error::{BoardError, BoardResult};
use crate::gateway::Gateway;
use crate::import::{self, ColumnMapping};
use crate::models::{Money, Timeframe, Transaction, TransactionKind};
use crate::views::TransactionsView;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Add a new transaction
    Add {
        /// Amount (e.g. "82.50")
        amount: String,
        /// Category name
        category: String,
        /// Record as revenue instead of an expense
        #[arg(short, long)]
        revenue: bool,
        /// Description
        #[arg(short, long, default_value = "")]
        description: String,
    },

    /// List transactions for a timeframe
    List {
        /// Timeframe: day, week, month, year, all
        #[arg(short, long, default_value = "month")]
        timeframe: Timeframe,
    },

    /// Update an existing transaction
    Update {
        /// Transaction id
        id: String,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// New description
        #[arg(short, long)]
        description: Option<String>,
    },

    /// Delete a transaction
    Delete {
        /// Transaction id
        id: String,
    },

    /// Import transactions from a CSV file
    Import {
        /// Path to the CSV file
        file: String,
        /// Primary date format in the file
        #[arg(long, default_value = "%Y-%m-%d")]
        date_format: String,
        /// Treat the first row as data, not a header
        #[arg(long)]
        no_header: bool,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    gateway: &Gateway,
    store: &PreferencesStore,
    cmd: TransactionCommands,
) -> BoardResult<()> {
    match cmd {
        TransactionCommands::Add {
            amount,
            category,
            revenue,
            description,
        } => {
            let amount =
                Money::parse(&amount).map_err(|e| BoardError::Validation(e.to_string()))?;
            let kind = if revenue {
                TransactionKind::Revenue
            } else {
                TransactionKind::Expense
            };
            let txn = Transaction::with_description(amount, kind, category, description);
            let created = gateway.add_transaction(&txn)?;
            println!(
                "Added {} {} ({})",
                created.kind,
                store.format_money(created.amount),
                created.category
            );
        }

        TransactionCommands::List { timeframe } => {
            let mut view = TransactionsView::new();
            view.set_timeframe(timeframe, gateway);
            if let Some(err) = &view.soft_error {
                eprintln!("warning: {}", err);
            }
            println!("{}", display::format_transaction_table(&view.items, store));
        }

        TransactionCommands::Update {
            id,
            amount,
            category,
            description,
        } => {
            // Start from the current record so unset flags keep their values
            let current = gateway
                .transactions(Timeframe::All)
                .data
                .into_iter()
                .find(|t| t.id == id)
                .ok_or_else(|| BoardError::transaction_not_found(&id))?;

            let mut txn = current;
            if let Some(amount) = amount {
                txn.amount =
                    Money::parse(&amount).map_err(|e| BoardError::Validation(e.to_string()))?;
            }
            if let Some(category) = category {
                txn.category = category;
            }
            if let Some(description) = description {
                txn.description = description;
            }

            let updated = gateway.update_transaction(&txn)?;
            println!("Updated {}", updated.id);
        }

        TransactionCommands::Delete { id } => {
            gateway.delete_transaction(&id)?;
            println!("Deleted {}", id);
        }

        TransactionCommands::Import {
            file,
            date_format,
            no_header,
        } => {
            let mapping = ColumnMapping::new()
                .with_date_format(&date_format)
                .with_header(!no_header);
            let mut reader = csv::ReaderBuilder::new()
                .has_headers(mapping.has_header)
                .from_path(&file)?;

            let parsed = import::parse_reader(&mut reader, &mapping);
            let outcome = import::import_rows(gateway, &parsed);

            println!(
                "Imported {} transactions, {} errors",
                outcome.imported, outcome.errors
            );
            let mut failed: Vec<_> = outcome.error_messages.iter().collect();
            failed.sort_by_key(|(row, _)| **row);
            for (row, message) in failed {
                eprintln!("  row {}: {}", row + 1, message);
            }
        }
    }

    Ok(())
}
