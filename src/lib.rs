//! ledgerboard - personal finance dashboard client
//!
//! This library is the portable core of a personal finance dashboard. All
//! data lives in a remote backend; the client fetches it through a
//! user-scoped gateway, normalizes whatever shape comes back, and renders it
//! through preference-aware views. Reads fail soft (fallback values plus an
//! error banner), writes fail loud.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Persisted preferences, paths, and the reactive store
//! - `error`: Custom error types
//! - `models`: Core data models (money, transactions, summaries, reports)
//! - `format`: Currency and date formatting
//! - `gateway`: Remote data gateway and payload normalization
//! - `views`: View controllers owning UI state
//! - `export`: Multi-format report export
//! - `alerts`: Budget alert evaluation
//! - `routing`: Route guards
//! - `import`: CSV transaction import
//! - `display`: Terminal table/panel rendering
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use ledgerboard::config::{paths::BoardPaths, PreferencesStore};
//! use ledgerboard::gateway::{transport::ReqwestTransport, Gateway, Session};
//!
//! let paths = BoardPaths::new()?;
//! let store = PreferencesStore::load(paths);
//! let transport = ReqwestTransport::new("http://localhost:4000/api")?;
//! let gateway = Gateway::new(Box::new(transport), Session::authenticated("alice"));
//! ```

pub mod alerts;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod format;
pub mod gateway;
pub mod import;
pub mod models;
pub mod routing;
pub mod views;

pub use error::{BoardError, BoardResult};
