//! # promo-lookup
//!
//! Loads promotions from a CSV file at startup and serves them by id over HTTP.
//!
//! ```rust,ignore
//! use promo_lookup::{server, AppState, Config};
//!
//! let config = Config::from_file("promo-lookup.toml")?;
//! let state = AppState::from_config(&config)?;
//! server::run(&config, state).await?;
//! ```

pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliArgs;

pub use crate::config::Config;
pub use crate::core::{
    loader::{LoadReport, RowPolicy},
    lookup::{IdFormat, LookupService},
    store::PromotionStore,
};
pub use crate::domain::{model::Promotion, ports::PromotionRepository};
pub use crate::server::AppState;
pub use crate::utils::error::{PromoError, Result};
