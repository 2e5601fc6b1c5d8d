//! Core data model and view operations for the Piste dashboard
//!
//! This crate owns everything that is independent of a particular
//! surface (HTTP or desktop UI):
//!
//! - **Dataset**: the read-only resort table loaded once at startup,
//!   with per-country rank columns derived at load time.
//! - **Views**: pure functions from input state to chart specs. A
//!   `None` return means "no update" and callers are expected to leave
//!   their current output untouched.
//! - **Config**: environment-profile configuration (`dev`/`test`/`prod`)
//!   with profile-prefixed variable overrides.
//!
//! # Quick start
//!
//! ```ignore
//! use piste_core::{config::AppConfig, dataset::ResortTable, views};
//!
//! let config = AppConfig::from_env()?;
//! let table = ResortTable::load_path(&config.data_path)?;
//!
//! let countries = views::countries_in(&table, "Europe");
//! ```

pub mod config;
pub mod dataset;
pub mod views;

pub use config::{AppConfig, ConfigError, Profile};
pub use dataset::{DatasetError, Resort, ResortTable};
pub use views::{BarFigure, MapFigure, MapFilter, Metric, ReportCard};
