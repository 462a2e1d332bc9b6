//! Visualization of error studies
//!
//! This module renders a [`ResultTable`](crate::output::ResultTable) with the
//! `plotters` library.
//!
//! # Organization
//!
//! - **config**: Shared plot configuration (`PlotConfig`)
//! - **convergence**: Log-log error vs grid spacing chart
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use conv_rs::output::visualization::{plot_error_convergence, PlotConfig};
//!
//! let table = sweep(&model, &config)?;
//!
//! // Default config (800x600, PNG)
//! plot_error_convergence(&table, "error_convergence.png", None)?;
//!
//! // Or with custom config
//! let mut plot_config = PlotConfig::error_convergence("Arctan model");
//! plot_config.width = 1600;
//! plot_error_convergence(&table, "error_convergence.svg", Some(&plot_config))?;
//! ```

pub mod config;
pub mod convergence;

pub use config::{IntoOptionalTitle, PlotConfig, NO_TITLE};

pub use convergence::{plot_error_convergence, series, series_label};
