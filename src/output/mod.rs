//! Output module for error studies
//!
//! - **Table**: the sweep over methods and step sizes, its records and
//!   the empirical convergence orders derived from them
//! - **Visualization**: PNG/SVG log-log charts using plotters
//!
//! # Architecture
//!
//! ```text
//! output/
//! ├── mod.rs              ← This file
//! ├── table.rs            ← sweep, ResultTable, ErrorRecord
//! └── visualization/      ← Plots and graphics
//!     ├── mod.rs
//!     ├── config.rs
//!     └── convergence.rs
//! ```
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use conv_rs::output::{plot_error_convergence, sweep};
//!
//! let table = sweep(&model, &config)?;
//! println!("{}", table);
//! plot_error_convergence(&table, "error_convergence.png", None)?;
//! ```

pub mod table;
pub mod visualization;

// Re-export commonly used items for convenience
pub use table::{sweep, ErrorRecord, ObservedOrder, ResultTable};

pub use visualization::{plot_error_convergence, PlotConfig};
