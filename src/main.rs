//! Run the reference error study and write the log-log chart
//!
//! ```text
//! conv-rs [OUTPUT]        # default: error_convergence.png
//! RUST_LOG=debug conv-rs error_convergence.svg
//! ```

use conv_rs::models::ArctanModel;
use conv_rs::output::{plot_error_convergence, sweep};
use conv_rs::solver::{ExperimentConfiguration, Method};
use tracing_subscriber::EnvFilter;

const DEFAULT_OUTPUT: &str = "error_convergence.png";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let output = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_OUTPUT.to_string());

    let model = ArctanModel::new();
    let config = ExperimentConfiguration::for_model(&model);

    let table = sweep(&model, &config)?;
    log::info!("errors at milestones:\n{}", table);

    // ====== Observed orders ======
    for method in Method::ALL {
        for (position, milestone) in table.milestones().iter().enumerate() {
            let orders: Vec<String> = table
                .observed_orders(method, position)
                .iter()
                .map(|o| format!("{:.2}", o.order))
                .collect();
            log::info!(
                "{} (order {}) at x={}: observed orders [{}]",
                method, method.order(), milestone, orders.join(", ")
            );
        }
    }

    plot_error_convergence(&table, &output, None)?;
    log::info!("chart written to {}", output);

    Ok(())
}
