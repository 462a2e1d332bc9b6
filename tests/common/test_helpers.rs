//! Helper functions for integration tests

use conv_rs::models::ArctanModel;
use conv_rs::output::{sweep, ResultTable};
use conv_rs::physics::OdeModel;
use conv_rs::solver::{run, ExperimentConfiguration, Stepper};

/// Sweep of the reference study (2 methods × 10 step sizes)
pub fn reference_table() -> ResultTable {
    let model = ArctanModel::new();
    sweep(&model, &ExperimentConfiguration::for_model(&model))
        .expect("reference sweep should succeed")
}

/// Errors of one run at every milestone, one entry per step size
pub fn errors_at(
    stepper: &dyn Stepper,
    model: &dyn OdeModel,
    config: &ExperimentConfiguration,
    step_sizes: &[f64],
) -> Vec<Vec<f64>> {
    step_sizes
        .iter()
        .map(|&h| {
            run(stepper, model, h, config)
                .unwrap_or_else(|e| panic!("run at h={} failed: {}", h, e))
                .errors()
        })
        .collect()
}

/// Ratios e(h_i) / e(h_{i+1}) of consecutive errors
pub fn convergence_ratios(errors: &[f64]) -> Vec<f64> {
    errors.windows(2).map(|w| w[0] / w[1]).collect()
}

/// Relative error: |computed - expected| / |expected|
pub fn relative_error(computed: f64, expected: f64) -> f64 {
    if expected.abs() < 1e-15 {
        computed.abs()
    } else {
        (computed - expected).abs() / expected.abs()
    }
}
