//! Experiment runner
//!
//! Advances one (method, step size) run from x₀ and samples the absolute
//! error against the exact solution at the configured milestones.
//!
//! # Milestone Sampling
//!
//! Each milestone m is mapped to a step index independently:
//!
//! ```text
//! index(m) = round((m − x₀) / h)      exact halves go to the even index
//! ```
//!
//! and the error is recorded when the step counter reaches that index, using
//! the state *before* the step is taken. With x₀ = 0 this is round(m / h).
//! For coarse h the rounded index may not land exactly on m, and two
//! milestones can share an index. A shared index is sampled once, so the run
//! yields fewer errors than milestones; [`MilestonePlan::collisions`] reports
//! every such pair and the runner logs a warning.

use crate::error::{ConvError, Result};
use crate::physics::OdeModel;
use crate::solver::{validate_value, ExperimentConfiguration, Stepper};

// =================================================================================================
// Milestone Plan
// =================================================================================================

/// Two milestones that round to the same step index
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MilestoneCollision {
    /// Smaller milestone of the pair
    pub first: f64,

    /// Larger milestone of the pair
    pub second: f64,

    /// Shared step index
    pub index: usize,
}

/// Step indices at which a run samples its error
///
/// # Example
///
/// ```rust
/// use conv_rs::solver::MilestonePlan;
///
/// let plan = MilestonePlan::new(&[0.2, 0.3, 0.4], 0.01, 0.0);
/// assert_eq!(plan.indices(), &[20, 30, 40]);
/// assert!(plan.collisions().is_empty());
///
/// let coarse = MilestonePlan::new(&[0.2, 0.3, 0.4], 0.25, 0.0);
/// assert_eq!(coarse.indices(), &[1, 1, 2]);
/// assert_eq!(coarse.collisions().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MilestonePlan {
    milestones: Vec<f64>,
    indices: Vec<usize>,
}

impl MilestonePlan {
    /// Round every milestone to its step index for step size `step_size`
    ///
    /// Exact halves round to the even index.
    pub fn new(milestones: &[f64], step_size: f64, x0: f64) -> Self {
        let indices = milestones
            .iter()
            .map(|m| ((m - x0) / step_size).round_ties_even().max(0.0) as usize)
            .collect();

        Self {
            milestones: milestones.to_vec(),
            indices,
        }
    }

    /// Milestones, in configuration order
    pub fn milestones(&self) -> &[f64] {
        &self.milestones
    }

    /// Step index of each milestone, in configuration order
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Whether step `n` is a sampling point
    pub fn contains(&self, n: usize) -> bool {
        self.indices.contains(&n)
    }

    /// Every pair of milestones sharing a step index
    pub fn collisions(&self) -> Vec<MilestoneCollision> {
        let mut collisions = Vec::new();

        for i in 0..self.indices.len() {
            for j in (i + 1)..self.indices.len() {
                if self.indices[i] == self.indices[j] {
                    collisions.push(MilestoneCollision {
                        first: self.milestones[i].min(self.milestones[j]),
                        second: self.milestones[i].max(self.milestones[j]),
                        index: self.indices[i],
                    });
                }
            }
        }

        collisions
    }
}

// =================================================================================================
// Run Outcome
// =================================================================================================

/// Error sampled at one step index
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Step counter at which the sample was taken
    pub index: usize,

    /// Abscissa x₀ + h·index
    pub x: f64,

    /// |y_numerical − y_exact|
    pub error: f64,
}

/// Result of a single (method, step size) run
#[derive(Debug, Clone, PartialEq)]
pub struct RunOutcome {
    /// Step size of the run
    pub step_size: f64,

    /// Sampling plan used
    pub plan: MilestonePlan,

    /// Samples in the order they were reached (ascending index)
    pub samples: Vec<Sample>,

    /// Number of steps taken
    pub steps: usize,
}

impl RunOutcome {
    /// Sampled errors in the order they were reached
    pub fn errors(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.error).collect()
    }

    /// Error sampled for the milestone at `position` in the configuration
    ///
    /// Colliding milestones return the same value. Returns `None` when the
    /// milestone's index was never reached.
    pub fn error_at(&self, position: usize) -> Option<f64> {
        let index = *self.plan.indices().get(position)?;
        self.samples
            .iter()
            .find(|s| s.index == index)
            .map(|s| s.error)
    }

    /// Milestones sharing a step index with another milestone
    pub fn collisions(&self) -> Vec<MilestoneCollision> {
        self.plan.collisions()
    }

    /// Milestones whose step index lies beyond the last step
    pub fn unsampled(&self) -> Vec<f64> {
        self.plan
            .milestones()
            .iter()
            .zip(self.plan.indices())
            .filter(|(_, index)| !self.samples.iter().any(|s| s.index == **index))
            .map(|(m, _)| *m)
            .collect()
    }

    /// True when the run did not yield one distinct error per milestone
    pub fn is_degenerate(&self) -> bool {
        self.samples.len() != self.plan.milestones().len()
    }
}

// =================================================================================================
// Runner
// =================================================================================================

/// Integrate `model` with `stepper` at fixed step `step_size` and sample the error
///
/// # Algorithm
///
/// 1. Build the [`MilestonePlan`] for `step_size`
/// 2. (x, y) = (x₀, y₀), n = 0
/// 3. While x₀ + h·n < x_end:
///    - if n is a sampling index, record |y − exact(x)|
///    - n ← n + 1, y ← step(h, x, y), x ← x₀ + h·n
///
/// x is recomputed from the step counter rather than accumulated, so the
/// stopping test does not drift over thousands of steps.
///
/// # Errors
///
/// - [`ConvError::InvalidConfiguration`] for a non-positive step size or invalid configuration
/// - [`ConvError::NonFinite`] if the numerical solution becomes NaN or infinite
/// - [`ConvError::DomainViolation`] if the exact solution cannot be evaluated at a sample
///
/// # Example
///
/// ```rust
/// use conv_rs::models::ArctanModel;
/// use conv_rs::solver::{run, EulerStepper, ExperimentConfiguration};
///
/// let model = ArctanModel::new();
/// let config = ExperimentConfiguration::for_model(&model);
///
/// let outcome = run(&EulerStepper, &model, 0.001, &config).unwrap();
/// assert_eq!(outcome.errors().len(), 3);
/// assert!(outcome.errors()[0] < 0.01);
/// ```
pub fn run(
    stepper: &dyn Stepper,
    model: &dyn OdeModel,
    step_size: f64,
    config: &ExperimentConfiguration,
) -> Result<RunOutcome> {

    // ====== Validation ======

    if !step_size.is_finite() || step_size <= 0.0 {
        return Err(ConvError::InvalidConfiguration(format!(
            "step size {} must be positive and finite", step_size
        )));
    }

    config.validate_for(model)?;

    // ====== Setup ======

    let plan = MilestonePlan::new(&config.milestones, step_size, config.x0);

    let collisions = plan.collisions();
    for collision in &collisions {
        log::warn!(
            "{}, h={}: milestones {} and {} both round to step {}, sampled once",
            stepper.name(), step_size, collision.first, collision.second, collision.index
        );
    }

    let x0 = config.x0;
    let mut x = x0;
    let mut y = config.y0;
    let mut n: usize = 0;
    let mut samples = Vec::with_capacity(config.milestones.len());

    // ====== Integration ======

    while x0 + step_size * (n as f64) < config.x_end {
        if plan.contains(n) {
            let exact = exact_at(model, x)?;
            samples.push(Sample {
                index: n,
                x,
                error: (y - exact).abs(),
            });
        }

        n += 1;
        y = stepper.step(model, step_size, x, y);
        x = x0 + step_size * (n as f64);

        validate_value(y, n, x)?;
    }

    let outcome = RunOutcome {
        step_size,
        plan,
        samples,
        steps: n,
    };

    let unsampled = outcome.unsampled();
    if !unsampled.is_empty() {
        log::warn!(
            "{}, h={}: milestones {:?} lie beyond the last step ({}), not sampled",
            stepper.name(), step_size, unsampled, n
        );
    }

    log::debug!(
        "{}, h={}: {} steps, errors {:?}",
        stepper.name(), step_size, outcome.steps, outcome.errors()
    );

    Ok(outcome)
}

/// Exact solution at `x`, rejecting the model's singularity
fn exact_at(model: &dyn OdeModel, x: f64) -> Result<f64> {
    if let Some(pole) = model.singularity()
        && x >= pole
    {
        return Err(ConvError::DomainViolation { x });
    }

    let exact = model.exact_solution(x);
    if !exact.is_finite() {
        return Err(ConvError::DomainViolation { x });
    }

    Ok(exact)
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ArctanModel;
    use crate::physics::InitialCondition;
    use crate::solver::{EulerStepper, RK4Stepper};
    use approx::assert_relative_eq;

    fn default_config() -> ExperimentConfiguration {
        ExperimentConfiguration::for_model(&ArctanModel::new())
    }

    // ====== Milestone Plan ======

    #[test]
    fn test_plan_indices_default_step_sizes() {
        let milestones = [0.2, 0.3, 0.4];

        assert_eq!(MilestonePlan::new(&milestones, 0.0001, 0.0).indices(), &[2000, 3000, 4000]);
        assert_eq!(MilestonePlan::new(&milestones, 0.002, 0.0).indices(), &[100, 150, 200]);
        assert_eq!(MilestonePlan::new(&milestones, 0.05, 0.0).indices(), &[4, 6, 8]);
        // 0.3 / 0.1 = 2.9999999999999996 rounds to 3
        assert_eq!(MilestonePlan::new(&milestones, 0.1, 0.0).indices(), &[2, 3, 4]);
    }

    #[test]
    fn test_plan_indices_ties_round_to_even() {
        // 0.25 / 0.1 = 2.5 → 2, 0.45 / 0.1 = 4.5 → 4
        let plan = MilestonePlan::new(&[0.25, 0.45], 0.1, 0.0);
        assert_eq!(plan.indices(), &[2, 4]);

        // 0.35 / 0.1 = 3.4999999999999996 → 3
        assert_eq!(MilestonePlan::new(&[0.35], 0.1, 0.0).indices(), &[3]);
    }

    #[test]
    fn test_plan_indices_are_independent() {
        // 0.2/0.15 = 1.33 → 1, 0.3/0.15 = 2, 0.4/0.15 = 2.67 → 3
        let plan = MilestonePlan::new(&[0.2, 0.3, 0.4], 0.15, 0.0);
        assert_eq!(plan.indices(), &[1, 2, 3]);
        assert!(plan.collisions().is_empty());
    }

    #[test]
    fn test_plan_collision_detection() {
        let plan = MilestonePlan::new(&[0.2, 0.3, 0.4], 0.25, 0.0);
        let collisions = plan.collisions();

        assert_eq!(collisions.len(), 1);
        assert_eq!(collisions[0], MilestoneCollision { first: 0.2, second: 0.3, index: 1 });
    }

    #[test]
    fn test_plan_offset_start() {
        let plan = MilestonePlan::new(&[1.2, 1.3], 0.1, 1.0);
        assert_eq!(plan.indices(), &[2, 3]);
    }

    #[test]
    fn test_plan_contains() {
        let plan = MilestonePlan::new(&[0.2, 0.3, 0.4], 0.01, 0.0);
        assert!(plan.contains(30));
        assert!(!plan.contains(31));
    }

    // ====== Runner ======

    #[test]
    fn test_run_euler_fine_step() {
        let model = ArctanModel::new();
        let outcome = run(&EulerStepper, &model, 0.001, &default_config()).unwrap();

        let errors = outcome.errors();
        assert_eq!(errors.len(), 3);
        assert!(errors[0] < 0.01, "error at 0.2 is {}", errors[0]);
        assert!(errors[0] < errors[1] && errors[1] < errors[2]);
        assert!(!outcome.is_degenerate());
    }

    #[test]
    fn test_run_step_count() {
        // 0.5 / 0.01 = 50 steps
        let model = ArctanModel::new();
        let outcome = run(&EulerStepper, &model, 0.01, &default_config()).unwrap();
        assert_eq!(outcome.steps, 50);

        let outcome = run(&RK4Stepper, &model, 0.0001, &default_config()).unwrap();
        assert_eq!(outcome.steps, 5000);
    }

    #[test]
    fn test_run_samples_before_advancing() {
        let model = ArctanModel::new();
        let outcome = run(&RK4Stepper, &model, 0.01, &default_config()).unwrap();

        let xs: Vec<f64> = outcome.samples.iter().map(|s| s.x).collect();
        assert_relative_eq!(xs[0], 0.2, epsilon = 1e-12);
        assert_relative_eq!(xs[1], 0.3, epsilon = 1e-12);
        assert_relative_eq!(xs[2], 0.4, epsilon = 1e-12);
        assert_eq!(outcome.samples[1].index, 30);
    }

    #[test]
    fn test_run_zero_error_at_start() {
        let model = ArctanModel::new();
        let config = default_config().with_milestones(vec![0.0, 0.2]);
        let outcome = run(&EulerStepper, &model, 0.01, &config).unwrap();
        assert_eq!(outcome.error_at(0), Some(0.0));
    }

    #[test]
    fn test_run_deterministic() {
        let model = ArctanModel::new();
        let config = default_config();

        let a = run(&EulerStepper, &model, 0.01, &config).unwrap();
        let b = run(&EulerStepper, &model, 0.01, &config).unwrap();

        let bits_a: Vec<u64> = a.errors().iter().map(|e| e.to_bits()).collect();
        let bits_b: Vec<u64> = b.errors().iter().map(|e| e.to_bits()).collect();
        assert_eq!(bits_a, bits_b);
    }

    #[test]
    fn test_run_collision_yields_fewer_errors() {
        // h = 0.25: indices [1, 1, 2], loop stops at n = 2 (0.5 is not < 0.5)
        let model = ArctanModel::new();
        let outcome = run(&EulerStepper, &model, 0.25, &default_config()).unwrap();

        assert_eq!(outcome.errors().len(), 1);
        assert!(outcome.is_degenerate());
        assert_eq!(outcome.collisions().len(), 1);
        assert_eq!(outcome.unsampled(), vec![0.4]);

        // Both colliding milestones read the same sample
        assert_eq!(outcome.error_at(0), outcome.error_at(1));
        assert_eq!(outcome.error_at(2), None);
        assert_relative_eq!(outcome.error_at(0).unwrap(), 1.25, epsilon = 1e-12);
    }

    #[test]
    fn test_run_rejects_bad_step_size() {
        let model = ArctanModel::new();
        for h in [0.0, -0.1, f64::NAN] {
            let result = run(&EulerStepper, &model, h, &default_config());
            assert!(matches!(result, Err(ConvError::InvalidConfiguration(_))));
        }
    }

    #[test]
    fn test_run_detects_non_finite() {
        /// dy/dx = y², y(0) = 1 blows up at x = 1
        struct BlowUp;

        impl OdeModel for BlowUp {
            fn derivative(&self, _x: f64, y: f64) -> f64 { y * y }
            fn exact_solution(&self, x: f64) -> f64 { 1.0 / (1.0 - x) }
            fn initial_condition(&self) -> InitialCondition { InitialCondition::new(0.0, 1.0) }
            fn name(&self) -> &str { "Blow up" }
        }

        // Huge steps drive Euler to overflow long before the end of the range
        let config = ExperimentConfiguration::for_model(&BlowUp)
            .with_end(0.99)
            .with_milestones(vec![0.1]);
        let result = run(&EulerStepper, &BlowUp, 1e-3, &config);
        assert!(result.is_ok());

        let config = config.with_end(400.0).with_milestones(vec![0.0]);
        let result = run(&EulerStepper, &BlowUp, 10.0, &config);
        assert!(matches!(result, Err(ConvError::NonFinite { .. })));
    }

    #[test]
    fn test_exact_at_rejects_singularity() {
        let model = ArctanModel::new();
        assert_eq!(exact_at(&model, 0.5), Err(ConvError::DomainViolation { x: 0.5 }));
        assert!(exact_at(&model, 0.4).is_ok());
    }
}
