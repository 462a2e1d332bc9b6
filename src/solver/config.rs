//! Experiment configuration
//!
//! Gathers the knobs of the error study: where integration starts, where it
//! stops, which step sizes are swept and at which abscissae the error is
//! sampled. `Default` reproduces the reference study.

use crate::error::{ConvError, Result};
use crate::physics::OdeModel;

/// Step sizes swept by the reference study, ascending
pub const DEFAULT_STEP_SIZES: [f64; 10] = [
    0.0001, 0.0002, 0.0005, 0.001, 0.002, 0.005, 0.01, 0.02, 0.05, 0.1,
];

/// Abscissae at which the error is sampled, ascending
pub const DEFAULT_MILESTONES: [f64; 3] = [0.2, 0.3, 0.4];

/// Exclusive end of integration
pub const DEFAULT_X_END: f64 = 0.5;

/// Configuration of one error study
///
/// # Examples
///
/// ```rust
/// use conv_rs::solver::ExperimentConfiguration;
///
/// let config = ExperimentConfiguration::default();
/// assert_eq!(config.step_sizes.len(), 10);
/// assert_eq!(config.milestones, vec![0.2, 0.3, 0.4]);
/// assert!(config.validate().is_ok());
///
/// let coarse = ExperimentConfiguration::default().with_step_sizes(vec![0.05, 0.1]);
/// assert_eq!(coarse.step_sizes.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ExperimentConfiguration {
    /// Start of integration
    pub x0: f64,

    /// Initial value y(x0)
    pub y0: f64,

    /// Exclusive end of integration; a run steps while x0 + h·n < x_end
    pub x_end: f64,

    /// Step sizes swept, in report order
    pub step_sizes: Vec<f64>,

    /// Abscissae at which the error is sampled
    pub milestones: Vec<f64>,
}

impl Default for ExperimentConfiguration {
    fn default() -> Self {
        Self {
            x0: 0.0,
            y0: 2.0,
            x_end: DEFAULT_X_END,
            step_sizes: DEFAULT_STEP_SIZES.to_vec(),
            milestones: DEFAULT_MILESTONES.to_vec(),
        }
    }
}

impl ExperimentConfiguration {
    /// Default configuration starting from the model's own initial condition
    pub fn for_model(model: &dyn OdeModel) -> Self {
        let initial = model.initial_condition();
        Self {
            x0: initial.x,
            y0: initial.y,
            ..Default::default()
        }
    }

    /// Builder pattern: replace the swept step sizes
    pub fn with_step_sizes(mut self, step_sizes: Vec<f64>) -> Self {
        self.step_sizes = step_sizes;
        self
    }

    /// Builder pattern: replace the sampled milestones
    pub fn with_milestones(mut self, milestones: Vec<f64>) -> Self {
        self.milestones = milestones;
        self
    }

    /// Builder pattern: set the exclusive end of integration
    pub fn with_end(mut self, x_end: f64) -> Self {
        self.x_end = x_end;
        self
    }

    /// Validate the configuration on its own
    pub fn validate(&self) -> Result<()> {
        if !self.x0.is_finite() || !self.y0.is_finite() || !self.x_end.is_finite() {
            return Err(invalid("x0, y0 and x_end must be finite"));
        }

        if self.x_end <= self.x0 {
            return Err(invalid(format!(
                "x_end ({}) must be greater than x0 ({})", self.x_end, self.x0
            )));
        }

        if self.step_sizes.is_empty() {
            return Err(invalid("at least one step size is required"));
        }

        if let Some(h) = self.step_sizes.iter().find(|h| !h.is_finite() || **h <= 0.0) {
            return Err(invalid(format!("step size {} must be positive and finite", h)));
        }

        if self.milestones.is_empty() {
            return Err(invalid("at least one milestone is required"));
        }

        for &milestone in &self.milestones {
            if !(milestone >= self.x0 && milestone < self.x_end) {
                return Err(invalid(format!(
                    "milestone {} outside integration range [{}, {})",
                    milestone, self.x0, self.x_end
                )));
            }
        }

        Ok(())
    }

    /// Validate the configuration against a model
    ///
    /// Additionally rejects ranges that reach past the model's singularity,
    /// where the exact solution cannot be sampled.
    pub fn validate_for(&self, model: &dyn OdeModel) -> Result<()> {
        self.validate()?;

        if let Some(pole) = model.singularity()
            && self.x0 < pole
            && self.x_end > pole
        {
            return Err(invalid(format!(
                "integration range [{}, {}) crosses the singularity of {} at x = {}",
                self.x0, self.x_end, model.name(), pole
            )));
        }

        Ok(())
    }
}

fn invalid(message: impl Into<String>) -> ConvError {
    ConvError::InvalidConfiguration(message.into())
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ArctanModel;

    #[test]
    fn test_default_configuration() {
        let config = ExperimentConfiguration::default();
        assert_eq!(config.x0, 0.0);
        assert_eq!(config.y0, 2.0);
        assert_eq!(config.x_end, 0.5);
        assert_eq!(config.step_sizes, DEFAULT_STEP_SIZES.to_vec());
        assert_eq!(config.milestones, DEFAULT_MILESTONES.to_vec());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_for_model_uses_initial_condition() {
        let config = ExperimentConfiguration::for_model(&ArctanModel::new());
        assert_eq!(config, ExperimentConfiguration::default());
        assert!(config.validate_for(&ArctanModel::new()).is_ok());
    }

    #[test]
    fn test_builders() {
        let config = ExperimentConfiguration::default()
            .with_step_sizes(vec![0.1])
            .with_milestones(vec![0.25])
            .with_end(0.4);

        assert_eq!(config.step_sizes, vec![0.1]);
        assert_eq!(config.milestones, vec![0.25]);
        assert_eq!(config.x_end, 0.4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_empty_step_sizes() {
        let config = ExperimentConfiguration::default().with_step_sizes(vec![]);
        assert!(matches!(config.validate(), Err(ConvError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_rejects_non_positive_step_size() {
        for h in [0.0, -0.01, f64::NAN, f64::INFINITY] {
            let config = ExperimentConfiguration::default().with_step_sizes(vec![0.01, h]);
            assert!(config.validate().is_err(), "step size {} accepted", h);
        }
    }

    #[test]
    fn test_rejects_milestone_outside_range() {
        let config = ExperimentConfiguration::default().with_milestones(vec![0.2, 0.5]);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("milestone 0.5"));

        let config = ExperimentConfiguration::default().with_milestones(vec![-0.1]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_empty_milestones() {
        let config = ExperimentConfiguration::default().with_milestones(vec![]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_reversed_range() {
        let config = ExperimentConfiguration::default().with_end(0.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_range_crossing_singularity() {
        let model = ArctanModel::new();
        let config = ExperimentConfiguration::default()
            .with_end(0.8)
            .with_milestones(vec![0.2, 0.6]);

        assert!(config.validate().is_ok());
        let err = config.validate_for(&model).unwrap_err();
        assert!(err.to_string().contains("singularity"));
    }
}
