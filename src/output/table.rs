//! Error records, the sweep that produces them, and convergence analysis
//!
//! The sweep is pure construction: methods × step sizes are enumerated and
//! every run becomes one immutable [`ErrorRecord`], in method-major order.
//!
//! ```text
//! method  dx        x=0.2      x=0.3      x=0.4
//! euler   1e-4      7.265e-4   3.008e-3   2.167e-2
//! ...
//! runge   1e-1      5.260e-4   4.713e-3   1.029e-1
//! ```

use std::collections::BTreeMap;
use std::fmt;

use crate::error::Result;
use crate::physics::OdeModel;
use crate::solver::{run, ExperimentConfiguration, Method, MilestoneCollision, RunOutcome};

// =================================================================================================
// Error Record
// =================================================================================================

/// Errors of one (method, step size) run
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorRecord {
    /// Integration method
    pub method: Method,

    /// Step size of the run
    pub step_size: f64,

    /// Full outcome of the run
    pub outcome: RunOutcome,
}

impl ErrorRecord {
    /// Sampled errors in ascending milestone order
    pub fn errors(&self) -> Vec<f64> {
        self.outcome.errors()
    }

    /// Error for the milestone at `position`, if it was sampled
    pub fn error_at(&self, position: usize) -> Option<f64> {
        self.outcome.error_at(position)
    }

    /// Milestone pairs that collapsed onto one step index
    pub fn collisions(&self) -> Vec<MilestoneCollision> {
        self.outcome.collisions()
    }

    /// True when the run did not yield one error per milestone
    pub fn is_degenerate(&self) -> bool {
        self.outcome.is_degenerate()
    }
}

// =================================================================================================
// Observed Order
// =================================================================================================

/// Empirical convergence order between two consecutive step sizes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObservedOrder {
    /// Earlier step size in sweep order
    pub from_step: f64,

    /// Later step size in sweep order
    pub to_step: f64,

    /// Slope log(e₂/e₁) / log(h₂/h₁)
    pub order: f64,
}

// =================================================================================================
// Result Table
// =================================================================================================

/// Ordered collection of error records for one sweep
#[derive(Debug, Clone, PartialEq)]
pub struct ResultTable {
    milestones: Vec<f64>,
    records: Vec<ErrorRecord>,
}

impl ResultTable {
    /// Create a table from records sampled at `milestones`
    pub fn new(milestones: Vec<f64>, records: Vec<ErrorRecord>) -> Self {
        Self { milestones, records }
    }

    /// All records, method-major
    pub fn records(&self) -> &[ErrorRecord] {
        &self.records
    }

    /// Milestones the errors were sampled at
    pub fn milestones(&self) -> &[f64] {
        &self.milestones
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table has no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records of one method, in sweep order
    pub fn for_method(&self, method: Method) -> Vec<&ErrorRecord> {
        self.records.iter().filter(|r| r.method == method).collect()
    }

    /// Records grouped by method
    pub fn partition(&self) -> BTreeMap<Method, Vec<&ErrorRecord>> {
        let mut groups: BTreeMap<Method, Vec<&ErrorRecord>> = BTreeMap::new();
        for record in &self.records {
            groups.entry(record.method).or_default().push(record);
        }
        groups
    }

    /// Records whose milestones collided or were not reached
    pub fn degenerate_records(&self) -> Vec<&ErrorRecord> {
        self.records.iter().filter(|r| r.is_degenerate()).collect()
    }

    /// Empirical orders between consecutive step sizes of `method` at milestone `position`
    ///
    /// Pairs where either error is missing or not strictly positive are skipped.
    pub fn observed_orders(&self, method: Method, position: usize) -> Vec<ObservedOrder> {
        let points: Vec<(f64, Option<f64>)> = self
            .for_method(method)
            .iter()
            .map(|r| (r.step_size, r.error_at(position)))
            .collect();

        points
            .windows(2)
            .filter_map(|pair| match pair {
                [(h1, Some(e1)), (h2, Some(e2))] if *e1 > 0.0 && *e2 > 0.0 && h1 != h2 => {
                    Some(ObservedOrder {
                        from_step: *h1,
                        to_step: *h2,
                        order: (e2 / e1).ln() / (h2 / h1).ln(),
                    })
                }
                _ => None,
            })
            .collect()
    }
}

impl fmt::Display for ResultTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<8}{:>10}", "method", "dx")?;
        for milestone in &self.milestones {
            write!(f, "{:>14}", format!("x={}", milestone))?;
        }
        writeln!(f)?;

        for record in &self.records {
            write!(f, "{:<8}{:>10}", record.method.key(), format!("{:.0e}", record.step_size))?;
            for position in 0..self.milestones.len() {
                match record.error_at(position) {
                    Some(error) => write!(f, "{:>14}", format!("{:.3e}", error))?,
                    None => write!(f, "{:>14}", "-")?,
                }
            }
            if record.is_degenerate() {
                write!(f, "  (degenerate)")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

// =================================================================================================
// Sweep
// =================================================================================================

/// Run every method at every configured step size
///
/// Records are produced method-major (all Euler rows, then all RK4 rows),
/// step sizes in configuration order.
///
/// # Example
///
/// ```rust
/// use conv_rs::models::ArctanModel;
/// use conv_rs::output::sweep;
/// use conv_rs::solver::ExperimentConfiguration;
///
/// let model = ArctanModel::new();
/// let table = sweep(&model, &ExperimentConfiguration::for_model(&model)).unwrap();
/// assert_eq!(table.len(), 20);
/// ```
pub fn sweep(model: &dyn OdeModel, config: &ExperimentConfiguration) -> Result<ResultTable> {
    config.validate_for(model)?;

    let records = Method::ALL
        .iter()
        .flat_map(|&method| config.step_sizes.iter().map(move |&h| (method, h)))
        .map(|(method, step_size)| {
            run(method.stepper(), model, step_size, config).map(|outcome| ErrorRecord {
                method,
                step_size,
                outcome,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    log::info!(
        "{}: {} runs over {} step sizes",
        model.name(), records.len(), config.step_sizes.len()
    );

    Ok(ResultTable::new(config.milestones.clone(), records))
}

// =================================================================================================
// Tests
// =================================================================================================
