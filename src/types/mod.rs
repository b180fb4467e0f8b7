pub mod config;

use serde::Serialize;

use crate::error::ConfigError;

/// weights for the three edit operations. fixed at construction time and shared read only by all
/// evaluators of a [crate::calc::Calculator]
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostModel {
    /// cost of inserting a single character
    pub add: f64,
    /// cost of deleting a single character
    pub remove: f64,
    /// cost of substituting a single character for another
    pub change: f64,
}

impl Default for CostModel {
    fn default() -> Self {
        CostModel {
            add: 1.0,
            remove: 1.0,
            change: 3.0 / 2.0,
        }
    }
}

impl CostModel {
    /// validate and build a cost model. a negative weight breaks the minimality argument of the
    /// recurrence and NaN poisons every min() in it, both are rejected instead of clamped
    pub fn new(add: f64, remove: f64, change: f64) -> Result<CostModel, ConfigError> {
        for (op, cost) in [("add", add), ("remove", remove), ("change", change)] {
            // the negated comparison catches NaN as well
            if !(cost >= 0.0) {
                return Err(ConfigError::InvalidCost { op, value: cost });
            }
        }
        Ok(CostModel {
            add,
            remove,
            change,
        })
    }
}

#[derive(Debug, PartialEq, Clone, Copy, Serialize)]
/// the evaluation strategies the calculator implements, all of them compute the same distance and
/// differ only in their time and space complexity
#[derive(clap::ValueEnum)]
pub enum Algorithm {
    /// direct recursion, exponential, the correctness baseline
    Naive,
    /// recursion with a suffix pair cache
    Memoized,
    /// bottom up matrix fill, no recursion, no cache
    Iterative,
}

impl Algorithm {
    pub fn name(&self) -> &str {
        match self {
            Self::Naive => "naive",
            Self::Memoized => "memoized",
            Self::Iterative => "iterative",
        }
    }
}

/// distance and elapsed wall clock time of a single evaluator run
#[derive(Debug, Clone, Serialize)]
pub struct Measurement {
    pub algorithm: Algorithm,
    pub distance: f64,
    pub seconds: f64,
}
