#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolveStatus {
    /// An optimal solution was found
    Optimal,
    /// The problem is infeasible (no solution exists)
    Infeasible,
    /// The problem is unbounded
    Unbounded,
    /// Engine encountered an error
    Error,
}

/// Interval reported by the engine over which a coefficient or RHS can move
/// while the current optimal basis stays optimal
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SensitivityRange {
    /// Variable or constraint name
    pub name: String,
    /// Lower bound of the range
    pub lower: f64,
    /// Upper bound of the range
    pub upper: f64,
}

/// Everything the engine reports after a solve.
///
/// All vectors are in engine order: one entry per variable for
/// `values`/`reduced_costs`, one per constraint for `dual_values`/`slacks`.
/// Sensitivity ranges carry their own names so downstream consumers can join
/// on name instead of trusting positional alignment.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// Solve status
    pub status: SolveStatus,
    /// Optimal objective value
    pub objective_value: f64,
    /// Optimal value for each variable
    pub values: Vec<f64>,
    /// Reduced cost for each variable
    pub reduced_costs: Vec<f64>,
    /// Dual value (shadow price) for each constraint
    pub dual_values: Vec<f64>,
    /// Slack for each constraint
    pub slacks: Vec<f64>,
    /// Sensitivity ranges for objective coefficients
    pub objective_ranges: Vec<SensitivityRange>,
    /// Sensitivity ranges for constraint RHS values
    pub rhs_ranges: Vec<SensitivityRange>,
}

impl Solution {
    /// Look up the objective-coefficient range for a variable by name
    pub fn objective_range(&self, name: &str) -> Option<&SensitivityRange> {
        self.objective_ranges.iter().find(|r| r.name == name)
    }

    /// Look up the RHS range for a constraint by name
    pub fn rhs_range(&self, name: &str) -> Option<&SensitivityRange> {
        self.rhs_ranges.iter().find(|r| r.name == name)
    }
}
