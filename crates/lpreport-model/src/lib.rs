mod model;
mod problem;
mod solution;

pub use model::{LpModel, ModelError};
pub use problem::{ConstraintOp, LinearConstraint, Objective, Variable, VariableType};
pub use solution::{SensitivityRange, SolveStatus, Solution};
