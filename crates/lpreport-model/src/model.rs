use thiserror::Error;

use crate::problem::{ConstraintOp, LinearConstraint, Objective, Variable, VariableType};
use crate::solution::Solution;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("model has not been solved")]
    NotSolved,
    #[error("engine reported {found} {what}, model has {expected}")]
    ShapeMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("duplicate name: {0}")]
    DuplicateName(String),
}

/// A linear programming model together with the solution an external engine
/// attached to it.
///
/// This type never solves anything. The engine adapter builds the model,
/// solves it elsewhere, and hands the reported state back via
/// [`attach_solution`](LpModel::attach_solution). Reporting code then reads
/// the model through the lookup methods below.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LpModel {
    variables: Vec<Variable>,
    constraints: Vec<LinearConstraint>,
    objective: Objective,
    solution: Option<Solution>,
}

impl LpModel {
    pub fn new() -> Self {
        Self {
            variables: Vec::new(),
            constraints: Vec::new(),
            objective: Objective {
                coefficients: Vec::new(),
                minimize: true,
            },
            solution: None,
        }
    }

    /// Add a variable. Any attached solution is dropped: it was reported
    /// for the old model shape and no longer describes this model.
    pub fn add_variable(
        &mut self,
        name: impl Into<String>,
        vartype: VariableType,
    ) -> Result<(), ModelError> {
        let name = name.into();
        if self.variables.iter().any(|v| v.name == name) {
            return Err(ModelError::DuplicateName(name));
        }
        self.variables.push(Variable { name, vartype });
        self.objective.coefficients.push(0.0);
        self.solution = None;
        Ok(())
    }

    pub fn add_constraint(
        &mut self,
        name: impl Into<String>,
        coefficients: Vec<f64>,
        op: ConstraintOp,
        rhs: f64,
    ) -> Result<(), ModelError> {
        let name = name.into();
        if self.constraints.iter().any(|c| c.name == name) {
            return Err(ModelError::DuplicateName(name));
        }
        self.constraints.push(LinearConstraint {
            name,
            coefficients,
            op,
            rhs,
        });
        self.solution = None;
        Ok(())
    }

    /// Replace the objective. The coefficient vector must have one entry
    /// per variable; any attached solution is dropped.
    pub fn set_objective(
        &mut self,
        coefficients: Vec<f64>,
        minimize: bool,
    ) -> Result<(), ModelError> {
        check_shape("objective coefficients", self.num_variables(), coefficients.len())?;
        self.objective = Objective { coefficients, minimize };
        self.solution = None;
        Ok(())
    }

    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    /// Variables in engine order
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    /// Constraints in engine order
    pub fn constraints(&self) -> &[LinearConstraint] {
        &self.constraints
    }

    pub fn objective(&self) -> &Objective {
        &self.objective
    }

    pub fn variable(&self, name: &str) -> Option<&Variable> {
        self.variables.iter().find(|v| v.name == name)
    }

    pub fn constraint(&self, name: &str) -> Option<&LinearConstraint> {
        self.constraints.iter().find(|c| c.name == name)
    }

    /// Objective coefficient for a variable, looked up by name
    pub fn objective_coefficient(&self, name: &str) -> Option<f64> {
        let idx = self.variables.iter().position(|v| v.name == name)?;
        self.objective.coefficients.get(idx).copied()
    }

    /// Right-hand side of a constraint, looked up by name
    pub fn constraint_rhs(&self, name: &str) -> Option<f64> {
        self.constraint(name).map(|c| c.rhs)
    }

    /// Attach the solution an external engine produced for this model.
    ///
    /// The engine's per-variable and per-constraint vectors must match the
    /// model shape; a misaligned solution is rejected instead of silently
    /// corrupting every report built on top of it.
    pub fn attach_solution(&mut self, solution: Solution) -> Result<(), ModelError> {
        let nv = self.num_variables();
        let nc = self.num_constraints();
        check_shape("values", nv, solution.values.len())?;
        check_shape("reduced costs", nv, solution.reduced_costs.len())?;
        check_shape("dual values", nc, solution.dual_values.len())?;
        check_shape("slacks", nc, solution.slacks.len())?;
        self.solution = Some(solution);
        Ok(())
    }

    /// The attached solution, or `NotSolved` if the engine has not reported one
    pub fn solution(&self) -> Result<&Solution, ModelError> {
        self.solution.as_ref().ok_or(ModelError::NotSolved)
    }

    pub fn is_solved(&self) -> bool {
        self.solution.is_some()
    }
}

impl Default for LpModel {
    fn default() -> Self {
        Self::new()
    }
}

fn check_shape(what: &'static str, expected: usize, found: usize) -> Result<(), ModelError> {
    if expected != found {
        return Err(ModelError::ShapeMismatch {
            what,
            expected,
            found,
        });
    }
    Ok(())
}
