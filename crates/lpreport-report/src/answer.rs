use std::fmt;

use lpreport_model::{LpModel, VariableType};

use crate::error::ReportError;

/// Whether a constraint is tight at the reported solution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConstraintStatus {
    Binding,
    NonBinding,
}

impl ConstraintStatus {
    /// Status from an engine-reported slack. Zero slack means binding;
    /// the comparison is exact, with no tolerance.
    pub fn from_slack(slack: f64) -> Self {
        if slack == 0.0 {
            ConstraintStatus::Binding
        } else {
            ConstraintStatus::NonBinding
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConstraintStatus::Binding => "binding",
            ConstraintStatus::NonBinding => "non-binding",
        }
    }
}

impl fmt::Display for ConstraintStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Answer-report row for one decision variable
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VariableAnswer {
    /// Variable name
    pub name: String,
    /// Value at the optimum
    pub final_value: f64,
    /// Variable kind
    pub vartype: VariableType,
}

/// Answer-report row for one constraint
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConstraintAnswer {
    /// Constraint name
    pub name: String,
    /// Binding or non-binding at the optimum
    pub status: ConstraintStatus,
    /// Engine-reported slack
    pub slack: f64,
}

/// Projects a solved model's variable and constraint state into answer tables.
///
/// Read-only over the model; calling any method twice on an unmodified model
/// yields identical rows.
pub struct AnswerReport<'a> {
    model: &'a LpModel,
}

impl<'a> AnswerReport<'a> {
    pub fn new(model: &'a LpModel) -> Self {
        Self { model }
    }

    /// One row per decision variable, in engine order: name, final value,
    /// and the variable type short code
    pub fn decision_variables(&self) -> Result<Vec<VariableAnswer>, ReportError> {
        let solution = self.model.solution()?;
        let rows = self
            .model
            .variables()
            .iter()
            .zip(&solution.values)
            .map(|(variable, &value)| VariableAnswer {
                name: variable.name.clone(),
                final_value: value,
                vartype: variable.vartype,
            })
            .collect();
        Ok(rows)
    }

    /// One row per linear constraint, in engine order: name, binding status,
    /// and slack
    pub fn constraints(&self) -> Result<Vec<ConstraintAnswer>, ReportError> {
        let solution = self.model.solution()?;
        let rows = self
            .model
            .constraints()
            .iter()
            .zip(&solution.slacks)
            .map(|(constraint, &slack)| ConstraintAnswer {
                name: constraint.name.clone(),
                status: ConstraintStatus::from_slack(slack),
                slack,
            })
            .collect();
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lpreport_model::{ConstraintOp, ModelError, SolveStatus, Solution};

    fn solved_model() -> LpModel {
        // Maximize: 3x + 2y
        //   x + y <= 4   (binding at optimum)
        //   x     <= 3   (binding)
        //   y     <= 3   (slack 2)
        // Optimal: x=3, y=1
        let mut model = LpModel::new();
        model.add_variable("x", VariableType::Continuous).unwrap();
        model.add_variable("y", VariableType::Continuous).unwrap();
        model.set_objective(vec![3.0, 2.0], false).unwrap();
        model
            .add_constraint("sum", vec![1.0, 1.0], ConstraintOp::Le, 4.0)
            .unwrap();
        model
            .add_constraint("x_max", vec![1.0, 0.0], ConstraintOp::Le, 3.0)
            .unwrap();
        model
            .add_constraint("y_max", vec![0.0, 1.0], ConstraintOp::Le, 3.0)
            .unwrap();
        model
            .attach_solution(Solution {
                status: SolveStatus::Optimal,
                objective_value: 11.0,
                values: vec![3.0, 1.0],
                reduced_costs: vec![0.0, 0.0],
                dual_values: vec![2.0, 1.0, 0.0],
                slacks: vec![0.0, 0.0, 2.0],
                objective_ranges: Vec::new(),
                rhs_ranges: Vec::new(),
            })
            .unwrap();
        model
    }

    #[test]
    fn test_one_row_per_variable() {
        let model = solved_model();
        let report = AnswerReport::new(&model);

        let rows = report.decision_variables().unwrap();
        assert_eq!(rows.len(), model.num_variables());
        assert_eq!(rows[0].name, "x");
        assert_eq!(rows[0].final_value, 3.0);
        assert_eq!(rows[0].vartype.short_code(), "C");
        assert_eq!(rows[1].name, "y");
        assert_eq!(rows[1].final_value, 1.0);
    }

    #[test]
    fn test_binding_status_is_exact() {
        assert_eq!(ConstraintStatus::from_slack(0.0), ConstraintStatus::Binding);
        assert_eq!(ConstraintStatus::from_slack(2.0), ConstraintStatus::NonBinding);
        assert_eq!(ConstraintStatus::from_slack(-0.5), ConstraintStatus::NonBinding);
        // even a hair of slack counts as non-binding
        assert_eq!(ConstraintStatus::from_slack(1e-12), ConstraintStatus::NonBinding);
    }

    #[test]
    fn test_constraint_rows() {
        let model = solved_model();
        let report = AnswerReport::new(&model);

        let rows = report.constraints().unwrap();
        assert_eq!(rows.len(), model.num_constraints());
        assert_eq!(rows[0].status, ConstraintStatus::Binding);
        assert_eq!(rows[2].status, ConstraintStatus::NonBinding);
        assert_eq!(rows[2].slack, 2.0);
        assert_eq!(rows[2].name, "y_max");
    }

    #[test]
    fn test_unsolved_model_propagates() {
        let mut model = LpModel::new();
        model.add_variable("x", VariableType::Continuous).unwrap();
        let report = AnswerReport::new(&model);

        assert_eq!(
            report.decision_variables().unwrap_err(),
            ReportError::Model(ModelError::NotSolved)
        );
        assert_eq!(
            report.constraints().unwrap_err(),
            ReportError::Model(ModelError::NotSolved)
        );
    }

    #[test]
    fn test_model_grown_after_attach_reports_nothing() {
        // growing the model invalidates the attached solution; the report
        // must fail rather than emit fewer rows than variables
        let mut model = solved_model();
        model.add_variable("z", VariableType::Continuous).unwrap();

        let report = AnswerReport::new(&model);
        assert_eq!(
            report.decision_variables().unwrap_err(),
            ReportError::Model(ModelError::NotSolved)
        );
        assert_eq!(
            report.constraints().unwrap_err(),
            ReportError::Model(ModelError::NotSolved)
        );
    }

    #[test]
    fn test_repeat_calls_are_stable() {
        let model = solved_model();
        let report = AnswerReport::new(&model);

        assert_eq!(
            report.decision_variables().unwrap(),
            report.decision_variables().unwrap()
        );
        assert_eq!(report.constraints().unwrap(), report.constraints().unwrap());
    }
}
