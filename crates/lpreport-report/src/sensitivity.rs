use lpreport_model::LpModel;

use crate::error::ReportError;

/// Element-wise allowable decrease/increase for a list of coefficients or
/// RHS values
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AllowableChanges {
    /// How far each value may drop before the basis changes
    pub decreases: Vec<f64>,
    /// How far each value may rise before the basis changes
    pub increases: Vec<f64>,
}

/// Allowable changes from current values and their (lower, upper)
/// sensitivity bounds, paired by position.
///
/// The two slices must have equal length; a mismatch is an error, never a
/// silent truncation.
pub fn allowable_changes(
    current: &[f64],
    bounds: &[(f64, f64)],
) -> Result<AllowableChanges, ReportError> {
    if current.len() != bounds.len() {
        return Err(ReportError::LengthMismatch {
            values: current.len(),
            bounds: bounds.len(),
        });
    }
    let decreases = current
        .iter()
        .zip(bounds)
        .map(|(value, (lower, _))| value - lower)
        .collect();
    let increases = current
        .iter()
        .zip(bounds)
        .map(|(value, (_, upper))| upper - value)
        .collect();
    Ok(AllowableChanges { decreases, increases })
}

/// Sensitivity-report row for one decision variable
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VariableSensitivity {
    /// Variable name
    pub name: String,
    /// Value at the optimum
    pub final_value: f64,
    /// Reduced cost
    pub reduced_cost: f64,
    /// Current objective coefficient
    pub objective_coefficient: f64,
    /// How far the coefficient may rise while the basis stays optimal
    pub allowable_increase: f64,
    /// How far the coefficient may drop while the basis stays optimal
    pub allowable_decrease: f64,
}

/// Sensitivity-report row for one constraint
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConstraintSensitivity {
    /// Constraint name
    pub name: String,
    /// Achieved left-hand side value (RHS minus slack)
    pub final_value: f64,
    /// Shadow price (dual value)
    pub shadow_price: f64,
    /// Current right-hand side
    pub rhs: f64,
    /// How far the RHS may rise while the basis stays optimal
    pub allowable_increase: f64,
    /// How far the RHS may drop while the basis stays optimal
    pub allowable_decrease: f64,
}

/// Projects solved-model sensitivity data into report tables.
///
/// Engine-reported sensitivity ranges carry names, and every range used here
/// is joined against the model by name rather than by position, so a range
/// list the engine reordered still lands on the right row.
pub struct SensitivityReport<'a> {
    model: &'a LpModel,
}

impl<'a> SensitivityReport<'a> {
    pub fn new(model: &'a LpModel) -> Self {
        Self { model }
    }

    /// One row per decision variable: final value, reduced cost, objective
    /// coefficient, and the allowable coefficient changes
    pub fn decision_variables(&self) -> Result<Vec<VariableSensitivity>, ReportError> {
        let solution = self.model.solution()?;

        let mut coefficients = Vec::with_capacity(self.model.num_variables());
        let mut bounds = Vec::with_capacity(self.model.num_variables());
        for variable in self.model.variables() {
            let coefficient = self
                .model
                .objective_coefficient(&variable.name)
                .ok_or_else(|| ReportError::MissingCoefficient(variable.name.clone()))?;
            let range = solution.objective_range(&variable.name).ok_or_else(|| {
                ReportError::MissingRange {
                    kind: "objective",
                    name: variable.name.clone(),
                }
            })?;
            coefficients.push(coefficient);
            bounds.push((range.lower, range.upper));
        }
        let changes = allowable_changes(&coefficients, &bounds)?;

        let rows = self
            .model
            .variables()
            .iter()
            .enumerate()
            .map(|(i, variable)| VariableSensitivity {
                name: variable.name.clone(),
                final_value: solution.values[i],
                reduced_cost: solution.reduced_costs[i],
                objective_coefficient: coefficients[i],
                allowable_increase: changes.increases[i],
                allowable_decrease: changes.decreases[i],
            })
            .collect();
        Ok(rows)
    }

    /// One row per constraint: final value (RHS minus slack), shadow price,
    /// RHS, and the allowable RHS changes
    pub fn constraints(&self) -> Result<Vec<ConstraintSensitivity>, ReportError> {
        let solution = self.model.solution()?;

        let mut rhs_values = Vec::with_capacity(self.model.num_constraints());
        let mut bounds = Vec::with_capacity(self.model.num_constraints());
        for constraint in self.model.constraints() {
            let range = solution.rhs_range(&constraint.name).ok_or_else(|| {
                ReportError::MissingRange {
                    kind: "RHS",
                    name: constraint.name.clone(),
                }
            })?;
            rhs_values.push(constraint.rhs);
            bounds.push((range.lower, range.upper));
        }
        let changes = allowable_changes(&rhs_values, &bounds)?;

        let rows = self
            .model
            .constraints()
            .iter()
            .enumerate()
            .map(|(i, constraint)| ConstraintSensitivity {
                name: constraint.name.clone(),
                final_value: constraint.rhs - solution.slacks[i],
                shadow_price: solution.dual_values[i],
                rhs: constraint.rhs,
                allowable_increase: changes.increases[i],
                allowable_decrease: changes.decreases[i],
            })
            .collect();
        Ok(rows)
    }
}
