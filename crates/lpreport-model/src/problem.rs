/// The kind of a decision variable, as reported by the solver engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VariableType {
    /// Continuous (real-valued) variable
    Continuous,
    /// General integer variable
    Integer,
    /// 0/1 variable
    Binary,
}

impl VariableType {
    /// The one-letter code engines print in reports ("C", "I", "B")
    pub fn short_code(&self) -> &'static str {
        match self {
            VariableType::Continuous => "C",
            VariableType::Integer => "I",
            VariableType::Binary => "B",
        }
    }
}

/// A decision variable in the model
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Variable {
    /// Name/label for the variable
    pub name: String,
    /// Variable kind
    pub vartype: VariableType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConstraintOp {
    /// Less than or equal (<=)
    Le,
    /// Greater than or equal (>=)
    Ge,
    /// Equal (=)
    Eq,
}

/// A linear constraint over the model's variables
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinearConstraint {
    /// Name/label for the constraint
    pub name: String,
    /// Coefficients for each variable, in variable order
    pub coefficients: Vec<f64>,
    /// Comparison operator
    pub op: ConstraintOp,
    /// Right-hand side value
    pub rhs: f64,
}

/// The linear objective function
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Objective {
    /// Coefficients for each variable, in variable order
    pub coefficients: Vec<f64>,
    /// Whether to minimize or maximize
    pub minimize: bool,
}
