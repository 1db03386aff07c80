mod answer;
mod error;
mod sensitivity;

pub mod render;

pub use answer::{AnswerReport, ConstraintAnswer, ConstraintStatus, VariableAnswer};
pub use error::ReportError;
pub use sensitivity::{
    allowable_changes, AllowableChanges, ConstraintSensitivity, SensitivityReport,
    VariableSensitivity,
};
