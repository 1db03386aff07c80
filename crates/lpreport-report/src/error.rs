use lpreport_model::ModelError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReportError {
    #[error(transparent)]
    Model(#[from] ModelError),
    #[error("length mismatch: {values} current values vs {bounds} sensitivity bounds")]
    LengthMismatch { values: usize, bounds: usize },
    #[error("engine reported no {kind} sensitivity range for '{name}'")]
    MissingRange { kind: &'static str, name: String },
    #[error("objective has no coefficient for variable '{0}'")]
    MissingCoefficient(String),
}
