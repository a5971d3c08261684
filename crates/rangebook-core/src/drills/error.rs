use thiserror::Error;

use super::params::DrillParam;

/// Requested drill type id does not exist in the registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown drill type: {0}")]
pub struct UnknownDrillType(pub String);

/// A proposed parameter value (or an edited constraint) that cannot be merged
/// into a drill instance. Propagates to the form-submission handler, which
/// owns the user-visible message.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Parameter {param} expects a number, got {value}")]
    NonNumeric { param: DrillParam, value: String },

    #[error("Parameter {param} must be a finite number")]
    NotFinite { param: DrillParam },

    #[error("Parameter {param} value {value} is off the step grid ({step} from {min})")]
    StepViolation {
        param: DrillParam,
        value: f64,
        step: f64,
        min: f64,
    },

    #[error("Parameter {param} is not part of this drill's schema")]
    UnknownParameter { param: String },

    #[error("Invalid constraint for {param}: {reason}")]
    InvalidConstraint { param: DrillParam, reason: String },
}
