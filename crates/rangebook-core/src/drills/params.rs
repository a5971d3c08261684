//! Drill parameter keys and per-parameter constraints.
//!
//! Every drill schema is a set of `(DrillParam, ParamConstraint)` pairs; the
//! constraint carries the allowed range, the optional step grid, the default,
//! and the locked flag that makes a parameter informational-only when a drill
//! is instantiated.

use std::fmt;

use serde::{Deserialize, Serialize};

#[cfg(feature = "ts")]
use ts_rs::TS;

use super::error::ValidationError;

/// Tolerance for step-grid membership, measured in step units.
/// Form values arrive as f64; fractional steps (e.g. 0.5 s par times) would
/// fail an exact remainder check.
const STEP_EPSILON: f64 = 1e-6;

/// Parameter keys a drill schema may carry.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[cfg_attr(feature = "ts", derive(TS), ts(export))]
#[serde(rename_all = "snake_case")]
pub enum DrillParam {
    /// Target distance in meters.
    Distance,
    /// Rounds fired per string.
    Shots,
    /// Par time in seconds.
    TimeLimit,
    /// Number of strings of fire.
    Strings,
    /// Passing score percentage for scored courses.
    MinScore,
}

impl DrillParam {
    pub const ALL: [DrillParam; 5] = [
        DrillParam::Distance,
        DrillParam::Shots,
        DrillParam::TimeLimit,
        DrillParam::Strings,
        DrillParam::MinScore,
    ];

    /// Parse a snake_case parameter key as it appears in form payloads.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "distance" => Some(DrillParam::Distance),
            "shots" | "rounds" => Some(DrillParam::Shots),
            "time_limit" => Some(DrillParam::TimeLimit),
            "strings" => Some(DrillParam::Strings),
            "min_score" => Some(DrillParam::MinScore),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DrillParam::Distance => "distance",
            DrillParam::Shots => "shots",
            DrillParam::TimeLimit => "time_limit",
            DrillParam::Strings => "strings",
            DrillParam::MinScore => "min_score",
        }
    }

    /// Human-readable label for form fields.
    pub fn label(&self) -> &'static str {
        match self {
            DrillParam::Distance => "Distance",
            DrillParam::Shots => "Shots",
            DrillParam::TimeLimit => "Time limit",
            DrillParam::Strings => "Strings",
            DrillParam::MinScore => "Passing score",
        }
    }

    /// Display unit for the parameter value.
    pub fn unit(&self) -> &'static str {
        match self {
            DrillParam::Distance => "m",
            DrillParam::Shots => "rounds",
            DrillParam::TimeLimit => "s",
            DrillParam::Strings => "strings",
            DrillParam::MinScore => "%",
        }
    }
}

impl fmt::Display for DrillParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Allowed range and edit policy for one drill parameter.
///
/// Invariant: `min <= default_value <= max`, and when a step grid is present
/// all three bounds lie on it, so a clamped override always lands back on the
/// grid. `validate` enforces this for team-edited template copies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(TS), ts(export))]
#[serde(rename_all = "camelCase")]
pub struct ParamConstraint {
    pub min: f64,
    pub max: f64,
    /// Grid the value must land on, measured from `min`. `None` means any
    /// value in range is accepted.
    pub step: Option<f64>,
    /// Locked parameters ignore overrides and always take the default.
    pub locked: bool,
    pub default_value: f64,
}

impl ParamConstraint {
    /// Unlocked constraint with no step grid.
    pub const fn new(min: f64, max: f64, default_value: f64) -> Self {
        Self {
            min,
            max,
            step: None,
            locked: false,
            default_value,
        }
    }

    /// Locked single-value constraint: instances always use `value`.
    pub const fn fixed(value: f64) -> Self {
        Self {
            min: value,
            max: value,
            step: None,
            locked: true,
            default_value: value,
        }
    }

    pub const fn with_step(mut self, step: f64) -> Self {
        self.step = Some(step);
        self
    }

    pub const fn locked(mut self) -> Self {
        self.locked = true;
        self
    }

    /// Clamp a value into `[min, max]`.
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    /// Whether `value` lies on the step grid (always true without a step).
    pub fn on_step_grid(&self, value: f64) -> bool {
        match self.step {
            Some(step) => {
                let offset = (value - self.min) / step;
                (offset - offset.round()).abs() <= STEP_EPSILON
            }
            None => true,
        }
    }

    /// Check the constraint itself. Built-in registry schemas hold this by
    /// construction; team-owned template duplicates are editable and must
    /// revalidate before use.
    pub fn validate(&self, param: DrillParam) -> Result<(), ValidationError> {
        let invalid = |reason: String| ValidationError::InvalidConstraint { param, reason };

        if !self.min.is_finite() || !self.max.is_finite() || !self.default_value.is_finite() {
            return Err(invalid("bounds and default must be finite".to_string()));
        }
        if self.min > self.max {
            return Err(invalid(format!("min {} exceeds max {}", self.min, self.max)));
        }
        if self.default_value < self.min || self.default_value > self.max {
            return Err(invalid(format!(
                "default {} outside [{}, {}]",
                self.default_value, self.min, self.max
            )));
        }
        if let Some(step) = self.step {
            if !step.is_finite() || step <= 0.0 {
                return Err(invalid(format!("step {} must be positive", step)));
            }
            if !self.on_step_grid(self.default_value) {
                return Err(invalid(format!(
                    "default {} is off the step grid",
                    self.default_value
                )));
            }
            if !self.on_step_grid(self.max) {
                return Err(invalid(format!("max {} is off the step grid", self.max)));
            }
        }
        Ok(())
    }
}
