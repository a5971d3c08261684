//! Drill instance configuration.
//!
//! An instance is one concrete set of parameter values attached to a training
//! session, produced by merging a template's defaults with user overrides.
//! Merge rules:
//!
//! - locked parameter: the proposed value is discarded and the default
//!   retained (informational-only fields in the UI, not a validation failure);
//! - unlocked parameter: out-of-range values clamp to `[min, max]`;
//!   non-finite values and values off the step grid are rejected;
//! - absent parameters take the template default;
//! - parameters the template schema does not know are rejected.
//!
//! The merge is deterministic and idempotent: feeding a config's own values
//! back through the same template is a no-op.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

#[cfg(feature = "ts")]
use ts_rs::TS;

use super::error::ValidationError;
use super::params::DrillParam;
use super::registry::DrillType;
use super::template::DrillTemplate;

/// Fully resolved parameter values for one drill within a session. Every
/// schema parameter of the source template is present. Immutable once a
/// session has started (enforced by the UI layer).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(TS), ts(export))]
pub struct DrillInstanceConfig {
    #[serde(rename = "templateId")]
    pub template_id: String,
    #[serde(rename = "drillType")]
    pub drill_type: DrillType,
    pub values: BTreeMap<DrillParam, f64>,
}

impl DrillInstanceConfig {
    pub fn value(&self, param: DrillParam) -> Option<f64> {
        self.values.get(&param).copied()
    }
}

/// Merge a template's defaults with proposed override values.
///
/// The template is checked first so a team-edited duplicate with a broken
/// constraint fails loudly instead of producing a nonsense clamp.
pub fn merge_overrides(
    template: &DrillTemplate,
    overrides: &BTreeMap<DrillParam, f64>,
) -> Result<DrillInstanceConfig, ValidationError> {
    template.validate()?;

    for param in overrides.keys() {
        if !template.params.contains_key(param) {
            return Err(ValidationError::UnknownParameter {
                param: param.as_str().to_string(),
            });
        }
    }

    let mut values = BTreeMap::new();
    for (param, constraint) in &template.params {
        let resolved = match overrides.get(param) {
            None => constraint.default_value,
            Some(&proposed) if constraint.locked => {
                debug!(
                    param = %param,
                    proposed,
                    retained = constraint.default_value,
                    "discarding override for locked parameter"
                );
                constraint.default_value
            }
            Some(&proposed) => {
                if !proposed.is_finite() {
                    return Err(ValidationError::NotFinite { param: *param });
                }
                if let Some(step) = constraint.step {
                    // Step membership is checked on the proposed value, so an
                    // off-grid entry is rejected even when clamping would have
                    // landed it on a grid point.
                    if !constraint.on_step_grid(proposed) {
                        return Err(ValidationError::StepViolation {
                            param: *param,
                            value: proposed,
                            step,
                            min: constraint.min,
                        });
                    }
                }
                constraint.clamp(proposed)
            }
        };
        values.insert(*param, resolved);
    }

    Ok(DrillInstanceConfig {
        template_id: template.id.clone(),
        drill_type: template.drill_type,
        values,
    })
}

/// Merge overrides arriving as a JSON object from a form or the backend.
///
/// Keys are parameter ids; values may be JSON numbers or numeric strings
/// (form fields frequently deliver numbers as strings). Anything else fails
/// with a [`ValidationError`] naming the offending field.
pub fn merge_json_overrides(
    template: &DrillTemplate,
    overrides: &Map<String, Value>,
) -> Result<DrillInstanceConfig, ValidationError> {
    let mut typed = BTreeMap::new();
    for (key, value) in overrides {
        let param = match DrillParam::parse(key) {
            Some(p) => p,
            None => {
                return Err(ValidationError::UnknownParameter { param: key.clone() });
            }
        };
        typed.insert(param, numeric_value(param, value)?);
    }
    merge_overrides(template, &typed)
}

fn numeric_value(param: DrillParam, value: &Value) -> Result<f64, ValidationError> {
    match value {
        Value::Number(n) => n.as_f64().ok_or_else(|| ValidationError::NonNumeric {
            param,
            value: n.to_string(),
        }),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| ValidationError::NonNumeric {
                param,
                value: s.clone(),
            }),
        other => Err(ValidationError::NonNumeric {
            param,
            value: other.to_string(),
        }),
    }
}
