//! Drill templates.
//!
//! A template is a named drill definition: a drill type plus a parameter
//! schema with defaults, ranges and per-parameter lock flags. Library
//! templates mirror the registry catalog and are read-only; a team can
//! duplicate one and edit its own copy, so edited copies are revalidated
//! before they are persisted.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[cfg(feature = "ts")]
use ts_rs::TS;

use super::error::ValidationError;
use super::params::{DrillParam, ParamConstraint};
use super::registry::{self, DrillType};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(TS), ts(export))]
pub struct DrillTemplate {
    pub id: String,
    #[serde(rename = "drillType")]
    pub drill_type: DrillType,
    pub name: String,
    /// `None` for read-only library entries, the owning team for duplicates.
    #[serde(rename = "teamGuid")]
    pub team_guid: Option<String>,
    pub params: BTreeMap<DrillParam, ParamConstraint>,
}

impl DrillTemplate {
    /// Library template for a drill type, taken straight from the registry
    /// catalog.
    pub fn builtin(ty: DrillType) -> Self {
        let def = registry::definition(ty);
        DrillTemplate {
            id: format!("library:{}", ty.as_str()),
            drill_type: ty,
            name: def.name.clone(),
            team_guid: None,
            params: def.params.clone(),
        }
    }

    /// Team-owned copy of this template. The backend issues the new row id;
    /// the copy starts identical and becomes independently editable.
    pub fn duplicate_for_team(&self, id: impl Into<String>, team_guid: impl Into<String>) -> Self {
        DrillTemplate {
            id: id.into(),
            drill_type: self.drill_type,
            name: self.name.clone(),
            team_guid: Some(team_guid.into()),
            params: self.params.clone(),
        }
    }

    pub fn is_builtin(&self) -> bool {
        self.team_guid.is_none()
    }

    pub fn is_team_owned(&self) -> bool {
        self.team_guid.is_some()
    }

    pub fn constraint(&self, param: DrillParam) -> Option<&ParamConstraint> {
        self.params.get(&param)
    }

    /// Default value per schema parameter, in schema order.
    pub fn defaults(&self) -> BTreeMap<DrillParam, f64> {
        self.params
            .iter()
            .map(|(param, c)| (*param, c.default_value))
            .collect()
    }

    /// Check every constraint in the schema. Team-edited duplicates arrive
    /// from persistence and must pass this before they are merged against.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (param, constraint) in &self.params {
            constraint.validate(*param)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_matches_registry() {
        let template = DrillTemplate::builtin(DrillType::Grouping);
        assert_eq!(template.name, "5-Shot Grouping");
        assert_eq!(template.drill_type, DrillType::Grouping);
        assert!(template.is_builtin());
        assert_eq!(
            template.constraint(DrillParam::Shots),
            registry::definition(DrillType::Grouping).constraint(DrillParam::Shots)
        );
        assert!(template.validate().is_ok());
    }

    #[test]
    fn test_duplicate_for_team() {
        let library = DrillTemplate::builtin(DrillType::Zeroing);
        let copy = library.duplicate_for_team("tmpl-291", "team-a1");

        assert_eq!(copy.id, "tmpl-291");
        assert_eq!(copy.team_guid.as_deref(), Some("team-a1"));
        assert!(copy.is_team_owned());
        assert!(!copy.is_builtin());
        assert_eq!(copy.params, library.params);
        assert!(library.is_builtin());
    }

    #[test]
    fn test_validate_catches_bad_edit() {
        let mut copy =
            DrillTemplate::builtin(DrillType::Zeroing).duplicate_for_team("tmpl-292", "team-a1");
        // A team edit that pushes the default above the range.
        copy.params.insert(
            DrillParam::Distance,
            ParamConstraint::new(25.0, 100.0, 400.0),
        );

        match copy.validate() {
            Err(ValidationError::InvalidConstraint { param, .. }) => {
                assert_eq!(param, DrillParam::Distance);
            }
            other => panic!("expected InvalidConstraint, got {other:?}"),
        }
    }

    #[test]
    fn test_defaults() {
        let template = DrillTemplate::builtin(DrillType::Timed);
        let defaults = template.defaults();
        assert_eq!(defaults.len(), template.params.len());
        assert_eq!(defaults.get(&DrillParam::TimeLimit), Some(&20.0));
        assert_eq!(defaults.get(&DrillParam::Shots), Some(&10.0));
    }
}
