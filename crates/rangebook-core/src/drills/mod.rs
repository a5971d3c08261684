//! Drill types, templates and instance configuration.
//!
//! This module contains the drill side of the domain:
//!
//! - `DrillType`, `DrillTypeDefinition`: the static catalog of drill types
//! - `DrillParam`, `ParamConstraint`: parameter schema with ranges, steps
//!   and lock flags
//! - `DrillTemplate`: library entries and team-owned duplicates
//! - `DrillInstanceConfig`: merged parameter values for one session
//! - `UnknownDrillType`, `ValidationError`: the failures the merge and the
//!   registry lookup can surface

pub mod error;
pub mod instance;
pub mod params;
pub mod registry;
pub mod template;

pub use error::{UnknownDrillType, ValidationError};
pub use instance::{merge_json_overrides, merge_overrides, DrillInstanceConfig};
pub use params::{DrillParam, ParamConstraint};
pub use registry::{definition, drill_type, drill_types, DrillType, DrillTypeDefinition};
pub use template::DrillTemplate;
