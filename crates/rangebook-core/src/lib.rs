//! Core library for rangebook - range-training domain rules.
//!
//! Everything here is pure, synchronous rule evaluation over in-memory
//! values: no I/O, no shared state, safe to call from any number of threads.
//! The surrounding app fetches role rows and persists drill configs; this
//! crate decides what those values mean:
//!
//! - `roles`: the ordered role axes and the provider-string boundary
//! - `permissions`: capability derivation from role data
//! - `drills`: the drill type catalog, templates, and the override merge
//! - `models`: backend-shaped membership and training rows
//! - `utils`: display formatting helpers

pub mod drills;
pub mod models;
pub mod permissions;
pub mod roles;
pub mod utils;

pub use drills::{
    DrillInstanceConfig, DrillParam, DrillTemplate, DrillType, ParamConstraint, UnknownDrillType,
    ValidationError,
};
pub use permissions::{MembershipSnapshot, PermissionSet};
pub use roles::{OrgRole, TeamRole};
