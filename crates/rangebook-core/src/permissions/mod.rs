//! Permission derivation.
//!
//! - `PermissionSet`: the named capability flags screens render from
//! - `MembershipSnapshot`: injected role snapshot the resolver consumes
//! - `resolve_org_permissions`, `resolve_team_permissions`: string-boundary
//!   conveniences that normalize before deriving

pub mod resolver;
pub mod set;

pub use resolver::{resolve_org_permissions, resolve_team_permissions, MembershipSnapshot};
pub use set::PermissionSet;
