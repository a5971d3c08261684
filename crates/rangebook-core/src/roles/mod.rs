//! Role hierarchies and the provider-string boundary.
//!
//! - `OrgRole`, `TeamRole`: the two ordered role axes
//! - `RoleClaim`, `UnknownRole`: parsing of provider role strings
//!
//! Raw strings are normalized once, at the boundary; the rest of the crate
//! works with the closed enums only.

pub mod hierarchy;
pub mod normalize;

pub use hierarchy::{OrgRole, TeamRole};
pub use normalize::{RoleClaim, UnknownRole};
