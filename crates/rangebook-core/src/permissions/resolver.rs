//! Permission derivation from role data.
//!
//! Every capability is an independent `at_least` check against a named
//! threshold role, so a higher rank always holds a superset of the
//! capabilities of a lower one. Derivation is total: absent roles and
//! unrecognized spellings degrade to the all-false set instead of erroring,
//! because the calling screen cannot usefully recover mid-render.

use serde::{Deserialize, Serialize};

#[cfg(feature = "ts")]
use ts_rs::TS;

use super::set::PermissionSet;
use crate::roles::{OrgRole, TeamRole};

/// Read-only snapshot of one user's membership roles, captured by the caller
/// at derivation time. Passed in explicitly so the rule evaluation stays
/// independent of whatever state container the app keeps role data in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(TS), ts(export))]
pub struct MembershipSnapshot {
    #[serde(rename = "orgRole")]
    pub org_role: Option<OrgRole>,
    #[serde(rename = "teamRole")]
    pub team_role: Option<TeamRole>,
}

impl MembershipSnapshot {
    pub fn new(org_role: Option<OrgRole>, team_role: Option<TeamRole>) -> Self {
        MembershipSnapshot { org_role, team_role }
    }
}

impl PermissionSet {
    /// Capabilities granted by an organization role.
    pub fn for_org_role(role: Option<OrgRole>) -> PermissionSet {
        let role = match role {
            Some(role) => role,
            None => return PermissionSet::none(),
        };
        PermissionSet {
            can_manage_org: role.at_least(OrgRole::UnitCommander),
            can_invite_members: role.at_least(OrgRole::TeamCommander),
            can_manage_members: role.at_least(OrgRole::TeamCommander),
            can_create_training: role.at_least(OrgRole::SquadCommander),
            can_delete_training: role.at_least(OrgRole::TeamCommander),
            can_view_all_analytics: role.at_least(OrgRole::SquadCommander),
            can_export_analytics: role.at_least(OrgRole::TeamCommander),
        }
    }

    /// Capabilities granted by a team role. Mirrors the organization axis
    /// with the team names for each tier; org-wide management stays reserved
    /// for the team owner.
    pub fn for_team_role(role: Option<TeamRole>) -> PermissionSet {
        let role = match role {
            Some(role) => role,
            None => return PermissionSet::none(),
        };
        PermissionSet {
            can_manage_org: role.at_least(TeamRole::Owner),
            can_invite_members: role.at_least(TeamRole::Commander),
            can_manage_members: role.at_least(TeamRole::Commander),
            can_create_training: role.at_least(TeamRole::SquadCommander),
            can_delete_training: role.at_least(TeamRole::Commander),
            can_view_all_analytics: role.at_least(TeamRole::SquadCommander),
            can_export_analytics: role.at_least(TeamRole::Commander),
        }
    }

    /// Capabilities for a full membership snapshot: the union of what each
    /// axis grants on its own.
    pub fn for_membership(snapshot: &MembershipSnapshot) -> PermissionSet {
        PermissionSet::for_org_role(snapshot.org_role)
            .union(&PermissionSet::for_team_role(snapshot.team_role))
    }
}

/// Derive permissions straight from a provider role string, normalizing
/// first. Total: `None` and unknown spellings both yield safe defaults.
pub fn resolve_org_permissions(role: Option<&str>) -> PermissionSet {
    PermissionSet::for_org_role(role.map(OrgRole::normalize))
}

/// Team-axis counterpart of [`resolve_org_permissions`].
pub fn resolve_team_permissions(role: Option<&str>) -> PermissionSet {
    PermissionSet::for_team_role(role.map(TeamRole::normalize))
}
