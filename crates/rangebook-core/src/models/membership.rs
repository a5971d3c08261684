//! Membership rows from the backend roster queries.
//!
//! Role values arrive as raw provider strings and are normalized here, at
//! the boundary, into the closed role enums the resolver consumes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "ts")]
use ts_rs::TS;

use crate::permissions::MembershipSnapshot;
use crate::roles::{OrgRole, TeamRole};

/// One user's membership in an organization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(TS), ts(export))]
pub struct OrgMemberRow {
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "organizationGuid")]
    pub organization_guid: String,
    /// Raw provider role string, e.g. `"org:squad_commander"`.
    pub role: Option<String>,
    #[serde(rename = "firstName")]
    pub first_name: Option<String>,
    #[serde(rename = "lastName")]
    pub last_name: Option<String>,
    #[serde(rename = "displayName")]
    pub display_name: Option<String>,
    #[serde(rename = "joinedAt")]
    pub joined_at: Option<DateTime<Utc>>,
}

impl OrgMemberRow {
    pub fn full_name(&self) -> String {
        if let Some(name) = self.display_name.as_deref().filter(|n| !n.is_empty()) {
            return name.to_string();
        }
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("{} {}", first, last),
            (Some(first), None) => first.clone(),
            (None, Some(last)) => last.clone(),
            (None, None) => self.user_id.clone(),
        }
    }

    /// Normalized organization role. A missing role field stays missing; an
    /// unrecognized spelling degrades to `Soldier`.
    pub fn org_role(&self) -> Option<OrgRole> {
        self.role.as_deref().map(OrgRole::normalize)
    }

    pub fn role_display(&self) -> Option<&'static str> {
        self.org_role().map(|role| role.label())
    }
}

/// One user's membership in a team.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(TS), ts(export))]
pub struct TeamMemberRow {
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "teamGuid")]
    pub team_guid: String,
    #[serde(rename = "teamName")]
    pub team_name: Option<String>,
    pub role: Option<String>,
    #[serde(rename = "joinedAt")]
    pub joined_at: Option<DateTime<Utc>>,
}

impl TeamMemberRow {
    /// Normalized team role, same degradation rules as
    /// [`OrgMemberRow::org_role`].
    pub fn team_role(&self) -> Option<TeamRole> {
        self.role.as_deref().map(TeamRole::normalize)
    }

    pub fn role_display(&self) -> Option<&'static str> {
        self.team_role().map(|role| role.label())
    }
}

impl MembershipSnapshot {
    /// Snapshot for the permission resolver from whichever rows the caller
    /// holds. A missing row or missing role field contributes no role on
    /// that axis.
    pub fn from_rows(org: Option<&OrgMemberRow>, team: Option<&TeamMemberRow>) -> Self {
        MembershipSnapshot {
            org_role: org.and_then(|row| row.org_role()),
            team_role: team.and_then(|row| row.team_role()),
        }
    }
}
