//! The capability record the UI renders from.

use serde::{Deserialize, Serialize};

#[cfg(feature = "ts")]
use ts_rs::TS;

/// Named capability flags derived from role data.
///
/// Derived, never stored: a set is recomputed from the source roles on every
/// access and discarded after the render or query that asked for it, so it
/// can never go stale relative to the role it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(TS), ts(export))]
pub struct PermissionSet {
    #[serde(rename = "canManageOrg")]
    pub can_manage_org: bool,
    #[serde(rename = "canInviteMembers")]
    pub can_invite_members: bool,
    #[serde(rename = "canManageMembers")]
    pub can_manage_members: bool,
    #[serde(rename = "canCreateTraining")]
    pub can_create_training: bool,
    #[serde(rename = "canDeleteTraining")]
    pub can_delete_training: bool,
    #[serde(rename = "canViewAllAnalytics")]
    pub can_view_all_analytics: bool,
    #[serde(rename = "canExportAnalytics")]
    pub can_export_analytics: bool,
}

impl PermissionSet {
    /// The all-false set, handed out whenever no role is present.
    pub fn none() -> Self {
        Self::default()
    }

    /// True if any capability is granted. Screens use this to decide whether
    /// to show management entry points at all.
    pub fn any(&self) -> bool {
        self.can_manage_org
            || self.can_invite_members
            || self.can_manage_members
            || self.can_create_training
            || self.can_delete_training
            || self.can_view_all_analytics
            || self.can_export_analytics
    }

    /// Field-wise union. A user acting under two scopes holds a capability
    /// when either scope grants it.
    pub fn union(&self, other: &PermissionSet) -> PermissionSet {
        PermissionSet {
            can_manage_org: self.can_manage_org || other.can_manage_org,
            can_invite_members: self.can_invite_members || other.can_invite_members,
            can_manage_members: self.can_manage_members || other.can_manage_members,
            can_create_training: self.can_create_training || other.can_create_training,
            can_delete_training: self.can_delete_training || other.can_delete_training,
            can_view_all_analytics: self.can_view_all_analytics || other.can_view_all_analytics,
            can_export_analytics: self.can_export_analytics || other.can_export_analytics,
        }
    }
}
