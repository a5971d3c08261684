//! Role hierarchies for the organization and team axes.
//!
//! Both axes are strict total orders: a higher role implicitly holds every
//! privilege of the roles below it. Comparison goes through `rank`, and the
//! derived `Ord` agrees with it because the discriminants are declared in
//! rank order.
//!
//! These enums never see raw provider strings. The string boundary lives in
//! [`crate::roles::normalize`]; everything here is pure lookup.

use std::fmt;

use serde::{Deserialize, Serialize};

#[cfg(feature = "ts")]
use ts_rs::TS;

/// Role held within an organization.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[cfg_attr(feature = "ts", derive(TS), ts(export))]
#[serde(rename_all = "snake_case")]
pub enum OrgRole {
    Soldier = 0,
    SquadCommander = 1,
    TeamCommander = 2,
    UnitCommander = 3,
}

impl OrgRole {
    pub const ALL: [OrgRole; 4] = [
        OrgRole::Soldier,
        OrgRole::SquadCommander,
        OrgRole::TeamCommander,
        OrgRole::UnitCommander,
    ];

    /// Total order index, higher = more privileged.
    pub fn rank(&self) -> u8 {
        *self as u8
    }

    pub fn at_least(&self, threshold: OrgRole) -> bool {
        self.rank() >= threshold.rank()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OrgRole::Soldier => "soldier",
            OrgRole::SquadCommander => "squad_commander",
            OrgRole::TeamCommander => "team_commander",
            OrgRole::UnitCommander => "unit_commander",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrgRole::Soldier => "Soldier",
            OrgRole::SquadCommander => "Squad Commander",
            OrgRole::TeamCommander => "Team Commander",
            OrgRole::UnitCommander => "Unit Commander",
        }
    }
}

impl fmt::Display for OrgRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Role held within a team. The team axis uses its own naming for the upper
/// tiers (`owner`, `commander`) but the same total-order semantics.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[cfg_attr(feature = "ts", derive(TS), ts(export))]
#[serde(rename_all = "snake_case")]
pub enum TeamRole {
    Soldier = 0,
    SquadCommander = 1,
    Commander = 2,
    Owner = 3,
}

impl TeamRole {
    pub const ALL: [TeamRole; 4] = [
        TeamRole::Soldier,
        TeamRole::SquadCommander,
        TeamRole::Commander,
        TeamRole::Owner,
    ];

    /// Total order index, higher = more privileged.
    pub fn rank(&self) -> u8 {
        *self as u8
    }

    pub fn at_least(&self, threshold: TeamRole) -> bool {
        self.rank() >= threshold.rank()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TeamRole::Soldier => "soldier",
            TeamRole::SquadCommander => "squad_commander",
            TeamRole::Commander => "commander",
            TeamRole::Owner => "owner",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TeamRole::Soldier => "Soldier",
            TeamRole::SquadCommander => "Squad Commander",
            TeamRole::Commander => "Commander",
            TeamRole::Owner => "Owner",
        }
    }
}

impl fmt::Display for TeamRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_soldier_is_lower_bound() {
        for role in OrgRole::ALL {
            assert!(role.rank() >= OrgRole::Soldier.rank());
        }
        for role in TeamRole::ALL {
            assert!(role.rank() >= TeamRole::Soldier.rank());
        }
    }

    #[test]
    fn test_org_ranks_ascend() {
        assert!(OrgRole::Soldier < OrgRole::SquadCommander);
        assert!(OrgRole::SquadCommander < OrgRole::TeamCommander);
        assert!(OrgRole::TeamCommander < OrgRole::UnitCommander);
    }

    #[test]
    fn test_team_ranks_ascend() {
        assert!(TeamRole::Soldier < TeamRole::SquadCommander);
        assert!(TeamRole::SquadCommander < TeamRole::Commander);
        assert!(TeamRole::Commander < TeamRole::Owner);
    }

    #[test]
    fn test_ord_agrees_with_rank() {
        for a in OrgRole::ALL {
            for b in OrgRole::ALL {
                assert_eq!(a.cmp(&b), a.rank().cmp(&b.rank()));
            }
        }
        for a in TeamRole::ALL {
            for b in TeamRole::ALL {
                assert_eq!(a.cmp(&b), a.rank().cmp(&b.rank()));
            }
        }
    }

    #[test]
    fn test_at_least() {
        assert!(OrgRole::UnitCommander.at_least(OrgRole::SquadCommander));
        assert!(OrgRole::SquadCommander.at_least(OrgRole::SquadCommander));
        assert!(!OrgRole::Soldier.at_least(OrgRole::SquadCommander));

        assert!(TeamRole::Owner.at_least(TeamRole::Commander));
        assert!(!TeamRole::SquadCommander.at_least(TeamRole::Commander));
    }

    #[test]
    fn test_display() {
        assert_eq!(OrgRole::UnitCommander.to_string(), "unit_commander");
        assert_eq!(OrgRole::UnitCommander.label(), "Unit Commander");
        assert_eq!(TeamRole::Owner.to_string(), "owner");
    }
}
