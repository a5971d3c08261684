//! String boundary for role values.
//!
//! The identity provider delivers roles in several shapes: bare names
//! (`"commander"`), scope-prefixed claims (`"org:squad_commander"`), mixed
//! case, hyphenated spellings, and the occasional legacy alias. Everything
//! string-shaped is handled here, so the hierarchy enums themselves never
//! branch on provider formats.
//!
//! Parsing comes in two strengths:
//!
//! - strict (`FromStr`): unknown spellings are an error, for callers that
//!   want to surface bad data;
//! - lenient (`normalize`): unknown spellings degrade to `Soldier` with a
//!   warning. An unrecognized role must never be granted privilege, so the
//!   fail-safe direction is always downward.

use std::str::FromStr;

use thiserror::Error;
use tracing::warn;

use super::hierarchy::{OrgRole, TeamRole};

/// A role string that matches no known spelling on the requested axis.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown role: {0}")]
pub struct UnknownRole(pub String);

/// Canonical form: trimmed, lowercased, scope prefix stripped, separators
/// normalized to underscores.
fn canonical(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    let stripped = ["org:", "team:", "role:"]
        .iter()
        .find_map(|prefix| lowered.strip_prefix(prefix))
        .unwrap_or(&lowered);
    stripped.trim().replace(['-', ' '], "_")
}

impl FromStr for OrgRole {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match canonical(s).as_str() {
            "soldier" | "member" => Ok(OrgRole::Soldier),
            "squad_commander" | "squad_leader" => Ok(OrgRole::SquadCommander),
            "team_commander" | "team_leader" => Ok(OrgRole::TeamCommander),
            "unit_commander" | "unit_leader" => Ok(OrgRole::UnitCommander),
            _ => Err(UnknownRole(s.to_string())),
        }
    }
}

impl FromStr for TeamRole {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match canonical(s).as_str() {
            "soldier" | "member" => Ok(TeamRole::Soldier),
            "squad_commander" | "squad_leader" => Ok(TeamRole::SquadCommander),
            "commander" | "team_commander" => Ok(TeamRole::Commander),
            "owner" => Ok(TeamRole::Owner),
            _ => Err(UnknownRole(s.to_string())),
        }
    }
}

impl OrgRole {
    /// Lenient parse. Unknown spellings degrade to `Soldier`.
    pub fn normalize(raw: &str) -> OrgRole {
        match raw.parse() {
            Ok(role) => role,
            Err(_) => {
                warn!(role = %raw, "unrecognized org role, defaulting to soldier");
                OrgRole::Soldier
            }
        }
    }
}

impl TeamRole {
    /// Lenient parse. Unknown spellings degrade to `Soldier`.
    pub fn normalize(raw: &str) -> TeamRole {
        match raw.parse() {
            Ok(role) => role,
            Err(_) => {
                warn!(role = %raw, "unrecognized team role, defaulting to soldier");
                TeamRole::Soldier
            }
        }
    }
}

/// A single role claim as delivered by the provider, resolved onto its axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleClaim {
    Org(OrgRole),
    Team(TeamRole),
}

impl RoleClaim {
    /// Resolve a claim string. An explicit `org:`/`team:` prefix selects the
    /// axis; bare names are tried against the organization axis first, then
    /// the team axis. Returns `None` when neither axis recognizes the role.
    pub fn parse(raw: &str) -> Option<RoleClaim> {
        let lowered = raw.trim().to_lowercase();
        if let Some(rest) = lowered.strip_prefix("org:") {
            return rest.parse::<OrgRole>().ok().map(RoleClaim::Org);
        }
        if let Some(rest) = lowered.strip_prefix("team:") {
            return rest.parse::<TeamRole>().ok().map(RoleClaim::Team);
        }
        if let Ok(role) = lowered.parse::<OrgRole>() {
            return Some(RoleClaim::Org(role));
        }
        lowered.parse::<TeamRole>().ok().map(RoleClaim::Team)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_parse() {
        assert_eq!("unit_commander".parse::<OrgRole>(), Ok(OrgRole::UnitCommander));
        assert_eq!("owner".parse::<TeamRole>(), Ok(TeamRole::Owner));
        assert_eq!(
            "general".parse::<OrgRole>(),
            Err(UnknownRole("general".to_string()))
        );
    }

    #[test]
    fn test_parse_tolerates_provider_shapes() {
        assert_eq!("Org:Squad-Commander".parse::<OrgRole>(), Ok(OrgRole::SquadCommander));
        assert_eq!(" TEAM_COMMANDER ".parse::<OrgRole>(), Ok(OrgRole::TeamCommander));
        assert_eq!("role:owner".parse::<TeamRole>(), Ok(TeamRole::Owner));
        assert_eq!("Squad Commander".parse::<TeamRole>(), Ok(TeamRole::SquadCommander));
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!("squad_leader".parse::<OrgRole>(), Ok(OrgRole::SquadCommander));
        assert_eq!("member".parse::<OrgRole>(), Ok(OrgRole::Soldier));
        // On the team axis the middle tier answers to either spelling.
        assert_eq!("team_commander".parse::<TeamRole>(), Ok(TeamRole::Commander));
        assert_eq!("member".parse::<TeamRole>(), Ok(TeamRole::Soldier));
    }

    #[test]
    fn test_normalize_falls_back_to_soldier() {
        assert_eq!(OrgRole::normalize("platoon_sergeant"), OrgRole::Soldier);
        assert_eq!(OrgRole::normalize(""), OrgRole::Soldier);
        assert_eq!(TeamRole::normalize("wizard"), TeamRole::Soldier);
        assert_eq!(TeamRole::normalize("owner"), TeamRole::Owner);
    }

    #[test]
    fn test_role_claim_parse() {
        assert_eq!(
            RoleClaim::parse("org:unit_commander"),
            Some(RoleClaim::Org(OrgRole::UnitCommander))
        );
        assert_eq!(RoleClaim::parse("team:owner"), Some(RoleClaim::Team(TeamRole::Owner)));
        // Bare names resolve to the org axis first, then the team axis.
        assert_eq!(RoleClaim::parse("owner"), Some(RoleClaim::Team(TeamRole::Owner)));
        assert_eq!(
            RoleClaim::parse("team_commander"),
            Some(RoleClaim::Org(OrgRole::TeamCommander))
        );
        assert_eq!(RoleClaim::parse("wizard"), None);
    }
}
