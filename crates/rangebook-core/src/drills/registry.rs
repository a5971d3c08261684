//! Static catalog of drill types.
//!
//! The four drill types and their parameter schemas are fixed at build time.
//! Lookup is by the string id the backend and the drill-creation screens use
//! (`"zeroing"`, `"grouping"`, `"timed"`, `"qualification"`); listing is
//! finite, stable and restartable.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

#[cfg(feature = "ts")]
use ts_rs::TS;

use super::error::UnknownDrillType;
use super::params::{DrillParam, ParamConstraint};

/// Catalog built once on first access.
static CATALOG: OnceLock<[DrillTypeDefinition; 4]> = OnceLock::new();

/// The four drill types supported by training sessions.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[cfg_attr(feature = "ts", derive(TS), ts(export))]
#[serde(rename_all = "snake_case")]
pub enum DrillType {
    Zeroing,
    Grouping,
    Timed,
    Qualification,
}

impl DrillType {
    /// Stable listing order for screens and the catalog itself.
    pub const ALL: [DrillType; 4] = [
        DrillType::Zeroing,
        DrillType::Grouping,
        DrillType::Timed,
        DrillType::Qualification,
    ];

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "zeroing" => Some(DrillType::Zeroing),
            "grouping" => Some(DrillType::Grouping),
            "timed" => Some(DrillType::Timed),
            "qualification" => Some(DrillType::Qualification),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DrillType::Zeroing => "zeroing",
            DrillType::Grouping => "grouping",
            DrillType::Timed => "timed",
            DrillType::Qualification => "qualification",
        }
    }
}

impl fmt::Display for DrillType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DrillType {
    type Err = UnknownDrillType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownDrillType(s.to_string()))
    }
}

/// Definition of one drill type: display strings plus the parameter schema
/// instances are validated against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(TS), ts(export))]
pub struct DrillTypeDefinition {
    #[serde(rename = "drillType")]
    pub drill_type: DrillType,
    pub name: String,
    pub description: String,
    pub params: BTreeMap<DrillParam, ParamConstraint>,
}

impl DrillTypeDefinition {
    pub fn constraint(&self, param: DrillParam) -> Option<&ParamConstraint> {
        self.params.get(&param)
    }
}

/// Look up a drill type definition by its string id.
pub fn drill_type(id: &str) -> Result<&'static DrillTypeDefinition, UnknownDrillType> {
    let ty: DrillType = id.parse()?;
    Ok(definition(ty))
}

/// Definition for an already-parsed drill type.
pub fn definition(ty: DrillType) -> &'static DrillTypeDefinition {
    // Catalog entries are laid out in `DrillType::ALL` order.
    &catalog()[ty as usize]
}

/// All drill type definitions in a fixed, stable order. Re-listing always
/// yields the same sequence.
pub fn drill_types() -> &'static [DrillTypeDefinition] {
    catalog()
}

fn catalog() -> &'static [DrillTypeDefinition; 4] {
    CATALOG.get_or_init(|| [zeroing(), grouping(), timed(), qualification()])
}

fn zeroing() -> DrillTypeDefinition {
    DrillTypeDefinition {
        drill_type: DrillType::Zeroing,
        name: "Zeroing".to_string(),
        description: "Confirm and adjust sight alignment at short range.".to_string(),
        params: BTreeMap::from([
            (
                DrillParam::Distance,
                ParamConstraint::new(25.0, 100.0, 25.0).with_step(25.0),
            ),
            (
                DrillParam::Shots,
                ParamConstraint::new(3.0, 10.0, 5.0).with_step(1.0),
            ),
            (
                DrillParam::Strings,
                ParamConstraint::new(1.0, 5.0, 3.0).with_step(1.0),
            ),
        ]),
    }
}

fn grouping() -> DrillTypeDefinition {
    DrillTypeDefinition {
        drill_type: DrillType::Grouping,
        name: "5-Shot Grouping".to_string(),
        description: "Fire one tight group per string; scored by group size.".to_string(),
        params: BTreeMap::from([
            (
                DrillParam::Distance,
                ParamConstraint::new(25.0, 300.0, 100.0).with_step(25.0),
            ),
            // The shot count is what makes the drill comparable across
            // sessions, so instances may not change it.
            (DrillParam::Shots, ParamConstraint::fixed(5.0)),
            (
                DrillParam::Strings,
                ParamConstraint::new(1.0, 10.0, 1.0).with_step(1.0),
            ),
        ]),
    }
}

fn timed() -> DrillTypeDefinition {
    DrillTypeDefinition {
        drill_type: DrillType::Timed,
        name: "Timed Fire".to_string(),
        description: "Hits under par-time pressure.".to_string(),
        params: BTreeMap::from([
            (
                DrillParam::Distance,
                ParamConstraint::new(5.0, 50.0, 15.0).with_step(5.0),
            ),
            (
                DrillParam::Shots,
                ParamConstraint::new(1.0, 30.0, 10.0).with_step(1.0),
            ),
            (
                DrillParam::TimeLimit,
                ParamConstraint::new(2.0, 120.0, 20.0).with_step(0.5),
            ),
            (
                DrillParam::Strings,
                ParamConstraint::new(1.0, 10.0, 2.0).with_step(1.0),
            ),
        ]),
    }
}

fn qualification() -> DrillTypeDefinition {
    DrillTypeDefinition {
        drill_type: DrillType::Qualification,
        name: "Qualification Course".to_string(),
        description: "Scored course of fire with a fixed setup.".to_string(),
        params: BTreeMap::from([
            (DrillParam::Distance, ParamConstraint::fixed(100.0)),
            (DrillParam::Shots, ParamConstraint::fixed(20.0)),
            (
                DrillParam::TimeLimit,
                ParamConstraint::new(60.0, 600.0, 300.0).with_step(30.0),
            ),
            (DrillParam::Strings, ParamConstraint::fixed(4.0)),
            (
                DrillParam::MinScore,
                ParamConstraint::new(50.0, 100.0, 70.0).with_step(5.0),
            ),
        ]),
    }
}
