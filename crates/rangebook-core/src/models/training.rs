//! Training sessions and per-drill results.
//!
//! Read-only summaries of what the backend stores. The drill configs hang
//! off the session exactly as the merge produced them; once a session has
//! started they are frozen (the screens enforce this, not the models).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "ts")]
use ts_rs::TS;

use crate::drills::{DrillInstanceConfig, DrillParam};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(TS), ts(export))]
#[serde(rename_all = "snake_case")]
pub enum TrainingStatus {
    Scheduled,
    Active,
    Completed,
    Cancelled,
}

impl TrainingStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, TrainingStatus::Completed | TrainingStatus::Cancelled)
    }
}

impl std::fmt::Display for TrainingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrainingStatus::Scheduled => write!(f, "Scheduled"),
            TrainingStatus::Active => write!(f, "Active"),
            TrainingStatus::Completed => write!(f, "Completed"),
            TrainingStatus::Cancelled => write!(f, "Cancelled"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(TS), ts(export))]
pub struct TrainingSummary {
    pub id: String,
    pub name: String,
    #[serde(rename = "teamGuid")]
    pub team_guid: String,
    #[serde(rename = "createdBy")]
    pub created_by: String,
    #[serde(rename = "scheduledFor")]
    pub scheduled_for: Option<DateTime<Utc>>,
    #[serde(rename = "completedAt")]
    pub completed_at: Option<DateTime<Utc>>,
    pub status: TrainingStatus,
    #[serde(default)]
    pub drills: Vec<DrillInstanceConfig>,
}

impl TrainingSummary {
    /// Drill configs may only change while the session is still scheduled.
    pub fn can_edit_drills(&self) -> bool {
        self.status == TrainingStatus::Scheduled
    }
}

/// Shot results for one drill within a session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(TS), ts(export))]
pub struct SessionStats {
    #[serde(rename = "shotsFired")]
    pub shots_fired: u32,
    pub hits: u32,
    /// Scored drills report a 0-100 score; unscored drills leave this unset.
    pub score: Option<f64>,
}

impl SessionStats {
    pub fn hit_percentage(&self) -> f64 {
        if self.shots_fired == 0 {
            return 0.0;
        }
        self.hits as f64 / self.shots_fired as f64 * 100.0
    }

    pub fn passed(&self, min_score: f64) -> bool {
        self.score.map(|score| score >= min_score).unwrap_or(false)
    }

    /// Pass/fail against the drill's minimum-score parameter. `None` when
    /// the drill defines no passing threshold.
    pub fn qualifies(&self, config: &DrillInstanceConfig) -> Option<bool> {
        config
            .value(DrillParam::MinScore)
            .map(|threshold| self.passed(threshold))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drills::{merge_overrides, DrillTemplate, DrillType};
    use std::collections::BTreeMap;

    fn stats(shots_fired: u32, hits: u32, score: Option<f64>) -> SessionStats {
        SessionStats { shots_fired, hits, score }
    }

    #[test]
    fn test_hit_percentage() {
        assert_eq!(stats(20, 15, None).hit_percentage(), 75.0);
        assert_eq!(stats(0, 0, None).hit_percentage(), 0.0);
    }

    #[test]
    fn test_passed_boundary() {
        assert!(stats(20, 14, Some(70.0)).passed(70.0));
        assert!(!stats(20, 13, Some(69.9)).passed(70.0));
        assert!(!stats(20, 13, None).passed(70.0));
    }

    #[test]
    fn test_qualifies_against_drill_config() {
        let qualification = DrillTemplate::builtin(DrillType::Qualification);
        let config = merge_overrides(&qualification, &BTreeMap::new()).unwrap();
        // Default passing threshold is 70.
        assert_eq!(stats(20, 18, Some(85.0)).qualifies(&config), Some(true));
        assert_eq!(stats(20, 10, Some(50.0)).qualifies(&config), Some(false));

        let zeroing = DrillTemplate::builtin(DrillType::Zeroing);
        let config = merge_overrides(&zeroing, &BTreeMap::new()).unwrap();
        assert_eq!(stats(5, 5, Some(100.0)).qualifies(&config), None);
    }

    #[test]
    fn test_drill_edits_lock_after_start() {
        let summary: TrainingSummary = serde_json::from_value(serde_json::json!({
            "id": "trn-3",
            "name": "Night qual",
            "teamGuid": "team-a1",
            "createdBy": "user_2aF",
            "scheduledFor": "2025-06-01T18:00:00Z",
            "completedAt": null,
            "status": "scheduled",
        }))
        .unwrap();

        assert!(summary.can_edit_drills());
        assert!(summary.drills.is_empty());

        let mut started = summary;
        started.status = TrainingStatus::Active;
        assert!(!started.can_edit_drills());
        assert!(!started.status.is_terminal());
        started.status = TrainingStatus::Completed;
        assert!(started.status.is_terminal());
    }
}
