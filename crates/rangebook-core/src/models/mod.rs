//! Backend-shaped data models.
//!
//! - `OrgMemberRow`, `TeamMemberRow`: membership rows with raw role strings
//! - `TrainingSummary`, `TrainingStatus`: training sessions and lifecycle
//! - `SessionStats`: shot results and qualification checks

pub mod membership;
pub mod training;

pub use membership::{OrgMemberRow, TeamMemberRow};
pub use training::{SessionStats, TrainingStatus, TrainingSummary};
