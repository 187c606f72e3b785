//! Issue Model
//!
//! The persisted civic issue record plus its nested comment and
//! status-history entries. Field order matches the JSON store layout.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::util::ts_micros;

/// Issue category (10 fixed kinds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCategory {
    Pothole,
    Garbage,
    Streetlight,
    WaterLeak,
    BrokenSidewalk,
    TrafficSignal,
    Drainage,
    TreeMaintenance,
    NoiseComplaint,
    Parking,
}

impl IssueCategory {
    pub const ALL: [IssueCategory; 10] = [
        IssueCategory::Pothole,
        IssueCategory::Garbage,
        IssueCategory::Streetlight,
        IssueCategory::WaterLeak,
        IssueCategory::BrokenSidewalk,
        IssueCategory::TrafficSignal,
        IssueCategory::Drainage,
        IssueCategory::TreeMaintenance,
        IssueCategory::NoiseComplaint,
        IssueCategory::Parking,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IssueCategory::Pothole => "pothole",
            IssueCategory::Garbage => "garbage",
            IssueCategory::Streetlight => "streetlight",
            IssueCategory::WaterLeak => "water_leak",
            IssueCategory::BrokenSidewalk => "broken_sidewalk",
            IssueCategory::TrafficSignal => "traffic_signal",
            IssueCategory::Drainage => "drainage",
            IssueCategory::TreeMaintenance => "tree_maintenance",
            IssueCategory::NoiseComplaint => "noise_complaint",
            IssueCategory::Parking => "parking",
        }
    }
}

/// Issue lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueStatus {
    Pending,
    InProgress,
    Resolved,
}

impl IssueStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueStatus::Pending => "pending",
            IssueStatus::InProgress => "in_progress",
            IssueStatus::Resolved => "resolved",
        }
    }
}

/// Issue priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssuePriority {
    Low,
    Medium,
    High,
}

impl IssuePriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssuePriority::Low => "low",
            IssuePriority::Medium => "medium",
            IssuePriority::High => "high",
        }
    }
}

/// A civic issue report as stored in `issues.json`.
///
/// Ids are synthetic (`176` + 10 digits + letter + 3 digits) and NOT
/// guaranteed unique: duplicate-report clusters deliberately share one id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    pub user_id: String,
    pub issue_type: IssueCategory,
    pub description: String,
    pub priority: IssuePriority,
    pub latitude: f64,
    pub longitude: f64,
    pub status: IssueStatus,
    pub is_anonymous: bool,
    pub id: String,
    #[serde(with = "ts_micros")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "ts_micros")]
    pub updated_at: DateTime<Utc>,
    /// Street name used in `description`
    pub location_address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_path: Option<String>,
    /// Non-empty exactly when `status` is in_progress or resolved
    pub public_comments: Vec<Comment>,
    /// Non-empty exactly when `status` is in_progress or resolved
    pub status_history: Vec<StatusHistoryEntry>,
}

/// Admin comment attached to a worked-on issue
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub issue_id: String,
    pub author_type: String,
    pub author_id: String,
    pub author_name: String,
    pub comment: String,
    #[serde(with = "ts_micros")]
    pub created_at: DateTime<Utc>,
}

/// Audit record of a status transition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusHistoryEntry {
    pub id: String,
    pub issue_id: String,
    pub old_status: IssueStatus,
    pub new_status: IssueStatus,
    pub changed_by: String,
    pub changed_by_name: String,
    #[serde(with = "ts_micros")]
    pub changed_at: DateTime<Utc>,
    pub comment: String,
}
