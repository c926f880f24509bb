use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const MAX_MESSAGE_LEN: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackCategory {
    General,
    Bug,
    Feature,
    Improvement,
    Complaint,
}

impl FeedbackCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedbackCategory::General => "general",
            FeedbackCategory::Bug => "bug",
            FeedbackCategory::Feature => "feature",
            FeedbackCategory::Improvement => "improvement",
            FeedbackCategory::Complaint => "complaint",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "general" => Some(FeedbackCategory::General),
            "bug" => Some(FeedbackCategory::Bug),
            "feature" => Some(FeedbackCategory::Feature),
            "improvement" => Some(FeedbackCategory::Improvement),
            "complaint" => Some(FeedbackCategory::Complaint),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackStatus {
    Pending,
    Reviewed,
    Resolved,
    Closed,
}

impl FeedbackStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedbackStatus::Pending => "pending",
            FeedbackStatus::Reviewed => "reviewed",
            FeedbackStatus::Resolved => "resolved",
            FeedbackStatus::Closed => "closed",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "pending" => Some(FeedbackStatus::Pending),
            "reviewed" => Some(FeedbackStatus::Reviewed),
            "resolved" => Some(FeedbackStatus::Resolved),
            "closed" => Some(FeedbackStatus::Closed),
            _ => None,
        }
    }

    /// Position in the moderation workflow. Transitions may only move
    /// forward (or stay put); skipping ahead, e.g. pending straight to
    /// closed, is allowed.
    pub fn rank(&self) -> u8 {
        match self {
            FeedbackStatus::Pending => 0,
            FeedbackStatus::Reviewed => 1,
            FeedbackStatus::Resolved => 2,
            FeedbackStatus::Closed => 3,
        }
    }

    pub fn can_transition_to(&self, next: FeedbackStatus) -> bool {
        next.rank() >= self.rank()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub message: String,
    pub category: FeedbackCategory,
    pub rating: Option<i16>,
    pub status: FeedbackStatus,
    pub admin_response: Option<String>,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A feedback row joined with just enough owner identity for the
/// moderation screen.
#[derive(Debug, Clone)]
pub struct FeedbackWithOwner {
    pub feedback: FeedbackRecord,
    pub owner_username: Option<String>,
    pub owner_email: Option<String>,
}
