use super::question::Bilingual;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackStatus {
    #[default]
    Pending,
    Reviewed,
    Resolved,
    Ignored,
}

impl FeedbackStatus {
    pub const ALL: [FeedbackStatus; 4] = [
        FeedbackStatus::Pending,
        FeedbackStatus::Reviewed,
        FeedbackStatus::Resolved,
        FeedbackStatus::Ignored,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FeedbackStatus::Pending => "pending",
            FeedbackStatus::Reviewed => "reviewed",
            FeedbackStatus::Resolved => "resolved",
            FeedbackStatus::Ignored => "ignored",
        }
    }

    /// 当前状态下界面提供的操作，只有 pending 可以流转
    pub fn available_transitions(self) -> &'static [FeedbackStatus] {
        match self {
            FeedbackStatus::Pending => &[FeedbackStatus::Resolved, FeedbackStatus::Ignored],
            _ => &[],
        }
    }

    pub fn can_transition_to(self, target: FeedbackStatus) -> bool {
        self.available_transitions().contains(&target)
    }
}

impl std::fmt::Display for FeedbackStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackUser {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackQuestion {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub question_text: Bilingual,
}

/// 用户对题目的反馈
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(alias = "feedback", default)]
    pub comment: String,
    #[serde(default)]
    pub user: Option<FeedbackUser>,
    #[serde(default)]
    pub question: Option<FeedbackQuestion>,
    #[serde(default)]
    pub status: FeedbackStatus,
    /// 缺失时排在最后
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Feedback {
    pub fn user_name(&self) -> &str {
        self.user.as_ref().map(|u| u.name.as_str()).unwrap_or("")
    }
}
