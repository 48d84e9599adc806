use serde::{Deserialize, Serialize};

/// 首页汇总统计
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardStats {
    pub total_questions: u64,
    pub active_questions: u64,
    pub total_users: u64,
    pub registered_users: u64,
    pub guest_users: u64,
    pub total_feedback: u64,
    pub pending_feedback: u64,
}

impl DashboardStats {
    /// 首页卡片：(标题, 数值)
    pub fn cards(&self) -> Vec<(&'static str, u64)> {
        vec![
            ("Total Questions", self.total_questions),
            ("Active Questions", self.active_questions),
            ("Total Users", self.total_users),
            ("Registered Users", self.registered_users),
            ("Guest Users", self.guest_users),
            ("Total Feedback", self.total_feedback),
            ("Pending Feedback", self.pending_feedback),
        ]
    }
}
