use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    #[default]
    Guest,
    Registered,
}

impl UserType {
    pub fn as_str(self) -> &'static str {
        match self {
            UserType::Guest => "guest",
            UserType::Registered => "registered",
        }
    }
}

/// 平台用户
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    #[serde(rename = "type", alias = "userType", default)]
    pub user_type: UserType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// 用户统计，单独接口获取
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserStats {
    pub test_count: u32,
    pub average_score: f64,
    pub last_active: Option<DateTime<Utc>>,
    /// 累计使用时长（秒）
    pub total_time_spent: u64,
    pub session_count: u32,
}

impl UserStats {
    /// 形如 `2h 05m`、`12m`
    pub fn time_spent_display(&self) -> String {
        let minutes = self.total_time_spent / 60;
        let hours = minutes / 60;
        if hours > 0 {
            format!("{}h {:02}m", hours, minutes % 60)
        } else {
            format!("{}m", minutes)
        }
    }
}

/// 创建 / 更新用户时提交的数据
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPayload {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    #[serde(rename = "type")]
    pub user_type: UserType,
}

/// 用户列表的类型页签
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UserTab {
    #[default]
    All,
    Registered,
    Guest,
}

impl UserTab {
    pub fn user_type(self) -> Option<UserType> {
        match self {
            UserTab::All => None,
            UserTab::Registered => Some(UserType::Registered),
            UserTab::Guest => Some(UserType::Guest),
        }
    }
}

/// 用户列表查询条件
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserQuery {
    pub page: u32,
    pub limit: u32,
    pub search: String,
    pub tab: UserTab,
}

impl UserQuery {
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("page", self.page.to_string()), ("limit", self.limit.to_string())];
        if !self.search.trim().is_empty() {
            pairs.push(("search", self.search.trim().to_string()));
        }
        if let Some(t) = self.tab.user_type() {
            pairs.push(("type", t.as_str().to_string()));
        }
        pairs
    }
}
