//! 路由表，所有页面都挂在 `/admin` 前缀下

use regex::Regex;
use std::sync::OnceLock;

/// 站点路径前缀
pub const BASE_PATH: &str = "/admin";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Dashboard,
    Questions,
    NewQuestion,
    EditQuestion(String),
    Users,
    UserDetail(String),
    Feedback,
}

fn edit_question_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^/questions/([^/]+)/edit$").expect("静态正则"))
}

fn user_detail_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^/users/([^/]+)$").expect("静态正则"))
}

impl Route {
    /// 解析路径，前缀 `/admin` 可有可无，末尾 `/` 忽略
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or("");
        let path = path.strip_prefix(BASE_PATH).unwrap_or(path);
        let path = path.trim_end_matches('/');

        let route = match path {
            "" | "/" | "/dashboard" => Route::Dashboard,
            "/login" => Route::Login,
            "/questions" => Route::Questions,
            "/questions/new" => Route::NewQuestion,
            "/users" => Route::Users,
            "/feedback" => Route::Feedback,
            other => {
                if let Some(caps) = edit_question_pattern().captures(other) {
                    Route::EditQuestion(caps[1].to_string())
                } else if let Some(caps) = user_detail_pattern().captures(other) {
                    Route::UserDetail(caps[1].to_string())
                } else {
                    return None;
                }
            }
        };
        Some(route)
    }

    /// 带前缀的完整路径
    pub fn path(&self) -> String {
        let tail = match self {
            Route::Login => "/login".to_string(),
            Route::Dashboard => "/dashboard".to_string(),
            Route::Questions => "/questions".to_string(),
            Route::NewQuestion => "/questions/new".to_string(),
            Route::EditQuestion(id) => format!("/questions/{}/edit", id),
            Route::Users => "/users".to_string(),
            Route::UserDetail(id) => format!("/users/{}", id),
            Route::Feedback => "/feedback".to_string(),
        };
        format!("{}{}", BASE_PATH, tail)
    }

    /// 未登录也能访问的页面
    pub fn is_public(&self) -> bool {
        matches!(self, Route::Login)
    }
}
