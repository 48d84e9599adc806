//! API 模块
//!
//! 每类资源一个 trait，`ApiClient` 实现全部 trait；
//! 视图和流程层只依赖 trait，测试时换成内存实现即可

pub mod auth;
pub mod classification;
pub mod feedback;
pub mod health;
pub mod questions;
pub mod stats;
pub mod users;

use crate::error::AppResult;
use crate::models::{
    DashboardStats, Feedback, FeedbackStatus, LoginRequest, LoginResponse, Paged, Question, QuestionPayload,
    QuestionQuery, QuestionStatus, Subject, Unit, User, UserPayload, UserQuery, UserStats,
};
use std::future::Future;

/// 登录
pub trait AuthApi: Send + Sync {
    fn login(&self, request: &LoginRequest) -> impl Future<Output = AppResult<LoginResponse>> + Send;
}

/// 题目增删改查
pub trait QuestionApi: Send + Sync {
    fn list_questions(&self, query: &QuestionQuery) -> impl Future<Output = AppResult<Paged<Question>>> + Send;

    fn get_question(&self, id: &str) -> impl Future<Output = AppResult<Question>> + Send;

    fn create_question(&self, payload: &QuestionPayload) -> impl Future<Output = AppResult<Question>> + Send;

    fn update_question(
        &self,
        id: &str,
        payload: &QuestionPayload,
    ) -> impl Future<Output = AppResult<Question>> + Send;

    fn delete_question(&self, id: &str) -> impl Future<Output = AppResult<()>> + Send;

    fn set_question_status(
        &self,
        id: &str,
        status: QuestionStatus,
    ) -> impl Future<Output = AppResult<Question>> + Send;
}

/// 科目 / 单元（单元自带章节）
pub trait ClassificationApi: Send + Sync {
    fn list_subjects(&self) -> impl Future<Output = AppResult<Vec<Subject>>> + Send;

    fn list_units(&self, subject_id: &str) -> impl Future<Output = AppResult<Vec<Unit>>> + Send;
}

/// 用户管理
pub trait UserApi: Send + Sync {
    fn list_users(&self, query: &UserQuery) -> impl Future<Output = AppResult<Paged<User>>> + Send;

    fn get_user(&self, id: &str) -> impl Future<Output = AppResult<User>> + Send;

    fn get_user_stats(&self, id: &str) -> impl Future<Output = AppResult<UserStats>> + Send;

    fn create_user(&self, payload: &UserPayload) -> impl Future<Output = AppResult<User>> + Send;

    fn update_user(&self, id: &str, payload: &UserPayload) -> impl Future<Output = AppResult<User>> + Send;
}

/// 反馈
pub trait FeedbackApi: Send + Sync {
    fn list_feedback(&self) -> impl Future<Output = AppResult<Vec<Feedback>>> + Send;

    fn update_feedback_status(
        &self,
        id: &str,
        status: FeedbackStatus,
    ) -> impl Future<Output = AppResult<Feedback>> + Send;
}

/// 首页统计
pub trait StatsApi: Send + Sync {
    fn dashboard_stats(&self) -> impl Future<Output = AppResult<DashboardStats>> + Send;
}

/// 保活探测
pub trait HealthApi: Send + Sync {
    fn ping(&self) -> impl Future<Output = AppResult<()>> + Send;
}
