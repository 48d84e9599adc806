//! # Exam Admin
//!
//! 题库管理后台：管理中英（印地语）双语题目、用户和反馈
//!
//! ## 架构设计
//!
//! 本系统采用分层架构：
//!
//! ### ① 客户端层（Clients）
//! - `clients/` - 持有 HTTP 连接和会话，统一附加 Bearer token、解析错误体
//!
//! ### ② 接口层（Api）
//! - `api/` - 每类资源一个 trait，描述"后端能提供什么"
//! - `QuestionApi` / `ClassificationApi` / `UserApi` / `FeedbackApi` / `StatsApi` / `AuthApi` / `HealthApi`
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 可复用的交互流程
//! - `ClassificationCascade` - 科目 → 单元 → 章节 三级联动
//! - `QuestionFormController` - 题目新建 / 编辑表单
//! - `Debouncer` - 输入防抖
//!
//! ### ④ 视图层（Views）
//! - `views/` - 每个页面一个控制器：题目列表、反馈、用户、首页、登录
//!
//! ### ⑤ 外壳层（Shell）
//! - `shell/` - 路由、守卫、侧边栏、保活
//!
//! ## 模块结构

pub mod api;
pub mod app;
pub mod clients;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod notify;
pub mod session;
pub mod shell;
pub mod views;
pub mod workflow;

// 重新导出常用类型
pub use app::App;
pub use clients::ApiClient;
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{Feedback, Question, User};
pub use notify::{Notifier, Toast};
pub use session::{Session, SessionStore};
