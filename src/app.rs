//! 应用编排
//!
//! 负责把配置、会话、HTTP 客户端和各个页面控制器串起来，
//! 以命令行方式跑一次指定页面，输出到日志。

use crate::clients::ApiClient;
use crate::config::Config;
use crate::models::{FeedbackStatus, UserTab};
use crate::notify::TracingNotifier;
use crate::session::{Session, SessionStore};
use crate::shell::{guard, logout, GuardDecision, KeepAlive, Route};
use crate::views::{DashboardView, FeedbackFilters, FeedbackListView, LoginForm, QuestionListView, UserListView};
use anyhow::{bail, Result};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// 命令行子命令
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Dashboard,
    Questions { search: String },
    Users { tab: UserTab },
    Feedback { status: Option<FeedbackStatus> },
    Logout,
}

impl Command {
    /// 解析命令行参数（不含程序名）
    pub fn parse(args: &[String]) -> Result<Self> {
        let mut iter = args.iter().map(String::as_str);
        let command = match iter.next() {
            None | Some("dashboard") => Command::Dashboard,
            Some("questions") => Command::Questions {
                search: iter.collect::<Vec<_>>().join(" "),
            },
            Some("users") => Command::Users {
                tab: match iter.next() {
                    None | Some("all") => UserTab::All,
                    Some("registered") => UserTab::Registered,
                    Some("guest") => UserTab::Guest,
                    Some(other) => bail!("未知的用户类型: {}", other),
                },
            },
            Some("feedback") => Command::Feedback {
                status: match iter.next() {
                    None | Some("all") => None,
                    Some(s) => Some(
                        FeedbackStatus::ALL
                            .into_iter()
                            .find(|f| f.as_str() == s)
                            .ok_or_else(|| anyhow::anyhow!("未知的反馈状态: {}", s))?,
                    ),
                },
            },
            Some("logout") => Command::Logout,
            Some(other) => bail!("未知命令: {} (可用: dashboard | questions | users | feedback | logout)", other),
        };
        Ok(command)
    }

    fn route(&self) -> Route {
        match self {
            Command::Dashboard => Route::Dashboard,
            Command::Questions { .. } => Route::Questions,
            Command::Users { .. } => Route::Users,
            Command::Feedback { .. } => Route::Feedback,
            Command::Logout => Route::Login,
        }
    }
}

/// 应用主结构
pub struct App {
    config: Config,
    session: Arc<Session>,
    store: SessionStore,
    client: Arc<ApiClient>,
    notifier: TracingNotifier,
}

impl App {
    /// 初始化：恢复会话、创建客户端
    pub async fn initialize(config: Config) -> Result<Self> {
        log_startup(&config);

        let store = SessionStore::new(config.session_file.clone());
        let state = match store.load().await {
            Ok(state) => state,
            Err(e) => {
                warn!("⚠️ 会话文件无法读取，按未登录处理: {}", e);
                Default::default()
            }
        };
        let session = Arc::new(Session::from_state(state));
        let client = Arc::new(ApiClient::new(&config, session.clone())?);

        Ok(Self {
            config,
            session,
            store,
            client,
            notifier: TracingNotifier,
        })
    }

    /// 执行一个命令
    pub async fn run(&self, command: Command) -> Result<()> {
        if command == Command::Logout {
            let nav = logout(&self.session, &self.store).await;
            info!("➡️ {:?}", nav);
            return Ok(());
        }

        if let GuardDecision::Redirect(Route::Login) = guard(&self.session, command.route()) {
            self.login().await?;
        }

        let _keep_alive = KeepAlive::spawn(
            self.client.clone(),
            Duration::from_secs(self.config.keep_alive_interval_secs),
        );

        match command {
            Command::Dashboard => self.show_dashboard().await,
            Command::Questions { search } => self.show_questions(&search).await?,
            Command::Users { tab } => self.show_users(tab).await?,
            Command::Feedback { status } => self.show_feedback(status).await?,
            Command::Logout => {}
        }
        Ok(())
    }

    async fn login(&self) -> Result<()> {
        let (Some(email), Some(password)) = (&self.config.admin_email, &self.config.admin_password) else {
            bail!("未登录，请设置 ADMIN_EMAIL 和 ADMIN_PASSWORD 后重试");
        };

        info!("🔐 正在登录 {}", email);
        LoginForm::new(email.clone(), password.clone())
            .submit(self.client.as_ref(), &self.session, &self.store, &self.notifier)
            .await?;
        Ok(())
    }

    async fn show_dashboard(&self) {
        let mut view = DashboardView::new(self.client.clone());
        view.load(&self.notifier).await;

        info!("{}", "=".repeat(60));
        info!("📊 概览");
        for (label, value) in view.cards() {
            info!("{:<20} {}", label, value);
        }
        info!("{}", "=".repeat(60));
    }

    async fn show_questions(&self, search: &str) -> Result<()> {
        let mut view = QuestionListView::new(
            self.client.clone(),
            self.config.page_size,
            Duration::from_millis(self.config.search_debounce_ms),
        );
        if search.is_empty() {
            view.fetch(&self.notifier).await?;
        } else {
            view.set_search(search);
            view.apply_debounced(&self.notifier).await?;
        }

        let pagination = view.pagination();
        info!("📋 题目 第 {}/{} 页，共 {} 道", pagination.page, pagination.pages.max(1), pagination.total);
        for row in view.rows() {
            info!(
                "#{:<4} [{}] {} {} | {}",
                row.order,
                row.difficulty,
                if row.active { "●" } else { "○" },
                row.text,
                row.classification
            );
        }
        Ok(())
    }

    async fn show_users(&self, tab: UserTab) -> Result<()> {
        let mut view = UserListView::new(
            self.client.clone(),
            self.config.page_size,
            Duration::from_millis(self.config.search_debounce_ms),
        );
        view.set_tab(tab, &self.notifier).await?;

        info!("👥 用户 共 {} 人", view.pagination().total);
        for user in view.users() {
            info!(
                "{:<24} {:<10} {}",
                user.name,
                user.user_type.as_str(),
                user.email.as_deref().or(user.mobile.as_deref()).unwrap_or("-")
            );
        }
        Ok(())
    }

    async fn show_feedback(&self, status: Option<FeedbackStatus>) -> Result<()> {
        let mut view = FeedbackListView::new(self.client.clone());
        view.fetch(&self.notifier).await?;
        view.set_filters(FeedbackFilters {
            status,
            ..Default::default()
        });

        let visible = view.visible();
        info!("💬 反馈 {} 条", visible.len());
        for item in visible {
            info!(
                "{} [{}] {}: {}",
                item.created_at
                    .map(|d| d.format("%Y-%m-%d %H:%M").to_string())
                    .unwrap_or_else(|| "-".to_string()),
                item.status,
                item.user_name(),
                item.comment
            );
        }
        Ok(())
    }
}

fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 题库管理后台");
    info!("🌐 API: {}", config.resolved_api_base_url());
    info!("{}", "=".repeat(60));
}
