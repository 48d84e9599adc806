//! 用户详情
//!
//! 基本信息和统计数据是两个独立请求，并发发出、各自落地；
//! 统计失败不影响基本信息的展示，反之亦然。

use super::Loadable;
use crate::api::UserApi;
use crate::error::AppResult;
use crate::models::{User, UserStats};
use crate::notify::Notifier;
use chrono::{DateTime, Utc};
use futures::future::{select, Either};
use futures::pin_mut;
use std::sync::Arc;

pub struct UserDetailView<A> {
    api: Arc<A>,
    user_id: String,
    user: Loadable<User>,
    stats: Loadable<UserStats>,
}

impl<A: UserApi> UserDetailView<A> {
    pub fn new(api: Arc<A>, user_id: impl Into<String>) -> Self {
        Self {
            api,
            user_id: user_id.into(),
            user: Loadable::Loading,
            stats: Loadable::Loading,
        }
    }

    /// 同时拉取基本信息和统计，哪个先返回就先落地
    pub async fn load(&mut self, notifier: &dyn Notifier) {
        self.user = Loadable::Loading;
        self.stats = Loadable::Loading;

        let api = self.api.clone();
        let user_id = self.user_id.clone();
        let user = api.get_user(&user_id);
        let stats = api.get_user_stats(&user_id);
        pin_mut!(user, stats);

        match select(user, stats).await {
            Either::Left((result, stats)) => {
                self.user = user_loadable(result, notifier);
                self.stats = stats_loadable(stats.await, notifier);
            }
            Either::Right((result, user)) => {
                self.stats = stats_loadable(result, notifier);
                self.user = user_loadable(user.await, notifier);
            }
        }
    }

    /// 只重新拉取统计
    pub async fn reload_stats(&mut self, notifier: &dyn Notifier) {
        self.stats = Loadable::Loading;
        let result = self.api.get_user_stats(&self.user_id).await;
        self.stats = stats_loadable(result, notifier);
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn user(&self) -> &Loadable<User> {
        &self.user
    }

    pub fn stats(&self) -> &Loadable<UserStats> {
        &self.stats
    }

    /// 统计卡片：(标题, 展示值)；未加载完成时返回 `None`
    pub fn stat_cards(&self) -> Option<Vec<(&'static str, String)>> {
        let stats = self.stats.loaded()?;
        Some(vec![
            ("Tests Taken", stats.test_count.to_string()),
            ("Average Score", format!("{:.1}%", stats.average_score)),
            ("Last Active", format_date(stats.last_active)),
            ("Time Spent", stats.time_spent_display()),
            ("Sessions", stats.session_count.to_string()),
        ])
    }
}

fn user_loadable(result: AppResult<User>, notifier: &dyn Notifier) -> Loadable<User> {
    match result {
        Ok(u) => Loadable::Loaded(u),
        Err(e) => {
            notifier.report("加载用户失败", &e);
            Loadable::Failed(e.user_message())
        }
    }
}

fn stats_loadable(result: AppResult<UserStats>, notifier: &dyn Notifier) -> Loadable<UserStats> {
    match result {
        Ok(s) => Loadable::Loaded(s),
        Err(e) => {
            notifier.report("加载用户统计失败", &e);
            Loadable::Failed(e.user_message())
        }
    }
}

fn format_date(value: Option<DateTime<Utc>>) -> String {
    value
        .map(|d| d.format("%d %b %Y").to_string())
        .unwrap_or_else(|| "Never".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::models::{Paged, UserPayload, UserQuery, UserType};
    use crate::notify::ToastQueue;
    use chrono::TimeZone;
    use std::time::Duration;

    /// 统计接口一直不返回
    struct StalledStats;

    impl UserApi for StalledStats {
        async fn list_users(&self, _query: &UserQuery) -> AppResult<Paged<User>> {
            Ok(Paged::default())
        }

        async fn get_user(&self, id: &str) -> AppResult<User> {
            Ok(User {
                id: id.to_string(),
                name: "Meera".to_string(),
                email: None,
                mobile: None,
                user_type: UserType::Registered,
                created_at: None,
            })
        }

        async fn get_user_stats(&self, _id: &str) -> AppResult<UserStats> {
            tokio::time::sleep(Duration::from_secs(30)).await;
            Err(AppError::api_bad_response("/admin/users/:id/stats", 504, None))
        }

        async fn create_user(&self, _payload: &UserPayload) -> AppResult<User> {
            unreachable!()
        }

        async fn update_user(&self, _id: &str, _payload: &UserPayload) -> AppResult<User> {
            unreachable!()
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_record_shows_while_stats_still_loading() {
        let toasts = ToastQueue::new();
        let mut view = UserDetailView::new(Arc::new(StalledStats), "u1");

        let finished = tokio::time::timeout(Duration::from_secs(5), view.load(&toasts)).await;
        assert!(finished.is_err());
        assert_eq!(view.user().loaded().map(|u| u.name.as_str()), Some("Meera"));
        assert!(view.stats().is_loading());
        assert!(view.stat_cards().is_none());
    }

    #[test]
    fn test_format_date() {
        let d = Utc.with_ymd_and_hms(2024, 2, 5, 0, 0, 0).unwrap();
        assert_eq!(format_date(Some(d)), "05 Feb 2024");
        assert_eq!(format_date(None), "Never");
    }
}
