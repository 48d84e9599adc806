//! 反馈列表
//!
//! 一次拉取全量数据，筛选和排序全部在本地完成。
//! 各筛选条件之间是"且"的关系，字符串匹配不区分大小写；
//! 结果总是按创建时间倒序，和接口返回顺序无关。

use crate::api::FeedbackApi;
use crate::error::{AppError, AppResult, ValidationError};
use crate::models::{Feedback, FeedbackStatus};
use crate::notify::{Notifier, Toast};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// 本地筛选条件
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackFilters {
    pub status: Option<FeedbackStatus>,
    pub user_name: String,
    /// 题目文本，中英 / 印地语任一匹配即可
    pub question_text: String,
    pub feedback_text: String,
}

impl FeedbackFilters {
    pub fn matches(&self, item: &Feedback) -> bool {
        if let Some(status) = self.status {
            if item.status != status {
                return false;
            }
        }

        let user = self.user_name.trim().to_lowercase();
        if !user.is_empty() && !item.user_name().to_lowercase().contains(&user) {
            return false;
        }

        let question = self.question_text.trim().to_lowercase();
        if !question.is_empty() {
            let hit = item
                .question
                .as_ref()
                .is_some_and(|q| q.question_text.contains_lowercase(&question));
            if !hit {
                return false;
            }
        }

        let text = self.feedback_text.trim().to_lowercase();
        if !text.is_empty() && !item.comment.to_lowercase().contains(&text) {
            return false;
        }

        true
    }
}

/// 筛选并按创建时间倒序排列，没有创建时间的排在最后
pub fn filter_and_sort<'a>(items: &'a [Feedback], filters: &FeedbackFilters) -> Vec<&'a Feedback> {
    let mut visible: Vec<&Feedback> = items.iter().filter(|f| filters.matches(f)).collect();
    visible.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    visible
}

pub struct FeedbackListView<A> {
    api: Arc<A>,
    items: Vec<Feedback>,
    filters: FeedbackFilters,
    loading: bool,
}

impl<A: FeedbackApi> FeedbackListView<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self {
            api,
            items: Vec::new(),
            filters: FeedbackFilters::default(),
            loading: false,
        }
    }

    /// 拉取全部反馈
    pub async fn fetch(&mut self, notifier: &dyn Notifier) -> AppResult<()> {
        self.loading = true;
        let result = self.api.list_feedback().await;
        self.loading = false;

        match result {
            Ok(items) => {
                debug!("已加载 {} 条反馈", items.len());
                self.items = items;
                Ok(())
            }
            Err(e) => {
                notifier.report("加载反馈失败", &e);
                Err(e)
            }
        }
    }

    pub fn filters(&self) -> &FeedbackFilters {
        &self.filters
    }

    pub fn filters_mut(&mut self) -> &mut FeedbackFilters {
        &mut self.filters
    }

    pub fn set_filters(&mut self, filters: FeedbackFilters) {
        self.filters = filters;
    }

    /// 当前可见的反馈
    pub fn visible(&self) -> Vec<&Feedback> {
        filter_and_sort(&self.items, &self.filters)
    }

    /// 各状态数量，用于筛选页签
    pub fn status_counts(&self) -> HashMap<FeedbackStatus, usize> {
        let mut counts: HashMap<FeedbackStatus, usize> = FeedbackStatus::ALL.iter().map(|s| (*s, 0)).collect();
        for item in &self.items {
            *counts.entry(item.status).or_default() += 1;
        }
        counts
    }

    /// 修改反馈状态，只允许 pending → resolved / ignored
    pub async fn transition(&mut self, id: &str, target: FeedbackStatus, notifier: &dyn Notifier) -> AppResult<()> {
        let current = self.items.iter().find(|f| f.id == id).map(|f| f.status);
        let allowed = current.is_some_and(|c| c.can_transition_to(target));
        if !allowed {
            let err = ValidationError::TransitionNotAllowed {
                from: current.map(|c| c.to_string()).unwrap_or_else(|| "unknown".to_string()),
                to: target.to_string(),
            };
            warn!("⚠️ 反馈 {} 状态流转被拒绝: {}", id, err);
            notifier.notify(Toast::error(err.to_string()));
            return Err(AppError::Validation(err));
        }

        if let Err(e) = self.api.update_feedback_status(id, target).await {
            notifier.report("更新反馈状态失败", &e);
            return Err(e);
        }

        notifier.notify(Toast::success(format!("Feedback marked as {}", target)));
        self.fetch(notifier).await
    }

    pub async fn resolve(&mut self, id: &str, notifier: &dyn Notifier) -> AppResult<()> {
        self.transition(id, FeedbackStatus::Resolved, notifier).await
    }

    pub async fn ignore(&mut self, id: &str, notifier: &dyn Notifier) -> AppResult<()> {
        self.transition(id, FeedbackStatus::Ignored, notifier).await
    }

    pub fn items(&self) -> &[Feedback] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}
