//! 题目列表
//!
//! 服务端分页（默认每页 10 条），搜索词和难度由服务端过滤。
//! 筛选条件变化先经过防抖，空闲 500ms 后才发请求并回到第一页。
//! 删除、切换状态成功后都重新拉取列表，不在本地修补。

use super::Confirm;
use crate::api::QuestionApi;
use crate::error::AppResult;
use crate::logger::truncate_text;
use crate::models::{Difficulty, Pagination, Question, QuestionQuery};
use crate::notify::{Notifier, Toast};
use crate::workflow::Debouncer;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// 列表筛选条件
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionFilters {
    pub search: String,
    pub difficulty: Option<Difficulty>,
}

/// 表格中的一行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionRow {
    pub id: String,
    pub order: u32,
    pub text: String,
    pub difficulty: Difficulty,
    pub active: bool,
    pub classification: String,
}

impl From<&Question> for QuestionRow {
    fn from(q: &Question) -> Self {
        let classification = [&q.subject_name, &q.unit_name, &q.chapter_name]
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty())
            .cloned()
            .collect::<Vec<_>>()
            .join(" / ");
        Self {
            id: q.id.clone(),
            order: q.order,
            text: truncate_text(q.question_text.display(), 80),
            difficulty: q.difficulty,
            active: q.status == crate::models::QuestionStatus::Active,
            classification,
        }
    }
}

pub struct QuestionListView<A> {
    api: Arc<A>,
    page_size: u32,
    page: u32,
    /// 已生效的筛选条件
    filters: QuestionFilters,
    /// 输入中、尚未生效的筛选条件
    draft: QuestionFilters,
    debouncer: Debouncer<QuestionFilters>,
    questions: Vec<Question>,
    pagination: Pagination,
    loading: bool,
}

impl<A: QuestionApi> QuestionListView<A> {
    pub fn new(api: Arc<A>, page_size: u32, debounce: Duration) -> Self {
        Self {
            api,
            page_size: page_size.max(1),
            page: 1,
            filters: QuestionFilters::default(),
            draft: QuestionFilters::default(),
            debouncer: Debouncer::new(debounce),
            questions: Vec::new(),
            pagination: Pagination::default(),
            loading: false,
        }
    }

    fn query(&self) -> QuestionQuery {
        QuestionQuery {
            page: self.page,
            limit: self.page_size,
            search: self.filters.search.clone(),
            difficulty: self.filters.difficulty,
        }
    }

    /// 按当前页码和筛选条件拉取
    pub async fn fetch(&mut self, notifier: &dyn Notifier) -> AppResult<()> {
        self.loading = true;
        let query = self.query();
        debug!("拉取题目列表: {:?}", query);
        let result = self.api.list_questions(&query).await;
        self.loading = false;

        match result {
            Ok(paged) => {
                self.questions = paged.data;
                self.pagination = paged.pagination;
                Ok(())
            }
            Err(e) => {
                notifier.report("加载题目列表失败", &e);
                Err(e)
            }
        }
    }

    /// 修改搜索词（防抖）
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.draft.search = search.into();
        self.debouncer.push(self.draft.clone());
    }

    /// 修改难度筛选（防抖）
    pub fn set_difficulty(&mut self, difficulty: Option<Difficulty>) {
        self.draft.difficulty = difficulty;
        self.debouncer.push(self.draft.clone());
    }

    /// 等待防抖后的筛选条件，生效后回到第一页并拉取
    pub async fn apply_debounced(&mut self, notifier: &dyn Notifier) -> AppResult<bool> {
        match self.debouncer.next().await {
            Some(filters) => {
                self.filters = filters;
                self.page = 1;
                self.fetch(notifier).await?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// 翻页，页码限定在 [1, 总页数]
    pub async fn set_page(&mut self, page: u32, notifier: &dyn Notifier) -> AppResult<()> {
        let last = self.pagination.pages.max(1);
        self.page = page.clamp(1, last);
        self.fetch(notifier).await
    }

    /// 删除题目，需用户确认；取消时不发请求，返回 `Ok(false)`
    pub async fn delete(&mut self, id: &str, confirm: &dyn Confirm, notifier: &dyn Notifier) -> AppResult<bool> {
        if !confirm.confirm("Are you sure you want to delete this question? This cannot be undone.") {
            debug!("取消删除题目 {}", id);
            return Ok(false);
        }

        if let Err(e) = self.api.delete_question(id).await {
            notifier.report("删除题目失败", &e);
            return Err(e);
        }

        info!("题目 {} 已删除，重新拉取列表", id);
        notifier.notify(Toast::success("Question deleted"));
        self.fetch(notifier).await?;
        Ok(true)
    }

    /// 启用 / 停用题目
    pub async fn toggle_status(&mut self, id: &str, notifier: &dyn Notifier) -> AppResult<()> {
        let Some(current) = self.questions.iter().find(|q| q.id == id).map(|q| q.status) else {
            return Ok(());
        };

        if let Err(e) = self.api.set_question_status(id, current.toggled()).await {
            notifier.report("切换题目状态失败", &e);
            return Err(e);
        }

        notifier.notify(Toast::success("Question status updated"));
        self.fetch(notifier).await
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn rows(&self) -> Vec<QuestionRow> {
        self.questions.iter().map(QuestionRow::from).collect()
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn filters(&self) -> &QuestionFilters {
        &self.filters
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}
