//! 题目编辑的两个外壳：弹窗和整页
//!
//! 两者都只是包一层 `QuestionFormController`，区别只在保存完成后做什么：
//! 弹窗关闭自身并通知列表刷新；整页返回一个回到列表的跳转。

use crate::api::{ClassificationApi, QuestionApi};
use crate::error::AppResult;
use crate::models::Question;
use crate::notify::Notifier;
use crate::shell::{Navigation, Route};
use crate::workflow::QuestionFormController;
use std::sync::Arc;

/// 列表页里的弹窗编辑器
pub struct QuestionModal<A> {
    api: Arc<A>,
    form: Option<QuestionFormController<A>>,
}

impl<A: QuestionApi + ClassificationApi> QuestionModal<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self { api, form: None }
    }

    /// 打开弹窗，`question_id` 为空表示新建
    pub async fn open(&mut self, question_id: Option<String>, notifier: &dyn Notifier) -> AppResult<()> {
        let mut form = QuestionFormController::new(self.api.clone(), question_id);
        let result = form.init(notifier).await;
        self.form = Some(form);
        result
    }

    pub fn close(&mut self) {
        self.form = None;
    }

    pub fn is_open(&self) -> bool {
        self.form.is_some()
    }

    pub fn form(&self) -> Option<&QuestionFormController<A>> {
        self.form.as_ref()
    }

    pub fn form_mut(&mut self) -> Option<&mut QuestionFormController<A>> {
        self.form.as_mut()
    }

    /// 保存；成功后关闭弹窗并返回 `true`，调用方据此刷新列表
    pub async fn save(&mut self, notifier: &dyn Notifier) -> AppResult<bool> {
        let Some(form) = self.form.as_mut() else {
            return Ok(false);
        };

        let mut saved = false;
        form.submit(notifier, |_| saved = true).await?;
        if saved {
            self.close();
        }
        Ok(saved)
    }
}

/// 独立的新建 / 编辑页面
pub struct QuestionPage<A> {
    form: QuestionFormController<A>,
}

impl<A: QuestionApi + ClassificationApi> QuestionPage<A> {
    /// 按路由打开页面
    pub async fn open(api: Arc<A>, question_id: Option<String>, notifier: &dyn Notifier) -> AppResult<Self> {
        let mut form = QuestionFormController::new(api, question_id);
        form.init(notifier).await?;
        Ok(Self { form })
    }

    pub fn form(&self) -> &QuestionFormController<A> {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut QuestionFormController<A> {
        &mut self.form
    }

    /// 保存成功后返回到列表页的跳转
    pub async fn save(&mut self, notifier: &dyn Notifier) -> AppResult<Navigation> {
        let mut saved: Option<Question> = None;
        self.form.submit(notifier, |q| saved = Some(q.clone())).await?;
        Ok(match saved {
            Some(_) => Navigation::Push(Route::Questions),
            None => Navigation::Stay,
        })
    }

    /// 取消编辑
    pub fn cancel(&self) -> Navigation {
        Navigation::Push(Route::Questions)
    }
}
