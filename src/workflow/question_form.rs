//! 题目表单控制器
//!
//! 弹窗编辑和整页编辑共用这一个控制器，校验和保存逻辑只有一份。
//!
//! 流程：
//! 1. `init`：加载科目；带 id 时拉取题目并回填（含级联选择）
//! 2. 编辑字段
//! 3. `submit`：本地校验 → 组装 payload（去掉空 id）→ 创建或更新 → 提示 → 回调
//!
//! 控制器本身不做页面跳转，跳转由外层壳子决定。

use crate::api::{ClassificationApi, QuestionApi};
use crate::error::{AppError, AppResult, ValidationError};
use crate::models::question::non_empty;
use crate::models::{
    Bilingual, ClassificationNames, ClassificationSelection, Difficulty, Question, QuestionOption, QuestionPayload,
    QuestionStatus,
};
use crate::notify::{Notifier, Toast};
use crate::workflow::classification_cascade::ClassificationCascade;
use std::sync::Arc;
use tracing::{debug, warn};

/// 新建题目默认的选项个数
const DEFAULT_OPTION_COUNT: usize = 4;

/// 表单字段
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionFormState {
    pub question_text: Bilingual,
    pub explanation: Bilingual,
    pub options: Vec<QuestionOption>,
    pub correct_option_key: String,
    pub difficulty: Difficulty,
    pub status: QuestionStatus,
    pub order: u32,
}

impl Default for QuestionFormState {
    fn default() -> Self {
        let options = (b'A'..)
            .take(DEFAULT_OPTION_COUNT)
            .map(|c| QuestionOption {
                key: (c as char).to_string(),
                text: Bilingual::default(),
            })
            .collect();
        Self {
            question_text: Bilingual::default(),
            explanation: Bilingual::default(),
            options,
            correct_option_key: "A".to_string(),
            difficulty: Difficulty::Easy,
            status: QuestionStatus::Active,
            order: 0,
        }
    }
}

impl QuestionFormState {
    fn from_question(question: &Question) -> Self {
        Self {
            question_text: question.question_text.clone(),
            explanation: question.explanation.clone(),
            options: question.options.clone(),
            correct_option_key: question.correct_option_key.clone(),
            difficulty: question.difficulty,
            status: question.status,
            order: question.order,
        }
    }
}

/// 题目表单控制器
pub struct QuestionFormController<A> {
    api: Arc<A>,
    question_id: Option<String>,
    state: QuestionFormState,
    cascade: ClassificationCascade,
    loading: bool,
    saving: bool,
}

impl<A: QuestionApi + ClassificationApi> QuestionFormController<A> {
    /// 创建控制器
    ///
    /// # 参数
    /// - `api`: 后端接口
    /// - `question_id`: 有值为编辑，`None` 为新建
    pub fn new(api: Arc<A>, question_id: Option<String>) -> Self {
        Self {
            api,
            question_id: question_id.filter(|id| !id.is_empty()),
            state: QuestionFormState::default(),
            cascade: ClassificationCascade::new(),
            loading: false,
            saving: false,
        }
    }

    /// 加载科目，编辑模式下拉取题目并回填
    pub async fn init(&mut self, notifier: &dyn Notifier) -> AppResult<()> {
        self.loading = true;
        self.cascade.load_subjects(self.api.as_ref()).await;

        let result = match self.question_id.clone() {
            Some(id) => self.load_question(&id).await,
            None => Ok(()),
        };
        self.loading = false;

        if let Err(e) = &result {
            notifier.report("加载题目失败", e);
        }
        result
    }

    async fn load_question(&mut self, id: &str) -> AppResult<()> {
        debug!("加载题目 {}", id);
        let question = self.api.get_question(id).await?;
        self.populate(&question).await;
        Ok(())
    }

    /// 用已有题目回填表单
    pub async fn populate(&mut self, question: &Question) {
        self.state = QuestionFormState::from_question(question);
        let selection = ClassificationSelection {
            subject_id: question.subject_id.clone().unwrap_or_default(),
            unit_id: question.unit_id.clone().unwrap_or_default(),
            chapter_id: question.chapter_id.clone().unwrap_or_default(),
        };
        let names = ClassificationNames {
            unit_name: question.unit_name.clone(),
            chapter_name: question.chapter_name.clone(),
        };
        self.cascade.hydrate(self.api.as_ref(), selection, names).await;
    }

    pub fn question_id(&self) -> Option<&str> {
        self.question_id.as_deref()
    }

    pub fn is_edit(&self) -> bool {
        self.question_id.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn state(&self) -> &QuestionFormState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut QuestionFormState {
        &mut self.state
    }

    pub fn cascade(&self) -> &ClassificationCascade {
        &self.cascade
    }

    pub async fn select_subject(&mut self, subject_id: &str) {
        self.cascade.select_subject(self.api.as_ref(), subject_id).await;
    }

    pub fn select_unit(&mut self, unit_id: &str) {
        self.cascade.select_unit(unit_id);
    }

    pub fn select_chapter(&mut self, chapter_id: &str) {
        self.cascade.select_chapter(chapter_id);
    }

    /// 追加一个选项，key 取第一个未使用的字母
    pub fn add_option(&mut self) -> Option<&str> {
        let key = (b'A'..=b'Z')
            .map(|c| (c as char).to_string())
            .find(|k| !self.state.options.iter().any(|o| &o.key == k))?;
        self.state.options.push(QuestionOption {
            key,
            text: Bilingual::default(),
        });
        self.state.options.last().map(|o| o.key.as_str())
    }

    /// 删除选项；删掉的恰好是正确答案时，正确答案改为第一个选项
    pub fn remove_option(&mut self, key: &str) {
        self.state.options.retain(|o| o.key != key);
        if self.state.correct_option_key == key {
            self.state.correct_option_key = self.state.options.first().map(|o| o.key.clone()).unwrap_or_default();
        }
    }

    pub fn set_option_text(&mut self, key: &str, text: Bilingual) {
        if let Some(option) = self.state.options.iter_mut().find(|o| o.key == key) {
            option.text = text;
        }
    }

    /// 提交前的必填校验
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.state.question_text.is_blank() {
            return Err(ValidationError::MissingQuestionText);
        }
        if self.cascade.selection().subject_id.trim().is_empty() {
            return Err(ValidationError::MissingSubject);
        }
        Ok(())
    }

    /// 组装提交数据，空的单元 / 章节 id 不提交
    pub fn build_payload(&self) -> QuestionPayload {
        let selection = self.cascade.selection();
        QuestionPayload {
            question_text: self.state.question_text.clone(),
            options: self.state.options.clone(),
            correct_option_key: self.state.correct_option_key.clone(),
            explanation: self.state.explanation.clone(),
            difficulty: self.state.difficulty,
            status: self.state.status,
            order: self.state.order,
            subject_id: selection.subject_id.trim().to_string(),
            unit_id: non_empty(&selection.unit_id),
            chapter_id: non_empty(&selection.chapter_id),
        }
    }

    /// 保存
    ///
    /// # 参数
    /// - `notifier`: 成功 / 失败提示
    /// - `on_complete`: 保存成功后的回调，参数为后端返回的题目
    ///
    /// # 返回
    /// 校验失败时直接返回 `AppError::Validation`，不会发请求
    pub async fn submit<F>(&mut self, notifier: &dyn Notifier, on_complete: F) -> AppResult<Question>
    where
        F: FnOnce(&Question),
    {
        if let Err(e) = self.validate() {
            warn!("⚠️ 题目校验未通过: {}", e);
            notifier.notify(Toast::error(e.to_string()));
            return Err(AppError::Validation(e));
        }

        let payload = self.build_payload();
        self.saving = true;
        let result = match self.question_id.as_deref() {
            Some(id) => self.api.update_question(id, &payload).await,
            None => self.api.create_question(&payload).await,
        };
        self.saving = false;

        match result {
            Ok(question) => {
                let message = if self.is_edit() {
                    "Question updated successfully"
                } else {
                    "Question created successfully"
                };
                notifier.notify(Toast::success(message));
                on_complete(&question);
                Ok(question)
            }
            Err(e) => {
                notifier.report("保存题目失败", &e);
                Err(e)
            }
        }
    }
}
