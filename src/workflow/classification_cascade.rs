//! 分类级联选择：科目 → 单元 → 章节
//!
//! - 选科目：清空单元和章节，一次请求拿到该科目的单元（单元自带章节）
//! - 选单元：清空章节，章节列表直接从已拿到的单元里过滤，不再请求
//! - 已保存的单元 / 章节 id 在当前列表里找不到时，不丢弃，
//!   而是补一个带"preserved"标记的选项，保存时原样提交回去

use crate::api::ClassificationApi;
use crate::models::{Chapter, ClassificationNames, ClassificationSelection, Subject, Unit};
use tracing::{debug, warn};

/// 下拉选项
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    /// 当前数据里解析不到、为保留原值而补上的选项
    pub preserved: bool,
}

impl SelectOption {
    fn known(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
            preserved: false,
        }
    }

    fn preserved(kind: &str, value: &str, name: Option<&str>) -> Self {
        let label = match name.filter(|n| !n.trim().is_empty()) {
            Some(n) => format!("{} (preserved, unknown {})", n, kind),
            None => format!("Unknown {} (preserved: {})", kind, value),
        };
        Self {
            value: value.to_string(),
            label,
            preserved: true,
        }
    }
}

/// 级联选择器状态
#[derive(Debug, Clone, Default)]
pub struct ClassificationCascade {
    subjects: Vec<Subject>,
    units: Vec<Unit>,
    selection: ClassificationSelection,
    names: ClassificationNames,
    loading_units: bool,
}

impl ClassificationCascade {
    pub fn new() -> Self {
        Self::default()
    }

    /// 加载科目列表，失败时记录日志并保持为空
    pub async fn load_subjects<A: ClassificationApi>(&mut self, api: &A) {
        match api.list_subjects().await {
            Ok(subjects) => {
                debug!("已加载 {} 个科目", subjects.len());
                self.subjects = subjects;
            }
            Err(e) => {
                warn!("⚠️ 加载科目失败: {}", e);
                self.subjects.clear();
            }
        }
    }

    /// 选择科目，单元和章节一律清空
    pub async fn select_subject<A: ClassificationApi>(&mut self, api: &A, subject_id: &str) {
        self.selection.subject_id = subject_id.to_string();
        self.selection.unit_id.clear();
        self.selection.chapter_id.clear();
        self.names = ClassificationNames::default();
        self.fetch_units(api).await;
    }

    /// 编辑已有题目时回填：拉取单元列表，但保留原有的单元 / 章节 id
    pub async fn hydrate<A: ClassificationApi>(
        &mut self,
        api: &A,
        selection: ClassificationSelection,
        names: ClassificationNames,
    ) {
        self.selection = selection;
        self.names = names;
        self.fetch_units(api).await;
    }

    async fn fetch_units<A: ClassificationApi>(&mut self, api: &A) {
        self.units.clear();
        if self.selection.subject_id.is_empty() {
            return;
        }

        self.loading_units = true;
        match api.list_units(&self.selection.subject_id).await {
            Ok(units) => {
                debug!("科目 {} 下有 {} 个单元", self.selection.subject_id, units.len());
                self.units = units;
            }
            // 不重试，单元列表留空
            Err(e) => warn!("⚠️ 加载单元失败 (科目 {}): {}", self.selection.subject_id, e),
        }
        self.loading_units = false;
    }

    /// 选择单元，章节清空；纯内存操作
    pub fn select_unit(&mut self, unit_id: &str) {
        self.selection.unit_id = unit_id.to_string();
        self.selection.chapter_id.clear();
        self.names = ClassificationNames::default();
    }

    pub fn select_chapter(&mut self, chapter_id: &str) {
        self.selection.chapter_id = chapter_id.to_string();
        self.names.chapter_name = None;
    }

    pub fn selection(&self) -> &ClassificationSelection {
        &self.selection
    }

    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    pub fn is_loading_units(&self) -> bool {
        self.loading_units
    }

    fn selected_unit(&self) -> Option<&Unit> {
        self.units.iter().find(|u| u.id == self.selection.unit_id)
    }

    /// 当前单元下的章节
    pub fn chapters(&self) -> &[Chapter] {
        self.selected_unit().map(|u| u.chapters.as_slice()).unwrap_or(&[])
    }

    pub fn subject_name(&self) -> Option<&str> {
        self.subjects
            .iter()
            .find(|s| s.id == self.selection.subject_id)
            .map(|s| s.name.as_str())
    }

    pub fn subject_options(&self) -> Vec<SelectOption> {
        let mut options: Vec<SelectOption> = self.subjects.iter().map(|s| SelectOption::known(&s.id, &s.name)).collect();
        let id = &self.selection.subject_id;
        if !id.is_empty() && !self.subjects.is_empty() && !self.subjects.iter().any(|s| &s.id == id) {
            options.push(SelectOption::preserved("subject", id, None));
        }
        options
    }

    /// 单元选项；已选单元不在列表里时补一个保留项
    pub fn unit_options(&self) -> Vec<SelectOption> {
        let mut options: Vec<SelectOption> = self.units.iter().map(|u| SelectOption::known(&u.id, &u.name)).collect();
        let id = &self.selection.unit_id;
        if !id.is_empty() && self.selected_unit().is_none() {
            options.push(SelectOption::preserved("unit", id, self.names.unit_name.as_deref()));
        }
        options
    }

    /// 章节选项；已选章节不在当前单元的章节里时补一个保留项
    pub fn chapter_options(&self) -> Vec<SelectOption> {
        let chapters = self.chapters();
        let mut options: Vec<SelectOption> = chapters.iter().map(|c| SelectOption::known(&c.id, &c.name)).collect();
        let id = &self.selection.chapter_id;
        if !id.is_empty() && !chapters.iter().any(|c| &c.id == id) {
            options.push(SelectOption::preserved("chapter", id, self.names.chapter_name.as_deref()));
        }
        options
    }
}
