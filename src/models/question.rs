use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 英文 / 印地语 双语字段
///
/// 两种语言任一非空即视为"有内容"
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bilingual {
    #[serde(default)]
    pub en: String,
    #[serde(default)]
    pub hi: String,
}

impl Bilingual {
    pub fn new(en: impl Into<String>, hi: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            hi: hi.into(),
        }
    }

    /// 两种语言都为空（忽略首尾空白）
    pub fn is_blank(&self) -> bool {
        self.en.trim().is_empty() && self.hi.trim().is_empty()
    }

    /// 任一语言包含子串，`needle` 需已转小写
    pub fn contains_lowercase(&self, needle: &str) -> bool {
        self.en.to_lowercase().contains(needle) || self.hi.to_lowercase().contains(needle)
    }

    /// 列表展示用：优先英文，英文为空时用印地语
    pub fn display(&self) -> &str {
        if self.en.trim().is_empty() {
            &self.hi
        } else {
            &self.en
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.as_str().eq_ignore_ascii_case(s.trim()))
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionStatus {
    #[default]
    Active,
    Inactive,
}

impl QuestionStatus {
    pub fn toggled(self) -> Self {
        match self {
            QuestionStatus::Active => QuestionStatus::Inactive,
            QuestionStatus::Inactive => QuestionStatus::Active,
        }
    }
}

/// 选项：key 为稳定的字母编号
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionOption {
    pub key: String,
    #[serde(default)]
    pub text: Bilingual,
}

/// 题目
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub question_text: Bilingual,
    #[serde(default)]
    pub options: Vec<QuestionOption>,
    #[serde(default)]
    pub correct_option_key: String,
    #[serde(default)]
    pub explanation: Bilingual,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub status: QuestionStatus,
    #[serde(default)]
    pub order: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chapter_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chapter_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Question {
    /// 正确答案 key 是否对应某个选项
    pub fn has_valid_answer_key(&self) -> bool {
        self.options.iter().any(|o| o.key == self.correct_option_key)
    }
}

/// 创建 / 更新题目时提交的数据
///
/// `unitId`、`chapterId` 为空时整个字段不出现，不会提交空字符串
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionPayload {
    pub question_text: Bilingual,
    pub options: Vec<QuestionOption>,
    pub correct_option_key: String,
    pub explanation: Bilingual,
    pub difficulty: Difficulty,
    pub status: QuestionStatus,
    pub order: u32,
    pub subject_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chapter_id: Option<String>,
}

/// 题目列表查询条件
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionQuery {
    pub page: u32,
    pub limit: u32,
    pub search: String,
    pub difficulty: Option<Difficulty>,
}

impl QuestionQuery {
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("page", self.page.to_string()), ("limit", self.limit.to_string())];
        if !self.search.trim().is_empty() {
            pairs.push(("search", self.search.trim().to_string()));
        }
        if let Some(d) = self.difficulty {
            pairs.push(("difficulty", d.as_str().to_string()));
        }
        pairs
    }
}

/// 空字符串转为 None
pub fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_question_from_api() {
        let raw = json!({
            "_id": "q1",
            "questionText": { "en": "2 + 2 = ?", "hi": "2 + 2 = ?" },
            "options": [
                { "key": "A", "text": { "en": "3", "hi": "३" } },
                { "key": "B", "text": { "en": "4", "hi": "४" } }
            ],
            "correctOptionKey": "B",
            "difficulty": "medium",
            "status": "inactive",
            "order": 7,
            "subjectId": "S1",
            "chapterName": "Arithmetic",
            "createdAt": "2024-03-01T10:00:00Z"
        });

        let q: Question = serde_json::from_value(raw).unwrap();
        assert_eq!(q.id, "q1");
        assert_eq!(q.difficulty, Difficulty::Medium);
        assert_eq!(q.status, QuestionStatus::Inactive);
        assert_eq!(q.order, 7);
        assert_eq!(q.unit_id, None);
        assert!(q.has_valid_answer_key());
        assert!(q.explanation.is_blank());
    }

    #[test]
    fn test_payload_omits_absent_ids() {
        let payload = QuestionPayload {
            question_text: Bilingual::new("", "प्रश्न"),
            options: vec![],
            correct_option_key: "A".into(),
            explanation: Bilingual::default(),
            difficulty: Difficulty::Hard,
            status: QuestionStatus::Active,
            order: 0,
            subject_id: "S1".into(),
            unit_id: None,
            chapter_id: Some("C1".into()),
        };

        let value = serde_json::to_value(&payload).unwrap();
        assert!(value.get("unitId").is_none());
        assert_eq!(value["chapterId"], "C1");
        assert_eq!(value["difficulty"], "hard");
    }

    #[test]
    fn test_bilingual_display_falls_back_to_hindi() {
        assert_eq!(Bilingual::new("  ", "प्रश्न").display(), "प्रश्न");
        assert_eq!(Bilingual::new("Question", "प्रश्न").display(), "Question");
    }

    #[test]
    fn test_query_pairs_skip_empty_filters() {
        let query = QuestionQuery {
            page: 2,
            limit: 10,
            search: "  ".into(),
            difficulty: Some(Difficulty::Easy),
        };
        assert_eq!(
            query.to_query_pairs(),
            vec![
                ("page", "2".to_string()),
                ("limit", "10".to_string()),
                ("difficulty", "easy".to_string())
            ]
        );
    }
}
