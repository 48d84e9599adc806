use serde::{Deserialize, Serialize};

/// 科目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
}

/// 章节
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
}

/// 单元，只属于一个科目，自带章节列表
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub subject_id: Option<String>,
    #[serde(default)]
    pub chapters: Vec<Chapter>,
}

/// 题目当前的分类选择，空字符串表示未选
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassificationSelection {
    pub subject_id: String,
    pub unit_id: String,
    pub chapter_id: String,
}

/// 题目上冗余存储的分类名称，用于给无法解析的 id 取个可读的标签
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassificationNames {
    pub unit_name: Option<String>,
    pub chapter_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_embeds_chapters() {
        let unit: Unit = serde_json::from_str(
            r#"{"_id":"U1","name":"Algebra","subjectId":"S1","chapters":[{"_id":"C1","name":"Linear"}]}"#,
        )
        .unwrap();
        assert_eq!(unit.subject_id.as_deref(), Some("S1"));
        assert_eq!(unit.chapters[0].name, "Linear");
    }
}
