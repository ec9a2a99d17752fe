use serde::{Deserialize, Serialize};

/// 没有任何章节关键词命中时的归类结果
pub const GENERAL_UNKNOWN: &str = "General/Unknown";
/// 未加载大纲时的归类结果
pub const SYLLABUS_NOT_LOADED: &str = "Syllabus not loaded";

/// 一篇已抽取文本的试卷（或大纲）文档
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExamDocument {
    pub name: String,
    pub text: String,
}

impl ExamDocument {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

/// 从试卷中解析出的一道题
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub source_document: String,
    pub exam_label: String,
    /// 文档内从 1 开始的序号
    pub question_index: usize,
    /// 分隔符中的英文序数词，如 `ONE`
    pub ordinal: String,
    /// 截断后的题干（导出 / 展示用）
    pub question_text: String,
    pub solution_text: String,
    pub marks: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_area: Option<String>,
    /// 未截断的题干，只用于归类，不导出
    #[serde(skip)]
    pub full_question_text: String,
}

impl QuestionRecord {
    /// 写入归类结果，已归类的记录保持不变
    pub fn with_area(mut self, area: impl Into<String>) -> Self {
        if self.assigned_area.is_none() {
            self.assigned_area = Some(area.into());
        }
        self
    }

    /// 归类使用的题干：优先未截断的全文
    pub fn classification_text(&self) -> &str {
        if self.full_question_text.is_empty() {
            &self.question_text
        } else {
            &self.full_question_text
        }
    }

    /// 归类结果，未归类时视为 `General/Unknown`
    pub fn area_or_unknown(&self) -> &str {
        self.assigned_area.as_deref().unwrap_or(GENERAL_UNKNOWN)
    }
}

impl std::fmt::Display for QuestionRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // 预览最多80个字符
        let preview = crate::utils::truncate_text(&self.question_text, 80);
        match self.marks {
            Some(marks) => write!(f, "Q{} [{}分] {}", self.question_index, marks, preview),
            None => write!(f, "Q{} [分值未知] {}", self.question_index, preview),
        }
    }
}

/// 一道题的展示 / 导出行
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionRow {
    #[serde(rename = "PDF Name")]
    pub pdf_name: String,
    #[serde(rename = "Exam Type")]
    pub exam_type: String,
    #[serde(rename = "Question Number")]
    pub question_number: String,
    #[serde(rename = "Question")]
    pub question: String,
    #[serde(rename = "Suggested Solution")]
    pub suggested_solution: String,
    #[serde(rename = "Mark Allocation")]
    pub mark_allocation: String,
    #[serde(rename = "Syllabus Area")]
    pub syllabus_area: String,
}

impl From<&QuestionRecord> for QuestionRow {
    fn from(record: &QuestionRecord) -> Self {
        Self {
            pdf_name: record.source_document.clone(),
            exam_type: record.exam_label.clone(),
            question_number: format!("Q{}", record.question_index),
            question: format!("QUESTION {}: {}", record.ordinal, record.question_text),
            suggested_solution: if record.solution_text.is_empty() {
                "Not available".to_string()
            } else {
                record.solution_text.clone()
            },
            mark_allocation: record
                .marks
                .map(|m| m.to_string())
                .unwrap_or_else(|| "Not specified".to_string()),
            syllabus_area: record.area_or_unknown().to_string(),
        }
    }
}
