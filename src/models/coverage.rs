use serde::Serialize;

/// 每个大纲章节的覆盖统计
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoverageRow {
    pub area: String,
    pub total_marks: u64,
    pub question_count: usize,
    pub percentage_of_total: f64,
}

/// 章节关键词参考行
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordRow {
    #[serde(rename = "Syllabus Area")]
    pub area: String,
    #[serde(rename = "Keywords")]
    pub keywords: String,
    #[serde(rename = "Keyword Count")]
    pub keyword_count: usize,
}

/// 抽取统计
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractionStats {
    pub total_documents: usize,
    pub total_questions: usize,
    pub questions_with_marks: usize,
    pub areas_covered: usize,
}
