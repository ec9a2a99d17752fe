use crate::models::coverage::{CoverageRow, ExtractionStats, KeywordRow};
use crate::models::question::QuestionRow;
use serde::Serialize;

/// 关键词来源
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum KeywordSourceKind {
    /// 从大纲文本动态生成
    Dynamic,
    /// 内置的静态章节关键词
    Static,
    /// 没有大纲
    None,
}

impl std::fmt::Display for KeywordSourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            KeywordSourceKind::Dynamic => "动态（大纲文本）",
            KeywordSourceKind::Static => "静态（内置章节）",
            KeywordSourceKind::None => "无大纲",
        };
        write!(f, "{}", name)
    }
}

/// 导出报告
///
/// 三张表（题目、章节覆盖、章节关键词）加统计和警告
#[derive(Debug, Clone, Serialize)]
pub struct ExtractionReport {
    pub generated_at: String,
    pub keyword_source: KeywordSourceKind,
    pub questions: Vec<QuestionRow>,
    pub coverage: Vec<CoverageRow>,
    pub keywords: Vec<KeywordRow>,
    pub stats: ExtractionStats,
    pub warnings: Vec<String>,
}
