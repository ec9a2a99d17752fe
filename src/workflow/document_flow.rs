//! 单篇试卷处理流程 - 流程层
//!
//! 流程顺序：
//! 1. 解析题目块（题干 / 答案 / 分值）
//! 2. 按章节关键词归类（未加载大纲时写入 `Syllabus not loaded`）
//!
//! 不持有可变状态，多个文档可以并发共用同一个流程对象

use std::sync::Arc;
use tracing::{info, warn};

use crate::config::ExtractionLimits;
use crate::error::DocumentWarning;
use crate::models::{ExamDocument, KeywordMap, QuestionRecord};
use crate::services::area_classifier::assign_area;
use crate::services::question_parser::QuestionParser;
use crate::workflow::document_ctx::DocumentCtx;

/// 单篇试卷处理流程
#[derive(Debug, Clone)]
pub struct DocumentFlow {
    parser: QuestionParser,
    keyword_map: Option<Arc<KeywordMap>>,
    verbose_logging: bool,
}

impl DocumentFlow {
    /// 创建新的处理流程
    ///
    /// `keyword_map` 为 `None` 表示没有加载大纲
    pub fn new(limits: ExtractionLimits, keyword_map: Option<Arc<KeywordMap>>, verbose_logging: bool) -> Self {
        Self {
            parser: QuestionParser::new(limits),
            keyword_map,
            verbose_logging,
        }
    }

    /// 处理一篇试卷
    ///
    /// # 返回
    /// 已归类的题目；无法识别题目结构时返回警告
    pub fn run(&self, document: &ExamDocument, ctx: &DocumentCtx) -> Result<Vec<QuestionRecord>, DocumentWarning> {
        let records = match self.parser.parse(document) {
            Ok(records) => records,
            Err(warning) => {
                warn!("{} ⚠️ {}", ctx, warning);
                return Err(warning);
            }
        };

        info!("{} ✓ 解析出 {} 道题目", ctx, records.len());

        let keyword_map = self.keyword_map.as_deref();
        let classified: Vec<QuestionRecord> = records
            .into_iter()
            .map(|record| assign_area(record, keyword_map))
            .collect();

        if self.verbose_logging {
            for record in &classified {
                info!("{}   {} → {}", ctx, record, record.area_or_unknown());
            }
        }

        Ok(classified)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GENERAL_UNKNOWN, SYLLABUS_NOT_LOADED};
    use crate::services::keyword_service::{build_syllabus, static_keywords};

    const PAPER: &str = "MAY 2022 CORPORATE REPORTING\nQUESTION ONE\nPrepare the consolidated statement of financial position of the group and its subsidiary, including goodwill. (Total: 30 marks)\nSOLUTION\nGoodwill is...\nQUESTION TWO\nDiscuss the weather. (Total: 10 marks)";

    #[test]
    fn test_run_with_static_keywords() {
        let flow = DocumentFlow::new(ExtractionLimits::default(), Some(Arc::new(static_keywords())), false);
        let records = flow
            .run(&ExamDocument::new("may.txt", PAPER), &DocumentCtx::new(1, "may.txt"))
            .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(
            records[0].assigned_area.as_deref(),
            Some("Preparation of financial statements for a group")
        );
        assert_eq!(records[1].assigned_area.as_deref(), Some(GENERAL_UNKNOWN));
        assert_eq!(records[0].exam_label, "MAY CORPORATE REPORTING");
    }

    #[test]
    fn test_long_question_is_classified_on_full_text() {
        let syllabus = build_syllabus(
            "A) Revenue Recognition\nCovers IFRS 15 rules for customer contracts.\nB) Leases\nCovers IFRS 16 lease accounting for lessees.\n",
            ExtractionLimits::default(),
        );
        // 前 500 个字符里没有任何章节关键词
        let scenario = "The entity operates a chain of retail stores. ".repeat(12);
        let paper = format!(
            "QUESTION ONE\n{}Explain how the lessee should account for the new lease under IFRS 16. (Total: 20 marks)\nSOLUTION\nRecognise a right-of-use asset.",
            scenario
        );

        let flow = DocumentFlow::new(ExtractionLimits::default(), Some(Arc::new(syllabus.keyword_map())), false);
        let records = flow
            .run(&ExamDocument::new("long.txt", paper), &DocumentCtx::new(1, "long.txt"))
            .unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].marks, Some(20));
        assert_eq!(records[0].question_text.chars().count(), 503);
        assert!(records[0].question_text.ends_with("..."));
        assert_eq!(records[0].assigned_area.as_deref(), Some("Leases"));
    }

    #[test]
    fn test_run_without_syllabus() {
        let flow = DocumentFlow::new(ExtractionLimits::default(), None, false);
        let records = flow
            .run(&ExamDocument::new("may.txt", PAPER), &DocumentCtx::new(1, "may.txt"))
            .unwrap();
        assert!(records
            .iter()
            .all(|r| r.assigned_area.as_deref() == Some(SYLLABUS_NOT_LOADED)));
    }

    #[test]
    fn test_run_reports_malformed_document() {
        let flow = DocumentFlow::new(ExtractionLimits::default(), None, false);
        let result = flow.run(
            &ExamDocument::new("cover.txt", "Cover page only"),
            &DocumentCtx::new(2, "cover.txt"),
        );
        assert!(matches!(result, Err(DocumentWarning::MalformedDocument { .. })));
    }
}
