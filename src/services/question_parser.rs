//! 试卷题目解析
//!
//! 按 `QUESTION ONE` .. `QUESTION TEN` 切分题目块，再按 SOLUTION / ANSWER / WORKINGS
//! 拆分题干和参考答案，并读取 `(Total: N marks)` 分值

use crate::config::ExtractionLimits;
use crate::error::DocumentWarning;
use crate::models::{ExamDocument, QuestionRecord};
use crate::utils::text::{normalize, normalize_lines, truncate_text};
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, warn};

/// 考试场次：月份 + 年份 + 行内剩余描述
static EXAM_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(NOVEMBER|MAY|MARCH|SEPTEMBER)\s+\d{4}\s+([^\n]*)").expect("valid exam label regex")
});

static QUESTION_DELIMITER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)QUESTION\s+(ONE|TWO|THREE|FOUR|FIVE|SIX|SEVEN|EIGHT|NINE|TEN)\b")
        .expect("valid question delimiter regex")
});

/// 答案起始标记，复数形式一并吞掉
///
/// 按整词匹配：`ANSWERED`、`RESOLUTIONS` 这类词不会被当成答案标记
static SOLUTION_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:SOLUTIONS?|ANSWERS?|WORKINGS)\b").expect("valid solution marker regex")
});

static TOTAL_MARKS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\(Total:\s*(\d+)\s*marks\)").expect("valid total marks regex")
});

/// 试卷题目解析器
#[derive(Debug, Clone, Copy, Default)]
pub struct QuestionParser {
    limits: ExtractionLimits,
}

impl QuestionParser {
    pub fn new(limits: ExtractionLimits) -> Self {
        Self { limits }
    }

    /// 解析一篇试卷
    ///
    /// # 返回
    /// 按文档顺序排列的题目（未归类）；没有识别到任何题目时返回警告
    pub fn parse(&self, document: &ExamDocument) -> Result<Vec<QuestionRecord>, DocumentWarning> {
        if document.text.trim().is_empty() {
            return Err(DocumentWarning::EmptyDocument {
                document: document.name.clone(),
            });
        }

        let text = normalize_lines(&document.text);
        let exam_label = detect_exam_label(&text);

        let delimiters: Vec<(String, usize, usize)> = QUESTION_DELIMITER
            .captures_iter(&text)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let ordinal = caps.get(1)?.as_str().to_uppercase();
                Some((ordinal, whole.start(), whole.end()))
            })
            .collect();

        if delimiters.is_empty() {
            return Err(DocumentWarning::malformed(
                &document.name,
                "未找到 QUESTION ONE..TEN 题目分隔符",
            ));
        }

        debug!("{} 识别到 {} 个题目块", document.name, delimiters.len());

        let records = delimiters
            .iter()
            .enumerate()
            .map(|(index, (ordinal, _, block_start))| {
                let block_end = delimiters
                    .get(index + 1)
                    .map(|(_, next_start, _)| *next_start)
                    .unwrap_or(text.len());
                self.parse_block(
                    &text[*block_start..block_end],
                    document,
                    &exam_label,
                    index + 1,
                    ordinal,
                )
            })
            .collect();

        Ok(records)
    }

    fn parse_block(
        &self,
        block: &str,
        document: &ExamDocument,
        exam_label: &str,
        question_index: usize,
        ordinal: &str,
    ) -> QuestionRecord {
        let (question_part, solution_part) = split_solution(block);
        let marks = extract_marks(question_part);
        let full_question_text = normalize(question_part);

        QuestionRecord {
            source_document: document.name.clone(),
            exam_label: exam_label.to_string(),
            question_index,
            ordinal: ordinal.to_string(),
            question_text: truncate_text(&full_question_text, self.limits.text_truncate_len),
            solution_text: truncate_text(&normalize(solution_part), self.limits.text_truncate_len),
            marks,
            assigned_area: None,
            full_question_text,
        }
    }
}

/// 使用默认限制解析试卷，无法解析时返回空列表
pub fn parse_exam(raw_text: &str, document_name: &str) -> Vec<QuestionRecord> {
    let document = ExamDocument::new(document_name, raw_text);
    QuestionParser::default().parse(&document).unwrap_or_else(|warning| {
        warn!("⚠️ {}", warning);
        Vec::new()
    })
}

/// 考试场次，如 `NOVEMBER 2023 FINANCIAL REPORTING` → `NOVEMBER FINANCIAL REPORTING`
///
/// 找不到时为空字符串
pub fn detect_exam_label(text: &str) -> String {
    EXAM_LABEL
        .captures(text)
        .map(|caps| {
            let month = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
            let description = caps.get(2).map(|m| m.as_str().trim()).unwrap_or_default();
            format!("{} {}", month, description).trim().to_string()
        })
        .unwrap_or_default()
}

/// 在第一个答案标记处拆分，返回（题干，答案）；没有标记时答案为空
pub fn split_solution(block: &str) -> (&str, &str) {
    match SOLUTION_MARKER.find(block) {
        Some(marker) => (&block[..marker.start()], &block[marker.end()..]),
        None => (block, ""),
    }
}

/// `(Total: N marks)` 中的分值
pub fn extract_marks(question_text: &str) -> Option<u32> {
    TOTAL_MARKS
        .captures(question_text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}
