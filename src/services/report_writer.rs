//! 报告写入服务
//!
//! 只负责组装和写出报告、追加警告，不关心流程

use crate::error::{AppError, AppResult, DocumentWarning};
use crate::models::{ExtractionReport, KeywordMap, KeywordSourceKind, QuestionRecord, QuestionRow};
use crate::services::coverage_service::{aggregate, extraction_stats, keyword_rows};
use std::fs::{self, OpenOptions};
use std::io::Write;
use tracing::debug;

/// 组装导出报告
pub fn build_report(
    keyword_source: KeywordSourceKind,
    keyword_map: Option<&KeywordMap>,
    records: &[QuestionRecord],
    warnings: &[DocumentWarning],
    total_documents: usize,
) -> ExtractionReport {
    ExtractionReport {
        generated_at: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        keyword_source,
        questions: records.iter().map(QuestionRow::from).collect(),
        coverage: aggregate(records),
        keywords: keyword_map.map(keyword_rows).unwrap_or_default(),
        stats: extraction_stats(total_documents, records),
        warnings: warnings.iter().map(|w| w.to_string()).collect(),
    }
}

/// 报告写入服务
pub struct ReportWriter {
    report_file_path: String,
    warn_file_path: String,
}

impl ReportWriter {
    /// 使用自定义文件路径创建
    pub fn with_paths(report_path: impl Into<String>, warn_path: impl Into<String>) -> Self {
        Self {
            report_file_path: report_path.into(),
            warn_file_path: warn_path.into(),
        }
    }

    pub fn report_path(&self) -> &str {
        &self.report_file_path
    }

    /// 以格式化 JSON 写出报告
    pub fn write_report(&self, report: &ExtractionReport) -> AppResult<()> {
        let json = serde_json::to_string_pretty(report)?;
        fs::write(&self.report_file_path, json)
            .map_err(|e| AppError::file_write_failed(&self.report_file_path, e))?;

        debug!(
            "报告已写入: {} | 题目 {} | 章节 {}",
            self.report_file_path,
            report.questions.len(),
            report.coverage.len()
        );
        Ok(())
    }

    /// 追加警告，每条一行
    pub fn write_warnings(&self, warnings: &[DocumentWarning]) -> AppResult<()> {
        if warnings.is_empty() {
            return Ok(());
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.warn_file_path)
            .map_err(|e| AppError::file_write_failed(&self.warn_file_path, e))?;

        for warning in warnings {
            let warn_msg = format!("文档 {} | {}\n", warning.document(), warning);
            file.write_all(warn_msg.as_bytes())
                .map_err(|e| AppError::file_write_failed(&self.warn_file_path, e))?;
        }

        Ok(())
    }
}
