//! 批量试卷处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责批量试卷的处理和资源管理。
//!
//! ## 核心功能
//!
//! 1. **应用初始化**：写日志文件头、加载大纲、确定关键词来源
//! 2. **批量加载**：扫描并加载所有待处理的试卷文本（`Vec<ExamDocument>`）
//! 3. **并发控制**：使用 Semaphore 限制并发数量，解析在阻塞线程池中执行
//! 4. **分批处理**：将试卷分批次处理，每批完成后再开始下一批
//! 5. **警告收集**：单个文档失败只记为警告，不影响其他文档
//! 6. **全局统计**：汇总覆盖统计并写出报告

use crate::config::Config;
use crate::error::DocumentWarning;
use crate::models::{load_all_text_files, ExamDocument, ExtractionReport, KeywordMap, KeywordSourceKind, QuestionRecord};
use crate::orchestrator::syllabus_loader::{log_keyword_summary, select_keyword_source};
use crate::services::report_writer::{build_report, ReportWriter};
use crate::utils::logging::{
    append_log_line, init_log_file, log_batch_complete, log_batch_start, log_documents_loaded, log_startup,
    print_final_stats,
};
use crate::workflow::{DocumentCtx, DocumentFlow};
use anyhow::{Context, Result};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{error, info, warn};

/// 应用主结构
pub struct App {
    config: Config,
    keyword_source: KeywordSourceKind,
    keyword_map: Option<Arc<KeywordMap>>,
    /// 初始化阶段（大纲）产生的警告
    startup_warnings: Vec<DocumentWarning>,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        // 初始化日志文件
        init_log_file(&config.output_log_file)
            .with_context(|| format!("无法写入日志文件: {}", config.output_log_file))?;

        let (source, startup_warnings) = select_keyword_source(&config).await;
        let keyword_source = source
            .as_ref()
            .map(|s| s.kind())
            .unwrap_or(KeywordSourceKind::None);
        let keyword_map = source.map(|s| Arc::new(s.keyword_map()));

        log_startup(config.max_concurrent_documents, &keyword_source.to_string());
        if let Some(map) = keyword_map.as_deref() {
            log_keyword_summary(map);
        }

        Ok(Self {
            config,
            keyword_source,
            keyword_map,
            startup_warnings,
        })
    }

    pub fn keyword_source(&self) -> KeywordSourceKind {
        self.keyword_source
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<ExtractionReport> {
        // 加载所有待处理的试卷
        info!("\n📁 正在扫描待处理的试卷...");
        let (documents, load_warnings) = load_all_text_files(&self.config.exam_folder).await?;
        let total_documents = documents.len() + load_warnings.len();

        let mut warnings = self.startup_warnings.clone();
        warnings.extend(load_warnings);

        if documents.is_empty() {
            warn!("⚠️ 没有找到待处理的试卷文本");
        } else {
            log_documents_loaded(documents.len(), self.config.max_concurrent_documents);
        }

        // 处理所有试卷
        let outcome = self.process_all_documents(documents).await?;
        warnings.extend(outcome.warnings);

        let report = build_report(
            self.keyword_source,
            self.keyword_map.as_deref(),
            &outcome.records,
            &warnings,
            total_documents,
        );

        let writer = ReportWriter::with_paths(&self.config.output_report_file, &self.config.output_warn_file);
        writer.write_report(&report)?;
        writer.write_warnings(&warnings)?;

        append_log_line(
            &self.config.output_log_file,
            &format!(
                "文档 {} | 题目 {} | 带分值 {} | 章节 {} | 警告 {}",
                report.stats.total_documents,
                report.stats.total_questions,
                report.stats.questions_with_marks,
                report.stats.areas_covered,
                report.warnings.len()
            ),
        )?;

        // 输出最终统计
        print_final_stats(
            report.stats.total_documents,
            report.stats.total_questions,
            report.stats.questions_with_marks,
            report.stats.areas_covered,
            report.warnings.len(),
            writer.report_path(),
        );

        Ok(report)
    }

    /// 处理所有试卷，结果保持文档顺序
    async fn process_all_documents(&self, documents: Vec<ExamDocument>) -> Result<BatchOutcome> {
        let batch_size = self.config.max_concurrent_documents.max(1);
        let semaphore = Arc::new(Semaphore::new(batch_size));
        let flow = Arc::new(DocumentFlow::new(
            self.config.limits,
            self.keyword_map.clone(),
            self.config.verbose_logging,
        ));
        let total_documents = documents.len();
        let total_batches = total_documents.div_ceil(batch_size);
        let mut outcome = BatchOutcome::default();

        // 分批处理
        for (batch_idx, batch_documents) in documents.chunks(batch_size).enumerate() {
            let batch_num = batch_idx + 1;
            let batch_start = batch_idx * batch_size;

            log_batch_start(
                batch_num,
                total_batches,
                batch_start + 1,
                batch_start + batch_documents.len(),
                total_documents,
            );

            let results = self
                .process_batch(batch_documents, batch_start, semaphore.clone(), flow.clone())
                .await?;

            let mut success = 0;
            for result in results {
                match result {
                    Ok(records) => {
                        success += 1;
                        outcome.records.extend(records);
                    }
                    Err(warning) => outcome.warnings.push(warning),
                }
            }

            log_batch_complete(batch_num, success, batch_documents.len());
        }

        Ok(outcome)
    }

    /// 处理单个批次
    async fn process_batch(
        &self,
        batch_documents: &[ExamDocument],
        batch_start: usize,
        semaphore: Arc<Semaphore>,
        flow: Arc<DocumentFlow>,
    ) -> Result<Vec<Result<Vec<QuestionRecord>, DocumentWarning>>> {
        let mut batch_handles = Vec::new();

        // 为本批创建并发任务
        for (idx, document) in batch_documents.iter().enumerate() {
            let document_index = batch_start + idx + 1;
            let permit = semaphore.clone().acquire_owned().await?;
            let flow = flow.clone();
            let document = document.clone();
            let document_name = document.name.clone();

            // 解析是纯 CPU 计算，放到阻塞线程池
            let handle = tokio::task::spawn_blocking(move || {
                let _permit = permit;
                let ctx = DocumentCtx::new(document_index, &document.name);
                flow.run(&document, &ctx)
            });
            batch_handles.push((document_index, document_name, handle));
        }

        // 按文档顺序等待本批所有任务完成
        let mut results = Vec::with_capacity(batch_handles.len());

        for (document_index, document_name, handle) in batch_handles {
            match handle.await {
                Ok(result) => results.push(result),
                Err(e) => {
                    error!("[文档 {}] 任务执行失败: {}", document_index, e);
                    results.push(Err(DocumentWarning::malformed(
                        document_name,
                        format!("任务执行失败: {}", e),
                    )));
                }
            }
        }

        Ok(results)
    }
}

/// 批处理结果
#[derive(Debug, Default)]
struct BatchOutcome {
    records: Vec<QuestionRecord>,
    warnings: Vec<DocumentWarning>,
}
