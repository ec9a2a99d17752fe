//! # Exam Mapper
//!
//! 从试卷纯文本中抽取题目、答案和分值，并映射到课程大纲章节的 Rust 应用程序
//!
//! ## 架构设计
//!
//! 本系统采用四层架构：
//!
//! ### ① 数据层（Models）
//! - `models/` - 章节、题目、覆盖统计、导出报告等数据结构
//! - `AreaMap` - 保持插入顺序的章节映射（章节名唯一，后写覆盖）
//! - `loaders` - 读取大纲和试卷文本
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，都是纯函数
//! - `SyllabusExtractor` - 识别大纲章节标题并抽取章节内容
//! - `KeywordSource` - 动态（大纲文本）或静态（内置）章节关键词
//! - `QuestionParser` - 切分题目块，分离答案，读取分值
//! - `area_classifier` - 按关键词命中数归类
//! - `coverage_service` - 按章节汇总分值和占比
//! - `ReportWriter` - 写 JSON 报告和 warn.txt
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一篇试卷"的完整处理流程
//! - `DocumentCtx` - 上下文封装（文档序号 + 文档名）
//! - `DocumentFlow` - 流程编排（parse → classify）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/syllabus_loader` - 加载大纲，选择关键词来源
//! - `orchestrator/batch_processor` - 批量试卷处理器，管理并发和汇总
//!
//! ## 模块结构

pub mod config;
pub mod error;

pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::{Config, ExtractionLimits};
pub use error::{AppError, AppResult, DocumentWarning};
pub use models::{
    AreaMap, CoverageRow, ExamDocument, ExtractionReport, KeywordMap, KeywordSourceKind, QuestionRecord, Syllabus,
    SyllabusArea,
};
pub use orchestrator::App;
pub use services::{
    aggregate, build_syllabus, classify, extract_syllabus, generate_keywords, parse_exam, static_keywords,
    KeywordSource,
};
pub use workflow::{DocumentCtx, DocumentFlow};
