//! 日志工具模块
//!
//! 提供日志初始化、日志文件以及批处理各阶段的输出辅助函数

use anyhow::Result;
use std::fs::{self, OpenOptions};
use std::io::Write;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 初始化 tracing 日志
///
/// 默认级别为 info，可通过 `RUST_LOG` 覆盖。重复调用不会报错
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// 初始化日志文件
///
/// # 参数
/// - `log_file_path`: 日志文件路径
pub fn init_log_file(log_file_path: &str) -> Result<()> {
    let log_header = format!(
        "{}\n试卷抽取日志 - {}\n{}\n\n",
        "=".repeat(60),
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        "=".repeat(60)
    );
    fs::write(log_file_path, log_header)?;
    Ok(())
}

/// 向日志文件追加一行
pub fn append_log_line(log_file_path: &str, line: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)?;
    writeln!(file, "{}", line)?;
    Ok(())
}

/// 记录程序启动信息
///
/// # 参数
/// - `max_concurrent`: 最大并发数
/// - `keyword_source`: 关键词来源
pub fn log_startup(max_concurrent: usize, keyword_source: &str) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 试卷抽取与大纲映射");
    info!("📊 最大并发数: {}", max_concurrent);
    info!("📚 关键词来源: {}", keyword_source);
    info!("{}", "=".repeat(60));
}

/// 记录试卷加载信息
pub fn log_documents_loaded(total: usize, max_concurrent: usize) {
    info!("✓ 找到 {} 个待处理的试卷文本", total);
    info!("📋 将以每批 {} 个的方式处理", max_concurrent);
}

/// 记录批次开始信息
///
/// # 参数
/// - `batch_num`: 批次编号
/// - `total_batches`: 批次总数
/// - `start`: 起始文档编号
/// - `end`: 结束文档编号
/// - `total`: 文档总数
pub fn log_batch_start(batch_num: usize, total_batches: usize, start: usize, end: usize, total: usize) {
    info!("\n{}", "=".repeat(60));
    info!("📦 开始处理第 {}/{} 批", batch_num, total_batches);
    info!("📄 本批文档: {}-{} / 共 {} 个", start, end, total);
    info!("{}", "=".repeat(60));
}

/// 记录批次完成信息
pub fn log_batch_complete(batch_num: usize, success: usize, total: usize) {
    info!("\n{}", "─".repeat(60));
    info!("✓ 第 {} 批完成: 成功 {}/{}", batch_num, success, total);
    info!("{}", "─".repeat(60));
}

/// 打印最终统计信息
///
/// # 参数
/// - `total_documents`: 文档总数
/// - `total_questions`: 题目总数
/// - `questions_with_marks`: 带分值的题目数
/// - `areas_covered`: 覆盖的大纲章节数
/// - `warnings`: 警告数量
/// - `report_path`: 报告文件路径
pub fn print_final_stats(
    total_documents: usize,
    total_questions: usize,
    questions_with_marks: usize,
    areas_covered: usize,
    warnings: usize,
    report_path: &str,
) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部处理完成统计");
    info!("完成时间: {}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"));
    info!("{}", "=".repeat(60));
    info!("📄 文档总数: {}", total_documents);
    info!("❓ 题目总数: {}", total_questions);
    info!("🧮 带分值题目: {}", questions_with_marks);
    info!("📚 覆盖大纲章节: {}", areas_covered);
    info!("⚠️ 警告: {}", warnings);
    info!("{}", "=".repeat(60));
    info!("\n报告已保存至: {}", report_path);
}
