//! 编排层（Orchestration Layer）
//!
//! ## 模块划分
//!
//! ### `syllabus_loader` - 大纲加载
//! - 读取大纲文本并生成章节关键词
//! - 决定关键词来源（动态 / 静态 / 无）
//!
//! ### `batch_processor` - 批量试卷处理器
//! - 管理应用生命周期（初始化、运行）
//! - 批量加载试卷文本（Vec<ExamDocument>）
//! - 控制并发数量（Semaphore）
//! - 汇总覆盖统计、写出报告和警告
//!
//! ## 层次关系
//!
//! ```text
//! batch_processor (处理 Vec<ExamDocument>)
//!     ↓
//! workflow::DocumentFlow (处理单篇试卷)
//!     ↓
//! services (能力层：extract / keywords / parse / classify / aggregate)
//! ```

pub mod batch_processor;
pub mod syllabus_loader;

// 重新导出主要类型
pub use batch_processor::App;
pub use syllabus_loader::select_keyword_source;
