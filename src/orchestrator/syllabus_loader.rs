//! 大纲加载 - 编排层
//!
//! 决定使用哪种关键词来源：
//! 1. 配置了大纲文件且抽取出章节 → 动态关键词
//! 2. 开启了 `use_static_keywords` → 内置章节关键词
//! 3. 否则没有关键词，所有题目归为 `Syllabus not loaded`

use crate::config::Config;
use crate::error::DocumentWarning;
use crate::models::{load_text_document, KeywordMap};
use crate::services::keyword_service::{build_syllabus, DynamicKeywords, KeywordSource, StaticKeywords};
use std::path::Path;
use tracing::{info, warn};

/// 选择关键词来源，大纲无法读取或无法识别时记为警告
pub async fn select_keyword_source(config: &Config) -> (Option<Box<dyn KeywordSource>>, Vec<DocumentWarning>) {
    let mut warnings = Vec::new();

    if let Some(path) = config.syllabus_path.as_deref() {
        info!("📚 正在加载大纲: {}", path);
        match load_text_document(Path::new(path)).await {
            Ok(document) => {
                let syllabus = build_syllabus(&document.text, config.limits);
                if syllabus.is_empty() {
                    let warning = if document.text.trim().is_empty() {
                        DocumentWarning::EmptyDocument {
                            document: document.name.clone(),
                        }
                    } else {
                        DocumentWarning::malformed(&document.name, "未识别到任何大纲章节")
                    };
                    warn!("⚠️ {}", warning);
                    warnings.push(warning);
                } else {
                    info!("✓ 大纲处理完成，共 {} 个章节", syllabus.areas.len());
                    return (Some(Box::new(DynamicKeywords::new(syllabus))), warnings);
                }
            }
            Err(e) => {
                warn!("⚠️ 大纲加载失败: {:#}", e);
                warnings.push(DocumentWarning::Unreadable {
                    document: path.to_string(),
                    reason: format!("{:#}", e),
                });
            }
        }
    }

    if config.use_static_keywords {
        info!("📚 使用内置章节关键词");
        return (Some(Box::new(StaticKeywords)), warnings);
    }

    warn!("⚠️ 未加载大纲，题目将标记为 Syllabus not loaded");
    (None, warnings)
}

/// 输出前几个章节及其关键词
pub fn log_keyword_summary(keyword_map: &KeywordMap) {
    const SHOWN_AREAS: usize = 6;
    const SHOWN_KEYWORDS: usize = 8;

    for (area, keywords) in keyword_map.iter().take(SHOWN_AREAS) {
        let preview: Vec<&str> = keywords.iter().take(SHOWN_KEYWORDS).map(String::as_str).collect();
        let more = if keywords.len() > SHOWN_KEYWORDS { "..." } else { "" };
        info!(
            "📋 {} | 关键词: {}{} (共 {} 个)",
            crate::utils::truncate_text(area, 40),
            preview.join(", "),
            more,
            keywords.len()
        );
    }

    if keyword_map.len() > SHOWN_AREAS {
        info!("... 以及另外 {} 个章节", keyword_map.len() - SHOWN_AREAS);
    }
}
