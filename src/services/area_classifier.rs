//! 题目归类服务
//!
//! 统计每个章节的关键词在题干中出现的个数（子串包含），选出命中最多的章节

use crate::models::{KeywordMap, QuestionRecord, GENERAL_UNKNOWN, SYLLABUS_NOT_LOADED};
use tracing::debug;

/// 最佳匹配
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AreaMatch {
    pub area: String,
    /// 命中的关键词个数
    pub score: usize,
    /// 与最佳章节同分的其他章节（按章节顺序）
    pub tied_with: Vec<String>,
}

/// 把题干归到命中关键词最多的章节
///
/// 平局时取章节映射中先出现的章节；没有任何命中或映射为空时返回 `General/Unknown`
pub fn classify(question_text: &str, keyword_map: &KeywordMap) -> String {
    match best_match(question_text, keyword_map) {
        Some(found) => found.area,
        None => GENERAL_UNKNOWN.to_string(),
    }
}

/// 计算最佳匹配，命中数为 0 时返回 `None`
pub fn best_match(question_text: &str, keyword_map: &KeywordMap) -> Option<AreaMatch> {
    let question_lower = question_text.to_lowercase();

    let mut best: Option<AreaMatch> = None;

    for (area, keywords) in keyword_map.iter() {
        let score = keyword_hits(&question_lower, keywords);
        if score == 0 {
            continue;
        }

        // 严格大于才替换，平局保留先出现的章节
        let is_better = best.as_ref().map_or(true, |current| score > current.score);
        if is_better {
            best = Some(AreaMatch {
                area: area.to_string(),
                score,
                tied_with: Vec::new(),
            });
        } else if let Some(current) = best.as_mut() {
            if score == current.score {
                current.tied_with.push(area.to_string());
            }
        }
    }

    if let Some(found) = &best {
        if !found.tied_with.is_empty() {
            debug!(
                "平局: {} 与 {:?} 均命中 {} 个关键词，取先出现的章节",
                found.area, found.tied_with, found.score
            );
        }
    }

    best
}

/// 题干（已小写）中包含的关键词个数
fn keyword_hits(question_lower: &str, keywords: &[String]) -> usize {
    keywords
        .iter()
        .filter(|keyword| !keyword.is_empty())
        .filter(|keyword| question_lower.contains(keyword.to_lowercase().as_str()))
        .count()
}

/// 为题目写入归类结果；没有关键词映射（未加载大纲）时写入 `Syllabus not loaded`
///
/// 按未截断的题干归类，截断只影响导出
pub fn assign_area(record: QuestionRecord, keyword_map: Option<&KeywordMap>) -> QuestionRecord {
    let area = match keyword_map {
        Some(map) => classify(record.classification_text(), map),
        None => SYLLABUS_NOT_LOADED.to_string(),
    };
    record.with_area(area)
}
