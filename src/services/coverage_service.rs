//! 大纲覆盖统计
//!
//! 按归类章节汇总分值、题目数和分值占比，每次都从记录重新计算

use crate::models::{CoverageRow, ExtractionStats, KeywordMap, KeywordRow, QuestionRecord};
use std::collections::{BTreeMap, HashSet};

/// 按章节汇总，行按章节名排序
///
/// 没有分值的题目计 0 分；总分为 0 时所有占比为 0
pub fn aggregate(records: &[QuestionRecord]) -> Vec<CoverageRow> {
    let mut groups: BTreeMap<&str, (u64, usize)> = BTreeMap::new();
    for record in records {
        let entry = groups.entry(record.area_or_unknown()).or_default();
        entry.0 += u64::from(record.marks.unwrap_or(0));
        entry.1 += 1;
    }

    let grand_total: u64 = groups.values().map(|(marks, _)| marks).sum();

    groups
        .into_iter()
        .map(|(area, (total_marks, question_count))| CoverageRow {
            area: area.to_string(),
            total_marks,
            question_count,
            percentage_of_total: percentage(total_marks, grand_total),
        })
        .collect()
}

/// 保留两位小数的百分比
fn percentage(part: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let raw = part as f64 / total as f64 * 100.0;
    (raw * 100.0).round() / 100.0
}

/// 章节关键词参考表
pub fn keyword_rows(keyword_map: &KeywordMap) -> Vec<KeywordRow> {
    keyword_map
        .iter()
        .map(|(area, keywords)| KeywordRow {
            area: area.to_string(),
            keywords: keywords.join(", "),
            keyword_count: keywords.len(),
        })
        .collect()
}

/// 抽取统计
pub fn extraction_stats(total_documents: usize, records: &[QuestionRecord]) -> ExtractionStats {
    let areas: HashSet<&str> = records.iter().map(|r| r.area_or_unknown()).collect();
    ExtractionStats {
        total_documents,
        total_questions: records.len(),
        questions_with_marks: records.iter().filter(|r| r.marks.is_some()).count(),
        areas_covered: areas.len(),
    }
}
