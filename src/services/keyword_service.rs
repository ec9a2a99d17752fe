//! 章节关键词
//!
//! 两种来源实现同一个 [`KeywordSource`] 接口：
//! - [`DynamicKeywords`]：从大纲文本的章节内容生成
//! - [`StaticKeywords`]：内置的五个标准章节及其关键词
//!
//! 分类器只依赖 [`KeywordMap`]，不关心来源

use crate::config::ExtractionLimits;
use crate::models::{AreaMap, KeywordMap, KeywordSourceKind, Syllabus, SyllabusArea};
use crate::services::syllabus_extractor::SyllabusExtractor;
use phf::phf_map;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// 至少 3 个字母的单词
static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b[a-zA-Z]{3,}\b").expect("valid word regex"));

/// 停用词
const STOP_WORDS: &[&str] = &[
    "the", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by", "a", "an", "is",
    "are", "was", "were", "be", "been", "being", "have", "has", "had", "having", "do", "does",
    "did", "doing", "will", "would", "could", "should", "may", "might", "must", "can", "shall",
];

/// 会计领域术语，整段出现在章节文本中时把其中的单词加入关键词
const DOMAIN_TERMS: &[&str] = &[
    "financial", "reporting", "accounting", "standards", "ifrs", "ias", "gaap",
    "consolidated", "group", "subsidiary", "associate", "joint", "venture",
    "financial statements", "balance sheet", "income statement", "cash flow",
    "ratio analysis", "performance", "profitability", "liquidity", "gearing",
    "lease", "financial instruments", "hedging", "derivatives", "taxation",
    "ethics", "governance", "sustainability", "environmental", "social",
    "audit", "assurance", "compliance", "regulation", "framework",
];

/// 内置章节的顺序（决定分类平局时的优先级）
pub const STATIC_AREA_ORDER: [&str; 5] = [
    "Application of International Financial Reporting Standards",
    "Preparation of financial statements for a group",
    "Evaluate entity position, performance and prospects using a range of financial and other data",
    "Specialized transactions",
    "Environmental, social and governance issues, sustainability reporting, contemporary issues and ethics",
];

static STATIC_AREA_KEYWORDS: phf::Map<&'static str, &'static [&'static str]> = phf_map! {
    "Application of International Financial Reporting Standards" => &[
        "ifrs", "ias", "international financial reporting", "accounting standard",
        "financial reporting", "consolidated", "group", "subsidiary", "associate",
        "joint venture", "business combination", "goodwill", "fair value",
        "impairment", "revenue recognition", "lease", "financial instrument",
        "eps", "earnings per share", "deferred tax", "provision",
    ],
    "Preparation of financial statements for a group" => &[
        "consolidated", "group", "subsidiary", "parent", "nci", "non-controlling",
        "goodwill", "elimination", "intercompany", "acquisition", "disposal",
        "consolidation adjustment", "group structure",
    ],
    "Evaluate entity position, performance and prospects using a range of financial and other data" => &[
        "ratio", "analysis", "performance", "profitability", "liquidity", "gearing",
        "efficiency", "position", "prospects", "financial health", "evaluation",
        "comparative analysis", "investment decision", "report", "recommendation",
    ],
    "Specialized transactions" => &[
        "lease", "financial instrument", "hedge", "foreign currency", "derivative",
        "share-based payment", "pension", "insurance", "extractive industry",
        "agriculture", "service concession", "discontinued operation",
    ],
    "Environmental, social and governance issues, sustainability reporting, contemporary issues and ethics" => &[
        "ethics", "ethical", "governance", "sustainability", "environmental",
        "social", "esg", "corporate governance", "ethical issue", "director",
        "proposal", "conflict", "transparency", "accountability",
    ],
};

/// 关键词来源
pub trait KeywordSource: Send + Sync {
    /// 来源类型（写入报告）
    fn kind(&self) -> KeywordSourceKind;

    /// 章节名 → 关键词，顺序即分类平局时的优先级
    fn keyword_map(&self) -> KeywordMap;
}

/// 从大纲文本生成的关键词
#[derive(Debug, Clone)]
pub struct DynamicKeywords {
    syllabus: Syllabus,
}

impl DynamicKeywords {
    pub fn new(syllabus: Syllabus) -> Self {
        Self { syllabus }
    }
}

impl KeywordSource for DynamicKeywords {
    fn kind(&self) -> KeywordSourceKind {
        KeywordSourceKind::Dynamic
    }

    fn keyword_map(&self) -> KeywordMap {
        self.syllabus.keyword_map()
    }
}

/// 内置的标准章节关键词
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticKeywords;

impl KeywordSource for StaticKeywords {
    fn kind(&self) -> KeywordSourceKind {
        KeywordSourceKind::Static
    }

    fn keyword_map(&self) -> KeywordMap {
        static_keywords()
    }
}

/// 内置章节关键词，按 [`STATIC_AREA_ORDER`] 排列
pub fn static_keywords() -> KeywordMap {
    STATIC_AREA_ORDER
        .iter()
        .filter_map(|&name| {
            STATIC_AREA_KEYWORDS
                .get(name)
                .map(|keywords| (name.to_string(), keywords.iter().map(|k| k.to_string()).collect()))
        })
        .collect()
}

/// 为每个章节生成关键词
pub fn generate_keywords(areas: &AreaMap<SyllabusArea>, max_keywords: usize) -> KeywordMap {
    areas.map_values(|name, area| keywords_for_area(name, &area.raw_content, max_keywords))
}

/// 从章节标题和内容生成关键词
///
/// 小写后取 3 个字母以上的单词，去掉停用词并去重，再加入出现在文本中的领域术语的单词。
/// 按长度从长到短保留前 `max_keywords` 个，等长时保持首次出现的顺序
pub fn keywords_for_area(area_name: &str, content: &str, max_keywords: usize) -> Vec<String> {
    let full_text = format!("{} {}", area_name, content).to_lowercase();

    let mut seen = HashSet::new();
    let mut keywords: Vec<String> = Vec::new();
    let mut push = |word: &str| {
        if seen.insert(word.to_string()) {
            keywords.push(word.to_string());
        }
    };

    for word in WORD.find_iter(&full_text).map(|m| m.as_str()) {
        if !STOP_WORDS.contains(&word) {
            push(word);
        }
    }

    for term in DOMAIN_TERMS.iter().filter(|term| full_text.contains(*term)) {
        for word in term.split(' ') {
            push(word);
        }
    }

    // sort_by 是稳定排序
    keywords.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));
    keywords.truncate(max_keywords);
    keywords
}

/// 抽取大纲章节并填充关键词
pub fn build_syllabus(raw_text: &str, limits: ExtractionLimits) -> Syllabus {
    let extracted = SyllabusExtractor::new(limits).extract(raw_text);
    let keyword_map = generate_keywords(&extracted, limits.max_keywords);

    // 两者顺序一致
    let areas = extracted
        .into_iter()
        .zip(keyword_map)
        .map(|((name, area), (_, keywords))| (name, area.with_keywords(keywords)))
        .collect();
    Syllabus { areas }
}
