//! 大纲章节抽取
//!
//! 按固定优先级依次尝试三种标题识别器（字母编号、数字编号、独立标题行），
//! 第一个识别出标题的识别器生效；都识别不到时退回逐行扫描。
//! 每个标题的正文通过重新扫描全文获得

use crate::config::ExtractionLimits;
use crate::models::{AreaMap, SyllabusArea};
use crate::utils::text::{normalize, normalize_lines, take_chars};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// `A) Title`
static LETTERED_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b([A-Z]\))").expect("valid lettered marker regex"));

/// 行首的 `1. Title`
static NUMBERED_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*(\d+\.)(?:\s|$)").expect("valid numbered marker regex"));

/// 行内出现的下一个数字编号
static NUMBERED_INLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s(\d+\.)(?:\s|$)").expect("valid numbered inline regex"));

/// 行内的 `1. Title`，只在没有行首编号时使用，标题须大写开头
static NUMBERED_INLINE_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|\s)(\d+\.)[ \t]+[A-Z]").expect("valid numbered inline heading regex"));

/// 独立的标题行（用作正文边界）
static FREE_TEXT_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*[A-Z][A-Za-z \t]{9,49}[ \t]*$").expect("valid free text regex"));

static BLANK_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n[ \t]*\n").expect("valid blank line regex"));

/// 全大写的横幅行
static CAPS_BANNER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*[A-Z][A-Z \t]{10,}$").expect("valid caps banner regex"));

/// 逐行扫描时的标题形状
static FALLBACK_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][A-Za-z\s]{10,}").expect("valid fallback header regex"));

/// 标题种类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingKind {
    Lettered,
    Numbered,
    /// 编号不在行首，如 `Topics: 1. Leases 2. Revenue`
    NumberedInline,
    FreeText,
}

/// 识别出的章节标题
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    pub kind: HeadingKind,
    /// 编号，如 `A)`、`3.`；独立标题行为空
    pub code: String,
    pub title: String,
}

/// 标题识别器：输入全文，返回按文档顺序排列的标题
pub type Recognizer = fn(&str) -> Vec<Heading>;

/// 识别器优先级
pub const RECOGNIZERS: [Recognizer; 3] = [recognize_lettered, recognize_numbered, recognize_free_text];

/// 大纲章节抽取器
#[derive(Debug, Clone, Copy, Default)]
pub struct SyllabusExtractor {
    limits: ExtractionLimits,
}

impl SyllabusExtractor {
    pub fn new(limits: ExtractionLimits) -> Self {
        Self { limits }
    }

    /// 抽取章节名 → 章节，顺序与文档一致；同名章节后者覆盖前者
    pub fn extract(&self, raw_text: &str) -> AreaMap<SyllabusArea> {
        let text = normalize_lines(raw_text);

        for recognize in RECOGNIZERS {
            let headings = recognize(&text);
            if headings.is_empty() {
                continue;
            }

            debug!(
                "识别到 {} 个 {:?} 标题",
                headings.len(),
                headings[0].kind
            );

            let mut areas = AreaMap::new();
            for heading in headings {
                let content = self.extract_area_content(&text, &heading);
                if areas.contains_key(&heading.title) {
                    debug!("章节名重复，覆盖之前的内容: {}", heading.title);
                }
                areas.insert(heading.title.clone(), SyllabusArea::new(heading.title, content));
            }
            return areas;
        }

        debug!("未识别到结构化标题，改用逐行扫描");
        scan_lines(&text)
    }

    /// 抽取某个标题下的正文
    ///
    /// 先定位 `编号 + 标题`，截取到下一个同级或更高级标题；
    /// 失败时取标题之后到空行为止的文本（限制长度）；都失败时用标题本身
    pub fn extract_area_content(&self, text: &str, heading: &Heading) -> String {
        if let Some(content) = targeted_content(text, heading) {
            return content;
        }
        if let Some(content) = following_region(text, &heading.title, self.limits.content_fallback_len) {
            return content;
        }
        heading.title.clone()
    }
}

/// 使用默认限制抽取大纲章节
pub fn extract_syllabus(raw_text: &str) -> AreaMap<SyllabusArea> {
    SyllabusExtractor::default().extract(raw_text)
}

// ========== 标题识别器 ==========

/// 字母编号标题：`A) Revenue Recognition`
pub fn recognize_lettered(text: &str) -> Vec<Heading> {
    scan_markers(text, &LETTERED_MARKER, &LETTERED_MARKER, HeadingKind::Lettered)
}

/// 数字编号标题：`1. Financial Reporting`
///
/// 行首找不到编号时，再找行内的 `1. Title`
pub fn recognize_numbered(text: &str) -> Vec<Heading> {
    let headings = scan_markers(text, &NUMBERED_MARKER, &NUMBERED_INLINE, HeadingKind::Numbered);
    if !headings.is_empty() {
        return headings;
    }
    scan_markers(text, &NUMBERED_INLINE_HEADING, &NUMBERED_INLINE, HeadingKind::NumberedInline)
}

/// 独立标题行：10-50 个字符、大写字母开头、只含字母和空格，
/// 且前后都有换行
pub fn recognize_free_text(text: &str) -> Vec<Heading> {
    let lines: Vec<&str> = text.split('\n').collect();
    if lines.len() < 3 {
        return Vec::new();
    }

    lines[1..lines.len() - 1]
        .iter()
        .filter(|line| is_heading_line(line))
        .map(|line| Heading {
            kind: HeadingKind::FreeText,
            code: String::new(),
            title: line.trim().to_string(),
        })
        .collect()
}

fn is_heading_line(line: &str) -> bool {
    let line = line.trim();
    let len = line.chars().count();
    (10..=50).contains(&len)
        && line.starts_with(|c: char| c.is_ascii_uppercase())
        && line.chars().all(|c| c.is_ascii_alphabetic() || c == ' ' || c == '\t')
}

/// 依次查找编号，并读取编号之后的标题
///
/// 标题在行尾、句点或同一行的下一个编号处结束；已被上一个标题占用的文本不再查找
fn scan_markers(text: &str, marker: &Regex, inline: &Regex, kind: HeadingKind) -> Vec<Heading> {
    let mut headings = Vec::new();
    let mut pos = 0;

    while pos < text.len() {
        let Some(caps) = marker.captures_at(text, pos) else {
            break;
        };
        let Some(code) = caps.get(1) else {
            break;
        };

        match read_title(text, code.end(), inline) {
            Some((title, title_end)) => {
                headings.push(Heading {
                    kind,
                    code: code.as_str().to_string(),
                    title,
                });
                pos = title_end;
            }
            None => pos = code.end(),
        }
    }

    headings
}

/// 读取编号之后的标题，返回（标题，标题结束位置）
fn read_title(text: &str, from: usize, inline: &Regex) -> Option<(String, usize)> {
    let rest = &text[from..];
    let body_start = rest.len() - rest.trim_start().len();
    let body = &rest[body_start..];

    let line_end = body.find('\n').unwrap_or(body.len());
    let line = &body[..line_end];

    let mut end = line.find('.').unwrap_or(line.len());
    if let Some(next) = inline.find_iter(line).find(|m| m.start() > 0) {
        end = end.min(next.start());
    }

    let title = normalize(&line[..end]);
    if title.is_empty() {
        return None;
    }
    Some((title, from + body_start + end))
}

// ========== 正文抽取 ==========

/// 定位 `编号 + 标题`（不区分大小写），截取到下一个边界
fn targeted_content(text: &str, heading: &Heading) -> Option<String> {
    let pattern = format!(
        r"(?i){}\s*{}",
        regex::escape(&heading.code),
        regex::escape(&heading.title)
    );
    let found = Regex::new(&pattern).ok()?.find(text)?;

    let start = found.end();
    let end = next_boundary(text, start, heading.kind);
    let content = normalize(
        text[start..end].trim_start_matches(|c: char| c.is_whitespace() || c == '.' || c == ':'),
    );

    (!content.is_empty()).then_some(content)
}

/// 下一个同级或更高级标题、空行、全大写横幅行或文末
fn next_boundary(text: &str, from: usize, kind: HeadingKind) -> usize {
    let boundaries: Vec<&Regex> = match kind {
        HeadingKind::Lettered => vec![&*LETTERED_MARKER, &*BLANK_LINE, &*CAPS_BANNER],
        HeadingKind::Numbered => vec![&*NUMBERED_MARKER, &*LETTERED_MARKER, &*BLANK_LINE, &*CAPS_BANNER],
        HeadingKind::NumberedInline => vec![
            &*NUMBERED_INLINE_HEADING,
            &*LETTERED_MARKER,
            &*BLANK_LINE,
            &*CAPS_BANNER,
        ],
        HeadingKind::FreeText => vec![&*FREE_TEXT_LINE, &*BLANK_LINE, &*CAPS_BANNER],
    };

    boundaries
        .iter()
        .filter_map(|re| re.find_at(text, from))
        .map(|m| m.start())
        .min()
        .unwrap_or(text.len())
}

/// 标题之后到空行为止的文本，最多 `max_len` 个字符
fn following_region(text: &str, title: &str, max_len: usize) -> Option<String> {
    let pattern = format!(r"(?i){}", regex::escape(title));
    let found = Regex::new(&pattern).ok()?.find(text)?;

    let start = found.end();
    let end = BLANK_LINE
        .find_at(text, start)
        .map(|m| m.start())
        .unwrap_or(text.len());
    let content = normalize(take_chars(text[start..end].trim(), max_len));

    (!content.is_empty()).then_some(content)
}

// ========== 逐行扫描兜底 ==========

/// 全大写行或“大写开头且不少于 10 个字符”的行视为新章节，
/// 之后的非空行拼接为该章节内容；没有内容的章节不保留
fn scan_lines(text: &str) -> AreaMap<SyllabusArea> {
    let mut areas = AreaMap::new();
    let mut current: Option<(String, Vec<&str>)> = None;

    for line in text.lines() {
        let line = line.trim();
        if line.chars().count() > 5 && (is_upper(line) || FALLBACK_HEADER.is_match(line)) {
            if let Some((name, content)) = current.take() {
                push_area(&mut areas, name, &content);
            }
            current = Some((line.to_string(), Vec::new()));
        } else if !line.is_empty() {
            if let Some((_, content)) = current.as_mut() {
                content.push(line);
            }
        }
    }

    if let Some((name, content)) = current {
        push_area(&mut areas, name, &content);
    }

    areas
}

fn push_area(areas: &mut AreaMap<SyllabusArea>, name: String, content: &[&str]) {
    if content.is_empty() {
        return;
    }
    let content = normalize(&content.join(" "));
    areas.insert(name.clone(), SyllabusArea::new(name, content));
}

/// 至少含一个字母且没有小写字母
fn is_upper(line: &str) -> bool {
    line.chars().any(char::is_alphabetic) && !line.chars().any(char::is_lowercase)
}
