//! 文本规整工具
//!
//! 所有阶段共用的空白处理函数，均为纯函数

/// 把所有连续空白（包括换行）折叠为单个空格并去掉首尾空白
///
/// 用于重新拼接成块的文本（题干、答案、章节内容）
pub fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// 保留换行的规整
///
/// 每一行内部的空白折叠为单个空格，行首尾空白去掉，
/// 换行符统一为 `\n`，空行保留（章节分隔依赖空行）
pub fn normalize_lines(text: &str) -> String {
    text.replace("\r\n", "\n")
        .replace('\r', "\n")
        .split('\n')
        .map(normalize)
        .collect::<Vec<_>>()
        .join("\n")
}

/// 按字符数截断文本，超出时追加省略号
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大字符数
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

/// 按字符数截断，不追加省略号
pub fn take_chars(text: &str, max_len: usize) -> &str {
    match text.char_indices().nth(max_len) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_collapses_whitespace() {
        assert_eq!(normalize("  Explain\n\n  provisions\t now "), "Explain provisions now");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \n\t "), "");
    }

    #[test]
    fn test_normalize_lines_keeps_breaks() {
        let text = "A)  Revenue   Recognition \r\n\r\n  Covers IFRS 15 ";
        assert_eq!(normalize_lines(text), "A) Revenue Recognition\n\nCovers IFRS 15");
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("abcdef", 3), "abc...");
        assert_eq!(truncate_text("abc", 3), "abc");
        assert_eq!(truncate_text("会计准则", 2), "会计...");
    }

    #[test]
    fn test_take_chars() {
        assert_eq!(take_chars("abcdef", 4), "abcd");
        assert_eq!(take_chars("ab", 4), "ab");
        assert_eq!(take_chars("会计准则", 1), "会");
    }
}
