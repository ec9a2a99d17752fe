use crate::error::{AppError, AppResult, ConfigError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 抽取过程中的长度限制
///
/// 题目 / 答案文本的截断长度、每个章节保留的关键词数量、
/// 章节内容兜底抽取的最大长度
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionLimits {
    pub text_truncate_len: usize,
    pub max_keywords: usize,
    pub content_fallback_len: usize,
}

impl Default for ExtractionLimits {
    fn default() -> Self {
        Self {
            text_truncate_len: 500,
            max_keywords: 20,
            content_fallback_len: 500,
        }
    }
}

/// 程序配置
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 大纲文本文件（已抽取的纯文本），为空时不加载大纲
    pub syllabus_path: Option<String>,
    /// 试卷文本文件存放目录
    pub exam_folder: String,
    /// 同时处理的试卷数量
    pub max_concurrent_documents: usize,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 未提供大纲时是否使用内置的静态章节关键词
    pub use_static_keywords: bool,
    /// JSON 报告输出文件
    pub output_report_file: String,
    /// 警告输出文件
    pub output_warn_file: String,
    /// 输出日志文件
    pub output_log_file: String,
    /// 长度限制
    pub limits: ExtractionLimits,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            syllabus_path: None,
            exam_folder: "exam_text".to_string(),
            max_concurrent_documents: 8,
            verbose_logging: false,
            use_static_keywords: false,
            output_report_file: "extraction_report.json".to_string(),
            output_warn_file: "warn.txt".to_string(),
            output_log_file: "output.txt".to_string(),
            limits: ExtractionLimits::default(),
        }
    }
}

impl Config {
    /// 默认配置 + 环境变量
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// 从 TOML 文件加载配置，文件不存在时使用默认值，最后应用环境变量
    pub fn load(path: &Path) -> AppResult<Self> {
        let base = if path.exists() {
            let content = std::fs::read_to_string(path)
                .map_err(|e| AppError::file_read_failed(path.display().to_string(), e))?;
            toml::from_str::<Config>(&content).map_err(|source| ConfigError::TomlParseFailed {
                path: path.display().to_string(),
                source,
            })?
        } else {
            Self::default()
        };

        let config = base.with_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn with_env_overrides(self) -> Self {
        self.with_overrides(|name| std::env::var(name).ok())
    }

    /// 用 `lookup` 查到的值覆盖配置，查不到或无法解析的项保持原值
    fn with_overrides(self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let parse = |name: &str| -> Option<usize> { lookup(name).and_then(|v| v.parse().ok()) };
        let parse_bool = |name: &str| -> Option<bool> { lookup(name).and_then(|v| v.parse().ok()) };

        let limits = ExtractionLimits {
            text_truncate_len: parse("TEXT_TRUNCATE_LEN").unwrap_or(self.limits.text_truncate_len),
            max_keywords: parse("MAX_KEYWORDS").unwrap_or(self.limits.max_keywords),
            content_fallback_len: parse("CONTENT_FALLBACK_LEN").unwrap_or(self.limits.content_fallback_len),
        };
        Self {
            syllabus_path: lookup("SYLLABUS_PATH").or(self.syllabus_path),
            exam_folder: lookup("EXAM_FOLDER").unwrap_or(self.exam_folder),
            max_concurrent_documents: parse("MAX_CONCURRENT_DOCUMENTS").unwrap_or(self.max_concurrent_documents),
            verbose_logging: parse_bool("VERBOSE_LOGGING").unwrap_or(self.verbose_logging),
            use_static_keywords: parse_bool("USE_STATIC_KEYWORDS").unwrap_or(self.use_static_keywords),
            output_report_file: lookup("OUTPUT_REPORT_FILE").unwrap_or(self.output_report_file),
            output_warn_file: lookup("OUTPUT_WARN_FILE").unwrap_or(self.output_warn_file),
            output_log_file: lookup("OUTPUT_LOG_FILE").unwrap_or(self.output_log_file),
            limits,
        }
    }

    /// 校验配置
    pub fn validate(&self) -> AppResult<()> {
        if self.max_concurrent_documents == 0 {
            return Err(ConfigError::InvalidValue {
                name: "max_concurrent_documents".to_string(),
                reason: "必须大于 0".to_string(),
            }
            .into());
        }
        if self.limits.max_keywords == 0 {
            return Err(ConfigError::InvalidValue {
                name: "limits.max_keywords".to_string(),
                reason: "必须大于 0".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_limits() {
        let limits = ExtractionLimits::default();
        assert_eq!(limits.text_truncate_len, 500);
        assert_eq!(limits.max_keywords, 20);
        assert_eq!(limits.content_fallback_len, 500);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: Config = toml::from_str(
            r#"
            exam_folder = "papers"
            [limits]
            text_truncate_len = 300
            max_keywords = 10
            content_fallback_len = 200
            "#,
        )
        .unwrap();
        assert_eq!(config.exam_folder, "papers");
        assert_eq!(config.limits.max_keywords, 10);
        assert_eq!(config.max_concurrent_documents, 8);
        assert!(config.syllabus_path.is_none());
    }

    #[test]
    fn test_overrides_replace_only_parsable_values() {
        let vars: HashMap<&str, &str> = [
            ("EXAM_FOLDER", "papers"),
            ("MAX_CONCURRENT_DOCUMENTS", "3"),
            ("USE_STATIC_KEYWORDS", "true"),
            ("MAX_KEYWORDS", "not-a-number"),
            ("TEXT_TRUNCATE_LEN", "300"),
        ]
        .into_iter()
        .collect();

        let config = Config::default().with_overrides(|name| vars.get(name).map(|v| v.to_string()));
        assert_eq!(config.exam_folder, "papers");
        assert_eq!(config.max_concurrent_documents, 3);
        assert!(config.use_static_keywords);
        assert_eq!(config.limits.text_truncate_len, 300);
        assert_eq!(config.limits.max_keywords, 20);
        assert!(config.syllabus_path.is_none());
        assert_eq!(config.output_warn_file, "warn.txt");
    }

    #[test]
    fn test_from_env_reads_environment() {
        // 其他测试不读取这两个变量
        std::env::set_var("OUTPUT_REPORT_FILE", "env_report.json");
        std::env::set_var("CONTENT_FALLBACK_LEN", "250");

        let config = Config::from_env();

        std::env::remove_var("OUTPUT_REPORT_FILE");
        std::env::remove_var("CONTENT_FALLBACK_LEN");

        assert_eq!(config.output_report_file, "env_report.json");
        assert_eq!(config.limits.content_fallback_len, 250);
    }

    #[test]
    fn test_validate_rejects_zero_concurrency() {
        let config = Config {
            max_concurrent_documents: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
