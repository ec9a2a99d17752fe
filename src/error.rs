use thiserror::Error;

/// 单个文档的非致命问题
///
/// 文档无法解析时只记录警告，不会中断整批处理
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentWarning {
    /// 没有识别到任何结构（题目分隔符或大纲章节）
    #[error("文档 {document} 无法识别结构: {reason}")]
    MalformedDocument { document: String, reason: String },
    /// 文档文本为空
    #[error("文档 {document} 内容为空")]
    EmptyDocument { document: String },
    /// 读取文档失败
    #[error("文档 {document} 读取失败: {reason}")]
    Unreadable { document: String, reason: String },
}

impl DocumentWarning {
    /// 创建结构无法识别的警告
    pub fn malformed(document: impl Into<String>, reason: impl Into<String>) -> Self {
        DocumentWarning::MalformedDocument {
            document: document.into(),
            reason: reason.into(),
        }
    }

    /// 警告所属的文档名
    pub fn document(&self) -> &str {
        match self {
            DocumentWarning::MalformedDocument { document, .. }
            | DocumentWarning::EmptyDocument { document }
            | DocumentWarning::Unreadable { document, .. } => document,
        }
    }
}

/// 应用程序错误类型
///
/// 只出现在 I/O 适配层，核心引擎不会返回错误
#[derive(Debug, Error)]
pub enum AppError {
    /// 文件操作错误
    #[error("文件错误: {0}")]
    File(#[from] FileError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
    /// 报告输出错误
    #[error("报告错误: {0}")]
    Report(#[from] ReportError),
}

/// 文件操作错误
#[derive(Debug, Error)]
pub enum FileError {
    /// 文件不存在
    #[error("文件不存在: {path}")]
    NotFound { path: String },
    /// 读取文件失败
    #[error("读取文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 写入文件失败
    #[error("写入文件失败 ({path}): {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 目录不存在
    #[error("目录不存在: {path}")]
    DirectoryNotFound { path: String },
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// TOML 配置文件解析失败
    #[error("配置文件 {path} 解析失败: {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    /// 配置值不合法
    #[error("配置项 {name} 不合法: {reason}")]
    InvalidValue { name: String, reason: String },
}

/// 报告输出错误
#[derive(Debug, Error)]
pub enum ReportError {
    /// JSON 序列化失败
    #[error("JSON序列化失败: {0}")]
    SerializeFailed(#[from] serde_json::Error),
}

// ========== 从常见错误类型转换 ==========

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::File(FileError::ReadFailed {
            path: String::new(),
            source: err,
        })
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Report(ReportError::SerializeFailed(err))
    }
}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        AppError::Config(ConfigError::TomlParseFailed {
            path: String::new(), // TOML错误通常不包含路径信息
            source: err,
        })
    }
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建文件读取错误
    pub fn file_read_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::ReadFailed {
            path: path.into(),
            source,
        })
    }

    /// 创建文件写入错误
    pub fn file_write_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::WriteFailed {
            path: path.into(),
            source,
        })
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
