use crate::error::{DocumentWarning, FileError};
use crate::models::question::ExamDocument;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;

/// 读取单个已抽取的文本文件
///
/// 文档名取文件名（不含目录）
pub async fn load_text_document(text_file_path: &Path) -> Result<ExamDocument> {
    if !fs::try_exists(text_file_path).await.unwrap_or(false) {
        return Err(FileError::NotFound {
            path: text_file_path.display().to_string(),
        }
        .into());
    }

    let text = fs::read_to_string(text_file_path)
        .await
        .with_context(|| format!("无法读取文本文件: {}", text_file_path.display()))?;

    let name = text_file_path
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();

    Ok(ExamDocument::new(name, text))
}

/// 从文件夹中加载所有 `.txt` 文件
///
/// 按文件名排序，保证多次运行顺序一致。读取失败的文件记为警告并跳过
pub async fn load_all_text_files(folder_path: &str) -> Result<(Vec<ExamDocument>, Vec<DocumentWarning>)> {
    let folder = PathBuf::from(folder_path);

    if !folder.is_dir() {
        return Err(FileError::DirectoryNotFound {
            path: folder_path.to_string(),
        }
        .into());
    }

    let mut text_files = Vec::new();
    let mut entries = fs::read_dir(&folder)
        .await
        .with_context(|| format!("无法读取文件夹: {}", folder_path))?;

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) == Some("txt") {
            text_files.push(path);
        }
    }
    text_files.sort();

    let mut documents = Vec::new();
    let mut warnings = Vec::new();

    for path in text_files {
        tracing::info!(
            "正在加载: {}",
            path.file_name().unwrap_or_default().to_string_lossy()
        );

        match load_text_document(&path).await {
            Ok(document) => {
                tracing::debug!("成功加载 {} 个字符", document.text.chars().count());
                documents.push(document);
            }
            Err(e) => {
                tracing::warn!("加载文件失败 {}: {}", path.display(), e);
                warnings.push(DocumentWarning::Unreadable {
                    document: path.file_name().unwrap_or_default().to_string_lossy().to_string(),
                    reason: format!("{:#}", e),
                });
            }
        }
    }

    Ok((documents, warnings))
}
