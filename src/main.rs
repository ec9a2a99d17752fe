use anyhow::Result;
use exam_mapper::utils::logging;
use exam_mapper::{App, Config};
use std::path::PathBuf;

/// 默认配置文件
const DEFAULT_CONFIG_FILE: &str = "exam_mapper.toml";

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志
    logging::init();

    // 加载配置（第一个参数可指定配置文件）
    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    let config = Config::load(&config_path)?;

    // 初始化并运行应用
    let _report = App::initialize(config).await?.run().await?;

    Ok(())
}
