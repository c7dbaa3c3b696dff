pub mod config;

use std::path::{Path, PathBuf};

use crate::error::{Result, SprigError};

/// 获取 ~/.sprig/ 目录路径
pub fn sprig_dir() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(".sprig"))
        .ok_or_else(|| SprigError::config("cannot find home directory"))
}

/// 从 TOML 文件加载反序列化数据
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// 将数据序列化后保存到 TOML 文件
pub fn save_toml<T: serde::Serialize>(path: &Path, data: &T) -> Result<()> {
    let content = toml::to_string_pretty(data)?;
    std::fs::write(path, content)?;
    Ok(())
}
