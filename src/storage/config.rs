//! 应用配置持久化
//!
//! 只持久化 UI 偏好（主题）。任务数据是纯内存状态，永远不落盘。

use serde::{Deserialize, Serialize};
use std::fs;

use crate::error::Result;

use super::{load_toml, save_toml, sprig_dir};

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub theme: ThemeConfig,
}

/// 主题配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub name: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: "Auto".to_string(),
        }
    }
}

/// 加载配置（不存在或损坏则返回默认值）
pub fn load_config() -> Config {
    let Ok(dir) = sprig_dir() else {
        return Config::default();
    };

    let path = dir.join("config.toml");
    if !path.exists() {
        return Config::default();
    }
    load_toml(&path).unwrap_or_default()
}

/// 保存配置
pub fn save_config(config: &Config) -> Result<()> {
    // 确保 ~/.sprig 目录存在
    let dir = sprig_dir()?;
    fs::create_dir_all(&dir)?;
    save_toml(&dir.join("config.toml"), config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_is_auto() {
        let config = Config::default();
        assert_eq!(config.theme.name, "Auto");
    }

    #[test]
    fn test_config_roundtrip_through_toml() {
        let config = Config {
            theme: ThemeConfig {
                name: "Dracula".to_string(),
            },
        };
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed.theme.name, "Dracula");
    }

    #[test]
    fn test_missing_fields_fall_back_to_default() {
        let parsed: Config = toml::from_str("").unwrap();
        assert_eq!(parsed.theme.name, "Auto");
    }
}
