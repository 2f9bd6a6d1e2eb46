//! 配置：编辑器选项与日志选项
//!
//! 从 JSON 文件加载，缺省字段使用默认值。

use crate::models::text_buffer::{is_supported_eol, DEFAULT_EOL};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_LOG_FILTER: &str = "lyedit=info";

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    InvalidEol(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "Config io error: {}", e),
            ConfigError::Parse(e) => write!(f, "Config parse error: {}", e),
            ConfigError::InvalidEol(eol) => {
                write!(f, "Unsupported eol marker: {:?} (expected \"\\n\" or \"\\r\\n\")", eol)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::InvalidEol(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    pub filter: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
            dir: None,
        }
    }
}

impl LoggingConfig {
    pub fn log_dir(&self) -> PathBuf {
        self.dir
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join("lyedit").join("logs"))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// 行分隔符
    pub eol: String,
    /// 左右移动光标时是否跨行
    pub ignore_eol: bool,
    /// 连续键入的字母合并为一个撤销单元
    pub merge_word_undo: bool,
    pub logging: LoggingConfig,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            eol: DEFAULT_EOL.to_string(),
            ignore_eol: false,
            merge_word_undo: true,
            logging: LoggingConfig::default(),
        }
    }
}

impl EditorConfig {
    pub fn from_json_str(data: &str) -> Result<Self> {
        let config: EditorConfig = serde_json::from_str(data)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        Self::from_json_str(&data)
    }

    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(error) => {
                tracing::warn!(path = %path.display(), error = %error, "config load failed, using defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if !is_supported_eol(&self.eol) {
            return Err(ConfigError::InvalidEol(self.eol.clone()));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/services/config.rs"]
mod tests;
