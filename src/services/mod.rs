//! 服务层

pub mod config;

pub use config::{ConfigError, EditorConfig, LoggingConfig, DEFAULT_LOG_FILTER};
