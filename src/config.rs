//! 全局配置管理,存储所有可配置项

use std::env;
use std::fmt;
use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::{SmResult, SymbolMatcherError};

/// 内存归属类别
/// 规则列表的底层存储按调用方指定的类别归档，仅用于诊断输出，不影响匹配结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MemoryCategory {
    /// 类加载相关（默认）
    #[default]
    Class,
    /// 编译器相关
    Compiler,
    /// 日志相关
    Logging,
    /// 其他内部用途
    Internal,
}

impl MemoryCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemoryCategory::Class => "class",
            MemoryCategory::Compiler => "compiler",
            MemoryCategory::Logging => "logging",
            MemoryCategory::Internal => "internal",
        }
    }
}

impl fmt::Display for MemoryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 匹配器配置
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MatcherConfig {
    // 规则存储的内存归属类别
    pub category: MemoryCategory,
    // 是否启用详细日志（逐条输出编译出的规则）
    pub verbose: bool,
}

/// 配置管理器
pub struct ConfigManager;

impl ConfigManager {
    /// 获取默认配置
    pub fn get_default() -> MatcherConfig {
        MatcherConfig::default()
    }

    /// 自定义配置
    pub fn custom() -> CustomConfigBuilder {
        CustomConfigBuilder::new()
    }

    /// 从环境变量读取规则串
    /// 变量不存在返回 MissingConfig，存在但不是合法UTF-8返回 InvalidConfig；
    /// 空串是合法配置（不匹配任何符号）
    pub fn patterns_from_env(var: &str) -> SmResult<String> {
        env::var(var).map_err(|e| match e {
            env::VarError::NotPresent => {
                SymbolMatcherError::MissingConfig(format!("环境变量{}未设置", var))
            }
            env::VarError::NotUnicode(_) => {
                SymbolMatcherError::InvalidConfig(format!("环境变量{}不是合法UTF-8", var))
            }
        })
    }

    /// 从规则文件读取规则串
    /// 每行视为一个分段（换行等同于 `,`），兼容 `\r\n` 换行
    pub fn patterns_from_file(path: impl AsRef<Path>) -> SmResult<String> {
        let content = fs::read_to_string(path.as_ref())?;
        Ok(content.lines().collect::<Vec<_>>().join(","))
    }
}

/// 配置构建器（便于自定义配置）
#[derive(Debug, Clone, Default)]
pub struct CustomConfigBuilder {
    config: MatcherConfig,
}

impl CustomConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: MatcherConfig::default(),
        }
    }

    pub fn category(mut self, category: MemoryCategory) -> Self {
        self.config.category = category;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.config.verbose = verbose;
        self
    }

    pub fn build(self) -> MatcherConfig {
        self.config
    }
}
