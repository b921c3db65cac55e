//! 全局错误类型定义
//! 匹配核心本身不会失败（任何字符串都是合法规则），这里只覆盖外围：全局单例、配置来源（环境变量/规则文件）、诊断输出

use thiserror::Error;
use serde_json::Error as SerdeJsonError;
use std::io::Error as IoError;

#[derive(Error, Debug)]
pub enum SymbolMatcherError {
    // 全局匹配器相关错误
    #[error("全局匹配器未初始化")]
    MatcherNotInitialized,

    // 配置相关错误
    #[error("未找到匹配规则配置：{0}")]
    MissingConfig(String),
    #[error("匹配规则配置无效：{0}")]
    InvalidConfig(String),

    // 序列化错误
    #[error("JSON序列化失败：{0}")]
    JsonError(#[from] SerdeJsonError),

    // 基础错误
    #[error("IO操作失败：{0}")]
    IoError(#[from] IoError),
}

// 全局Result类型
pub type SmResult<T> = Result<T, SymbolMatcherError>;
