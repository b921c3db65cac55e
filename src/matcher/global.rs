//! 全局匹配器单例管理
//! 宿主通常只持有一份配置好的规则集（例如排除类列表），首次初始化生效，之后的初始化被忽略
use once_cell::sync::OnceCell;
#[cfg(feature = "logging")]
use tracing::debug;

use super::matcher::PatternSet;
use super::symbol::SymbolText;
use crate::config::{ConfigManager, MatcherConfig};
use crate::error::{SmResult, SymbolMatcherError};

/// 全局匹配器实例
static GLOBAL_MATCHER: OnceCell<PatternSet> = OnceCell::new();

/// 初始化全局匹配器（默认配置）
pub fn init_symbol_matcher(patterns: &str) -> SmResult<()> {
    init_symbol_matcher_with_config(patterns, &ConfigManager::get_default())
}

/// 带自定义配置初始化全局匹配器
pub fn init_symbol_matcher_with_config(patterns: &str, config: &MatcherConfig) -> SmResult<()> {
    // 并发初始化时只有一个闭包会执行，其余调用直接拿到已安装的实例
    let installed = GLOBAL_MATCHER.get_or_init(|| PatternSet::with_config(patterns, config));

    #[cfg(feature = "logging")]
    debug!("全局匹配器已就绪，规则数：{}，内存类别：{}", installed.len(), installed.category());
    #[cfg(not(feature = "logging"))]
    let _ = installed;

    Ok(())
}

/// 从环境变量读取规则串并初始化全局匹配器
pub fn init_symbol_matcher_from_env(var: &str) -> SmResult<()> {
    let patterns = ConfigManager::patterns_from_env(var)?;
    init_symbol_matcher(&patterns)
}

/// 获取全局匹配器
pub fn get_global_matcher() -> SmResult<&'static PatternSet> {
    GLOBAL_MATCHER.get()
        .ok_or(SymbolMatcherError::MatcherNotInitialized)
}

/// 符号是否被全局规则选中
pub fn is_symbol_selected<S: SymbolText + ?Sized>(symbol: &S) -> SmResult<bool> {
    let matcher = get_global_matcher()?;
    Ok(matcher.matches_symbol(symbol))
}
