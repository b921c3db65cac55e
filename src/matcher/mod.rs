//! 匹配模块：规则集查询与全局匹配器
pub mod symbol;
pub mod matcher;
pub mod global;

// 导出核心接口
pub use self::symbol::SymbolText;
pub use self::matcher::PatternSet;
pub use self::global::{
    init_symbol_matcher,
    init_symbol_matcher_with_config,
    init_symbol_matcher_from_env,
    get_global_matcher,
    is_symbol_selected,
};
