//! symbol-matcher - 基于简化通配规则的符号名匹配器
//!
//! 配置串以 `,` 或 `;` 分隔多条规则，规则语法仅有：
//! - 普通字符：逐位比较，`.` 与 `/` 视为等价分隔符
//! - `*`：匹配到此即成功，其后内容一律忽略
//! - 无 `*` 时要求整串等长完全匹配
//!
//! ```
//! use symbol_matcher::PatternSet;
//!
//! let excluded = PatternSet::new("java.lang.*;com/example/Main");
//! assert!(excluded.matches("java/lang/String"));
//! assert!(excluded.matches("com.example.Main"));
//! assert!(!excluded.matches("com.example.Mainer"));
//! ```

// 导出全局错误类型
pub use self::error::{SymbolMatcherError, SmResult};

// 导出配置模块
pub use self::config::{MatcherConfig, MemoryCategory, ConfigManager, CustomConfigBuilder};

// 导出编译模块核心接口
pub use self::compiler::{
    Pattern, PatternCompiler, CompiledPatterns, CompileStats, pattern_match, split_segments
};

// 导出匹配模块核心接口
pub use self::matcher::{
    PatternSet,
    SymbolText,
    init_symbol_matcher,
    init_symbol_matcher_with_config,
    init_symbol_matcher_from_env,
    get_global_matcher,
    is_symbol_selected,
};

// 声明所有子模块
pub mod config;
pub mod error;
pub mod compiler;
pub mod matcher;
