//! 编译模块：将分隔符拼接的配置串编译为规则列表
pub mod pattern;
pub mod compiler;

pub use self::pattern::{Pattern, pattern_match, WILDCARD};
pub use self::compiler::{PatternCompiler, CompiledPatterns, CompileStats, split_segments, DELIMITERS};
