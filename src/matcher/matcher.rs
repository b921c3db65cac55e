//! 匹配器核心：持有编译后的规则列表，回答"某个符号是否被选中"
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;
#[cfg(feature = "logging")]
use tracing::trace;

use super::symbol::SymbolText;
use crate::compiler::{CompileStats, Pattern, PatternCompiler};
use crate::config::{MatcherConfig, MemoryCategory};
use crate::error::SmResult;

/// 规则集合
///
/// 构建后不可变，只提供查询；可在多线程间共享查询而无需加锁
#[derive(Debug, Clone, Default, Serialize)]
pub struct PatternSet {
    patterns: Vec<Pattern>,
    category: MemoryCategory,
    #[serde(skip)]
    stats: CompileStats,
}

impl PatternSet {
    /// 由配置串构建（默认内存类别）
    pub fn new(config: &str) -> Self {
        Self::with_config(config, &MatcherConfig::default())
    }

    /// 由配置串构建，并指定规则存储的内存归属类别
    pub fn with_category(config: &str, category: MemoryCategory) -> Self {
        let matcher_config = MatcherConfig {
            category,
            ..MatcherConfig::default()
        };
        Self::with_config(config, &matcher_config)
    }

    /// 按完整配置构建
    pub fn with_config(config: &str, matcher_config: &MatcherConfig) -> Self {
        let compiled = PatternCompiler::compile_with_config(config, matcher_config);
        Self {
            patterns: compiled.patterns,
            category: matcher_config.category,
            stats: compiled.stats,
        }
    }

    /// 由可能缺失的配置串构建
    ///
    /// # Panics
    /// 配置为 `None` 时 panic：调用方必须保证配置串存在，这属于调用约定而非可恢复错误
    pub fn from_option(config: Option<&str>) -> Self {
        match config {
            Some(config) => Self::new(config),
            None => panic!("pattern configuration must not be absent"),
        }
    }

    /// 候选串是否命中任一规则
    /// 按插入顺序逐条检查，首条命中即返回；空规则集不匹配任何输入
    pub fn matches(&self, candidate: &str) -> bool {
        for pattern in &self.patterns {
            if pattern.is_match(candidate) {
                #[cfg(feature = "logging")]
                trace!("符号{}命中规则{}", candidate, pattern);
                return true;
            }
        }
        false
    }

    /// 宿主符号是否命中任一规则
    pub fn matches_symbol<S: SymbolText + ?Sized>(&self, symbol: &S) -> bool {
        let text = symbol.symbol_text();
        self.matches(&text)
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn patterns(&self) -> impl ExactSizeIterator<Item = &Pattern> + '_ {
        self.patterns.iter()
    }

    pub fn category(&self) -> MemoryCategory {
        self.category
    }

    pub fn stats(&self) -> CompileStats {
        self.stats
    }

    /// 诊断输出：规则列表与内存类别
    pub fn to_json(&self) -> SmResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl From<&str> for PatternSet {
    fn from(config: &str) -> Self {
        Self::new(config)
    }
}

impl FromStr for PatternSet {
    type Err = Infallible;

    fn from_str(config: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(config))
    }
}

/// 以 `,` 拼接输出全部规则（空分段已被丢弃）
impl fmt::Display for PatternSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, pattern) in self.patterns.iter().enumerate() {
            if idx > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", pattern)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROBES: [&str; 12] = [
        "", "a", "b", "ab", "a;b", "Foo", "Foox", "Fo", "Bartender", "Baz", "a/b/C", "a.b.C",
    ];

    #[test]
    fn test_construct_never_panics_on_odd_input() {
        assert_eq!(PatternSet::new("").len(), 0);
        assert_eq!(PatternSet::new(",").len(), 0);

        let set = PatternSet::new(",,a,,");
        assert_eq!(set.len(), 1);
        assert_eq!(set.patterns().next().map(Pattern::as_str), Some("a"));
    }

    #[test]
    fn test_delimiter_equivalence() {
        let comma = PatternSet::new("a,b");
        let semicolon = PatternSet::new("a;b");
        for probe in PROBES {
            assert_eq!(comma.matches(probe), semicolon.matches(probe), "{:?}", probe);
        }
    }

    #[test]
    fn test_exact_match() {
        let set = PatternSet::new("Foo");
        assert!(set.matches("Foo"));
        assert!(!set.matches("Foox"));
        assert!(!set.matches("Fo"));
    }

    #[test]
    fn test_wildcard_short_circuit() {
        assert!(PatternSet::new("Foo*").matches("FooBarBaz"));
        assert!(PatternSet::new("*").matches(""));
        assert!(PatternSet::new("*").matches("anything"));
    }

    #[test]
    fn test_separator_equivalence() {
        assert!(PatternSet::new("a.b.C").matches("a/b/C"));
        assert!(PatternSet::new("a/b/C").matches("a.b.C"));
        assert!(!PatternSet::new("a.b.C").matches("a_b_C"));
    }

    #[test]
    fn test_multi_pattern_union() {
        let set = PatternSet::new("Foo,Bar*");
        assert!(set.matches("Bartender"));
        assert!(set.matches("Foo"));
        assert!(!set.matches("Baz"));
    }

    #[test]
    fn test_order_does_not_change_outcome() {
        let forward = PatternSet::new("Foo;java.lang.*;Bar*");
        let backward = PatternSet::new("Bar*;java.lang.*;Foo");
        for probe in PROBES.iter().chain(["java/lang/String", "Bar"].iter()) {
            assert_eq!(forward.matches(probe), backward.matches(probe), "{:?}", probe);
        }
    }

    #[test]
    fn test_idempotent_queries() {
        let set = PatternSet::new("com.example.*,Main");
        for _ in 0..5 {
            assert!(set.matches("com/example/App"));
            assert!(set.matches("Main"));
            assert!(!set.matches("Mains"));
        }
    }

    #[test]
    fn test_empty_set_matches_nothing() {
        for config in ["", ",", ";;", ",;,"] {
            let set = PatternSet::new(config);
            assert!(set.is_empty());
            for probe in PROBES {
                assert!(!set.matches(probe), "{:?} matched {:?}", config, probe);
            }
        }
    }

    #[test]
    fn test_matches_symbol_forms() {
        let set = PatternSet::new("java.lang.String");
        assert!(set.matches_symbol("java/lang/String"));
        assert!(set.matches_symbol(&String::from("java.lang.String")));
        assert!(set.matches_symbol(b"java/lang/String".as_slice()));
        assert!(!set.matches_symbol(b"java/lang/Strin\xff".as_slice()));
    }

    #[test]
    fn test_category_and_display() {
        let set = PatternSet::with_category("a;;b*,c", MemoryCategory::Compiler);
        assert_eq!(set.category(), MemoryCategory::Compiler);
        assert_eq!(set.to_string(), "a,b*,c");
        assert_eq!(set.stats().empty_dropped, 1);
        assert_eq!(PatternSet::new("x").category(), MemoryCategory::Class);
    }

    #[test]
    fn test_from_str_and_from() {
        let parsed: PatternSet = "Foo;Bar".parse().unwrap();
        let converted = PatternSet::from("Foo;Bar");
        assert_eq!(parsed.to_string(), converted.to_string());
        assert_eq!(PatternSet::from_option(Some("Foo")).len(), 1);
    }

    #[test]
    #[should_panic(expected = "must not be absent")]
    fn test_absent_config_is_contract_violation() {
        let _ = PatternSet::from_option(None);
    }

    #[test]
    fn test_serialize_for_diagnostics() {
        let set = PatternSet::with_category("a*,b", MemoryCategory::Logging);
        let json: serde_json::Value = serde_json::from_str(&set.to_json().unwrap()).unwrap();
        assert_eq!(json["category"], "logging");
        assert_eq!(json["patterns"][0]["text"], "a*");
        assert_eq!(json["patterns"][0]["wildcard_at"], 1);
        assert!(json["patterns"][1]["wildcard_at"].is_null());
    }

    #[test]
    fn test_shared_across_threads() {
        let set = std::sync::Arc::new(PatternSet::new("worker.*"));
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let set = set.clone();
                std::thread::spawn(move || set.matches(&format!("worker/{}", i)))
            })
            .collect();
        for handle in handles {
            assert!(handle.join().unwrap());
        }
    }
}
