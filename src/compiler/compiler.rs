//! 规则编译器核心
//! 仅负责把分隔符拼接的配置串切分为规则列表，不做任何语法校验

#[cfg(feature = "logging")]
use std::time::Instant;

use serde::Serialize;
#[cfg(feature = "logging")]
use tracing::debug;

use super::pattern::Pattern;
use crate::config::MatcherConfig;

/// 分段分隔符，`,` 与 `;` 可混用
pub const DELIMITERS: [char; 2] = [',', ';'];

/// 编译统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CompileStats {
    /// 分段总数（含空分段），等于分隔符个数 + 1
    pub segments: usize,
    /// 保留下来的规则数
    pub kept: usize,
    /// 被丢弃的空分段数
    pub empty_dropped: usize,
    /// 含通配符的规则数
    pub wildcard: usize,
}

/// 编译结果
#[derive(Debug, Clone, Default)]
pub struct CompiledPatterns {
    pub patterns: Vec<Pattern>,
    pub stats: CompileStats,
}

/// 按分隔符切分配置串，逐段返回（包括空分段）
///
/// 字符串结尾视为最后一个隐式分隔符，最后一段总会被产出，
/// 分段数恒为分隔符个数 + 1
pub fn split_segments(config: &str) -> impl Iterator<Item = &str> + '_ {
    config.split(DELIMITERS)
}

/// 规则编译器
pub struct PatternCompiler;

impl PatternCompiler {
    /// 编译配置串（默认配置）
    pub fn compile(config: &str) -> CompiledPatterns {
        Self::compile_with_config(config, &MatcherConfig::default())
    }

    /// 编译配置串
    /// 空分段静默丢弃，其余分段原样作为规则保存
    pub fn compile_with_config(config: &str, matcher_config: &MatcherConfig) -> CompiledPatterns {
        #[cfg(feature = "logging")]
        let start = Instant::now();

        // 按分段数预分配，空分段会让实际长度更小
        let segment_count = config.matches(DELIMITERS).count() + 1;
        let mut patterns = Vec::with_capacity(segment_count);
        let mut stats = CompileStats::default();

        for segment in split_segments(config) {
            stats.segments += 1;
            if segment.is_empty() {
                stats.empty_dropped += 1;
                continue;
            }
            let pattern = Pattern::new(segment);
            if pattern.has_wildcard() {
                stats.wildcard += 1;
            }
            patterns.push(pattern);
        }
        stats.kept = patterns.len();

        #[cfg(feature = "logging")]
        {
            debug!(
                "规则编译完成，耗时{:?}，分段{}个、保留{}条、丢弃空分段{}个、通配规则{}条，内存类别：{}",
                start.elapsed(),
                stats.segments,
                stats.kept,
                stats.empty_dropped,
                stats.wildcard,
                matcher_config.category
            );
            if matcher_config.verbose {
                for (idx, pattern) in patterns.iter().enumerate() {
                    debug!("规则#{}：{}（{}）", idx, pattern, pattern.describe());
                }
            }
        }
        #[cfg(not(feature = "logging"))]
        let _ = matcher_config;

        CompiledPatterns { patterns, stats }
    }
}
