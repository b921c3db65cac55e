//! 编译后模式模型
//! 单条规则的存储结构，以及单条规则的匹配原语

use std::fmt;

use serde::Serialize;

/// 通配符：命中即匹配成功，其后的规则字符与候选串剩余部分都不再检查
pub const WILDCARD: u8 = b'*';

/// `.` 与 `/` 互为等价的包分隔符
#[inline(always)]
fn is_separator_pair(p: u8, c: u8) -> bool {
    (p == b'.' && c == b'/') || (p == b'/' && c == b'.')
}

/// 单条规则匹配（核心原语）
///
/// 逐字节前向扫描，不回溯：
/// 1. 规则字符为 `*` → 立即成功
/// 2. 字符相同，或一方为 `.` 另一方为 `/` → 继续
/// 3. 其余情况（包括候选串已耗尽）→ 失败
///
/// 扫描完整条规则仍未遇到 `*` 时，要求两者长度完全相等
pub fn pattern_match(pattern: &str, candidate: &str) -> bool {
    scan(pattern.as_bytes(), candidate.as_bytes())
}

#[inline]
fn scan(pattern: &[u8], candidate: &[u8]) -> bool {
    for (i, &p) in pattern.iter().enumerate() {
        if p == WILDCARD {
            return true;
        }
        // 候选串耗尽视为字符不一致
        let Some(&c) = candidate.get(i) else {
            return false;
        };
        if p == c || is_separator_pair(p, c) {
            continue;
        }
        return false;
    }
    candidate.len() == pattern.len()
}

/// 编译后的单条规则
/// 不变量：文本非空；`wildcard_at` 为首个 `*` 的下标
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Pattern {
    text: Box<str>,
    wildcard_at: Option<usize>,
}

impl Pattern {
    /// 从配置串中的一个分段构建规则
    ///
    /// # Panics
    /// 分段为空时 panic：空分段应由编译器丢弃，走到这里属于调用约定被破坏
    pub fn new(segment: &str) -> Self {
        assert!(!segment.is_empty(), "pattern segment must not be empty");
        Self {
            wildcard_at: segment.bytes().position(|b| b == WILDCARD),
            text: segment.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// 永远为 false，仅为配合 `len` 提供
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn wildcard_at(&self) -> Option<usize> {
        self.wildcard_at
    }

    pub fn has_wildcard(&self) -> bool {
        self.wildcard_at.is_some()
    }

    /// 匹配候选串，结果与 [`pattern_match`] 完全一致
    ///
    /// 先用预计算的通配符位置做精确的长度预判：
    /// - 无通配符：长度不等必然失败
    /// - 通配符位于 k：候选串短于 k 时无法扫描到通配符，必然失败
    #[inline]
    pub fn is_match(&self, candidate: &str) -> bool {
        let s_len = candidate.len();
        let rejected = match self.wildcard_at {
            None => s_len != self.len(),
            Some(k) => s_len < k,
        };
        if rejected {
            return false;
        }
        scan(self.text.as_bytes(), candidate.as_bytes())
    }

    /// 规则描述（用于日志）
    pub fn describe(&self) -> &'static str {
        match self.wildcard_at {
            None => "exact",
            Some(k) if k + 1 == self.len() => "prefix",
            Some(_) => "prefix(truncated)",
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
