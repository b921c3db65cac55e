//! symbol-matcher 命令行工具
//! 用一组规则检查候选符号名
//!
//! 退出码：
//! - 0：至少一个候选命中
//! - 1：没有候选命中
//! - 2：运行出错（规则来源缺失、文件读取失败等），错误信息输出到标准错误

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use symbol_matcher::{ConfigManager, MemoryCategory, PatternSet};

/// 符号名匹配工具
#[derive(Debug, Parser)]
#[command(name = "symbol-matcher", version, about)]
struct Cli {
    /// 规则串，`,` 或 `;` 分隔，例如 "java.lang.*;com/example/Main"
    #[arg(short, long, conflicts_with_all = ["patterns_env", "patterns_file"])]
    patterns: Option<String>,

    /// 从指定环境变量读取规则串
    #[arg(long, value_name = "VAR", conflicts_with = "patterns_file")]
    patterns_env: Option<String>,

    /// 从规则文件读取规则串，每行视为一个分段
    #[arg(long, value_name = "PATH")]
    patterns_file: Option<PathBuf>,

    /// 候选符号文件，每行一个；`-` 表示标准输入
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// 以JSON输出每个候选的匹配结果
    #[arg(long)]
    json: bool,

    /// 输出调试日志
    #[arg(short, long)]
    verbose: bool,

    /// 候选符号
    candidates: Vec<String>,
}

#[derive(Debug, Serialize)]
struct MatchOutcome<'a> {
    candidate: &'a str,
    matched: bool,
}

/// 退出码：命中 / 未命中 / 出错
const EXIT_MATCHED: u8 = 0;
const EXIT_NO_MATCH: u8 = 1;
const EXIT_ERROR: u8 = 2;

fn build_filter(verbose: bool) -> Result<EnvFilter> {
    let mut filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))?;
    // -v 叠加在 RUST_LOG 之上，不会被环境变量覆盖
    if verbose {
        filter = filter.add_directive("symbol_matcher=trace".parse()?);
    }
    Ok(filter)
}

fn init_logging(verbose: bool) -> Result<()> {
    let filter = build_filter(verbose)?;

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("日志初始化失败：{}", e))?;
    Ok(())
}

fn load_patterns(cli: &Cli) -> Result<String> {
    match (&cli.patterns, &cli.patterns_env, &cli.patterns_file) {
        (Some(patterns), _, _) => Ok(patterns.clone()),
        (None, Some(var), _) => Ok(ConfigManager::patterns_from_env(var)?),
        (None, None, Some(path)) => ConfigManager::patterns_from_file(path)
            .with_context(|| format!("读取规则文件失败：{}", path.display())),
        (None, None, None) => {
            anyhow::bail!("必须通过 --patterns、--patterns-env 或 --patterns-file 提供规则串")
        }
    }
}

fn load_candidates(cli: &Cli) -> Result<Vec<String>> {
    let mut candidates = cli.candidates.clone();
    if let Some(path) = &cli.file {
        let lines: Vec<String> = if path.as_os_str() == "-" {
            io::stdin().lock().lines().collect::<io::Result<_>>()?
        } else {
            fs::read_to_string(path)
                .with_context(|| format!("读取候选文件失败：{}", path.display()))?
                .lines()
                .map(str::to_string)
                .collect()
        };
        candidates.extend(lines.into_iter().filter(|line| !line.is_empty()));
    }
    Ok(candidates)
}

fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<bool> {
    let patterns = load_patterns(cli)?;
    let config = ConfigManager::custom()
        .category(MemoryCategory::Internal)
        .verbose(cli.verbose)
        .build();
    let matcher = PatternSet::with_config(&patterns, &config);
    debug!("已加载规则：{}", matcher);

    let candidates = load_candidates(cli)?;
    let outcomes: Vec<MatchOutcome<'_>> = candidates
        .iter()
        .map(|candidate| MatchOutcome {
            candidate,
            matched: matcher.matches(candidate),
        })
        .collect();

    if cli.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&outcomes)?)?;
    } else {
        for outcome in &outcomes {
            writeln!(out, "{}\t{}", if outcome.matched { "MATCH" } else { "-" }, outcome.candidate)?;
        }
    }

    Ok(outcomes.iter().any(|outcome| outcome.matched))
}

fn exit_status(result: &Result<bool>) -> u8 {
    match result {
        Ok(true) => EXIT_MATCHED,
        Ok(false) => EXIT_NO_MATCH,
        Err(_) => EXIT_ERROR,
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(e) = init_logging(cli.verbose) {
        eprintln!("{:#}", e);
        return ExitCode::from(EXIT_ERROR);
    }

    let result = run(&cli, &mut io::stdout().lock());
    if let Err(e) = &result {
        eprintln!("错误：{:#}", e);
    }
    ExitCode::from(exit_status(&result))
}
