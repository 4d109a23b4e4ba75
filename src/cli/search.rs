//! # search 子命令 CLI 定义
//!
//! 模板可以用预定义名称给出，也可以逐个位点给出：
//! `--site 1:2 --site 1:4 --site 3:-2`
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/search.rs`

use clap::Args;
use latticomp::models::Site;
use std::path::PathBuf;

/// search 子命令参数
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Predefined template: rock-salt, zinc-blende, fluorite, perovskite, spinel, garnet
    #[arg(short, long, conflicts_with = "site")]
    pub preset: Option<String>,

    /// Site as RATIO:STATE[,STATE...] (e.g. "3:-2" or "1:+2,+3"); repeat per site
    #[arg(short, long = "site", value_parser = parse_site, allow_hyphen_values = true)]
    pub site: Vec<Site>,

    /// Restrict the search to these elements (comma separated, e.g. "Ca,Sr,Ti,O")
    #[arg(short, long, value_delimiter = ',')]
    pub elements: Option<Vec<String>>,

    /// Number of parallel jobs (0 = auto)
    #[arg(short, long, default_value_t = 0, env = "LATTICOMP_JOBS")]
    pub jobs: usize,

    /// Disable charge-bound pruning
    #[arg(long, default_value_t = false)]
    pub no_prune: bool,

    /// Number of compositions to print
    #[arg(long, default_value_t = 20)]
    pub top_n: usize,

    /// Write all compositions to a CSV file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// 解析位点描述 "RATIO:STATE[,STATE...]"
pub fn parse_site(input: &str) -> Result<Site, String> {
    let (ratio, states) = input
        .split_once(':')
        .ok_or_else(|| format!("Invalid site '{}'. Expected RATIO:STATE[,STATE...]", input))?;

    let ratio: f64 = ratio
        .trim()
        .parse()
        .map_err(|_| format!("Invalid site ratio '{}'", ratio.trim()))?;

    let states = states
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.trim_start_matches('+')
                .parse::<i32>()
                .map_err(|_| format!("Invalid oxidation state '{}'", s))
        })
        .collect::<Result<Vec<i32>, String>>()?;

    Ok(Site::new(ratio, &states))
}
