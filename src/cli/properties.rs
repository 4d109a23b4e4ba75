//! # 性质子命令 CLI 定义
//!
//! - `eneg`: 化合物电负性
//! - `bandgap`: Harrison 带隙
//! - `elements`: 内置元素数据
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/properties.rs`

use clap::Args;

/// eneg 子命令参数
#[derive(Args, Debug)]
pub struct EnegArgs {
    /// Chemical formula, e.g. "Cu2S" or "CaTiO3"
    #[arg(short, long, conflicts_with_all = ["elements", "stoichs"])]
    pub formula: Option<String>,

    /// Element symbols (comma separated), used with --stoichs
    #[arg(short, long, value_delimiter = ',', requires = "stoichs")]
    pub elements: Option<Vec<String>>,

    /// Stoichiometric coefficients (comma separated), one per element
    #[arg(short, long, value_delimiter = ',', requires = "elements")]
    pub stoichs: Option<Vec<f64>>,

    /// Electronegativity source: Mulliken or Pauling
    #[arg(long, default_value = "Mulliken")]
    pub source: String,

    /// Print per-element electronegativities
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// bandgap 子命令参数
#[derive(Args, Debug)]
pub struct BandGapArgs {
    /// Element symbol of the dominant anion
    #[arg(short, long)]
    pub anion: String,

    /// Element symbol of the dominant cation
    #[arg(short, long)]
    pub cation: String,

    /// Anion-cation separation in Å (sum of ionic radii)
    #[arg(short, long, allow_hyphen_values = true)]
    pub distance: f64,

    /// Print intermediate Harrison terms
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// elements 子命令参数
#[derive(Args, Debug)]
pub struct ElementsArgs {
    /// Show a single element
    #[arg(short, long)]
    pub symbol: Option<String>,
}
