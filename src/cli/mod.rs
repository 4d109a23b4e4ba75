//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `search`: 子晶格电荷中性组分搜索
//! - `eneg`: 化合物电负性
//! - `bandgap`: Harrison 带隙
//! - `elements`: 查看内置元素数据
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: search, properties

pub mod properties;
pub mod search;

use clap::{Parser, Subcommand};

/// latticomp - 子晶格电荷中性组分搜索
#[derive(Parser)]
#[command(name = "latticomp")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(
    about = "Search charge-neutral sub-lattice compositions and estimate elemental properties",
    long_about = None
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Search charge-neutral element combinations for a lattice template
    Search(search::SearchArgs),

    /// Estimate compound electronegativity (Mulliken or Pauling)
    Eneg(properties::EnegArgs),

    /// Estimate the Harrison band gap of an anion/cation pair
    Bandgap(properties::BandGapArgs),

    /// List the built-in element data
    Elements(properties::ElementsArgs),
}
