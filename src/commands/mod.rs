//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `utils/` 和 latticomp 库
//! - 子模块: search, properties

pub mod properties;
pub mod search;

use crate::cli::Commands;
use latticomp::Result;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Search(args) => search::execute(args),
        Commands::Eneg(args) => properties::execute_eneg(args),
        Commands::Bandgap(args) => properties::execute_bandgap(args),
        Commands::Elements(args) => properties::execute_elements(args),
    }
}
