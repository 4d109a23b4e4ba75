//! # latticomp 命令行入口
//!
//! ## 子命令
//! - `search`   - 子晶格电荷中性组分搜索
//! - `eneg`     - 化合物电负性
//! - `bandgap`  - Harrison 带隙
//! - `elements` - 内置元素数据
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     └── latticomp 库 (search / properties / data / models)
//!   └── utils/      (输出与进度条)
//! ```

mod cli;
mod commands;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
