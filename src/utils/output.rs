//! # 终端输出工具
//!
//! 统一的状态行（`[OK]`/`[ERR]`/`[WARN]`/`[*]`/`[DONE]`）、标题栏和
//! 物理量行。错误写到 stderr，其余写到 stdout。
//!
//! ## 依赖关系
//! - 被 `commands/` 与 `main.rs` 使用
//! - 使用 `colored` crate

use colored::{ColoredString, Colorize};

const RULE_WIDTH: usize = 60;

fn status(tag: ColoredString, msg: &str) {
    println!("{} {}", tag, msg);
}

pub fn print_success(msg: &str) {
    status("[OK]".green().bold(), msg);
}

/// 错误消息（stderr）
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

pub fn print_warning(msg: &str) {
    status("[WARN]".yellow().bold(), msg);
}

pub fn print_info(msg: &str) {
    status("[*]".blue().bold(), msg);
}

pub fn print_done(msg: &str) {
    status("[DONE]".green().bold(), msg);
}

/// 带单位的物理量行，如 `  V2      = 3.0000 eV`
pub fn print_quantity(label: &str, value: f64, unit: &str) {
    status("[*]".blue().bold(), &format_quantity(label, value, unit));
}

fn format_quantity(label: &str, value: f64, unit: &str) -> String {
    let line = format!("  {:<8} = {:.4}", label, value);
    if unit.is_empty() {
        line
    } else {
        format!("{} {}", line, unit)
    }
}

fn rule() -> ColoredString {
    "─".repeat(RULE_WIDTH).dimmed()
}

pub fn print_header(title: &str) {
    println!("\n{}", rule());
    println!("  {}", title.bold());
    println!("{}\n", rule());
}

pub fn print_separator() {
    println!("{}", rule());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_quantity() {
        assert_eq!(format_quantity("V2", 3.0, "eV"), "  V2       = 3.0000 eV");
        assert_eq!(format_quantity("alpha_m", 0.333, ""), "  alpha_m  = 0.3330");
    }
}
