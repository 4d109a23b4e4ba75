//! # 化学式解析
//!
//! 将 "Cu2S"、"Si0.925Ti0.075O2" 之类的化学式拆分为元素符号和化学计量数。
//! 不支持括号分组。
//!
//! ## 依赖关系
//! - 被 `commands/properties.rs` 使用
//! - 使用 `regex` crate

use crate::error::{LatticompError, Result};

use regex::Regex;
use std::sync::LazyLock;

static TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-Z][a-z]?)(\d+(?:\.\d+)?)?").expect("formula token pattern is valid")
});

/// 解析化学式，按出现顺序返回 (元素, 计量数)
pub fn parse_formula(formula: &str) -> Result<Vec<(String, f64)>> {
    let trimmed = formula.trim();
    let parse_error = |reason: &str| LatticompError::ParseError {
        what: "formula".to_string(),
        input: formula.to_string(),
        reason: reason.to_string(),
    };

    if trimmed.is_empty() {
        return Err(parse_error("empty formula"));
    }

    let mut parts = Vec::new();
    let mut consumed = 0;

    for caps in TOKEN.captures_iter(trimmed) {
        let whole = caps.get(0).ok_or_else(|| parse_error("no match"))?;
        if whole.start() != consumed {
            return Err(parse_error(&format!(
                "unexpected text '{}'",
                &trimmed[consumed..whole.start()]
            )));
        }
        consumed = whole.end();

        let symbol = caps[1].to_string();
        let count = match caps.get(2) {
            Some(m) => m
                .as_str()
                .parse::<f64>()
                .map_err(|_| parse_error(&format!("bad count '{}'", m.as_str())))?,
            None => 1.0,
        };

        if count <= 0.0 {
            return Err(parse_error(&format!("count of {} must be positive", symbol)));
        }

        parts.push((symbol, count));
    }

    if consumed != trimmed.len() {
        return Err(parse_error(&format!(
            "unexpected text '{}'",
            &trimmed[consumed..]
        )));
    }

    Ok(parts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_formula() {
        let parts = parse_formula("Cu2S").unwrap();
        assert_eq!(parts, vec![("Cu".to_string(), 2.0), ("S".to_string(), 1.0)]);
    }

    #[test]
    fn test_parse_fractional_counts() {
        let parts = parse_formula("Si0.925Ti0.075O2").unwrap();
        assert_eq!(parts.len(), 3);
        assert!((parts[0].1 - 0.925).abs() < 1e-12);
        assert_eq!(parts[2], ("O".to_string(), 2.0));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_formula("").is_err());
        assert!(parse_formula("cu2S").is_err());
        assert!(parse_formula("Ca(OH)2").is_err());
        assert!(parse_formula("Fe0O").is_err());
    }
}
