//! # 统一错误处理模块
//!
//! 定义 latticomp 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// latticomp 统一错误类型
#[derive(Error, Debug)]
pub enum LatticompError {
    // ─────────────────────────────────────────────────────────────
    // 元素数据错误
    // ─────────────────────────────────────────────────────────────
    #[error("Unknown element: {symbol}")]
    UnknownElement { symbol: String },

    #[error("Element {symbol} has no tabulated {property}")]
    MissingProperty {
        symbol: String,
        property: &'static str,
    },

    // ─────────────────────────────────────────────────────────────
    // 输入校验错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid template: {0}")]
    InvalidTemplate(String),

    #[error("Electronegativity source '{0}' is not recognised (use Mulliken or Pauling)")]
    UnsupportedSource(String),

    #[error("Invalid distance: {0} (must be positive)")]
    InvalidDistance(f64),

    #[error("Failed to parse {what} '{input}'\nReason: {reason}")]
    ParseError {
        what: String,
        input: String,
        reason: String,
    },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("{0}")]
    Other(String),
}

impl LatticompError {
    pub(crate) fn unknown(symbol: &str) -> Self {
        LatticompError::UnknownElement {
            symbol: symbol.to_string(),
        }
    }

    pub(crate) fn missing(symbol: &str, property: &'static str) -> Self {
        LatticompError::MissingProperty {
            symbol: symbol.to_string(),
            property,
        }
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, LatticompError>;
