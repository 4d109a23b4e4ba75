//! # 元素数据模块
//!
//! 提供元素目录（数据提供者）和内置参考数据表。
//!
//! ## 依赖关系
//! - 被 `search/`, `properties/`, `commands/` 使用
//! - 子模块: catalog, table

pub mod catalog;
pub mod table;

pub use catalog::ElementCatalog;
