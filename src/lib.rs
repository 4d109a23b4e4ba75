//! # latticomp - 子晶格电荷中性组分搜索
//!
//! 从元素参考数据估算材料性质（电负性、带隙），并在给定的子晶格模板上
//! 搜索所有满足电荷中性的元素组合。
//!
//! ## 模块
//! - `search`     - 组分搜索（候选筛选、电荷中性判据、N 位点枚举）
//! - `properties` - Mulliken / 化合物电负性、Harrison 带隙
//! - `data`       - 元素目录与内置参考数据
//! - `models`     - 元素、模板、组分数据模型
//! - `export`     - 结果导出
//!
//! ## 依赖关系
//! ```text
//! lib.rs
//!   ├── search/     (组分搜索)
//!   │     ├── data/     (元素目录)
//!   │     └── models/   (数据模型)
//!   ├── properties/ (性质公式)
//!   ├── export.rs   (CSV 导出)
//!   └── error.rs    (错误处理)
//! ```

pub mod data;
pub mod error;
pub mod export;
pub mod models;
pub mod properties;
pub mod search;

pub use data::ElementCatalog;
pub use error::{LatticompError, Result};
pub use models::{Composition, CompositionSet, Element, LatticeTemplate, Site, SiteAssignment};
pub use search::{possible_compositions, LatticeSearch, PreparedSearch, SearchOptions};
