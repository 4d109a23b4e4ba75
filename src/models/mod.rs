//! # 数据模型模块
//!
//! 定义元素、子晶格模板和组分的数据模型。
//!
//! ## 依赖关系
//! - 被 `data/`, `search/`, `properties/` 和 `commands/` 使用
//! - 子模块: element, lattice, composition, formula

pub mod composition;
pub mod element;
pub mod formula;
pub mod lattice;

pub use composition::{Composition, CompositionSet, SiteAssignment};
pub use element::{Element, OxidationState};
pub use lattice::{LatticeTemplate, Site, PRESET_NAMES};
