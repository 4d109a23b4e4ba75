//! # 元素性质估算模块
//!
//! 从元素数据估算电负性和带隙。均为无状态的纯函数。
//!
//! ## 子模块
//! - `electronegativity`: Mulliken / 化合物电负性
//! - `band_gap`: Harrison 带隙
//!
//! ## 依赖关系
//! - 被 `commands/properties.rs` 使用
//! - 使用 `data/catalog.rs`

pub mod band_gap;
pub mod electronegativity;

pub use band_gap::{band_gap_harrison, harrison_terms, HarrisonTerms};
pub use electronegativity::{
    compound_electroneg, compound_electroneg_by_name, compound_electroneg_detail, eneg_mulliken,
    weighted_geometric_mean, CompoundEneg, EnegSource, PAULING_TO_MULLIKEN,
};
