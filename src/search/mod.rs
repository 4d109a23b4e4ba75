//! # 组分搜索模块
//!
//! 在子晶格模板上搜索电荷中性的元素组合。
//!
//! ## 子模块
//! - `candidates`: 按氧化态筛选候选元素
//! - `neutrality`: 电荷中性判据与结果累积
//! - `composer`: N 位点组合枚举（顺序 / 并行）
//!
//! ## 依赖关系
//! - 被 `commands/search.rs` 使用
//! - 使用 `data/` 和 `models/`

pub mod candidates;
pub mod composer;
pub mod neutrality;

pub use candidates::{find_candidates, matching_states, site_candidates};
pub use composer::{possible_compositions, LatticeSearch, PreparedSearch, SearchOptions};
pub use neutrality::{check_lattice_charges, is_neutral, is_neutral_within, CHARGE_TOLERANCE};
