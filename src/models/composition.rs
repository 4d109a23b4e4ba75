//! # 组分数据模型
//!
//! 一个组分为模板的每个位点指定一个元素及其所取的氧化态。
//! 搜索结果是去重、有序、只读的组分集合。
//!
//! ## 依赖关系
//! - 被 `search/`, `export.rs`, `commands/search.rs` 使用
//! - 使用 `models/lattice.rs` 计算电荷向量和化学式

use crate::models::element::{format_state, OxidationState};
use crate::models::lattice::{format_ratio, LatticeTemplate};

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// 单个位点的元素指派
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SiteAssignment {
    /// 元素符号
    pub symbol: String,
    /// 该位点上元素所取的氧化态
    pub oxidation_state: OxidationState,
}

impl SiteAssignment {
    pub fn new(symbol: impl Into<String>, oxidation_state: OxidationState) -> Self {
        SiteAssignment {
            symbol: symbol.into(),
            oxidation_state,
        }
    }

    /// 该位点对总电荷的贡献
    pub fn charge(&self, ratio: f64) -> f64 {
        self.oxidation_state as f64 * ratio
    }
}

impl fmt::Display for SiteAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.symbol, format_state(self.oxidation_state))
    }
}

/// 组分：按位点顺序的元素指派
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Composition {
    sites: Vec<SiteAssignment>,
}

impl Composition {
    pub fn new(sites: Vec<SiteAssignment>) -> Self {
        Composition { sites }
    }

    pub fn sites(&self) -> &[SiteAssignment] {
        &self.sites
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    /// 电荷向量：每个位点的 氧化态 × 比例
    pub fn charge_vector(&self, template: &LatticeTemplate) -> Vec<f64> {
        self.sites
            .iter()
            .zip(template.sites())
            .map(|(assignment, site)| assignment.charge(site.ratio))
            .collect()
    }

    /// 按位点顺序的化学式，如 "CaTiO3"
    pub fn formula(&self, template: &LatticeTemplate) -> String {
        self.sites
            .iter()
            .zip(template.sites())
            .map(|(assignment, site)| {
                if (site.ratio - 1.0).abs() < 1e-9 {
                    assignment.symbol.clone()
                } else {
                    format!("{}{}", assignment.symbol, format_ratio(site.ratio))
                }
            })
            .collect()
    }
}

impl fmt::Display for Composition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.sites.iter().map(|s| s.to_string()).collect();
        write!(f, "{}", parts.join(" "))
    }
}

impl From<Vec<SiteAssignment>> for Composition {
    fn from(sites: Vec<SiteAssignment>) -> Self {
        Composition::new(sites)
    }
}

/// 搜索结果集合（去重、按字典序排列）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompositionSet {
    items: BTreeSet<Composition>,
}

impl CompositionSet {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, composition: &Composition) -> bool {
        self.items.contains(composition)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Composition> {
        self.items.iter()
    }

    /// 是否包含另一个集合的全部组分
    pub fn is_superset(&self, other: &CompositionSet) -> bool {
        self.items.is_superset(&other.items)
    }

    pub fn into_vec(self) -> Vec<Composition> {
        self.items.into_iter().collect()
    }
}

impl From<BTreeSet<Composition>> for CompositionSet {
    fn from(items: BTreeSet<Composition>) -> Self {
        CompositionSet { items }
    }
}

impl FromIterator<Composition> for CompositionSet {
    fn from_iter<I: IntoIterator<Item = Composition>>(iter: I) -> Self {
        CompositionSet {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a CompositionSet {
    type Item = &'a Composition;
    type IntoIter = std::collections::btree_set::Iter<'a, Composition>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
