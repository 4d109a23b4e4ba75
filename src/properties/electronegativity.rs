//! # 电负性估算
//!
//! ## 公式
//! - Mulliken 电负性: χ = (IP + EA) / 2
//! - 化合物电负性: 按化学计量加权的几何平均
//!   χ(AₐBᵦ) = (χ_Aᵃ · χ_Bᵇ)^(1/(a+b))
//!
//! Pauling 电负性乘以 2.86 换算到 Mulliken 标度
//! (Nethercot, Phys. Rev. Lett. 33, 1088 (1974))。
//!
//! ## 依赖关系
//! - 被 `commands/properties.rs` 调用
//! - 使用 `data/catalog.rs` 查询元素数据

use crate::data::ElementCatalog;
use crate::error::{LatticompError, Result};
use crate::models::Element;

use std::fmt;
use std::str::FromStr;

/// Pauling 标度到 Mulliken 标度的换算因子
pub const PAULING_TO_MULLIKEN: f64 = 2.86;

/// 电负性数据来源
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnegSource {
    #[default]
    Mulliken,
    Pauling,
}

impl FromStr for EnegSource {
    type Err = LatticompError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "mulliken" => Ok(EnegSource::Mulliken),
            "pauling" => Ok(EnegSource::Pauling),
            _ => Err(LatticompError::UnsupportedSource(s.to_string())),
        }
    }
}

impl fmt::Display for EnegSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnegSource::Mulliken => write!(f, "Mulliken"),
            EnegSource::Pauling => write!(f, "Pauling"),
        }
    }
}

/// 单个元素的 Mulliken 电负性 (eV)
pub fn eneg_mulliken(catalog: &ElementCatalog, symbol: &str) -> Result<f64> {
    mulliken_of(catalog.get(symbol)?)
}

fn mulliken_of(element: &Element) -> Result<f64> {
    let ip = element
        .ionization_potential
        .ok_or_else(|| LatticompError::missing(&element.symbol, "ionization potential"))?;
    let ea = element
        .electron_affinity
        .ok_or_else(|| LatticompError::missing(&element.symbol, "electron affinity"))?;
    Ok((ip + ea) / 2.0)
}

/// 按指定来源取元素电负性（Pauling 已换算到 Mulliken 标度）
pub fn element_eneg(element: &Element, source: EnegSource) -> Result<f64> {
    match source {
        EnegSource::Mulliken => mulliken_of(element),
        EnegSource::Pauling => element
            .pauling_eneg
            .map(|x| PAULING_TO_MULLIKEN * x)
            .ok_or_else(|| LatticompError::missing(&element.symbol, "Pauling electronegativity")),
    }
}

/// 加权几何平均：(Π vᵢ^wᵢ)^(1/Σwᵢ)
pub fn weighted_geometric_mean(values: &[f64], weights: &[f64]) -> f64 {
    let product: f64 = values
        .iter()
        .zip(weights)
        .map(|(v, w)| v.powf(*w))
        .product();
    let total: f64 = weights.iter().sum();
    product.powf(1.0 / total)
}

/// 化合物电负性
///
/// `elements` 与 `stoichs` 一一对应；同一元素可以出现多次。
pub fn compound_electroneg<S: AsRef<str>>(
    catalog: &ElementCatalog,
    elements: &[S],
    stoichs: &[f64],
    source: EnegSource,
) -> Result<f64> {
    Ok(compound_electroneg_detail(catalog, elements, stoichs, source)?.value)
}

/// 以字符串指定来源的化合物电负性
pub fn compound_electroneg_by_name<S: AsRef<str>>(
    catalog: &ElementCatalog,
    elements: &[S],
    stoichs: &[f64],
    source: &str,
) -> Result<f64> {
    let source: EnegSource = source.parse()?;
    compound_electroneg(catalog, elements, stoichs, source)
}

/// 化合物电负性及各元素电负性
#[derive(Debug, Clone, PartialEq)]
pub struct CompoundEneg {
    /// 各元素电负性（与输入顺序一致）
    pub element_values: Vec<f64>,
    /// 加权几何平均
    pub value: f64,
}

pub fn compound_electroneg_detail<S: AsRef<str>>(
    catalog: &ElementCatalog,
    elements: &[S],
    stoichs: &[f64],
    source: EnegSource,
) -> Result<CompoundEneg> {
    if elements.is_empty() {
        return Err(LatticompError::InvalidTemplate(
            "compound needs at least one element".to_string(),
        ));
    }
    if elements.len() != stoichs.len() {
        return Err(LatticompError::InvalidTemplate(format!(
            "{} elements but {} stoichiometric coefficients",
            elements.len(),
            stoichs.len()
        )));
    }
    if let Some(bad) = stoichs.iter().find(|s| !s.is_finite() || **s <= 0.0) {
        return Err(LatticompError::InvalidTemplate(format!(
            "stoichiometric coefficient {} must be positive",
            bad
        )));
    }

    let element_values = elements
        .iter()
        .map(|symbol| element_eneg(catalog.get(symbol.as_ref())?, source))
        .collect::<Result<Vec<f64>>>()?;

    let value = weighted_geometric_mean(&element_values, stoichs);

    Ok(CompoundEneg {
        element_values,
        value,
    })
}
