//! # 子晶格模板数据模型
//!
//! 描述晶体结构模板：每个子晶格位点有化学计量比和允许的氧化态集合。
//!
//! ## 预定义模板
//! | 名称          | 位点比例   | 典型例子    |
//! |---------------|------------|-------------|
//! | rock-salt     | 1 : 1      | NaCl, MgO   |
//! | zinc-blende   | 1 : 1      | GaAs, ZnS   |
//! | fluorite      | 1 : 2      | CaF2, UO2   |
//! | perovskite    | 1 : 1 : 3  | CaTiO3      |
//! | spinel        | 1 : 2 : 4  | MgAl2O4     |
//! | garnet        | 3 : 2 : 3 : 12 | Ca3Al2Si3O12 |
//!
//! ## 依赖关系
//! - 被 `search/` 和 `commands/search.rs` 使用
//! - 使用 `models/element.rs` 的 OxidationState

use crate::error::{LatticompError, Result};
use crate::models::element::{format_state, OxidationState};

use serde::{Deserialize, Serialize};

/// 预定义模板名称
pub const PRESET_NAMES: &[&str] = &[
    "rock-salt",
    "zinc-blende",
    "fluorite",
    "perovskite",
    "spinel",
    "garnet",
];

/// 子晶格位点
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Site {
    /// 每个化学式单元中该位点的数目
    pub ratio: f64,

    /// 该位点允许的氧化态
    pub oxidation_states: Vec<OxidationState>,
}

impl Site {
    pub fn new(ratio: f64, oxidation_states: &[OxidationState]) -> Self {
        Site {
            ratio,
            oxidation_states: oxidation_states.to_vec(),
        }
    }

    pub fn allows(&self, state: OxidationState) -> bool {
        self.oxidation_states.contains(&state)
    }

    /// 位点描述，如 "3 × {-2}"
    pub fn describe(&self) -> String {
        let states = self
            .oxidation_states
            .iter()
            .map(|s| format_state(*s))
            .collect::<Vec<_>>()
            .join(", ");
        format!("{} × {{{}}}", format_ratio(self.ratio), states)
    }
}

/// 晶格模板：有序的子晶格位点序列
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatticeTemplate {
    name: String,
    sites: Vec<Site>,
}

impl LatticeTemplate {
    pub fn new(name: impl Into<String>, sites: Vec<Site>) -> Self {
        LatticeTemplate {
            name: name.into(),
            sites,
        }
    }

    /// 从平行的比例序列和氧化态序列构造
    pub fn from_parts(
        name: impl Into<String>,
        ratios: &[f64],
        oxidations: &[Vec<OxidationState>],
    ) -> Result<Self> {
        if ratios.len() != oxidations.len() {
            return Err(LatticompError::InvalidTemplate(format!(
                "{} site ratios but {} oxidation-state sets",
                ratios.len(),
                oxidations.len()
            )));
        }

        let sites = ratios
            .iter()
            .zip(oxidations)
            .map(|(ratio, states)| Site::new(*ratio, states))
            .collect();

        Ok(LatticeTemplate::new(name, sites))
    }

    /// 按名称获取预定义模板
    pub fn preset(name: &str) -> Option<Self> {
        let (ratios, oxidations): (Vec<f64>, Vec<Vec<OxidationState>>) =
            match name.to_lowercase().as_str() {
                "rock-salt" | "rocksalt" => (vec![1.0, 1.0], vec![vec![1, 2, 3], vec![-1, -2, -3]]),
                "zinc-blende" | "zincblende" => (vec![1.0, 1.0], vec![vec![2, 3], vec![-2, -3]]),
                "fluorite" => (vec![1.0, 2.0], vec![vec![2, 4], vec![-1, -2]]),
                "perovskite" => (
                    vec![1.0, 1.0, 3.0],
                    vec![vec![1, 2, 3], vec![2, 3, 4, 5], vec![-1, -2]],
                ),
                "spinel" => (vec![1.0, 2.0, 4.0], vec![vec![2, 4], vec![2, 3], vec![-2]]),
                "garnet" => (
                    vec![3.0, 2.0, 3.0, 12.0],
                    vec![vec![2, 3], vec![2, 3, 4], vec![2, 3, 4, 5], vec![-2]],
                ),
                _ => return None,
            };

        LatticeTemplate::from_parts(name.to_lowercase(), &ratios, &oxidations).ok()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sites(&self) -> &[Site] {
        &self.sites
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    /// 检查模板是否可用于搜索
    pub fn validate(&self) -> Result<()> {
        for (i, site) in self.sites.iter().enumerate() {
            if site.oxidation_states.is_empty() {
                return Err(LatticompError::InvalidTemplate(format!(
                    "site {} has no allowed oxidation states",
                    i + 1
                )));
            }
            if !site.ratio.is_finite() || site.ratio <= 0.0 {
                return Err(LatticompError::InvalidTemplate(format!(
                    "site {} has non-positive ratio {}",
                    i + 1,
                    site.ratio
                )));
            }
        }
        Ok(())
    }
}

/// 比例显示：整数不带小数点
pub fn format_ratio(ratio: f64) -> String {
    if (ratio - ratio.round()).abs() < 1e-9 {
        format!("{}", ratio.round() as i64)
    } else {
        format!("{:.2}", ratio)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_parts_mismatched_lengths() {
        let err = LatticeTemplate::from_parts("bad", &[1.0, 1.0], &[vec![2]]).unwrap_err();
        assert!(matches!(err, LatticompError::InvalidTemplate(_)));
    }

    #[test]
    fn test_validate_rejects_empty_site() {
        let template = LatticeTemplate::new("t", vec![Site::new(1.0, &[2]), Site::new(1.0, &[])]);
        let err = template.validate().unwrap_err();
        assert!(err.to_string().contains("site 2"));
    }

    #[test]
    fn test_validate_rejects_bad_ratio() {
        let template = LatticeTemplate::new("t", vec![Site::new(0.0, &[2])]);
        assert!(template.validate().is_err());

        let template = LatticeTemplate::new("t", vec![Site::new(f64::NAN, &[2])]);
        assert!(template.validate().is_err());
    }

    #[test]
    fn test_empty_template_is_valid() {
        let template = LatticeTemplate::new("empty", vec![]);
        assert!(template.is_empty());
        assert!(template.validate().is_ok());
    }

    #[test]
    fn test_all_presets_resolve() {
        for name in PRESET_NAMES {
            let template = LatticeTemplate::preset(name).unwrap();
            assert!(template.validate().is_ok(), "{} should be valid", name);
        }
        assert_eq!(LatticeTemplate::preset("perovskite").unwrap().len(), 3);
        assert_eq!(LatticeTemplate::preset("garnet").unwrap().len(), 4);
        assert!(LatticeTemplate::preset("quasicrystal").is_none());
    }

    #[test]
    fn test_site_describe() {
        assert_eq!(Site::new(3.0, &[-2]).describe(), "3 × {-2}");
        assert_eq!(Site::new(0.5, &[1, 2]).describe(), "0.50 × {+1, +2}");
    }
}
