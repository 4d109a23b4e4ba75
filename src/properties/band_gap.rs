//! # Harrison 带隙估算
//!
//! 按 Harrison (1980) 的键轨道模型，从元素价轨道项值和阴阳离子间距估算带隙。
//!
//! ## 公式 (eV, Å)
//! - V₁ = (ε_p − ε_s) / 4，V̄₁ 为阴、阳离子 V₁ 的平均
//! - V₂ = 2.16 ħ²/m / d²，其中 ħ²/m = 7.62 eV·Å²
//! - V₃ = (ε_p,cat − ε_p,an) / 2
//! - α_m = 1.11 V̄₁ / √(V₂² + V₃²)
//! - E_g = (3.60 / 3) √(V₂² + V₃²) (1 − α_m)
//!
//! 结果可能为负（预测为金属性），不视为错误。间距大到 V₂ 下溢为 0 且
//! V₃ = 0 时公式无定义，按无效间距报错。
//!
//! ## 依赖关系
//! - 被 `commands/properties.rs` 调用
//! - 使用 `data/catalog.rs` 查询元素项值

use crate::data::ElementCatalog;
use crate::error::{LatticompError, Result};
use crate::models::Element;

/// ħ²/m (eV·Å²)
pub const HBARSQ_OVER_M: f64 = 7.62;

/// 带隙计算的中间量
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HarrisonTerms {
    /// 平均金属化能 V̄₁
    pub v1_bar: f64,
    /// 共价能 V₂
    pub v2: f64,
    /// 极性能 V₃
    pub v3: f64,
    /// 金属性 α_m
    pub alpha_m: f64,
    /// 带隙 (eV)
    pub band_gap: f64,
}

/// 带隙 (eV)
pub fn band_gap_harrison(
    catalog: &ElementCatalog,
    anion: &str,
    cation: &str,
    distance: f64,
) -> Result<f64> {
    Ok(harrison_terms(catalog, anion, cation, distance)?.band_gap)
}

/// 带隙及全部中间量
pub fn harrison_terms(
    catalog: &ElementCatalog,
    anion: &str,
    cation: &str,
    distance: f64,
) -> Result<HarrisonTerms> {
    if !distance.is_finite() || distance <= 0.0 {
        return Err(LatticompError::InvalidDistance(distance));
    }

    let (an_p, an_s) = term_values(catalog.get(anion)?)?;
    let (cat_p, cat_s) = term_values(catalog.get(cation)?)?;

    let v1_cat = (cat_p - cat_s) / 4.0;
    let v1_an = (an_p - an_s) / 4.0;
    let v1_bar = (v1_an + v1_cat) / 2.0;
    let v2 = 2.16 * HBARSQ_OVER_M / (distance * distance);
    let v3 = (cat_p - an_p) / 2.0;
    let hybrid = v2.hypot(v3);
    let alpha_m = 1.11 * v1_bar / hybrid;
    let band_gap = (3.60 / 3.0) * hybrid * (1.0 - alpha_m);

    if !band_gap.is_finite() {
        return Err(LatticompError::InvalidDistance(distance));
    }

    Ok(HarrisonTerms {
        v1_bar,
        v2,
        v3,
        alpha_m,
        band_gap,
    })
}

fn term_values(element: &Element) -> Result<(f64, f64)> {
    match (element.eig, element.eig_s) {
        (Some(p), Some(s)) => Ok((p, s)),
        (None, _) => Err(LatticompError::missing(&element.symbol, "p term value")),
        (_, None) => Err(LatticompError::missing(&element.symbol, "s term value")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> ElementCatalog {
        ElementCatalog::new()
            .with(Element::new("An", &[-2]).with_term_values(-12.0, -20.0))
            .with(Element::new("Cat", &[2]).with_term_values(-4.0, -8.0))
            .with(Element::new("Fe", &[2, 3]))
    }

    #[test]
    fn test_hand_computed_gap() {
        // V₁(cat)=1, V₁(an)=2, V̄₁=1.5, V₃=4；选 d 使 V₂=3，则 √(V₂²+V₃²)=5
        let d = (2.16 * HBARSQ_OVER_M / 3.0_f64).sqrt();
        let terms = harrison_terms(&catalog(), "An", "Cat", d).unwrap();

        assert!((terms.v1_bar - 1.5).abs() < 1e-12);
        assert!((terms.v2 - 3.0).abs() < 1e-12);
        assert!((terms.v3 - 4.0).abs() < 1e-12);
        assert!((terms.alpha_m - 0.333).abs() < 1e-12);
        assert!((terms.band_gap - 1.2 * 5.0 * (1.0 - 0.333)).abs() < 1e-9);
    }

    #[test]
    fn test_non_positive_distance() {
        for d in [0.0, -1.5, f64::NAN] {
            let err = band_gap_harrison(&catalog(), "An", "Cat", d).unwrap_err();
            assert!(matches!(err, LatticompError::InvalidDistance(_)));
        }
    }

    #[test]
    fn test_distance_checked_before_lookup() {
        let err = band_gap_harrison(&catalog(), "Nope", "Cat", 0.0).unwrap_err();
        assert!(matches!(err, LatticompError::InvalidDistance(_)));
    }

    #[test]
    fn test_huge_distance_between_same_species() {
        // d² 溢出使 V₂ = 0，同种元素 V₃ = 0
        let err = band_gap_harrison(&catalog(), "An", "An", 1e200).unwrap_err();
        assert!(matches!(err, LatticompError::InvalidDistance(d) if d == 1e200));

        let err = band_gap_harrison(ElementCatalog::builtin(), "Si", "Si", 1e200).unwrap_err();
        assert!(matches!(err, LatticompError::InvalidDistance(_)));
    }

    #[test]
    fn test_unknown_and_missing_terms() {
        assert!(matches!(
            band_gap_harrison(&catalog(), "Nope", "Cat", 2.0),
            Err(LatticompError::UnknownElement { .. })
        ));
        assert!(matches!(
            band_gap_harrison(&catalog(), "An", "Fe", 2.0),
            Err(LatticompError::MissingProperty { .. })
        ));
    }

    #[test]
    fn test_negative_gap_is_not_an_error() {
        // 很大的间距使 V₂ 趋于 0，α_m 大于 1
        let catalog = ElementCatalog::new()
            .with(Element::new("A", &[-1]).with_term_values(-5.0, -25.0))
            .with(Element::new("C", &[1]).with_term_values(-5.0, -25.0));
        let gap = band_gap_harrison(&catalog, "A", "C", 50.0).unwrap();
        assert!(gap < 0.0);
    }

    #[test]
    fn test_builtin_gaas_is_finite() {
        let gap = band_gap_harrison(ElementCatalog::builtin(), "As", "Ga", 2.45).unwrap();
        assert!(gap.is_finite());
    }
}
