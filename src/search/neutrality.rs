//! # 电荷中性判据
//!
//! 判断电荷向量之和是否为零，并把通过判据的组分加入调用者持有的结果集合。
//! 非整数化学计量比会带来浮点累积误差，因此比较带容差。
//!
//! ## 依赖关系
//! - 被 `search/composer.rs` 调用
//! - 使用 `models/composition.rs`

use crate::models::{Composition, SiteAssignment};

use std::collections::BTreeSet;

/// 默认电荷容差
pub const CHARGE_TOLERANCE: f64 = 1e-6;

/// 电荷向量之和是否为零（默认容差）
pub fn is_neutral(charges: &[f64]) -> bool {
    is_neutral_within(charges, CHARGE_TOLERANCE)
}

/// |Σ| ≤ tolerance；容差为 0 时即精确比较
pub fn is_neutral_within(charges: &[f64], tolerance: f64) -> bool {
    charges.iter().sum::<f64>().abs() <= tolerance
}

/// 电荷为零时记录该组分，返回是否记录
pub fn check_lattice_charges(
    charges: &[f64],
    sites: &[SiteAssignment],
    found: &mut BTreeSet<Composition>,
    tolerance: f64,
) -> bool {
    if !is_neutral_within(charges, tolerance) {
        return false;
    }
    found.insert(Composition::new(sites.to_vec()));
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_neutral() {
        assert!(is_neutral(&[2.0, -2.0]));
        assert!(is_neutral(&[6.0, -6.0]));
        assert!(!is_neutral(&[3.0, -2.0]));
        assert!(is_neutral(&[]));
    }

    #[test]
    fn test_zero_tolerance_accepts_exact_zero() {
        assert!(is_neutral_within(&[2.0, -2.0], 0.0));
        assert!(is_neutral_within(&[], 0.0));
        assert!(!is_neutral_within(&[0.1, 0.1, 0.1, -0.3], 0.0));
    }

    #[test]
    fn test_fractional_ratio_accumulated_error() {
        // 0.1 * 3 次累加不会精确等于 0.3
        let charges = [0.1, 0.1, 0.1, -0.3];
        assert!(charges.iter().sum::<f64>() != 0.0);
        assert!(is_neutral(&charges));
    }

    #[test]
    fn test_check_lattice_charges_records_only_neutral() {
        let mut found = BTreeSet::new();
        let ca_o = [SiteAssignment::new("Ca", 2), SiteAssignment::new("O", -2)];
        let na_o = [SiteAssignment::new("Na", 1), SiteAssignment::new("O", -2)];

        assert!(check_lattice_charges(&[2.0, -2.0], &ca_o, &mut found, CHARGE_TOLERANCE));
        assert!(!check_lattice_charges(&[1.0, -2.0], &na_o, &mut found, CHARGE_TOLERANCE));

        assert_eq!(found.len(), 1);
        assert!(found.contains(&Composition::new(ca_o.to_vec())));
    }
}
