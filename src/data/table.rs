//! # 内置元素参考数据表
//!
//! 常见元素的氧化态、第一电离能、电子亲和能、Pauling 电负性，
//! 以及 sp 成键元素的 Harrison 价轨道项值 (ε_p, ε_s)。
//!
//! ## 数据来源
//! - 电离能 / 电子亲和能: CRC Handbook of Chemistry and Physics
//! - Pauling 电负性: CRC Handbook
//! - 项值: Harrison, "Electronic Structure and the Properties of Solids" (1980),
//!   Solid State Table (Herman-Skillman 原子计算)
//!
//! 不具备束缚阴离子态的元素，电子亲和能记为 0。
//!
//! ## 依赖关系
//! - 被 `data/catalog.rs` 调用构造内置目录
//! - 纯静态数据，无外部依赖

/// 一条元素记录
#[derive(Debug, Clone, Copy)]
pub struct ElementRecord {
    pub symbol: &'static str,
    pub oxidation_states: &'static [i32],
    /// 第一电离能 (eV)
    pub ionization_potential: f64,
    /// 电子亲和能 (eV)
    pub electron_affinity: f64,
    pub pauling_eneg: f64,
    /// (ε_p, ε_s) 项值 (eV)
    pub term_values: Option<(f64, f64)>,
}

const fn rec(
    symbol: &'static str,
    oxidation_states: &'static [i32],
    ionization_potential: f64,
    electron_affinity: f64,
    pauling_eneg: f64,
    term_values: Option<(f64, f64)>,
) -> ElementRecord {
    ElementRecord {
        symbol,
        oxidation_states,
        ionization_potential,
        electron_affinity,
        pauling_eneg,
        term_values,
    }
}

pub static ELEMENT_TABLE: &[ElementRecord] = &[
    // 第一、二周期
    rec("H", &[-1, 1], 13.598, 0.754, 2.20, None),
    rec("Li", &[1], 5.392, 0.618, 0.98, None),
    rec("Be", &[2], 9.323, 0.0, 1.57, Some((-4.14, -8.17))),
    rec("B", &[3], 8.298, 0.277, 2.04, Some((-6.64, -13.46))),
    rec("C", &[-4, 2, 4], 11.260, 1.262, 2.55, Some((-8.97, -17.52))),
    rec("N", &[-3, 3, 5], 14.534, 0.0, 3.04, Some((-11.47, -23.04))),
    rec("O", &[-2], 13.618, 1.461, 3.44, Some((-14.13, -29.14))),
    rec("F", &[-1], 17.423, 3.401, 3.98, None),
    // 第三周期
    rec("Na", &[1], 5.139, 0.548, 0.93, None),
    rec("Mg", &[2], 7.646, 0.0, 1.31, Some((-2.99, -6.86))),
    rec("Al", &[3], 5.986, 0.433, 1.61, Some((-4.86, -10.11))),
    rec("Si", &[-4, 4], 8.152, 1.390, 1.90, Some((-6.52, -13.55))),
    rec("P", &[-3, 3, 5], 10.487, 0.746, 2.19, Some((-8.33, -17.10))),
    rec("S", &[-2, 4, 6], 10.360, 2.077, 2.58, Some((-10.27, -20.80))),
    rec("Cl", &[-1, 1, 3, 5, 7], 12.968, 3.613, 3.16, None),
    // 第四周期
    rec("K", &[1], 4.341, 0.501, 0.82, None),
    rec("Ca", &[2], 6.113, 0.025, 1.00, None),
    rec("Sc", &[3], 6.561, 0.188, 1.36, None),
    rec("Ti", &[2, 3, 4], 6.828, 0.079, 1.54, None),
    rec("V", &[2, 3, 4, 5], 6.746, 0.525, 1.63, None),
    rec("Cr", &[2, 3, 6], 6.767, 0.666, 1.66, None),
    rec("Mn", &[2, 3, 4, 7], 7.434, 0.0, 1.55, None),
    rec("Fe", &[2, 3], 7.902, 0.151, 1.83, None),
    rec("Co", &[2, 3], 7.881, 0.662, 1.88, None),
    rec("Ni", &[2], 7.640, 1.156, 1.91, None),
    rec("Cu", &[1, 2], 7.726, 1.235, 1.90, None),
    rec("Zn", &[2], 9.394, 0.0, 1.65, Some((-3.38, -8.40))),
    rec("Ga", &[3], 5.999, 0.430, 1.81, Some((-4.90, -11.37))),
    rec("Ge", &[2, 4], 7.899, 1.233, 2.01, Some((-6.36, -14.38))),
    rec("As", &[-3, 3, 5], 9.789, 0.814, 2.18, Some((-7.91, -17.33))),
    rec("Se", &[-2, 4, 6], 9.752, 2.021, 2.55, Some((-9.53, -20.32))),
    rec("Br", &[-1, 1, 5], 11.814, 3.364, 2.96, None),
    // 第五周期
    rec("Rb", &[1], 4.177, 0.486, 0.82, None),
    rec("Sr", &[2], 5.695, 0.048, 0.95, None),
    rec("Y", &[3], 6.217, 0.307, 1.22, None),
    rec("Zr", &[4], 6.634, 0.426, 1.33, None),
    rec("Nb", &[3, 5], 6.759, 0.917, 1.60, None),
    rec("Mo", &[4, 6], 7.092, 0.748, 2.16, None),
    rec("Ag", &[1], 7.576, 1.302, 1.93, None),
    rec("Cd", &[2], 8.994, 0.0, 1.69, Some((-3.38, -7.70))),
    rec("In", &[3], 5.786, 0.300, 1.78, Some((-4.69, -10.12))),
    rec("Sn", &[2, 4], 7.344, 1.112, 1.96, Some((-5.94, -12.50))),
    rec("Sb", &[-3, 3, 5], 8.608, 1.046, 2.05, Some((-7.24, -14.80))),
    rec("Te", &[-2, 4, 6], 9.010, 1.971, 2.10, Some((-8.59, -17.11))),
    rec("I", &[-1, 1, 5, 7], 10.451, 3.059, 2.66, None),
    // 第六周期
    rec("Cs", &[1], 3.894, 0.472, 0.79, None),
    rec("Ba", &[2], 5.212, 0.145, 0.89, None),
    rec("La", &[3], 5.577, 0.470, 1.10, None),
    rec("Pb", &[2, 4], 7.417, 0.364, 2.33, None),
    rec("Bi", &[3, 5], 7.286, 0.942, 2.02, None),
];
