//! # 元素数据模型
//!
//! 存储搜索和性质公式所需的元素数据：氧化态、电离能、电子亲和能、
//! Pauling 电负性以及 Harrison 价轨道项值。
//!
//! ## 依赖关系
//! - 被 `data/`, `search/`, `properties/` 使用
//! - 无外部模块依赖

use serde::{Deserialize, Serialize};

/// 氧化态（带符号整数）
pub type OxidationState = i32;

/// 单个元素的参考数据
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// 元素符号
    pub symbol: String,

    /// 已知氧化态（`new` 构造时升序、去重）
    pub oxidation_states: Vec<OxidationState>,

    /// 第一电离能 (eV)
    pub ionization_potential: Option<f64>,

    /// 电子亲和能 (eV)
    pub electron_affinity: Option<f64>,

    /// Pauling 电负性
    pub pauling_eneg: Option<f64>,

    /// 价 p 轨道项值 (eV)
    pub eig: Option<f64>,

    /// 价 s 轨道项值 (eV)
    pub eig_s: Option<f64>,
}

impl Element {
    pub fn new(symbol: impl Into<String>, oxidation_states: &[OxidationState]) -> Self {
        let mut states = oxidation_states.to_vec();
        states.sort_unstable();
        states.dedup();

        Element {
            symbol: symbol.into(),
            oxidation_states: states,
            ionization_potential: None,
            electron_affinity: None,
            pauling_eneg: None,
            eig: None,
            eig_s: None,
        }
    }

    /// 设置电离能和电子亲和能 (eV)
    pub fn with_ionization(mut self, ionization_potential: f64, electron_affinity: f64) -> Self {
        self.ionization_potential = Some(ionization_potential);
        self.electron_affinity = Some(electron_affinity);
        self
    }

    pub fn with_pauling(mut self, pauling_eneg: f64) -> Self {
        self.pauling_eneg = Some(pauling_eneg);
        self
    }

    /// 设置 Harrison 项值：p 轨道 `eig` 与 s 轨道 `eig_s` (eV)
    pub fn with_term_values(mut self, eig: f64, eig_s: f64) -> Self {
        self.eig = Some(eig);
        self.eig_s = Some(eig_s);
        self
    }

    pub fn has_state(&self, state: OxidationState) -> bool {
        self.oxidation_states.contains(&state)
    }

    /// 氧化态的显示形式，如 "-2, +4, +6"
    pub fn states_label(&self) -> String {
        self.oxidation_states
            .iter()
            .map(|s| format_state(*s))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// 带符号显示氧化态（正数加 "+"）
pub fn format_state(state: OxidationState) -> String {
    if state > 0 {
        format!("+{}", state)
    } else {
        state.to_string()
    }
}
