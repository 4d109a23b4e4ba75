//! # 元素目录
//!
//! 以元素符号为键的只读元素数据集合，是搜索和性质公式的唯一数据来源。
//! 调用者持有目录并以共享引用传入，库内部从不修改它。
//!
//! ## 依赖关系
//! - 被 `search/`, `properties/`, `commands/` 使用
//! - 使用 `data/table.rs` 构造内置目录
//! - 使用 `models/element.rs`

use crate::data::table::ELEMENT_TABLE;
use crate::error::{LatticompError, Result};
use crate::models::Element;

use std::collections::BTreeMap;
use std::sync::LazyLock;

static BUILTIN: LazyLock<ElementCatalog> = LazyLock::new(|| {
    ELEMENT_TABLE
        .iter()
        .map(|r| {
            let el = Element::new(r.symbol, r.oxidation_states)
                .with_ionization(r.ionization_potential, r.electron_affinity)
                .with_pauling(r.pauling_eneg);
            match r.term_values {
                Some((eig, eig_s)) => el.with_term_values(eig, eig_s),
                None => el,
            }
        })
        .collect()
});

/// 元素目录（按符号排序，迭代顺序确定）
#[derive(Debug, Clone, Default)]
pub struct ElementCatalog {
    elements: BTreeMap<String, Element>,
}

impl ElementCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// 内置参考数据目录
    pub fn builtin() -> &'static ElementCatalog {
        &BUILTIN
    }

    /// 按符号查询元素
    pub fn get(&self, symbol: &str) -> Result<&Element> {
        self.elements
            .get(symbol)
            .ok_or_else(|| LatticompError::unknown(symbol))
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.elements.contains_key(symbol)
    }

    /// 插入或替换元素
    pub fn insert(&mut self, element: Element) -> Option<Element> {
        self.elements.insert(element.symbol.clone(), element)
    }

    pub fn with(mut self, element: Element) -> Self {
        self.insert(element);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.elements.values()
    }

    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.elements.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// 只保留指定符号的子目录；任一符号未知即报错
    pub fn restrict_to<S: AsRef<str>>(&self, symbols: &[S]) -> Result<ElementCatalog> {
        symbols
            .iter()
            .map(|s| self.get(s.as_ref().trim()).cloned())
            .collect()
    }
}

impl FromIterator<Element> for ElementCatalog {
    fn from_iter<I: IntoIterator<Item = Element>>(iter: I) -> Self {
        let mut catalog = ElementCatalog::new();
        for element in iter {
            catalog.insert(element);
        }
        catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lookup() {
        let catalog = ElementCatalog::builtin();
        let o = catalog.get("O").unwrap();
        assert_eq!(o.oxidation_states, vec![-2]);
        assert!(o.eig.is_some());

        let fe = catalog.get("Fe").unwrap();
        assert!(fe.has_state(2) && fe.has_state(3));
        assert!(fe.eig.is_none());
    }

    #[test]
    fn test_unknown_element() {
        let err = ElementCatalog::builtin().get("Xx").unwrap_err();
        assert!(matches!(err, LatticompError::UnknownElement { ref symbol } if symbol == "Xx"));
    }

    #[test]
    fn test_builtin_symbols_unique() {
        assert_eq!(ElementCatalog::builtin().len(), ELEMENT_TABLE.len());
    }

    #[test]
    fn test_restrict_to() {
        let sub = ElementCatalog::builtin()
            .restrict_to(&["Ca", " Ti", "O"])
            .unwrap();
        assert_eq!(sub.symbols().collect::<Vec<_>>(), vec!["Ca", "O", "Ti"]);

        assert!(ElementCatalog::builtin().restrict_to(&["Ca", "Qq"]).is_err());
    }

    #[test]
    fn test_insert_replaces() {
        let mut catalog = ElementCatalog::new().with(Element::new("Fe", &[2]));
        let old = catalog.insert(Element::new("Fe", &[2, 3]));
        assert_eq!(old.unwrap().oxidation_states, vec![2]);
        assert_eq!(catalog.get("Fe").unwrap().oxidation_states, vec![2, 3]);
    }
}
