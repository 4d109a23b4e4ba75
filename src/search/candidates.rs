//! # 候选元素筛选
//!
//! 对一个子晶格位点，找出至少有一个氧化态落在该位点允许集合中的元素。
//! 判据是交集非空，而不是集合包含。
//!
//! ## 依赖关系
//! - 被 `search/composer.rs` 调用
//! - 使用 `data/catalog.rs` 的 ElementCatalog

use crate::data::ElementCatalog;
use crate::models::{Element, OxidationState, Site, SiteAssignment};

use std::collections::BTreeSet;

/// 与允许氧化态集合有交集的全部元素符号
pub fn find_candidates<'a>(
    catalog: &'a ElementCatalog,
    allowed: &[OxidationState],
) -> BTreeSet<&'a str> {
    catalog
        .iter()
        .filter(|el| el.oxidation_states.iter().any(|s| allowed.contains(s)))
        .map(|el| el.symbol.as_str())
        .collect()
}

/// 元素在允许集合中的氧化态（升序）
pub fn matching_states(element: &Element, allowed: &[OxidationState]) -> Vec<OxidationState> {
    element
        .oxidation_states
        .iter()
        .copied()
        .filter(|s| allowed.contains(s))
        .collect()
}

/// 位点的全部候选指派：每个 (元素, 匹配氧化态) 一项
pub fn site_candidates(catalog: &ElementCatalog, site: &Site) -> Vec<SiteAssignment> {
    let mut candidates = Vec::new();

    for symbol in find_candidates(catalog, &site.oxidation_states) {
        // find_candidates 只返回目录中的符号
        if let Ok(element) = catalog.get(symbol) {
            for state in matching_states(element, &site.oxidation_states) {
                candidates.push(SiteAssignment::new(symbol, state));
            }
        }
    }

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> ElementCatalog {
        ElementCatalog::new()
            .with(Element::new("Mg", &[2]))
            .with(Element::new("Fe", &[2, 3]))
            .with(Element::new("O", &[-2]))
            .with(Element::new("Cl", &[-1, 1, 5, 7]))
    }

    #[test]
    fn test_find_candidates_intersection() {
        let catalog = catalog();
        let found = find_candidates(&catalog, &[3, 5]);
        assert_eq!(found.into_iter().collect::<Vec<_>>(), vec!["Cl", "Fe"]);
    }

    #[test]
    fn test_find_candidates_empty() {
        let catalog = catalog();
        assert!(find_candidates(&catalog, &[-4]).is_empty());
        assert!(find_candidates(&catalog, &[]).is_empty());
    }

    #[test]
    fn test_site_candidates_expands_each_matching_state() {
        let catalog = catalog();
        let site = Site::new(1.0, &[2, 3]);
        let candidates = site_candidates(&catalog, &site);

        assert_eq!(
            candidates,
            vec![
                SiteAssignment::new("Fe", 2),
                SiteAssignment::new("Fe", 3),
                SiteAssignment::new("Mg", 2),
            ]
        );
    }

    #[test]
    fn test_matching_states() {
        let cl = Element::new("Cl", &[-1, 1, 5, 7]);
        assert_eq!(matching_states(&cl, &[7, -1, 3]), vec![-1, 7]);
    }
}
