//! # 搜索结果导出
//!
//! 将组分集合导出为 CSV：每行一个组分，包含化学式、各位点元素、
//! 氧化态和电荷向量。
//!
//! ## 依赖关系
//! - 被 `commands/search.rs` 调用
//! - 使用 `models/composition.rs` 的 CompositionSet
//! - 使用 `csv` + `serde` 写入 CSV 文件

use crate::error::{LatticompError, Result};
use crate::models::{CompositionSet, LatticeTemplate};

use serde::Serialize;
use std::path::Path;

/// CSV 行
#[derive(Debug, Serialize)]
struct CompositionRow {
    formula: String,
    elements: String,
    oxidation_states: String,
    charges: String,
}

/// 导出组分集合为 CSV
pub fn compositions_to_csv(
    set: &CompositionSet,
    template: &LatticeTemplate,
    output_path: &Path,
) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    for comp in set {
        let sites = comp.sites();
        wtr.serialize(CompositionRow {
            formula: comp.formula(template),
            elements: join(sites.iter().map(|s| s.symbol.clone())),
            oxidation_states: join(sites.iter().map(|s| s.oxidation_state.to_string())),
            charges: join(
                comp.charge_vector(template)
                    .iter()
                    .map(|c| format!("{:.3}", c)),
            ),
        })?;
    }

    wtr.flush().map_err(|e| LatticompError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

fn join(parts: impl Iterator<Item = String>) -> String {
    parts.collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Composition, Site, SiteAssignment};

    #[test]
    fn test_csv_export() {
        let template =
            LatticeTemplate::new("corundum", vec![Site::new(2.0, &[3]), Site::new(3.0, &[-2])]);
        let set: CompositionSet = vec![Composition::new(vec![
            SiteAssignment::new("Al", 3),
            SiteAssignment::new("O", -2),
        ])]
        .into_iter()
        .collect();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        compositions_to_csv(&set, &template, &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("formula,elements,oxidation_states,charges"));
        assert_eq!(lines.next(), Some("Al2O3,Al O,3 -2,6.000 -6.000"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_csv_export_empty_set_writes_nothing() {
        let template = LatticeTemplate::new("empty", vec![]);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.csv");
        compositions_to_csv(&CompositionSet::default(), &template, &path).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }
}
