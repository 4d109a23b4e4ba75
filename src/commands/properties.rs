//! # 性质子命令实现
//!
//! - `eneg`: 化合物电负性（化学式或元素 + 计量数）
//! - `bandgap`: Harrison 带隙
//! - `elements`: 内置元素数据表格
//!
//! ## 依赖关系
//! - 使用 `cli/properties.rs` 定义的参数
//! - 使用 latticomp 的 `properties/`, `models/formula.rs`
//! - 使用 `utils/output.rs`

use crate::cli::properties::{BandGapArgs, ElementsArgs, EnegArgs};
use crate::utils::output;

use latticomp::models::formula::parse_formula;
use latticomp::models::Element;
use latticomp::properties::{self, EnegSource};
use latticomp::{ElementCatalog, LatticompError, Result};

use tabled::{Table, Tabled};

/// 元素表格行
#[derive(Debug, Clone, Tabled)]
struct ElementRow {
    #[tabled(rename = "Symbol")]
    symbol: String,
    #[tabled(rename = "Oxidation states")]
    states: String,
    #[tabled(rename = "IP (eV)")]
    ionization: String,
    #[tabled(rename = "EA (eV)")]
    affinity: String,
    #[tabled(rename = "Pauling")]
    pauling: String,
    #[tabled(rename = "ε_p / ε_s (eV)")]
    terms: String,
}

impl From<&Element> for ElementRow {
    fn from(el: &Element) -> Self {
        let fmt = |v: Option<f64>| {
            v.map(|x| format!("{:.3}", x))
                .unwrap_or_else(|| "-".to_string())
        };
        ElementRow {
            symbol: el.symbol.clone(),
            states: el.states_label(),
            ionization: fmt(el.ionization_potential),
            affinity: fmt(el.electron_affinity),
            pauling: fmt(el.pauling_eneg),
            terms: match (el.eig, el.eig_s) {
                (Some(p), Some(s)) => format!("{:.2} / {:.2}", p, s),
                _ => "-".to_string(),
            },
        }
    }
}

/// 执行 eneg 命令
pub fn execute_eneg(args: EnegArgs) -> Result<()> {
    output::print_header("Compound Electronegativity");

    let source: EnegSource = args.source.parse()?;

    let (elements, stoichs): (Vec<String>, Vec<f64>) =
        match (&args.formula, &args.elements, &args.stoichs) {
            (Some(formula), _, _) => parse_formula(formula)?.into_iter().unzip(),
            (None, Some(elements), Some(stoichs)) => (elements.clone(), stoichs.clone()),
            _ => {
                return Err(LatticompError::InvalidArgument(
                    "Specify --formula or both --elements and --stoichs".to_string(),
                ))
            }
        };

    let catalog = ElementCatalog::builtin();
    let detail = properties::compound_electroneg_detail(catalog, &elements[..], &stoichs, source)?;

    if args.verbose {
        output::print_info(&format!("Source: {}", source));
        for ((symbol, stoich), value) in elements.iter().zip(&stoichs).zip(&detail.element_values) {
            output::print_info(&format!("  {:<3} x{:<6} χ = {:.4}", symbol, stoich, value));
        }
        output::print_separator();
    }

    output::print_success(&format!("Electronegativity = {:.4}", detail.value));
    Ok(())
}

/// 执行 bandgap 命令
pub fn execute_bandgap(args: BandGapArgs) -> Result<()> {
    output::print_header("Harrison Band Gap");

    let catalog = ElementCatalog::builtin();
    let terms = properties::harrison_terms(catalog, &args.anion, &args.cation, args.distance)?;

    if args.verbose {
        output::print_quantity("V1_bar", terms.v1_bar, "eV");
        output::print_quantity("V2", terms.v2, "eV");
        output::print_quantity("V3", terms.v3, "eV");
        output::print_quantity("alpha_m", terms.alpha_m, "");
        output::print_separator();
    }

    if terms.band_gap < 0.0 {
        output::print_warning("Negative band gap: the pair is predicted to be metallic");
    }

    output::print_success(&format!(
        "{}-{} at {:.3} Å: band gap = {:.3} eV",
        args.cation, args.anion, args.distance, terms.band_gap
    ));
    Ok(())
}

/// 执行 elements 命令
pub fn execute_elements(args: ElementsArgs) -> Result<()> {
    let catalog = ElementCatalog::builtin();

    let rows: Vec<ElementRow> = match &args.symbol {
        Some(symbol) => vec![ElementRow::from(catalog.get(symbol)?)],
        None => catalog.iter().map(ElementRow::from).collect(),
    };

    output::print_header(&format!("Element Data ({} entries)", rows.len()));
    println!("{}", Table::new(&rows));
    Ok(())
}
