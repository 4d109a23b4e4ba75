//! # search 子命令实现
//!
//! ## 功能
//! - 由预定义名称或 `--site` 列表构造模板
//! - 可选限制元素范围
//! - 并行搜索并显示进度
//! - 终端表格输出，可选导出 CSV
//!
//! ## 依赖关系
//! - 使用 `cli/search.rs` 定义的参数
//! - 使用 latticomp 的 `search/`, `export.rs`
//! - 使用 `utils/output.rs`, `utils/progress.rs`

use crate::cli::search::SearchArgs;
use crate::utils::{output, progress};

use latticomp::export;
use latticomp::models::PRESET_NAMES;
use latticomp::{
    ElementCatalog, LatticeSearch, LatticeTemplate, LatticompError, Result, SearchOptions,
};

use tabled::{Table, Tabled};

/// 结果表格行
#[derive(Debug, Clone, Tabled)]
struct CompositionRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Formula")]
    formula: String,
    #[tabled(rename = "Assignment")]
    assignment: String,
}

/// 执行组分搜索
pub fn execute(args: SearchArgs) -> Result<()> {
    output::print_header("Charge-Neutral Composition Search");

    let template = build_template(&args)?;

    output::print_info(&format!(
        "Template '{}' with {} sites",
        template.name(),
        template.len()
    ));
    for (i, site) in template.sites().iter().enumerate() {
        output::print_info(&format!("  site {}: {}", i + 1, site.describe()));
    }

    let restricted;
    let catalog = match &args.elements {
        Some(symbols) => {
            restricted = ElementCatalog::builtin().restrict_to(symbols.as_slice())?;
            &restricted
        }
        None => ElementCatalog::builtin(),
    };
    output::print_info(&format!("Searching over {} elements", catalog.len()));

    let options = SearchOptions {
        prune: !args.no_prune,
        jobs: args.jobs,
        ..SearchOptions::default()
    };
    let prepared = LatticeSearch::new(catalog)
        .with_options(options)
        .prepare(&template)?;

    let pb = progress::create_progress_bar(prepared.branch_count() as u64, "Searching");
    let found = prepared.run_parallel(|| pb.inc(1))?;
    pb.finish_and_clear();

    if found.is_empty() {
        output::print_warning("No charge-neutral compositions found.");
        return Ok(());
    }

    output::print_success(&format!("Found {} compositions", found.len()));

    let rows: Vec<CompositionRow> = found
        .iter()
        .take(args.top_n)
        .enumerate()
        .map(|(i, comp)| CompositionRow {
            index: i + 1,
            formula: comp.formula(&template),
            assignment: comp.to_string(),
        })
        .collect();

    if !rows.is_empty() {
        output::print_header(&format!("First {} of {} Compositions", rows.len(), found.len()));
        println!("{}", Table::new(&rows));
    }

    if let Some(path) = &args.output {
        export::compositions_to_csv(&found, &template, path)?;
        output::print_done(&format!("Compositions written to {}", path.display()));
    }

    Ok(())
}

/// 由参数构造模板
fn build_template(args: &SearchArgs) -> Result<LatticeTemplate> {
    if let Some(name) = &args.preset {
        return LatticeTemplate::preset(name).ok_or_else(|| {
            LatticompError::InvalidArgument(format!(
                "Unknown preset '{}'. Available: {}",
                name,
                PRESET_NAMES.join(", ")
            ))
        });
    }

    if args.site.is_empty() {
        return Err(LatticompError::InvalidArgument(
            "Specify --preset or at least one --site".to_string(),
        ));
    }

    Ok(LatticeTemplate::new("custom", args.site.clone()))
}
