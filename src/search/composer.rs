//! # 子晶格组分搜索
//!
//! 搜索满足电荷中性的元素组合。
//!
//! ## 算法概述
//! 1. 校验容差（须为有限非负数）和模板（空的允许氧化态集合或非正比例即报错）
//! 2. 对每个位点筛选候选指派，每个匹配的氧化态单独成为一个候选
//! 3. 任一位点无候选时直接返回空集合
//! 4. 递归枚举所有位点候选的笛卡尔积，位点数不设上限
//! 5. 剪枝：部分电荷和加上剩余位点可能的最小（最大）电荷仍大于 +容差
//!    （小于 -容差）时，放弃该分支
//! 6. 完整指派通过电荷中性判据即加入结果集合
//!
//! `prepare` 只生成一次候选列表，返回的 `PreparedSearch` 可报告分支数并多次运行。
//! 并行版本按第一个位点的候选划分分支，每个分支使用独立的局部集合，最后合并。
//!
//! ## 依赖关系
//! - 被 `commands/search.rs` 调用
//! - 使用 `search/candidates.rs`, `search/neutrality.rs`
//! - 使用 `rayon` 进行并行搜索

use crate::data::ElementCatalog;
use crate::error::{LatticompError, Result};
use crate::models::{Composition, CompositionSet, LatticeTemplate, SiteAssignment};
use crate::search::candidates::site_candidates;
use crate::search::neutrality::{check_lattice_charges, CHARGE_TOLERANCE};

use rayon::prelude::*;
use std::collections::BTreeSet;

/// 搜索配置
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchOptions {
    /// 电荷中性容差
    pub tolerance: f64,
    /// 是否启用电荷上下界剪枝
    pub prune: bool,
    /// 并行线程数（0 = CPU 核数）
    pub jobs: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            tolerance: CHARGE_TOLERANCE,
            prune: true,
            jobs: 0,
        }
    }
}

/// 便捷入口：默认配置的顺序搜索
pub fn possible_compositions(
    template: &LatticeTemplate,
    catalog: &ElementCatalog,
) -> Result<CompositionSet> {
    LatticeSearch::new(catalog).run(template)
}

/// 子晶格组分搜索器
pub struct LatticeSearch<'a> {
    catalog: &'a ElementCatalog,
    options: SearchOptions,
}

impl<'a> LatticeSearch<'a> {
    pub fn new(catalog: &'a ElementCatalog) -> Self {
        Self {
            catalog,
            options: SearchOptions::default(),
        }
    }

    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// 顺序搜索
    pub fn run(&self, template: &LatticeTemplate) -> Result<CompositionSet> {
        Ok(self.prepare(template)?.run())
    }

    /// 并行搜索：按第一个位点的候选划分，每完成一个分支调用一次 `on_branch`
    pub fn run_parallel<F>(
        &self,
        template: &LatticeTemplate,
        on_branch: F,
    ) -> Result<CompositionSet>
    where
        F: Fn() + Sync + Send,
    {
        self.prepare(template)?.run_parallel(on_branch)
    }

    /// 校验配置与模板并生成候选列表，之后可多次运行
    pub fn prepare(&self, template: &LatticeTemplate) -> Result<PreparedSearch> {
        let tolerance = self.options.tolerance;
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(LatticompError::InvalidArgument(format!(
                "Charge tolerance must be finite and non-negative, got {}",
                tolerance
            )));
        }

        template.validate()?;

        Ok(PreparedSearch {
            plan: self.plan(template),
            jobs: self.options.jobs,
        })
    }

    /// 生成候选列表；无解时返回 None
    fn plan(&self, template: &LatticeTemplate) -> Option<SearchPlan> {
        if template.is_empty() {
            return None;
        }

        let candidates: Vec<Vec<SiteAssignment>> = template
            .sites()
            .iter()
            .map(|site| site_candidates(self.catalog, site))
            .collect();

        if candidates.iter().any(Vec::is_empty) {
            return None;
        }

        let ratios: Vec<f64> = template.sites().iter().map(|s| s.ratio).collect();
        let (suffix_min, suffix_max) = charge_bounds(&candidates, &ratios);

        Some(SearchPlan {
            candidates,
            ratios,
            suffix_min,
            suffix_max,
            tolerance: self.options.tolerance,
            prune: self.options.prune,
        })
    }
}

/// 已校验的搜索，持有全部位点的候选列表
pub struct PreparedSearch {
    plan: Option<SearchPlan>,
    jobs: usize,
}

impl PreparedSearch {
    /// 第一个位点的候选数，即并行分支数；无解时为 0
    pub fn branch_count(&self) -> usize {
        self.plan.as_ref().map_or(0, |plan| plan.candidates[0].len())
    }

    pub fn run(&self) -> CompositionSet {
        let mut found = BTreeSet::new();
        if let Some(plan) = &self.plan {
            Walker::new(plan).descend(0, 0.0, &mut found);
        }
        CompositionSet::from(found)
    }

    pub fn run_parallel<F>(&self, on_branch: F) -> Result<CompositionSet>
    where
        F: Fn() + Sync + Send,
    {
        let plan = match &self.plan {
            Some(plan) => plan,
            None => return Ok(CompositionSet::default()),
        };

        let jobs = if self.jobs == 0 {
            num_cpus::get()
        } else {
            self.jobs
        };

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .build()
            .map_err(|e| LatticompError::Other(format!("Failed to build thread pool: {}", e)))?;

        let found = pool.install(|| {
            plan.candidates[0]
                .par_iter()
                .map(|first| {
                    let mut local = BTreeSet::new();
                    let mut walker = Walker::new(plan);
                    walker.push(first, 0);
                    walker.descend(1, first.charge(plan.ratios[0]), &mut local);
                    on_branch();
                    local
                })
                .reduce(BTreeSet::new, |mut acc, mut part| {
                    acc.append(&mut part);
                    acc
                })
        });

        Ok(CompositionSet::from(found))
    }
}

/// 每个深度之后剩余位点的电荷下界和上界；末尾多一项 0
fn charge_bounds(candidates: &[Vec<SiteAssignment>], ratios: &[f64]) -> (Vec<f64>, Vec<f64>) {
    let n = candidates.len();
    let mut suffix_min = vec![0.0; n + 1];
    let mut suffix_max = vec![0.0; n + 1];

    for i in (0..n).rev() {
        let charges = candidates[i].iter().map(|c| c.charge(ratios[i]));
        let lo = charges.clone().fold(f64::INFINITY, f64::min);
        let hi = charges.fold(f64::NEG_INFINITY, f64::max);
        suffix_min[i] = suffix_min[i + 1] + lo;
        suffix_max[i] = suffix_max[i + 1] + hi;
    }

    (suffix_min, suffix_max)
}

/// 已校验的搜索输入
struct SearchPlan {
    candidates: Vec<Vec<SiteAssignment>>,
    ratios: Vec<f64>,
    suffix_min: Vec<f64>,
    suffix_max: Vec<f64>,
    tolerance: f64,
    prune: bool,
}

/// 深度优先枚举的当前路径
struct Walker<'p> {
    plan: &'p SearchPlan,
    current: Vec<SiteAssignment>,
    charges: Vec<f64>,
}

impl<'p> Walker<'p> {
    fn new(plan: &'p SearchPlan) -> Self {
        let n = plan.candidates.len();
        Self {
            plan,
            current: Vec::with_capacity(n),
            charges: Vec::with_capacity(n),
        }
    }

    fn push(&mut self, assignment: &SiteAssignment, depth: usize) {
        self.current.push(assignment.clone());
        self.charges.push(assignment.charge(self.plan.ratios[depth]));
    }

    fn pop(&mut self) {
        self.current.pop();
        self.charges.pop();
    }

    fn descend(&mut self, depth: usize, partial: f64, found: &mut BTreeSet<Composition>) {
        let plan = self.plan;

        if depth == plan.candidates.len() {
            check_lattice_charges(&self.charges, &self.current, found, plan.tolerance);
            return;
        }

        if plan.prune
            && (partial + plan.suffix_min[depth] > plan.tolerance
                || partial + plan.suffix_max[depth] < -plan.tolerance)
        {
            return;
        }

        for candidate in &plan.candidates[depth] {
            self.push(candidate, depth);
            self.descend(depth + 1, partial + candidate.charge(plan.ratios[depth]), found);
            self.pop();
        }
    }
}
