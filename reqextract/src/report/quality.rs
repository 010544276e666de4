//! 覆盖率与碰撞统计
//! 只对标记集合做布尔归约，不重新匹配

use reqextract_engine::{CompiledRuleSet, ExtractionResult, FlagSet};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// 按名称计数
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedCount {
    pub name: String,
    pub count: usize,
}

impl NamedCount {
    fn zeroed<'a>(names: impl Iterator<Item = &'a str>) -> Vec<Self> {
        names
            .map(|n| NamedCount {
                name: n.to_string(),
                count: 0,
            })
            .collect()
    }

    fn bump(counts: &mut [NamedCount], name: &str) -> bool {
        match counts.iter_mut().find(|c| c.name == name) {
            Some(c) => {
                c.count += 1;
                true
            }
            None => false,
        }
    }
}

/// 批次质量报告
/// 记录批次中各类指标：
/// 1. 类型/重要程度覆盖数与碰撞数（同一句命中多个标记）
/// 2. level 覆盖数
/// 3. 各标记命中数（目录顺序）与各内容规则胜出次数（评估顺序）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QualityReport {
    // ========== 基础统计 ==========
    /// 句子总数
    pub total: usize,
    /// 至少命中一个类型标记
    pub with_type: usize,
    /// 命中超过一个类型标记
    pub type_collisions: usize,
    /// 至少命中一个重要程度标记
    pub with_importance: usize,
    /// 命中超过一个重要程度标记
    pub importance_collisions: usize,
    /// level 非空
    pub with_level: usize,

    // ========== 明细统计 ==========
    pub type_counts: Vec<NamedCount>,
    pub importance_counts: Vec<NamedCount>,
    /// last_rule_applied 分布
    pub rule_hits: Vec<NamedCount>,
    /// 没有任何内容规则命中的句子数
    pub without_rule: usize,
}

impl QualityReport {
    /// 空报告（明细计数按规则集初始化为0）
    pub fn new(rules: &CompiledRuleSet) -> Self {
        Self {
            type_counts: NamedCount::zeroed(rules.type_names().iter().map(|n| &**n)),
            importance_counts: NamedCount::zeroed(
                rules.importance_names().iter().map(|n| &**n),
            ),
            rule_hits: NamedCount::zeroed(rules.content_names()),
            ..Default::default()
        }
    }

    /// 汇总一个批次的结果
    pub fn from_results(rules: &CompiledRuleSet, results: &[ExtractionResult]) -> Self {
        let mut report = Self::new(rules);
        for result in results {
            report.record(result);
        }
        report
    }

    /// 累加单条结果
    pub fn record(&mut self, result: &ExtractionResult) {
        self.total += 1;

        if result.type_flags.any() {
            self.with_type += 1;
        }
        if result.type_flags.has_collision() {
            self.type_collisions += 1;
        }
        if result.importance_flags.any() {
            self.with_importance += 1;
        }
        if result.importance_flags.has_collision() {
            self.importance_collisions += 1;
        }
        if result.level.is_some() {
            self.with_level += 1;
        }

        Self::count_flags(&mut self.type_counts, &result.type_flags);
        Self::count_flags(&mut self.importance_counts, &result.importance_flags);

        match result.last_rule_applied.as_deref() {
            Some(rule) => {
                if !NamedCount::bump(&mut self.rule_hits, rule) {
                    log::trace!("Unknown content rule in result: {}", rule);
                }
            }
            None => self.without_rule += 1,
        }
    }

    fn count_flags(counts: &mut [NamedCount], flags: &FlagSet) {
        for (name, set) in flags.iter() {
            if set && !NamedCount::bump(counts, name) {
                log::trace!("Unknown flag in result: {}", name);
            }
        }
    }

    fn ratio(&self, count: usize) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            count as f64 / self.total as f64
        }
    }

    pub fn type_coverage(&self) -> f64 {
        self.ratio(self.with_type)
    }

    pub fn importance_coverage(&self) -> f64 {
        self.ratio(self.with_importance)
    }

    pub fn level_coverage(&self) -> f64 {
        self.ratio(self.with_level)
    }

    /// 格式化输出统计信息（结构化日志）
    pub fn log_summary(&self) {
        log::info!(
            "Extraction quality | Total: {} | Type: {} ({:.1}%, collisions {}) | Importance: {} ({:.1}%, collisions {}) | Level: {} ({:.1}%)",
            self.total,
            self.with_type,
            self.type_coverage() * 100.0,
            self.type_collisions,
            self.with_importance,
            self.importance_coverage() * 100.0,
            self.importance_collisions,
            self.with_level,
            self.level_coverage() * 100.0
        );
        log::debug!(
            "Flag stats: type [{}] | importance [{}]",
            join_counts(&self.type_counts),
            join_counts(&self.importance_counts)
        );
        log::debug!(
            "Content rule stats: [{}] | no rule {}",
            join_counts(&self.rule_hits),
            self.without_rule
        );
    }
}

fn join_counts(counts: &[NamedCount]) -> String {
    counts
        .iter()
        .map(|c| format!("{} {}", c.name, c.count))
        .collect::<Vec<_>>()
        .join(" | ")
}

impl Display for QualityReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Total sentences:         {}", self.total)?;
        writeln!(
            f,
            "With type:               {} ({:.1}%)",
            self.with_type,
            self.type_coverage() * 100.0
        )?;
        writeln!(f, "Type collisions:         {}", self.type_collisions)?;
        writeln!(
            f,
            "With importance:         {} ({:.1}%)",
            self.with_importance,
            self.importance_coverage() * 100.0
        )?;
        writeln!(f, "Importance collisions:   {}", self.importance_collisions)?;
        write!(
            f,
            "With level:              {} ({:.1}%)",
            self.with_level,
            self.level_coverage() * 100.0
        )
    }
}
