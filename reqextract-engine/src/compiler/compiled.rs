use rustc_hash::FxHashMap;
use std::sync::Arc;

use super::matcher::Matcher;
use crate::core::{ExtractionResult, RuleCategory, RulePattern};
use crate::error::CoreResult;

/// 编译后的单条规则（1:1 对应 RulePattern）
/// 编译一次，之后只读共享
#[derive(Debug, Clone)]
pub struct CompiledRule {
    pub name: Arc<str>,
    pub category: RuleCategory,
    /// 评估优先级（仅内容规则有意义）
    pub priority: u16,
    /// 原始模式（伞形规则/base_rule 为派生后的模式）
    pub source: String,
    pub matcher: Matcher,
}

impl CompiledRule {
    /// 编译单条规则
    pub fn compile(
        category: RuleCategory,
        name: &str,
        pattern: &str,
        priority: u16,
    ) -> CoreResult<Self> {
        let matcher = Matcher::compile(name, pattern)?;
        log::debug!(
            "Compiled {} rule {} (priority {}) | {}",
            category,
            name,
            priority,
            matcher.describe()
        );
        Ok(Self {
            name: Arc::from(name),
            category,
            priority,
            source: pattern.to_string(),
            matcher,
        })
    }

    pub fn from_pattern(rule: &RulePattern) -> CoreResult<Self> {
        Self::compile(rule.category, &rule.name, &rule.pattern, rule.priority)
    }

    #[inline(always)]
    pub fn matches(&self, input: &str) -> bool {
        self.matcher.is_match(input)
    }

    /// 内容规则：返回 (level, subject) 原始捕获
    #[inline]
    pub fn capture_pair<'t>(&self, input: &'t str) -> Option<(Option<&'t str>, Option<&'t str>)> {
        self.matcher.capture_pair(input)
    }
}

/// 编译后的完整规则集
/// 启动期构建一次，Send + Sync，通过 Arc 在线程间共享
#[derive(Debug, Clone)]
pub struct CompiledRuleSet {
    /// 目录版本
    pub version: String,
    /// 类型规则（目录声明顺序）
    pub type_rules: Vec<CompiledRule>,
    /// 重要程度规则（目录声明顺序）
    pub importance_rules: Vec<CompiledRule>,
    /// 内容规则（评估顺序：base_rule 在首，其余按 (priority, 声明序号) 升序）
    pub content_rules: Vec<CompiledRule>,
    /// 类型伞形规则
    pub all_type: CompiledRule,
    /// 重要程度伞形规则
    pub all_importance: CompiledRule,
    pub(crate) type_names: Vec<Arc<str>>,
    pub(crate) importance_names: Vec<Arc<str>>,
    /// 内容规则名 → content_rules 下标
    pub(crate) content_index: FxHashMap<Arc<str>, usize>,
}

impl CompiledRuleSet {
    /// 编译内置目录
    pub fn builtin() -> CoreResult<Self> {
        super::RuleCompiler::compile(&crate::core::RuleCatalog::builtin())
    }

    /// 对单句执行全部规则
    #[inline]
    pub fn apply(&self, sentence: &str) -> ExtractionResult {
        crate::extractor::apply_rules(sentence, self)
    }

    /// 类型规则名（目录顺序）
    pub fn type_names(&self) -> &[Arc<str>] {
        &self.type_names
    }

    /// 重要程度规则名（目录顺序）
    pub fn importance_names(&self) -> &[Arc<str>] {
        &self.importance_names
    }

    /// 内容规则名（评估顺序）
    pub fn content_names(&self) -> impl Iterator<Item = &str> {
        self.content_rules.iter().map(|r| r.name.as_ref())
    }

    /// 按名称查找内容规则
    pub fn content_rule(&self, name: &str) -> Option<&CompiledRule> {
        self.content_index
            .get(name)
            .and_then(|&idx| self.content_rules.get(idx))
    }

    /// 全部规则数量（不含两条伞形规则）
    pub fn rule_count(&self) -> usize {
        self.type_rules.len() + self.importance_rules.len() + self.content_rules.len()
    }

    /// 使用回溯引擎的规则数量（含伞形规则）
    pub fn backtracking_count(&self) -> usize {
        self.type_rules
            .iter()
            .chain(&self.importance_rules)
            .chain(&self.content_rules)
            .chain([&self.all_type, &self.all_importance])
            .filter(|r| r.matcher.is_backtracking())
            .count()
    }

    /// 空结果（全部标记为false）
    pub fn empty_result(&self) -> ExtractionResult {
        ExtractionResult::empty(&self.type_names, &self.importance_names)
    }
}
