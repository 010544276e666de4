use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::enums::RuleCategory;
use super::pattern::{RulePattern, RuleSpec};
use crate::error::{CoreError, CoreResult};

/// 派生组合内容规则的保留名
pub const BASE_RULE_NAME: &str = "base_rule";

/// 规则目录：带版本号的静态规则表
/// 目录是配置而不是运行时数据，构建完成后只读
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleCatalog {
    #[serde(default)]
    pub version: String,
    pub rules: Vec<RulePattern>,
}

impl RuleCatalog {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            rules: Vec::new(),
        }
    }

    /// 内置目录（crate::builtin）
    pub fn builtin() -> Self {
        Self::from_specs(crate::builtin::CATALOG_VERSION, crate::builtin::BUILTIN_RULES)
    }

    /// 从静态规则表构建目录
    pub fn from_specs(version: &str, specs: &[RuleSpec]) -> Self {
        Self {
            version: version.to_string(),
            rules: specs.iter().map(RulePattern::from).collect(),
        }
    }

    /// 从JSON文本解析目录并校验
    pub fn from_json_str(json: &str) -> CoreResult<Self> {
        let catalog: RuleCatalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// 链式追加规则（目录定义期使用）
    pub fn with_rule(
        mut self,
        category: RuleCategory,
        name: impl Into<String>,
        pattern: impl Into<String>,
        priority: u16,
    ) -> Self {
        self.rules
            .push(RulePattern::new(category, name, pattern, priority));
        self
    }

    /// 指定类别的规则，保持声明顺序
    pub fn category(&self, category: RuleCategory) -> impl Iterator<Item = &RulePattern> {
        self.rules.iter().filter(move |r| r.category == category)
    }

    /// 指定类别的规则名列表，保持声明顺序
    pub fn names(&self, category: RuleCategory) -> Vec<&str> {
        self.category(category).map(|r| r.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// 目录结构校验（编译前执行）
    /// 1. 同类别下规则名不可重复（不允许静默覆盖）
    /// 2. 内容规则不可占用保留名 base_rule
    /// 3. type/importance 类别不可为空（伞形模式需要至少一条规则）
    pub fn validate(&self) -> CoreResult<()> {
        let mut seen: FxHashSet<(RuleCategory, &str)> = FxHashSet::default();

        for rule in &self.rules {
            if rule.category == RuleCategory::Content && rule.name == BASE_RULE_NAME {
                return Err(CoreError::ReservedRuleName(rule.name.clone()));
            }
            if !seen.insert((rule.category, rule.name.as_str())) {
                return Err(CoreError::DuplicateRule {
                    category: rule.category,
                    name: rule.name.clone(),
                });
            }
        }

        for category in [RuleCategory::Type, RuleCategory::Importance] {
            if self.category(category).next().is_none() {
                return Err(CoreError::EmptyCategory(category));
            }
        }

        Ok(())
    }
}
