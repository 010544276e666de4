use serde::{Deserialize, Serialize};

use super::enums::RuleCategory;

/// 静态规则描述（内置目录使用，零分配）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleSpec {
    pub category: RuleCategory,
    pub name: &'static str,
    pub pattern: &'static str,
    /// 评估优先级，仅对内容规则有意义（升序评估，后命中覆盖先命中）
    pub priority: u16,
}

impl RuleSpec {
    pub const fn new(
        category: RuleCategory,
        name: &'static str,
        pattern: &'static str,
        priority: u16,
    ) -> Self {
        Self {
            category,
            name,
            pattern,
            priority,
        }
    }
}

/// 单条命名规则模式
/// 身份 = (category, name)，目录定义后不再修改
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RulePattern {
    pub category: RuleCategory,
    pub name: String,
    pub pattern: String,
    #[serde(default)]
    pub priority: u16,
}

impl RulePattern {
    pub fn new(
        category: RuleCategory,
        name: impl Into<String>,
        pattern: impl Into<String>,
        priority: u16,
    ) -> Self {
        Self {
            category,
            name: name.into(),
            pattern: pattern.into(),
            priority,
        }
    }
}

impl From<&RuleSpec> for RulePattern {
    fn from(spec: &RuleSpec) -> Self {
        RulePattern {
            category: spec.category,
            name: spec.name.to_string(),
            pattern: spec.pattern.to_string(),
            priority: spec.priority,
        }
    }
}
