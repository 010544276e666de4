use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// 规则类别枚举，定义目录中的三类规则
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleCategory {
    /// 要求类型（学历/证书/经验/技能/其他）
    Type,
    /// 重要程度（必需/可替代/有时/加分）
    Importance,
    /// 内容抽取（两个捕获组：level + subject）
    Content,
}

impl RuleCategory {
    /// 全部类别，按目录声明顺序
    pub const ALL: [RuleCategory; 3] = [
        RuleCategory::Type,
        RuleCategory::Importance,
        RuleCategory::Content,
    ];

    /// 是否为布尔标记类别（type/importance）
    #[inline]
    pub fn is_flag(&self) -> bool {
        matches!(self, RuleCategory::Type | RuleCategory::Importance)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RuleCategory::Type => "type",
            RuleCategory::Importance => "importance",
            RuleCategory::Content => "content",
        }
    }
}

impl Display for RuleCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serde_lowercase() {
        let json = serde_json::to_string(&RuleCategory::Importance).unwrap();
        assert_eq!(json, "\"importance\"");
        let back: RuleCategory = serde_json::from_str("\"content\"").unwrap();
        assert_eq!(back, RuleCategory::Content);
    }

    #[test]
    fn test_flag_categories() {
        assert!(RuleCategory::Type.is_flag());
        assert!(RuleCategory::Importance.is_flag());
        assert!(!RuleCategory::Content.is_flag());
    }
}
