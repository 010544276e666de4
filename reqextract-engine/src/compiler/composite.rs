//! 组合规则构建
//! 把 type/importance 类别的全部模式并成伞形模式，再用两把伞夹出 base_rule：
//! (类型线索) [连接词] (自由文本) 重要程度线索

use super::group_scan::to_non_capturing;
use crate::core::{RuleCatalog, RuleCategory};
use crate::error::{CoreError, CoreResult};

/// 类型线索与自由文本之间的可选连接词（dans / en / au sein de / de la / du / le / l' ...）
pub const CONNECTORS: &str = r"(?:(?:dans\s+(?:les|le|la)|dans|en|au\s+sein\s+(?:des|du|de)|de\s+la|du|des|de|les|le|la)\s+|(?:de\s+)?l['’])?";

/// 伞形规则名
pub const ALL_TYPE_NAME: &str = "all_type";
pub const ALL_IMPORTANCE_NAME: &str = "all_importance";

/// 组合规则构建器
#[derive(Debug, Default)]
pub struct CompositeBuilder;

impl CompositeBuilder {
    /// 并集伞形模式：每个子模式先去捕获再各自包一层非捕获组，最外层再包一层非捕获组
    pub fn umbrella<'a, I>(patterns: I) -> String
    where
        I: IntoIterator<Item = &'a str>,
    {
        let branches: Vec<String> = patterns
            .into_iter()
            .map(|p| format!("(?:{})", to_non_capturing(p)))
            .collect();
        format!("(?:{})", branches.join("|"))
    }

    /// 指定类别的伞形模式，类别为空时报错
    pub fn umbrella_for(catalog: &RuleCatalog, category: RuleCategory) -> CoreResult<String> {
        let patterns: Vec<&str> = catalog
            .category(category)
            .map(|r| r.pattern.as_str())
            .collect();
        if patterns.is_empty() {
            return Err(CoreError::EmptyCategory(category));
        }
        Ok(Self::umbrella(patterns))
    }

    /// base_rule 模式
    /// 第1组 = 类型线索（level），第2组 = 贪婪自由文本（subject），重要程度线索只做右边界不捕获
    pub fn base_rule(all_type: &str, all_importance: &str) -> String {
        format!(r"({})\s*{}(.*)\s+{}", all_type, CONNECTORS, all_importance)
    }
}
