// 核心公共结构体+枚举
pub mod core;
// 内置规则目录
pub mod builtin;
// 规则编译 + 组合规则构建
pub mod compiler;
// level / subject 清洗
pub mod cleaner;
// 单句抽取
pub mod extractor;
pub mod error;
pub mod utils;

// 顶层导出常用类型
pub use crate::core::{
    ExtractionResult, FlagSet, RuleCatalog, RuleCategory, RulePattern, RuleSpec, BASE_RULE_NAME,
};
pub use cleaner::FieldCleaner;
pub use compiler::{CompiledRule, CompiledRuleSet, CompositeBuilder, Matcher, RuleCompiler};
pub use error::{CoreError, CoreResult};
pub use extractor::apply_rules;
