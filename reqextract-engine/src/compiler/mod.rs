// 分组结构扫描 + 捕获组改写
pub mod group_scan;
// 运行时匹配器（regex / fancy-regex）
pub mod matcher;
// 伞形规则 + base_rule
pub mod composite;
// 编译后的规则与规则集
pub mod compiled;
#[allow(clippy::module_inception)]
pub mod compiler;

pub use compiled::{CompiledRule, CompiledRuleSet};
pub use compiler::RuleCompiler;
pub use composite::{CompositeBuilder, CONNECTORS};
pub use matcher::Matcher;
