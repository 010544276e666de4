//! 规则模块：负责规则目录的加载与导出
pub mod loader;

pub use loader::rule_loader::RuleLoader;
