//! 规则加载模块
pub mod rule_loader;

// 导出加载器
pub use rule_loader::RuleLoader;
