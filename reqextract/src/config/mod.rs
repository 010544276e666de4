//! 配置模块：规则来源 + 批处理选项
pub mod batch;
pub mod rule;

pub use batch::{BatchOptions, DEFAULT_INPUT_FIELD};
pub use rule::{CustomConfigBuilder, RuleConfig, RuleOrigin};
