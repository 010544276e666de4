mod enums;
mod pattern;
mod catalog;
mod result;

// 导出常用项
pub use enums::RuleCategory;
pub use pattern::{RulePattern, RuleSpec};
pub use catalog::{RuleCatalog, BASE_RULE_NAME};
pub use result::{ExtractionResult, FlagSet};
