//! 抽取模块：抽取器 + 全局单例
pub mod global;
#[allow(clippy::module_inception)]
pub mod extractor;

// 导出核心接口
pub use self::global::{init_global_extractor, init_global_extractor_with_catalog};
pub use self::extractor::{extract, RequirementExtractor};
