//! reqextract - 法语职位准入要求句子的规则化结构抽取

pub mod batch;
pub mod config;
pub mod error;
pub mod extractor;
pub mod record;
pub mod report;
pub mod rule;

// 导出全局错误类型
pub use self::error::{ReqExtractError, ReqResult};

// 导出配置模块核心结构体与构建器
pub use crate::config::{BatchOptions, CustomConfigBuilder, RuleConfig, RuleOrigin};

// 导出规则加载器
pub use crate::rule::RuleLoader;

// 导出抽取模块核心接口
pub use crate::extractor::{
    extract, init_global_extractor, init_global_extractor_with_catalog, RequirementExtractor,
};
pub use crate::extractor::global::global_extractor;

// 导出统计与记录适配
pub use crate::record::Record;
pub use crate::report::QualityReport;

// 内核常用类型
pub use reqextract_engine::{
    CompiledRuleSet, CoreError, ExtractionResult, FlagSet, RuleCatalog, RuleCategory, RulePattern,
};
