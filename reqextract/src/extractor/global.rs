//! 全局抽取器单例管理
//! 核心职责：
//! 1. 维护进程生命周期内唯一的RequirementExtractor实例
//! 2. 支持懒加载初始化和手动注入规则目录

use once_cell::sync::OnceCell;
use reqextract_engine::RuleCatalog;

use super::extractor::RequirementExtractor;
use crate::error::{ReqExtractError, ReqResult};
use crate::RuleConfig;

/// 全局抽取器实例 - 线程安全单例，进程内只初始化一次
static GLOBAL_EXTRACTOR: OnceCell<RequirementExtractor> = OnceCell::new();

/// 初始化全局抽取器
/// 幂等：已初始化则直接返回Ok(())，不会替换已有实例
pub fn init_global_extractor(config: RuleConfig) -> ReqResult<()> {
    if GLOBAL_EXTRACTOR.get().is_some() {
        log::debug!("Global extractor already initialized, skip reinitialization");
        return Ok(());
    }

    let extractor = RequirementExtractor::new(config).map_err(|e| {
        ReqExtractError::ExtractorInitError(format!(
            "Failed to create RequirementExtractor instance: {}",
            e
        ))
    })?;
    install(extractor);

    log::info!("Global RequirementExtractor initialized successfully");
    Ok(())
}

/// 手动注入规则目录，初始化全局抽取器
pub fn init_global_extractor_with_catalog(catalog: RuleCatalog, config: RuleConfig) -> ReqResult<()> {
    if GLOBAL_EXTRACTOR.get().is_some() {
        log::debug!("Global extractor already initialized, skip reinitialization with custom catalog");
        return Ok(());
    }

    let extractor = RequirementExtractor::with_catalog(catalog, config).map_err(|e| {
        ReqExtractError::ExtractorInitError(format!(
            "Failed to create RequirementExtractor with custom catalog: {}",
            e
        ))
    })?;
    install(extractor);

    log::info!("Global RequirementExtractor initialized with custom rule catalog");
    Ok(())
}

/// 并发初始化时先完成者胜出，后完成的实例直接丢弃
fn install(extractor: RequirementExtractor) {
    if GLOBAL_EXTRACTOR.set(extractor).is_err() {
        log::debug!("Global extractor initialized concurrently by another thread, keep existing instance");
    }
}

/// 获取全局抽取器实例（未初始化时使用默认配置懒加载）
pub(crate) fn get_global_extractor() -> ReqResult<&'static RequirementExtractor> {
    GLOBAL_EXTRACTOR.get_or_try_init(|| {
        log::debug!("Lazy initializing global RequirementExtractor with default config");
        RequirementExtractor::new(RuleConfig::default())
    })
}

/// 获取全局抽取器实例（不自动初始化）
pub fn global_extractor() -> ReqResult<&'static RequirementExtractor> {
    GLOBAL_EXTRACTOR.get().ok_or_else(|| {
        ReqExtractError::ExtractorNotInitialized(
            "Global RequirementExtractor not initialized! Please call init_global_extractor first"
                .to_string(),
        )
    })
}
