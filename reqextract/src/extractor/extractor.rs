//! Requirement extractor core module
//! 职位准入要求抽取器
//! 核心职责：
//! 1. 规则目录加载与编译（内置/本地）
//! 2. 单句/批量/记录抽取
//! 3. 批次质量统计

use reqextract_engine::{CompiledRuleSet, ExtractionResult, RuleCatalog, RuleCompiler};
use std::sync::Arc;
use std::time::Instant;

use super::global::get_global_extractor;
use crate::batch::run_batch;
use crate::error::ReqResult;
use crate::record::{annotate, sentence_of, Record};
use crate::report::QualityReport;
use crate::{RuleConfig, RuleLoader};

/// 抽取器核心结构体
/// - rules: 编译后的规则集（Arc共享，避免重复编译）
/// - config: 规则配置（批处理选项在抽取时使用）
#[derive(Debug, Clone)]
pub struct RequirementExtractor {
    rules: Arc<CompiledRuleSet>,
    config: RuleConfig,
}

impl RequirementExtractor {
    /// 按配置加载并编译规则目录
    pub fn new(config: RuleConfig) -> ReqResult<Self> {
        let start = Instant::now();
        let catalog = RuleLoader::new().load(&config)?;
        let extractor = Self::with_catalog(catalog, config)?;
        log::info!(
            "RequirementExtractor ready | origin: {} | Time: {}ms",
            extractor.config.origin_label(),
            start.elapsed().as_millis()
        );
        Ok(extractor)
    }

    /// 使用内存中的规则目录创建抽取器
    pub fn with_catalog(catalog: RuleCatalog, config: RuleConfig) -> ReqResult<Self> {
        let rules = RuleCompiler::compile(&catalog)?;
        Ok(Self::with_compiled(Arc::new(rules), config))
    }

    /// 使用已编译的规则集创建抽取器（多个抽取器共享同一规则集）
    pub fn with_compiled(rules: Arc<CompiledRuleSet>, config: RuleConfig) -> Self {
        Self { rules, config }
    }

    /// 单句抽取
    #[inline]
    pub fn extract(&self, sentence: &str) -> ExtractionResult {
        self.rules.apply(sentence)
    }

    /// 批量抽取，结果与输入按下标对应
    pub fn extract_batch<S>(&self, sentences: &[S]) -> Vec<ExtractionResult>
    where
        S: AsRef<str> + Sync,
    {
        run_batch(&self.rules, sentences, self.config.batch.parallel)
    }

    /// 记录抽取：读取配置的句子字段，返回追加了输出列的记录与原始结果
    pub fn extract_records(&self, records: Vec<Record>) -> (Vec<Record>, Vec<ExtractionResult>) {
        let field = self.config.batch.input_field.as_str();
        let results = {
            let sentences: Vec<&str> = records.iter().map(|r| sentence_of(r, field)).collect();
            self.extract_batch(&sentences)
        };
        let annotated = records
            .into_iter()
            .zip(&results)
            .map(|(record, result)| annotate(record, result))
            .collect();
        (annotated, results)
    }

    /// 批次质量统计
    pub fn report(&self, results: &[ExtractionResult]) -> QualityReport {
        QualityReport::from_results(&self.rules, results)
    }

    pub fn rule_set(&self) -> &Arc<CompiledRuleSet> {
        &self.rules
    }

    pub fn config(&self) -> &RuleConfig {
        &self.config
    }
}

/// 使用全局抽取器抽取单句（未初始化时按默认配置懒加载）
pub fn extract(sentence: &str) -> ReqResult<ExtractionResult> {
    Ok(get_global_extractor()?.extract(sentence))
}
