//! 全局规则配置管理

use std::path::PathBuf;

use super::batch::BatchOptions;

/// 规则来源
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleOrigin {
    Embedded,           // 内置规则目录（reqextract_engine::builtin）
    LocalFile(PathBuf), // 本地JSON规则目录（运行时）
}

/// 完整规则配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleConfig {
    pub origin: RuleOrigin,
    pub batch: BatchOptions,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            origin: RuleOrigin::Embedded,
            batch: BatchOptions::default(),
        }
    }
}

impl RuleConfig {
    /// 内置规则
    pub fn embedded() -> Self {
        Self::default()
    }

    /// 本地规则文件
    pub fn local_file(path: impl Into<PathBuf>) -> Self {
        Self {
            origin: RuleOrigin::LocalFile(path.into()),
            batch: BatchOptions::default(),
        }
    }

    /// 规则来源的简短描述（日志用）
    pub fn origin_label(&self) -> String {
        match &self.origin {
            RuleOrigin::Embedded => "embedded".to_string(),
            RuleOrigin::LocalFile(path) => format!("file:{}", path.display()),
        }
    }
}

/// 自定义构建器（链式 API）
#[derive(Debug, Clone, Default)]
pub struct CustomConfigBuilder {
    config: RuleConfig,
}

impl CustomConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origin(mut self, origin: RuleOrigin) -> Self {
        self.config.origin = origin;
        self
    }

    pub fn local_file(self, path: impl Into<PathBuf>) -> Self {
        self.origin(RuleOrigin::LocalFile(path.into()))
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.config.batch.parallel = parallel;
        self
    }

    pub fn input_field(mut self, field: impl Into<String>) -> Self {
        self.config.batch.input_field = field.into();
        self
    }

    pub fn build(self) -> RuleConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_INPUT_FIELD;

    #[test]
    fn test_default_config() {
        let config = RuleConfig::default();
        assert_eq!(config.origin, RuleOrigin::Embedded);
        assert!(!config.batch.parallel);
        assert_eq!(config.batch.input_field, DEFAULT_INPUT_FIELD);
        assert_eq!(config.origin_label(), "embedded");
    }

    #[test]
    fn test_builder_chain() {
        let config = CustomConfigBuilder::new()
            .local_file("rules/catalog.json")
            .parallel(true)
            .input_field("exigences")
            .build();
        assert_eq!(
            config.origin,
            RuleOrigin::LocalFile(PathBuf::from("rules/catalog.json"))
        );
        assert!(config.batch.parallel);
        assert_eq!(config.batch.input_field, "exigences");
        assert_eq!(config.origin_label(), "file:rules/catalog.json");
    }
}
