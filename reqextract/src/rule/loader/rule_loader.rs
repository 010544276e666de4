use std::fs;
use std::path::Path;

use reqextract_engine::RuleCatalog;

use crate::error::{ReqExtractError, ReqResult};
use crate::{RuleConfig, RuleOrigin};

/// 规则目录加载器
/// 内置目录直接取 reqextract_engine::builtin，本地目录为JSON文件
#[derive(Debug, Default)]
pub struct RuleLoader;

impl RuleLoader {
    pub fn new() -> Self {
        Self
    }

    /// 按配置解析规则目录（已完成结构校验）
    pub fn load(&self, config: &RuleConfig) -> ReqResult<RuleCatalog> {
        match &config.origin {
            RuleOrigin::Embedded => {
                let catalog = RuleCatalog::builtin();
                log::debug!(
                    "Using embedded rule catalog | version: {} | rules: {}",
                    catalog.version,
                    catalog.len()
                );
                Ok(catalog)
            }
            RuleOrigin::LocalFile(path) => self.load_local(path),
        }
    }

    /// 从本地JSON文件加载规则目录
    pub fn load_local(&self, path: &Path) -> ReqResult<RuleCatalog> {
        let json = fs::read_to_string(path).map_err(|e| {
            ReqExtractError::RuleLoadError(format!(
                "本地规则文件[{}]读取失败: {}",
                path.display(),
                e
            ))
        })?;

        let catalog = RuleCatalog::from_json_str(&json)?;
        log::info!(
            "Local rule catalog loaded | path: {} | version: {} | rules: {}",
            path.display(),
            catalog.version,
            catalog.len()
        );
        Ok(catalog)
    }

    /// 导出规则目录为JSON文件（用于基于内置目录定制规则）
    pub fn export(&self, catalog: &RuleCatalog, path: &Path) -> ReqResult<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(catalog)?;
        fs::write(path, json)?;
        log::info!(
            "Rule catalog exported | path: {} | rules: {}",
            path.display(),
            catalog.len()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("reqextract_{}_{}.json", std::process::id(), name))
    }

    #[test]
    fn test_load_embedded() {
        let catalog = RuleLoader::new().load(&RuleConfig::embedded()).unwrap();
        assert_eq!(catalog, RuleCatalog::builtin());
    }

    #[test]
    fn test_export_then_load_local() {
        let path = temp_path("export");
        let loader = RuleLoader::new();
        loader.export(&RuleCatalog::builtin(), &path).unwrap();

        let loaded = loader.load(&RuleConfig::local_file(&path)).unwrap();
        assert_eq!(loaded, RuleCatalog::builtin());
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file_is_load_error() {
        let result = RuleLoader::new().load(&RuleConfig::local_file(temp_path("missing")));
        assert!(matches!(result, Err(ReqExtractError::RuleLoadError(_))));
    }

    #[test]
    fn test_invalid_catalog_is_compile_error() {
        let path = temp_path("duplicate");
        fs::write(
            &path,
            r#"{"version": "x", "rules": [
                {"category": "type", "name": "degree", "pattern": "bac"},
                {"category": "type", "name": "degree", "pattern": "cap"},
                {"category": "importance", "name": "required", "pattern": "requis"}
            ]}"#,
        )
        .unwrap();
        let result = RuleLoader::new().load_local(&path);
        assert!(matches!(result, Err(ReqExtractError::RuleCompileError(_))));
        let _ = fs::remove_file(&path);
    }
}
