use rustc_hash::FxHashMap;
use std::sync::Arc;

use super::compiled::{CompiledRule, CompiledRuleSet};
use super::composite::{CompositeBuilder, ALL_IMPORTANCE_NAME, ALL_TYPE_NAME};
use crate::core::{RuleCatalog, RuleCategory, BASE_RULE_NAME};
use crate::error::{CoreError, CoreResult};

/// 内容规则必须的捕获组数量（含第0组）
const CONTENT_CAPTURES_LEN: usize = 3;

/// 规则编译器
/// 目录 → 编译后规则集，任何错误都在此阶段暴露
pub struct RuleCompiler;

impl RuleCompiler {
    /// 编译整个目录
    /// 流程：
    /// 1. 目录结构校验（重名/保留名/空类别）
    /// 2. 编译 type / importance 规则
    /// 3. 构建伞形规则与 base_rule
    /// 4. 编译内容规则并校验捕获组数量
    /// 5. 内容规则按 (priority, 声明序号) 稳定排序，base_rule 恒在首位
    pub fn compile(catalog: &RuleCatalog) -> CoreResult<CompiledRuleSet> {
        catalog.validate()?;

        let type_rules = Self::compile_category(catalog, RuleCategory::Type)?;
        let importance_rules = Self::compile_category(catalog, RuleCategory::Importance)?;

        let all_type_pattern = CompositeBuilder::umbrella_for(catalog, RuleCategory::Type)?;
        let all_importance_pattern =
            CompositeBuilder::umbrella_for(catalog, RuleCategory::Importance)?;
        let base_pattern = CompositeBuilder::base_rule(&all_type_pattern, &all_importance_pattern);

        let all_type =
            CompiledRule::compile(RuleCategory::Type, ALL_TYPE_NAME, &all_type_pattern, 0)?;
        let all_importance = CompiledRule::compile(
            RuleCategory::Importance,
            ALL_IMPORTANCE_NAME,
            &all_importance_pattern,
            0,
        )?;
        let base_rule =
            CompiledRule::compile(RuleCategory::Content, BASE_RULE_NAME, &base_pattern, 0)?;
        Self::check_captures(&base_rule)?;

        let mut authored = Self::compile_category(catalog, RuleCategory::Content)?;
        for rule in &authored {
            Self::check_captures(rule)?;
        }
        // sort_by_key 是稳定排序，同优先级保持声明顺序
        authored.sort_by_key(|r| r.priority);

        let mut content_rules = Vec::with_capacity(authored.len() + 1);
        content_rules.push(base_rule);
        content_rules.extend(authored);

        let content_index: FxHashMap<Arc<str>, usize> = content_rules
            .iter()
            .enumerate()
            .map(|(idx, r)| (r.name.clone(), idx))
            .collect();

        let rule_set = CompiledRuleSet {
            version: catalog.version.clone(),
            type_names: type_rules.iter().map(|r| r.name.clone()).collect(),
            importance_names: importance_rules.iter().map(|r| r.name.clone()).collect(),
            type_rules,
            importance_rules,
            content_rules,
            all_type,
            all_importance,
            content_index,
        };

        log::info!(
            "Rule set compiled | version: {} | type: {} | importance: {} | content: {} | backtracking: {}",
            rule_set.version,
            rule_set.type_rules.len(),
            rule_set.importance_rules.len(),
            rule_set.content_rules.len(),
            rule_set.backtracking_count()
        );

        Ok(rule_set)
    }

    /// 按声明顺序编译某一类别的全部规则
    fn compile_category(
        catalog: &RuleCatalog,
        category: RuleCategory,
    ) -> CoreResult<Vec<CompiledRule>> {
        catalog
            .category(category)
            .map(CompiledRule::from_pattern)
            .collect()
    }

    fn check_captures(rule: &CompiledRule) -> CoreResult<()> {
        let len = rule.matcher.captures_len();
        if len != CONTENT_CAPTURES_LEN {
            log::error!(
                "Content rule {} has {} capture groups, expected 2",
                rule.name,
                len.saturating_sub(1)
            );
            return Err(CoreError::InvalidCaptureGroups {
                rule: rule.name.to_string(),
                found: len.saturating_sub(1),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal() -> RuleCatalog {
        RuleCatalog::new("test")
            .with_rule(RuleCategory::Type, "degree", r"\bbac\b", 0)
            .with_rule(RuleCategory::Importance, "required", r"\brequis\b", 0)
    }

    #[test]
    fn test_builtin_compiles() {
        let rules = CompiledRuleSet::builtin().unwrap();
        assert_eq!(rules.type_rules.len(), 5);
        assert_eq!(rules.importance_rules.len(), 4);
        assert_eq!(
            rules.content_names().collect::<Vec<_>>(),
            vec![
                BASE_RULE_NAME,
                "degree1",
                "degree2",
                "certification1",
                "experience1",
                "skill1"
            ]
        );
        assert!(rules.backtracking_count() > 0);
        assert!(rules.content_rule("skill1").is_some());
        assert!(rules.content_rule("missing").is_none());
    }

    #[test]
    fn test_content_order_is_priority_then_declaration() {
        let catalog = minimal()
            .with_rule(RuleCategory::Content, "late", r"(a) (b)", 20)
            .with_rule(RuleCategory::Content, "first_tie", r"(c) (d)", 10)
            .with_rule(RuleCategory::Content, "second_tie", r"(e) (f)", 10);
        let rules = RuleCompiler::compile(&catalog).unwrap();
        assert_eq!(
            rules.content_names().collect::<Vec<_>>(),
            vec![BASE_RULE_NAME, "first_tie", "second_tie", "late"]
        );
        assert_eq!(rules.content_index.get("late"), Some(&3));
    }

    #[test]
    fn test_wrong_capture_count_fails() {
        let catalog = minimal().with_rule(RuleCategory::Content, "one_group", r"(bac) en .+", 1);
        match RuleCompiler::compile(&catalog) {
            Err(CoreError::InvalidCaptureGroups { rule, found }) => {
                assert_eq!(rule, "one_group");
                assert_eq!(found, 1);
            }
            other => panic!("expected capture group error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_malformed_pattern_fails() {
        let catalog = minimal().with_rule(RuleCategory::Type, "broken", r"(bac", 0);
        assert!(matches!(
            RuleCompiler::compile(&catalog),
            Err(CoreError::RegexCompileError(_))
        ));
    }

    #[test]
    fn test_catalog_errors_surface_before_compilation() {
        let catalog = minimal().with_rule(RuleCategory::Importance, "required", r"\bexigé\b", 0);
        assert!(matches!(
            RuleCompiler::compile(&catalog),
            Err(CoreError::DuplicateRule { .. })
        ));
    }

    #[test]
    fn test_umbrella_matches_iff_some_member_matches() {
        let rules = CompiledRuleSet::builtin().unwrap();
        let sentences = [
            "Cet emploi est accessible avec un CAP/BEP dans le secteur agricole.",
            "Les permis C, C1, CE, C1E peuvent être requis.",
            "Accessible sans diplôme ni expérience.",
            "La maîtrise de l'anglais est appréciée.",
            "Une visite médicale est obligatoire.",
            "Rien à signaler ici.",
            "",
        ];
        for sentence in sentences {
            assert_eq!(
                rules.all_type.matches(sentence),
                rules.type_rules.iter().any(|r| r.matches(sentence)),
                "all_type mismatch on {:?}",
                sentence
            );
            assert_eq!(
                rules.all_importance.matches(sentence),
                rules.importance_rules.iter().any(|r| r.matches(sentence)),
                "all_importance mismatch on {:?}",
                sentence
            );
        }
    }
}
