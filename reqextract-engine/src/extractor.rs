//! 单句抽取
//! 标记类规则各自独立判定；内容规则按评估顺序依次匹配，后命中覆盖先命中
use crate::cleaner::FieldCleaner;
use crate::compiler::{CompiledRule, CompiledRuleSet};
use crate::core::{ExtractionResult, FlagSet};
use crate::utils::preview_compact;

/// 对单句执行全部规则，产出结构化结果
/// 空串/纯空白句子直接返回全false结果；不存在逐句错误
pub fn apply_rules(sentence: &str, rules: &CompiledRuleSet) -> ExtractionResult {
    if sentence.trim().is_empty() {
        return rules.empty_result();
    }

    let type_flags = evaluate_flags(&rules.type_rules, sentence);
    let importance_flags = evaluate_flags(&rules.importance_rules, sentence);

    // 后命中覆盖先命中，只保留最后一次命中的原始捕获
    let mut winner: Option<(&CompiledRule, Option<&str>, Option<&str>)> = None;
    for rule in &rules.content_rules {
        if let Some((level, subject)) = rule.capture_pair(sentence) {
            log::trace!(
                "Content rule {} matched | level: {:?} | subject: {:?}",
                rule.name,
                level,
                subject
            );
            winner = Some((rule, level, subject));
        }
    }

    let mut result = ExtractionResult {
        type_flags,
        importance_flags,
        ..Default::default()
    };
    if let Some((rule, level, subject)) = winner {
        let (level, subject) = FieldCleaner::clean_fields(level, subject);
        result.level = level;
        result.subject = subject;
        result.last_rule_applied = Some(rule.name.to_string());
    }

    log::debug!(
        "Extracted | {} | Input preview: {}",
        result,
        preview_compact(sentence, 80)
    );
    result
}

fn evaluate_flags(rules: &[CompiledRule], sentence: &str) -> FlagSet {
    FlagSet::from_entries(
        rules
            .iter()
            .map(|r| (r.name.clone(), r.matches(sentence)))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::RuleCompiler;
    use crate::core::{RuleCatalog, RuleCategory, BASE_RULE_NAME};

    fn builtin() -> CompiledRuleSet {
        CompiledRuleSet::builtin().unwrap()
    }

    #[test]
    fn test_degree_sentence() {
        let rules = builtin();
        let result = apply_rules(
            "Cet emploi/métier est accessible avec un CAP/BEP dans le secteur agricole.",
            &rules,
        );
        assert!(result.type_flags.is_set("degree"));
        assert!(result.importance_flags.is_set("required"));
        assert_eq!(result.level.as_deref(), Some("CAP/BEP"));
        assert!(result
            .subject
            .as_deref()
            .is_some_and(|s| s.contains("secteur agricole")));
        assert_eq!(result.last_rule_applied.as_deref(), Some("degree1"));
    }

    #[test]
    fn test_certification_sentence() {
        let rules = builtin();
        let result = apply_rules("Les permis C, C1, CE, C1E peuvent être requis.", &rules);
        assert!(result.type_flags.is_set("certification"));
        assert!(result.importance_flags.is_set("sometimes"));
        assert!(!result.importance_flags.is_set("required"));
        assert_eq!(result.level.as_deref(), Some("Les permis"));
        assert_eq!(result.subject.as_deref(), Some("C, C1, CE, C1E"));
        assert_eq!(result.last_rule_applied.as_deref(), Some("certification1"));
    }

    #[test]
    fn test_experience_sentence() {
        let rules = builtin();
        let result = apply_rules(
            "Une expérience de 2 ans dans la restauration est exigée.",
            &rules,
        );
        assert!(result.type_flags.is_set("experience"));
        assert!(result.importance_flags.is_set("required"));
        assert_eq!(result.level.as_deref(), Some("2 ans"));
        assert_eq!(result.subject.as_deref(), Some("la restauration"));
        assert_eq!(result.last_rule_applied.as_deref(), Some("experience1"));
    }

    #[test]
    fn test_skill_sentence() {
        let rules = builtin();
        let result = apply_rules("La maîtrise de l'anglais est appréciée.", &rules);
        assert!(result.type_flags.is_set("skill"));
        assert!(result.importance_flags.is_set("bonus"));
        assert_eq!(result.subject.as_deref(), Some("anglais"));
        assert_eq!(result.last_rule_applied.as_deref(), Some("skill1"));
    }

    #[test]
    fn test_negative_lookbehind_blocks_flag() {
        let rules = builtin();
        let result = apply_rules("Accessible sans diplôme.", &rules);
        assert!(!result.type_flags.is_set("degree"));
    }

    #[test]
    fn test_empty_and_blank_sentences() {
        let rules = builtin();
        for sentence in ["", "   \t\n"] {
            let result = apply_rules(sentence, &rules);
            assert_eq!(result, rules.empty_result());
            assert!(!result.has_type());
            assert!(!result.has_importance());
            assert!(result.level.is_none());
            assert!(result.subject.is_none());
            assert!(result.last_rule_applied.is_none());
        }
    }

    #[test]
    fn test_flag_sets_carry_every_catalog_name() {
        let rules = builtin();
        let catalog = RuleCatalog::builtin();
        let result = apply_rules("Rien à signaler.", &rules);
        assert_eq!(
            result.type_flags.names().collect::<Vec<_>>(),
            catalog.names(RuleCategory::Type)
        );
        assert_eq!(
            result.importance_flags.names().collect::<Vec<_>>(),
            catalog.names(RuleCategory::Importance)
        );
    }

    #[test]
    fn test_apply_is_deterministic() {
        let rules = builtin();
        let sentence = "Les permis C, C1, CE, C1E peuvent être requis.";
        assert_eq!(apply_rules(sentence, &rules), apply_rules(sentence, &rules));
        assert_eq!(rules.apply(sentence), apply_rules(sentence, &rules));
    }

    #[test]
    fn test_equal_priority_later_declaration_wins() {
        let catalog = RuleCatalog::new("test")
            .with_rule(RuleCategory::Type, "degree", r"\bbac\b", 0)
            .with_rule(RuleCategory::Importance, "required", r"\brequis\b", 0)
            .with_rule(RuleCategory::Content, "first", r"(bac)\s+(\w+)", 5)
            .with_rule(RuleCategory::Content, "second", r"(bac\s+\w+)\s+(\w+)", 5);
        let rules = RuleCompiler::compile(&catalog).unwrap();
        let result = apply_rules("bac pro commerce", &rules);
        assert_eq!(result.last_rule_applied.as_deref(), Some("second"));
        assert_eq!(result.level.as_deref(), Some("Bac pro"));
        assert_eq!(result.subject.as_deref(), Some("commerce"));
    }

    #[test]
    fn test_base_rule_applies_without_authored_match() {
        let catalog = RuleCatalog::new("test")
            .with_rule(RuleCategory::Type, "degree", r"\bbac\b", 0)
            .with_rule(RuleCategory::Importance, "required", r"\brequis\b", 0);
        let rules = RuleCompiler::compile(&catalog).unwrap();
        let result = apply_rules("bac dans le commerce requis", &rules);
        assert_eq!(result.last_rule_applied.as_deref(), Some(BASE_RULE_NAME));
        assert_eq!(result.level.as_deref(), Some("Bac"));
        assert_eq!(result.subject.as_deref(), Some("commerce"));
    }

    #[test]
    fn test_last_rule_names_a_compiled_content_rule() {
        let rules = builtin();
        let sentences = [
            "Cet emploi est accessible avec un CAP/BEP dans le secteur agricole.",
            "Les permis C, C1, CE, C1E peuvent être requis.",
            "Un diplôme de niveau bac+2 en comptabilité est exigé.",
            "La connaissance des logiciels de bureautique est un plus.",
        ];
        for sentence in sentences {
            let result = apply_rules(sentence, &rules);
            if let Some(name) = result.last_rule_applied.as_deref() {
                assert!(rules.content_rule(name).is_some(), "unknown rule {}", name);
            }
        }
    }
}
