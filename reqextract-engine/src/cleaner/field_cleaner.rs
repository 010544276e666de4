//! level / subject 字段清洗
//! 只移除边界上的冠词与标点，三个步骤都是幂等的
use once_cell::sync::Lazy;
use regex::Regex;

// 句首小写冠词（大小写敏感："Les permis" 属于原文，保留）
static LEVEL_ARTICLE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:(?:les|le|la|une|un|des|du)\s+|l['’])+").unwrap()
});

// 句首省略冠词：de l' / d' / l'
static SUBJECT_ELISION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:(?:de\s+)?l['’]|d['’])+").unwrap()
});

static SUBJECT_TRAILING_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s,.]+$").unwrap());

/// 字段清洗器
#[derive(Debug, Default)]
pub struct FieldCleaner;

impl FieldCleaner {
    /// level 清洗：
    /// 1. 去掉句首小写冠词（连续冠词一次去净）
    /// 2. 第二个字符为小写时，首字母大写
    pub fn clean_level(level: &str) -> String {
        let stripped = LEVEL_ARTICLE_REGEX.replace(level, "");
        capitalize_if_second_lower(&stripped)
    }

    /// subject 清洗：去掉句首省略冠词，再去掉末尾空白/逗号/句号
    pub fn clean_subject(subject: &str) -> String {
        let stripped = SUBJECT_ELISION_REGEX.replace(subject, "");
        SUBJECT_TRAILING_REGEX.replace(&stripped, "").into_owned()
    }

    /// 字段存在时才清洗
    #[inline]
    pub fn clean_fields(
        level: Option<&str>,
        subject: Option<&str>,
    ) -> (Option<String>, Option<String>) {
        (
            level.map(Self::clean_level),
            subject.map(Self::clean_subject),
        )
    }
}

/// 长度不足2个字符时原样返回
fn capitalize_if_second_lower(s: &str) -> String {
    let mut chars = s.chars();
    let (Some(first), Some(second)) = (chars.next(), chars.next()) else {
        return s.to_string();
    };
    if !second.is_lowercase() {
        return s.to_string();
    }
    let mut out = String::with_capacity(s.len() + 2);
    out.extend(first.to_uppercase());
    out.push_str(&s[first.len_utf8()..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_strips_lowercase_articles() {
        assert_eq!(FieldCleaner::clean_level("un CAP/BEP"), "CAP/BEP");
        assert_eq!(FieldCleaner::clean_level("le le bac pro"), "Bac pro");
        assert_eq!(FieldCleaner::clean_level("l’anglais"), "Anglais");
        assert_eq!(FieldCleaner::clean_level("des connaissances"), "Connaissances");
    }

    #[test]
    fn test_level_keeps_capitalised_article() {
        assert_eq!(FieldCleaner::clean_level("Les permis"), "Les permis");
    }

    #[test]
    fn test_level_capitalisation_boundaries() {
        assert_eq!(FieldCleaner::clean_level(""), "");
        assert_eq!(FieldCleaner::clean_level("b"), "b");
        assert_eq!(FieldCleaner::clean_level("bt"), "Bt");
        assert_eq!(FieldCleaner::clean_level("bT"), "bT");
        assert_eq!(FieldCleaner::clean_level("éb"), "Éb");
        assert_eq!(FieldCleaner::clean_level("BTS"), "BTS");
    }

    #[test]
    fn test_subject_cleanup() {
        assert_eq!(
            FieldCleaner::clean_subject("le secteur agricole."),
            "le secteur agricole"
        );
        assert_eq!(FieldCleaner::clean_subject("de l'hôtellerie, ."), "hôtellerie");
        assert_eq!(FieldCleaner::clean_subject("D’informatique"), "informatique");
        assert_eq!(FieldCleaner::clean_subject("l'anglais"), "anglais");
        assert_eq!(FieldCleaner::clean_subject("C, C1, CE, C1E"), "C, C1, CE, C1E");
        assert_eq!(FieldCleaner::clean_subject(" ."), "");
    }

    #[test]
    fn test_cleanup_is_idempotent() {
        let levels = ["un CAP/BEP", "Les permis", "le le bac", "l'anglais", "x", "", "ßa"];
        for level in levels {
            let once = FieldCleaner::clean_level(level);
            assert_eq!(FieldCleaner::clean_level(&once), once, "level {:?}", level);
        }
        let subjects = ["de l'hôtellerie, .", "d'd'x.", "le secteur agricole.", "l'.", ""];
        for subject in subjects {
            let once = FieldCleaner::clean_subject(subject);
            assert_eq!(FieldCleaner::clean_subject(&once), once, "subject {:?}", subject);
        }
    }

    #[test]
    fn test_absent_fields_stay_absent() {
        assert_eq!(FieldCleaner::clean_fields(None, None), (None, None));
        assert_eq!(
            FieldCleaner::clean_fields(Some("un BTS"), None),
            (Some("BTS".to_string()), None)
        );
    }
}
