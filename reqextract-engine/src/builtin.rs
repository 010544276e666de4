//! 内置规则目录
//! 面向法语职位准入要求句子（"Cet emploi/métier est accessible avec ..."）
//!
//! 约定：
//! - 所有模式编译时统一忽略大小写
//! - type/importance 规则会被折叠进伞形模式，普通捕获组会被改写为非捕获组，环视保持原样
//! - 内容规则必须恰好两个捕获组：1 = level，2 = subject
//! - 内容规则按 priority 升序评估，后命中覆盖先命中（通用规则在前，专用规则在后）
use crate::core::RuleCategory::{Content, Importance, Type};
use crate::core::RuleSpec;

/// 目录版本号，规则有任何改动都需要递增
pub const CATALOG_VERSION: &str = "1.3.0";

pub static BUILTIN_RULES: &[RuleSpec] = &[
    // ===================== 类型规则 =====================
    RuleSpec::new(
        Type,
        "degree",
        r"\b(?:(?<!sans )(?<!ni )dipl[ôo]mes?(?:\s+d['’][ée]tat)?|(?<!sans )(?<!ni )titres?\s+professionnels?|CAP|BEP|CQP|BP|BTSA?|DUT|BUT|DEUST|bac(?:calaur[ée]at)?(?:\s*\+\s*\d+|\s+pro(?:fessionnel)?)?|licences?(?:\s+pro(?:fessionnelle)?)?|masters?|doctorat|formations?\s+(?:initiale|qualifiante|dipl[ôo]mante|sup[ée]rieure)s?)\b(?:\s+(?:sp[ée]cialis[ée]e?s?|sup[ée]rieure?s?|techniques?|g[ée]n[ée]rale?s?|professionnel(?:le)?s?))?",
        0,
    ),
    RuleSpec::new(
        Type,
        "certification",
        r"\b(?:permis(?:\s+de\s+conduire)?|habilitations?|certifications?|certificats?|cartes?\s+professionnelles?|agr[ée]ments?|attestations?|CACES|brevets?\s+(?:de\s+)?(?:secourisme|s[ée]curit[ée]|pilote))\b(?:\s+(?:[ée]lectriques?|sp[ée]cifiques?|r[ée]glementaires?))?",
        0,
    ),
    RuleSpec::new(
        Type,
        "experience",
        r"\b(?:(?<!sans )(?<!ni )exp[ée]riences?|pratiques?\s+professionnelles?|stages?|ann[ée]es?\s+d['’](?:exp[ée]rience|activit[ée]|exercice)|anciennet[ée])\b(?:\s+(?:professionnelles?|significatives?|confirm[ée]es?|pr[ée]alables?|r[ée]ussies?))?",
        0,
    ),
    RuleSpec::new(
        Type,
        "skill",
        r"\b(?:comp[ée]tences?|connaissances?|ma[îi]trise|savoir-faire|savoir-[êe]tre|aptitudes?(?!\s+m[ée]dicales?)|capacit[ée]s?|langues?\s+[ée]trang[èe]res?|anglais|informatique|bureautique)\b(?:\s+(?:techniques?|approfondies?|solides?|linguistiques?|de\s+base))?",
        0,
    ),
    RuleSpec::new(
        Type,
        "other",
        r"\b(?:aptitudes?\s+m[ée]dicales?|visites?\s+m[ée]dicales?|casier\s+judiciaire|vaccinations?|condition\s+physique|mobilit[ée]|d[ée]placements?|horaires?\s+d[ée]cal[ée]s?|travail\s+de\s+nuit|port\s+de\s+charges?)\b",
        0,
    ),
    // ===================== 重要程度规则 =====================
    RuleSpec::new(
        Importance,
        "required",
        r"\b(?:accessibles?\s+(?:avec|par|aux?|apr[èe]s|à\s+partir\s+d['’eu])|(?<!peut [êe]tre )(?<!peuvent [êe]tre )(?:requise?s?|exig[ée]e?s?|demand[ée]e?s?|obligatoires?|indispensables?|n[ée]cessaires?|imp[ée]rati(?:f|fs|ve|ves)))\b",
        0,
    ),
    RuleSpec::new(
        Importance,
        "alternative",
        r"\b(?:(?:[ée]galement|aussi)\s+accessibles?|à\s+d[ée]faut|ou\s+bien|ou\s+encore|ou\s+[ée]quivalents?|[ée]quivalences?|par\s+(?:la\s+)?VAE|validation\s+des\s+acquis)\b",
        0,
    ),
    RuleSpec::new(
        Importance,
        "sometimes",
        r"\b(?:peu(?:t|vent)\s+(?:[êe]tre\s+)?(?:requise?s?|exig[ée]e?s?|demand[ée]e?s?|n[ée]cessaires?|obligatoires?|impos[ée]e?s?)|parfois|dans\s+certains\s+cas|le\s+cas\s+[ée]ch[ée]ant|selon\s+(?:les|le|la|l['’])\s*\w+|en\s+fonction\s+d[eu])\b",
        0,
    ),
    RuleSpec::new(
        Importance,
        "bonus",
        r"\b(?:atouts?|un\s+plus|appr[ée]ci[ée]e?s?|souhait[ée]e?s?|souhaitables?|valoris[ée]e?s?|valorisante?s?|recommand[ée]e?s?|pr[ée]f[ée]rables?|de\s+pr[ée]f[ée]rence|facultati(?:f|fs|ve|ves))\b",
        0,
    ),
    // ===================== 内容规则 =====================
    // base_rule 由 compiler::composite 派生，priority 0，恒在最前
    RuleSpec::new(
        Content,
        "degree1",
        r"accessibles?\s+(?:avec|par|apr[èe]s|à\s+partir\s+d['’])\s*(.+?)\s+(?:en|dans)\s+(.+)",
        10,
    ),
    RuleSpec::new(
        Content,
        "degree2",
        r"\bdipl[ôo]mes?\s+(?:de\s+)?niveau\s+(.+?)\s+(?:en|dans)\s+(.+?)(?:\s+(?:est|sont|peu(?:t|vent)|reste|restent)\b|[.;]|$)",
        20,
    ),
    RuleSpec::new(
        Content,
        "certification1",
        r"\b((?:(?:les|le|la|une|un|des)\s+|l['’])?(?:permis|habilitations?|certifications?|certificats?|cartes?\s+professionnelles?|CACES))\s+(.+?)\s+(?:peu(?:t|vent)\s+[êe]tre|est|sont|reste|restent)\s+(?:requise?s?|exig[ée]e?s?|demand[ée]e?s?|obligatoires?|indispensables?|n[ée]cessaires?)",
        30,
    ),
    RuleSpec::new(
        Content,
        "experience1",
        r"\bexp[ée]riences?(?:\s+professionnelles?)?\s+(?:de|d['’])\s*((?:\d+|un|une|deux|trois|quatre|cinq|six|plusieurs|quelques)\s+(?:ans?|ann[ée]es?|mois))(?:\s+minimum)?\s+(?:en|dans|sur|au\s+sein\s+(?:des|du|de|d['’]))\s*(.+?)(?:\s+(?:est|sont|peu(?:t|vent)|reste|restent)\b|[.;]|$)",
        40,
    ),
    RuleSpec::new(
        Content,
        "skill1",
        r"\b((?:(?:la|une|de\s+bonnes|des|les)\s+)?(?:ma[îi]trise|connaissances?|pratique))\s+(?:(?:des|du|de|en)\s+|d['’])(.+?)(?:\s+(?:est|sont|peu(?:t|vent)|serait|seraient|reste|restent)\b|[.;]|$)",
        50,
    ),
];
