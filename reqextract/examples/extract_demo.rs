//! Requirement extraction demonstration for reqextract
//! reqextract 内置规则抽取演示程序
//! 功能说明：
//! 1. 使用内置规则目录初始化抽取器
//! 2. 对示例句子批量抽取并输出结构化JSON
//! 3. 输出批次质量统计
//!
//! 运行命令：
//! cargo run --example extract_demo

use env_logger::{Builder, Env, Target};
use reqextract::{RequirementExtractor, RuleConfig};
use serde_json::to_string_pretty;
use std::{error::Error, time::Instant};

// 示例句子
const SENTENCES: &[&str] = &[
    "Cet emploi/métier est accessible avec un CAP/BEP dans le secteur agricole.",
    "Les permis C, C1, CE, C1E peuvent être requis.",
    "Un diplôme de niveau bac+2 en comptabilité est exigé.",
    "Une expérience de 2 ans dans la restauration est exigée.",
    "La maîtrise de l'anglais est appréciée.",
    "Accessible sans diplôme ni expérience.",
    "",
];

fn main() -> Result<(), Box<dyn Error>> {
    // ========== 1. 日志系统初始化 ==========
    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Stdout)
        .init();

    // ========== 2. 初始化抽取器 ==========
    let extractor = RequirementExtractor::new(RuleConfig::embedded())?;

    // ========== 3. 批量抽取 ==========
    let start_instant = Instant::now();
    let results = extractor.extract_batch(SENTENCES);
    let duration_ms = start_instant.elapsed().as_secs_f64() * 1000.0;

    // ========== 4. 输出结果 ==========
    println!("\n=============================== 抽取结果 ===============================");
    println!("✅ {} 句抽取完成 | 总耗时: {:.3} 毫秒", SENTENCES.len(), duration_ms);
    println!("========================================================================");
    for (sentence, result) in SENTENCES.iter().zip(&results) {
        println!("\n📝 {:?}\n   {}", sentence, result);
    }

    println!("\n📊 第一条结果（结构化JSON）:\n{}", to_string_pretty(&results[0])?);

    let report = extractor.report(&results);
    println!("\n📈 质量统计:\n{}", report);

    Ok(())
}
