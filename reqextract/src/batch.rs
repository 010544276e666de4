//! 批量抽取
//! 输入顺序即输出顺序：不重排、不过滤、不去重

use reqextract_engine::{CompiledRuleSet, ExtractionResult};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// 对句子切片执行抽取，结果与输入按下标一一对应
/// parallel=true 且开启 parallel 特性时在 rayon 线程池上执行
pub fn run_batch<S>(rules: &CompiledRuleSet, sentences: &[S], parallel: bool) -> Vec<ExtractionResult>
where
    S: AsRef<str> + Sync,
{
    log::debug!(
        "Batch extraction started | sentences: {} | parallel: {}",
        sentences.len(),
        parallel
    );

    if parallel {
        return run_parallel(rules, sentences);
    }
    run_iter(rules, sentences).collect()
}

#[cfg(feature = "parallel")]
fn run_parallel<S>(rules: &CompiledRuleSet, sentences: &[S]) -> Vec<ExtractionResult>
where
    S: AsRef<str> + Sync,
{
    // 索引化并行迭代器的 collect 保持输入顺序
    sentences
        .par_iter()
        .map(|s| rules.apply(s.as_ref()))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn run_parallel<S>(rules: &CompiledRuleSet, sentences: &[S]) -> Vec<ExtractionResult>
where
    S: AsRef<str> + Sync,
{
    log::warn!("parallel feature is disabled, running batch sequentially");
    run_iter(rules, sentences).collect()
}

/// 惰性顺序抽取，适用于任意句子迭代器
pub fn run_iter<'r, I>(
    rules: &'r CompiledRuleSet,
    sentences: I,
) -> impl Iterator<Item = ExtractionResult> + 'r
where
    I: IntoIterator + 'r,
    I::Item: AsRef<str>,
    I::IntoIter: 'r,
{
    sentences.into_iter().map(move |s| rules.apply(s.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentences() -> Vec<&'static str> {
        vec![
            "Les permis C, C1, CE, C1E peuvent être requis.",
            "",
            "Cet emploi/métier est accessible avec un CAP/BEP dans le secteur agricole.",
            "Les permis C, C1, CE, C1E peuvent être requis.",
        ]
    }

    #[test]
    fn test_batch_is_index_aligned() {
        let rules = CompiledRuleSet::builtin().unwrap();
        let input = sentences();
        let results = run_batch(&rules, &input, false);
        assert_eq!(results.len(), input.len());
        for (sentence, result) in input.iter().zip(&results) {
            assert_eq!(result, &rules.apply(sentence));
        }
        // 重复句子不去重
        assert_eq!(results[0], results[3]);
        assert!(results[1].last_rule_applied.is_none());
    }

    #[test]
    fn test_parallel_flag_keeps_order() {
        let rules = CompiledRuleSet::builtin().unwrap();
        let input = sentences();
        assert_eq!(run_batch(&rules, &input, true), run_batch(&rules, &input, false));
    }

    #[test]
    fn test_run_iter_over_owned_strings() {
        let rules = CompiledRuleSet::builtin().unwrap();
        let owned: Vec<String> = sentences().into_iter().map(String::from).collect();
        let results: Vec<_> = run_iter(&rules, owned.iter()).collect();
        assert_eq!(results, run_batch(&rules, &owned, false));
    }

    #[test]
    fn test_empty_batch() {
        let rules = CompiledRuleSet::builtin().unwrap();
        let input: Vec<&str> = Vec::new();
        assert!(run_batch(&rules, &input, false).is_empty());
    }
}
