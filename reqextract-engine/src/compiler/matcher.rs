use regex::RegexBuilder;
use std::sync::Arc;

use super::group_scan;
use crate::error::{CoreError, CoreResult};
use crate::utils::preview_compact;

/// 运行时匹配器
/// 核心特性：
/// 1. 启动期一次性编译，运行期只读共享（Arc）
/// 2. 无环视的模式走 regex 线性引擎
/// 3. 含环视/反向引用的模式走 fancy-regex 回溯引擎（regex 不支持环视）
/// 4. 统一忽略大小写
#[derive(Debug, Clone)]
pub enum Matcher {
    /// 线性时间引擎
    Linear(Arc<regex::Regex>),
    /// 回溯引擎
    Backtracking(Arc<fancy_regex::Regex>),
}

impl Matcher {
    /// 编译模式（忽略大小写），语法错误在此处返回，不会延迟到匹配期
    /// 参数：
    /// - rule: 规则名（仅用于错误信息与日志）
    /// - pattern: 正则模式字符串
    pub fn compile(rule: &str, pattern: &str) -> CoreResult<Self> {
        let scan = group_scan::scan(pattern);

        if scan.requires_backtracking() {
            let re = fancy_regex::Regex::new(&format!("(?i){}", pattern)).map_err(|e| {
                CoreError::BacktrackingCompileError {
                    rule: rule.to_string(),
                    message: e.to_string(),
                }
            })?;
            log::trace!("Rule {} compiled on backtracking engine", rule);
            return Ok(Matcher::Backtracking(Arc::new(re)));
        }

        let re = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|e| {
                log::error!("Regex compilation failed: rule={} error={}", rule, e);
                CoreError::from(e)
            })?;
        log::trace!("Rule {} compiled on linear engine", rule);
        Ok(Matcher::Linear(Arc::new(re)))
    }

    /// 搜索语义匹配（任意位置命中即为true）
    /// 回溯引擎超出回溯上限时记录告警并视为未命中
    #[inline]
    pub fn is_match(&self, input: &str) -> bool {
        match self {
            Matcher::Linear(re) => re.is_match(input),
            Matcher::Backtracking(re) => re.is_match(input).unwrap_or_else(|e| {
                log::warn!(
                    "Backtracking match aborted, treated as no match | Input preview: {} | Error: {}",
                    preview_compact(input, 80),
                    e
                );
                false
            }),
        }
    }

    /// 获取第1、2捕获组（内容规则专用）
    /// 返回：None 表示未命中；Some 内部的 None 表示对应分组未参与匹配
    pub fn capture_pair<'t>(&self, input: &'t str) -> Option<(Option<&'t str>, Option<&'t str>)> {
        match self {
            Matcher::Linear(re) => re
                .captures(input)
                .map(|caps| (caps.get(1).map(|m| m.as_str()), caps.get(2).map(|m| m.as_str()))),
            Matcher::Backtracking(re) => match re.captures(input) {
                Ok(caps) => caps
                    .map(|caps| (caps.get(1).map(|m| m.as_str()), caps.get(2).map(|m| m.as_str()))),
                Err(e) => {
                    log::warn!(
                        "Backtracking capture aborted, treated as no match | Input preview: {} | Error: {}",
                        preview_compact(input, 80),
                        e
                    );
                    None
                }
            },
        }
    }

    /// 捕获组数量（含第0组）
    pub fn captures_len(&self) -> usize {
        match self {
            Matcher::Linear(re) => re.captures_len(),
            Matcher::Backtracking(re) => re.captures_len(),
        }
    }

    #[inline]
    pub fn is_backtracking(&self) -> bool {
        matches!(self, Matcher::Backtracking(_))
    }

    /// 描述匹配器（用于日志/调试输出）
    pub fn describe(&self) -> String {
        match self {
            Matcher::Linear(re) => format!("linear: {}", preview_compact(re.as_str(), 60)),
            Matcher::Backtracking(re) => {
                format!("backtracking: {}", preview_compact(re.as_str(), 60))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_selection() {
        assert!(!Matcher::compile("plain", r"\bpermis\b").unwrap().is_backtracking());
        assert!(Matcher::compile("lookbehind", r"(?<!sans )diplôme")
            .unwrap()
            .is_backtracking());
    }

    #[test]
    fn test_case_insensitive_on_both_engines() {
        let linear = Matcher::compile("plain", r"\bpermis\b").unwrap();
        assert!(linear.is_match("Le PERMIS B est exigé."));

        let backtracking = Matcher::compile("lookbehind", r"(?<!sans )\bdiplôme\b").unwrap();
        assert!(backtracking.is_match("Un DIPLÔME est exigé."));
        assert!(!backtracking.is_match("Accessible SANS diplôme."));
    }

    #[test]
    fn test_capture_pair() {
        let m = Matcher::compile("c", r"avec (.+?) dans (.+)").unwrap();
        assert_eq!(
            m.capture_pair("accessible avec un CAP dans le bâtiment"),
            Some((Some("un CAP"), Some("le bâtiment")))
        );
        assert_eq!(m.capture_pair("rien"), None);
        assert_eq!(m.captures_len(), 3);
    }

    #[test]
    fn test_malformed_patterns_fail_at_compile_time() {
        assert!(matches!(
            Matcher::compile("broken", r"(unclosed"),
            Err(CoreError::RegexCompileError(_))
        ));
        assert!(matches!(
            Matcher::compile("broken_lookbehind", r"(?<!sans (unclosed"),
            Err(CoreError::BacktrackingCompileError { .. })
        ));
    }
}
