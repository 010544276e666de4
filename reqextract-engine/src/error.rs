//! reqextract-engine 内核错误定义
//! 封装规则目录/编译阶段的所有错误，逐句抽取阶段不产生错误
use thiserror::Error;

use regex::Error as RegexError;
use serde_json::Error as SerdeJsonError;

use crate::core::RuleCategory;

/// 内核核心错误枚举
/// 只在规则目录加载与编译（启动期）出现，一旦出现整个规则集不可用
#[derive(Error, Debug)]
pub enum CoreError {
    // ===================== 规则目录错误 =====================
    /// 同一类别下规则名重复
    #[error("Duplicate rule name in category {category}: {name}")]
    DuplicateRule { category: RuleCategory, name: String },

    /// 手写规则占用了派生规则的保留名
    #[error("Rule name is reserved for the derived composite rule: {0}")]
    ReservedRuleName(String),

    /// 类别下没有任何规则，无法构建伞形模式
    #[error("Rule category has no rules: {0}")]
    EmptyCategory(RuleCategory),

    /// 规则目录JSON解析失败
    #[error("Rule catalog parse failed: {0}")]
    CatalogParseError(#[from] SerdeJsonError),

    // ===================== 编译相关错误 =====================
    /// 正则表达式编译失败（regex引擎）
    #[error("Regex compilation failed: {0}")]
    RegexCompileError(#[from] RegexError),

    /// 含环视的模式在回溯引擎上编译失败
    #[error("Backtracking regex compilation failed for rule {rule}: {message}")]
    BacktrackingCompileError { rule: String, message: String },

    /// 内容规则的捕获组数量不等于2
    #[error("Content rule {rule} must define exactly 2 capture groups, found {found}")]
    InvalidCaptureGroups { rule: String, found: usize },

    // ===================== 内核基础错误 =====================
    /// 无效输入参数
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// 内核层全局Result类型别名
pub type CoreResult<T> = Result<T, CoreError>;
