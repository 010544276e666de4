//! 记录适配：输入记录解析 + 输出列追加
//! 每条记录只读取句子字段，其余字段原样保留

use reqextract_engine::ExtractionResult;
use serde_json::{Map, Value};

use crate::config::DEFAULT_INPUT_FIELD;
use crate::error::{ReqExtractError, ReqResult};

/// 单条记录（JSON对象）
pub type Record = Map<String, Value>;

/// 输出列名
pub const LEVEL_COLUMN: &str = "level";
pub const SUBJECT_COLUMN: &str = "subject";
pub const LAST_RULE_COLUMN: &str = "last_rule_applied";

/// 读取记录中的句子字段
/// 字段缺失或不是字符串时视为空句（记录debug日志，不报错）
pub fn sentence_of<'r>(record: &'r Record, field: &str) -> &'r str {
    match record.get(field) {
        Some(Value::String(s)) => s.as_str(),
        Some(other) => {
            log::debug!("Field {} is not a string ({}), treated as empty", field, other);
            ""
        }
        None => {
            log::debug!("Field {} is missing, treated as empty", field);
            ""
        }
    }
}

/// 在记录上追加输出列：每个类型标记一列、每个重要程度标记一列、level、subject、last_rule_applied
/// 同名列会被覆盖
pub fn annotate(mut record: Record, result: &ExtractionResult) -> Record {
    for (name, set) in result.type_flags.iter().chain(result.importance_flags.iter()) {
        record.insert(name.to_string(), Value::Bool(set));
    }
    record.insert(LEVEL_COLUMN.to_string(), optional_string(&result.level));
    record.insert(SUBJECT_COLUMN.to_string(), optional_string(&result.subject));
    record.insert(
        LAST_RULE_COLUMN.to_string(),
        optional_string(&result.last_rule_applied),
    );
    record
}

fn optional_string(value: &Option<String>) -> Value {
    value.clone().map(Value::String).unwrap_or(Value::Null)
}

/// 解析JSON数组形式的记录列表
pub fn parse_json_records(json: &str) -> ReqResult<Vec<Record>> {
    let value: Value = serde_json::from_str(json)?;
    let Value::Array(items) = value else {
        return Err(ReqExtractError::InvalidInput(
            "输入必须是JSON对象数组".to_string(),
        ));
    };

    items
        .into_iter()
        .enumerate()
        .map(|(idx, item)| match item {
            Value::Object(map) => Ok(map),
            other => Err(ReqExtractError::InvalidInput(format!(
                "第{}条记录不是JSON对象: {}",
                idx, other
            ))),
        })
        .collect()
}

/// 纯文本输入：每行一句，包装为 {field: line}
/// 空行保留（对应空句），行尾 \r 去掉
pub fn parse_lines(text: &str, field: &str) -> Vec<Record> {
    text.lines()
        .map(|line| {
            let mut record = Record::new();
            record.insert(
                field.to_string(),
                Value::String(line.trim_end_matches('\r').to_string()),
            );
            record
        })
        .collect()
}

/// 使用默认字段名包装句子
pub fn record_from_sentence(sentence: &str) -> Record {
    let mut record = Record::new();
    record.insert(
        DEFAULT_INPUT_FIELD.to_string(),
        Value::String(sentence.to_string()),
    );
    record
}
