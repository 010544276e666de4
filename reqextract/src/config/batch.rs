/// 输入记录中默认读取的句子字段
pub const DEFAULT_INPUT_FIELD: &str = "requirements";

/// 批处理选项
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOptions {
    /// 是否使用 rayon 线程池并行（需开启 parallel 特性，未开启时退化为顺序执行）
    pub parallel: bool,
    /// 记录中存放句子的字段名
    pub input_field: String,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            parallel: false,
            input_field: DEFAULT_INPUT_FIELD.to_string(),
        }
    }
}
