//! 全局错误类型定义
use thiserror::Error;
use reqextract_engine::CoreError;
use serde_json::Error as SerdeJsonError;
use std::io::Error as IoError;

#[derive(Error, Debug)]
pub enum ReqExtractError {
    // 规则相关错误
    #[error("规则加载失败：{0}")]
    RuleLoadError(String),
    #[error("规则编译失败：{0}")]
    RuleCompileError(#[from] CoreError),

    // 抽取器相关错误
    #[error("抽取器未初始化: {0}")]
    ExtractorNotInitialized(String),
    #[error("抽取器初始化失败: {0}")]
    ExtractorInitError(String),

    // 序列化/反序列化错误
    #[error("JSON解析失败：{0}")]
    JsonError(#[from] SerdeJsonError),

    // 基础错误
    #[error("IO操作失败：{0}")]
    IoError(#[from] IoError),
    #[error("无效输入：{0}")]
    InvalidInput(String),
}

// 全局Result类型
pub type ReqResult<T> = Result<T, ReqExtractError>;
