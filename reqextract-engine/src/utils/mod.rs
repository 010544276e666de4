// 日志预览格式化
pub mod preview;

pub use preview::preview_compact;
