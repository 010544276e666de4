//! 抽取质量统计
pub mod quality;

pub use quality::{NamedCount, QualityReport};
