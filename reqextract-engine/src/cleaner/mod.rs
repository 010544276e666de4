// level / subject 清洗
pub mod field_cleaner;

pub use field_cleaner::FieldCleaner;
