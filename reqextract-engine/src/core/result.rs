//! 抽取结果结构与工具函数

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::sync::Arc;

/// 有序布尔标记集合（规则名 → 是否命中）
/// 键集合恒等于目录中该类别的全部规则名，顺序与目录声明一致
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FlagSet {
    entries: Vec<(Arc<str>, bool)>,
}

impl FlagSet {
    /// 以全部为false初始化
    pub fn all_false(names: &[Arc<str>]) -> Self {
        Self {
            entries: names.iter().map(|n| (n.clone(), false)).collect(),
        }
    }

    pub(crate) fn from_entries(entries: Vec<(Arc<str>, bool)>) -> Self {
        Self { entries }
    }

    /// 查询单个标记，未知名称返回None
    pub fn get(&self, name: &str) -> Option<bool> {
        self.entries
            .iter()
            .find(|(n, _)| n.as_ref() == name)
            .map(|(_, v)| *v)
    }

    /// 未知名称视为false
    #[inline]
    pub fn is_set(&self, name: &str) -> bool {
        self.get(name).unwrap_or(false)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.entries.iter().map(|(n, v)| (n.as_ref(), *v))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_ref())
    }

    /// 命中的标记数量
    pub fn count_true(&self) -> usize {
        self.entries.iter().filter(|(_, v)| *v).count()
    }

    /// 至少一个标记命中
    #[inline]
    pub fn any(&self) -> bool {
        self.entries.iter().any(|(_, v)| *v)
    }

    /// 超过一个标记同时命中（碰撞）
    #[inline]
    pub fn has_collision(&self) -> bool {
        self.count_true() > 1
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for FlagSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name.as_ref(), value)?;
        }
        map.end()
    }
}

/// 单句抽取结果
/// 每句新建，产出后不可变，不同句子之间不合并
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize)]
pub struct ExtractionResult {
    pub type_flags: FlagSet,
    pub importance_flags: FlagSet,
    pub level: Option<String>,
    pub subject: Option<String>,
    /// 产出最终 level/subject 的内容规则名
    pub last_rule_applied: Option<String>,
}

impl ExtractionResult {
    /// 全部字段为空的结果（空句/无命中）
    pub fn empty(type_names: &[Arc<str>], importance_names: &[Arc<str>]) -> Self {
        Self {
            type_flags: FlagSet::all_false(type_names),
            importance_flags: FlagSet::all_false(importance_names),
            level: None,
            subject: None,
            last_rule_applied: None,
        }
    }

    #[inline]
    pub fn has_type(&self) -> bool {
        self.type_flags.any()
    }

    #[inline]
    pub fn has_importance(&self) -> bool {
        self.importance_flags.any()
    }

    #[inline]
    pub fn has_level(&self) -> bool {
        self.level.is_some()
    }
}

impl std::fmt::Display for ExtractionResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let join = |flags: &FlagSet| {
            flags
                .iter()
                .filter(|(_, v)| *v)
                .map(|(n, _)| n)
                .collect::<Vec<_>>()
                .join(",")
        };
        write!(
            f,
            "type=[{}] importance=[{}] level={:?} subject={:?} rule={:?}",
            join(&self.type_flags),
            join(&self.importance_flags),
            self.level,
            self.subject,
            self.last_rule_applied
        )
    }
}
