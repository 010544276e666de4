//! 正则分组结构扫描
//! 只识别分组起点，不做完整语法解析（语法错误由正则引擎在编译期报告）
//! 转义、字符集内部的括号都不会被当作分组

/// 分组类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKind {
    /// `(...)`
    Capturing,
    /// `(?P<name>...)` / `(?<name>...)`
    Named,
    /// `(?:...)`
    NonCapturing,
    /// `(?i)` / `(?i:...)` 等内联标志
    Flags,
    /// `(?=...)`
    LookAhead,
    /// `(?!...)`
    NegativeLookAhead,
    /// `(?<=...)`
    LookBehind,
    /// `(?<!...)`
    NegativeLookBehind,
    /// `(?>...)`
    Atomic,
}

impl GroupKind {
    /// 是否产生捕获组
    #[inline]
    pub fn is_capturing(&self) -> bool {
        matches!(self, GroupKind::Capturing | GroupKind::Named)
    }

    /// 是否为环视断言
    #[inline]
    pub fn is_lookaround(&self) -> bool {
        matches!(
            self,
            GroupKind::LookAhead
                | GroupKind::NegativeLookAhead
                | GroupKind::LookBehind
                | GroupKind::NegativeLookBehind
        )
    }
}

/// 单个分组起点
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupOpen {
    /// '(' 的字节偏移
    pub offset: usize,
    /// 分组头字节长度，"(" 为 1，"(?<!" 为 4，"(?P<year>" 为 9
    pub header_len: usize,
    pub kind: GroupKind,
}

/// 模式扫描结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternScan {
    pub groups: Vec<GroupOpen>,
    /// 是否包含反向引用（\1..\9, \k<name>）
    pub has_backref: bool,
}

impl PatternScan {
    /// 捕获组数量（不含第0组）
    pub fn capture_count(&self) -> usize {
        self.groups.iter().filter(|g| g.kind.is_capturing()).count()
    }

    pub fn has_lookaround(&self) -> bool {
        self.groups.iter().any(|g| g.kind.is_lookaround())
    }

    /// regex 引擎不支持环视/原子组/反向引用，需要回溯引擎
    pub fn requires_backtracking(&self) -> bool {
        self.has_backref
            || self
                .groups
                .iter()
                .any(|g| g.kind.is_lookaround() || g.kind == GroupKind::Atomic)
    }
}

/// 扫描模式中的全部分组起点
/// 结构字符都是ASCII，按字节扫描不会落在多字节UTF-8字符内部
pub fn scan(pattern: &str) -> PatternScan {
    let bytes = pattern.as_bytes();
    let len = bytes.len();
    let mut result = PatternScan::default();
    let mut class_depth = 0usize;
    let mut i = 0;

    while i < len {
        match bytes[i] {
            b'\\' => {
                if class_depth == 0 {
                    match bytes.get(i + 1) {
                        Some(b'1'..=b'9') => result.has_backref = true,
                        Some(b'k') if bytes.get(i + 2) == Some(&b'<') => result.has_backref = true,
                        _ => {}
                    }
                }
                i += 2;
            }
            b'[' => {
                class_depth += 1;
                i += 1;
                // 字符集开头的 '^' 与紧随其后的 ']' 都是字面量
                if bytes.get(i) == Some(&b'^') {
                    i += 1;
                }
                if bytes.get(i) == Some(&b']') {
                    i += 1;
                }
            }
            b']' if class_depth > 0 => {
                class_depth -= 1;
                i += 1;
            }
            b'(' if class_depth == 0 => {
                let (kind, header_len) = classify_group(&bytes[i..]);
                result.groups.push(GroupOpen {
                    offset: i,
                    header_len,
                    kind,
                });
                i += 1;
            }
            _ => i += 1,
        }
    }

    result
}

/// 判断 '(' 开头的分组类型及分组头长度
fn classify_group(rest: &[u8]) -> (GroupKind, usize) {
    if rest.get(1) != Some(&b'?') {
        return (GroupKind::Capturing, 1);
    }
    match rest.get(2) {
        Some(b':') => (GroupKind::NonCapturing, 3),
        Some(b'=') => (GroupKind::LookAhead, 3),
        Some(b'!') => (GroupKind::NegativeLookAhead, 3),
        Some(b'>') => (GroupKind::Atomic, 3),
        Some(b'<') => match rest.get(3) {
            Some(b'=') => (GroupKind::LookBehind, 4),
            Some(b'!') => (GroupKind::NegativeLookBehind, 4),
            _ => named_group(rest, 3),
        },
        Some(b'P') if rest.get(3) == Some(&b'<') => named_group(rest, 4),
        _ => (GroupKind::Flags, 2),
    }
}

fn named_group(rest: &[u8], name_start: usize) -> (GroupKind, usize) {
    match rest[name_start..].iter().position(|&b| b == b'>') {
        Some(pos) => (GroupKind::Named, name_start + pos + 1),
        // 未闭合的组名，保持原样交给引擎报错
        None => (GroupKind::Flags, 2),
    }
}

/// 将所有捕获组（含命名组）改写为非捕获组
/// 环视、原子组、内联标志保持原样，断言语义不变
pub fn to_non_capturing(pattern: &str) -> String {
    let scan = scan(pattern);
    let mut out = String::with_capacity(pattern.len() + scan.groups.len() * 2);
    let mut last = 0;

    for group in scan.groups.iter().filter(|g| g.kind.is_capturing()) {
        out.push_str(&pattern[last..group.offset]);
        out.push_str("(?:");
        last = group.offset + group.header_len;
    }
    out.push_str(&pattern[last..]);
    out
}
