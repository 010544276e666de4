use std::fmt::{self, Write};

/// 日志预览：连续空白折叠为单个空格，超过 max_chars 个字符时截断并追加省略号
/// 只在格式化时遍历原串，不产生中间String
#[inline]
pub fn preview_compact(s: &str, max_chars: usize) -> Compact<'_> {
    Compact {
        source: s,
        max_chars,
    }
}

/// preview_compact 的显示包装
#[derive(Debug, Clone, Copy)]
pub struct Compact<'a> {
    source: &'a str,
    max_chars: usize,
}

impl fmt::Display for Compact<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut written = 0usize;
        let mut in_space = false;

        for ch in self.source.trim().chars() {
            let is_space = ch.is_whitespace();
            if is_space && in_space {
                continue;
            }
            if written == self.max_chars {
                return f.write_char('…');
            }
            f.write_char(if is_space { ' ' } else { ch })?;
            written += 1;
            in_space = is_space;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_is_folded() {
        assert_eq!(
            preview_compact("  accessible \n\t avec   un CAP ", 80).to_string(),
            "accessible avec un CAP"
        );
    }

    #[test]
    fn test_truncation_counts_chars() {
        assert_eq!(preview_compact("diplôme exigé", 7).to_string(), "diplôme…");
        assert_eq!(preview_compact("bac", 3).to_string(), "bac");
        assert_eq!(preview_compact("", 3).to_string(), "");
    }
}
