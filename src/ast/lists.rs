/// Every line starts with `- `.
pub fn is_unordered_list(block: &str) -> bool {
    block.lines().all(|l| l.starts_with("- "))
}

/// Lines are numbered `1. `, `2. `, ... with no gaps.
pub fn is_ordered_list(block: &str) -> bool {
    block.lines().enumerate().all(|(i, l)| l.starts_with(&format!("{}. ", i + 1)))
}

pub fn strip_bullet(s: &str) -> Option<&str> {
    s.strip_prefix("- ")
}

/// Drop the leading number, its `.`, and whitespace after it.
pub fn strip_ordered_bullet(s: &str) -> Option<&str> {
    let digits = s.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let rest = s[digits..].strip_prefix('.')?;
    Some(rest.trim_start())
}
