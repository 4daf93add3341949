const ELLIPSIS: char = '…';

/// Shorten `text` to at most `max_len` characters, ending in `…` when cut
pub fn truncate(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    if max_len == 0 {
        return String::new();
    }

    let mut truncated: String = text.chars().take(max_len - 1).collect();
    truncated.push(ELLIPSIS);
    truncated
}

/// Right-pad `text` with spaces to exactly `width` characters (truncating first)
pub fn fit(text: &str, width: usize) -> String {
    let truncated = truncate(text, width);
    let len = truncated.chars().count();
    format!("{}{}", truncated, " ".repeat(width - len))
}

/// `1 line`, `2 lines`
pub fn pluralize(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}
