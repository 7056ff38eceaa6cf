use unicode_width::UnicodeWidthChar;

/// Truncates a string to at most `max_width` display columns, appending an
/// ellipsis when anything was cut. Width-aware so wide glyphs don't overrun
/// the banner.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    let total: usize = s.chars().map(|c| c.width().unwrap_or(1)).sum();
    if total <= max_width {
        return s.to_string();
    }

    let budget = max_width.saturating_sub(3);
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(1);
        if used + w > budget {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push_str("...");
    out
}
