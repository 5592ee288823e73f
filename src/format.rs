/// Format a count with `k`/`m` suffixes, dropping a trailing `.0`.
///
/// The single decimal is rounded half up, so 1,250 becomes `1.3k`.
pub fn format_count(n: u64) -> String {
    if n >= 1_000_000 {
        abbreviate(n, 1_000_000, "m")
    } else if n >= 1_000 {
        abbreviate(n, 1_000, "k")
    } else {
        n.to_string()
    }
}

fn abbreviate(n: u64, unit: u64, suffix: &str) -> String {
    let tenths = round_tenths(n as u128, unit as u128);
    if tenths % 10 == 0 {
        format!("{}{}", tenths / 10, suffix)
    } else {
        format!("{}{}", format_tenths(tenths), suffix)
    }
}

/// `numerator / denominator` in tenths, rounded half up
pub(crate) fn round_tenths(numerator: u128, denominator: u128) -> u128 {
    (numerator * 10 + denominator / 2) / denominator
}

/// Render a tenths count as `whole.digit`
pub(crate) fn format_tenths(tenths: u128) -> String {
    format!("{}.{}", tenths / 10, tenths % 10)
}

/// Escape HTML special characters for text and attribute context
pub fn escape_markup(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
