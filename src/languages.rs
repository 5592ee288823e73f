use crate::format::{format_tenths, round_tenths};
use crate::github::LanguageBreakdown;

/// Maximum number of languages shown in the bar and legend
pub const MAX_LANGUAGES: usize = 6;

/// Colour used for languages missing from [`LANGUAGE_COLORS`]
pub const DEFAULT_LANGUAGE_COLOR: &str = "#8b949e";

/// GitHub linguist colours for common languages
pub const LANGUAGE_COLORS: &[(&str, &str)] = &[
    ("JavaScript", "#f1e05a"),
    ("TypeScript", "#3178c6"),
    ("Python", "#3572A5"),
    ("Java", "#b07219"),
    ("C", "#555555"),
    ("C++", "#f34b7d"),
    ("C#", "#178600"),
    ("Go", "#00ADD8"),
    ("Rust", "#dea584"),
    ("Ruby", "#701516"),
    ("PHP", "#4F5D95"),
    ("Swift", "#F05138"),
    ("Kotlin", "#A97BFF"),
    ("Scala", "#c22d40"),
    ("Dart", "#00B4AB"),
    ("HTML", "#e34c26"),
    ("CSS", "#563d7c"),
    ("SCSS", "#c6538c"),
    ("Shell", "#89e051"),
    ("PowerShell", "#012456"),
    ("Lua", "#000080"),
    ("Perl", "#0298c3"),
    ("R", "#198CE7"),
    ("MATLAB", "#e16737"),
    ("Julia", "#a270ba"),
    ("Haskell", "#5e5086"),
    ("Elixir", "#6e4a7e"),
    ("Clojure", "#db5855"),
    ("Erlang", "#B83998"),
    ("F#", "#b845fc"),
    ("Vue", "#41b883"),
    ("Svelte", "#ff3e00"),
    ("Dockerfile", "#384d54"),
    ("Makefile", "#427819"),
    ("Objective-C", "#438eff"),
    ("Jupyter Notebook", "#DA5B0B"),
];

/// Look up a language colour; matching is exact and case-sensitive
pub fn language_color(name: &str) -> &'static str {
    LANGUAGE_COLORS
        .iter()
        .find(|(lang, _)| *lang == name)
        .map(|(_, color)| *color)
        .unwrap_or(DEFAULT_LANGUAGE_COLOR)
}

/// A language share of the repository, ready for display
#[derive(Debug, Clone, PartialEq)]
pub struct LanguagePercentage {
    pub name: String,
    /// One-decimal percentage of the full byte total, e.g. `"30.0"`
    pub percent: String,
    pub bytes: u64,
}

/// Derive the displayed language shares.
///
/// Percentages are taken over every language before the list is cut to
/// [`MAX_LANGUAGES`], so the kept entries need not sum to 100. The sort is
/// stable: equal byte counts keep the order the API reported them in.
pub fn language_percentages(breakdown: &LanguageBreakdown) -> Vec<LanguagePercentage> {
    let total_bytes = breakdown.total_bytes();
    if total_bytes == 0 {
        return Vec::new();
    }

    let mut languages: Vec<_> = breakdown
        .iter()
        .map(|(name, bytes)| LanguagePercentage {
            name: name.to_string(),
            percent: format_tenths(round_tenths(bytes as u128 * 100, total_bytes as u128)),
            bytes,
        })
        .collect();

    languages.sort_by(|a, b| b.bytes.cmp(&a.bytes));
    languages.truncate(MAX_LANGUAGES);
    languages
}
