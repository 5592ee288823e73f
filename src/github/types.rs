use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// `GET /repos/{owner}/{repo}`
#[derive(Debug, Clone, Deserialize)]
pub struct RepositoryRecord {
    pub name: String,
    pub owner: RepositoryOwner,
    #[serde(default)]
    pub html_url: String,
    pub description: Option<String>,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
    #[serde(default)]
    pub open_issues_count: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RepositoryOwner {
    pub login: String,
    #[serde(default)]
    pub avatar_url: String,
}

/// `GET /repos/{owner}/{repo}/languages`, in response order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageBreakdown {
    entries: Vec<(String, u64)>,
}

impl LanguageBreakdown {
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(name, bytes)| (name.as_str(), *bytes))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_bytes(&self) -> u64 {
        self.entries.iter().map(|(_, bytes)| bytes).sum()
    }
}

impl FromIterator<(String, u64)> for LanguageBreakdown {
    fn from_iter<I: IntoIterator<Item = (String, u64)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'de> Deserialize<'de> for LanguageBreakdown {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct BreakdownVisitor;

        impl<'de> Visitor<'de> for BreakdownVisitor {
            type Value = LanguageBreakdown;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object mapping language names to byte counts")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, bytes)) = map.next_entry::<String, u64>()? {
                    entries.push((name, bytes));
                }
                Ok(LanguageBreakdown { entries })
            }
        }

        deserializer.deserialize_map(BreakdownVisitor)
    }
}

/// `GET /repos/{owner}/{repo}/traffic/{views,clones}`; the per-day arrays are ignored
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct TrafficCounts {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub uniques: u64,
}

/// 14-day traffic totals
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrafficSummary {
    pub views: u64,
    pub unique_visitors: u64,
    pub clones: u64,
    pub unique_cloners: u64,
}

impl TrafficSummary {
    pub fn from_counts(views: TrafficCounts, clones: TrafficCounts) -> Self {
        Self {
            views: views.count,
            unique_visitors: views.uniques,
            clones: clones.count,
            unique_cloners: clones.uniques,
        }
    }
}

/// Outcome of a non-essential request
#[derive(Debug, Clone, PartialEq)]
pub enum SubFetch<T> {
    Ok(T),
    /// The request failed and the data was replaced by its empty form
    Degraded(T),
}

impl<T> SubFetch<T> {
    pub fn is_degraded(&self) -> bool {
        matches!(self, SubFetch::Degraded(_))
    }

    pub fn into_inner(self) -> T {
        match self {
            SubFetch::Ok(value) | SubFetch::Degraded(value) => value,
        }
    }
}

/// Everything the renderer needs, built fresh for every widget
#[derive(Debug, Clone)]
pub struct FetchResult {
    pub repository: RepositoryRecord,
    pub languages: LanguageBreakdown,
    pub traffic: Option<TrafficSummary>,
}
