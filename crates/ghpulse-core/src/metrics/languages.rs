use crate::github::LanguageBytes;
use crate::metrics::LanguageStat;
use indexmap::IndexMap;
use std::cmp::Ordering;

/// How many languages the metrics keep
pub const TOP_LANGUAGES: usize = 8;

/// Running byte totals per language, in first-seen order
#[derive(Debug, Clone, Default)]
pub struct LanguageTotals {
    bytes: IndexMap<String, u64>,
}

impl LanguageTotals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulate one repository's language map
    pub fn add(&mut self, languages: &LanguageBytes) {
        for (language, bytes) in languages {
            let total = self.bytes.entry(language.clone()).or_insert(0);
            *total = total.saturating_add(*bytes);
        }
    }

    pub fn total_bytes(&self) -> u64 {
        self.bytes.values().fold(0u64, |sum, bytes| sum.saturating_add(*bytes))
    }

    /// Every language with its share of the grand total, largest first.
    ///
    /// The sort is stable, so equal shares keep first-seen order. Empty when
    /// no bytes were counted at all.
    pub fn breakdown(&self) -> Vec<LanguageStat> {
        let total = self.total_bytes();
        if total == 0 {
            return Vec::new();
        }

        let mut stats: Vec<LanguageStat> = self
            .bytes
            .iter()
            .map(|(language, bytes)| LanguageStat {
                language: language.clone(),
                bytes: *bytes,
                percentage: (*bytes as f64 / total as f64) * 100.0,
            })
            .collect();

        stats.sort_by(|a, b| {
            b.percentage
                .partial_cmp(&a.percentage)
                .unwrap_or(Ordering::Equal)
        });
        stats
    }

    /// The [`TOP_LANGUAGES`] largest entries of [`breakdown`](Self::breakdown)
    pub fn top(&self) -> Vec<LanguageStat> {
        let mut stats = self.breakdown();
        stats.truncate(TOP_LANGUAGES);
        stats
    }
}
