// crates/core/src/stats.rs
use std::collections::BTreeMap;
use std::ops::AddAssign;

use serde::Serialize;
use sloc_shared_kernel::{FileCount, LineCount};

/// 言語ごとの行数カウンタ
///
/// 1行ごとに `total` は必ず1増えます。空行は `blank` のみ、
/// それ以外の行は `code` と `comment` の一方または両方を増やします。
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stats {
    /// 集計に含めたファイル数
    pub files: FileCount,
    pub code: LineCount,
    pub comment: LineCount,
    pub blank: LineCount,
    pub total: LineCount,
}

impl Stats {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// フィールドごとに加算する
    pub fn merge(&mut self, other: &Self) {
        self.files += other.files;
        self.code += other.code;
        self.comment += other.comment;
        self.blank += other.blank;
        self.total += other.total;
    }

    /// コードとコメントの両方に数えられた行数
    #[must_use]
    pub fn overlap(&self) -> usize {
        (self.code.value() + self.comment.value() + self.blank.value())
            .saturating_sub(self.total.value())
    }
}

impl AddAssign for Stats {
    fn add_assign(&mut self, rhs: Self) {
        self.merge(&rhs);
    }
}

/// レポートの1行
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageSummary {
    pub language: String,
    #[serde(flatten)]
    pub stats: Stats,
}

/// 言語名をキーにした集計表
///
/// エントリは最初のマージ時に作られ、言語名順に列挙されます。
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StatsTable {
    entries: BTreeMap<String, Stats>,
}

impl StatsTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// `language` のエントリを返す（なければ空で作成）
    pub fn entry(&mut self, language: &str) -> &mut Stats {
        self.entries.entry(language.to_string()).or_default()
    }

    pub fn merge(&mut self, language: &str, stats: &Stats) {
        self.entry(language).merge(stats);
    }

    #[must_use]
    pub fn get(&self, language: &str) -> Option<&Stats> {
        self.entries.get(language)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Stats)> {
        self.entries.iter().map(|(name, stats)| (name.as_str(), stats))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 全言語の合計
    #[must_use]
    pub fn total(&self) -> Stats {
        let mut total = Stats::new();
        for stats in self.entries.values() {
            total.merge(stats);
        }
        total
    }

    /// 出力用のスナップショット（言語名順）
    #[must_use]
    pub fn summaries(&self) -> Vec<LanguageSummary> {
        self.iter()
            .map(|(language, stats)| LanguageSummary { language: language.to_string(), stats: *stats })
            .collect()
    }
}
