//! 言語ごとのコメント構文と行分類
//!
//! - [`grammar`]: コメント構文（マーカーとネスト可否）
//! - [`matcher`]: ファイル名による判定
//! - [`registry`]: 言語一覧と first-match-wins の解決
//! - [`classifier`]: バイト列を走査して行を分類するエンジン

pub mod classifier;
pub mod grammar;
pub mod matcher;
pub mod registry;

pub use classifier::{LineKind, ScanOptions, classify, line_kinds};
pub use grammar::{CommentGrammar, SENTINEL_MARKER};
pub use matcher::FileMatcher;
pub use registry::{Language, Registry};
