// crates/core/src/language/matcher.rs
//! ファイル名による言語判定
//!
//! 判定は字句的なもののみで、大文字小文字を区別します。
//! 内容の推測やシバン行の解析は行いません。

use std::path::Path;

/// ファイル名マッチャ
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileMatcher {
    /// 拡張子（先頭の `.` なし）のいずれかに一致
    Extensions(Vec<String>),
    /// ベース名のいずれかに完全一致
    Names(Vec<String>),
}

impl FileMatcher {
    pub fn extensions(exts: &[&str]) -> Self {
        Self::Extensions(exts.iter().map(|e| e.trim_start_matches('.').to_string()).collect())
    }

    pub fn names(names: &[&str]) -> Self {
        Self::Names(names.iter().map(ToString::to_string).collect())
    }

    /// パスのベース名がこのマッチャに一致するか
    pub fn matches(&self, path: &Path) -> bool {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        match self {
            Self::Extensions(exts) => {
                extension_of(name).is_some_and(|ext| exts.iter().any(|e| e == ext))
            }
            Self::Names(names) => names.iter().any(|n| n == name),
        }
    }
}

/// 最後の `.` 以降を拡張子とみなす
///
/// `Path::extension` と違い、`.c` のような名前も拡張子 `c` として扱います。
fn extension_of(name: &str) -> Option<&str> {
    name.rfind('.').map(|idx| &name[idx + 1..])
}
