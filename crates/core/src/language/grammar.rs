// crates/core/src/language/grammar.rs
//! コメント構文の定義
//!
//! 行コメント・ブロックコメントの区切り文字をバイト列として保持します。
//! 構文を持たない言語には、実データに現れない NUL バイトを番兵として使います。
//! 空のマーカーは「常に一致する」退化状態になるため許可しません。

use std::borrow::Cow;

use sloc_shared_kernel::{DomainError, DomainResult};

/// 番兵マーカー（実際の入力では一致しない想定）
pub const SENTINEL_MARKER: &[u8] = b"\0";

/// 言語ごとのコメント構文
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommentGrammar {
    line_marker: Cow<'static, [u8]>,
    block_start: Cow<'static, [u8]>,
    block_end: Cow<'static, [u8]>,
    nesting: bool,
}

impl CommentGrammar {
    /// コメント構文なし
    pub const NONE: Self = Self::from_static(SENTINEL_MARKER, SENTINEL_MARKER, SENTINEL_MARKER, false);

    /// C系言語: `//` と `/* */`（ネスト非対応）
    pub const C_STYLE: Self = Self::from_static(b"//", b"/*", b"*/", false);

    /// シェル系: `#` のみ
    pub const HASH: Self = Self::from_static(b"#", SENTINEL_MARKER, SENTINEL_MARKER, false);

    const fn from_static(
        line_marker: &'static [u8],
        block_start: &'static [u8],
        block_end: &'static [u8],
        nesting: bool,
    ) -> Self {
        Self {
            line_marker: Cow::Borrowed(line_marker),
            block_start: Cow::Borrowed(block_start),
            block_end: Cow::Borrowed(block_end),
            nesting,
        }
    }

    /// 任意の構文を組み立てる
    ///
    /// `None` の箇所は番兵マーカーで埋めます。
    ///
    /// # Errors
    ///
    /// 空のマーカーが渡された場合は [`DomainError::InvalidGrammar`] を返します。
    pub fn new(
        line_marker: Option<&[u8]>,
        block: Option<(&[u8], &[u8])>,
        nesting: bool,
    ) -> DomainResult<Self> {
        let (block_start, block_end) = block.map_or((None, None), |(s, e)| (Some(s), Some(e)));
        Ok(Self {
            line_marker: owned_marker(line_marker, "line comment")?,
            block_start: owned_marker(block_start, "block comment start")?,
            block_end: owned_marker(block_end, "block comment end")?,
            nesting,
        })
    }

    #[inline]
    pub fn line_marker(&self) -> &[u8] {
        &self.line_marker
    }

    #[inline]
    pub fn block_start(&self) -> &[u8] {
        &self.block_start
    }

    #[inline]
    pub fn block_end(&self) -> &[u8] {
        &self.block_end
    }

    #[inline]
    pub const fn nesting(&self) -> bool {
        self.nesting
    }

    /// 一つでも実際のコメントマーカーを持つか
    pub fn has_comments(&self) -> bool {
        [self.line_marker(), self.block_start()]
            .iter()
            .any(|marker| *marker != SENTINEL_MARKER)
    }
}

impl Default for CommentGrammar {
    fn default() -> Self {
        Self::NONE
    }
}

fn owned_marker(marker: Option<&[u8]>, role: &str) -> DomainResult<Cow<'static, [u8]>> {
    match marker {
        None => Ok(Cow::Borrowed(SENTINEL_MARKER)),
        Some([]) => Err(DomainError::InvalidGrammar {
            reason: format!("{role} marker must not be empty"),
        }),
        Some(bytes) => Ok(Cow::Owned(bytes.to_vec())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_grammars() {
        assert_eq!(CommentGrammar::C_STYLE.line_marker(), b"//");
        assert_eq!(CommentGrammar::C_STYLE.block_end(), b"*/");
        assert!(!CommentGrammar::C_STYLE.nesting());
        assert_eq!(CommentGrammar::HASH.block_start(), SENTINEL_MARKER);
        assert!(!CommentGrammar::NONE.has_comments());
        assert!(CommentGrammar::HASH.has_comments());
    }

    #[test]
    fn missing_markers_become_sentinels() {
        let grammar = CommentGrammar::new(Some(&b"--"[..]), None, false).unwrap();
        assert_eq!(grammar.line_marker(), b"--");
        assert_eq!(grammar.block_start(), SENTINEL_MARKER);
        assert_eq!(grammar.block_end(), SENTINEL_MARKER);
    }

    #[test]
    fn custom_grammar_equals_builtin() {
        let grammar = CommentGrammar::new(Some(&b"//"[..]), Some((&b"/*"[..], &b"*/"[..])), false).unwrap();
        assert_eq!(grammar, CommentGrammar::C_STYLE);
    }

    #[test]
    fn empty_marker_is_rejected() {
        let err = CommentGrammar::new(Some(&b""[..]), None, false).unwrap_err();
        assert_eq!(err.to_string(), "Invalid comment grammar: line comment marker must not be empty");
        assert!(CommentGrammar::new(None, Some((&b"{-"[..], &b""[..])), true).is_err());
    }
}
