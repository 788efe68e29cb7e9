// crates/core/src/language/registry.rs
//! 言語レジストリ
//!
//! 登録順に走査し、最初に一致した言語を採用します（first-match-wins）。
//! 一致しないファイルはエラーではなく、単に集計対象外です。

use std::path::Path;

use super::classifier::{self, ScanOptions};
use super::grammar::CommentGrammar;
use super::matcher::FileMatcher;
use crate::stats::Stats;

/// 登録済み言語
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Language {
    name: String,
    matcher: FileMatcher,
    grammar: CommentGrammar,
}

impl Language {
    pub fn new(name: impl Into<String>, matcher: FileMatcher, grammar: CommentGrammar) -> Self {
        Self { name: name.into(), matcher, grammar }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn grammar(&self) -> &CommentGrammar {
        &self.grammar
    }

    #[inline]
    pub fn matches(&self, path: &Path) -> bool {
        self.matcher.matches(path)
    }

    /// ファイル内容をこの言語の構文で走査し、`stats` に加算する
    pub fn update(&self, content: &[u8], stats: &mut Stats, options: ScanOptions) {
        classifier::update(content, &self.grammar, options, stats);
    }
}

/// 順序付きの言語一覧
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    languages: Vec<Language>,
}

impl Registry {
    pub fn new(languages: Vec<Language>) -> Self {
        Self { languages }
    }

    /// 既定の言語表
    ///
    /// Haskell / Python / Lisp / HTML はコメント構文なしで登録されています。
    pub fn builtin() -> Self {
        use CommentGrammar as G;
        use FileMatcher as M;

        Self::new(vec![
            Language::new("C", M::extensions(&["c", "h"]), G::C_STYLE),
            Language::new(
                "C++",
                M::extensions(&["cc", "cpp", "cxx", "hh", "hpp", "hxx"]),
                G::C_STYLE,
            ),
            Language::new("Go", M::extensions(&["go"]), G::C_STYLE),
            Language::new("Haskell", M::extensions(&["hs", "lhs"]), G::NONE),
            Language::new("Perl", M::extensions(&["pl", "pm"]), G::HASH),
            Language::new("Python", M::extensions(&["py"]), G::NONE),
            Language::new("Lisp", M::extensions(&["lsp"]), G::NONE),
            Language::new("Make", M::names(&["makefile", "Makefile", "MAKEFILE"]), G::HASH),
            Language::new("HTML", M::extensions(&["htm", "html", "xhtml"]), G::NONE),
        ])
    }

    /// パスに対応する言語を返す（最初の一致）
    pub fn detect(&self, path: &Path) -> Option<&Language> {
        self.languages.iter().find(|lang| lang.matches(path))
    }

    pub fn languages(&self) -> &[Language] {
        &self.languages
    }

    pub fn get(&self, name: &str) -> Option<&Language> {
        self.languages.iter().find(|lang| lang.name() == name)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect(path: &str) -> Option<String> {
        Registry::builtin().detect(Path::new(path)).map(|l| l.name().to_string())
    }

    #[test]
    fn builtin_table_order() {
        let names: Vec<_> = Registry::builtin().languages().iter().map(|l| l.name().to_string()).collect();
        assert_eq!(
            names,
            ["C", "C++", "Go", "Haskell", "Perl", "Python", "Lisp", "Make", "HTML"]
        );
    }

    #[test]
    fn detects_by_extension() {
        assert_eq!(detect("main.c").as_deref(), Some("C"));
        assert_eq!(detect("lib/util.h").as_deref(), Some("C"));
        assert_eq!(detect("a.hpp").as_deref(), Some("C++"));
        assert_eq!(detect("cmd/main.go").as_deref(), Some("Go"));
        assert_eq!(detect("Main.lhs").as_deref(), Some("Haskell"));
        assert_eq!(detect("script.pm").as_deref(), Some("Perl"));
        assert_eq!(detect("index.xhtml").as_deref(), Some("HTML"));
    }

    #[test]
    fn detects_make_by_exact_name() {
        assert_eq!(detect("makefile").as_deref(), Some("Make"));
        assert_eq!(detect("src/MAKEFILE").as_deref(), Some("Make"));
        assert_eq!(detect("GNUmakefile"), None);
    }

    #[test]
    fn unmatched_is_none() {
        assert_eq!(detect("Foo.PY"), None);
        assert_eq!(detect("README.md"), None);
        assert_eq!(detect("LICENSE"), None);
    }

    #[test]
    fn first_match_wins() {
        let registry = Registry::new(vec![
            Language::new("First", FileMatcher::extensions(&["x"]), CommentGrammar::HASH),
            Language::new("Second", FileMatcher::extensions(&["x"]), CommentGrammar::C_STYLE),
        ]);
        let lang = registry.detect(Path::new("a.x")).unwrap();
        assert_eq!(lang.name(), "First");
        assert_eq!(lang.grammar(), &CommentGrammar::HASH);
    }

    #[test]
    fn no_comment_languages_are_preserved() {
        let registry = Registry::builtin();
        for name in ["Haskell", "Python", "Lisp", "HTML"] {
            assert!(!registry.get(name).unwrap().grammar().has_comments(), "{name}");
        }
    }
}
