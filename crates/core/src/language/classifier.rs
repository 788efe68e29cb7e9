// crates/core/src/language/classifier.rs
//! 行分類エンジン
//!
//! バイト列を1回だけ走査し、各行を空行・コード・コメント・コード+コメントに分類します。
//! 字句解析は行わず、コメントマーカーは単なるバイト列として扱います
//! （文字列リテラル内のマーカーもコメントとして認識されます）。
//!
//! 状態機械は3つの部分一致カーソル（行コメント・ブロック開始・ブロック終了）と、
//! 行コメント中フラグ・ブロックの深さから成ります。1バイトごとに
//!
//! 1. 行コメントカーソル（ブロック外かつ行コメント外のときのみ）
//! 2. ブロック開始カーソル（行コメント外のときのみ、ネスト非対応なら深さは 1 で頭打ち）
//! 3. ブロック終了カーソル（行コメント外かつブロック内のときのみ）
//!
//! の順に評価します。評価されなかったカーソルは 0 に戻ります。
//! 行コメントは改行で終わり、ブロックの深さは行をまたいで保持されます。

use super::grammar::CommentGrammar;
use crate::stats::Stats;

/// 走査オプション
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanOptions {
    /// 改行で終わらない最終行も1行として数える
    pub count_unterminated: bool,
}

/// 1行の分類結果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    Blank,
    Code,
    Comment,
    /// コードとコメントの両方を含む（合計には1行として数える）
    CodeAndComment,
}

impl LineKind {
    #[inline]
    pub const fn is_code(self) -> bool {
        matches!(self, Self::Code | Self::CodeAndComment)
    }

    #[inline]
    pub const fn is_comment(self) -> bool {
        matches!(self, Self::Comment | Self::CodeAndComment)
    }

    /// この行を `stats` に加算する
    pub fn tally(self, stats: &mut Stats) {
        stats.total.increment();
        if self == Self::Blank {
            stats.blank.increment();
            return;
        }
        if self.is_code() {
            stats.code.increment();
        }
        if self.is_comment() {
            stats.comment.increment();
        }
    }
}

/// ファイル1つ分を走査した統計を返す（`files` は 1）
pub fn classify(content: &[u8], grammar: &CommentGrammar, options: ScanOptions) -> Stats {
    let mut stats = Stats::new();
    update(content, grammar, options, &mut stats);
    stats
}

/// ファイル1つ分を走査し、既存の `stats` に加算する
pub fn update(content: &[u8], grammar: &CommentGrammar, options: ScanOptions, stats: &mut Stats) {
    stats.files.increment();
    scan(content, grammar, options, |kind| kind.tally(stats));
}

/// 各行の分類を順に返す
pub fn line_kinds(content: &[u8], grammar: &CommentGrammar, options: ScanOptions) -> Vec<LineKind> {
    let mut kinds = Vec::new();
    scan(content, grammar, options, |kind| kinds.push(kind));
    kinds
}

fn scan(
    content: &[u8],
    grammar: &CommentGrammar,
    options: ScanOptions,
    mut on_line: impl FnMut(LineKind),
) {
    let mut automaton = CommentAutomaton::new(grammar);
    let mut line = LineState::default();
    let mut line_start = 0;

    for (index, &byte) in content.iter().enumerate() {
        let was_comment = automaton.in_comment();
        let transition = automaton.feed(byte);

        if byte == b'\n' {
            on_line(line.finish());
            automaton.end_line();
            line = LineState::default();
            line_start = index + 1;
            continue;
        }

        if !is_blank_byte(byte) {
            line.non_blank = true;
        }
        if was_comment || automaton.in_comment() {
            line.has_comment = true;
        }
        if !was_comment {
            let window = match transition {
                Transition::LineOpened => grammar.line_marker().len(),
                Transition::BlockOpened => grammar.block_start().len(),
                Transition::None | Transition::BlockClosed => automaton.held(),
            };
            line.observe_code(index, byte, window, transition != Transition::None);
        }
    }

    if options.count_unterminated && line_start < content.len() {
        on_line(line.finish());
    }
}

#[inline]
const fn is_blank_byte(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t')
}

// ============================================================================
// 行ごとの一時状態
// ============================================================================

#[derive(Debug, Default)]
struct LineState {
    non_blank: bool,
    has_comment: bool,
    has_code: bool,
    /// マーカーの途中かもしれない非空白バイトのうち最も古い位置
    pending_code: Option<usize>,
}

impl LineState {
    /// コード状態で読んだバイトを記録する
    ///
    /// `window` は直前 `window` バイトがマーカーの一部である可能性を表す。
    /// そこから外れた保留バイトはコードとして確定する。
    fn observe_code(&mut self, index: usize, byte: u8, window: usize, entered_comment: bool) {
        if self.has_code {
            return;
        }
        let marker_from = (index + 1).saturating_sub(window);
        if self.pending_code.is_some_and(|pos| pos < marker_from) {
            self.has_code = true;
            self.pending_code = None;
            return;
        }
        if entered_comment {
            self.pending_code = None;
            return;
        }
        if !is_blank_byte(byte) {
            if window > 0 {
                self.pending_code.get_or_insert(index);
            } else {
                self.has_code = true;
            }
        }
    }

    fn finish(&self) -> LineKind {
        if !self.non_blank {
            return LineKind::Blank;
        }
        // 行末で未完のマーカー断片はコード
        let has_code = self.has_code || self.pending_code.is_some() || !self.has_comment;
        match (has_code, self.has_comment) {
            (true, true) => LineKind::CodeAndComment,
            (false, true) => LineKind::Comment,
            _ => LineKind::Code,
        }
    }
}

// ============================================================================
// コメント状態機械
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Transition {
    None,
    LineOpened,
    BlockOpened,
    BlockClosed,
}

struct CommentAutomaton<'a> {
    line: MarkerCursor<'a>,
    block_start: MarkerCursor<'a>,
    block_end: MarkerCursor<'a>,
    nesting: bool,
    in_line_comment: bool,
    block_depth: usize,
}

impl<'a> CommentAutomaton<'a> {
    fn new(grammar: &'a CommentGrammar) -> Self {
        Self {
            line: MarkerCursor::new(grammar.line_marker()),
            block_start: MarkerCursor::new(grammar.block_start()),
            block_end: MarkerCursor::new(grammar.block_end()),
            nesting: grammar.nesting(),
            in_line_comment: false,
            block_depth: 0,
        }
    }

    #[inline]
    fn in_comment(&self) -> bool {
        self.in_line_comment || self.block_depth > 0
    }

    /// コード状態でマーカー途中として保留しているバイト数
    #[inline]
    fn held(&self) -> usize {
        self.line.pos.max(self.block_start.pos)
    }

    fn feed(&mut self, byte: u8) -> Transition {
        let mut transition = Transition::None;

        if self.block_depth == 0 && !self.in_line_comment {
            if self.line.advance(byte) {
                self.in_line_comment = true;
                transition = Transition::LineOpened;
            }
        } else {
            self.line.reset();
        }

        if self.in_line_comment {
            self.block_start.reset();
        } else if self.block_start.advance(byte) {
            self.block_depth = if self.nesting { self.block_depth + 1 } else { 1 };
            transition = Transition::BlockOpened;
        }

        if self.in_line_comment || self.block_depth == 0 {
            self.block_end.reset();
        } else if self.block_end.advance(byte) {
            self.block_depth -= 1;
            transition = Transition::BlockClosed;
        }

        transition
    }

    fn end_line(&mut self) {
        self.in_line_comment = false;
    }
}

/// マーカー1つ分の部分一致カーソル
///
/// 不一致のバイトではその場で 0 に戻る（同じバイトで先頭から照合し直さない）。
struct MarkerCursor<'a> {
    marker: &'a [u8],
    pos: usize,
}

impl<'a> MarkerCursor<'a> {
    const fn new(marker: &'a [u8]) -> Self {
        Self { marker, pos: 0 }
    }

    /// 1バイト進め、マーカー全体に一致したら `true`（位置は 0 に戻る）
    fn advance(&mut self, byte: u8) -> bool {
        if self.marker.get(self.pos) != Some(&byte) {
            self.pos = 0;
            return false;
        }
        self.pos += 1;
        if self.pos == self.marker.len() {
            self.pos = 0;
            return true;
        }
        false
    }

    #[inline]
    fn reset(&mut self) {
        self.pos = 0;
    }
}
