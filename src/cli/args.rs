// src/cli/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

use super::value_enum::CliOutputFormat;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "sloc",
    version = crate::VERSION,
    about = "言語別のコード行・コメント行・空行の集計ツール"
)]
pub struct Args {
    /// 対象のファイルまたはディレクトリ（省略時はカレントディレクトリ）
    #[arg(value_hint = ValueHint::AnyPath)]
    pub paths: Vec<PathBuf>,

    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "table", help_heading = "出力")]
    pub format: CliOutputFormat,

    /// 合計行を追加する
    #[arg(long, help_heading = "出力")]
    pub total: bool,

    /// 改行で終わらない最終行も1行として数える
    #[arg(long, help_heading = "集計")]
    pub count_unterminated: bool,

    /// `.` で始まるファイル・ディレクトリも走査する
    #[arg(long, help_heading = "走査/入力")]
    pub hidden: bool,

    /// ディレクトリへのシンボリックリンクを辿る
    #[arg(long, help_heading = "走査/入力")]
    pub follow: bool,

    /// 並列ワーカー数（1 で逐次処理, 既定: CPU数）
    #[arg(short, long, help_heading = "走査/入力")]
    pub jobs: Option<usize>,

    /// ログを詳細にする（-v: info, -vv: debug, -vvv: trace）
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
