// src/presentation.rs
use std::io::Write;
use std::path::PathBuf;

use sloc_core::RunResult;
use sloc_core::config::Config;
use sloc_core::output::write_report;
use sloc_shared_kernel::{Result, SlocError};

/// 読めなかったパスを `  ! path` の形式で書き出す
///
/// # Errors
///
/// 書き込みに失敗した場合。
pub fn print_errors(errors: &[(PathBuf, SlocError)], err: &mut impl Write) -> Result<()> {
    for (path, _) in errors {
        writeln!(err, "  ! {}", path.display())?;
    }
    err.flush()?;
    Ok(())
}

/// 実行結果を出力する（エラーは `err`、集計表は `out`）
///
/// # Errors
///
/// 書き込みまたはシリアライズに失敗した場合。
pub fn print_results(
    result: &RunResult,
    config: &Config,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<()> {
    print_errors(&result.errors, err)?;
    write_report(&result.stats, config.format, config.total_row, out)
}
