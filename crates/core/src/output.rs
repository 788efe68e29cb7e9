// crates/core/src/output.rs
//! 集計結果の出力
//!
//! 表形式は各列を最長セル + 2 桁に右寄せします。行は言語名順です。

use std::io::Write;

use serde::Serialize;
use sloc_shared_kernel::Result;

use crate::stats::{LanguageSummary, Stats, StatsTable};

const HEADER: [&str; 6] = ["Language", "Files", "Code", "Comment", "Blank", "Total"];
const PADDING: usize = 2;
const TOTAL_LABEL: &str = "TOTAL";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// 指定形式でレポートを書き出す
///
/// # Errors
///
/// 書き込みまたはシリアライズに失敗した場合。
pub fn write_report(
    table: &StatsTable,
    format: OutputFormat,
    total_row: bool,
    out: &mut impl Write,
) -> Result<()> {
    match format {
        OutputFormat::Table => write_table(table, total_row, out),
        OutputFormat::Json => write_json(table, total_row, out),
    }
}

fn rows(table: &StatsTable, total_row: bool) -> Vec<LanguageSummary> {
    let mut rows = table.summaries();
    if total_row {
        rows.push(LanguageSummary { language: TOTAL_LABEL.to_string(), stats: table.total() });
    }
    rows
}

fn cells(language: &str, stats: &Stats) -> [String; 6] {
    [
        language.to_string(),
        stats.files.to_string(),
        stats.code.to_string(),
        stats.comment.to_string(),
        stats.blank.to_string(),
        stats.total.to_string(),
    ]
}

pub fn write_table(table: &StatsTable, total_row: bool, out: &mut impl Write) -> Result<()> {
    let body: Vec<[String; 6]> = rows(table, total_row)
        .iter()
        .map(|row| cells(&row.language, &row.stats))
        .collect();

    let mut widths = HEADER.map(str::len);
    for row in &body {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    write_row(out, &HEADER, &widths)?;
    for row in &body {
        write_row(out, row, &widths)?;
    }
    out.flush()?;
    Ok(())
}

fn write_row<S: AsRef<str>>(out: &mut impl Write, row: &[S], widths: &[usize]) -> Result<()> {
    let mut line = String::new();
    for (cell, width) in row.iter().zip(widths) {
        let width = width + PADDING;
        line.push_str(&format!("{:>width$}", cell.as_ref()));
    }
    writeln!(out, "{line}")?;
    Ok(())
}

pub fn write_json(table: &StatsTable, total_row: bool, out: &mut impl Write) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, &rows(table, total_row))?;
    writeln!(out)?;
    Ok(())
}
