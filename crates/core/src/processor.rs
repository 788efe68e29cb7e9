use std::fs;
use std::path::Path;

use sloc_shared_kernel::{InfrastructureError, Result};

use crate::language::{Language, ScanOptions};
use crate::stats::Stats;

/// 1ファイルを読み込み、言語のコメント構文で行を分類する
///
/// ファイル全体をメモリに読み込んでから走査します。
/// 読み込みに失敗したファイルは統計に一切反映されません。
///
/// # Errors
///
/// 読み込めない場合は [`InfrastructureError::FileRead`] を返します。
pub fn process_file(path: &Path, language: &Language, options: ScanOptions) -> Result<Stats> {
    let content = fs::read(path).map_err(|source| InfrastructureError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    log::trace!("{}: {} bytes as {}", path.display(), content.len(), language.name());

    let mut stats = Stats::new();
    language.update(&content, &mut stats, options);
    Ok(stats)
}
