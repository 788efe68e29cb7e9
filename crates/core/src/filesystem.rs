// crates/core/src/filesystem.rs
//! 入力パスの展開
//!
//! ディレクトリは深さ優先・ファイル名順に辿り、名前が `.` で始まるエントリは
//! （明示的に渡されたルート自身を除いて）飛ばします。

use std::fs;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use sloc_shared_kernel::{InfrastructureError, SlocError};

use crate::config::WalkOptions;

/// 展開結果
#[derive(Debug, Default)]
pub struct Discovery {
    /// 発見順のファイル一覧
    pub files: Vec<PathBuf>,
    /// 読めなかったパス
    pub errors: Vec<(PathBuf, SlocError)>,
}

/// 全ルートを展開する
///
/// 個々のパスの失敗は `Discovery::errors` に積まれ、残りの走査は継続します。
pub fn discover(options: &WalkOptions) -> Discovery {
    let mut discovery = Discovery::default();
    for root in &options.roots {
        collect_root(root, options, &mut discovery);
    }
    log::info!(
        "discovered {} files ({} unreadable paths)",
        discovery.files.len(),
        discovery.errors.len()
    );
    discovery
}

fn collect_root(root: &Path, options: &WalkOptions, discovery: &mut Discovery) {
    let meta = match fs::metadata(root) {
        Ok(meta) => meta,
        Err(err) => {
            discovery.push_error(root, access_error(root, err.to_string()));
            return;
        }
    };

    if meta.is_file() {
        discovery.files.push(root.to_path_buf());
        return;
    }
    if !meta.is_dir() {
        discovery.push_error(root, unsupported(root));
        return;
    }

    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .hidden(!options.hidden)
        .follow_links(options.follow_links)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                let path = error_path(&err).unwrap_or(root).to_path_buf();
                discovery.push_error(&path, access_error(&path, err.to_string()));
                continue;
            }
        };
        let Some(file_type) = entry.file_type() else {
            continue;
        };
        if file_type.is_dir() {
            continue;
        }
        if file_type.is_file() {
            discovery.files.push(entry.into_path());
            continue;
        }
        // リンクを辿らない設定でも、ファイルを指すシンボリックリンクは数える
        match fs::metadata(entry.path()) {
            Ok(meta) if meta.is_file() => discovery.files.push(entry.into_path()),
            Ok(meta) if meta.is_dir() => {
                log::debug!("not following directory link {}", entry.path().display());
            }
            Ok(_) => discovery.push_error(entry.path(), unsupported(entry.path())),
            Err(err) => discovery.push_error(entry.path(), access_error(entry.path(), err.to_string())),
        }
    }
}

impl Discovery {
    fn push_error(&mut self, path: &Path, err: SlocError) {
        log::warn!("{err}");
        self.errors.push((path.to_path_buf(), err));
    }
}

fn access_error(path: &Path, details: String) -> SlocError {
    InfrastructureError::PathAccess { path: path.to_path_buf(), details }.into()
}

fn unsupported(path: &Path) -> SlocError {
    InfrastructureError::UnsupportedFileType { path: path.to_path_buf() }.into()
}

fn error_path(err: &ignore::Error) -> Option<&Path> {
    match err {
        ignore::Error::WithPath { path, .. } => Some(path),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            error_path(err)
        }
        ignore::Error::Partial(errs) => errs.iter().find_map(error_path),
        ignore::Error::Loop { child, .. } => Some(child),
        _ => None,
    }
}
