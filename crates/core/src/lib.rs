// crates/core/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::path::PathBuf;

pub mod config;
pub mod filesystem;
pub mod language;
pub mod output;
pub mod processor;
pub mod stats;

use crate::config::Config;
use crate::language::{Language, Registry};
use crate::stats::{Stats, StatsTable};
use sloc_shared_kernel::{Result, SlocError};

/// 1回の実行結果（集計表と、処理できなかったパスの一覧）
#[derive(Debug, Default)]
pub struct RunResult {
    pub stats: StatsTable,
    pub errors: Vec<(PathBuf, SlocError)>,
}

/// ルート以下の認識できるファイルをすべて集計する
///
/// ファイルを列挙して `registry` で言語を判定し、走査します
/// （`config.jobs > 1` なら並列）。ファイルごとの統計は発見順に集計表へマージされます。
///
/// # Errors
///
/// ワーカープールを作成できない場合のみエラーを返します。
/// 読めなかったパスやファイルは `RunResult::errors` に集められます。
pub fn run(config: &Config, registry: &Registry) -> Result<RunResult> {
    let discovery = filesystem::discover(&config.walk);

    let matched: Vec<(PathBuf, &Language)> = discovery
        .files
        .into_iter()
        .filter_map(|path| match registry.detect(&path) {
            Some(language) => Some((path, language)),
            None => {
                log::debug!("no language for {}", path.display());
                None
            }
        })
        .collect();

    let outcomes = scan_all(&matched, config)?;

    let mut result = RunResult { stats: StatsTable::new(), errors: discovery.errors };
    for ((path, language), outcome) in matched.into_iter().zip(outcomes) {
        match outcome {
            Ok(stats) => result.stats.merge(language.name(), &stats),
            Err(err) => {
                log::warn!("{err}");
                result.errors.push((path, err));
            }
        }
    }

    log::info!(
        "counted {} files in {} languages",
        result.stats.total().files,
        result.stats.len()
    );
    Ok(result)
}

fn scan_one((path, language): &(PathBuf, &Language), config: &Config) -> Result<Stats> {
    processor::process_file(path, language, config.scan)
}

#[cfg(feature = "parallel")]
fn scan_all(matched: &[(PathBuf, &Language)], config: &Config) -> Result<Vec<Result<Stats>>> {
    if config.jobs <= 1 {
        return Ok(matched.iter().map(|item| scan_one(item, config)).collect());
    }
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.jobs)
        .build()
        .map_err(|e| sloc_shared_kernel::InfrastructureError::ThreadPoolCreation {
            details: e.to_string(),
        })?;
    Ok(pool.install(|| matched.par_iter().map(|item| scan_one(item, config)).collect()))
}

#[cfg(not(feature = "parallel"))]
fn scan_all(matched: &[(PathBuf, &Language)], config: &Config) -> Result<Vec<Result<Stats>>> {
    Ok(matched.iter().map(|item| scan_one(item, config)).collect())
}
