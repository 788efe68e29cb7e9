mod args;
mod value_enum;

pub use args::Args;
pub use value_enum::CliOutputFormat;

use clap::Parser;
use sloc_core::config::{Config, ConfigBuilder, WalkOptionsBuilder};
use sloc_core::language::ScanOptions;
use sloc_shared_kernel::{PresentationError, Result};
use std::path::PathBuf;

const MAX_JOBS: usize = 512;

fn validate_jobs(flag: &str, jobs: Option<usize>) -> Result<()> {
    match jobs {
        Some(j) if j == 0 || j > MAX_JOBS => Err(PresentationError::InvalidValue {
            flag: flag.to_string(),
            value: j.to_string(),
            reason: format!("must be between 1 and {MAX_JOBS}"),
        }
        .into()),
        _ => Ok(()),
    }
}

/// コマンドライン引数を解析し、コアの [`Config`] を組み立てる
///
/// # Errors
///
/// 引数の値が不正な場合。
pub fn load_config() -> Result<(Args, Config)> {
    let args = Args::parse();
    let config = build_config(&args)?;
    Ok((args, config))
}

/// 解析済みの引数を設定に変換する
///
/// # Errors
///
/// `--jobs` が範囲外の場合、またはビルダーが値を拒否した場合。
pub fn build_config(args: &Args) -> Result<Config> {
    validate_jobs("--jobs", args.jobs)?;

    let roots = if args.paths.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        args.paths.clone()
    };

    let walk = WalkOptionsBuilder::default()
        .roots(roots)
        .hidden(args.hidden)
        .follow_links(args.follow)
        .build()
        .map_err(|e| PresentationError::ConfigBuildFailed(e.to_string()))?;

    let config = ConfigBuilder::default()
        .walk(walk)
        .jobs(args.jobs.unwrap_or_else(num_cpus::get))
        .scan(ScanOptions { count_unterminated: args.count_unterminated })
        .format(args.format)
        .total_row(args.total)
        .build()
        .map_err(|e| PresentationError::ConfigBuildFailed(e.to_string()))?;

    Ok(config)
}
