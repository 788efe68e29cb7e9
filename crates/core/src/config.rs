// crates/core/src/config.rs
use derive_builder::Builder;
use std::path::PathBuf;

use crate::language::ScanOptions;
use crate::output::OutputFormat;

/// 走査オプション
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(setter(into))]
pub struct WalkOptions {
    #[builder(default = "vec![PathBuf::from(\".\")]")]
    pub roots: Vec<PathBuf>,
    /// `.` で始まるエントリも辿る
    #[builder(default)]
    pub hidden: bool,
    #[builder(default)]
    pub follow_links: bool,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            roots: vec![PathBuf::from(".")],
            hidden: false,
            follow_links: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(setter(into))]
pub struct Config {
    #[builder(default)]
    pub walk: WalkOptions,
    /// 走査スレッド数（1 なら逐次処理）
    #[builder(default = "1")]
    pub jobs: usize,
    #[builder(default)]
    pub scan: ScanOptions,
    #[builder(default = "OutputFormat::Table")]
    pub format: OutputFormat,
    #[builder(default)]
    pub total_row: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            walk: WalkOptions::default(),
            jobs: 1,
            scan: ScanOptions::default(),
            format: OutputFormat::Table,
            total_row: false,
        }
    }
}
