// src/logging.rs
//! `-v` の回数からログレベルを決める

/// 詳細度に応じたフィルタ文字列
#[must_use]
pub const fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// env_logger を初期化する。`RUST_LOG` が設定されていればそちらを優先します。
pub fn init(verbose: u8) {
    let env = env_logger::Env::default().default_filter_or(level_for(verbose));
    let _ = env_logger::Builder::from_env(env).format_timestamp(None).try_init();
}
