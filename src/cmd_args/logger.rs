/*
 * Small admin API server for a mini library system
 *
 *  Copyright (C) 2025 Hiroshi KUWAGATA <kgt9221@gmail.com>
 */

//!
//! ログ機能の初期化を行うモジュール
//!

use std::sync::OnceLock;

use anyhow::Result;
use flexi_logger::{
    Cleanup, Criterion, Duplicate, FileSpec, LogSpecBuilder, Logger,
    LoggerHandle, Naming,
};

use super::Options;

/// ログローテーションの閾値(10MiB)
const LOG_ROTATE_SIZE: u64 = 10 * 1024 * 1024;

/// ローテーション後に保持するログファイル数
const LOG_KEEP_FILES: usize = 5;

/// ロガーハンドルの保持領域(drop時にロガーが停止するため保持し続ける)
static LOGGER_HANDLE: OnceLock<LoggerHandle> = OnceLock::new();

///
/// ログ機能の初期化
///
/// # 概要
/// オプション情報に従いロガーを構成する。ログレベルNONEが指定されている場合
/// は何も行わない。
///
/// # 引数
/// * `opts` - オプション情報をパックしたオブジェクト
///
/// # 戻り値
/// 初期化に成功した場合は`Ok(())`を返す。
///
pub(super) fn init(opts: &Options) -> Result<()> {
    let level: log::LevelFilter = opts.log_level().into();

    if level == log::LevelFilter::Off {
        return Ok(());
    }

    /*
     * ログ出力先ディレクトリの作成
     */
    std::fs::create_dir_all(opts.log_output())?;

    /*
     * ロガーの構成
     */
    let spec = LogSpecBuilder::new().default(level).build();
    let mut logger = Logger::with(spec)
        .log_to_file(
            FileSpec::default()
                .directory(opts.log_output())
                .basename(env!("CARGO_PKG_NAME")),
        )
        .rotate(
            Criterion::Size(LOG_ROTATE_SIZE),
            Naming::Numbers,
            Cleanup::KeepLogFiles(LOG_KEEP_FILES),
        )
        .format(flexi_logger::detailed_format);

    if opts.log_tee() {
        logger = logger.duplicate_to_stdout(Duplicate::All);
    }

    /*
     * ロガーの起動
     */
    let handle = logger.start()?;
    let _ = LOGGER_HANDLE.set(handle);

    Ok(())
}
