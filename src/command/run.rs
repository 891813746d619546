/*
 * Small admin API server for a mini library system
 *
 *  Copyright (C) 2025 Hiroshi KUWAGATA <kgt9221@gmail.com>
 */

//!
//! サブコマンドrunの実装
//!

use anyhow::Result;

use crate::cmd_args::{Options, RunOpts};
use crate::http_server;
use super::CommandContext;

///
/// runサブコマンドのコンテキスト情報をパックした構造体
///
struct RunCommandContext {
    /// バインド先のアドレス
    bind_addr: String,

    /// バインド先のポート番号
    bind_port: u16,

    /// 起動時にブラウザを開くか否かのフラグ
    open_browser: bool,
}

impl RunCommandContext {
    ///
    /// オブジェクトの生成
    ///
    fn new(_opts: &Options, sub_opts: &RunOpts) -> Result<Self> {
        /*
         * オプションの集約
         */
        Ok(Self {
            bind_addr: sub_opts.bind_addr(),
            bind_port: sub_opts.bind_port(),
            open_browser: sub_opts.is_browser_open(),
        })
    }
}

// トレイトCommandContextの実装
impl CommandContext for RunCommandContext {
    fn exec(&self) -> Result<()> {
        /*
         * HTTPサーバの起動
         */
        http_server::run(
            self.bind_addr.clone(),
            self.bind_port,
            self.open_browser,
        )
    }
}

///
/// コマンドコンテキストの生成
///
pub(crate) fn build_context(opts: &Options, sub_opts: &RunOpts)
    -> Result<Box<dyn CommandContext>>
{
    Ok(Box::new(RunCommandContext::new(opts, sub_opts)?))
}
