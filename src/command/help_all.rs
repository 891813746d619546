/*
 * Small admin API server for a mini library system
 *
 *  Copyright (C) 2025 Hiroshi KUWAGATA <kgt9221@gmail.com>
 */

//!
//! サブコマンド"help-all"の実装
//!

use anyhow::Result;
use clap::CommandFactory;

use crate::cmd_args::Options;
use super::common::collect_commands;
use super::CommandContext;

///
/// "help-all"サブコマンドのコンテキスト情報をパックした構造体
///
struct HelpAllCommandContext;

impl HelpAllCommandContext {
    ///
    /// ヘルプ情報の出力
    ///
    fn print_help_all() {
        let root = Options::command();
        let mut entries = Vec::new();
        collect_commands(&root, "", &mut entries);
        for mut entry in entries {
            println!("\n----------------------------------------------");
            println!("{}\n", entry.path);
            let help = entry.command.render_long_help().to_string();
            for line in help.lines() {
                println!("  {}", line);
            }
        }
    }
}

// CommandContextの実装
impl CommandContext for HelpAllCommandContext {
    fn exec(&self) -> Result<()> {
        Self::print_help_all();
        Ok(())
    }
}

///
/// コマンドコンテキストの生成
///
pub(crate) fn build_context(
    _opts: &Options,
) -> Result<Box<dyn CommandContext>> {
    Ok(Box::new(HelpAllCommandContext))
}
