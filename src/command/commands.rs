/*
 * Small admin API server for a mini library system
 *
 *  Copyright (C) 2025 Hiroshi KUWAGATA <kgt9221@gmail.com>
 */

//!
//! サブコマンド"commands"の実装
//!

use anyhow::Result;
use clap::CommandFactory;

use crate::cmd_args::Options;
use super::common::collect_commands;
use super::CommandContext;

///
/// "commands"サブコマンドのコンテキスト情報をパックした構造体
///
struct CommandsCommandContext;

impl CommandsCommandContext {
    ///
    /// コマンド一覧の出力
    ///
    fn print_commands() {
        let root = Options::command();
        let mut entries = Vec::new();
        collect_commands(&root, "", &mut entries);
        for entry in entries {
            println!("{:<16} {}", entry.path, entry.description);
        }
    }
}

// CommandContextの実装
impl CommandContext for CommandsCommandContext {
    fn exec(&self) -> Result<()> {
        Self::print_commands();
        Ok(())
    }
}

///
/// コマンドコンテキストの生成
///
pub(crate) fn build_context(
    _opts: &Options,
) -> Result<Box<dyn CommandContext>> {
    Ok(Box::new(CommandsCommandContext))
}
