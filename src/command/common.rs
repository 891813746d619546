/*
 * Small admin API server for a mini library system
 *
 *  Copyright (C) 2025 Hiroshi KUWAGATA <kgt9221@gmail.com>
 */

//!
//! サブコマンド処理で共有するヘルパー
//!

///
/// 平坦化したコマンドツリーの1エントリ
///
pub(crate) struct CommandEntry {
    /// ルートからサブコマンドまでのパス
    pub(crate) path: String,

    /// サブコマンドの説明
    pub(crate) description: String,

    /// clapのコマンド定義
    pub(crate) command: clap::Command,
}

///
/// サブコマンドツリーの平坦化
///
/// # 引数
/// * `cmd` - 起点となるコマンド定義
/// * `prefix` - 起点までのパス
/// * `entries` - 収集先
///
pub(crate) fn collect_commands(
    cmd: &clap::Command,
    prefix: &str,
    entries: &mut Vec<CommandEntry>,
) {
    for sub in cmd.get_subcommands() {
        let name = sub.get_name();

        let path = if prefix.is_empty() {
            name.to_string()
        } else {
            format!("{} {}", prefix, name)
        };

        let description = sub
            .get_long_about()
            .or(sub.get_about())
            .map(|value| value.to_string())
            .unwrap_or_default();

        entries.push(CommandEntry {
            path: path.clone(),
            description,
            command: sub.clone(),
        });
        collect_commands(sub, &path, entries);
    }
}
