/*
 * Small admin API server for a mini library system
 *
 *  Copyright (C) 2025 Hiroshi KUWAGATA <kgt9221@gmail.com>
 */

//!
//! コンフィギュレーション情報の定義
//!

use std::default::Default;
use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

use super::{default_log_path, LogLevel};

///
/// コンフィギュレーションデータを集約する構造体
///
#[derive(Debug, Deserialize, Serialize)]
pub(super) struct Config {
    #[serde(skip)]
    config_path: Option<PathBuf>,

    /// グローバルオプションに対する情報
    global: Option<GlobalInfo>,

    /// runサブコマンド用の設定
    run: Option<RunInfo>,
}

impl Config {
    ///
    /// グローバル設定のログレベルを更新
    ///
    pub(super) fn set_log_level(&mut self, level: LogLevel) {
        let global = self.ensure_global();
        global.log_level = Some(level);
    }

    ///
    /// グローバル設定のログ出力先を更新
    ///
    pub(super) fn set_log_output(&mut self, path: PathBuf) {
        let global = self.ensure_global();
        global.log_output = Some(path);
    }

    ///
    /// runサブコマンドのバインドアドレスを更新
    ///
    pub(super) fn set_run_bind_addr(&mut self, addr: String) {
        let run = self.ensure_run();
        run.bind_addr = Some(addr);
    }

    ///
    /// runサブコマンドのバインドポートを更新
    ///
    pub(super) fn set_run_bind_port(&mut self, port: u16) {
        let run = self.ensure_run();
        run.bind_port = Some(port);
    }

    ///
    /// ログレベルへのアクセサ
    ///
    pub(super) fn log_level(&self) -> Option<LogLevel> {
        self.global
            .as_ref()
            .and_then(|global| global.log_level)
    }

    ///
    /// ログ出力先へのアクセサ
    ///
    pub(super) fn log_output(&self) -> Option<PathBuf> {
        self.global
            .as_ref()
            .and_then(|global| global.log_output.as_ref())
            .map(|path| self.resolve_path(path))
    }

    ///
    /// サブコマンドrunのバインドアドレスへのアクセサ
    ///
    pub(super) fn run_bind_addr(&self) -> Option<String> {
        self.run
            .as_ref()
            .and_then(|run| run.bind_addr.clone())
    }

    ///
    /// サブコマンドrunのバインドポートへのアクセサ
    ///
    pub(super) fn run_bind_port(&self) -> Option<u16> {
        self.run
            .as_ref()
            .and_then(|run| run.bind_port)
    }

    ///
    /// コンフィギュレーション情報の保存
    ///
    /// # 戻り値
    /// 保存に成功した場合は`Ok(())`を返す。失敗した場合はエラー情報を`Err()`で
    /// ラップして返す。
    ///
    pub(super) fn save<P>(&self, path: P) -> Result<()>
    where
        P: AsRef<Path>
    {
        if let Err(err) = std::fs::write(path, &toml::to_string(self)?) {
            Err(anyhow!("write config error: {}", err))
        } else {
            Ok(())
        }
    }

    ///
    /// グローバル設定の初期化または取得
    ///
    fn ensure_global(&mut self) -> &mut GlobalInfo {
        if self.global.is_none() {
            self.global = Some(GlobalInfo {
                log_level: None,
                log_output: None,
            });
        }

        self.global.as_mut().expect("global must be initialized")
    }

    ///
    /// run設定の初期化または取得
    ///
    fn ensure_run(&mut self) -> &mut RunInfo {
        if self.run.is_none() {
            self.run = Some(RunInfo {
                bind_addr: None,
                bind_port: None,
            });
        }

        self.run.as_mut().expect("run must be initialized")
    }

    ///
    /// コンフィギュレーションのパスに応じてパスを解決
    ///
    /// # 戻り値
    /// config.tomlが存在するディレクトリを基準に解決したパスを返す。
    ///
    fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            return path.to_path_buf();
        }

        if let Some(config_path) = &self.config_path {
            if let Some(parent) = config_path.parent() {
                return Self::normalize_path(parent.join(path));
            }
        }

        path.to_path_buf()
    }

    fn normalize_path(path: PathBuf) -> PathBuf {
        let mut result = PathBuf::new();
        let mut segments: Vec<OsString> = Vec::new();
        let mut prefix: Option<std::path::PrefixComponent<'_>> = None;
        let mut has_root = false;

        for component in path.components() {
            match component {
                Component::Prefix(value) => prefix = Some(value),
                Component::RootDir => has_root = true,
                Component::CurDir => {}
                Component::ParentDir => {
                    if segments.pop().is_none() && !has_root {
                        segments.push(OsString::from(".."));
                    }
                }
                Component::Normal(value) => segments.push(value.to_os_string()),
            }
        }

        if let Some(value) = prefix {
            result.push(value.as_os_str());
        }

        if has_root {
            result.push(Path::new("/"));
        }

        for segment in segments {
            result.push(segment);
        }

        result
    }
}

// Defaultトレイトの実装
impl Default for Config {
    fn default() -> Self {
        Self {
            config_path: None,
            global: Some(GlobalInfo {
                log_level: Some(LogLevel::Info),
                log_output: Some(default_log_path()),
            }),

            run: Some(RunInfo {
                bind_addr: Some("0.0.0.0".to_string()),
                bind_port: Some(8080),
            }),
        }
    }
}

///
/// グローバル設定を格納する構造体
///
#[derive(Debug, Deserialize, Serialize)]
struct GlobalInfo {
    /// ログレベル
    log_level: Option<LogLevel>,

    /// ログの出力先
    log_output: Option<PathBuf>,
}

///
/// runサブコマンドの設定情報
///
#[derive(Debug, Deserialize, Serialize)]
struct RunInfo {
    /// バインド先のアドレス
    bind_addr: Option<String>,

    /// バインド先のポート番号
    bind_port: Option<u16>,
}

///
/// コンフィギュレーション情報の読み込み
///
pub(super) fn load<P>(path: P) -> Result<Config>
where
    P: AsRef<Path>
{
    let path = path.as_ref();
    let mut config: Config = toml::from_str(&std::fs::read_to_string(path)?)?;
    config.config_path = Some(path.to_path_buf());
    Ok(config)
}
