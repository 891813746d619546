/*
 * Small admin API server for a mini library system
 *
 *  Copyright (C) 2025 Hiroshi KUWAGATA <kgt9221@gmail.com>
 */

//!
//! HTTPサーバに関する処理を集約するモジュール
//!

pub(crate) mod logger;

use std::time::Duration;

use anyhow::Result;
use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use log::{info, warn};
use tokio::runtime::Builder;
use tokio::time;

use crate::rest_api;

use self::logger::AccessLogger;

/// ブラウザ起動までの待ち時間
const BROWSER_OPEN_DELAY: Duration = Duration::from_millis(500);

pub(crate) fn run(addr: String, port: u16, open_browser: bool) -> Result<()> {
    /*
     * Tokioランタイムの構築
     */
    let rt = Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("tokio runtime failed");

    /*
     * サーバインスタンスの生成
     */
    let server = create_server(&addr, port)?;

    /*
     * ブラウザ起動タスクの起動
     */
    if open_browser {
        rt.spawn(open_browser_task(addr.clone(), port));
    }

    /*
     * Tokioランタイムでのサーバの起動
     */
    info!("HTTP server start");

    match rt.block_on(async {server.await}) {
        Ok(()) => {
            info!("HTTP server exit");
            Ok(())
        }

        Err(err) => {
            info!("HTTP server failed");
            Err(err.into())
        }
    }
}

///
/// HTTPサーバーの生成
///
/// # 引数
/// * `addr` - サーバーをバインドさせるアドレス
/// * `port` - サーバーをバインドさせるポート番号
///
fn create_server(addr: &str, port: u16) -> Result<Server> {
    let server = HttpServer::new(|| {
        App::new()
            // ロガーの設定
            .wrap(AccessLogger::new())

            // root空間に展開されるエンドポイント設定
            .route("/", web::get().to(rest_api::greeting::get))
    })
    .bind(format!("{}:{}", addr, port))?;

    Ok(server.run())
}

///
/// ブラウザ起動タスク
///
/// # 概要
/// サーバの起動完了を少し待ってから、デフォルトブラウザでサービスのルート
/// URLを開く。
///
async fn open_browser_task(addr: String, port: u16) {
    /*
     * サーバ起動完了までの猶予待ち
     */
    time::sleep(BROWSER_OPEN_DELAY).await;

    /*
     * 接続先URLの組み立て
     */
    let host = if addr == "0.0.0.0" || addr == "::" {
        "127.0.0.1".to_string()
    } else if addr.contains(':') {
        format!("[{}]", addr)
    } else {
        addr
    };
    let url = format!("http://{}:{}/", host, port);

    if let Err(err) = webbrowser::open(&url) {
        warn!("browser open failed: {}", err);
    }
}
