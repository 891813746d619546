/*
 * Small admin API server for a mini library system
 *
 *  Copyright (C) 2025 Hiroshi KUWAGATA <kgt9221@gmail.com>
 */

//!
//! ルートエンドポイントの実装を行うモジュール
//!

use actix_web::HttpResponse;

use super::resp_200;

/// ルートエンドポイントが返す挨拶文字列
const GREETING: &str = "Hello, Library Mini Admin API!";

///
/// GET / の実体
///
/// # 概要
/// アプリケーション動作確認用APIとして、固定の挨拶文字列を返す。クエリ
/// パラメータおよびヘッダは参照しない。
///
/// # APIレスポンスの種別
/// text/plain
///
/// # 戻り値
/// actix-webのレスポンスオブジェクト
///
pub(crate) async fn get() -> actix_web::Result<HttpResponse> {
    Ok(resp_200(GREETING))
}
