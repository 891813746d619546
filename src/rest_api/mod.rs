/*
 * Small admin API server for a mini library system
 *
 *  Copyright (C) 2025 Hiroshi KUWAGATA <kgt9221@gmail.com>
 */

//!
//! REST APIの実装を集約するモジュール
//!

pub(crate) mod greeting;

use actix_web::HttpResponse;

///
/// Success (200)を返す場合のレスポンスビルド関数
///
/// # 引数
/// * `body` - レスポンスのボディに設定する文字列
///
/// # 戻り値
/// レスポンスオブジェクト
///
fn resp_200<S>(body: S) -> HttpResponse
where
    S: ToString,
{
    HttpResponse::Ok()
        .content_type("text/plain")
        .body(body.to_string())
}
