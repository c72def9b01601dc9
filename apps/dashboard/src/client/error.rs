//! API クライアントのエラー型

use docketflow_shared::ErrorResponse;
use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// `fetch_json` が返すエラー
///
/// 呼び出し元はパターンマッチで失敗の種類を判別する。
///
/// | バリアント | 発生条件 |
/// |-----------|---------|
/// | `Api` | 非 2xx かつ JSON の Content-Type |
/// | `RequestFailed` | 非 2xx かつ JSON 以外の Content-Type |
/// | `Decode` | ボディが JSON として、または期待する型として解釈できない |
/// | `Network` | レスポンスを受け取る前の通信失敗 |
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    /// 構造化された API エラー
    ///
    /// `body` はレスポンスボディをパースした JSON 値そのもの。
    #[error("API エラー（{status}）")]
    Api {
        status: StatusCode,
        body:   serde_json::Value,
    },

    /// JSON ボディを伴わない失敗レスポンス
    ///
    /// メッセージは固定で、ボディは破棄される。
    #[error("Request failed")]
    RequestFailed { status: StatusCode },

    /// レスポンスボディのデコード失敗
    #[error("レスポンスのデコードに失敗しました: {0}")]
    Decode(String),

    /// ネットワークエラー
    #[error("ネットワークエラー: {0}")]
    Network(String),
}

impl FetchError {
    /// HTTP ステータス（レスポンスを受け取った場合のみ）
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api { status, .. } | Self::RequestFailed { status } => Some(*status),
            Self::Decode(_) | Self::Network(_) => None,
        }
    }

    /// API エラーのボディ
    pub fn api_body(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Api { body, .. } => Some(body),
            _ => None,
        }
    }

    /// API エラーのボディを Problem Details として解釈する
    ///
    /// ボディがその形でなければ `None`。
    pub fn problem(&self) -> Option<ErrorResponse> {
        self.api_body()
            .and_then(|body| ErrorResponse::deserialize(body).ok())
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FetchError::Decode(err.to_string())
        } else {
            FetchError::Network(err.to_string())
        }
    }
}
