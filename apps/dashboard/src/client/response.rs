//! バックエンド API レスポンスの共通ハンドリング

use reqwest::header::{CONTENT_TYPE, HeaderMap};
use serde::de::DeserializeOwned;

use super::error::FetchError;

/// Content-Type が JSON を示しているか
///
/// メディアタイプ本体（`;` より前）が `application/json` か、
/// `application/problem+json` のような `+json` 接尾辞を持つ場合に真。
pub fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(value) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };

    let essence = value
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json" || essence.ends_with("+json")
}

/// レスポンスを期待する型にデコードする
///
/// - 2xx: ボディを JSON として `T` にデシリアライズする（Content-Type は問わない）
/// - 非 2xx かつ JSON: ボディをパースし、その値を `FetchError::Api` で返す
/// - 非 2xx かつ JSON 以外: ボディを読まずに `FetchError::RequestFailed` を返す
pub async fn decode_response<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, FetchError> {
    let status = response.status();

    if status.is_success() {
        let bytes = response.bytes().await?;
        return serde_json::from_slice::<T>(&bytes)
            .map_err(|e| FetchError::Decode(e.to_string()));
    }

    if is_json_content_type(response.headers()) {
        let bytes = response.bytes().await?;
        let body = serde_json::from_slice::<serde_json::Value>(&bytes)
            .map_err(|e| FetchError::Decode(e.to_string()))?;
        return Err(FetchError::Api { status, body });
    }

    Err(FetchError::RequestFailed { status })
}
